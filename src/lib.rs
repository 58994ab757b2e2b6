//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 사용한다.

pub mod app;
pub mod clock;
pub mod config;
pub mod i18n;
pub mod limits_db;
pub mod logging;
pub mod projection;
pub mod report;
pub mod time_split;
pub mod ui_cli;

pub use projection::{
    project_daily_average, ComplianceClass, Condition, LimitAssessment, ProjectionError,
    ProjectionInput, ProjectionResult, RemainingCeiling, NEAR_LIMIT_RATIO,
};
pub use time_split::TimeSplit;

//! 24h 평균 농도 예측 계산기.
//!
//! 자정 이후 측정된 평균 농도(경과 구간)와 남은 시간 동안 운전할 농도(잔여 구간)를
//! 시간 가중 평균하여 하루 평균을 예측하고, 일일 배출 한계(VLE) 대비 판정과
//! 남은 시간 동안 허용되는 최대 농도를 계산한다. 입출력/로그가 없는 순수 함수다.

use thiserror::Error;

use crate::time_split::{TimeSplit, DAY_HOURS};

/// 한계 대비 이 비율 이상이면 "한계 근접"으로 분류한다.
pub const NEAR_LIMIT_RATIO: f64 = 0.8;

/// 계산을 수행할 수 없는 경우.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// 잔여 시간이 0 이하: 조정 가능한 시간이 없다.
    #[error("하루가 종료되었습니다: 조정할 잔여 시간이 없습니다 (경과 {elapsed_hours:.2} h)")]
    DayElapsed { elapsed_hours: f64 },
    /// 입력값 오류
    #[error("입력 오류: {0}")]
    InvalidInput(&'static str),
}

/// 예측 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionInput {
    /// 일일 배출 한계 [mg/m³]. 0 이하이면 판정 불가로 처리한다.
    pub limit_mg_m3: f64,
    /// 경과/잔여 시간 분할
    pub split: TimeSplit,
    /// 0h00 이후 측정 평균 농도 [mg/m³]
    pub measured_average_mg_m3: f64,
    /// 24h00까지 운전할 예정 농도 [mg/m³]
    pub proposed_mg_m3: f64,
}

/// 한계 대비 판정 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplianceClass {
    /// 예측 평균 > 한계
    Exceeded,
    /// 비율 >= 0.8 (초과는 아님)
    NearLimit,
    /// 그 외
    Compliant,
}

/// 남은 시간 동안 허용되는 최대 농도.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RemainingCeiling {
    /// 이 농도 이하로 운전하면 하루 평균이 한계 이내로 유지된다 [mg/m³]
    Allowed(f64),
    /// 잔여 구간을 0으로 운전해도 초과가 불가피하다. `raw_mg_m3`는 0 이하의 계산값.
    AlreadyExceeded { raw_mg_m3: f64 },
}

impl RemainingCeiling {
    /// 0 하한으로 클램프한 표시용 값.
    pub fn reported_mg_m3(&self) -> f64 {
        match *self {
            RemainingCeiling::Allowed(v) => v,
            RemainingCeiling::AlreadyExceeded { raw_mg_m3 } => raw_mg_m3.max(0.0),
        }
    }

    pub fn is_already_exceeded(&self) -> bool {
        matches!(self, RemainingCeiling::AlreadyExceeded { .. })
    }
}

/// 한계값 기준 평가 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LimitAssessment {
    Assessed {
        /// 예측 평균 / 한계
        ratio: f64,
        class: ComplianceClass,
        ceiling: RemainingCeiling,
    },
    /// 한계가 0 이하라 비율·판정·최대 허용 농도를 신뢰할 수 없다.
    UndefinedLimit,
}

/// 호출자가 반드시 표시해야 하는 경고 조건.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    UndefinedLimit,
    AlreadyExceeded,
}

/// 예측 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionResult {
    pub split: TimeSplit,
    /// 예측 24h 평균 [mg/m³]
    pub projected_average_mg_m3: f64,
    pub assessment: LimitAssessment,
}

impl ProjectionResult {
    pub fn ratio(&self) -> Option<f64> {
        match self.assessment {
            LimitAssessment::Assessed { ratio, .. } => Some(ratio),
            LimitAssessment::UndefinedLimit => None,
        }
    }

    /// 한계 대비 비율 [%]
    pub fn ratio_percent(&self) -> Option<f64> {
        self.ratio().map(|r| r * 100.0)
    }

    pub fn class(&self) -> Option<ComplianceClass> {
        match self.assessment {
            LimitAssessment::Assessed { class, .. } => Some(class),
            LimitAssessment::UndefinedLimit => None,
        }
    }

    pub fn max_allowed(&self) -> Option<RemainingCeiling> {
        match self.assessment {
            LimitAssessment::Assessed { ceiling, .. } => Some(ceiling),
            LimitAssessment::UndefinedLimit => None,
        }
    }

    pub fn conditions(&self) -> Vec<Condition> {
        match self.assessment {
            LimitAssessment::UndefinedLimit => vec![Condition::UndefinedLimit],
            LimitAssessment::Assessed { ceiling, .. } if ceiling.is_already_exceeded() => {
                vec![Condition::AlreadyExceeded]
            }
            LimitAssessment::Assessed { .. } => Vec::new(),
        }
    }
}

/// 비율과 초과 여부로 등급을 정한다. 초과는 엄격한 `>`, 근접은 경계 포함 `>=`.
pub fn classify(projected_mg_m3: f64, limit_mg_m3: f64, ratio: f64) -> ComplianceClass {
    if projected_mg_m3 > limit_mg_m3 {
        ComplianceClass::Exceeded
    } else if ratio >= NEAR_LIMIT_RATIO {
        ComplianceClass::NearLimit
    } else {
        ComplianceClass::Compliant
    }
}

/// 24h 평균을 예측하고 한계 대비 평가를 수행한다.
///
/// - 예측 평균 = (C_측정 × t_경과 + C_예정 × t_잔여) / 24
/// - 최대 허용 = (VLE × 24 − C_측정 × t_경과) / t_잔여
pub fn project_daily_average(input: ProjectionInput) -> Result<ProjectionResult, ProjectionError> {
    let ProjectionInput {
        limit_mg_m3,
        split,
        measured_average_mg_m3: measured,
        proposed_mg_m3: proposed,
    } = input;

    if !limit_mg_m3.is_finite() || !measured.is_finite() || !proposed.is_finite() {
        return Err(ProjectionError::InvalidInput("농도와 한계값은 유한한 수여야 합니다."));
    }
    if measured < 0.0 || proposed < 0.0 {
        return Err(ProjectionError::InvalidInput("농도는 0 이상이어야 합니다."));
    }

    let elapsed = split.elapsed_hours();
    let remaining = split.remaining_hours();
    if remaining <= 0.0 {
        return Err(ProjectionError::DayElapsed {
            elapsed_hours: elapsed,
        });
    }

    let projected = (measured * elapsed + proposed * remaining) / DAY_HOURS;

    if limit_mg_m3 <= 0.0 {
        return Ok(ProjectionResult {
            split,
            projected_average_mg_m3: projected,
            assessment: LimitAssessment::UndefinedLimit,
        });
    }

    let ratio = projected / limit_mg_m3;
    let class = classify(projected, limit_mg_m3, ratio);

    let max_allowed = (limit_mg_m3 * DAY_HOURS - measured * elapsed) / remaining;
    let ceiling = if max_allowed <= 0.0 {
        RemainingCeiling::AlreadyExceeded {
            raw_mg_m3: max_allowed,
        }
    } else {
        RemainingCeiling::Allowed(max_allowed)
    };

    Ok(ProjectionResult {
        split,
        projected_average_mg_m3: projected,
        assessment: LimitAssessment::Assessed {
            ratio,
            class,
            ceiling,
        },
    })
}

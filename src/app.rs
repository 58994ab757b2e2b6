use thiserror::Error;

use crate::clock::TimeSource;
use crate::config::{Config, ConfigError};
use crate::i18n::{self, keys, Translator};
use crate::limits_db::{LimitTable, LimitTableError};
use crate::projection::{self, ProjectionError, ProjectionInput};
use crate::report::{self, ReportLine};
use crate::time_split::{TimeSplit, TimeSplitError};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("한계 테이블 오류: {0}")]
    Limits(#[from] LimitTableError),
    #[error("시각 입력 오류: {0}")]
    Time(#[from] TimeSplitError),
    #[error("예측 계산 오류: {0}")]
    Projection(#[from] ProjectionError),
    #[error("알 수 없는 오염물질: {0}")]
    UnknownPollutant(String),
    /// 표준 입력이 닫힘(EOF)
    #[error("입력이 종료되었습니다")]
    InputClosed,
}

/// 한 번의 예측 요청. 한계는 직접 입력값이 오염물질 조회값보다 우선한다.
#[derive(Debug, Clone)]
pub struct ProjectionRequest {
    pub pollutant: Option<String>,
    pub limit_mg_m3: Option<f64>,
    pub split: TimeSplit,
    pub measured_average_mg_m3: f64,
    pub proposed_mg_m3: f64,
}

/// 표시용 이름과 한계값을 결정한다.
pub fn resolve_limit(
    table: &LimitTable,
    pollutant: Option<&str>,
    limit_override: Option<f64>,
) -> Result<(String, f64), AppError> {
    let name = pollutant.map(str::trim).unwrap_or_default();
    match (name.is_empty(), limit_override) {
        (_, Some(limit)) => Ok((name.to_string(), limit)),
        (true, None) => Err(AppError::UnknownPollutant(String::new())),
        (false, None) => {
            let entry = table
                .find(name)
                .ok_or_else(|| AppError::UnknownPollutant(name.to_string()))?;
            Ok((entry.pollutant.clone(), entry.limit_mg_m3))
        }
    }
}

/// 예측을 한 번 수행하고 표시 문장을 돌려준다.
///
/// `DayElapsed`는 표시해야 할 결과로 취급하고, 잘못된 입력만 오류로 반환한다.
pub fn project_once(
    config: &Config,
    tr: &Translator,
    request: &ProjectionRequest,
) -> Result<Vec<ReportLine>, AppError> {
    let table = config.limit_table()?;
    // 한계를 직접 입력했으면 기본 오염물질 이름을 붙이지 않는다.
    let pollutant = match (request.pollutant.as_deref(), request.limit_mg_m3) {
        (Some(p), _) => Some(p),
        (None, Some(_)) => None,
        (None, None) => Some(config.default_pollutant.as_str()),
    };
    let (name, limit) = resolve_limit(&table, pollutant, request.limit_mg_m3)?;
    tracing::debug!(
        pollutant = %name,
        limit,
        hour = request.split.decimal_hour(),
        measured = request.measured_average_mg_m3,
        proposed = request.proposed_mg_m3,
        "projecting daily average"
    );

    let outcome = projection::project_daily_average(ProjectionInput {
        limit_mg_m3: limit,
        split: request.split,
        measured_average_mg_m3: request.measured_average_mg_m3,
        proposed_mg_m3: request.proposed_mg_m3,
    });
    if let Err(e @ ProjectionError::InvalidInput(_)) = &outcome {
        return Err(AppError::Projection(e.clone()));
    }
    if let Ok(result) = &outcome {
        for condition in result.conditions() {
            tracing::warn!(pollutant = %name, ?condition, "projection condition");
        }
    }

    let limit_text = report::format_value(limit, config.decimals());
    let info = if name.is_empty() {
        tr.tf(keys::INFO_LIMIT_DIRECT, &[("limit", limit_text)])
    } else {
        tr.tf(
            keys::INFO_LIMIT,
            &[("pollutant", name), ("limit", limit_text)],
        )
    };
    let mut lines = vec![ReportLine {
        tone: report::Tone::Info,
        text: info,
    }];
    lines.extend(report::render(
        tr,
        &outcome,
        request.proposed_mg_m3,
        config.decimals(),
    ));
    Ok(lines)
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &mut Translator, clock: &dyn TimeSource) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Projection => ui_cli::handle_projection(tr, config, clock)?,
            MenuChoice::Limits => {
                if ui_cli::handle_limits(tr, config)? {
                    config.save()?;
                    println!("{}", tr.t(keys::LIMITS_SAVED));
                }
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
                let resolved = i18n::resolve_language(&config.language, None);
                *tr = Translator::new_with_pack(&resolved, config.language_pack_dir.as_deref());
                println!("{}", tr.t(keys::SETTINGS_SAVED));
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

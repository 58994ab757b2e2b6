//! 예측 결과를 화면 표시용 문장으로 변환한다. CLI와 GUI가 같은 문장을 사용한다.

use crate::i18n::{keys, Translator};
use crate::projection::{ComplianceClass, ProjectionError, ProjectionResult, RemainingCeiling};

/// 표시 색상 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub tone: Tone,
    pub text: String,
}

impl ReportLine {
    fn new(tone: Tone, text: String) -> Self {
        Self { tone, text }
    }
}

pub fn format_value(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// 비율은 정수 % 로 표시한다.
pub fn format_percent(ratio: f64) -> String {
    format!("{:.0}", ratio * 100.0)
}

pub fn class_tone(class: ComplianceClass) -> Tone {
    match class {
        ComplianceClass::Exceeded => Tone::Danger,
        ComplianceClass::NearLimit => Tone::Warning,
        ComplianceClass::Compliant => Tone::Success,
    }
}

/// 계산 결과(또는 오류)를 표시 문장 목록으로 만든다.
pub fn render(
    tr: &Translator,
    outcome: &Result<ProjectionResult, ProjectionError>,
    proposed_mg_m3: f64,
    decimals: usize,
) -> Vec<ReportLine> {
    let result = match outcome {
        Ok(r) => r,
        Err(ProjectionError::DayElapsed { .. }) => {
            return vec![ReportLine::new(
                Tone::Danger,
                tr.t(keys::REPORT_DAY_ELAPSED).to_string(),
            )]
        }
        Err(e) => {
            return vec![ReportLine::new(
                Tone::Danger,
                format!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
            )]
        }
    };

    let mut lines = vec![
        ReportLine::new(
            Tone::Info,
            tr.tf(
                keys::REPORT_TIME_SPLIT,
                &[
                    ("elapsed", format_value(result.split.elapsed_hours(), 2)),
                    ("remaining", format_value(result.split.remaining_hours(), 2)),
                ],
            ),
        ),
        ReportLine::new(
            Tone::Info,
            tr.tf(
                keys::REPORT_PROPOSED,
                &[("value", format_value(proposed_mg_m3, decimals))],
            ),
        ),
        ReportLine::new(
            Tone::Info,
            tr.tf(
                keys::REPORT_PROJECTED,
                &[(
                    "value",
                    format_value(result.projected_average_mg_m3, decimals),
                )],
            ),
        ),
    ];

    let (Some(ratio), Some(class), Some(ceiling)) =
        (result.ratio(), result.class(), result.max_allowed())
    else {
        lines.push(ReportLine::new(
            Tone::Warning,
            tr.t(keys::REPORT_UNDEFINED_LIMIT).to_string(),
        ));
        return lines;
    };

    let class_key = match class {
        ComplianceClass::Exceeded => keys::REPORT_EXCEEDED,
        ComplianceClass::NearLimit => keys::REPORT_NEAR_LIMIT,
        ComplianceClass::Compliant => keys::REPORT_COMPLIANT,
    };
    lines.push(ReportLine::new(
        class_tone(class),
        tr.tf(class_key, &[("ratio", format_percent(ratio))]),
    ));

    match ceiling {
        RemainingCeiling::Allowed(v) => lines.push(ReportLine::new(
            Tone::Info,
            tr.tf(keys::REPORT_MAX_ALLOWED, &[("value", format_value(v, decimals))]),
        )),
        RemainingCeiling::AlreadyExceeded { .. } => lines.push(ReportLine::new(
            Tone::Danger,
            tr.t(keys::REPORT_ALREADY_EXCEEDED).to_string(),
        )),
    }
    lines
}

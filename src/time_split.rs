//! 하루(0h~24h)를 경과 구간과 잔여 구간으로 나누는 시간 분할 값.

use thiserror::Error;

/// 하루의 길이 [h]
pub const DAY_HOURS: f64 = 24.0;

/// 시간 입력 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimeSplitError {
    #[error("시(hour)는 0~23 범위여야 합니다: {0}")]
    HourOutOfRange(u32),
    #[error("분(minute)은 0~59 범위여야 합니다: {0}")]
    MinuteOutOfRange(u32),
    #[error("시각은 0 이상의 유한한 값이어야 합니다: {0}")]
    InvalidHour(f64),
    #[error("시각 형식을 해석할 수 없습니다: {0:?} (예: 14:30)")]
    Parse(String),
}

/// 자정 기준 경과 시간과 24시까지 남은 시간.
///
/// `elapsed_hours() + remaining_hours()`는 항상 정확히 24가 된다.
/// 24h 이상의 시각도 허용하며, 이때 잔여 시간은 0 이하가 되어
/// 계산기가 `DayElapsed`를 반환하게 된다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSplit {
    hour: f64,
    remaining: f64,
}

impl TimeSplit {
    /// 시/분 입력으로부터 분할을 만든다.
    pub fn from_clock(hour: u32, minute: u32) -> Result<Self, TimeSplitError> {
        if hour > 23 {
            return Err(TimeSplitError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeSplitError::MinuteOutOfRange(minute));
        }
        Self::at_hour(hour as f64 + minute as f64 / 60.0)
    }

    /// 소수 시각(예: 14.5 = 14h30)으로부터 분할을 만든다.
    pub fn at_hour(decimal_hour: f64) -> Result<Self, TimeSplitError> {
        if !decimal_hour.is_finite() || decimal_hour < 0.0 {
            return Err(TimeSplitError::InvalidHour(decimal_hour));
        }
        Ok(Self {
            hour: decimal_hour,
            remaining: DAY_HOURS - decimal_hour,
        })
    }

    pub fn decimal_hour(&self) -> f64 {
        self.hour
    }

    /// 0h00부터 현재 시각까지 [h]
    pub fn elapsed_hours(&self) -> f64 {
        self.hour
    }

    /// 현재 시각부터 24h00까지 [h]
    pub fn remaining_hours(&self) -> f64 {
        self.remaining
    }

    /// 조정 가능한 잔여 시간이 없으면 true.
    pub fn is_day_over(&self) -> bool {
        self.remaining <= 0.0
    }

    /// 표시용 시:분. 24h를 넘는 값은 그대로 시 단위로 표시된다.
    pub fn clock_parts(&self) -> (u32, u32) {
        let total_min = (self.hour * 60.0).round() as u32;
        (total_min / 60, total_min % 60)
    }
}

/// "14:30", "14h30", "14" 형식의 시각 문자열을 해석한다.
pub fn parse_clock(text: &str) -> Result<TimeSplit, TimeSplitError> {
    let s = text.trim();
    let parse_err = || TimeSplitError::Parse(text.to_string());
    let (h, m) = match s.split_once([':', 'h', 'H']) {
        Some((h, m)) => (h.trim(), m.trim()),
        None => (s, ""),
    };
    let hour: u32 = h.parse().map_err(|_| parse_err())?;
    let minute: u32 = if m.is_empty() {
        0
    } else {
        m.parse().map_err(|_| parse_err())?
    };
    TimeSplit::from_clock(hour, minute)
}

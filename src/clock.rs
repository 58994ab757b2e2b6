//! 현재 시각 공급자. 계산 코어는 시계를 직접 읽지 않고 소수 시각만 받는다.

use chrono::{Local, Timelike};

/// 소수 시각(0.0 이상 24.0 미만)을 제공하는 시간 소스.
pub trait TimeSource {
    fn decimal_hour(&self) -> f64;
}

/// 로컬 벽시계를 읽는다.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn decimal_hour(&self) -> f64 {
        let now = Local::now();
        now.hour() as f64 + now.minute() as f64 / 60.0
    }
}

/// 고정 시각. `--time` 인자나 테스트에서 사용한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTime(pub f64);

impl TimeSource for FixedTime {
    fn decimal_hour(&self) -> f64 {
        self.0
    }
}

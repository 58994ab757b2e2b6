use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::limits_db::{LimitEntry, LimitTable, LimitTableError};

/// 기본 설정 파일 경로
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다. 누락된 키는 기본값으로 채운다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(auto/ko/en/fr)
    pub language: String,
    /// 사용자 언어팩 디렉터리
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_pack_dir: Option<String>,
    /// 결과 표시 소수 자릿수(1~2)
    pub display_decimals: u8,
    /// 예정 농도 입력 상한 [mg/m³]
    pub proposed_max_mg_m3: f64,
    pub default_pollutant: String,
    pub default_hour: u32,
    pub default_minute: u32,
    /// 자정 이후 측정 평균 초기값 [mg/m³]
    pub default_measured_mg_m3: f64,
    /// 비어 있으면 내장 한계 테이블을 사용한다.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub limits: Vec<LimitEntry>,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            display_decimals: 2,
            proposed_max_mg_m3: 200.0,
            default_pollutant: "CO".into(),
            default_hour: 14,
            default_minute: 0,
            default_measured_mg_m3: 40.0,
            limits: Vec::new(),
            path: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("설정의 한계 테이블 오류: {0}")]
    Limits(#[from] LimitTableError),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_at(Path::new(DEFAULT_CONFIG_PATH))
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본값을 저장한 뒤 반환한다.
pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    let mut cfg = if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        // 한계 테이블은 로드 시점에 검증한다.
        cfg.limit_table()?;
        tracing::debug!(path = %path.display(), "config loaded");
        cfg
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        tracing::info!(path = %path.display(), "default config created");
        cfg
    };
    cfg.path = Some(path.to_path_buf());
    Ok(cfg)
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 로드한 경로(없으면 config.toml)에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = self
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        save_config(self, &path)?;
        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// 설정에 지정된 한계 테이블, 없으면 내장 테이블.
    pub fn limit_table(&self) -> Result<LimitTable, LimitTableError> {
        if self.limits.is_empty() {
            Ok(LimitTable::default())
        } else {
            LimitTable::new(self.limits.clone())
        }
    }

    /// 한계 테이블을 설정에 기록한다.
    pub fn set_limit_table(&mut self, table: &LimitTable) {
        self.limits = table.entries().to_vec();
    }

    /// 표시 소수 자릿수. 범위를 벗어난 값은 1~2로 맞춘다.
    pub fn decimals(&self) -> usize {
        self.display_decimals.clamp(1, 2) as usize
    }

    /// 입력된 소수 자릿수를 적용한다. 1 또는 2의 정수만 받는다.
    pub fn set_display_decimals(&mut self, value: f64) -> bool {
        if value.fract() == 0.0 && (1.0..=2.0).contains(&value) {
            self.display_decimals = value as u8;
            true
        } else {
            false
        }
    }

    /// 예정 농도 입력 상한. 0 이하나 비정상 값이면 기본 200으로 본다.
    pub fn proposed_ceiling(&self) -> f64 {
        if self.proposed_max_mg_m3.is_finite() && self.proposed_max_mg_m3 > 0.0 {
            self.proposed_max_mg_m3
        } else {
            200.0
        }
    }

    /// 입력값을 0..=상한 범위로 맞춘다.
    pub fn clamp_proposed(&self, value: f64) -> f64 {
        if value.is_nan() {
            return 0.0;
        }
        value.clamp(0.0, self.proposed_ceiling())
    }
}

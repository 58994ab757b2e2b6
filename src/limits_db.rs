//! 오염물질별 24h 배출 한계(VLE) 테이블.
//! 기본값은 소각 시설용 참고값이며, 규제 개정 시 config.toml 또는 별도 TOML 파일로 교체한다.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// 기본 테이블: (오염물질, 한계 [mg/m³])
const BUILT_IN: &[(&str, f64)] = &[
    ("CO", 50.0),
    ("COT", 10.0),
    ("NOx", 150.0),
    ("SO2", 40.0),
    ("HCl", 8.0),
    ("HF", 1.0),
    ("Dust", 5.0),
    ("Mercury", 20.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitEntry {
    pub pollutant: String,
    pub limit_mg_m3: f64,
}

/// 한계 테이블 로드/검증 오류.
#[derive(Debug, Error)]
pub enum LimitTableError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("한계 테이블 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("한계 테이블 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("{pollutant}의 한계값이 올바르지 않습니다: {limit_mg_m3}")]
    InvalidLimit { pollutant: String, limit_mg_m3: f64 },
    #[error("중복된 오염물질: {0}")]
    Duplicate(String),
    #[error("한계 테이블이 비어 있습니다")]
    Empty,
}

/// 순서를 유지하는 오염물질 → 한계 매핑.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitTable {
    #[serde(rename = "limits")]
    entries: Vec<LimitEntry>,
}

impl Default for LimitTable {
    fn default() -> Self {
        Self {
            entries: BUILT_IN
                .iter()
                .map(|(name, limit)| LimitEntry {
                    pollutant: (*name).to_string(),
                    limit_mg_m3: *limit,
                })
                .collect(),
        }
    }
}

impl LimitTable {
    /// 항목을 검증하여 테이블을 만든다. 한계는 유한한 양수, 이름은 대소문자 무시 고유,
    /// 최소 한 항목 이상.
    pub fn new(entries: Vec<LimitEntry>) -> Result<Self, LimitTableError> {
        let table = Self { entries };
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<(), LimitTableError> {
        // 빈 limits는 config.toml에서 "내장 테이블 사용"을 뜻한다.
        if self.entries.is_empty() {
            return Err(LimitTableError::Empty);
        }
        for (i, e) in self.entries.iter().enumerate() {
            if !e.limit_mg_m3.is_finite() || e.limit_mg_m3 <= 0.0 {
                return Err(LimitTableError::InvalidLimit {
                    pollutant: e.pollutant.clone(),
                    limit_mg_m3: e.limit_mg_m3,
                });
            }
            if self.entries[..i]
                .iter()
                .any(|p| p.pollutant.eq_ignore_ascii_case(&e.pollutant))
            {
                return Err(LimitTableError::Duplicate(e.pollutant.clone()));
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> &[LimitEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.pollutant.as_str())
    }

    pub fn find(&self, pollutant: &str) -> Option<&LimitEntry> {
        let key = pollutant.trim();
        self.entries
            .iter()
            .find(|e| e.pollutant.eq_ignore_ascii_case(key))
    }

    pub fn limit_for(&self, pollutant: &str) -> Option<f64> {
        self.find(pollutant).map(|e| e.limit_mg_m3)
    }

    /// 기존 항목을 갱신하거나 끝에 추가한다.
    pub fn upsert(&mut self, pollutant: &str, limit_mg_m3: f64) -> Result<(), LimitTableError> {
        if !limit_mg_m3.is_finite() || limit_mg_m3 <= 0.0 {
            return Err(LimitTableError::InvalidLimit {
                pollutant: pollutant.to_string(),
                limit_mg_m3,
            });
        }
        let key = pollutant.trim();
        match self
            .entries
            .iter_mut()
            .find(|e| e.pollutant.eq_ignore_ascii_case(key))
        {
            Some(e) => e.limit_mg_m3 = limit_mg_m3,
            None => self.entries.push(LimitEntry {
                pollutant: key.to_string(),
                limit_mg_m3,
            }),
        }
        Ok(())
    }

    /// `[[limits]]` 배열 형식의 TOML을 읽는다.
    pub fn from_toml_str(src: &str) -> Result<Self, LimitTableError> {
        let table: LimitTable = toml::from_str(src)?;
        table.validate()?;
        Ok(table)
    }

    pub fn load(path: &Path) -> Result<Self, LimitTableError> {
        let content = fs::read_to_string(path)?;
        let table = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), count = table.entries.len(), "limit table loaded");
        Ok(table)
    }

    pub fn to_toml_string(&self) -> Result<String, LimitTableError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

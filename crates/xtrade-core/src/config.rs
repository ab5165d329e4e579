//! 설정 관리.
//!
//! TOML 파일과 `XTRADE__` 접두사 환경 변수에서 설정을 읽습니다.

use crate::error::TraderResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 거래소 메타데이터 설정
    #[serde(default)]
    pub exchange: ExchangeMetaConfig,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 거래소 메타데이터 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExchangeMetaConfig {
    /// 거래소 이름
    #[serde(default = "default_exchange_name")]
    pub name: String,
    /// 통화쌍별 메타데이터 ("BASE/QUOTE" 키)
    #[serde(default)]
    pub pairs: HashMap<String, PairMetaConfig>,
}

impl Default for ExchangeMetaConfig {
    fn default() -> Self {
        Self {
            name: default_exchange_name(),
            pairs: HashMap::new(),
        }
    }
}

fn default_exchange_name() -> String {
    "anx".to_string()
}

/// 통화쌍 메타데이터.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PairMetaConfig {
    /// 가격 소수점 최대 자릿수
    pub price_scale: u32,
    /// 최소 주문 수량
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<Decimal>,
    /// 최대 주문 수량
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<Decimal>,
}

impl PairMetaConfig {
    pub fn new(price_scale: u32) -> Self {
        Self {
            price_scale,
            min_amount: None,
            max_amount: None,
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> TraderResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("XTRADE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> TraderResult<Self> {
        Self::load("config/default.toml")
    }

    /// TOML 문자열에서 설정을 파싱합니다.
    pub fn from_toml_str(toml: &str) -> TraderResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

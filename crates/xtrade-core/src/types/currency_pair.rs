//! 통화쌍 정의.
//!
//! 거래 가능한 상품을 기준 통화와 호가 통화의 쌍으로 표현합니다.
//! 예: BTC/EUR, LTC/BTC.

use crate::error::TraderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 거래 가능한 상품을 나타내는 통화쌍.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// 기준 통화 (예: BTC)
    pub base: String,
    /// 호가 통화 (예: EUR)
    pub quote: String,
}

impl CurrencyPair {
    /// 새 통화쌍을 생성합니다. 통화 코드는 대문자로 정규화됩니다.
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            base: base.into().to_uppercase(),
            quote: quote.into().to_uppercase(),
        }
    }

    /// "BASE/QUOTE" 형식 문자열에서 통화쌍을 파싱합니다.
    pub fn from_string(s: &str) -> Option<Self> {
        let (base, quote) = s.split_once('/')?;
        let (base, quote) = (base.trim(), quote.trim());
        if base.is_empty() || quote.is_empty() || quote.contains('/') {
            return None;
        }
        Some(Self::new(base, quote))
    }

    /// 표준 문자열 형식("BASE/QUOTE")을 반환합니다.
    pub fn to_standard_string(&self) -> String {
        format!("{}/{}", self.base, self.quote)
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

impl FromStr for CurrencyPair {
    type Err = TraderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
            .ok_or_else(|| TraderError::InvalidInput(format!("Invalid currency pair: {}", s)))
    }
}

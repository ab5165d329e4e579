//! ANX 거래소 메타데이터.
//!
//! 통화쌍별 가격 정밀도와 주문 수량 한도를 보관합니다.
//! 메타데이터에 없는 통화쌍은 호가 통화 기준 기본 규칙을 따릅니다:
//! 암호화폐 호가는 8자리, 법정화폐 호가는 5자리.

use std::collections::HashMap;

use xtrade_core::{CurrencyPair, ExchangeMetaConfig, PairMetaConfig, TraderResult};

use crate::traits::PriceScaleProvider;

/// 암호화폐 호가 통화의 가격 자릿수.
pub const CRYPTO_QUOTE_PRICE_SCALE: u32 = 8;

/// 법정화폐 호가 통화의 가격 자릿수.
pub const FIAT_QUOTE_PRICE_SCALE: u32 = 5;

const CRYPTO_QUOTES: [&str; 7] = ["BTC", "LTC", "DOGE", "STR", "XRP", "NMC", "PPC"];

/// 호가 통화로부터 기본 가격 자릿수를 결정합니다.
pub fn default_max_price_scale(pair: &CurrencyPair) -> u32 {
    if CRYPTO_QUOTES.contains(&pair.quote.as_str()) {
        CRYPTO_QUOTE_PRICE_SCALE
    } else {
        FIAT_QUOTE_PRICE_SCALE
    }
}

/// ANX 통화쌍 메타데이터 모음.
#[derive(Debug, Clone, Default)]
pub struct AnxMetaData {
    pairs: HashMap<CurrencyPair, PairMetaConfig>,
}

impl AnxMetaData {
    pub fn new() -> Self {
        Self::default()
    }

    /// 통화쌍 메타데이터를 추가합니다.
    pub fn with_pair(mut self, pair: CurrencyPair, meta: PairMetaConfig) -> Self {
        self.pairs.insert(pair, meta);
        self
    }

    /// 설정에서 메타데이터를 생성합니다.
    ///
    /// # Errors
    /// 통화쌍 키가 "BASE/QUOTE" 형식이 아니면 `TraderError::InvalidInput`을 반환합니다.
    pub fn from_config(config: &ExchangeMetaConfig) -> TraderResult<Self> {
        let pairs = config
            .pairs
            .iter()
            .map(|(key, meta)| -> TraderResult<(CurrencyPair, PairMetaConfig)> {
                Ok((key.parse()?, meta.clone()))
            })
            .collect::<TraderResult<HashMap<_, _>>>()?;

        Ok(Self { pairs })
    }

    /// 통화쌍 메타데이터 조회.
    pub fn pair(&self, pair: &CurrencyPair) -> Option<&PairMetaConfig> {
        self.pairs.get(pair)
    }

    /// 등록된 통화쌍 목록.
    pub fn currency_pairs(&self) -> impl Iterator<Item = &CurrencyPair> {
        self.pairs.keys()
    }
}

impl PriceScaleProvider for AnxMetaData {
    fn max_price_scale(&self, pair: &CurrencyPair) -> u32 {
        self.pair(pair)
            .map(|meta| meta.price_scale)
            .unwrap_or_else(|| default_max_price_scale(pair))
    }
}

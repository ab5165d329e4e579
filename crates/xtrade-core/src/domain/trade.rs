//! 체결 내역.
//!
//! 거래소 응답에서 변환된 사용자 체결 기록을 정의합니다:
//! - `UserTrade` - 개별 체결 기록
//! - `UserTrades` - 조회 결과 목록

use crate::domain::OrderSide;
use crate::types::{CurrencyPair, Price, Quantity};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 사용자 계좌의 체결 기록.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTrade {
    /// 체결 방향
    pub side: OrderSide,
    /// 체결 수량
    pub tradable_amount: Quantity,
    /// 거래 통화쌍
    pub currency_pair: CurrencyPair,
    /// 체결 가격 (통화쌍 정밀도로 정규화됨)
    pub price: Price,
    /// 체결 시각
    pub timestamp: DateTime<Utc>,
    /// 거래소 체결 ID
    pub id: String,
    /// 거래소 주문 ID
    pub order_id: String,
    /// 수수료
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_amount: Option<Decimal>,
    /// 수수료 통화
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_currency: Option<String>,
}

impl UserTrade {
    /// 체결의 명목 가치를 반환합니다.
    pub fn notional_value(&self) -> Decimal {
        self.price * self.tradable_amount
    }
}

/// 체결 내역 조회 결과.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserTrades {
    /// 거래소가 반환한 순서 그대로의 체결 목록
    pub trades: Vec<UserTrade>,
}

impl UserTrades {
    pub fn new(trades: Vec<UserTrade>) -> Self {
        Self { trades }
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserTrade> {
        self.trades.iter()
    }

    /// 특정 통화쌍의 체결만 반환합니다.
    pub fn for_pair<'a>(&'a self, pair: &'a CurrencyPair) -> impl Iterator<Item = &'a UserTrade> {
        self.trades.iter().filter(move |t| &t.currency_pair == pair)
    }

    /// 전체 체결 수량 합계를 반환합니다.
    pub fn total_amount(&self) -> Quantity {
        self.trades.iter().map(|t| t.tradable_amount).sum()
    }
}

impl IntoIterator for UserTrades {
    type Item = UserTrade;
    type IntoIter = std::vec::IntoIter<UserTrade>;

    fn into_iter(self) -> Self::IntoIter {
        self.trades.into_iter()
    }
}

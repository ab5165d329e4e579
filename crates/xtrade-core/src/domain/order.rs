//! 주문 타입.
//!
//! 이 모듈은 거래소 중립적인 주문 타입을 정의합니다:
//! - `OrderSide` - 주문 방향 (bid/ask)
//! - `MarketOrder` - 시장가 주문 요청
//! - `LimitOrder` - 지정가 주문 (요청 및 미체결 주문 표현)
//! - `OpenOrders` - 미체결 주문 목록

use crate::types::{CurrencyPair, Price, Quantity};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 주문 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// 매수 호가
    Bid,
    /// 매도 호가
    Ask,
}

impl OrderSide {
    /// 반대 방향을 반환합니다.
    pub fn opposite(&self) -> Self {
        match self {
            OrderSide::Bid => OrderSide::Ask,
            OrderSide::Ask => OrderSide::Bid,
        }
    }

    /// 소문자 와이어 표기("bid"/"ask")를 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Bid => "bid",
            OrderSide::Ask => "ask",
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 시장가 주문 요청.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketOrder {
    /// 주문 방향
    pub side: OrderSide,
    /// 거래 통화쌍
    pub currency_pair: CurrencyPair,
    /// 거래 수량
    pub tradable_amount: Quantity,
}

impl MarketOrder {
    /// 새 시장가 주문을 생성합니다.
    pub fn new(side: OrderSide, currency_pair: CurrencyPair, tradable_amount: Quantity) -> Self {
        Self {
            side,
            currency_pair,
            tradable_amount,
        }
    }

    /// 시장가 매수 주문을 생성합니다.
    pub fn bid(currency_pair: CurrencyPair, tradable_amount: Quantity) -> Self {
        Self::new(OrderSide::Bid, currency_pair, tradable_amount)
    }

    /// 시장가 매도 주문을 생성합니다.
    pub fn ask(currency_pair: CurrencyPair, tradable_amount: Quantity) -> Self {
        Self::new(OrderSide::Ask, currency_pair, tradable_amount)
    }
}

/// 지정가 주문.
///
/// 주문 제출 요청과 거래소에서 조회한 미체결 주문을 모두 표현합니다.
/// `id`와 `timestamp`는 거래소가 부여하며 제출 전에는 비어 있습니다.
/// 수량과 가격은 제출 시 검증 단계에서 필수 여부를 확인합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitOrder {
    /// 주문 방향
    pub side: OrderSide,
    /// 거래 통화쌍
    pub currency_pair: CurrencyPair,
    /// 거래 수량
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tradable_amount: Option<Quantity>,
    /// 지정가
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<Price>,
    /// 거래소 주문 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 주문 생성 시각
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl LimitOrder {
    /// 새 지정가 주문 요청을 생성합니다.
    pub fn new(
        side: OrderSide,
        currency_pair: CurrencyPair,
        tradable_amount: Quantity,
        limit_price: Price,
    ) -> Self {
        Self {
            side,
            currency_pair,
            tradable_amount: Some(tradable_amount),
            limit_price: Some(limit_price),
            id: None,
            timestamp: None,
        }
    }

    /// 지정가 매수 주문을 생성합니다.
    pub fn bid(currency_pair: CurrencyPair, tradable_amount: Quantity, limit_price: Price) -> Self {
        Self::new(OrderSide::Bid, currency_pair, tradable_amount, limit_price)
    }

    /// 지정가 매도 주문을 생성합니다.
    pub fn ask(currency_pair: CurrencyPair, tradable_amount: Quantity, limit_price: Price) -> Self {
        Self::new(OrderSide::Ask, currency_pair, tradable_amount, limit_price)
    }

    /// 거래소 주문 ID를 설정합니다.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// 주문 생성 시각을 설정합니다.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// 주문의 명목 가치를 계산합니다.
    pub fn notional_value(&self) -> Option<Decimal> {
        Some(self.tradable_amount? * self.limit_price?)
    }
}

/// 계좌의 미체결 주문 목록.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenOrders {
    /// 거래소가 반환한 순서 그대로의 미체결 주문
    pub open_orders: Vec<LimitOrder>,
}

impl OpenOrders {
    pub fn new(open_orders: Vec<LimitOrder>) -> Self {
        Self { open_orders }
    }

    pub fn len(&self) -> usize {
        self.open_orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open_orders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LimitOrder> {
        self.open_orders.iter()
    }
}

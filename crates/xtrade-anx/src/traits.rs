//! 퍼사드와 외부 협력자 사이의 trait 정의.

use async_trait::async_trait;
use rust_decimal::Decimal;
use xtrade_core::{
    CurrencyPair, LimitOrder, MarketOrder, OpenOrders, OpenOrdersQuery, TradeHistoryQuery,
    UserTrades,
};

use crate::error::{ExchangeResult, TradeServiceResult};
use crate::wire::{AnxGenericResponse, AnxOpenOrder, AnxTradeResultWrapper};

/// 인증된 ANX API 호출을 수행하는 원시 클라이언트.
///
/// 전송, 서명, 역직렬화, 재시도 및 요청 한도 관리는 구현체의 책임입니다.
#[async_trait]
pub trait AnxRawClient: Send + Sync {
    /// 계좌의 모든 미체결 주문 조회.
    async fn fetch_open_orders(&self) -> ExchangeResult<Vec<AnxOpenOrder>>;

    /// 시장가 주문 제출. `side`는 "bid" 또는 "ask".
    async fn place_market_order(
        &self,
        pair: &CurrencyPair,
        side: &str,
        amount: Decimal,
    ) -> ExchangeResult<AnxGenericResponse>;

    /// 지정가 주문 제출. `side`는 "bid" 또는 "ask".
    async fn place_limit_order(
        &self,
        pair: &CurrencyPair,
        side: &str,
        amount: Decimal,
        price: Decimal,
    ) -> ExchangeResult<AnxGenericResponse>;

    /// 주문 취소.
    async fn cancel_order(
        &self,
        order_id: &str,
        base_currency: &str,
        quote_currency: &str,
    ) -> ExchangeResult<AnxGenericResponse>;

    /// 체결 내역 조회. 경계는 epoch 밀리초이며 `None`은 경계 없음.
    async fn fetch_executed_trades(
        &self,
        from_millis: Option<i64>,
        to_millis: Option<i64>,
    ) -> ExchangeResult<AnxTradeResultWrapper>;
}

/// 통화쌍별 가격 정밀도를 제공하는 거래소 메타데이터.
pub trait PriceScaleProvider: Send + Sync {
    /// 통화쌍의 가격 소수점 최대 자릿수.
    fn max_price_scale(&self, pair: &CurrencyPair) -> u32;
}

/// 거래소 중립적인 거래 서비스 인터페이스.
#[async_trait]
pub trait TradeService: Send + Sync {
    /// 거래소 이름 반환.
    fn exchange_name(&self) -> &str;

    /// 필터 없이 모든 미체결 주문 조회.
    async fn get_open_orders(&self) -> TradeServiceResult<OpenOrders> {
        let query = self.create_open_orders_params();
        self.get_open_orders_with(&query).await
    }

    /// 조회 파라미터로 미체결 주문 조회.
    async fn get_open_orders_with(&self, query: &OpenOrdersQuery) -> TradeServiceResult<OpenOrders>;

    /// 시장가 주문 제출. 거래소 주문 ID 반환.
    async fn place_market_order(&self, order: &MarketOrder) -> TradeServiceResult<String>;

    /// 지정가 주문 제출. 거래소 주문 ID 반환.
    async fn place_limit_order(&self, order: &LimitOrder) -> TradeServiceResult<String>;

    /// 주문 취소. 거래소가 성공을 보고하면 `true`.
    async fn cancel_order(&self, order_id: &str) -> TradeServiceResult<bool>;

    /// 체결 내역 조회.
    async fn get_trade_history(&self, query: &TradeHistoryQuery)
        -> TradeServiceResult<UserTrades>;

    /// 주문 ID로 주문 조회.
    async fn get_order(&self, order_ids: &[&str]) -> TradeServiceResult<Vec<LimitOrder>>;

    /// 이 거래소가 지원하는 기본 체결 내역 조회 파라미터.
    fn create_trade_history_params(&self) -> TradeHistoryQuery {
        TradeHistoryQuery::default()
    }

    /// 이 거래소가 지원하는 기본 미체결 주문 조회 파라미터.
    fn create_open_orders_params(&self) -> OpenOrdersQuery {
        OpenOrdersQuery::default()
    }
}

//! ANX 거래 서비스 퍼사드.
//!
//! 모든 작업은 검증 → 원시 클라이언트 호출 → 응답 변환 순서로 진행되며,
//! 작업당 원시 클라이언트 호출은 최대 한 번입니다. 퍼사드는 상태를 갖지 않습니다.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn, Instrument};
use xtrade_core::{
    trade_span, CurrencyPair, LimitOrder, MarketOrder, OpenOrders, OpenOrdersQuery,
    TradeHistoryQuery, UserTrades,
};

use crate::adapter::{
    adapt_cancel_result, adapt_open_orders, adapt_order_id, adapt_trade_result_wrapper,
};
use crate::error::{TradeServiceError, TradeServiceResult};
use crate::params::resolve_trade_history_query;
use crate::traits::{AnxRawClient, PriceScaleProvider, TradeService};
use crate::validation::{validate_limit_order, validate_order_id};

/// 거래소 이름.
pub const EXCHANGE_NAME: &str = "ANX";

/// 주문 취소 시 항상 사용하는 기준 통화.
pub const DEFAULT_CANCEL_BASE: &str = "BTC";

/// 주문 취소 시 항상 사용하는 호가 통화.
pub const DEFAULT_CANCEL_QUOTE: &str = "EUR";

/// 주문 취소 요청에 실리는 통화쌍 (BTC/EUR).
///
/// 취소할 주문의 실제 통화쌍과 무관하게 고정되어 있습니다.
pub fn default_cancel_pair() -> CurrencyPair {
    CurrencyPair::new(DEFAULT_CANCEL_BASE, DEFAULT_CANCEL_QUOTE)
}

/// ANX 거래 서비스.
///
/// 원시 클라이언트와 메타데이터 제공자를 조합하여 `TradeService`를 구현합니다.
pub struct AnxTradeService<C: ?Sized, M: ?Sized> {
    client: Arc<C>,
    meta: Arc<M>,
}

impl<C: ?Sized, M: ?Sized> Clone for AnxTradeService<C, M> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            meta: Arc::clone(&self.meta),
        }
    }
}

impl<C, M> AnxTradeService<C, M>
where
    C: AnxRawClient + ?Sized,
    M: PriceScaleProvider + ?Sized,
{
    /// 새 거래 서비스 생성.
    pub fn new(client: Arc<C>, meta: Arc<M>) -> Self {
        Self { client, meta }
    }

    /// 원시 클라이언트 참조.
    pub fn client(&self) -> &Arc<C> {
        &self.client
    }

    /// 메타데이터 제공자 참조.
    pub fn meta(&self) -> &Arc<M> {
        &self.meta
    }

    /// 미체결 주문 조회. ANX는 필터를 지원하지 않으므로 항상 전체를 조회합니다.
    #[instrument(skip(self))]
    pub async fn open_orders(&self, query: &OpenOrdersQuery) -> TradeServiceResult<OpenOrders> {
        if !matches!(query, OpenOrdersQuery::All) {
            debug!("ANX ignores open order filters; fetching all");
        }

        let raw = self.client.fetch_open_orders().await?;
        let orders = adapt_open_orders(&raw)?;

        debug!(count = orders.len(), "Open orders adapted");
        Ok(OpenOrders::new(orders))
    }

    /// 시장가 주문 제출.
    pub async fn submit_market_order(&self, order: &MarketOrder) -> TradeServiceResult<String> {
        let span = trade_span!(
            "submit_market_order",
            EXCHANGE_NAME,
            order.currency_pair,
            order.side
        );

        async move {
            info!(amount = %order.tradable_amount, "Placing market order");

            let response = self
                .client
                .place_market_order(&order.currency_pair, order.side.as_str(), order.tradable_amount)
                .await?;
            let order_id = adapt_order_id(&response)?;

            info!(order_id = %order_id, "Market order placed");
            Ok::<_, TradeServiceError>(order_id)
        }
        .instrument(span)
        .await
    }

    /// 지정가 주문 제출.
    ///
    /// 수량과 가격의 자릿수를 먼저 검증하며, 검증에 실패하면 원시 클라이언트를
    /// 호출하지 않습니다.
    pub async fn submit_limit_order(&self, order: &LimitOrder) -> TradeServiceResult<String> {
        let span = trade_span!(
            "submit_limit_order",
            EXCHANGE_NAME,
            order.currency_pair,
            order.side
        );

        async move {
            let (amount, price) = validate_limit_order(order, self.meta.as_ref())
                .inspect_err(|e| warn!(error = %e, "Limit order rejected"))?;

            info!(amount = %amount, price = %price, "Placing limit order");

            let response = self
                .client
                .place_limit_order(&order.currency_pair, order.side.as_str(), amount, price)
                .await?;
            let order_id = adapt_order_id(&response)?;

            info!(order_id = %order_id, "Limit order placed");
            Ok::<_, TradeServiceError>(order_id)
        }
        .instrument(span)
        .await
    }

    /// 주문 취소.
    ///
    /// 취소 요청에는 항상 BTC/EUR 통화쌍이 실립니다. 다른 통화쌍의 주문은
    /// 거래소가 거부할 수 있습니다.
    #[instrument(skip(self))]
    pub async fn cancel(&self, order_id: &str) -> TradeServiceResult<bool> {
        let order_id = validate_order_id(order_id)
            .inspect_err(|e| warn!(error = %e, "Cancel rejected"))?;

        warn!(
            pair = %default_cancel_pair(),
            "Cancelling with fixed currency pair; actual order pair is not consulted"
        );

        let response = self
            .client
            .cancel_order(order_id, DEFAULT_CANCEL_BASE, DEFAULT_CANCEL_QUOTE)
            .await?;
        let cancelled = adapt_cancel_result(&response.result);

        info!(cancelled, status = %response.result, "Cancel completed");
        Ok(cancelled)
    }

    /// 체결 내역 조회. 기간 파라미터만 원시 클라이언트에 전달됩니다.
    #[instrument(skip(self))]
    pub async fn trade_history(&self, query: &TradeHistoryQuery) -> TradeServiceResult<UserTrades> {
        let bounds = resolve_trade_history_query(query);
        debug!(
            from = ?bounds.from_millis,
            to = ?bounds.to_millis,
            "Trade history bounds resolved"
        );

        let wrapper = self
            .client
            .fetch_executed_trades(bounds.from_millis, bounds.to_millis)
            .await?;
        let trades = adapt_trade_result_wrapper(&wrapper, self.meta.as_ref())?;

        debug!(count = trades.len(), "User trades adapted");
        Ok(trades)
    }
}

#[async_trait]
impl<C, M> TradeService for AnxTradeService<C, M>
where
    C: AnxRawClient + ?Sized,
    M: PriceScaleProvider + ?Sized,
{
    fn exchange_name(&self) -> &str {
        EXCHANGE_NAME
    }

    async fn get_open_orders_with(&self, query: &OpenOrdersQuery) -> TradeServiceResult<OpenOrders> {
        self.open_orders(query).await
    }

    async fn place_market_order(&self, order: &MarketOrder) -> TradeServiceResult<String> {
        self.submit_market_order(order).await
    }

    async fn place_limit_order(&self, order: &LimitOrder) -> TradeServiceResult<String> {
        self.submit_limit_order(order).await
    }

    async fn cancel_order(&self, order_id: &str) -> TradeServiceResult<bool> {
        self.cancel(order_id).await
    }

    async fn get_trade_history(&self, query: &TradeHistoryQuery) -> TradeServiceResult<UserTrades> {
        self.trade_history(query).await
    }

    async fn get_order(&self, _order_ids: &[&str]) -> TradeServiceResult<Vec<LimitOrder>> {
        Err(TradeServiceError::NotYetImplemented(
            "get_order is not supported by ANX".to_string(),
        ))
    }

    fn create_trade_history_params(&self) -> TradeHistoryQuery {
        TradeHistoryQuery::open_time_span()
    }

    fn create_open_orders_params(&self) -> OpenOrdersQuery {
        OpenOrdersQuery::All
    }
}

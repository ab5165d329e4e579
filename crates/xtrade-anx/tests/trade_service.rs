//! Integration tests for AnxTradeService driven by a recording raw client.

use async_trait::async_trait;
use chrono::DateTime;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};
use xtrade_anx::{
    adapt_open_orders, AnxGenericResponse, AnxMetaData, AnxOpenOrder, AnxRawClient,
    AnxTradeResultWrapper, AnxTradeService, ExchangeError, ExchangeResult, TradeService,
    TradeServiceError,
};
use xtrade_core::{
    CurrencyPair, LimitOrder, MarketOrder, OpenOrdersQuery, OrderSide, PairMetaConfig,
    TradeHistoryQuery,
};

const OPEN_ORDERS_JSON: &str = include_str!("fixtures/open_orders.json");
const TRADE_HISTORY_JSON: &str = include_str!("fixtures/trade_history.json");

/// Raw client call, as seen by the exchange.
#[derive(Debug, Clone, PartialEq)]
enum Call {
    FetchOpenOrders,
    PlaceMarketOrder {
        pair: CurrencyPair,
        side: String,
        amount: Decimal,
    },
    PlaceLimitOrder {
        pair: CurrencyPair,
        side: String,
        amount: Decimal,
        price: Decimal,
    },
    CancelOrder {
        order_id: String,
        base: String,
        quote: String,
    },
    FetchExecutedTrades {
        from: Option<i64>,
        to: Option<i64>,
    },
}

/// Spy raw client that records every call and replays canned responses.
struct SpyClient {
    calls: Mutex<Vec<Call>>,
    open_orders: Vec<AnxOpenOrder>,
    order_response: AnxGenericResponse,
    cancel_status: String,
    trades: AnxTradeResultWrapper,
    failure: Option<ExchangeError>,
}

impl Default for SpyClient {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            open_orders: Vec::new(),
            order_response: AnxGenericResponse::new("success", Some("order-123")),
            cancel_status: "success".to_string(),
            trades: AnxTradeResultWrapper::success(Vec::new()),
            failure: None,
        }
    }
}

impl SpyClient {
    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> ExchangeResult<()> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AnxRawClient for SpyClient {
    async fn fetch_open_orders(&self) -> ExchangeResult<Vec<AnxOpenOrder>> {
        self.record(Call::FetchOpenOrders)?;
        Ok(self.open_orders.clone())
    }

    async fn place_market_order(
        &self,
        pair: &CurrencyPair,
        side: &str,
        amount: Decimal,
    ) -> ExchangeResult<AnxGenericResponse> {
        self.record(Call::PlaceMarketOrder {
            pair: pair.clone(),
            side: side.to_string(),
            amount,
        })?;
        Ok(self.order_response.clone())
    }

    async fn place_limit_order(
        &self,
        pair: &CurrencyPair,
        side: &str,
        amount: Decimal,
        price: Decimal,
    ) -> ExchangeResult<AnxGenericResponse> {
        self.record(Call::PlaceLimitOrder {
            pair: pair.clone(),
            side: side.to_string(),
            amount,
            price,
        })?;
        Ok(self.order_response.clone())
    }

    async fn cancel_order(
        &self,
        order_id: &str,
        base_currency: &str,
        quote_currency: &str,
    ) -> ExchangeResult<AnxGenericResponse> {
        self.record(Call::CancelOrder {
            order_id: order_id.to_string(),
            base: base_currency.to_string(),
            quote: quote_currency.to_string(),
        })?;
        Ok(AnxGenericResponse::new(self.cancel_status.clone(), None))
    }

    async fn fetch_executed_trades(
        &self,
        from_millis: Option<i64>,
        to_millis: Option<i64>,
    ) -> ExchangeResult<AnxTradeResultWrapper> {
        self.record(Call::FetchExecutedTrades {
            from: from_millis,
            to: to_millis,
        })?;
        Ok(self.trades.clone())
    }
}

fn service_with(client: SpyClient) -> AnxTradeService<SpyClient, AnxMetaData> {
    AnxTradeService::new(Arc::new(client), Arc::new(AnxMetaData::new()))
}

fn btc_eur() -> CurrencyPair {
    CurrencyPair::new("BTC", "EUR")
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

// ==================== 지정가 주문 검증 ====================

proptest! {
    #[test]
    fn limit_order_with_amount_scale_over_eight_never_reaches_client(
        mantissa in 1i64..10_000_000_000,
        scale in 9u32..=18,
    ) {
        let service = service_with(SpyClient::default());
        let order = LimitOrder::bid(btc_eur(), Decimal::new(mantissa, scale), dec!(400));

        let result = block_on(service.place_limit_order(&order));

        prop_assert!(matches!(result, Err(TradeServiceError::InvalidArgument(_))));
        prop_assert!(service.client().calls().is_empty());
    }

    #[test]
    fn limit_order_with_price_scale_over_pair_max_never_reaches_client(
        mantissa in 1i64..10_000_000_000,
        scale in 6u32..=18,
    ) {
        let service = service_with(SpyClient::default());
        let order = LimitOrder::ask(btc_eur(), dec!(1), Decimal::new(mantissa, scale));

        let result = block_on(service.place_limit_order(&order));

        prop_assert!(matches!(result, Err(TradeServiceError::InvalidArgument(_))));
        prop_assert!(service.client().calls().is_empty());
    }
}

#[tokio::test]
async fn test_limit_order_scale_uses_configured_pair_metadata() {
    let meta = AnxMetaData::new().with_pair(CurrencyPair::new("BTC", "HKD"), PairMetaConfig::new(2));
    let service = AnxTradeService::new(Arc::new(SpyClient::default()), Arc::new(meta));

    let rejected = LimitOrder::bid(CurrencyPair::new("BTC", "HKD"), dec!(1), dec!(3500.125));
    let err = service.place_limit_order(&rejected).await.unwrap_err();
    assert!(err.is_precondition());
    assert!(service.client().calls().is_empty());

    let accepted = LimitOrder::bid(CurrencyPair::new("BTC", "HKD"), dec!(1), dec!(3500.12));
    assert_eq!(service.place_limit_order(&accepted).await.unwrap(), "order-123");
    assert_eq!(
        service.client().calls(),
        vec![Call::PlaceLimitOrder {
            pair: CurrencyPair::new("BTC", "HKD"),
            side: "bid".to_string(),
            amount: dec!(1),
            price: dec!(3500.12),
        }]
    );
}

#[tokio::test]
async fn test_limit_order_missing_price_is_rejected() {
    let service = service_with(SpyClient::default());
    let mut order = LimitOrder::ask(btc_eur(), dec!(1), dec!(400));
    order.limit_price = None;

    let err = service.place_limit_order(&order).await.unwrap_err();
    assert!(matches!(err, TradeServiceError::InvalidArgument(_)));
    assert!(service.client().calls().is_empty());
}

// ==================== 시장가 주문 ====================

#[tokio::test]
async fn test_market_order_returns_exchange_id() {
    let service = service_with(SpyClient::default());
    let order = MarketOrder::bid(CurrencyPair::new("BTC", "USD"), dec!(0.123456789));

    let id = service.place_market_order(&order).await.unwrap();

    assert_eq!(id, "order-123");
    assert_eq!(
        service.client().calls(),
        vec![Call::PlaceMarketOrder {
            pair: CurrencyPair::new("BTC", "USD"),
            side: "bid".to_string(),
            amount: dec!(0.123456789),
        }]
    );
}

#[tokio::test]
async fn test_order_error_response_is_exchange_state() {
    let mut response = AnxGenericResponse::new("error", None);
    response.error = Some("Insufficient funds".to_string());
    let service = service_with(SpyClient {
        order_response: response,
        ..Default::default()
    });

    let err = service
        .place_market_order(&MarketOrder::ask(btc_eur(), dec!(10)))
        .await
        .unwrap_err();

    match err {
        TradeServiceError::ExchangeState(message) => assert_eq!(message, "Insufficient funds"),
        other => panic!("expected ExchangeState, got {:?}", other),
    }
}

// ==================== 주문 취소 ====================

#[tokio::test]
async fn test_cancel_without_id_never_reaches_client() {
    let service = service_with(SpyClient::default());

    let err = service.cancel_order("").await.unwrap_err();

    assert!(matches!(err, TradeServiceError::InvalidArgument(_)));
    assert!(service.client().calls().is_empty());
}

#[tokio::test]
async fn test_cancel_result_follows_status() {
    let service = service_with(SpyClient::default());
    assert!(service.cancel_order("abc").await.unwrap());

    let service = service_with(SpyClient {
        cancel_status: "fail".to_string(),
        ..Default::default()
    });
    assert!(!service.cancel_order("abc").await.unwrap());
}

#[tokio::test]
async fn test_cancel_always_sends_btc_eur() {
    let service = service_with(SpyClient::default());

    service.cancel_order("ltc-order-1").await.unwrap();

    assert_eq!(
        service.client().calls(),
        vec![Call::CancelOrder {
            order_id: "ltc-order-1".to_string(),
            base: "BTC".to_string(),
            quote: "EUR".to_string(),
        }]
    );
}

// ==================== 체결 내역 ====================

#[tokio::test]
async fn test_trade_history_error_marker() {
    let service = service_with(SpyClient {
        trades: AnxTradeResultWrapper::failure("rate limited"),
        ..Default::default()
    });

    let err = service
        .get_trade_history(&TradeHistoryQuery::Unfiltered)
        .await
        .unwrap_err();

    match err {
        TradeServiceError::ExchangeState(message) => assert_eq!(message, "rate limited"),
        other => panic!("expected ExchangeState, got {:?}", other),
    }
}

#[tokio::test]
async fn test_trade_history_open_end_passthrough() {
    let service = service_with(SpyClient::default());
    let query = TradeHistoryQuery::time_span(DateTime::from_timestamp_millis(1_000), None);

    service.get_trade_history(&query).await.unwrap();

    assert_eq!(
        service.client().calls(),
        vec![Call::FetchExecutedTrades {
            from: Some(1_000),
            to: None,
        }]
    );
}

#[tokio::test]
async fn test_trade_history_non_time_span_is_unbounded() {
    let service = service_with(SpyClient::default());
    let query = TradeHistoryQuery::Paging {
        page_length: Some(50),
        page_number: Some(0),
    };

    service.get_trade_history(&query).await.unwrap();

    assert_eq!(
        service.client().calls(),
        vec![Call::FetchExecutedTrades {
            from: None,
            to: None
        }]
    );
}

#[tokio::test]
async fn test_trade_history_from_fixture() {
    let wrapper: AnxTradeResultWrapper = serde_json::from_str(TRADE_HISTORY_JSON).unwrap();
    let service = service_with(SpyClient {
        trades: wrapper,
        ..Default::default()
    });

    let trades = service
        .get_trade_history(&service.create_trade_history_params())
        .await
        .unwrap();

    assert_eq!(trades.len(), 2);
    let trades: Vec<_> = trades.iter().collect();

    assert_eq!(trades[0].side, OrderSide::Bid);
    assert_eq!(trades[0].currency_pair, CurrencyPair::new("BTC", "USD"));
    assert_eq!(trades[0].tradable_amount, dec!(2));
    assert_eq!(trades[0].price, dec!(600.1234));
    assert_eq!(trades[0].timestamp.timestamp_millis(), 1_393_411_075_000);

    assert_eq!(trades[1].side, OrderSide::Ask);
    assert_eq!(trades[1].currency_pair, CurrencyPair::new("LTC", "BTC"));
    assert_eq!(trades[1].price, dec!(0.025));
    assert_eq!(trades[1].order_id, "6ad3b3cc-7e0b-4c2a-9c3d-1b5c2f0d00f2");
}

// ==================== 미체결 주문 ====================

#[tokio::test]
async fn test_open_orders_from_fixture() {
    let raw: Vec<AnxOpenOrder> = serde_json::from_str(OPEN_ORDERS_JSON).unwrap();
    let service = service_with(SpyClient {
        open_orders: raw,
        ..Default::default()
    });

    let orders = service.get_open_orders().await.unwrap();

    assert_eq!(orders.len(), 2);
    let first = &orders.open_orders[0];
    assert_eq!(first.side, OrderSide::Ask);
    assert_eq!(first.currency_pair, btc_eur());
    assert_eq!(first.tradable_amount, Some(dec!(0.5)));
    assert_eq!(first.limit_price, Some(dec!(450)));
    assert_eq!(first.id.as_deref(), Some("6ad3b3cc-7e0b-4c2a-9c3d-1b5c2f0d0001"));

    let second = &orders.open_orders[1];
    assert_eq!(second.side, OrderSide::Bid);
    assert_eq!(second.currency_pair, CurrencyPair::new("LTC", "USD"));
    assert_eq!(service.client().calls(), vec![Call::FetchOpenOrders]);
}

#[tokio::test]
async fn test_open_orders_filter_is_ignored() {
    let service = service_with(SpyClient::default());

    service
        .get_open_orders_with(&OpenOrdersQuery::CurrencyPair(btc_eur()))
        .await
        .unwrap();

    assert_eq!(service.client().calls(), vec![Call::FetchOpenOrders]);
}

#[test]
fn test_adapt_open_orders_is_idempotent() {
    let raw: Vec<AnxOpenOrder> = serde_json::from_str(OPEN_ORDERS_JSON).unwrap();

    let first = adapt_open_orders(&raw).unwrap();
    let second = adapt_open_orders(&raw).unwrap();

    assert_eq!(first, second);
}

// ==================== 기타 ====================

#[tokio::test]
async fn test_get_order_is_not_implemented() {
    let service = service_with(SpyClient::default());

    for ids in [vec!["1"], vec!["1", "2"], vec![]] {
        let err = service.get_order(&ids).await.unwrap_err();
        assert!(matches!(err, TradeServiceError::NotYetImplemented(_)));
    }
    assert!(service.client().calls().is_empty());
}

#[tokio::test]
async fn test_raw_client_failure_propagates_unchanged() {
    let service = service_with(SpyClient {
        failure: Some(ExchangeError::Timeout("30s".to_string())),
        ..Default::default()
    });

    let err = service.get_open_orders().await.unwrap_err();

    assert!(matches!(err, TradeServiceError::Exchange(ExchangeError::Timeout(_))));
    assert_eq!(service.client().calls().len(), 1);
}

#[tokio::test]
async fn test_facade_behind_trait_object() {
    let service: Arc<dyn TradeService> = Arc::new(service_with(SpyClient::default()));

    assert_eq!(service.exchange_name(), "ANX");
    let id = service
        .place_limit_order(&LimitOrder::ask(btc_eur(), dec!(0.1), dec!(455.5)))
        .await
        .unwrap();
    assert_eq!(id, "order-123");
}

//! ANX 응답 → 도메인 모델 변환.
//!
//! 모든 함수는 순수 함수입니다. 같은 입력에 대해 항상 같은 결과를 반환합니다.

use chrono::{DateTime, Utc};
use xtrade_core::{CurrencyPair, DecimalExt, LimitOrder, OrderSide, UserTrade, UserTrades};

use crate::error::{TradeServiceError, TradeServiceResult};
use crate::traits::PriceScaleProvider;
use crate::wire::{AnxGenericResponse, AnxOpenOrder, AnxTradeResult, AnxTradeResultWrapper};

/// 취소 성공을 나타내는 ANX 결과 문자열.
pub const CANCEL_SUCCESS: &str = "success";

/// ANX 통화쌍 코드의 기준 통화 길이.
const BASE_CODE_LEN: usize = 3;

/// ANX 방향 문자열을 `OrderSide`로 변환합니다.
///
/// 미체결 주문은 "bid"/"ask", 체결 기록은 "BUY"/"SELL"을 사용합니다.
pub fn adapt_side(raw: &str) -> TradeServiceResult<OrderSide> {
    match raw.to_ascii_lowercase().as_str() {
        "bid" | "buy" => Ok(OrderSide::Bid),
        "ask" | "sell" => Ok(OrderSide::Ask),
        _ => Err(adapter_error(format!("unknown order side: {}", raw))),
    }
}

/// ANX 통화쌍 코드(예: "BTCUSD")를 `CurrencyPair`로 변환합니다.
pub fn adapt_currency_pair(code: &str) -> TradeServiceResult<CurrencyPair> {
    if code.len() <= BASE_CODE_LEN || !code.is_ascii() {
        return Err(adapter_error(format!("malformed currency pair code: {}", code)));
    }
    let (base, quote) = code.split_at(BASE_CODE_LEN);
    Ok(CurrencyPair::new(base, quote))
}

/// ANX 미체결 주문 하나를 지정가 주문으로 변환합니다.
pub fn adapt_open_order(raw: &AnxOpenOrder) -> TradeServiceResult<LimitOrder> {
    let side = adapt_side(&raw.order_type)?;
    let pair = CurrencyPair::new(&raw.item, &raw.currency);
    let timestamp = adapt_timestamp(raw.date)?;

    Ok(LimitOrder::new(side, pair, raw.amount.value, raw.price.value)
        .with_id(raw.oid.clone())
        .with_timestamp(timestamp))
}

/// ANX 미체결 주문 목록을 변환합니다. 응답 순서를 유지합니다.
pub fn adapt_open_orders(raw: &[AnxOpenOrder]) -> TradeServiceResult<Vec<LimitOrder>> {
    raw.iter().map(adapt_open_order).collect()
}

/// ANX 체결 기록 하나를 변환합니다.
///
/// 가격은 반올림 전 결제 금액을 체결 수량으로 나눈 값을 통화쌍 가격 자릿수에
/// 맞춰 은행가 반올림한 값입니다. 수수료는 ANX 체결 응답에 포함되지 않습니다.
pub fn adapt_user_trade<M>(raw: &AnxTradeResult, meta: &M) -> TradeServiceResult<UserTrade>
where
    M: PriceScaleProvider + ?Sized,
{
    let pair = adapt_currency_pair(&raw.ccy_pair)?;
    let side = adapt_side(&raw.side)?;
    let amount = raw.traded_currency_fill_amount;

    let price = raw
        .settlement_currency_fill_amount_unrounded
        .checked_div(amount)
        .ok_or_else(|| {
            adapter_error(format!(
                "cannot derive price for trade {}: traded amount {}",
                raw.trade_id, amount
            ))
        })?
        .round_half_even(meta.max_price_scale(&pair));

    Ok(UserTrade {
        side,
        tradable_amount: amount,
        currency_pair: pair,
        price,
        timestamp: adapt_timestamp(raw.timestamp)?,
        id: raw.trade_id.clone(),
        order_id: raw.order_id.clone(),
        fee_amount: None,
        fee_currency: None,
    })
}

/// ANX 체결 기록 목록을 변환합니다. 응답 순서를 유지합니다.
pub fn adapt_user_trades<M>(raw: &[AnxTradeResult], meta: &M) -> TradeServiceResult<UserTrades>
where
    M: PriceScaleProvider + ?Sized,
{
    raw.iter()
        .map(|trade| adapt_user_trade(trade, meta))
        .collect::<TradeServiceResult<Vec<_>>>()
        .map(UserTrades::new)
}

/// 체결 내역 응답 래퍼를 변환합니다.
///
/// 에러 표시가 있으면 데이터와 관계없이 `ExchangeState`를 반환합니다.
pub fn adapt_trade_result_wrapper<M>(
    wrapper: &AnxTradeResultWrapper,
    meta: &M,
) -> TradeServiceResult<UserTrades>
where
    M: PriceScaleProvider + ?Sized,
{
    if let Some(error) = &wrapper.error {
        return Err(TradeServiceError::ExchangeState(error.clone()));
    }
    adapt_user_trades(&wrapper.data, meta)
}

/// 취소 결과 문자열이 정확히 "success"인지 확인합니다.
pub fn adapt_cancel_result(status: &str) -> bool {
    status == CANCEL_SUCCESS
}

/// 주문 제출 응답에서 거래소 주문 ID를 꺼냅니다.
///
/// 응답에 에러 메시지가 있으면 `ExchangeState`를 반환합니다.
pub fn adapt_order_id(response: &AnxGenericResponse) -> TradeServiceResult<String> {
    if let Some(error) = &response.error {
        return Err(TradeServiceError::ExchangeState(error.clone()));
    }
    response.data_string().ok_or_else(|| {
        adapter_error(format!(
            "order response without order id (result: {})",
            response.result
        ))
    })
}

fn adapt_timestamp(millis: i64) -> TradeServiceResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| adapter_error(format!("timestamp out of range: {}", millis)))
}

fn adapter_error(message: String) -> TradeServiceError {
    TradeServiceError::Adapter(message)
}

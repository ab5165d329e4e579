//! 주문 요청 사전 검증.
//!
//! 모든 검사는 원시 클라이언트 호출 전에 수행되며 부수 효과가 없습니다.

use xtrade_core::{DecimalExt, LimitOrder, Price, Quantity};

use crate::error::{TradeServiceError, TradeServiceResult};
use crate::traits::PriceScaleProvider;

/// 주문 수량의 소수점 최대 자릿수.
pub const MAX_AMOUNT_SCALE: u32 = 8;

/// 지정가 주문을 검증하고 (수량, 가격)을 반환합니다.
///
/// 검사 순서: 가격 누락, 수량 누락, 수량 자릿수, 가격 자릿수.
///
/// # Errors
/// 규칙을 위반하면 `TradeServiceError::InvalidArgument`를 반환합니다.
pub fn validate_limit_order<M>(order: &LimitOrder, meta: &M) -> TradeServiceResult<(Quantity, Price)>
where
    M: PriceScaleProvider + ?Sized,
{
    let price = order
        .limit_price
        .ok_or_else(|| invalid("limit price cannot be null"))?;
    let amount = order
        .tradable_amount
        .ok_or_else(|| invalid("tradable amount cannot be null"))?;

    if !amount.fits_scale(MAX_AMOUNT_SCALE) {
        return Err(invalid(format!(
            "tradable amount scale exceeds max: {} > {}",
            amount.fraction_digits(),
            MAX_AMOUNT_SCALE
        )));
    }

    let max_price_scale = meta.max_price_scale(&order.currency_pair);
    if !price.fits_scale(max_price_scale) {
        return Err(invalid(format!(
            "price scale exceeds max for {}: {} > {}",
            order.currency_pair,
            price.fraction_digits(),
            max_price_scale
        )));
    }

    Ok((amount, price))
}

/// 주문 ID가 비어 있지 않은지 검증합니다.
pub fn validate_order_id(order_id: &str) -> TradeServiceResult<&str> {
    if order_id.trim().is_empty() {
        return Err(invalid("order id cannot be null"));
    }
    Ok(order_id)
}

fn invalid(message: impl Into<String>) -> TradeServiceError {
    TradeServiceError::InvalidArgument(message.into())
}

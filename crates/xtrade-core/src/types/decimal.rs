//! 거래소 정밀도 규칙을 위한 Decimal 유틸리티.
//!
//! 거래소는 수량과 가격의 소수점 자릿수(scale)를 제한합니다.
//! 이 모듈은 scale 조회 및 라운딩 헬퍼를 제공합니다.

use rust_decimal::{Decimal, RoundingStrategy};

/// 금융 정밀도를 위한 가격 타입.
pub type Price = Decimal;

/// 주문 수량을 위한 타입.
pub type Quantity = Decimal;

/// Decimal 정밀도 연산을 위한 확장 트레이트.
pub trait DecimalExt {
    /// 소수점 이하 자릿수를 반환합니다.
    ///
    /// 작성된 그대로의 자릿수를 셉니다. `1.10`은 2자리입니다.
    fn fraction_digits(&self) -> u32;

    /// 소수점 이하 자릿수가 `max` 이하인지 확인합니다.
    fn fits_scale(&self, max: u32) -> bool {
        self.fraction_digits() <= max
    }

    /// 은행가 반올림(half-even)으로 지정된 자릿수에 맞춥니다.
    fn round_half_even(&self, dp: u32) -> Decimal;
}

impl DecimalExt for Decimal {
    fn fraction_digits(&self) -> u32 {
        self.scale()
    }

    fn round_half_even(&self, dp: u32) -> Decimal {
        self.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven)
    }
}

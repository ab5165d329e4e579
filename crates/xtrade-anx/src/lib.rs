//! ANX 거래소 거래 서비스.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - TradeService trait: 거래소 중립적인 거래 인터페이스
//! - AnxTradeService: 검증 → 원시 클라이언트 호출 → 응답 변환 퍼사드
//! - 지정가 주문 수량/가격 자릿수 검증
//! - 체결 내역 조회 파라미터 해석
//! - ANX 원시 응답 타입과 도메인 모델 변환
//! - 통화쌍별 가격 정밀도 메타데이터

pub mod adapter;
pub mod error;
pub mod metadata;
pub mod params;
pub mod service;
pub mod traits;
pub mod validation;
pub mod wire;

pub use adapter::{
    adapt_cancel_result, adapt_currency_pair, adapt_open_order, adapt_open_orders,
    adapt_order_id, adapt_side, adapt_trade_result_wrapper, adapt_user_trade, adapt_user_trades,
    CANCEL_SUCCESS,
};
pub use error::*;
pub use metadata::{default_max_price_scale, AnxMetaData};
pub use params::{resolve_trade_history_query, TimeBounds};
pub use service::{
    default_cancel_pair, AnxTradeService, DEFAULT_CANCEL_BASE, DEFAULT_CANCEL_QUOTE,
    EXCHANGE_NAME,
};
pub use traits::*;
pub use validation::{validate_limit_order, validate_order_id, MAX_AMOUNT_SCALE};
pub use wire::*;

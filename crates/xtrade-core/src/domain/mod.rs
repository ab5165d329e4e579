//! 거래소 퍼사드를 위한 도메인 모델.

mod order;
mod query;
mod trade;

pub use order::*;
pub use query::*;
pub use trade::*;

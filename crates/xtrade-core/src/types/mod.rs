//! 도메인 전반에서 사용되는 공통 타입.

mod currency_pair;
mod decimal;

pub use currency_pair::*;
pub use decimal::*;

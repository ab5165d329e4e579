//! # XTrade Core
//!
//! 거래소 퍼사드에서 공통으로 사용하는 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 통화쌍 및 Decimal 정밀도 유틸리티
//! - 지정가/시장가 주문 및 미체결 주문 목록
//! - 체결 내역 (UserTrade)
//! - 미체결/체결 내역 조회 파라미터
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;

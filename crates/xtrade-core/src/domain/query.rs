//! 조회 파라미터.
//!
//! 거래소마다 지원하는 필터가 다르므로 파라미터는 여러 형태를 가집니다.
//! 각 거래소 퍼사드는 지원하지 않는 형태를 필터 없는 조회로 처리합니다.

use crate::types::CurrencyPair;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 미체결 주문 조회 파라미터.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OpenOrdersQuery {
    /// 계좌의 모든 미체결 주문
    #[default]
    All,
    /// 특정 통화쌍의 미체결 주문
    CurrencyPair(CurrencyPair),
}

/// 체결 내역 조회 파라미터.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TradeHistoryQuery {
    /// 필터 없음
    #[default]
    Unfiltered,
    /// 기간 필터 (양 끝 포함, 각 경계는 선택)
    TimeSpan {
        start_time: Option<DateTime<Utc>>,
        end_time: Option<DateTime<Utc>>,
    },
    /// 페이지 단위 조회
    Paging {
        page_length: Option<u32>,
        page_number: Option<u32>,
    },
    /// 특정 통화쌍
    CurrencyPair(CurrencyPair),
}

impl TradeHistoryQuery {
    /// 기간 필터를 생성합니다.
    pub fn time_span(start_time: Option<DateTime<Utc>>, end_time: Option<DateTime<Utc>>) -> Self {
        TradeHistoryQuery::TimeSpan {
            start_time,
            end_time,
        }
    }

    /// 경계가 모두 비어 있는 기간 필터를 생성합니다.
    pub fn open_time_span() -> Self {
        Self::time_span(None, None)
    }
}

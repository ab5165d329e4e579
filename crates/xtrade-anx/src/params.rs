//! 조회 파라미터 해석.
//!
//! ANX 체결 내역 API는 기간 필터만 지원합니다. 다른 형태의 파라미터는
//! 에러 없이 필터 없는 조회로 처리합니다.

use chrono::{DateTime, Utc};
use xtrade_core::TradeHistoryQuery;

/// 체결 내역 조회의 시간 경계 (epoch 밀리초, 양 끝 포함).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeBounds {
    pub from_millis: Option<i64>,
    pub to_millis: Option<i64>,
}

impl TimeBounds {
    /// 경계가 하나도 없는지 확인.
    pub fn is_unbounded(&self) -> bool {
        self.from_millis.is_none() && self.to_millis.is_none()
    }
}

/// 체결 내역 조회 파라미터를 원시 클라이언트 인자로 변환합니다.
pub fn resolve_trade_history_query(query: &TradeHistoryQuery) -> TimeBounds {
    match query {
        TradeHistoryQuery::TimeSpan {
            start_time,
            end_time,
        } => TimeBounds {
            from_millis: to_millis(start_time.as_ref()),
            to_millis: to_millis(end_time.as_ref()),
        },
        _ => TimeBounds::default(),
    }
}

fn to_millis(time: Option<&DateTime<Utc>>) -> Option<i64> {
    time.map(DateTime::timestamp_millis)
}

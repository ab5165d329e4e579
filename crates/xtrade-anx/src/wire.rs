//! ANX v2 API 응답 타입.
//!
//! 원시 클라이언트가 역직렬화해 퍼사드에 전달하는 거래소 고유 구조체입니다.
//! 필드 이름은 ANX JSON 응답을 그대로 따릅니다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 통화 단위가 붙은 ANX 금액 값.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnxValue {
    /// 십진 값
    pub value: Decimal,
    /// 정수 표기 (value × 10^n)
    #[serde(default)]
    pub value_int: Option<String>,
    /// 표시용 문자열
    #[serde(default)]
    pub display: Option<String>,
    /// 짧은 표시용 문자열
    #[serde(default)]
    pub display_short: Option<String>,
    /// 통화 코드
    pub currency: String,
}

impl AnxValue {
    pub fn new(value: Decimal, currency: impl Into<String>) -> Self {
        Self {
            value,
            value_int: None,
            display: None,
            display_short: None,
            currency: currency.into(),
        }
    }
}

/// ANX 미체결 주문.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnxOpenOrder {
    /// 주문 ID
    pub oid: String,
    /// 호가 통화 (예: "EUR")
    pub currency: String,
    /// 기준 통화 (예: "BTC")
    pub item: String,
    /// 주문 방향 ("bid" / "ask")
    #[serde(rename = "type")]
    pub order_type: String,
    /// 주문 수량
    pub amount: AnxValue,
    /// 미체결 잔량
    #[serde(default)]
    pub effective_amount: Option<AnxValue>,
    /// 지정가
    pub price: AnxValue,
    /// 주문 상태 (예: "open")
    #[serde(default)]
    pub status: Option<String>,
    /// 주문 시각 (epoch 밀리초)
    pub date: i64,
    /// 우선순위
    #[serde(default)]
    pub priority: Option<i64>,
}

/// ANX 체결 기록.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnxTradeResult {
    /// 체결 ID
    pub trade_id: String,
    /// 주문 ID
    pub order_id: String,
    /// 체결 시각 (epoch 밀리초)
    pub timestamp: i64,
    /// 거래 통화 체결 수량
    pub traded_currency_fill_amount: Decimal,
    /// 결제 통화 체결 금액 (반올림됨)
    pub settlement_currency_fill_amount: Decimal,
    /// 결제 통화 체결 금액 (반올림 전)
    pub settlement_currency_fill_amount_unrounded: Decimal,
    /// 주문 가격
    #[serde(default)]
    pub price: Option<Decimal>,
    /// 통화쌍 코드 (예: "BTCUSD")
    pub ccy_pair: String,
    /// 체결 방향 ("BUY" / "SELL")
    pub side: String,
}

/// ANX 체결 내역 응답 래퍼.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnxTradeResultWrapper {
    /// 결과 표시 ("success" / "error")
    pub result: String,
    /// 체결 목록
    #[serde(default)]
    pub data: Vec<AnxTradeResult>,
    /// 거래소 에러 메시지
    #[serde(default)]
    pub error: Option<String>,
}

impl AnxTradeResultWrapper {
    /// 성공 응답을 생성합니다.
    pub fn success(data: Vec<AnxTradeResult>) -> Self {
        Self {
            result: "success".to_string(),
            data,
            error: None,
        }
    }

    /// 에러 응답을 생성합니다.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            result: "error".to_string(),
            data: Vec::new(),
            error: Some(error.into()),
        }
    }
}

/// ANX 범용 응답 (주문 제출/취소).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnxGenericResponse {
    /// 결과 표시 ("success" / "error")
    pub result: String,
    /// 응답 데이터 (주문 제출 시 주문 ID)
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    /// 거래소 에러 메시지
    #[serde(default)]
    pub error: Option<String>,
}

impl AnxGenericResponse {
    /// 결과와 문자열 데이터로 응답을 생성합니다.
    pub fn new(result: impl Into<String>, data: Option<&str>) -> Self {
        Self {
            result: result.into(),
            data: data.map(|d| serde_json::Value::String(d.to_string())),
            error: None,
        }
    }

    /// 응답 데이터를 문자열로 반환합니다.
    ///
    /// 문자열 데이터는 따옴표 없이, 그 외 값은 JSON 표기로 반환합니다.
    pub fn data_string(&self) -> Option<String> {
        match self.data.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

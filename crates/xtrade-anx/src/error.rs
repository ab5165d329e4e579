//! 거래소 에러 타입.

use thiserror::Error;

/// 원시 거래소 클라이언트가 반환하는 에러.
///
/// 전송, 인증, 역직렬화 단계의 실패를 나타내며 퍼사드는 이를 그대로 전달합니다.
#[derive(Debug, Clone, Error)]
pub enum ExchangeError {
    /// 네트워크/연결 에러
    #[error("Network error: {0}")]
    NetworkError(String),

    /// 타임아웃
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// 인증/권한 에러
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 요청 한도 초과
    #[error("Rate limit exceeded")]
    RateLimited,

    /// API 에러 코드
    #[error("API error {code}: {message}")]
    ApiError { code: i32, message: String },

    /// 파싱/역직렬화 에러
    #[error("Parse error: {0}")]
    ParseError(String),

    /// 알 수 없는 에러
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl ExchangeError {
    /// 재시도 가능한 에러인지 확인.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ExchangeError::NetworkError(_) | ExchangeError::Timeout(_) | ExchangeError::RateLimited
        )
    }

    /// 재시도하면 안 되는 치명적 에러인지 확인.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ExchangeError::Unauthorized(_))
    }
}

impl From<serde_json::Error> for ExchangeError {
    fn from(err: serde_json::Error) -> Self {
        ExchangeError::ParseError(err.to_string())
    }
}

/// 거래 서비스 퍼사드 에러.
#[derive(Debug, Error)]
pub enum TradeServiceError {
    /// 요청 전 검증 실패 (필수 값 누락, 소수점 자릿수 초과)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// 거래소가 응답 안에서 보고한 논리 에러
    #[error("Exchange state error: {0}")]
    ExchangeState(String),

    /// 이 거래소에서 지원하지 않는 작업
    #[error("Not yet implemented for exchange: {0}")]
    NotYetImplemented(String),

    /// 원시 응답을 도메인 모델로 변환할 수 없음
    #[error("Adapter error: {0}")]
    Adapter(String),

    /// 원시 클라이언트 에러
    #[error(transparent)]
    Exchange(#[from] ExchangeError),
}

impl TradeServiceError {
    /// 네트워크 호출 전에 발생한 에러인지 확인.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            TradeServiceError::InvalidArgument(_) | TradeServiceError::NotYetImplemented(_)
        )
    }
}

/// 원시 클라이언트 작업을 위한 Result 타입.
pub type ExchangeResult<T> = Result<T, ExchangeError>;

/// 퍼사드 작업을 위한 Result 타입.
pub type TradeServiceResult<T> = Result<T, TradeServiceError>;

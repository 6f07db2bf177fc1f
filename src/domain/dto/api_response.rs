//! 공통 API 응답 봉투
//!
//! 성공과 실패 응답 모두 동일한 `{code, message, result}` 구조를 사용합니다.
//! 성공 코드는 `1000`이며, 실패 코드는 [`ErrorCode`](crate::core::ErrorCode)의 숫자 코드입니다.

use serde::{Deserialize, Serialize};

/// 성공 응답 코드
pub const SUCCESS_CODE: u32 = 1000;

/// API 응답 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "code": 1000,
///   "result": { "id": "42e2-bae5-9ea7c0f1c4d4", "username": "test02" }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 결과를 담은 성공 응답
    pub fn success(result: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            message: None,
            result: Some(result),
        }
    }

    /// 에러 코드와 메시지만 담은 실패 응답
    pub fn failure(code: u32, message: &str) -> Self {
        Self {
            code,
            message: Some(message.to_string()),
            result: None,
        }
    }
}

//! # Application Error Handling System
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! 모든 실패는 [`ErrorCode`] 하나를 품은 [`AppError`]로 표현되며,
//! Actix-Web 경계에서 `{code, message}` JSON 응답으로 자동 변환됩니다.
//!
//! ## 설계 철학
//!
//! ### 1. 단일 에러 타입
//! - **코드 기반 분류**: 에러의 의미는 문자열이 아닌 [`ErrorCode`]가 결정
//! - **메시지 렌더링**: `{min}` 같은 플레이스홀더는 에러 생성 시점에 치환
//! - **내부 정보 분리**: 원인(detail)은 로그에만 남기고 클라이언트에는 노출하지 않음
//!
//! ### 2. 자동 HTTP 응답 변환
//! - **ResponseError 구현**: 상태 코드는 [`ErrorCode::http_status`]에서 결정
//! - **일관된 응답 형식**: 성공 응답과 동일한 [`ApiResponse`] 봉투 사용
//!
//! ### 3. 검증 에러 매핑
//! - `validator` 크레이트의 각 위반은 `code` 속성에 에러 키를 가지고 있음
//! - 키를 [`ErrorCode::from_key`]로 해석하고, 알 수 없는 키는 `INVALID_MESSAGE_KEY`
//! - 여러 필드가 실패하면 숫자 코드가 가장 작은 위반을 선택 (결정적 결과)
//!
//! ## HTTP 응답 매핑
//!
//! | ErrorCode | HTTP Status | 사용 시나리오 |
//! |-----------|-------------|---------------|
//! | `USER_EXISTED` 등 검증 계열 | 400 Bad Request | 입력값 검증 실패, 중복 |
//! | `USER_NOT_EXISTED` | 404 Not Found | 리소스 없음 |
//! | `UNAUTHENTICATED` | 401 Unauthorized | 토큰 없음/만료 |
//! | `UNAUTHORIZED` | 403 Forbidden | 권한 부족 |
//! | `UNCATEGORIZED_EXCEPTION` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//! use crate::core::error_code::ErrorCode;
//!
//! async fn get_profile(&self, phone: &str) -> AppResult<UserResponse> {
//!     let user = self.user_repo
//!         .find_by_phone_number(phone)
//!         .await?
//!         .ok_or_else(|| AppError::new(ErrorCode::UserNotExisted))?;
//!
//!     Ok(UserResponse::from(user))
//! }
//! ```

use std::fmt::Display;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::Value;
use thiserror::Error;
use validator::ValidationErrors;

use crate::core::error_code::ErrorCode;
use crate::domain::dto::api_response::ApiResponse;

/// 애플리케이션 전역 에러 타입
///
/// 서비스 계층에서 발생하는 모든 실패는 이 타입으로 전파됩니다.
/// `Display`는 클라이언트에게 보여줄 렌더링된 메시지를 출력합니다.
///
/// # 예제
///
/// ```rust,ignore
/// // 중복 사용자
/// return Err(AppError::new(ErrorCode::UserExisted));
///
/// // 최소값이 있는 검증 실패
/// return Err(AppError::with_min(ErrorCode::PasswordInvalid, 8));
///
/// // 예상치 못한 인프라 오류
/// collection.insert_one(&user).await
///     .map_err(|e| AppError::uncategorized(e.to_string()))?;
/// ```
#[derive(Error, Debug)]
#[error("{message}")]
pub struct AppError {
    error_code: ErrorCode,
    message: String,
    /// 로그 전용 내부 원인
    detail: Option<String>,
}

impl AppError {
    /// 템플릿 메시지를 그대로 사용하는 에러를 생성합니다.
    pub fn new(error_code: ErrorCode) -> Self {
        Self {
            error_code,
            message: error_code.message_template().to_string(),
            detail: None,
        }
    }

    /// `{min}` 플레이스홀더를 치환한 에러를 생성합니다.
    pub fn with_min(error_code: ErrorCode, min: impl Display) -> Self {
        Self {
            error_code,
            message: error_code.message_with_min(min),
            detail: None,
        }
    }

    /// 예상하지 못한 실패를 `UNCATEGORIZED_EXCEPTION`으로 감쌉니다.
    ///
    /// `detail`은 서버 로그에만 기록됩니다.
    pub fn uncategorized(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
            ..Self::new(ErrorCode::UncategorizedException)
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        self.error_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl From<ErrorCode> for AppError {
    fn from(error_code: ErrorCode) -> Self {
        Self::new(error_code)
    }
}

impl From<ValidationErrors> for AppError {
    /// 검증 위반을 에러 코드로 변환합니다.
    ///
    /// 위반의 `code`가 등록된 키가 아니면 `INVALID_MESSAGE_KEY`가 되고,
    /// 위반에 `min` 파라미터가 있으면 메시지에 치환됩니다.
    fn from(errors: ValidationErrors) -> Self {
        let violation = errors
            .field_errors()
            .into_values()
            .flat_map(|field_errors| field_errors.iter())
            .map(|error| {
                let error_code = ErrorCode::from_key(&error.code)
                    .unwrap_or(ErrorCode::InvalidMessageKey);
                (error_code, error)
            })
            .min_by_key(|(error_code, _)| error_code.code());

        match violation {
            Some((error_code, error)) => match error.params.get("min") {
                Some(min) => AppError::with_min(error_code, param_to_string(min)),
                None => AppError::new(error_code),
            },
            None => AppError::new(ErrorCode::InvalidMessageKey),
        }
    }
}

/// 검증 파라미터를 메시지에 넣을 문자열로 변환 (문자열은 따옴표 없이)
fn param_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.error_code.http_status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// # 응답 형식
    ///
    /// ```json
    /// {
    ///   "code": 1001,
    ///   "message": "User has already existed!"
    /// }
    /// ```
    ///
    /// 5xx 에러는 내부 원인과 함께 `error` 레벨로, 나머지는 `warn` 레벨로 기록됩니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!(
                "{} ({}): {}",
                self.error_code.key(),
                self.error_code.code(),
                self.detail.as_deref().unwrap_or(&self.message)
            );
        } else {
            log::warn!("{} ({}): {}", self.error_code.key(), self.error_code.code(), self.message);
        }

        HttpResponse::build(status)
            .json(ApiResponse::<()>::failure(self.error_code.code(), &self.message))
    }
}

/// 편의성을 위한 Result 타입 별칭
///
/// ```rust,ignore
/// async fn create_user(request: UserCreationRequest) -> AppResult<UserResponse> {
///     // 구현...
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// 변환된 에러는 항상 `UNCATEGORIZED_EXCEPTION`이며, 컨텍스트 메시지와
/// 원본 에러는 로그 전용 detail에 남습니다.
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let user = collection.find_one(filter).await
///     .context("Failed to find user")?;
///
/// let hash = bcrypt::hash(&password, cost)
///     .with_context(|| format!("bcrypt cost {}", cost))?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::uncategorized(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::uncategorized(format!("{}: {}", f(), e)))
    }
}

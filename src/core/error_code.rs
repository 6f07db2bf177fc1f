//! # 에러 코드 레지스트리
//!
//! 클라이언트에게 노출되는 모든 실패 유형을 정의하는 닫힌 집합입니다.
//! 각 코드는 숫자 코드, 메시지 템플릿, HTTP 상태 코드를 가지며
//! 컴파일 타임에 고정됩니다.
//!
//! ## 코드 표
//!
//! | 키 | 코드 | HTTP | 메시지 |
//! |----|------|------|--------|
//! | `UNCATEGORIZED_EXCEPTION` | 9999 | 500 | Uncategorized exception |
//! | `USER_EXISTED` | 1001 | 400 | User has already existed! |
//! | `INVALID_MESSAGE_KEY` | 1002 | 400 | Invalid message key |
//! | `USERNAME_INVALID` | 1003 | 400 | Username must be at least {min} characters! |
//! | `PASSWORD_INVALID` | 1004 | 400 | Password must be at least {min} characters! |
//! | `USER_NOT_EXISTED` | 1005 | 404 | User not exist! |
//! | `UNAUTHENTICATED` | 1006 | 401 | Unauthenticated! |
//! | `UNAUTHORIZED` | 1007 | 403 | Unauthorized! |
//! | `INVALID_DOB` | 1008 | 400 | Your age must be at least {min} |
//! | `PHONE_NUMBER_INVALID` | 1009 | 400 | Your phone number must be {min} number |
//! | `EMAIL_INVALID` | 1010 | 400 | Your email is invalid |
//! | `EMAIL_EMPTY` | 1011 | 400 | Email can not be empty |
//!
//! ## 플레이스홀더
//!
//! `{min}`이 포함된 템플릿은 [`ErrorCode::message_with_min`]으로
//! 실제 제약 값(예: 사용자명 최소 길이 3)을 채운 뒤 클라이언트에 전달합니다.
//!
//! ```rust,ignore
//! use crate::core::error_code::ErrorCode;
//!
//! let message = ErrorCode::UsernameInvalid.message_with_min(3);
//! assert_eq!(message, "Username must be at least 3 characters!");
//! ```

use std::fmt::Display;

use actix_web::http::StatusCode;
use serde::Serialize;

/// 최소값 플레이스홀더
const MIN_PLACEHOLDER: &str = "{min}";

/// 애플리케이션 에러 코드
///
/// 서비스 계층의 모든 실패는 반드시 이 열거형 중 하나로 귀결됩니다.
/// 새로운 실패 유형이 필요하면 임의의 문자열 대신 여기에 변형을 추가합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    UncategorizedException,
    UserExisted,
    InvalidMessageKey,
    UsernameInvalid,
    PasswordInvalid,
    UserNotExisted,
    Unauthenticated,
    Unauthorized,
    InvalidDob,
    PhoneNumberInvalid,
    EmailInvalid,
    EmailEmpty,
}

impl ErrorCode {
    /// 정의된 모든 에러 코드
    pub const ALL: [ErrorCode; 12] = [
        ErrorCode::UncategorizedException,
        ErrorCode::UserExisted,
        ErrorCode::InvalidMessageKey,
        ErrorCode::UsernameInvalid,
        ErrorCode::PasswordInvalid,
        ErrorCode::UserNotExisted,
        ErrorCode::Unauthenticated,
        ErrorCode::Unauthorized,
        ErrorCode::InvalidDob,
        ErrorCode::PhoneNumberInvalid,
        ErrorCode::EmailInvalid,
        ErrorCode::EmailEmpty,
    ];

    /// 클라이언트에 노출되는 숫자 코드
    pub const fn code(self) -> u32 {
        match self {
            ErrorCode::UncategorizedException => 9999,
            ErrorCode::UserExisted => 1001,
            ErrorCode::InvalidMessageKey => 1002,
            ErrorCode::UsernameInvalid => 1003,
            ErrorCode::PasswordInvalid => 1004,
            ErrorCode::UserNotExisted => 1005,
            ErrorCode::Unauthenticated => 1006,
            ErrorCode::Unauthorized => 1007,
            ErrorCode::InvalidDob => 1008,
            ErrorCode::PhoneNumberInvalid => 1009,
            ErrorCode::EmailInvalid => 1010,
            ErrorCode::EmailEmpty => 1011,
        }
    }

    /// 심볼 키
    ///
    /// DTO 검증 규칙의 `code` 속성에 이 값을 적어 두면
    /// [`ErrorCode::from_key`]로 다시 에러 코드를 찾을 수 있습니다.
    pub const fn key(self) -> &'static str {
        match self {
            ErrorCode::UncategorizedException => "UNCATEGORIZED_EXCEPTION",
            ErrorCode::UserExisted => "USER_EXISTED",
            ErrorCode::InvalidMessageKey => "INVALID_MESSAGE_KEY",
            ErrorCode::UsernameInvalid => "USERNAME_INVALID",
            ErrorCode::PasswordInvalid => "PASSWORD_INVALID",
            ErrorCode::UserNotExisted => "USER_NOT_EXISTED",
            ErrorCode::Unauthenticated => "UNAUTHENTICATED",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::InvalidDob => "INVALID_DOB",
            ErrorCode::PhoneNumberInvalid => "PHONE_NUMBER_INVALID",
            ErrorCode::EmailInvalid => "EMAIL_INVALID",
            ErrorCode::EmailEmpty => "EMAIL_EMPTY",
        }
    }

    /// 치환 전 메시지 템플릿
    pub const fn message_template(self) -> &'static str {
        match self {
            ErrorCode::UncategorizedException => "Uncategorized exception",
            ErrorCode::UserExisted => "User has already existed!",
            ErrorCode::InvalidMessageKey => "Invalid message key",
            ErrorCode::UsernameInvalid => "Username must be at least {min} characters!",
            ErrorCode::PasswordInvalid => "Password must be at least {min} characters!",
            ErrorCode::UserNotExisted => "User not exist!",
            ErrorCode::Unauthenticated => "Unauthenticated!",
            ErrorCode::Unauthorized => "Unauthorized!",
            ErrorCode::InvalidDob => "Your age must be at least {min}",
            ErrorCode::PhoneNumberInvalid => "Your phone number must be {min} number",
            ErrorCode::EmailInvalid => "Your email is invalid",
            ErrorCode::EmailEmpty => "Email can not be empty",
        }
    }

    /// 응답에 사용할 HTTP 상태 코드
    pub fn http_status(self) -> StatusCode {
        match self {
            ErrorCode::UncategorizedException => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::UserNotExisted => StatusCode::NOT_FOUND,
            ErrorCode::Unauthenticated => StatusCode::UNAUTHORIZED,
            ErrorCode::Unauthorized => StatusCode::FORBIDDEN,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// 심볼 키로 에러 코드를 찾습니다.
    ///
    /// 등록되지 않은 키는 `None`을 반환하며, 호출 측에서
    /// [`ErrorCode::InvalidMessageKey`]로 대체합니다.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.key() == key)
    }

    /// 템플릿의 `{min}`을 주어진 값으로 치환한 메시지를 반환합니다.
    pub fn message_with_min(self, min: impl Display) -> String {
        self.message_template()
            .replace(MIN_PLACEHOLDER, &min.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<u32> = ErrorCode::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes.len(), ErrorCode::ALL.len());
    }

    #[test]
    fn test_code_and_status_table() {
        let expected = [
            (ErrorCode::UncategorizedException, 9999, 500),
            (ErrorCode::UserExisted, 1001, 400),
            (ErrorCode::InvalidMessageKey, 1002, 400),
            (ErrorCode::UsernameInvalid, 1003, 400),
            (ErrorCode::PasswordInvalid, 1004, 400),
            (ErrorCode::UserNotExisted, 1005, 404),
            (ErrorCode::Unauthenticated, 1006, 401),
            (ErrorCode::Unauthorized, 1007, 403),
            (ErrorCode::InvalidDob, 1008, 400),
            (ErrorCode::PhoneNumberInvalid, 1009, 400),
            (ErrorCode::EmailInvalid, 1010, 400),
            (ErrorCode::EmailEmpty, 1011, 400),
        ];

        for (error_code, code, status) in expected {
            assert_eq!(error_code.code(), code);
            assert_eq!(error_code.http_status().as_u16(), status);
        }
    }

    #[test]
    fn test_from_key_resolves_every_code() {
        for error_code in ErrorCode::ALL {
            assert_eq!(ErrorCode::from_key(error_code.key()), Some(error_code));
        }
        assert_eq!(ErrorCode::from_key("NOT_A_KEY"), None);
    }

    #[test]
    fn test_message_with_min_substitutes_placeholder() {
        assert_eq!(
            ErrorCode::UsernameInvalid.message_with_min(3),
            "Username must be at least 3 characters!"
        );
        assert_eq!(
            ErrorCode::PhoneNumberInvalid.message_with_min(10),
            "Your phone number must be 10 number"
        );
    }

    #[test]
    fn test_message_without_placeholder_is_unchanged() {
        assert_eq!(ErrorCode::UserExisted.message_with_min(3), "User has already existed!");
    }

    #[test]
    fn test_serializes_as_key() {
        let json = serde_json::to_string(&ErrorCode::UserNotExisted).unwrap();
        assert_eq!(json, "\"USER_NOT_EXISTED\"");
    }
}

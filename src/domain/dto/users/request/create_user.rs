//! # 사용자 생성 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 요청 데이터 구조와 필드 검증 규칙을 정의합니다.
//! 각 규칙은 위반 시 발생시킬 에러 키를 `code`로 직접 들고 있으므로,
//! 어떤 필드가 어떤 [`ErrorCode`](crate::core::ErrorCode)로 이어지는지 이 파일에서 바로 확인할 수 있습니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 | 에러 키 |
//! |------|------|---------|
//! | `username` | 3자 이상 | `USERNAME_INVALID` |
//! | `password` | 8자 이상 | `PASSWORD_INVALID` |
//! | `email` | 비어 있지 않음 | `EMAIL_EMPTY` |
//! | `email` | 이메일 형식 | `EMAIL_INVALID` |
//! | `phoneNumber` | 숫자 10자리 | `PHONE_NUMBER_INVALID` |
//! | `dob` | 만 18세 이상 | `INVALID_DOB` |
//!
//! 중복 여부는 서비스 계층에서 별도로 검증합니다.
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "username": "test02",
//!   "password": "Quang09122002@",
//!   "firstName": "quang",
//!   "lastName": "tran",
//!   "email": "test02@gmail.com",
//!   "dob": "2000-01-01",
//!   "phoneNumber": "0563016466"
//! }
//! ```

use std::borrow::Cow;

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

/// 가입 가능한 최소 나이
pub const MIN_AGE: i32 = 18;

/// 휴대폰 번호 자릿수
pub const PHONE_NUMBER_LENGTH: usize = 10;

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// JSON 필드명은 camelCase를 사용합니다.
/// 누락된 문자열 필드는 빈 문자열로 역직렬화되어 검증 단계에서 걸러집니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserCreationRequest {
    /// 클라이언트가 보낼 수 있지만 사용하지 않는 필드 (ID는 저장소가 생성)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default)]
    #[validate(length(min = 3, code = "USERNAME_INVALID"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 8, code = "PASSWORD_INVALID"))]
    pub password: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    #[validate(custom(function = "validate_email"))]
    pub email: String,

    /// 누락 시 `INVALID_DOB`로 거부됩니다 ([`UserCreationRequest::validate_fields`])
    #[serde(default)]
    #[validate(custom(function = "validate_dob"))]
    pub dob: Option<NaiveDate>,

    #[serde(default)]
    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: String,
}

impl UserCreationRequest {
    /// 모든 필드 규칙을 검증합니다.
    ///
    /// derive된 규칙은 값이 있는 `dob`만 검사하므로, 누락된 `dob`는 여기서
    /// 같은 `INVALID_DOB` 위반으로 함께 수집됩니다.
    pub fn validate_fields(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if self.dob.is_none() {
            errors.add("dob", underage_error());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// 이메일 검증: 빈 값과 형식 오류를 서로 다른 에러 키로 구분
fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::new("EMAIL_EMPTY"));
    }

    if !email.validate_email() {
        return Err(ValidationError::new("EMAIL_INVALID"));
    }

    Ok(())
}

/// 휴대폰 번호 검증 (ASCII 숫자 정확히 10자리)
fn validate_phone_number(phone_number: &str) -> Result<(), ValidationError> {
    let is_valid = phone_number.len() == PHONE_NUMBER_LENGTH
        && phone_number.chars().all(|c| c.is_ascii_digit());

    if !is_valid {
        let mut error = ValidationError::new("PHONE_NUMBER_INVALID");
        error.add_param(Cow::from("min"), &PHONE_NUMBER_LENGTH);
        return Err(error);
    }

    Ok(())
}

/// 생년월일 검증 (오늘 UTC 기준 만 나이)
fn validate_dob(dob: &NaiveDate) -> Result<(), ValidationError> {
    let today = Utc::now().date_naive();

    if age_on(*dob, today) < MIN_AGE {
        return Err(underage_error());
    }

    Ok(())
}

fn underage_error() -> ValidationError {
    let mut error = ValidationError::new("INVALID_DOB");
    error.add_param(Cow::from("min"), &MIN_AGE);
    error
}

/// `today` 기준 만 나이. 생일이 지나지 않았으면 한 살을 뺍니다.
fn age_on(dob: NaiveDate, today: NaiveDate) -> i32 {
    let age = today.year() - dob.year();

    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age - 1
    } else {
        age
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AppError, ErrorCode};

    fn valid_request() -> UserCreationRequest {
        UserCreationRequest {
            id: None,
            username: "test02".to_string(),
            password: "Quang09122002@".to_string(),
            first_name: "quang".to_string(),
            last_name: "tran".to_string(),
            email: "test02@gmail.com".to_string(),
            dob: NaiveDate::from_ymd_opt(2000, 1, 1),
            phone_number: "0563016466".to_string(),
        }
    }

    fn error_of(request: &UserCreationRequest) -> AppError {
        AppError::from(request.validate_fields().unwrap_err())
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate_fields().is_ok());
    }

    #[test]
    fn test_minimum_lengths_are_accepted() {
        let request = UserCreationRequest {
            username: "abc".to_string(),
            password: "12345678".to_string(),
            ..valid_request()
        };

        assert!(request.validate_fields().is_ok());
    }

    #[test]
    fn test_exactly_eighteen_today_is_accepted() {
        let today = Utc::now().date_naive();
        // 2월 29일에는 18년 전 같은 날짜가 없을 수 있음
        let dob = today
            .with_year(today.year() - MIN_AGE)
            .or_else(|| NaiveDate::from_ymd_opt(today.year() - MIN_AGE, 2, 28))
            .unwrap();
        let request = UserCreationRequest {
            dob: Some(dob),
            ..valid_request()
        };

        assert!(request.validate_fields().is_ok());
    }

    #[test]
    fn test_missing_dob_is_invalid_dob() {
        let request = UserCreationRequest {
            dob: None,
            ..valid_request()
        };

        let error = error_of(&request);
        assert_eq!(error.error_code(), ErrorCode::InvalidDob);
        assert_eq!(error.message(), "Your age must be at least 18");
    }

    #[test]
    fn test_missing_dob_does_not_hide_lower_codes() {
        let request = UserCreationRequest {
            password: "short".to_string(),
            dob: None,
            ..valid_request()
        };

        assert_eq!(error_of(&request).error_code(), ErrorCode::PasswordInvalid);
    }

    #[test]
    fn test_short_username_is_rejected() {
        let request = UserCreationRequest {
            username: "ab".to_string(),
            ..valid_request()
        };

        let error = error_of(&request);
        assert_eq!(error.error_code(), ErrorCode::UsernameInvalid);
        assert_eq!(error.message(), "Username must be at least 3 characters!");
    }

    #[test]
    fn test_short_password_is_rejected() {
        let request = UserCreationRequest {
            password: "1234567".to_string(),
            ..valid_request()
        };

        let error = error_of(&request);
        assert_eq!(error.error_code(), ErrorCode::PasswordInvalid);
        assert_eq!(error.message(), "Password must be at least 8 characters!");
    }

    #[test]
    fn test_blank_email_is_empty_not_invalid() {
        let request = UserCreationRequest {
            email: "   ".to_string(),
            ..valid_request()
        };

        assert_eq!(error_of(&request).error_code(), ErrorCode::EmailEmpty);
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let request = UserCreationRequest {
            email: "not-an-email".to_string(),
            ..valid_request()
        };

        assert_eq!(error_of(&request).error_code(), ErrorCode::EmailInvalid);
    }

    #[test]
    fn test_phone_number_must_be_ten_digits() {
        for phone_number in ["056301646", "05630164660", "05630l6466"] {
            let request = UserCreationRequest {
                phone_number: phone_number.to_string(),
                ..valid_request()
            };

            let error = error_of(&request);
            assert_eq!(error.error_code(), ErrorCode::PhoneNumberInvalid);
            assert_eq!(error.message(), "Your phone number must be 10 number");
        }
    }

    #[test]
    fn test_underage_dob_is_rejected() {
        let today = Utc::now().date_naive();
        let request = UserCreationRequest {
            dob: NaiveDate::from_ymd_opt(today.year() - 10, 1, 1),
            ..valid_request()
        };

        let error = error_of(&request);
        assert_eq!(error.error_code(), ErrorCode::InvalidDob);
        assert_eq!(error.message(), "Your age must be at least 18");
    }

    #[test]
    fn test_username_error_wins_over_later_fields() {
        let request = UserCreationRequest {
            username: "ab".to_string(),
            email: String::new(),
            phone_number: "123".to_string(),
            ..valid_request()
        };

        assert_eq!(error_of(&request).error_code(), ErrorCode::UsernameInvalid);
    }

    #[test]
    fn test_age_counts_only_completed_years() {
        let dob = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();

        assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2018, 6, 14).unwrap()), 17);
        assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2018, 6, 15).unwrap()), 18);
    }

    #[test]
    fn test_deserializes_camel_case_fields() {
        let json = r#"{
            "username": "test02",
            "password": "Quang09122002@",
            "firstName": "quang",
            "lastName": "tran",
            "email": "test02@gmail.com",
            "dob": "2000-01-01",
            "phoneNumber": "0563016466"
        }"#;

        let request: UserCreationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.first_name, "quang");
        assert_eq!(request.phone_number, "0563016466");
        assert_eq!(request.id, None);
        assert_eq!(request.dob, NaiveDate::from_ymd_opt(2000, 1, 1));
    }

    #[test]
    fn test_missing_dob_deserializes_as_none() {
        let json = r#"{"username": "test02", "password": "Quang09122002@"}"#;

        let request: UserCreationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.dob, None);
    }
}

//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 회원가입 시 생성되고 프로필 조회 시 읽히며, 그 밖의 생명주기는 저장소가 관리합니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    core::{AppError, AppResult, ErrorCode},
    domain::dto::users::request::{create_user::MIN_AGE, UserCreationRequest},
};

/// 사용자 엔티티
///
/// `username`과 `phone_number`는 전체 사용자 사이에서 유일해야 합니다.
/// 유일성은 서비스의 사전 존재 확인과 저장소의 유니크 제약으로 함께 보장됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 시스템이 생성하는 UUID 문자열 (저장 전에는 None)
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 로그인 아이디 (unique)
    pub username: String,
    /// bcrypt 해시된 비밀번호
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub dob: NaiveDate,
    /// 휴대폰 번호 (unique, 인증 주체 키)
    pub phone_number: String,
}

impl User {
    /// 생성 요청과 해시된 비밀번호로 새 사용자를 만듭니다.
    ///
    /// ID는 저장소가 저장 시점에 채웁니다.
    /// 검증을 거치지 않아 `dob`가 비어 있으면 `INVALID_DOB`를 반환합니다.
    pub fn from_request(request: UserCreationRequest, password_hash: String) -> AppResult<Self> {
        let UserCreationRequest {
            username,
            first_name,
            last_name,
            email,
            dob,
            phone_number,
            ..
        } = request;
        let dob = dob.ok_or_else(|| AppError::with_min(ErrorCode::InvalidDob, MIN_AGE))?;

        Ok(Self {
            id: None,
            username,
            password: password_hash,
            first_name,
            last_name,
            email,
            dob,
            phone_number,
        })
    }

    /// ID 문자열 (저장 전이면 None)
    pub fn id_string(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(dob: Option<NaiveDate>) -> UserCreationRequest {
        UserCreationRequest {
            id: Some(7),
            username: "test02".to_string(),
            password: "Quang09122002@".to_string(),
            first_name: "quang".to_string(),
            last_name: "tran".to_string(),
            email: "test02@gmail.com".to_string(),
            dob,
            phone_number: "0563016466".to_string(),
        }
    }

    #[test]
    fn test_from_request_replaces_password_and_drops_id() {
        let user =
            User::from_request(request(NaiveDate::from_ymd_opt(2000, 1, 1)), "hash".to_string())
                .unwrap();

        assert_eq!(user.id, None);
        assert_eq!(user.password, "hash");
        assert_eq!(user.dob, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    }

    #[test]
    fn test_from_request_without_dob_is_invalid_dob() {
        let error = User::from_request(request(None), "hash".to_string()).unwrap_err();

        assert_eq!(error.error_code(), ErrorCode::InvalidDob);
        assert_eq!(error.message(), "Your age must be at least 18");
    }
}

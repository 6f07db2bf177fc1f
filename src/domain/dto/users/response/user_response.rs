use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
///
/// 엔티티에서 비밀번호 해시를 제외한 공개 필드만 담습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub dob: NaiveDate,
    pub phone_number: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            first_name,
            last_name,
            email,
            dob,
            phone_number,
            ..
        } = user;

        Self {
            id: id.unwrap_or_default(),
            username,
            first_name,
            last_name,
            email,
            dob,
            phone_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved_user() -> User {
        User {
            id: Some("42e2-bae5-9ea7c0f1c4d4".to_string()),
            username: "test02".to_string(),
            password: "$2b$04$hash".to_string(),
            first_name: "quang".to_string(),
            last_name: "tran".to_string(),
            email: "test02@gmail.com".to_string(),
            dob: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            phone_number: "0563016466".to_string(),
        }
    }

    #[test]
    fn test_response_copies_public_fields() {
        let response = UserResponse::from(saved_user());

        assert_eq!(response.id, "42e2-bae5-9ea7c0f1c4d4");
        assert_eq!(response.username, "test02");
        assert_eq!(response.phone_number, "0563016466");
    }

    #[test]
    fn test_response_never_contains_password() {
        let json = serde_json::to_value(UserResponse::from(saved_user())).unwrap();

        assert!(json.get("password").is_none());
        assert_eq!(json["phoneNumber"], "0563016466");
        assert_eq!(json["dob"], "2000-01-01");
    }
}

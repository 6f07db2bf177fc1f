//! # 사용자 관리 서비스 구현
//!
//! 회원가입과 본인 프로필 조회의 비즈니스 로직을 구현합니다.
//!
//! ## 회원가입 흐름
//!
//! ```text
//! UserCreationRequest
//!      │
//!      ├─ 1. 필드 검증 (validator)        ── 실패 → 1003/1004/1008/1009/1010/1011
//!      ├─ 2. username 중복 확인           ── 존재 → 1001
//!      ├─ 3. phone_number 중복 확인       ── 존재 → 1001
//!      ├─ 4. 비밀번호 bcrypt 해싱
//!      ├─ 5. 저장 (ID 부여, 유니크 위반 → 1001)
//!      ▼
//! UserResponse (비밀번호 제외)
//! ```
//!
//! 검증이 실패하면 저장소는 한 번도 호출되지 않습니다.

use std::sync::Arc;
use std::time::Instant;

use bcrypt::hash;

use crate::{
    core::{AppError, AppResult, ErrorCode, ErrorContext},
    domain::{
        dto::users::{request::UserCreationRequest, response::UserResponse},
        entities::users::user::User,
    },
    repositories::users::UserRepository,
};

/// 사용자 서비스
///
/// 저장소 구현과 bcrypt 비용은 생성 시점에 주입됩니다.
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, bcrypt_cost: u32) -> Self {
        Self {
            user_repo,
            bcrypt_cost,
        }
    }

    /// 새 사용자를 등록합니다.
    ///
    /// # Errors
    ///
    /// * 필드 검증 실패 시 해당 규칙의 `ErrorCode` (여러 개면 가장 낮은 코드)
    /// * `USER_EXISTED` - 아이디 또는 전화번호가 이미 사용 중
    /// * `UNCATEGORIZED_EXCEPTION` - 해싱 또는 저장소 장애
    pub async fn create_user(&self, request: UserCreationRequest) -> AppResult<UserResponse> {
        request.validate_fields()?;

        if self.user_repo.exists_by_username(&request.username).await? {
            log::warn!("이미 사용 중인 아이디: {}", request.username);
            return Err(AppError::new(ErrorCode::UserExisted));
        }

        if self.user_repo.exists_by_phone_number(&request.phone_number).await? {
            log::warn!("이미 사용 중인 전화번호로 가입 시도: {}", request.username);
            return Err(AppError::new(ErrorCode::UserExisted));
        }

        let hash_start = Instant::now();
        let password_hash =
            hash(&request.password, self.bcrypt_cost).context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::from_request(request, password_hash)?;
        let saved = self.user_repo.save(user).await?;

        log::info!(
            "사용자 생성 완료: {} ({})",
            saved.username,
            saved.id_string().unwrap_or("-")
        );

        Ok(UserResponse::from(saved))
    }

    /// 인증된 주체 키(전화번호)로 본인 프로필을 조회합니다.
    ///
    /// # Errors
    ///
    /// * `USER_NOT_EXISTED` - 주체 키에 해당하는 사용자가 없음
    pub async fn get_profile(&self, principal_key: &str) -> AppResult<UserResponse> {
        let user = self
            .user_repo
            .find_by_phone_number(principal_key)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::UserNotExisted))?;

        Ok(UserResponse::from(user))
    }
}

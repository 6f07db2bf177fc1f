//! 인메모리 사용자 리포지토리
//!
//! 프로세스 메모리에 사용자를 보관합니다. 재시작하면 데이터가 사라집니다.
//! 존재 확인과 삽입이 같은 쓰기 잠금 안에서 이루어지므로 동시 가입 요청에도 유일성이 유지됩니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    core::{AppError, AppResult, ErrorCode, ErrorContext},
    domain::entities::users::user::User,
    repositories::users::user_repo::UserRepository,
};

/// `HashMap<id, User>` 기반 사용자 저장소
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 사용자 수
    #[cfg(test)]
    pub fn len(&self) -> AppResult<usize> {
        let users = self.users.read().context("User store lock poisoned")?;
        Ok(users.len())
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        let users = self.users.read().context("User store lock poisoned")?;
        Ok(users.values().any(|user| user.username == username))
    }

    async fn exists_by_phone_number(&self, phone_number: &str) -> AppResult<bool> {
        let users = self.users.read().context("User store lock poisoned")?;
        Ok(users.values().any(|user| user.phone_number == phone_number))
    }

    async fn find_by_phone_number(&self, phone_number: &str) -> AppResult<Option<User>> {
        let users = self.users.read().context("User store lock poisoned")?;
        Ok(users
            .values()
            .find(|user| user.phone_number == phone_number)
            .cloned())
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.write().context("User store lock poisoned")?;

        let conflict = users.values().any(|existing| {
            existing.username == user.username || existing.phone_number == user.phone_number
        });
        if conflict {
            return Err(AppError::new(ErrorCode::UserExisted));
        }

        let id = user
            .id
            .get_or_insert_with(|| Uuid::new_v4().to_string())
            .clone();
        if users.contains_key(&id) {
            return Err(AppError::new(ErrorCode::UserExisted));
        }
        users.insert(id, user.clone());

        Ok(user)
    }
}

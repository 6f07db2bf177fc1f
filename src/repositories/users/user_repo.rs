//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! 서비스는 [`UserRepository`] 트레이트에만 의존하며, 실제 저장소는 시작 시점에 선택됩니다.
//!
//! ## 구현체
//!
//! | 구현체 | 저장소 | 용도 |
//! |--------|--------|------|
//! | [`MongoUserRepository`] | MongoDB + Redis 캐싱 | 운영 |
//! | [`InMemoryUserRepository`](super::memory_repo::InMemoryUserRepository) | `RwLock<HashMap>` | 로컬 실행, 통합 테스트 |
//!
//! ## 유일성 보장
//!
//! 서비스의 사전 존재 확인만으로는 동시 가입 요청을 막을 수 없으므로,
//! `username`과 `phone_number`에 유니크 인덱스를 두고 중복 키 에러(11000)를
//! `USER_EXISTED`로 변환합니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use uuid::Uuid;

use crate::{
    caching::redis::RedisClient,
    core::{AppError, AppResult, ErrorCode, ErrorContext},
    db::Database,
    domain::entities::users::user::User,
};

/// 사용자 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";

/// 전화번호 조회 캐시 유지 시간 (10분)
const PHONE_CACHE_TTL_SECONDS: u64 = 600;

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 저장소 포트
///
/// 모든 구현체는 `username`, `phone_number` 유일성을 `save` 시점에 강제해야 합니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 주어진 아이디를 가진 사용자가 있는지 확인합니다.
    async fn exists_by_username(&self, username: &str) -> AppResult<bool>;

    /// 주어진 전화번호를 가진 사용자가 있는지 확인합니다.
    async fn exists_by_phone_number(&self, phone_number: &str) -> AppResult<bool>;

    /// 전화번호로 사용자를 조회합니다.
    async fn find_by_phone_number(&self, phone_number: &str) -> AppResult<Option<User>>;

    /// 새 사용자를 저장하고 ID가 부여된 사용자를 반환합니다.
    ///
    /// 유일성 위반 시 `USER_EXISTED`를 반환합니다.
    async fn save(&self, user: User) -> AppResult<User>;
}

/// MongoDB 기반 사용자 리포지토리
///
/// 전화번호 조회 결과는 Redis에 캐싱됩니다. 사용자는 생성 후 수정되지 않으므로
/// 캐시 무효화는 필요하지 않습니다.
pub struct MongoUserRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>, redis: Arc<RedisClient>) -> Self {
        Self { db, redis }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(USERS_COLLECTION)
    }

    fn phone_cache_key(phone_number: &str) -> String {
        format!("user:phone:{}", phone_number)
    }

    /// `username`, `phone_number` 유니크 인덱스를 생성합니다.
    ///
    /// 이미 같은 인덱스가 있으면 MongoDB가 무시하므로 시작할 때마다 호출해도 됩니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "username": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name("username_unique".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "phone_number": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name("phone_number_unique".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection()
            .create_indexes(indexes)
            .await
            .context("Failed to create user indexes")?;

        log::info!("✅ users 컬렉션 인덱스 생성 완료");
        Ok(())
    }
}

/// 중복 키 위반 여부
fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        let count = self
            .collection()
            .count_documents(doc! { "username": username })
            .await
            .context("Failed to count users by username")?;

        Ok(count > 0)
    }

    async fn exists_by_phone_number(&self, phone_number: &str) -> AppResult<bool> {
        let count = self
            .collection()
            .count_documents(doc! { "phone_number": phone_number })
            .await
            .context("Failed to count users by phone number")?;

        Ok(count > 0)
    }

    async fn find_by_phone_number(&self, phone_number: &str) -> AppResult<Option<User>> {
        let cache_key = Self::phone_cache_key(phone_number);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            log::debug!("캐시 적중: {}", cache_key);
            return Ok(Some(cached));
        }

        let user = self
            .collection()
            .find_one(doc! { "phone_number": phone_number })
            .await
            .context("Failed to find user by phone number")?;

        if let Some(ref user) = user {
            let _ = self
                .redis
                .set_with_expiry(&cache_key, user, PHONE_CACHE_TTL_SECONDS)
                .await;
        }

        Ok(user)
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        if user.id.is_none() {
            user.id = Some(Uuid::new_v4().to_string());
        }

        match self.collection().insert_one(&user).await {
            Ok(_) => Ok(user),
            Err(e) if is_duplicate_key(&e) => {
                log::warn!("중복 키로 사용자 저장 거부: {}", user.username);
                Err(AppError::new(ErrorCode::UserExisted))
            }
            Err(e) => Err(AppError::uncategorized(format!("Failed to insert user: {}", e))),
        }
    }
}

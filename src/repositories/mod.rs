//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 `Arc<dyn UserRepository>`로 저장소를 주입받습니다.
//! 어떤 구현체를 사용할지는 `STORAGE_BACKEND` 설정에 따라 `main`에서 결정됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let exists = user_repo.exists_by_username("test02").await?;
//! ```

pub mod users;

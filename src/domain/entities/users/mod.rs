//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let password_hash = bcrypt::hash(&request.password, cost)?;
//! let user = User::from_request(request, password_hash)?;
//! let saved = user_repo.save(user).await?;
//! assert!(saved.id.is_some());
//! ```

pub mod user;

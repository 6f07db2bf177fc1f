//! 아이덴티티 서비스 백엔드
//!
//! 사용자 회원가입과 본인 프로필 조회를 제공하는 actix-web 서비스입니다.
//! 모든 실패는 고정된 숫자 코드와 HTTP 상태를 가진 `ErrorCode` 하나로 귀결됩니다.
//!
//! # Features
//!
//! - **회원가입**: 필드 검증, 아이디/전화번호 중복 방지, bcrypt 해싱
//! - **프로필 조회**: Bearer 토큰의 주체(전화번호)로 본인 정보 조회
//! - **JWT 검증**: 외부에서 발급된 HS256 토큰 검증과 역할 기반 접근 제어
//! - **MongoDB**: 사용자 데이터 영구 저장 (유니크 인덱스)
//! - **Redis**: 전화번호 조회 캐싱
//! - **인메모리 저장소**: `STORAGE_BACKEND=memory`로 외부 의존 없이 실행
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 추출, ApiResponse 봉투
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 중복 확인, 해싱
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← dyn UserRepository
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 또는 인메모리
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use identity_service_backend::repositories::users::InMemoryUserRepository;
//! use identity_service_backend::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(InMemoryUserRepository::new()), 10);
//! let created = service.create_user(request).await?;
//! let profile = service.get_profile(&created.phone_number).await?;
//! ```

pub mod caching;
pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;

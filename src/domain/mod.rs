//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 사용자 엔티티와 API 계약을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 영속 객체 (User)
//! ├── DTOs      - 요청/응답 계약 (UserCreationRequest, UserResponse, ApiResponse)
//! └── Models    - 영속되지 않는 인증 모델 (AuthenticatedUser, TokenClaims)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB, Cache)
//! ```
//!
//! ## 데이터 흐름
//!
//! ```rust,ignore
//! // 1. HTTP 요청 → DTO
//! let request: UserCreationRequest = payload.into_inner();
//!
//! // 2. 유효성 검증 (실패 시 가장 낮은 코드의 ErrorCode)
//! request.validate_fields().map_err(AppError::from)?;
//!
//! // 3. 도메인 엔티티 생성 (비밀번호는 해시로 교체)
//! let user = User::from_request(request, password_hash)?;
//!
//! // 4. 리포지토리를 통한 영속화 (ID 부여)
//! let saved = user_repo.save(user).await?;
//!
//! // 5. 응답 DTO로 변환
//! let response = UserResponse::from(saved);
//! ```

pub mod dto;
pub mod entities;
pub mod models;

//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/
//! │   └── create_user.rs      # 회원가입 요청 + 검증 규칙
//! └── response/
//!     └── user_response.rs    # 공개 사용자 정보
//! ```
//!
//! ## 엔드포인트 매핑
//!
//! | 엔드포인트 | 요청 | 응답 |
//! |-----------|------|------|
//! | `POST /api/v1/users` | `UserCreationRequest` | `ApiResponse<UserResponse>` |
//! | `GET /api/v1/users/my-info` | - | `ApiResponse<UserResponse>` |

pub mod request;
pub mod response;

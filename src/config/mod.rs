//! # Configuration Module
//!
//! 환경 변수 기반 설정을 제공합니다.
//! `.env` 파일은 `main`에서 `PROFILE`에 따라 먼저 로드되며,
//! 이 모듈의 함수들은 호출 시점의 환경 변수를 읽습니다.
//!
//! | 변수 | 용도 | 기본값 |
//! |------|------|--------|
//! | `HOST` / `PORT` | 서버 바인딩 | `0.0.0.0` / `8080` |
//! | `ENVIRONMENT` | 실행 환경 | `production` |
//! | `BCRYPT_COST` | 비밀번호 해싱 비용 | 환경별 |
//! | `STORAGE_BACKEND` | 사용자 저장소 | `mongodb` |
//! | `MONGODB_URI` / `DATABASE_NAME` | MongoDB | `mongodb://localhost:27017` / `identity_dev` |
//! | `REDIS_URL` | 조회 캐시 | `redis://localhost:6379` |
//! | `JWT_SECRET` | 토큰 검증 | `your-secret-key` |
//! | `RATE_LIMIT_PER_SECOND` / `RATE_LIMIT_BURST_SIZE` | 요청 제한 | `100` / `200` |

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;

//! # Authentication Configuration Module
//!
//! JWT 검증에 필요한 설정을 관리합니다.
//! 토큰 발급은 외부 인증 서버가 담당하므로, 이 서비스는 공유 비밀키만 필요합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-256-bit-key-generated-securely"
//! ```

use std::env;

/// JWT 검증 설정
pub struct JwtConfig;

impl JwtConfig {
    /// HS256 서명 검증에 사용할 비밀키를 반환합니다.
    ///
    /// 환경 변수가 설정되지 않은 경우 "your-secret-key"를 사용하며 경고 로그를 남깁니다.
    /// 프로덕션에서는 반드시 `JWT_SECRET`을 설정해야 합니다.
    ///
    /// ```bash
    /// # 안전한 JWT 키 생성
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }
}

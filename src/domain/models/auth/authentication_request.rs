use std::fmt;

/// 보호된 스코프가 요구하는 역할
///
/// 나열된 역할 중 하나 이상을 가지면 만족합니다 (OR).
#[derive(Debug, Clone, PartialEq)]
pub struct RequiredRole {
    any_of: Vec<String>,
}

impl RequiredRole {
    pub fn any(roles: &[&str]) -> Self {
        Self {
            any_of: roles.iter().map(|role| role.to_string()).collect(),
        }
    }

    /// 토큰의 역할 목록이 요구사항을 만족하는지 확인
    pub fn is_satisfied(&self, granted: &[String]) -> bool {
        self.any_of
            .iter()
            .any(|role| granted.iter().any(|g| g == role))
    }
}

impl fmt::Display for RequiredRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.any_of.join(" | "))
    }
}

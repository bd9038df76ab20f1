//! # Authentication Configuration Module
//!
//! 인증 관련 설정과 인증 프로바이더 정의를 담당합니다.
//!
//! 토큰 발급과 검증은 외부 인증 서비스가 수행하며, 이 모듈은
//! 그 서비스와 공유하는 비밀키(`SECRET_AUTH`)를 보관할 뿐입니다.

use std::fmt;
use serde::{Deserialize, Serialize};

/// 인증 비밀키 설정
#[derive(Clone, Default)]
pub struct AuthConfig {
    /// `SECRET_AUTH` 값 (토큰 서명용)
    pub secret: Option<String>,
}

impl AuthConfig {
    pub fn is_configured(&self) -> bool {
        super::is_set(&self.secret)
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &super::redact(&self.secret))
            .finish()
    }
}

/// 사용자 인증 방식
///
/// 로컬 사용자는 비밀번호 해시를 가지며, 외부 프로바이더로 가입한
/// 사용자는 비밀번호 해시를 가지지 않습니다.
/// 이 규칙은 [`User`](crate::domain::entities::users::user::User) 검증에서 강제됩니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// 로컬 이메일/패스워드 인증
    #[default]
    Local,
    /// Google OAuth 2.0 인증
    Google,
    /// GitHub OAuth 인증
    GitHub,
    /// Facebook OAuth 인증
    Facebook,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Google => "google",
            AuthProvider::GitHub => "github",
            AuthProvider::Facebook => "facebook",
        }
    }

    /// 비밀번호 기반 인증인지 여부
    pub fn uses_password(&self) -> bool {
        matches!(self, AuthProvider::Local)
    }
}

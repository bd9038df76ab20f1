use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;
use crate::domain::entities::users::User;

/// 사용자 응답 DTO
///
/// `hashed_password`는 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: Option<String>,
    pub username: String,
    pub image: String,

    /// 인증 프로바이더 (로컬, Google, GitHub 등)
    pub auth_provider: AuthProvider,

    /// OAuth 사용자인지 여부 (편의 필드)
    pub is_oauth_user: bool,

    pub registered_at: DateTime<Utc>,
    pub is_active: bool,
    pub is_superuser: bool,
    pub is_verified: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            username,
            image,
            auth_provider,
            registered_at,
            is_active,
            is_superuser,
            is_verified,
            ..
        } = user;

        let is_oauth_user = !matches!(auth_provider, AuthProvider::Local);

        Self {
            id: id.unwrap_or_default(),
            email,
            username,
            image,
            auth_provider,
            is_oauth_user,
            registered_at: DateTime::<Utc>::from_timestamp_millis(
                registered_at.timestamp_millis(),
            )
            .unwrap_or_default(),
            is_active,
            is_superuser,
            is_verified,
        }
    }
}

//! 사용자 요청 DTO
//!
//! 가입과 인증은 외부 인증 서비스가 처리합니다. 이 DTO들은 그 흐름이
//! [`UserService`](crate::services::users::UserService)를 호출할 때 사용하는 입력입니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::config::AuthProvider;
use crate::domain::entities::users::User;

/// 사용자 등록 입력
///
/// 비밀번호는 이미 해시된 상태로 전달됩니다. 인증 방식과 해시의 일관성은
/// 엔티티 검증 단계에서 확인합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUser {
    #[validate(length(min = 1, message = "사용자명은 비어 있을 수 없습니다"))]
    pub username: String,
    #[validate(length(min = 1, message = "프로필 이미지는 비어 있을 수 없습니다"))]
    pub image: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub hashed_password: Option<String>,
    #[serde(default)]
    pub auth_provider: AuthProvider,
}

impl From<RegisterUser> for User {
    fn from(dto: RegisterUser) -> Self {
        let RegisterUser {
            username,
            image,
            email,
            hashed_password,
            auth_provider,
        } = dto;

        let mut user = User::new_external(username, image, email, auth_provider);
        user.hashed_password = hashed_password;
        user
    }
}

/// 계정 상태 플래그 부분 수정
///
/// 값이 있는 플래그만 변경합니다. (비활성화, 이메일 인증 완료, 관리자 지정 등)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStatusUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_superuser: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
}

impl UserStatusUpdate {
    pub fn is_empty(&self) -> bool {
        self.is_active.is_none() && self.is_superuser.is_none() && self.is_verified.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_local_user_keeps_password() {
        let dto: RegisterUser = serde_json::from_value(serde_json::json!({
            "username": "nick",
            "image": "avatars/nick.png",
            "hashed_password": "$2b$12$hash"
        }))
        .unwrap();

        let user = User::from(dto);
        assert_eq!(user.auth_provider, AuthProvider::Local);
        assert_eq!(user.hashed_password.as_deref(), Some("$2b$12$hash"));
        assert!(user.email.is_none());
    }

    #[test]
    fn test_status_update_serializes_only_present_flags() {
        let update = UserStatusUpdate {
            is_verified: Some(true),
            ..Default::default()
        };

        assert!(!update.is_empty());
        assert!(UserStatusUpdate::default().is_empty());
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({ "is_verified": true })
        );
    }
}

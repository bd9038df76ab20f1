//! User Entity Implementation
//!
//! `user` 컬렉션에 저장되는 사용자 엔티티입니다.
//! 인증 흐름(가입, 로그인, 이메일 인증)은 외부 서비스가 담당하며,
//! 이 엔티티는 그 서비스들이 읽고 쓰는 레코드의 형태와 제약을 정의합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::config::AuthProvider;
use crate::domain::entities::Entity;

/// 사용자 엔티티
///
/// # 제약 조건
///
/// - `email`: 선택, 최대 320자, 값이 있으면 유니크
/// - `image`: 필수, 유니크 (프로필 이미지 참조)
/// - `hashed_password`: 최대 1024자, 로컬 사용자만 가짐
///
/// 플래그 필드가 없는 문서는 컬럼 기본값(`true` / `false` / `false`)으로 읽힙니다.
/// `registered_at`이 없는 문서는 읽을 수 없습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_credentials"))]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 사용자 이메일 (unique, nullable)
    #[serde(default)]
    #[validate(
        email(message = "유효한 이메일 주소를 입력해주세요"),
        length(max = 320, message = "이메일은 320자를 넘을 수 없습니다")
    )]
    pub email: Option<String>,
    pub username: String,
    /// 프로필 이미지 참조 (unique)
    pub image: String,
    /// 해시된 비밀번호 (외부 인증 사용자의 경우 None)
    #[serde(default)]
    #[validate(length(max = 1024, message = "비밀번호 해시는 1024자를 넘을 수 없습니다"))]
    pub hashed_password: Option<String>,
    #[serde(default)]
    pub auth_provider: AuthProvider,
    pub registered_at: DateTime,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub is_verified: bool,
}

fn default_true() -> bool {
    true
}

impl User {
    /// 새 로컬 사용자 생성 (비밀번호 해시 필수)
    pub fn new_local(
        username: String,
        image: String,
        email: Option<String>,
        hashed_password: String,
    ) -> Self {
        Self {
            id: None,
            email,
            username,
            image,
            hashed_password: Some(hashed_password),
            auth_provider: AuthProvider::Local,
            registered_at: DateTime::now(),
            is_active: true,
            is_superuser: false,
            is_verified: false,
        }
    }

    /// 외부 프로바이더로 가입한 사용자 생성 (비밀번호 없음)
    pub fn new_external(
        username: String,
        image: String,
        email: Option<String>,
        auth_provider: AuthProvider,
    ) -> Self {
        Self {
            hashed_password: None,
            auth_provider,
            ..Self::new_local(username, image, email, String::new())
        }
    }
}

impl Entity for User {
    const COLLECTION: &'static str = "user";
    const UNIQUE_FIELDS: &'static [&'static str] = &["email", "image"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

/// 인증 방식과 비밀번호 해시의 일관성을 검증
///
/// 로컬 사용자는 해시가 있어야 하고, 외부 인증 사용자는 해시가 없어야 합니다.
fn validate_credentials(user: &User) -> Result<(), ValidationError> {
    match (user.auth_provider.uses_password(), user.hashed_password.is_some()) {
        (true, false) => Err(ValidationError::new("password_required")
            .with_message("로컬 사용자는 비밀번호 해시가 필요합니다".into())),
        (false, true) => Err(ValidationError::new("password_not_allowed")
            .with_message("외부 인증 사용자는 비밀번호 해시를 가질 수 없습니다".into())),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document, to_document};

    #[test]
    fn test_new_local_defaults() {
        let user = User::new_local(
            "nick".to_string(),
            "avatars/nick.png".to_string(),
            Some("nick@example.com".to_string()),
            "$2b$12$hash".to_string(),
        );

        assert!(user.is_active);
        assert!(!user.is_superuser);
        assert!(!user.is_verified);
        assert_eq!(user.hashed_password.as_deref(), Some("$2b$12$hash"));
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_new_external_has_no_password() {
        let user = User::new_external(
            "nick".to_string(),
            "avatars/nick.png".to_string(),
            None,
            AuthProvider::Google,
        );

        assert!(user.hashed_password.is_none());
        assert_eq!(user.auth_provider, AuthProvider::Google);
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_local_user_without_password_is_invalid() {
        let mut user = User::new_local(
            "nick".to_string(),
            "avatars/nick.png".to_string(),
            None,
            "hash".to_string(),
        );
        user.hashed_password = None;

        let errors = user.validate().unwrap_err();
        assert!(errors.errors().contains_key("__all__"));
    }

    #[test]
    fn test_external_user_with_password_is_invalid() {
        let mut user = User::new_external(
            "nick".to_string(),
            "avatars/nick.png".to_string(),
            None,
            AuthProvider::GitHub,
        );
        user.hashed_password = Some("hash".to_string());

        assert!(user.validate().is_err());
    }

    fn error_codes(errors: &validator::ValidationErrors, field: &str) -> Vec<String> {
        errors.field_errors()[field]
            .iter()
            .map(|e| e.code.to_string())
            .collect()
    }

    #[test]
    fn test_email_length_limit() {
        // 64자 로컬 파트 + 63자 라벨 4개 = 320자
        let label = |c: &str| c.repeat(63);
        let longest = format!(
            "{}@{}.{}.{}.{}",
            "x".repeat(64),
            label("a"),
            label("b"),
            label("c"),
            label("d")
        );
        assert_eq!(longest.len(), 320);

        let mut user = User::new_local(
            "nick".to_string(),
            "avatars/nick.png".to_string(),
            Some(longest),
            "hash".to_string(),
        );
        assert!(user.validate().is_ok());

        user.email = Some(format!("{}@example.com", "a".repeat(320)));
        let errors = user.validate().unwrap_err();
        assert!(error_codes(&errors, "email").contains(&"length".to_string()));
    }

    #[test]
    fn test_password_hash_length_limit() {
        let mut user = User::new_local(
            "nick".to_string(),
            "avatars/nick.png".to_string(),
            None,
            "h".repeat(1025),
        );

        let errors = user.validate().unwrap_err();
        assert_eq!(error_codes(&errors, "hashed_password"), vec!["length".to_string()]);

        user.hashed_password = Some("h".repeat(1024));
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_document_mapping_uses_underscore_id() {
        let mut user = User::new_local(
            "nick".to_string(),
            "avatars/nick.png".to_string(),
            None,
            "hash".to_string(),
        );
        user.assign_id(7);

        let document = to_document(&user).unwrap();
        assert_eq!(document.get_i64("_id").unwrap(), 7);
        assert_eq!(document.get_str("auth_provider").unwrap(), "local");

        let back: User = from_document(document).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_missing_flags_read_with_column_defaults() {
        let user: User = from_document(doc! {
            "_id": 3_i64,
            "username": "legacy",
            "image": "avatars/legacy.png",
            "hashed_password": "hash",
            "registered_at": DateTime::from_millis(1_700_000_000_000),
        })
        .unwrap();

        assert_eq!(user.id, Some(3));
        assert_eq!(user.registered_at.timestamp_millis(), 1_700_000_000_000);
        assert!(user.email.is_none());
        assert_eq!(user.auth_provider, AuthProvider::Local);
        assert!(user.is_active);
        assert!(!user.is_superuser);
        assert!(!user.is_verified);
    }

    #[test]
    fn test_missing_registered_at_fails_to_decode() {
        let result = from_document::<User>(doc! {
            "_id": 4_i64,
            "username": "broken",
            "image": "avatars/broken.png",
            "hashed_password": "hash",
        });

        assert!(result.is_err());
    }
}

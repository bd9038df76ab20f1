//! Users Entity Module
//!
//! 사용자 엔티티를 정의합니다. 로컬(비밀번호) 인증과 외부 프로바이더 인증을 모두 표현합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! // 로컬 사용자 (해시는 외부 인증 서비스가 계산)
//! let user = User::new_local("nick".into(), "avatars/1.png".into(), Some("nick@example.com".into()), hash);
//!
//! // Google 로그인 사용자
//! let user = User::new_external("nick".into(), "avatars/2.png".into(), None, AuthProvider::Google);
//! ```

pub mod user;

pub use user::User;

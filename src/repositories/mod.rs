//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 리포지토리는 [`Storage`](crate::db::Storage) trait 객체를 공유하며,
//! 엔티티 ↔ BSON 문서 변환과 참조 무결성 확인을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::{EntityRepository, users::UserRepository};
//!
//! let places = EntityRepository::<Place>::new(storage.clone());
//! let users = UserRepository::new(storage);
//! let user = users.find_by_email("user@example.com").await?;
//! ```

pub mod entity_repo;
pub mod users;

pub use entity_repo::EntityRepository;
pub use users::UserRepository;

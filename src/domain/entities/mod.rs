//! # Domain Entities Module
//!
//! 저장소에 영속되는 핵심 엔티티들을 정의합니다.
//! 각 엔티티는 MongoDB 문서와 1:1로 매핑되며, `_id`는 저장소가 발급하는 정수입니다.
//!
//! ```text
//! entities/
//! ├── mod.rs      ← Entity trait, Reference
//! ├── users/      ← User
//! └── places/     ← Place, Review, PlaceImage
//! ```
//!
//! ## Entity trait
//!
//! 여러 엔티티에 공통인 "식별자를 가진다"는 능력을 표현합니다.
//! [`EntityRepository`](crate::repositories::EntityRepository)는 이 trait만으로
//! 생성/조회/교체/삭제를 처리합니다.
//!
//! ```rust,ignore
//! impl Entity for Place {
//!     const COLLECTION: &'static str = "place";
//!
//!     fn id(&self) -> Option<i64> { self.id }
//!     fn assign_id(&mut self, id: i64) { self.id = Some(id); }
//! }
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod users;
pub mod places;

/// 다른 컬렉션의 레코드를 가리키는 외래 키 하나
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    /// 참조하는 쪽의 필드 이름 (예: `place_id`)
    pub field: &'static str,
    /// 참조 대상 컬렉션
    pub collection: &'static str,
    /// 참조 대상 ID
    pub id: i64,
}

/// 저장소가 발급한 식별자를 가지는 영속 엔티티
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// 저장되는 컬렉션 이름
    const COLLECTION: &'static str;

    /// 유니크 제약이 걸린 필드들 (값이 있는 문서끼리만 비교)
    const UNIQUE_FIELDS: &'static [&'static str] = &[];

    fn id(&self) -> Option<i64>;

    fn assign_id(&mut self, id: i64);

    /// 저장 전에 존재 여부를 확인해야 하는 외래 키 목록
    fn references(&self) -> Vec<Reference> {
        Vec::new()
    }
}

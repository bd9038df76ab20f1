//! Storage Module
//!
//! 엔티티 문서를 저장하는 저장소 추상화입니다.
//! 리포지토리는 [`Storage`] trait에만 의존하며, 운영 환경에서는
//! [`MongoStorage`]가, 테스트에서는 메모리 구현이 주입됩니다.
//!
//! # 저장소가 보장하는 제약
//!
//! - `_id`는 컬렉션별 증가 시퀀스에서 발급 (1부터 시작, 재사용하지 않음)
//! - [`Storage::ensure_unique`]로 등록한 필드는 문자열 값끼리 유니크
//!   (값이 없거나 `null`인 문서끼리는 충돌하지 않음)
//! - 유니크 위반은 [`AppError::ConflictError`](crate::errors::AppError::ConflictError)로 보고
//!
//! ```rust,ignore
//! let storage: Arc<dyn Storage> = Arc::new(MongoStorage::connect(&settings.database).await?);
//! let id = storage.next_id("place").await?;
//! ```

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};
use crate::errors::AppResult;

pub mod mongo;
#[cfg(test)]
pub mod memory;

pub use mongo::MongoStorage;
#[cfg(test)]
pub use memory::MemoryStorage;

/// 정수 `_id`로 식별되는 BSON 문서 저장소
#[async_trait]
pub trait Storage: Send + Sync {
    /// 컬렉션의 필드들에 유니크 제약을 등록합니다. 여러 번 호출해도 안전합니다.
    async fn ensure_unique(&self, collection: &str, fields: &[&'static str]) -> AppResult<()>;

    /// 컬렉션의 다음 ID를 발급합니다.
    async fn next_id(&self, collection: &str) -> AppResult<i64>;

    async fn insert(&self, collection: &str, document: Document) -> AppResult<()>;

    async fn find_by_id(&self, collection: &str, id: i64) -> AppResult<Option<Document>>;

    /// 컬렉션의 모든 문서 (`_id` 오름차순)
    async fn find_all(&self, collection: &str) -> AppResult<Vec<Document>>;

    /// `field == value`인 문서들 (`_id` 오름차순)
    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: Bson,
    ) -> AppResult<Vec<Document>>;

    async fn count_by_field(&self, collection: &str, field: &str, value: Bson) -> AppResult<u64>;

    /// 문서 전체를 교체합니다. 대상이 없으면 `false`.
    async fn replace(&self, collection: &str, id: i64, document: Document) -> AppResult<bool>;

    /// 지정한 필드만 `$set`하고 변경된 문서를 반환합니다.
    async fn update_fields(
        &self,
        collection: &str,
        id: i64,
        fields: Document,
    ) -> AppResult<Option<Document>>;

    /// 대상이 없으면 `false`.
    async fn delete(&self, collection: &str, id: i64) -> AppResult<bool>;
}

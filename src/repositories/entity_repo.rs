//! # 범용 엔티티 리포지토리
//!
//! [`Entity`]를 구현한 모든 타입에 대해 생성/조회/교체/삭제를 제공합니다.
//!
//! ## 참조 무결성
//!
//! 생성과 교체 전에 [`Entity::references`]가 가리키는 레코드가 모두 존재하는지
//! 확인하고, 없으면 [`AppError::ReferenceError`]로 거부합니다.
//! 확인과 저장은 하나의 원자적 연산이 아닙니다.
//!
//! ```rust,ignore
//! let reviews = EntityRepository::<Review>::new(storage.clone());
//! reviews.init().await?;
//!
//! // place_id 999가 없으면 ReferenceError
//! let review = reviews.create(Review::new("Great place".into(), 1, 999)).await;
//! ```

use std::marker::PhantomData;
use std::sync::Arc;
use mongodb::bson::{self, Bson, Document};
use crate::db::Storage;
use crate::domain::entities::Entity;
use crate::errors::{AppError, AppResult, ErrorContext};

/// `E` 타입 엔티티의 데이터 액세스 리포지토리
pub struct EntityRepository<E: Entity> {
    storage: Arc<dyn Storage>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> Clone for EntityRepository<E> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> EntityRepository<E> {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            _entity: PhantomData,
        }
    }

    /// 컬렉션 초기화 (유니크 제약 등록)
    ///
    /// 애플리케이션 시작 시 한 번 호출합니다.
    pub async fn init(&self) -> AppResult<()> {
        self.storage
            .ensure_unique(E::COLLECTION, E::UNIQUE_FIELDS)
            .await
    }

    /// 새 엔티티 저장
    ///
    /// # 반환값
    ///
    /// * `Ok(E)` - ID가 할당된 엔티티
    /// * `Err(AppError::ReferenceError)` - 존재하지 않는 레코드 참조
    /// * `Err(AppError::ConflictError)` - 유니크 필드 중복
    pub async fn create(&self, mut entity: E) -> AppResult<E> {
        self.check_references(&entity).await?;

        let id = self.storage.next_id(E::COLLECTION).await?;
        entity.assign_id(id);

        self.storage
            .insert(E::COLLECTION, encode(&entity)?)
            .await?;

        Ok(entity)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<E>> {
        self.storage
            .find_by_id(E::COLLECTION, id)
            .await?
            .map(decode)
            .transpose()
    }

    /// 모든 엔티티 (ID 오름차순)
    pub async fn find_all(&self) -> AppResult<Vec<E>> {
        self.storage
            .find_all(E::COLLECTION)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    pub async fn find_by_field(&self, field: &str, value: impl Into<Bson>) -> AppResult<Vec<E>> {
        self.storage
            .find_by_field(E::COLLECTION, field, value.into())
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    pub async fn count_by_field(&self, field: &str, value: impl Into<Bson>) -> AppResult<u64> {
        self.storage
            .count_by_field(E::COLLECTION, field, value.into())
            .await
    }

    /// 기존 엔티티를 통째로 교체
    ///
    /// * `Ok(None)` - 해당 ID의 엔티티가 없음
    pub async fn replace(&self, id: i64, mut entity: E) -> AppResult<Option<E>> {
        if self.storage.find_by_id(E::COLLECTION, id).await?.is_none() {
            return Ok(None);
        }

        self.check_references(&entity).await?;
        entity.assign_id(id);

        let replaced = self
            .storage
            .replace(E::COLLECTION, id, encode(&entity)?)
            .await?;

        Ok(replaced.then_some(entity))
    }

    /// 지정한 필드만 수정하고 수정된 엔티티를 반환
    pub async fn update_fields(&self, id: i64, fields: Document) -> AppResult<Option<E>> {
        self.storage
            .update_fields(E::COLLECTION, id, fields)
            .await?
            .map(decode)
            .transpose()
    }

    /// * `Ok(false)` - 해당 ID의 엔티티가 없음
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        self.storage.delete(E::COLLECTION, id).await
    }

    async fn check_references(&self, entity: &E) -> AppResult<()> {
        for reference in entity.references() {
            let exists = self
                .storage
                .find_by_id(reference.collection, reference.id)
                .await?
                .is_some();

            if !exists {
                return Err(AppError::ReferenceError(format!(
                    "{}={} 에 해당하는 {} 레코드가 없습니다",
                    reference.field, reference.id, reference.collection
                )));
            }
        }
        Ok(())
    }
}

fn encode<E: Entity>(entity: &E) -> AppResult<Document> {
    bson::to_document(entity).with_context(|| format!("{} 문서 변환 실패", E::COLLECTION))
}

fn decode<E: Entity>(document: Document) -> AppResult<E> {
    bson::from_document(document).context("저장된 문서를 읽을 수 없습니다")
}

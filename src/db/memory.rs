//! 테스트용 메모리 저장소
//!
//! MongoDB 없이 리포지토리/서비스/핸들러를 검증하기 위한 [`Storage`] 구현입니다.
//! 유니크 제약은 MongoDB partial 인덱스와 같은 규칙(문자열 값끼리만 비교)을 따릅니다.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use async_trait::async_trait;
use mongodb::bson::{Bson, Document};
use crate::db::Storage;
use crate::errors::{AppError, AppResult};

#[derive(Default)]
struct Inner {
    collections: HashMap<String, BTreeMap<i64, Document>>,
    counters: HashMap<String, i64>,
    unique: HashMap<String, Vec<&'static str>>,
}

impl Inner {
    fn check_unique(&self, collection: &str, id: i64, document: &Document) -> AppResult<()> {
        let (Some(fields), Some(rows)) = (self.unique.get(collection), self.collections.get(collection))
        else {
            return Ok(());
        };

        for field in fields {
            let Some(Bson::String(value)) = document.get(*field) else {
                continue;
            };

            let taken = rows.iter().any(|(other_id, other)| {
                *other_id != id && matches!(other.get(*field), Some(Bson::String(v)) if v == value)
            });

            if taken {
                return Err(AppError::ConflictError(format!(
                    "이미 사용 중인 값입니다: {}",
                    field
                )));
            }
        }

        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    inner: Mutex<Inner>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| AppError::InternalError("메모리 저장소 잠금 실패".to_string()))
    }
}

fn document_id(document: &Document) -> AppResult<i64> {
    document
        .get_i64("_id")
        .map_err(|e| AppError::InternalError(format!("문서에 _id가 없습니다: {}", e)))
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn ensure_unique(&self, collection: &str, fields: &[&'static str]) -> AppResult<()> {
        let mut inner = self.lock()?;
        let registered = inner.unique.entry(collection.to_string()).or_default();
        for field in fields {
            if !registered.contains(field) {
                registered.push(*field);
            }
        }
        Ok(())
    }

    async fn next_id(&self, collection: &str) -> AppResult<i64> {
        let mut inner = self.lock()?;
        let seq = inner.counters.entry(collection.to_string()).or_insert(0);
        *seq += 1;
        Ok(*seq)
    }

    async fn insert(&self, collection: &str, document: Document) -> AppResult<()> {
        let id = document_id(&document)?;
        let mut inner = self.lock()?;

        if inner
            .collections
            .get(collection)
            .is_some_and(|rows| rows.contains_key(&id))
        {
            return Err(AppError::ConflictError(format!("이미 존재하는 ID입니다: {}", id)));
        }
        inner.check_unique(collection, id, &document)?;

        inner
            .collections
            .entry(collection.to_string())
            .or_default()
            .insert(id, document);
        Ok(())
    }

    async fn find_by_id(&self, collection: &str, id: i64) -> AppResult<Option<Document>> {
        let inner = self.lock()?;
        Ok(inner
            .collections
            .get(collection)
            .and_then(|rows| rows.get(&id))
            .cloned())
    }

    async fn find_all(&self, collection: &str) -> AppResult<Vec<Document>> {
        let inner = self.lock()?;
        Ok(inner
            .collections
            .get(collection)
            .map(|rows| rows.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: Bson,
    ) -> AppResult<Vec<Document>> {
        let inner = self.lock()?;
        Ok(inner
            .collections
            .get(collection)
            .map(|rows| {
                rows.values()
                    .filter(|document| document.get(field) == Some(&value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn count_by_field(&self, collection: &str, field: &str, value: Bson) -> AppResult<u64> {
        let matches = self.find_by_field(collection, field, value).await?;
        Ok(matches.len() as u64)
    }

    async fn replace(&self, collection: &str, id: i64, mut document: Document) -> AppResult<bool> {
        let mut inner = self.lock()?;
        let exists = inner
            .collections
            .get(collection)
            .is_some_and(|rows| rows.contains_key(&id));
        if !exists {
            return Ok(false);
        }

        document.insert("_id", id);
        inner.check_unique(collection, id, &document)?;
        inner
            .collections
            .entry(collection.to_string())
            .or_default()
            .insert(id, document);
        Ok(true)
    }

    async fn update_fields(
        &self,
        collection: &str,
        id: i64,
        fields: Document,
    ) -> AppResult<Option<Document>> {
        let mut inner = self.lock()?;
        let Some(current) = inner
            .collections
            .get(collection)
            .and_then(|rows| rows.get(&id))
            .cloned()
        else {
            return Ok(None);
        };

        let mut updated = current;
        for (key, value) in fields {
            updated.insert(key, value);
        }
        inner.check_unique(collection, id, &updated)?;
        inner
            .collections
            .entry(collection.to_string())
            .or_default()
            .insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, collection: &str, id: i64) -> AppResult<bool> {
        let mut inner = self.lock()?;
        Ok(inner
            .collections
            .get_mut(collection)
            .and_then(|rows| rows.remove(&id))
            .is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[actix_web::test]
    async fn test_ids_are_sequential_per_collection() {
        let storage = MemoryStorage::new();

        assert_eq!(storage.next_id("place").await.unwrap(), 1);
        assert_eq!(storage.next_id("place").await.unwrap(), 2);
        assert_eq!(storage.next_id("review").await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_unique_fields_ignore_missing_values() {
        let storage = MemoryStorage::new();
        storage.ensure_unique("user", &["email"]).await.unwrap();

        storage.insert("user", doc! { "_id": 1_i64, "email": Bson::Null }).await.unwrap();
        storage.insert("user", doc! { "_id": 2_i64 }).await.unwrap();
        storage.insert("user", doc! { "_id": 3_i64, "email": "a@b.com" }).await.unwrap();

        let result = storage.insert("user", doc! { "_id": 4_i64, "email": "a@b.com" }).await;
        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_update_fields_checks_uniqueness() {
        let storage = MemoryStorage::new();
        storage.ensure_unique("user", &["image"]).await.unwrap();
        storage.insert("user", doc! { "_id": 1_i64, "image": "a.png" }).await.unwrap();
        storage.insert("user", doc! { "_id": 2_i64, "image": "b.png" }).await.unwrap();

        let result = storage.update_fields("user", 2, doc! { "image": "a.png" }).await;
        assert!(matches!(result, Err(AppError::ConflictError(_))));

        let same = storage.update_fields("user", 1, doc! { "image": "a.png" }).await.unwrap();
        assert!(same.is_some());
        assert!(storage.update_fields("user", 9, doc! { "image": "c.png" }).await.unwrap().is_none());
    }
}

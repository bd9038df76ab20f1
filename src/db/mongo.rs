//! MongoDB Storage
//!
//! MongoDB 연결과 [`Storage`] 구현입니다.
//!
//! # 컬렉션 구성
//!
//! | 컬렉션 | 내용 |
//! |--------|------|
//! | `user`, `place`, `review`, `place_image` | 엔티티 문서 (`_id`: i64) |
//! | `counters` | 컬렉션별 ID 시퀀스 (`{ _id: "<collection>", seq: i64 }`) |

use async_trait::async_trait;
use futures_util::StreamExt;
use log::{debug, info};
use mongodb::{
    bson::{doc, Bson, Document},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::{ClientOptions, FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Client, Collection, Cursor, IndexModel,
};
use crate::config::DatabaseConfig;
use crate::db::Storage;
use crate::errors::{AppError, AppResult};

/// ID 시퀀스를 보관하는 컬렉션
const COUNTERS_COLLECTION: &str = "counters";

/// MongoDB duplicate key 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB 데이터베이스 연결 래퍼
///
/// `Client`는 내부적으로 커넥션 풀을 가지므로 clone해서 공유해도 됩니다.
#[derive(Clone)]
pub struct MongoStorage {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl MongoStorage {
    /// 설정으로부터 MongoDB에 연결하고 `ping`으로 연결 상태를 확인합니다.
    ///
    /// 설정값은 검증하지 않으므로, 비어 있는 값은 여기서 연결 실패로 드러납니다.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let database_name = config.database_name();
        let uri = config.connection_uri();

        let mut client_options = ClientOptions::parse(uri.as_str()).await?;
        client_options.app_name = Some("bubbles_backend".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&database_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.get_database().collection::<Document>(name)
    }
}

/// 쓰기 에러를 AppError로 변환 (duplicate key → 409)
fn map_write_error(error: MongoError) -> AppError {
    if is_duplicate_key(&error) {
        AppError::ConflictError("이미 사용 중인 값입니다".to_string())
    } else {
        AppError::DatabaseError(error.to_string())
    }
}

fn is_duplicate_key(error: &MongoError) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(e) => e.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

fn db_error(error: MongoError) -> AppError {
    AppError::DatabaseError(error.to_string())
}

async fn collect(mut cursor: Cursor<Document>) -> AppResult<Vec<Document>> {
    let mut documents = Vec::new();
    while let Some(document) = cursor.next().await {
        documents.push(document.map_err(db_error)?);
    }
    Ok(documents)
}

#[async_trait]
impl Storage for MongoStorage {
    /// 필드별 유니크 partial 인덱스(`{field}_unique`)를 생성합니다.
    ///
    /// 문자열 값을 가진 문서만 인덱스에 포함되므로 이메일이 없는 사용자끼리는 충돌하지 않습니다.
    async fn ensure_unique(&self, collection: &str, fields: &[&'static str]) -> AppResult<()> {
        if fields.is_empty() {
            return Ok(());
        }

        let indexes: Vec<IndexModel> = fields
            .iter()
            .map(|&field| {
                IndexModel::builder()
                    .keys(doc! { field: 1 })
                    .options(
                        IndexOptions::builder()
                            .unique(true)
                            .name(format!("{}_unique", field))
                            .partial_filter_expression(doc! { field: { "$type": "string" } })
                            .build(),
                    )
                    .build()
            })
            .collect();

        self.collection(collection)
            .create_indexes(indexes)
            .await
            .map_err(db_error)?;

        debug!("유니크 인덱스 확인: {} {:?}", collection, fields);
        Ok(())
    }

    async fn next_id(&self, collection: &str) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .collection(COUNTERS_COLLECTION)
            .find_one_and_update(doc! { "_id": collection }, doc! { "$inc": { "seq": 1_i64 } })
            .with_options(options)
            .await
            .map_err(db_error)?
            .ok_or_else(|| {
                AppError::DatabaseError(format!("ID 시퀀스를 발급할 수 없습니다: {}", collection))
            })?;

        match counter.get("seq") {
            Some(Bson::Int64(seq)) => Ok(*seq),
            Some(Bson::Int32(seq)) => Ok(i64::from(*seq)),
            _ => Err(AppError::DatabaseError(format!(
                "잘못된 ID 시퀀스 문서입니다: {}",
                collection
            ))),
        }
    }

    async fn insert(&self, collection: &str, document: Document) -> AppResult<()> {
        self.collection(collection)
            .insert_one(document)
            .await
            .map_err(map_write_error)?;
        Ok(())
    }

    async fn find_by_id(&self, collection: &str, id: i64) -> AppResult<Option<Document>> {
        self.collection(collection)
            .find_one(doc! { "_id": id })
            .await
            .map_err(db_error)
    }

    async fn find_all(&self, collection: &str) -> AppResult<Vec<Document>> {
        let cursor = self
            .collection(collection)
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await
            .map_err(db_error)?;

        collect(cursor).await
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: Bson,
    ) -> AppResult<Vec<Document>> {
        let cursor = self
            .collection(collection)
            .find(doc! { field: value })
            .sort(doc! { "_id": 1 })
            .await
            .map_err(db_error)?;

        collect(cursor).await
    }

    async fn count_by_field(&self, collection: &str, field: &str, value: Bson) -> AppResult<u64> {
        self.collection(collection)
            .count_documents(doc! { field: value })
            .await
            .map_err(db_error)
    }

    async fn replace(&self, collection: &str, id: i64, document: Document) -> AppResult<bool> {
        let result = self
            .collection(collection)
            .replace_one(doc! { "_id": id }, document)
            .await
            .map_err(map_write_error)?;

        Ok(result.matched_count > 0)
    }

    async fn update_fields(
        &self,
        collection: &str,
        id: i64,
        fields: Document,
    ) -> AppResult<Option<Document>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection(collection)
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": fields })
            .with_options(options)
            .await
            .map_err(map_write_error)
    }

    async fn delete(&self, collection: &str, id: i64) -> AppResult<bool> {
        let result = self
            .collection(collection)
            .delete_one(doc! { "_id": id })
            .await
            .map_err(db_error)?;

        Ok(result.deleted_count > 0)
    }
}

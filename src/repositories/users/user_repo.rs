//! # 사용자 리포지토리 구현
//!
//! 범용 [`EntityRepository`]에 사용자 전용 조회와 상태 플래그 수정을 더한 리포지토리입니다.
//!
//! ## 인덱스
//!
//! - `email_unique`: 이메일이 있는 사용자끼리 유니크
//! - `image_unique`: 프로필 이미지 참조 유니크

use std::ops::Deref;
use std::sync::Arc;
use mongodb::bson;
use crate::db::Storage;
use crate::domain::dto::users::UserStatusUpdate;
use crate::domain::entities::users::User;
use crate::errors::{AppResult, ErrorContext};
use crate::repositories::EntityRepository;

/// 사용자 데이터 액세스 리포지토리
///
/// 공통 CRUD는 `Deref`로 내부 [`EntityRepository<User>`]에 위임합니다.
#[derive(Clone)]
pub struct UserRepository {
    inner: EntityRepository<User>,
}

impl UserRepository {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            inner: EntityRepository::new(storage),
        }
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .inner
            .find_by_field("email", email)
            .await?
            .into_iter()
            .next())
    }

    /// 계정 상태 플래그 수정
    ///
    /// 값이 지정된 플래그만 `$set`합니다. 변경할 플래그가 없으면 현재 상태를 그대로 반환합니다.
    ///
    /// * `Ok(None)` - 해당 ID의 사용자가 존재하지 않음
    pub async fn update_status(&self, id: i64, update: &UserStatusUpdate) -> AppResult<Option<User>> {
        if update.is_empty() {
            return self.inner.find_by_id(id).await;
        }

        let fields = bson::to_document(update).context("상태 플래그 변환 실패")?;
        self.inner.update_fields(id, fields).await
    }
}

impl Deref for UserRepository {
    type Target = EntityRepository<User>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

use std::sync::Arc;
use crate::db::Storage;
use crate::domain::dto::places::{PlaceImageCreate, PlaceImageRead, PlaceImageUpdate};
use crate::domain::entities::places::PlaceImage;
use crate::errors::{AppError, AppResult};
use crate::repositories::EntityRepository;

/// 장소 사진 메타데이터 서비스
///
/// 파일 업로드는 외부에서 끝난 뒤 이름과 URL만 등록됩니다.
#[derive(Clone)]
pub struct PlaceImageService {
    images: EntityRepository<PlaceImage>,
}

impl PlaceImageService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            images: EntityRepository::new(storage),
        }
    }

    pub async fn init(&self) -> AppResult<()> {
        self.images.init().await
    }

    pub async fn create_image(&self, request: PlaceImageCreate) -> AppResult<PlaceImageRead> {
        let created = self
            .images
            .create(PlaceImage::from(request))
            .await
            .inspect_err(|e| log::warn!("장소 사진 등록 거부: {}", e))?;

        log::info!("장소 사진 등록: {} (장소 {})", created.photo_name, created.place_id);
        Ok(PlaceImageRead::from(created))
    }

    pub async fn get_image(&self, id: i64) -> AppResult<PlaceImageRead> {
        self.images
            .find_by_id(id)
            .await?
            .map(PlaceImageRead::from)
            .ok_or_else(|| not_found(id))
    }

    pub async fn update_image(&self, id: i64, request: PlaceImageUpdate) -> AppResult<PlaceImageRead> {
        let updated = self
            .images
            .replace(id, PlaceImage::from(request))
            .await
            .inspect_err(|e| log::warn!("장소 사진 수정 거부: {} ({})", id, e))?
            .ok_or_else(|| not_found(id))?;

        log::info!("장소 사진 수정: {}", id);
        Ok(PlaceImageRead::from(updated))
    }

    pub async fn delete_image(&self, id: i64) -> AppResult<()> {
        if !self.images.delete(id).await? {
            return Err(not_found(id));
        }

        log::info!("장소 사진 삭제: {}", id);
        Ok(())
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("장소 사진을 찾을 수 없습니다: {}", id))
}

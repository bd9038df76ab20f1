//! # 장소 서비스
//!
//! 장소 CRUD와 장소별 리뷰/사진 조회를 담당합니다.
//!
//! 장소는 다른 레코드를 참조하지 않지만, 리뷰와 사진이 장소를 참조하므로
//! 참조 중인 장소는 삭제할 수 없습니다.

use std::sync::Arc;
use crate::db::Storage;
use crate::domain::dto::places::{PlaceCreate, PlaceImageRead, PlaceRead, PlaceUpdate, ReviewRead};
use crate::domain::entities::places::{Place, PlaceImage, Review};
use crate::errors::{AppError, AppResult};
use crate::repositories::EntityRepository;

#[derive(Clone)]
pub struct PlaceService {
    places: EntityRepository<Place>,
    reviews: EntityRepository<Review>,
    images: EntityRepository<PlaceImage>,
}

impl PlaceService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            places: EntityRepository::new(storage.clone()),
            reviews: EntityRepository::new(storage.clone()),
            images: EntityRepository::new(storage),
        }
    }

    pub async fn init(&self) -> AppResult<()> {
        self.places.init().await
    }

    pub async fn list_places(&self) -> AppResult<Vec<PlaceRead>> {
        let places = self.places.find_all().await?;
        Ok(places.into_iter().map(PlaceRead::from).collect())
    }

    pub async fn create_place(&self, request: PlaceCreate) -> AppResult<PlaceRead> {
        let created = self.places.create(Place::from(request)).await?;
        log::info!("장소 생성: {} ({:?})", created.title, created.id);
        Ok(PlaceRead::from(created))
    }

    /// ID로 장소 조회
    ///
    /// * `Err(AppError::NotFound)` - 해당 ID의 장소가 존재하지 않음
    pub async fn get_place(&self, id: i64) -> AppResult<PlaceRead> {
        self.find(id).await.map(PlaceRead::from)
    }

    /// 장소 전체 교체
    pub async fn update_place(&self, id: i64, request: PlaceUpdate) -> AppResult<PlaceRead> {
        let updated = self
            .places
            .replace(id, Place::from(request))
            .await?
            .ok_or_else(|| not_found(id))?;

        log::info!("장소 수정: {}", id);
        Ok(PlaceRead::from(updated))
    }

    /// 장소 삭제
    ///
    /// * `Err(AppError::ConflictError)` - 리뷰나 사진이 아직 이 장소를 참조하는 경우
    pub async fn delete_place(&self, id: i64) -> AppResult<()> {
        self.find(id).await?;

        let review_count = self.reviews.count_by_field("place_id", id).await?;
        let image_count = self.images.count_by_field("place_id", id).await?;
        if review_count > 0 || image_count > 0 {
            log::warn!(
                "참조 중인 장소 삭제 거부: {} (리뷰 {}, 사진 {})",
                id,
                review_count,
                image_count
            );
            return Err(AppError::ConflictError(format!(
                "장소 {}를 참조하는 리뷰 {}개, 사진 {}개가 있습니다",
                id, review_count, image_count
            )));
        }

        // 카운트와 삭제는 원자적이지 않음
        if !self.places.delete(id).await? {
            return Err(not_found(id));
        }

        log::info!("장소 삭제: {}", id);
        Ok(())
    }

    /// 장소에 달린 리뷰 목록
    pub async fn list_reviews(&self, place_id: i64) -> AppResult<Vec<ReviewRead>> {
        self.find(place_id).await?;
        let reviews = self.reviews.find_by_field("place_id", place_id).await?;
        Ok(reviews.into_iter().map(ReviewRead::from).collect())
    }

    /// 장소 사진 목록
    pub async fn list_images(&self, place_id: i64) -> AppResult<Vec<PlaceImageRead>> {
        self.find(place_id).await?;
        let images = self.images.find_by_field("place_id", place_id).await?;
        Ok(images.into_iter().map(PlaceImageRead::from).collect())
    }

    async fn find(&self, id: i64) -> AppResult<Place> {
        self.places.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("장소를 찾을 수 없습니다: {}", id))
}

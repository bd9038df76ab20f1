use std::sync::Arc;
use crate::db::Storage;
use crate::domain::dto::places::{ReviewCreate, ReviewRead, ReviewUpdate};
use crate::domain::entities::places::Review;
use crate::errors::{AppError, AppResult};
use crate::repositories::EntityRepository;

/// 리뷰 서비스
///
/// 작성자(`creator_id`)와 장소(`place_id`)의 존재 여부는 리포지토리가 확인합니다.
#[derive(Clone)]
pub struct ReviewService {
    reviews: EntityRepository<Review>,
}

impl ReviewService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            reviews: EntityRepository::new(storage),
        }
    }

    pub async fn init(&self) -> AppResult<()> {
        self.reviews.init().await
    }

    pub async fn create_review(&self, request: ReviewCreate) -> AppResult<ReviewRead> {
        let created = self
            .reviews
            .create(Review::from(request))
            .await
            .inspect_err(|e| log::warn!("리뷰 생성 거부: {}", e))?;

        log::info!("리뷰 생성: {:?} (장소 {})", created.id, created.place_id);
        Ok(ReviewRead::from(created))
    }

    pub async fn get_review(&self, id: i64) -> AppResult<ReviewRead> {
        self.reviews
            .find_by_id(id)
            .await?
            .map(ReviewRead::from)
            .ok_or_else(|| not_found(id))
    }

    pub async fn update_review(&self, id: i64, request: ReviewUpdate) -> AppResult<ReviewRead> {
        let updated = self
            .reviews
            .replace(id, Review::from(request))
            .await
            .inspect_err(|e| log::warn!("리뷰 수정 거부: {} ({})", id, e))?
            .ok_or_else(|| not_found(id))?;

        log::info!("리뷰 수정: {}", id);
        Ok(ReviewRead::from(updated))
    }

    pub async fn delete_review(&self, id: i64) -> AppResult<()> {
        if !self.reviews.delete(id).await? {
            return Err(not_found(id));
        }

        log::info!("리뷰 삭제: {}", id);
        Ok(())
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("리뷰를 찾을 수 없습니다: {}", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStorage;
    use crate::domain::entities::places::Place;
    use crate::domain::entities::users::User;

    async fn seeded() -> ReviewService {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        EntityRepository::<User>::new(storage.clone())
            .create(User::new_local(
                "nick".to_string(),
                "avatars/nick.png".to_string(),
                None,
                "hash".to_string(),
            ))
            .await
            .unwrap();
        EntityRepository::<Place>::new(storage.clone())
            .create(Place::new("Central Park".to_string(), 40.785, -73.968))
            .await
            .unwrap();
        ReviewService::new(storage)
    }

    fn review(text: &str, creator_id: i64, place_id: i64) -> ReviewCreate {
        ReviewCreate {
            text: text.to_string(),
            creator_id,
            place_id,
        }
    }

    #[actix_web::test]
    async fn test_review_for_unknown_place_is_rejected() {
        let service = seeded().await;

        let result = service.create_review(review("Great place", 1, 999)).await;
        assert!(matches!(result, Err(AppError::ReferenceError(_))));
    }

    #[actix_web::test]
    async fn test_review_for_unknown_creator_is_rejected() {
        let service = seeded().await;

        let result = service.create_review(review("Great place", 5, 1)).await;
        assert!(matches!(result, Err(AppError::ReferenceError(_))));
    }

    #[actix_web::test]
    async fn test_review_lifecycle() {
        let service = seeded().await;

        let created = service.create_review(review("Great place", 1, 1)).await.unwrap();
        assert_eq!(created.id, 1);

        let updated = service
            .update_review(created.id, review("Even better", 1, 1))
            .await
            .unwrap();
        assert_eq!(updated.text, "Even better");
        assert_eq!(service.get_review(1).await.unwrap(), updated);

        assert!(matches!(
            service.update_review(1, review("Moved", 1, 999)).await,
            Err(AppError::ReferenceError(_))
        ));

        service.delete_review(1).await.unwrap();
        assert!(matches!(service.get_review(1).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.delete_review(1).await, Err(AppError::NotFound(_))));
    }
}

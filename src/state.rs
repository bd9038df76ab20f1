//! 애플리케이션 공유 상태
//!
//! 서비스들은 하나의 [`Storage`] 구현을 공유하며, `web::Data<AppState>`로
//! 모든 워커에 전달됩니다.

use std::sync::Arc;
use crate::db::Storage;
use crate::errors::AppResult;
use crate::services::places::{PlaceImageService, PlaceService, ReviewService};
use crate::services::users::UserService;

#[derive(Clone)]
pub struct AppState {
    pub places: PlaceService,
    pub reviews: ReviewService,
    pub images: PlaceImageService,
    pub users: UserService,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            places: PlaceService::new(storage.clone()),
            reviews: ReviewService::new(storage.clone()),
            images: PlaceImageService::new(storage.clone()),
            users: UserService::new(storage),
        }
    }

    /// 컬렉션별 유니크 제약 등록
    pub async fn init(&self) -> AppResult<()> {
        self.users.init().await?;
        self.places.init().await?;
        self.reviews.init().await?;
        self.images.init().await?;
        Ok(())
    }
}

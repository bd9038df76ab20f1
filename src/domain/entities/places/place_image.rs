use serde::{Deserialize, Serialize};
use crate::domain::entities::{Entity, Reference};
use crate::domain::entities::places::Place;

/// 장소 사진
///
/// 파일 자체는 오브젝트 스토리지에 있으며, 여기에는 이름과 URL만 저장합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceImage {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub photo_name: String,
    pub photo_url: String,
    pub place_id: i64,
}

impl PlaceImage {
    pub fn new(photo_name: String, photo_url: String, place_id: i64) -> Self {
        Self {
            id: None,
            photo_name,
            photo_url,
            place_id,
        }
    }
}

impl Entity for PlaceImage {
    const COLLECTION: &'static str = "place_image";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn references(&self) -> Vec<Reference> {
        vec![Reference {
            field: "place_id",
            collection: Place::COLLECTION,
            id: self.place_id,
        }]
    }
}

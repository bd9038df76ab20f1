use serde::{Deserialize, Serialize};
use crate::domain::entities::{Entity, Reference};
use crate::domain::entities::places::Place;
use crate::domain::entities::users::User;

/// 사용자가 장소에 남긴 리뷰
///
/// `creator_id`와 `place_id`는 저장 시점에 존재하는 레코드를 가리켜야 합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub text: String,
    pub creator_id: i64,
    pub place_id: i64,
}

impl Review {
    pub fn new(text: String, creator_id: i64, place_id: i64) -> Self {
        Self {
            id: None,
            text,
            creator_id,
            place_id,
        }
    }
}

impl Entity for Review {
    const COLLECTION: &'static str = "review";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn references(&self) -> Vec<Reference> {
        vec![
            Reference {
                field: "creator_id",
                collection: User::COLLECTION,
                id: self.creator_id,
            },
            Reference {
                field: "place_id",
                collection: Place::COLLECTION,
                id: self.place_id,
            },
        ]
    }
}

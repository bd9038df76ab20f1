use serde::{Deserialize, Serialize};
use crate::domain::entities::Entity;

/// 지도에 표시되는 장소
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Place {
    pub fn new(title: String, latitude: f64, longitude: f64) -> Self {
        Self {
            id: None,
            title,
            latitude,
            longitude,
        }
    }
}

impl Entity for Place {
    const COLLECTION: &'static str = "place";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

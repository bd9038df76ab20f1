use serde::{Deserialize, Serialize};
use crate::domain::entities::places::{Place, PlaceImage, Review};

/// 장소 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRead {
    pub id: i64,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Place> for PlaceRead {
    fn from(place: Place) -> Self {
        let Place {
            id,
            title,
            latitude,
            longitude,
        } = place;

        Self {
            id: id.unwrap_or_default(),
            title,
            latitude,
            longitude,
        }
    }
}

/// 리뷰 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRead {
    pub id: i64,
    pub text: String,
    pub creator_id: i64,
    pub place_id: i64,
}

impl From<Review> for ReviewRead {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.unwrap_or_default(),
            text: review.text,
            creator_id: review.creator_id,
            place_id: review.place_id,
        }
    }
}

/// 장소 사진 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceImageRead {
    pub id: i64,
    pub photo_name: String,
    pub photo_url: String,
    pub place_id: i64,
}

impl From<PlaceImage> for PlaceImageRead {
    fn from(image: PlaceImage) -> Self {
        Self {
            id: image.id.unwrap_or_default(),
            photo_name: image.photo_name,
            photo_url: image.photo_url,
            place_id: image.place_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Entity;

    #[test]
    fn test_place_read_serializes_plain_id() {
        let mut place = Place::new("Central Park".to_string(), 40.78, -73.97);
        place.assign_id(1);

        let json = serde_json::to_value(PlaceRead::from(place)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "title": "Central Park",
                "latitude": 40.78,
                "longitude": -73.97
            })
        );
    }
}

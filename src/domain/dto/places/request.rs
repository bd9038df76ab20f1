//! 장소/리뷰/사진 요청 DTO
//!
//! Create와 Update는 같은 필드를 가지며, Update는 기존 레코드를 전부 교체합니다.
//! 모든 필드는 필수이며 검증은 필드 존재 여부와 JSON 타입만 확인합니다.
//! 참조 ID의 존재 여부는 저장 계층이 확인합니다 (422).

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::dto::validation::{FieldSpec, Schema};
use crate::domain::entities::places::{Place, PlaceImage, Review};

/// 장소 생성 요청
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PlaceCreate {
    pub title: String,
    /// 위도
    pub latitude: f64,
    /// 경도
    pub longitude: f64,
}

/// 장소 수정 요청 (전체 교체)
pub type PlaceUpdate = PlaceCreate;

impl Schema for PlaceCreate {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::string("title"),
        FieldSpec::float("latitude"),
        FieldSpec::float("longitude"),
    ];
}

impl From<PlaceCreate> for Place {
    fn from(dto: PlaceCreate) -> Self {
        Place::new(dto.title, dto.latitude, dto.longitude)
    }
}

/// 리뷰 생성 요청
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ReviewCreate {
    pub text: String,
    pub creator_id: i64,
    pub place_id: i64,
}

/// 리뷰 수정 요청 (전체 교체)
pub type ReviewUpdate = ReviewCreate;

impl Schema for ReviewCreate {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::string("text"),
        FieldSpec::integer("creator_id"),
        FieldSpec::integer("place_id"),
    ];
}

impl From<ReviewCreate> for Review {
    fn from(dto: ReviewCreate) -> Self {
        Review::new(dto.text, dto.creator_id, dto.place_id)
    }
}

/// 장소 사진 등록 요청
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PlaceImageCreate {
    pub photo_name: String,
    pub photo_url: String,
    pub place_id: i64,
}

/// 장소 사진 수정 요청 (전체 교체)
pub type PlaceImageUpdate = PlaceImageCreate;

impl Schema for PlaceImageCreate {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::string("photo_name"),
        FieldSpec::string("photo_url"),
        FieldSpec::integer("place_id"),
    ];
}

impl From<PlaceImageCreate> for PlaceImage {
    fn from(dto: PlaceImageCreate) -> Self {
        PlaceImage::new(dto.photo_name, dto.photo_url, dto.place_id)
    }
}

//! # Place HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/v1/places` | 장소 목록 | 200 OK |
//! | `POST` | `/api/v1/places` | 장소 생성 | 201 Created |
//! | `GET` | `/api/v1/places/{id}` | 장소 조회 | 200 OK |
//! | `PUT` | `/api/v1/places/{id}` | 장소 전체 교체 | 200 OK |
//! | `DELETE` | `/api/v1/places/{id}` | 장소 삭제 | 204 No Content |
//! | `GET` | `/api/v1/places/{id}/reviews` | 장소의 리뷰 목록 | 200 OK |
//! | `GET` | `/api/v1/places/{id}/images` | 장소의 사진 목록 | 200 OK |
//!
//! 요청 본문은 `serde_json::Value`로 받은 뒤 [`parse_payload`]로 검증하므로,
//! 문제가 있는 필드가 모두 `details`에 담겨 400으로 응답됩니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::Value;
use crate::domain::dto::places::{PlaceCreate, PlaceUpdate};
use crate::domain::dto::validation::parse_payload;
use crate::errors::AppError;
use crate::state::AppState;

#[get("")]
pub async fn list_places(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let places = state.places.list_places().await?;
    Ok(HttpResponse::Ok().json(places))
}

/// 새 장소 생성
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/places \
///   -H "Content-Type: application/json" \
///   -d '{"title":"Central Park","latitude":40.785,"longitude":-73.968}'
/// ```
#[post("")]
pub async fn create_place(
    state: web::Data<AppState>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let request: PlaceCreate = parse_payload(&payload)?;
    let place = state.places.create_place(request).await?;
    Ok(HttpResponse::Created().json(place))
}

#[get("/{place_id}")]
pub async fn get_place(
    state: web::Data<AppState>,
    place_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let place = state.places.get_place(place_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(place))
}

#[put("/{place_id}")]
pub async fn update_place(
    state: web::Data<AppState>,
    place_id: web::Path<i64>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let request: PlaceUpdate = parse_payload(&payload)?;
    let place = state.places.update_place(place_id.into_inner(), request).await?;
    Ok(HttpResponse::Ok().json(place))
}

/// 장소 삭제
///
/// 리뷰나 사진이 남아 있으면 409 Conflict를 반환합니다.
#[delete("/{place_id}")]
pub async fn delete_place(
    state: web::Data<AppState>,
    place_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state.places.delete_place(place_id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/{place_id}/reviews")]
pub async fn list_place_reviews(
    state: web::Data<AppState>,
    place_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let reviews = state.places.list_reviews(place_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(reviews))
}

#[get("/{place_id}/images")]
pub async fn list_place_images(
    state: web::Data<AppState>,
    place_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let images = state.places.list_images(place_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(images))
}

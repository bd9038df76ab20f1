//! # Place Image HTTP Handlers
//!
//! `/api/v1/place-images` 아래의 사진 메타데이터 엔드포인트입니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::Value;
use crate::domain::dto::places::{PlaceImageCreate, PlaceImageUpdate};
use crate::domain::dto::validation::parse_payload;
use crate::errors::AppError;
use crate::state::AppState;

#[post("")]
pub async fn create_place_image(
    state: web::Data<AppState>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let request: PlaceImageCreate = parse_payload(&payload)?;
    let image = state.images.create_image(request).await?;
    Ok(HttpResponse::Created().json(image))
}

#[get("/{image_id}")]
pub async fn get_place_image(
    state: web::Data<AppState>,
    image_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let image = state.images.get_image(image_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(image))
}

#[put("/{image_id}")]
pub async fn update_place_image(
    state: web::Data<AppState>,
    image_id: web::Path<i64>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let request: PlaceImageUpdate = parse_payload(&payload)?;
    let image = state.images.update_image(image_id.into_inner(), request).await?;
    Ok(HttpResponse::Ok().json(image))
}

#[delete("/{image_id}")]
pub async fn delete_place_image(
    state: web::Data<AppState>,
    image_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state.images.delete_image(image_id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

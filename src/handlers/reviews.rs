//! # Review HTTP Handlers
//!
//! `/api/v1/reviews` 아래의 생성/조회/교체/삭제 엔드포인트입니다.
//! 존재하지 않는 작성자나 장소를 참조하면 422 Unprocessable Entity로 응답합니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::Value;
use crate::domain::dto::places::{ReviewCreate, ReviewUpdate};
use crate::domain::dto::validation::parse_payload;
use crate::errors::AppError;
use crate::state::AppState;

#[post("")]
pub async fn create_review(
    state: web::Data<AppState>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let request: ReviewCreate = parse_payload(&payload)?;
    let review = state.reviews.create_review(request).await?;
    Ok(HttpResponse::Created().json(review))
}

#[get("/{review_id}")]
pub async fn get_review(
    state: web::Data<AppState>,
    review_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let review = state.reviews.get_review(review_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(review))
}

#[put("/{review_id}")]
pub async fn update_review(
    state: web::Data<AppState>,
    review_id: web::Path<i64>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let request: ReviewUpdate = parse_payload(&payload)?;
    let review = state.reviews.update_review(review_id.into_inner(), request).await?;
    Ok(HttpResponse::Ok().json(review))
}

#[delete("/{review_id}")]
pub async fn delete_review(
    state: web::Data<AppState>,
    review_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    state.reviews.delete_review(review_id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

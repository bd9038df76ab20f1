//! # User HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/v1/users/{id}` | 사용자 조회 | 200 OK |
//!
//! 가입, 로그인, 상태 변경은 외부 인증 서비스의 흐름에서 처리되므로
//! 여기서는 읽기 전용 엔드포인트만 제공합니다.

use actix_web::{get, web, HttpResponse};
use crate::errors::AppError;
use crate::state::AppState;

/// 사용자 정보 조회 (비밀번호 해시 제외)
///
/// ```bash
/// curl http://localhost:8080/api/v1/users/1
/// ```
#[get("/{user_id}")]
pub async fn get_user(
    state: web::Data<AppState>,
    user_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = state.users.get_user(user_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 요청 본문 파싱 실패 |
//! | `InvalidPayload` | 400 Bad Request | 필드 단위 검증 실패 (details 포함) |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `ConflictError` | 409 Conflict | 유니크 제약 위반, 참조 중인 리소스 삭제 |
//! | `ReferenceError` | 422 Unprocessable Entity | 존재하지 않는 레코드 참조 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn get_place(&self, id: i64) -> Result<PlaceRead, AppError> {
//!     self.places.find_by_id(id).await?
//!         .map(PlaceRead::from)
//!         .ok_or_else(|| AppError::NotFound(format!("장소를 찾을 수 없습니다: {}", id)))
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;
use crate::domain::dto::validation::ValidationReport;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 요청 본문 자체를 해석할 수 없음 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 스키마 검증 실패, 필드별 에러 목록 포함 (400 Bad Request)
    #[error("Validation error: {0}")]
    InvalidPayload(#[from] ValidationReport),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 참조 무결성 위반 (422 Unprocessable Entity)
    #[error("Reference error: {0}")]
    ReferenceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::ReferenceError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 각 에러 타입을 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    ///
    /// 필드 검증 실패는 `details`에 필드별 에러 목록을 담습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::InvalidPayload(report) => serde_json::json!({
                "error": self.to_string(),
                "details": report.errors(),
            }),
            _ => serde_json::json!({
                "error": self.to_string()
            }),
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::validation::FieldError;
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Json deserialize error".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Place not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("duplicate email".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_reference_error_response() {
        let error = AppError::ReferenceError("place_id=999".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("connection refused".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_payload_response_lists_field_errors() {
        let report = ValidationReport::new(vec![
            FieldError::missing("title"),
            FieldError::wrong_type("latitude", "float"),
        ]);
        let response = AppError::from(report).error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().try_into_bytes().unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let details = body["details"].as_array().unwrap();

        assert_eq!(details.len(), 2);
        assert_eq!(details[0]["field"], "title");
        assert_eq!(details[0]["code"], "missing");
        assert_eq!(details[1]["field"], "latitude");
        assert_eq!(details[1]["code"], "type");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}

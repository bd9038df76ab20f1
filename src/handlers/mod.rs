//! HTTP 요청 핸들러 모듈
//!
//! 핸들러는 요청 본문을 검증하고 [`AppState`](crate::state::AppState)의 서비스를 호출한 뒤
//! 결과를 JSON으로 응답합니다. 에러는 [`AppError`](crate::errors::AppError)가 상태 코드로 변환합니다.

pub mod places;
pub mod reviews;
pub mod place_images;
pub mod users;

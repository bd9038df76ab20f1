//! 애플리케이션 에러 모듈
//!
//! [`AppError`]와 `AppResult` 별칭, 외부 에러 변환용 [`ErrorContext`]를 제공합니다.

#[allow(clippy::module_inception)]
pub mod errors;

pub use errors::*;

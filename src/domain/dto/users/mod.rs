//! 사용자 DTO
//!
//! - `request`: 등록 입력, 상태 플래그 부분 수정
//! - `response`: 비밀번호 해시를 제외한 사용자 응답

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

//! 장소, 리뷰, 장소 사진 DTO

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! DTO ↔ 엔티티 변환, not-found 처리, 변경 로그를 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::places::PlaceService;
//!
//! let places = PlaceService::new(storage.clone());
//! let created = places.create_place(request).await?;
//! ```

pub mod places;
pub mod users;

//! # Domain Layer Module
//!
//! 엔티티와 DTO로 구성된 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 저장소에 영속되는 레코드 (User, Place, Review, PlaceImage)
//! └── DTOs      - 요청 검증과 응답 직렬화
//!      │
//!      ▼
//! Services → Repositories → Storage (MongoDB)
//! ```

pub mod entities;
pub mod dto;

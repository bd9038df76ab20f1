//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 데이터 구조를 정의합니다.
//!
//! ```text
//! dto/
//! ├── validation.rs  ← parse_payload, Schema, ValidationReport
//! ├── places/        ← Place / Review / PlaceImage 의 Create, Update, Read
//! └── users/         ← RegisterUser, UserStatusUpdate, UserResponse
//! ```
//!
//! ## 요청 처리 흐름
//!
//! ```text
//! JSON body ──► parse_payload::<PlaceCreate>() ──► PlaceCreate ──► Place (entity)
//!                    │                                                │
//!                    ▼ (실패)                                          ▼ (저장)
//!            ValidationReport (400)                          PlaceRead (응답)
//! ```
//!
//! Create/Update DTO는 `id`를 갖지 않고, Read DTO는 저장된 레코드의 `id`를 포함합니다.
//! Read DTO는 저장된 레코드에서만 만들어지므로 별도로 검증하지 않습니다.

pub mod validation;
pub mod places;
pub mod users;

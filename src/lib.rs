//! # Bubbles Backend
//!
//! 장소(place), 리뷰(review), 장소 사진(place image)에 대한 CRUD API와
//! 인증 관련 필드를 가진 사용자 레코드를 제공하는 웹 백엔드입니다.
//!
//! ## 계층 구조
//!
//! ```text
//! routes / handlers   HTTP 엔드포인트, JSON 입출력, 상태 코드
//!        │
//!    services         DTO ↔ 엔티티 변환, not-found 처리, 변경 로그
//!        │
//!  repositories       엔티티 단위 CRUD, 참조 무결성 확인
//!        │
//!       db            Storage trait (MongoDB), 유니크 제약, ID 발급
//! ```
//!
//! 설정([`config::Settings`])은 시작 시 한 번 읽어 참조로 전달합니다.
//! 토큰 발급, 메일 발송, 파일 업로드는 외부 서비스의 책임입니다.

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod state;

//! Places Entity Module
//!
//! 장소와 장소에 딸린 리뷰, 사진 엔티티입니다.
//!
//! ```text
//! Place ◄── Review (place_id, creator_id ──► User)
//!   ▲
//!   └──── PlaceImage (place_id)
//! ```

pub mod place;
pub mod review;
pub mod place_image;

pub use place::Place;
pub use review::Review;
pub use place_image::PlaceImage;

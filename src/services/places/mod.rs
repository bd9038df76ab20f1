pub mod place_service;
pub mod review_service;
pub mod place_image_service;

pub use place_service::PlaceService;
pub use review_service::ReviewService;
pub use place_image_service::PlaceImageService;

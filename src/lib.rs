pub mod config;
pub mod contour;
pub mod framing;
pub mod landscape;
pub mod mapping;
pub mod objective;
pub mod plotting;
pub mod trajectory;

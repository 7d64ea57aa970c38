pub mod distance_service;
pub mod http;
pub mod weather_service;

pub use distance_service::*;
pub use http::*;
pub use weather_service::*;

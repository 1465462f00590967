pub mod api;
pub mod contracts;
pub mod http;

pub use api::*;
pub use contracts::*;
pub use http::*;

//! REST surface over an animal store.

mod error;

pub use error::ApiError;

// HTTP transport (requires "http" feature)
#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
mod pages;
#[cfg(feature = "http")]
pub use http::{api_router, router, serve};

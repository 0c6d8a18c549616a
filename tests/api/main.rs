//! HTTP API integration tests.

#[cfg(feature = "http")]
mod support;

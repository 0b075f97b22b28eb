//! Shared utilities for provider implementations

mod http_response;

pub use http_response::HttpResponseUtils;

//! HTTP client configuration shared by HTTP-based providers

mod provider;

pub use provider::HttpClientConfig;

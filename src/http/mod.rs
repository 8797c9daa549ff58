//! HTTP module
//!
//! The [`Transport`] trait is the only thing services need from the network.
//! [`HttpClient`] is the `reqwest`-based implementation.

mod client;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, DEFAULT_BASE_URL};
pub use transport::{ApiRequest, Transport};

//! HTTP client plumbing shared by the store adapter.

mod client;

pub use client::{HttpClient, HttpClientBuilder};

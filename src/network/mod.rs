//! Network layer
//!
//! HTTP client and request/response envelope for the remote search APIs.

mod client;

pub use client::{HttpClient, SourceRequest, SourceResponse, ACCEPT_JSON};

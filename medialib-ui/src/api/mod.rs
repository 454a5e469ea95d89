//! API Layer
//!
//! HTTP client for the medialib REST API.

pub mod client;

pub use client::*;

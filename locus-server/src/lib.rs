//! Locus Analysis Proxy
//!
//! A small axum service that sits between the variant viewer and a remote
//! scoring endpoint. Analyze requests are validated before any network
//! round-trip; valid ones are forwarded with a generous timeout, and
//! upstream failures come back as clean JSON errors. Browser frontends
//! also get a single same-origin URL instead of depending on the scorer's
//! CORS policy.

pub mod api;
pub mod config;

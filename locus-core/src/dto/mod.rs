//! Data transfer objects for the analyze-variant wire protocol
//!
//! These are the exact JSON shapes the inference endpoint and the proxy
//! speak; client, server, and CLI all share them.

pub mod analyze;

//! HTTP request handlers, one module per resource.

pub mod client;

//! HTTP client for the talmo prediction API schema and predict endpoints.

pub mod http;

pub use http::{ApiClient, RequestError, SchemaError};

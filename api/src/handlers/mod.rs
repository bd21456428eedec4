//! Shared handler utilities

pub mod error;

pub use error::{domain_error_to_response, validation_error_response};

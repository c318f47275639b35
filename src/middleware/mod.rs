//! Request middleware.

pub mod json_errors;
pub mod passthrough;

//! Collaborator services consumed by the route handlers.

pub mod firebase;
pub mod reporting;

//! Response payload shapes for the CRM resources.

pub mod activity;
pub mod bulk;
pub mod deal;
pub mod report;

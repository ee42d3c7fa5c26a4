//! HTTP API exposed to the field app.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod types;

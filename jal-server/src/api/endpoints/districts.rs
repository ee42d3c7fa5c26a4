//! District reference data.
//!
//! - `GET /api/districts`: district list for the report form pickers

use axum::Json;

use jal_core::models::District;

use crate::seed;

/// `GET /api/districts`: static list, no database involved.
pub async fn list() -> Json<Vec<District>> {
    Json(seed::districts())
}

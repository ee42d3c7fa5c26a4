//! Water quality report endpoints.
//!
//! - `POST /api/water-reports`: submit a new report
//! - `GET /api/water-reports`: recent reports
//! - `GET /api/water-reports/:id`: one report by id

use axum::extract::{Path, Query, State};
use axum::Json;
use tracing::info;

use jal_core::models::{NewWaterReport, WaterReport};

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, ListParams};

/// `POST /api/water-reports`: store a report and return it with its
/// server-assigned id, status and timestamp.
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(payload): Json<NewWaterReport>,
) -> Result<Json<WaterReport>, ApiError> {
    let report = WaterReport::from_new(payload);
    ctx.db()?.insert_water_report(&report)?;
    info!(id = %report.id, location = %report.location_name, "Water report submitted");
    Ok(Json(report))
}

/// `GET /api/water-reports`: most recent first.
pub async fn list(
    State(ctx): State<ApiContext>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<WaterReport>>, ApiError> {
    let reports = ctx.db()?.water_reports(params.limit)?;
    Ok(Json(reports))
}

/// `GET /api/water-reports/:id`
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<WaterReport>, ApiError> {
    let report = ctx.db()?.water_report(&id)?;
    report
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Report not found".into()))
}

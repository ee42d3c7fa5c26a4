//! Dashboard aggregation endpoints.
//!
//! - `GET /api/report-stats`: per-status counts across both report kinds
//! - `GET /api/recent-activity`: merged feed of recent submissions
//! - `GET /api/map-locations`: markers for every report that has coordinates

use axum::extract::{Query, State};
use axum::Json;

use jal_core::models::{ActivityEntry, MapLocation, ReportStats};

use crate::api::error::ApiError;
use crate::api::types::{ActivityParams, ApiContext};

// Markers are capped per report kind so the map payload stays bounded.
const MAP_LIMIT: i64 = 200;

/// `GET /api/report-stats`
pub async fn stats(State(ctx): State<ApiContext>) -> Result<Json<ReportStats>, ApiError> {
    let stats = ctx.db()?.report_stats()?;
    Ok(Json(stats))
}

/// `GET /api/recent-activity`: half the limit goes to each report kind,
/// then the merged feed is re-sorted newest first and cut to the limit.
pub async fn activity(
    State(ctx): State<ApiContext>,
    Query(params): Query<ActivityParams>,
) -> Result<Json<Vec<ActivityEntry>>, ApiError> {
    let limit = params.limit.max(0);
    let half = limit / 2;

    let db = ctx.db()?;
    let mut entries: Vec<ActivityEntry> = db
        .water_reports(half)?
        .iter()
        .map(|r| r.activity_entry())
        .collect();
    entries.extend(db.patient_reports(half)?.iter().map(|r| r.activity_entry()));
    drop(db);

    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    entries.truncate(limit as usize);
    Ok(Json(entries))
}

/// `GET /api/map-locations`
pub async fn map_locations(
    State(ctx): State<ApiContext>,
) -> Result<Json<Vec<MapLocation>>, ApiError> {
    let db = ctx.db()?;
    let mut locations: Vec<MapLocation> = db
        .water_reports_with_coords(MAP_LIMIT)?
        .iter()
        .filter_map(|r| r.map_location())
        .collect();
    locations.extend(
        db.patient_reports_with_coords(MAP_LIMIT)?
            .iter()
            .filter_map(|r| r.map_location()),
    );
    Ok(Json(locations))
}

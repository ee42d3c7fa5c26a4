//! Patient case report endpoints.
//!
//! - `POST /api/patient-reports`: submit a new case report
//! - `GET /api/patient-reports`: recent case reports

use axum::extract::{Query, State};
use axum::Json;
use tracing::info;

use jal_core::models::{NewPatientReport, PatientReport};

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, ListParams};

/// `POST /api/patient-reports`
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(payload): Json<NewPatientReport>,
) -> Result<Json<PatientReport>, ApiError> {
    let report = PatientReport::from_new(payload);
    ctx.db()?.insert_patient_report(&report)?;
    info!(
        id = %report.id,
        disease = %report.suspected_disease,
        "Patient report submitted"
    );
    Ok(Json(report))
}

/// `GET /api/patient-reports`: most recent first.
pub async fn list(
    State(ctx): State<ApiContext>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<PatientReport>>, ApiError> {
    let reports = ctx.db()?.patient_reports(params.limit)?;
    Ok(Json(reports))
}

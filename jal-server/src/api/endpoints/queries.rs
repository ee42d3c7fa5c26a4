//! User query endpoints.
//!
//! - `POST /api/queries`: submit a question for the expert team
//! - `GET /api/queries`: recent queries

use axum::extract::{Query, State};
use axum::Json;
use tracing::info;

use jal_core::models::{NewQuery, UserQuery};

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, ListParams};

/// `POST /api/queries`: stored with status `pending` until answered.
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(payload): Json<NewQuery>,
) -> Result<Json<UserQuery>, ApiError> {
    let query = UserQuery::from_new(payload);
    ctx.db()?.insert_query(&query)?;
    info!(id = %query.id, "Query submitted");
    Ok(Json(query))
}

/// `GET /api/queries`: most recent first.
pub async fn list(
    State(ctx): State<ApiContext>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<UserQuery>>, ApiError> {
    let queries = ctx.db()?.queries(params.limit)?;
    Ok(Json(queries))
}

//! FAQ endpoints.
//!
//! - `GET /api/faqs`: full list, seeded at first database open
//! - `GET /api/faqs/search?q=`: case-insensitive match on question or answer

use axum::extract::{Query, State};
use axum::Json;

use jal_core::faq::filter_faqs;
use jal_core::models::Faq;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, SearchParams};

const LIST_LIMIT: usize = 100;
const SEARCH_LIMIT: usize = 50;

/// `GET /api/faqs`
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Faq>>, ApiError> {
    let mut faqs = ctx.db()?.faqs()?;
    faqs.truncate(LIST_LIMIT);
    Ok(Json(faqs))
}

/// `GET /api/faqs/search?q=`: an empty query returns everything, like the
/// unfiltered list but with the tighter search cap.
pub async fn search(
    State(ctx): State<ApiContext>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Faq>>, ApiError> {
    let faqs = ctx.db()?.faqs()?;
    let mut matches: Vec<Faq> = filter_faqs(&faqs, &params.q)
        .into_iter()
        .map(|i| faqs[i].clone())
        .collect();
    matches.truncate(SEARCH_LIMIT);
    Ok(Json(matches))
}

//! Shared state and query-string types for the API layer.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::Deserialize;

use crate::api::error::ApiError;
use crate::storage::Database;

/// Shared context for all API routes.
#[derive(Clone)]
pub struct ApiContext {
    db: Arc<Mutex<Database>>,
}

impl ApiContext {
    pub fn new(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }

    /// Lock the database for the duration of one request.
    pub fn db(&self) -> Result<MutexGuard<'_, Database>, ApiError> {
        self.db
            .lock()
            .map_err(|_| ApiError::Internal("database lock poisoned".into()))
    }
}

/// `?limit=` for the list endpoints.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_list_limit")]
    pub limit: i64,
}

fn default_list_limit() -> i64 {
    50
}

/// `?limit=` for the activity feed, which defaults lower than the lists.
#[derive(Debug, Deserialize)]
pub struct ActivityParams {
    #[serde(default = "default_activity_limit")]
    pub limit: i64,
}

fn default_activity_limit() -> i64 {
    10
}

/// `?q=` for FAQ search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_limit_defaults_to_50() {
        let params: ListParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.limit, 50);
        let params: ListParams = serde_json::from_str(r#"{"limit": 5}"#).unwrap();
        assert_eq!(params.limit, 5);
    }

    #[test]
    fn activity_limit_defaults_to_10() {
        let params: ActivityParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.limit, 10);
    }

    #[test]
    fn search_query_defaults_to_empty() {
        let params: SearchParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.q, "");
        let params: SearchParams = serde_json::from_str(r#"{"q": "cholera"}"#).unwrap();
        assert_eq!(params.q, "cholera");
    }
}

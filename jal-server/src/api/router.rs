//! API route table.
//!
//! Everything is nested under `/api/`. No authentication: the service is
//! meant to sit on a private network behind the field app.

use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the full API router.
pub fn api_router(ctx: ApiContext) -> Router {
    let api = Router::new()
        .route("/", get(banner))
        .route("/districts", get(endpoints::districts::list))
        .route(
            "/water-reports",
            post(endpoints::water_reports::create).get(endpoints::water_reports::list),
        )
        .route("/water-reports/:id", get(endpoints::water_reports::detail))
        .route(
            "/patient-reports",
            post(endpoints::patient_reports::create).get(endpoints::patient_reports::list),
        )
        .route("/report-stats", get(endpoints::dashboard::stats))
        .route("/recent-activity", get(endpoints::dashboard::activity))
        .route("/map-locations", get(endpoints::dashboard::map_locations))
        .route("/faqs", get(endpoints::faqs::list))
        .route("/faqs/search", get(endpoints::faqs::search))
        .route(
            "/queries",
            post(endpoints::queries::create).get(endpoints::queries::list),
        )
        .with_state(ctx);

    // `nest` matches `/api` but not the bare `/api/` path, which is what
    // the client's connection test requests.
    Router::new().route("/api/", get(banner)).nest("/api", api)
}

/// `GET /api/`: service banner, used by the app's connection test.
async fn banner() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Jal Drishti API - Water Quality Monitoring System"
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::storage::Database;

    fn test_app() -> Router {
        let db = Database::open_in_memory().unwrap();
        api_router(ApiContext::new(db))
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn post_request(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn response_json(response: axum::http::Response<Body>) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 1 << 20)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn water_payload(location: &str) -> Value {
        json!({
            "location_name": location,
            "district": "East Khasi Hills",
            "water_source": "spring",
            "collection_date": "2024-06-15T10:30:00Z",
            "collection_time": "10:30:00",
            "collector_name": "R. Lyngdoh",
            "collector_id": "VOL-042",
            "phone_number": "9876543210",
            "ph_level": 7.2,
            "turbidity": 1.5,
            "chlorine": null,
            "e_coli": 0,
            "total_coliform": null,
            "tds": null,
            "latitude": null,
            "longitude": null
        })
    }

    fn patient_payload(disease: &str) -> Value {
        json!({
            "patient_name": "A. Sangma",
            "age": 34,
            "gender": "female",
            "location_name": "Tura",
            "district": "West Garo Hills",
            "symptoms": ["Fever", "Diarrhea"],
            "suspected_disease": disease,
            "water_source_used": "well",
            "reporter_name": "B. Marak",
            "reporter_phone": "9000000000",
            "latitude": null,
            "longitude": null
        })
    }

    #[tokio::test]
    async fn banner_reports_service_name() {
        // The connection test requests the trailing-slash form; both must
        // answer.
        for uri in ["/api/", "/api"] {
            let response = test_app().oneshot(get_request(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");

            let json = response_json(response).await;
            assert_eq!(
                json["message"],
                "Jal Drishti API - Water Quality Monitoring System"
            );
        }
    }

    #[tokio::test]
    async fn districts_cover_the_seeded_list() {
        let response = test_app()
            .oneshot(get_request("/api/districts"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        let districts = json.as_array().unwrap();
        assert_eq!(districts.len(), 48);
        assert_eq!(districts[0]["name"], "Kamrup");
        assert_eq!(districts[0]["state"], "Assam");
    }

    #[tokio::test]
    async fn water_report_submit_list_and_detail() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(post_request("/api/water-reports", &water_payload("Mawsynram")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let created = response_json(response).await;
        let id = created["id"].as_str().unwrap().to_string();
        assert!(!id.is_empty());
        assert_eq!(created["status"], "submitted");
        assert_eq!(created["location_name"], "Mawsynram");
        assert_eq!(created["ph_level"], 7.2);
        assert_eq!(created["chlorine"], Value::Null);

        let response = app
            .clone()
            .oneshot(get_request("/api/water-reports"))
            .await
            .unwrap();
        let listed = response_json(response).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["id"], id.as_str());

        let response = app
            .oneshot(get_request(&format!("/api/water-reports/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let detail = response_json(response).await;
        assert_eq!(detail["collector_name"], "R. Lyngdoh");
    }

    #[tokio::test]
    async fn unknown_water_report_returns_404() {
        let response = test_app()
            .oneshot(get_request("/api/water-reports/no-such-id"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(json["error"]["message"], "Report not found");
    }

    #[tokio::test]
    async fn malformed_water_report_is_a_client_error() {
        let response = test_app()
            .oneshot(post_request("/api/water-reports", &json!({"location_name": 5})))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn patient_report_round_trips_symptoms() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(post_request("/api/patient-reports", &patient_payload("Cholera")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let created = response_json(response).await;
        assert_eq!(created["status"], "submitted");
        assert_eq!(created["symptoms"], json!(["Fever", "Diarrhea"]));

        let response = app
            .oneshot(get_request("/api/patient-reports"))
            .await
            .unwrap();
        let listed = response_json(response).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["suspected_disease"], "Cholera");
        assert_eq!(listed[0]["water_source_used"], "well");
    }

    #[tokio::test]
    async fn stats_start_at_zero() {
        let response = test_app()
            .oneshot(get_request("/api/report-stats"))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert_eq!(json["total_submitted"], 0);
        assert_eq!(json["total_processed"], 0);
        assert_eq!(json["under_review"], 0);
        assert_eq!(json["high_priority"], 0);
    }

    #[tokio::test]
    async fn stats_count_both_report_kinds() {
        let app = test_app();
        app.clone()
            .oneshot(post_request("/api/water-reports", &water_payload("Mawsynram")))
            .await
            .unwrap();
        app.clone()
            .oneshot(post_request("/api/patient-reports", &patient_payload("Cholera")))
            .await
            .unwrap();
        app.clone()
            .oneshot(post_request("/api/patient-reports", &patient_payload("Typhoid")))
            .await
            .unwrap();

        let response = app.oneshot(get_request("/api/report-stats")).await.unwrap();
        let json = response_json(response).await;
        assert_eq!(json["total_submitted"], 3);
        assert_eq!(json["total_processed"], 0);
    }

    #[tokio::test]
    async fn activity_merges_and_composes_both_kinds() {
        let app = test_app();
        app.clone()
            .oneshot(post_request("/api/water-reports", &water_payload("Mawsynram")))
            .await
            .unwrap();
        app.clone()
            .oneshot(post_request("/api/patient-reports", &patient_payload("Cholera")))
            .await
            .unwrap();

        let response = app
            .oneshot(get_request("/api/recent-activity"))
            .await
            .unwrap();
        let json = response_json(response).await;
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 2);

        let titles: Vec<&str> = entries
            .iter()
            .map(|e| e["title"].as_str().unwrap())
            .collect();
        assert!(titles.contains(&"Water Quality Report - Mawsynram"));
        assert!(titles.contains(&"Patient Report - Cholera"));

        let water = entries
            .iter()
            .find(|e| e["type"] == "water_report")
            .unwrap();
        assert_eq!(water["location"], "Mawsynram, East Khasi Hills");
        assert_eq!(water["status"], "submitted");
    }

    #[tokio::test]
    async fn activity_splits_the_limit_between_kinds() {
        let app = test_app();
        for location in ["A", "B", "C"] {
            app.clone()
                .oneshot(post_request("/api/water-reports", &water_payload(location)))
                .await
                .unwrap();
        }
        for disease in ["Cholera", "Typhoid", "Dysentery"] {
            app.clone()
                .oneshot(post_request("/api/patient-reports", &patient_payload(disease)))
                .await
                .unwrap();
        }

        // limit=4 gives each kind at most 2, so only 4 of 6 come back.
        let response = app
            .oneshot(get_request("/api/recent-activity?limit=4"))
            .await
            .unwrap();
        let json = response_json(response).await;
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 4);

        let water = entries.iter().filter(|e| e["type"] == "water_report");
        assert_eq!(water.count(), 2);
    }

    #[tokio::test]
    async fn activity_survives_a_negative_limit() {
        let response = test_app()
            .oneshot(get_request("/api/recent-activity?limit=-5"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn faqs_are_served_from_the_seeds() {
        let response = test_app().oneshot(get_request("/api/faqs")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        let faqs = json.as_array().unwrap();
        assert_eq!(faqs.len(), 7);
        assert_eq!(
            faqs[0]["question"],
            "How do I report a suspected waterborne disease outbreak?"
        );
        assert!(!faqs[0]["id"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn faq_search_is_case_insensitive() {
        let response = test_app()
            .oneshot(get_request("/api/faqs/search?q=OUTBREAK"))
            .await
            .unwrap();
        let json = response_json(response).await;
        let matches = json.as_array().unwrap();
        assert!(!matches.is_empty());
        for faq in matches {
            let question = faq["question"].as_str().unwrap().to_lowercase();
            let answer = faq["answer"].as_str().unwrap().to_lowercase();
            assert!(question.contains("outbreak") || answer.contains("outbreak"));
        }
    }

    #[tokio::test]
    async fn faq_search_without_query_returns_everything() {
        let response = test_app()
            .oneshot(get_request("/api/faqs/search"))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn map_locations_only_include_reports_with_coords() {
        let app = test_app();

        let mut plotted = water_payload("Mawsynram");
        plotted["latitude"] = json!(25.467);
        plotted["longitude"] = json!(91.3662);
        plotted["ph_level"] = Value::Null;
        app.clone()
            .oneshot(post_request("/api/water-reports", &plotted))
            .await
            .unwrap();

        // No coordinates, so it must not appear on the map.
        app.clone()
            .oneshot(post_request("/api/water-reports", &water_payload("Shillong")))
            .await
            .unwrap();

        let mut case = patient_payload("Cholera");
        case["latitude"] = json!(25.51);
        case["longitude"] = json!(90.22);
        app.clone()
            .oneshot(post_request("/api/patient-reports", &case))
            .await
            .unwrap();

        let response = app
            .oneshot(get_request("/api/map-locations"))
            .await
            .unwrap();
        let json = response_json(response).await;
        let locations = json.as_array().unwrap();
        assert_eq!(locations.len(), 2);

        let water = locations
            .iter()
            .find(|l| l["type"] == "water_report")
            .unwrap();
        assert_eq!(water["title"], "Water Quality - Mawsynram");
        assert_eq!(water["description"], "Water source: spring, pH: N/A");
        assert_eq!(water["latitude"], 25.467);

        let patient = locations
            .iter()
            .find(|l| l["type"] == "patient_report")
            .unwrap();
        assert_eq!(patient["title"], "Health Alert - Cholera");
        assert_eq!(patient["description"], "Patient: A. Sangma, Age: 34");
    }

    #[tokio::test]
    async fn query_submission_starts_pending() {
        let app = test_app();

        let payload = json!({
            "user_name": "K. Das",
            "phone_number": "9812345678",
            "question": "Is boiled water safe for infants?"
        });
        let response = app
            .clone()
            .oneshot(post_request("/api/queries", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let created = response_json(response).await;
        assert_eq!(created["status"], "pending");
        assert_eq!(created["response"], Value::Null);

        let response = app.oneshot(get_request("/api/queries")).await.unwrap();
        let listed = response_json(response).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["question"], "Is boiled water safe for infants?");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = test_app()
            .oneshot(get_request("/api/nonexistent"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

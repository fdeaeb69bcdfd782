//! Incident record handlers.

use axum::Router;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use crate::TRACING_TARGET;
use crate::data::{Incident, incidents};

/// Filters accepted by the incident list endpoint.
#[derive(Debug, Default, Deserialize)]
struct IncidentFilter {
    id: Option<u32>,
    name: Option<String>,
}

/// Envelope for the incident list.
#[derive(Debug, Serialize)]
struct IncidentList {
    incidents: Vec<Incident>,
}

/// Builds the record service router.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/incidents", get(list_incidents))
        .route("/api/incidents/{incident_id}", get(get_incident))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "hello from the vocalis record service"
}

async fn list_incidents(Query(filter): Query<IncidentFilter>) -> Json<IncidentList> {
    let matches: Vec<Incident> = incidents()
        .iter()
        .filter(|incident| filter.id.is_none_or(|id| incident.id == id))
        .filter(|incident| {
            filter
                .name
                .as_deref()
                .is_none_or(|name| incident.name.eq_ignore_ascii_case(name))
        })
        .cloned()
        .collect();

    tracing::debug!(
        target: TRACING_TARGET,
        matches = matches.len(),
        "Incident list requested"
    );
    Json(IncidentList { incidents: matches })
}

async fn get_incident(
    Path(incident_id): Path<u32>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match incidents().iter().find(|incident| incident.id == incident_id) {
        Some(incident) => Ok(Json(json!({"incident": incident}))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "incident not found"})),
        )),
    }
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;

    use super::*;

    fn server() -> TestServer {
        TestServer::new(router()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = server().get("/health").await;
        response.assert_status_ok();
        assert!(response.text().contains("vocalis"));
    }

    #[tokio::test]
    async fn test_list_returns_full_table() {
        let response = server().get("/api/incidents").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["incidents"].as_array().unwrap().len(), incidents().len());
    }

    #[tokio::test]
    async fn test_list_filters_by_id() {
        let response = server().get("/api/incidents").add_query_param("id", 3).await;
        let body: Value = response.json();
        let matches = body["incidents"].as_array().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0]["incident_id"], "INC1003");
    }

    #[tokio::test]
    async fn test_list_filters_by_name_case_insensitively() {
        let response = server()
            .get("/api/incidents")
            .add_query_param("name", "oliver smith")
            .await;
        let body: Value = response.json();
        let matches = body["incidents"].as_array().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0]["incident_id"], "INC1007");
    }

    #[tokio::test]
    async fn test_get_unknown_incident_is_404() {
        let response = server().get("/api/incidents/999").await;
        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(body["detail"], "incident not found");
    }

    #[tokio::test]
    async fn test_get_incident_by_id() {
        let response = server().get("/api/incidents/7").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["incident"]["name"], "Oliver Smith");
    }
}

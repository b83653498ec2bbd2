// Clinic Metrics - JSON API
// Read-only endpoints over the shared dataset (axum)

use crate::comparison::{
    city_comparison, comparison_totals, state_comparison, CityComparison, ComparisonTotals,
    StateComparison,
};
use crate::dataset::Dataset;
use crate::error::MetricsError;
use crate::kpi::{
    ecom_year_over_year, first_time_share, revenue_per_clinic, zone_share, KpiSummary, Ratio,
};
use crate::records::{ClinicRecord, EcomYearRecord, MonthlyRecord, ZoneRecord};
use crate::view::{ClinicViewSummary, SortKey, ViewState};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
}

/// API Response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn err(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

/// Zone row with derived share
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneResponse {
    #[serde(flatten)]
    pub zone: ZoneRecord,
    pub share: Ratio,
    pub revenue_per_clinic: Ratio,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicViewResponse {
    pub sort: SortKey,
    pub zone: String,
    pub summary: ClinicViewSummary,
    pub clinics: Vec<ClinicRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcomYearResponse {
    #[serde(flatten)]
    pub year: EcomYearRecord,
    pub first_time_share: Ratio,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResponse {
    pub years: Vec<EcomYearResponse>,
    pub year_over_year: Ratio,
    pub cities: Vec<CityComparison>,
    pub states: Vec<StateComparison>,
    pub totals: ComparisonTotals,
}

/// Query string for /api/clinics
#[derive(Debug, Deserialize)]
pub struct ClinicQuery {
    pub sort: Option<String>,
    pub zone: Option<String>,
}

/// Selection errors are the caller's fault; anything else is ours
fn error_status(err: &MetricsError) -> StatusCode {
    if err.is_selection_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

fn reject(err: MetricsError) -> Response {
    let status = error_status(&err);
    warn!(%err, %status, "rejected request");
    (status, Json(ApiResponse::<()>::err(err.to_string()))).into_response()
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/kpis - Headline figures
async fn get_kpis(State(state): State<AppState>) -> Json<ApiResponse<KpiSummary>> {
    Json(ApiResponse::ok(state.dataset.kpis()))
}

/// GET /api/monthly - Monthly series
async fn get_monthly(State(state): State<AppState>) -> Json<ApiResponse<Vec<MonthlyRecord>>> {
    Json(ApiResponse::ok(state.dataset.monthly().to_vec()))
}

/// GET /api/zones - Zones with share of revenue
async fn get_zones(State(state): State<AppState>) -> Json<ApiResponse<Vec<ZoneResponse>>> {
    let zones = state.dataset.zones();
    let response = zones
        .iter()
        .map(|zone| ZoneResponse {
            zone: zone.clone(),
            share: zone_share(zone, zones),
            revenue_per_clinic: revenue_per_clinic(zone),
        })
        .collect();

    Json(ApiResponse::ok(response))
}

/// GET /api/clinics?sort=<key>&zone=<name|All> - Derived clinic view
async fn get_clinics(
    State(state): State<AppState>,
    Query(query): Query<ClinicQuery>,
) -> Response {
    let sort_key = match query.sort.as_deref() {
        None => SortKey::default(),
        Some(raw) => match raw.parse::<SortKey>() {
            Ok(key) => key,
            Err(e) => return reject(e),
        },
    };

    let zone_filter = match state.dataset.zone_filter(query.zone.as_deref().unwrap_or("All")) {
        Ok(filter) => filter,
        Err(e) => return reject(e),
    };

    let view_state = ViewState::default()
        .with_sort_key(sort_key)
        .with_zone_filter(zone_filter);
    let view = state.dataset.clinic_view(&view_state);

    let response = ClinicViewResponse {
        sort: sort_key,
        zone: view_state.zone_filter.label().to_string(),
        summary: ClinicViewSummary::from_view(&view),
        clinics: view.into_iter().cloned().collect(),
    };

    (StatusCode::OK, Json(ApiResponse::ok(response))).into_response()
}

/// GET /api/comparison - Online vs offline
async fn get_comparison(State(state): State<AppState>) -> Json<ApiResponse<ComparisonResponse>> {
    let data = &state.dataset;

    let response = ComparisonResponse {
        years: data
            .ecom_years()
            .iter()
            .map(|y| EcomYearResponse {
                year: y.clone(),
                first_time_share: first_time_share(y),
            })
            .collect(),
        year_over_year: ecom_year_over_year(data.ecom_years()),
        cities: city_comparison(data.ecom_cities()),
        states: state_comparison(data.states()),
        totals: comparison_totals(data.states()),
    };

    Json(ApiResponse::ok(response))
}

/// Build the API router
pub fn router(dataset: Arc<Dataset>) -> Router {
    let state = AppState { dataset };

    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/kpis", get(get_kpis))
        .route("/monthly", get(get_monthly))
        .route("/zones", get(get_zones))
        .route("/clinics", get(get_clinics))
        .route("/comparison", get(get_comparison))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        router(Arc::new(Dataset::builtin().unwrap()))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], "OK");
    }

    #[tokio::test]
    async fn test_kpis() {
        let (status, body) = get_json("/api/kpis").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["totalRevenue"], 11679.0);
        assert_eq!(body["data"]["topZone"], "West 1");
        assert_eq!(body["data"]["momGrowth"]["kind"], "value");
    }

    #[tokio::test]
    async fn test_clinics_sorted_and_filtered() {
        let (status, body) = get_json("/api/clinics?sort=pincodes&zone=West%201").await;
        assert_eq!(status, StatusCode::OK);

        let names: Vec<&str> = body["data"]["clinics"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Andheri", "Baner", "Thane", "Viman Nagar"]);
        assert_eq!(body["data"]["sort"], "pincodes");
        assert_eq!(body["data"]["summary"]["rows"], 4);
    }

    #[tokio::test]
    async fn test_clinics_defaults_to_all_by_revenue() {
        let (status, body) = get_json("/api/clinics").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["zone"], "All");
        assert_eq!(body["data"]["clinics"].as_array().unwrap().len(), 17);
        assert_eq!(body["data"]["clinics"][0]["name"], "Andheri");
    }

    #[tokio::test]
    async fn test_invalid_sort_key_is_rejected() {
        let (status, body) = get_json("/api/clinics?sort=margin").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("margin"));
    }

    #[tokio::test]
    async fn test_unknown_zone_is_rejected() {
        let (status, body) = get_json("/api/clinics?zone=Central").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Unknown zone: Central");
    }

    #[test]
    fn test_error_status_by_kind() {
        assert_eq!(
            error_status(&MetricsError::InvalidSortKey("margin".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_status(&MetricsError::UnknownZone("Central".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_status(&MetricsError::DuplicateZone("East".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_zones_include_share() {
        let (_, body) = get_json("/api/zones").await;
        let zones = body["data"].as_array().unwrap();
        assert_eq!(zones.len(), 6);
        assert_eq!(zones[0]["name"], "West 1");

        let share = zones[0]["share"]["value"].as_f64().unwrap();
        assert!((share - 30.9676).abs() < 1e-3);
    }

    #[tokio::test]
    async fn test_comparison_marks_missing_data() {
        let (status, body) = get_json("/api/comparison").await;
        assert_eq!(status, StatusCode::OK);

        let states = body["data"]["states"].as_array().unwrap();
        let haryana = states.iter().find(|s| s["state"] == "Haryana").unwrap();
        assert_eq!(haryana["multiplier"]["kind"], "notApplicable");
        assert_eq!(body["data"]["years"].as_array().unwrap().len(), 3);
    }
}

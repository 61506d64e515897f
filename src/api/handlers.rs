use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{Preferences, Recommendation, RecommendationRequest, SearchFilters, Service, Show},
    services::title_search,
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    q: String,
}

/// Health check endpoint with a summary of the loaded catalog
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let catalog = &state.catalog;
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "catalog": {
                "services": catalog.services.len(),
                "shows": catalog.shows.len(),
                "loaded_at": catalog.loaded_at.to_rfc3339(),
            }
        })),
    )
}

/// Get all streaming services
pub async fn list_services(State(state): State<AppState>) -> Json<Vec<Service>> {
    Json(state.catalog.services.clone())
}

/// Get shows available on one service
pub async fn service_shows(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
) -> AppResult<Json<Vec<Show>>> {
    if state.catalog.service(&service_id).is_none() {
        return Err(AppError::NotFound(format!("Unknown service '{}'", service_id)));
    }

    Ok(Json(title_search::shows_by_service(&service_id, &state.catalog.shows)))
}

/// Browse shows by genre, year, type and service
pub async fn list_shows(
    State(state): State<AppState>,
    Query(filters): Query<SearchFilters>,
) -> Json<Vec<Show>> {
    Json(title_search::filter_shows(&state.catalog.shows, &filters))
}

/// Search shows by free text
pub async fn search_shows(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<Show>> {
    Json(title_search::search_shows(&params.q, &state.catalog.shows))
}

/// Recommend service bundles for the selected shows
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<Vec<Recommendation>>> {
    validate_preferences(&request.preferences)?;

    tracing::info!(
        request_id = %request_id,
        selected = request.selected_shows.len(),
        budget = request.preferences.max_budget,
        optimize_for_value = request.preferences.optimize_for_value,
        "Processing recommendation request"
    );

    let recommendations = state.recommender.recommend(
        request.selected_shows.ids(),
        &state.catalog.services,
        &state.catalog.shows,
        &request.preferences,
    );

    if recommendations.is_empty() && !request.selected_shows.is_empty() {
        tracing::info!(request_id = %request_id, "No bundle matched the request");
    }

    tracing::info!(
        request_id = %request_id,
        returned = recommendations.len(),
        "Recommendations completed"
    );

    Ok(Json(recommendations))
}

fn validate_preferences(prefs: &Preferences) -> AppResult<()> {
    match prefs.max_budget {
        Some(budget) if !budget.is_finite() || budget < 0.0 => Err(AppError::InvalidInput(format!(
            "max_budget must be a non-negative amount, got {}",
            budget
        ))),
        _ => Ok(()),
    }
}

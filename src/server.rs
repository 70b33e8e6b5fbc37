//! HTTP boundary for the recommendation engine.
//!
//! Thin actix-web adapters: JSON in, JSON out, no algorithmic weight. Every
//! failure is converted into the structured error response; nothing
//! propagates as an unstructured fault.

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::config::ServiceConfig;
use crate::content_based::{ContentBasedEngine, DEFAULT_SIMILAR_COUNT};
use crate::error::RecommenderError;
use crate::recommendation::{HybridRecommender, DEFAULT_TOP_N};
use crate::types::{ContentItem, InteractionEvent};
use crate::vectorizer::TfidfVectorizer;

/// Application state shared across all handlers.
pub struct AppState {
    pub config: ServiceConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub interactions: Vec<InteractionEvent>,
    #[serde(default)]
    pub all_content: Vec<ContentItem>,
    /// Accepted for wire compatibility; does not influence ranking.
    #[serde(default)]
    pub user_preferences: Option<Value>,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarRequest {
    #[serde(default)]
    pub content_id: String,
    #[serde(default)]
    pub all_content: Vec<ContentItem>,
    #[serde(default = "default_similar_top_n")]
    pub top_n: usize,
}

fn default_similar_top_n() -> usize {
    DEFAULT_SIMILAR_COUNT
}

#[derive(Debug, Serialize)]
pub struct SimilarResponse {
    pub similar: Vec<String>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

/// Configure application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health))
        .route("/recommend", web::post().to(recommend))
        .route("/similar", web::post().to(similar));
}

/// A body that fails to deserialize (for example an item record missing a
/// required field) is an internal failure on this boundary, surfaced as the
/// structured server-error response.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| RecommenderError::Internal(err.to_string()).into())
}

/// Liveness probe.
async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: "recs-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /recommend - hybrid recommendations for a user.
async fn recommend(
    state: web::Data<AppState>,
    payload: web::Json<RecommendRequest>,
) -> Result<HttpResponse, RecommenderError> {
    let request = payload.into_inner();

    if request.user_id.is_empty() || request.all_content.is_empty() {
        return Err(RecommenderError::Validation(
            "userId and a non-empty allContent list are required".to_string(),
        ));
    }

    info!(
        user_id = %request.user_id,
        interactions = request.interactions.len(),
        content = request.all_content.len(),
        top_n = request.top_n,
        has_preferences = request.user_preferences.is_some(),
        "Generating hybrid recommendations"
    );

    let recommender = HybridRecommender::new(TfidfVectorizer::new(state.config.max_features));
    let recommendations = recommender.execute(
        &request.user_id,
        &request.interactions,
        &request.all_content,
        request.top_n,
    );

    Ok(HttpResponse::Ok().json(RecommendResponse { recommendations }))
}

/// POST /similar - content-based similarity for a target item.
async fn similar(
    state: web::Data<AppState>,
    payload: web::Json<SimilarRequest>,
) -> Result<HttpResponse, RecommenderError> {
    let request = payload.into_inner();

    if request.content_id.is_empty() || request.all_content.is_empty() {
        return Err(RecommenderError::Validation(
            "contentId and a non-empty allContent list are required".to_string(),
        ));
    }

    info!(
        content_id = %request.content_id,
        content = request.all_content.len(),
        top_n = request.top_n,
        "Finding similar content"
    );

    let space = TfidfVectorizer::new(state.config.max_features).fit(&request.all_content);
    let similar = ContentBasedEngine::new(&space).find_similar(&request.content_id, request.top_n);

    Ok(HttpResponse::Ok().json(SimilarResponse { similar }))
}

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{Ranker, OUTPUT_LIMIT};
use crate::models::{
    Candidate, ErrorResponse, HealthResponse, RankProductsRequest, RankProductsResponse,
};
use crate::services::{AppwriteClient, CacheKey, CacheManager};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub appwrite: Arc<AppwriteClient>,
    pub cache: Arc<CacheManager>,
    pub ranker: Ranker,
    pub candidate_limit: usize,
}

/// Configure all product-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/products/rank", web::post().to(rank_products));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank products endpoint
///
/// POST /api/v1/products/rank
///
/// Request body:
/// ```json
/// {
///   "latitude": 52.52,
///   "longitude": 13.405,
///   "limit": 50
/// }
/// ```
///
/// Both coordinates must be present and numeric for location-aware scoring;
/// otherwise the request is scored locationless.
async fn rank_products(
    state: web::Data<AppState>,
    req: web::Json<RankProductsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank_products request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = (req.limit as usize).min(OUTPUT_LIMIT);
    let requester = req.requester_location();

    tracing::info!(
        "Ranking products (location: {}, limit: {})",
        requester.is_some(),
        limit
    );

    // Serve the candidate feed from cache when it's fresh enough
    let cache_key = CacheKey::candidates(state.appwrite.products_collection());
    let candidates: Vec<Candidate> = match state.cache.get(&cache_key).await {
        Ok(cached) => cached,
        Err(_) => {
            let fetched = match state.appwrite.query_candidates(state.candidate_limit).await {
                Ok(candidates) => candidates,
                Err(e) => {
                    tracing::error!("Failed to query candidates: {}", e);
                    return HttpResponse::InternalServerError().json(ErrorResponse {
                        error: "Failed to query candidates".to_string(),
                        message: e.to_string(),
                        status_code: 500,
                    });
                }
            };

            if let Err(e) = state.cache.set(&cache_key, &fetched).await {
                tracing::warn!("Failed to cache candidate feed: {}", e);
            }

            fetched
        }
    };

    tracing::debug!("Scoring {} candidates", candidates.len());

    let result = state.ranker.rank(candidates, requester, limit);

    tracing::info!(
        "Returning {} ranked products (from {} candidates)",
        result.products.len(),
        result.total_candidates
    );

    HttpResponse::Ok().json(RankProductsResponse {
        products: result.products,
    })
}

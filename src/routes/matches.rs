use crate::core::Matcher;
use crate::models::{ErrorResponse, HealthResponse, MatchListResponse, TopMatchesQuery};
use crate::services::Catalog;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub matcher: Matcher,
    pub default_limit: usize,
    pub max_limit: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/product/{id}", web::get().to(product_matches))
        .route("/matches/buyer/{id}", web::get().to(buyer_matches))
        .route("/matches/top", web::get().to(top_matches));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    // No external dependencies to probe; a responding process is a healthy one
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Matches for one product endpoint
///
/// GET /api/v1/matches/product/{id}
///
/// Scores the product against every registered buyer. An unknown product id
/// returns an empty list, not an error.
async fn product_matches(
    state: web::Data<AppState>,
    path: web::Path<u32>,
) -> impl Responder {
    let product_id = path.into_inner();

    let matches = state.matcher.matches_for_product(&state.catalog, product_id);

    if matches.is_empty() {
        tracing::debug!("No matches for product {} (unknown id or empty catalog)", product_id);
    } else {
        tracing::info!("Returning {} matches for product {}", matches.len(), product_id);
    }

    HttpResponse::Ok().json(MatchListResponse {
        total_results: matches.len(),
        matches,
    })
}

/// Matches for one buyer endpoint
///
/// GET /api/v1/matches/buyer/{id}
async fn buyer_matches(
    state: web::Data<AppState>,
    path: web::Path<u32>,
) -> impl Responder {
    let buyer_id = path.into_inner();

    let matches = state.matcher.matches_for_buyer(&state.catalog, buyer_id);

    if matches.is_empty() {
        tracing::debug!("No matches for buyer {} (unknown id or empty catalog)", buyer_id);
    } else {
        tracing::info!("Returning {} matches for buyer {}", matches.len(), buyer_id);
    }

    HttpResponse::Ok().json(MatchListResponse {
        total_results: matches.len(),
        matches,
    })
}

/// Top matches endpoint
///
/// GET /api/v1/matches/top?limit=N
///
/// Ranks the full product × buyer cross-product, keeping only meaningful
/// matches. The limit defaults from configuration and is capped to protect
/// against excessive payloads.
async fn top_matches(
    state: web::Data<AppState>,
    query: web::Query<TopMatchesQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for top_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = query
        .limit
        .map(usize::from)
        .unwrap_or(state.default_limit)
        .min(state.max_limit);

    let matches = state.matcher.top_matches(&state.catalog, limit);

    tracing::info!("Returning {} top matches (limit {})", matches.len(), limit);

    HttpResponse::Ok().json(MatchListResponse {
        total_results: matches.len(),
        matches,
    })
}

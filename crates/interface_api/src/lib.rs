//! HTTP API Layer
//!
//! This crate provides the REST API for insurance records using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: CRUD, premium and monthly-total endpoints plus health
//! - **Middleware**: Request ids, tracing, audit logging
//! - **DTOs**: camelCase request/response bodies
//! - **Error Handling**: Consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_insurance::InsuranceService;
//! use infra_db::InMemoryInsuranceAdapter;
//! use interface_api::create_router;
//!
//! let service = InsuranceService::new(Arc::new(InMemoryInsuranceAdapter::new()));
//! let app = create_router(service);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    Router,
    routing::get,
    middleware as axum_middleware,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_insurance::InsuranceService;

use crate::handlers::{health, insurance};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: InsuranceService,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `service` - Insurance service wired to a storage adapter
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(service: InsuranceService) -> Router {
    let state = AppState { service };

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Insurance routes
    let insurance_routes = Router::new()
        .route(
            "/",
            get(insurance::list_insurance).post(insurance::create_insurance),
        )
        .route("/total-premium-by-month", get(insurance::total_premium_by_month))
        .route("/premium/:id", get(insurance::get_premium))
        .route(
            "/:id",
            get(insurance::get_insurance)
                .put(insurance::update_insurance)
                .delete(insurance::delete_insurance),
        )
        .layer(axum_middleware::from_fn(audit_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/insurance", insurance_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

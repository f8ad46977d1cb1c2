/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Public routes (random quote, listings, tag picker, login)
 * 2. Admin routes (behind the session gate)
 * 3. Static files under `/static`
 * 4. Fallback handler (404)
 */

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::admin_routes::configure_admin_routes;
use crate::backend::routes::public_routes::configure_public_routes;
use crate::backend::server::state::AppState;

/// Directory served under `/static`
pub const STATIC_DIR: &str = "public";

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Pool, session manager and configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    // Add public routes
    let router = configure_public_routes(router);

    // Add admin routes
    let router = configure_admin_routes(router, app_state.clone());

    // Add static file serving
    let router = router.nest_service("/static", ServeDir::new(STATIC_DIR));

    // Fallback handler for 404
    let router = router.fallback(|| async { BackendError::not_found("page") });

    // Log each request
    let router = router.layer(TraceLayer::new_for_http());

    // Use AppState as router state
    router.with_state(app_state)
}

/**
 * Admin Routes
 *
 * Every route here sits behind `require_principal`; a request without a
 * valid session is redirected to `/login` before any handler runs.
 *
 * - `GET /admin` - Dashboard
 * - `GET /admin/quotes`, `GET/POST /admin/quotes/new`, `GET/POST /admin/quotes/{id}`
 * - `GET /admin/tags`, `GET/POST /admin/tags/new`, `GET/POST /admin/tags/{id}`
 * - `GET /admin/quote_tags`, `GET/POST /admin/quote_tags/new`,
 *   `GET/POST /admin/quote_tags/{quote_id}/{tag_id}`
 */

use axum::{middleware, routing::get, Router};

use crate::backend::admin::dashboard;
use crate::backend::middleware::require_principal;
use crate::backend::server::state::AppState;
use crate::backend::{quote_tags, quotes, tags};

/// Configure the admin area
///
/// `route_layer` only wraps matched routes, so unknown `/admin/...` paths
/// still fall through to the 404 fallback.
pub fn configure_admin_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/admin", get(dashboard))
        // Quotes
        .route("/admin/quotes", get(quotes::handlers::list))
        .route(
            "/admin/quotes/new",
            get(quotes::handlers::new_form).post(quotes::handlers::create),
        )
        .route(
            "/admin/quotes/{id}",
            get(quotes::handlers::edit_form).post(quotes::handlers::update_or_delete),
        )
        // Tags
        .route("/admin/tags", get(tags::handlers::list))
        .route(
            "/admin/tags/new",
            get(tags::handlers::new_form).post(tags::handlers::create),
        )
        .route(
            "/admin/tags/{id}",
            get(tags::handlers::edit_form).post(tags::handlers::update_or_delete),
        )
        // Associations
        .route("/admin/quote_tags", get(quote_tags::handlers::list))
        .route(
            "/admin/quote_tags/new",
            get(quote_tags::handlers::new_form).post(quote_tags::handlers::create),
        )
        .route(
            "/admin/quote_tags/{quote_id}/{tag_id}",
            get(quote_tags::handlers::view).post(quote_tags::handlers::delete),
        )
        .route_layer(middleware::from_fn_with_state(app_state, require_principal));

    router.merge(admin)
}

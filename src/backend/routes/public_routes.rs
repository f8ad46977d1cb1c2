/**
 * Public Routes
 *
 * - `GET /` - Random quote
 * - `GET /quotes` - Tagged quotes, one row each
 * - `GET /quotes/{tag}` - Quotes carrying one tag
 * - `GET/POST /tags` - Tag picker
 * - `GET/POST /login` - Login form
 * - `GET /logout` - End the session
 */

use axum::{routing::get, Router};

use crate::backend::auth::{login, login_page, logout};
use crate::backend::public::handlers::{index, pick_tag, quotes, quotes_by_tag, tag_picker};
use crate::backend::server::state::AppState;

/// Configure routes reachable without a session
pub fn configure_public_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(index))
        .route("/quotes", get(quotes))
        .route("/quotes/{tag}", get(quotes_by_tag))
        .route("/tags", get(tag_picker).post(pick_tag))
        .route("/login", get(login_page).post(login))
        .route("/logout", get(logout))
}

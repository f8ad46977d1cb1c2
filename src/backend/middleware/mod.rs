//! Middleware Module
//!
//! HTTP middleware applied to groups of routes.
//!
//! - **`auth`** - Login gate for the admin routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, Router};
//! use quoteshufl::backend::middleware::require_principal;
//! use quoteshufl::backend::server::AppState;
//!
//! fn gate(router: Router<AppState>, state: AppState) -> Router<AppState> {
//!     router.route_layer(middleware::from_fn_with_state(state, require_principal))
//! }
//! ```

pub mod auth;

pub use auth::{require_principal, LOGIN_PATH, LOGIN_REQUIRED_MESSAGE};

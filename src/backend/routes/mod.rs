//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by access level into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs            - Module exports and documentation
//! ├── router.rs         - Main router creation
//! ├── public_routes.rs  - Pages open to everyone
//! └── admin_routes.rs   - Pages behind the login gate
//! ```
//!
//! # Route Types
//!
//! ## Public Routes
//!
//! - `GET /` - Random quote
//! - `GET /quotes`, `GET /quotes/{tag}` - Listings
//! - `GET/POST /tags` - Tag picker
//! - `GET/POST /login`, `GET /logout`
//!
//! ## Admin Routes
//!
//! - `GET /admin` - Dashboard
//! - `/admin/quotes`, `/admin/tags`, `/admin/quote_tags` - Table editors
//!
//! # Example
//!
//! ```rust,no_run
//! use quoteshufl::backend::routes::create_router;
//! use quoteshufl::backend::server::state::AppState;
//! use quoteshufl::shared::AppConfig;
//!
//! # fn example(pool: sqlx::PgPool, config: AppConfig) -> Result<(), quoteshufl::backend::auth::SessionError> {
//! let router = create_router(AppState::new(pool, &config)?);
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// Public routes
pub mod public_routes;

/// Admin routes
pub mod admin_routes;

pub use router::create_router;

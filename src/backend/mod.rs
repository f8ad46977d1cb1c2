//! Backend Module
//!
//! All server-side code: the Axum application, its routes and handlers,
//! the Postgres data access layer and admin authentication.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, database setup
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`db`** - Data access errors and table metadata
//! - **`quotes`**, **`tags`**, **`quote_tags`** - Per-table queries and admin handlers
//! - **`public`** - Random quote, joined listings, tag picker
//! - **`admin`** - Dashboard
//! - **`auth`** - Users, sessions, login and logout
//! - **`middleware`** - Login gate for the admin routes
//! - **`flash`** - One-shot messages carried across redirects
//! - **`views`** - View models returned by handlers
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── db/             - Data access errors, schema queries
//! ├── quotes/         - quote table
//! ├── tags/           - tag table
//! ├── quote_tags/     - quote_tag table
//! ├── public/         - Public pages and joined queries
//! ├── admin/          - Dashboard
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── flash.rs        - Flash messages
//! ├── views/          - View models
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the connection pool, the session manager and the
//! configuration. The only in-memory mutable state is the session
//! revocation list, behind `Arc<RwLock<>>`.
//!
//! # Request Outcomes
//!
//! - Form pages redisplay themselves with field errors on invalid input
//! - Valid form posts run one data access call, flash the outcome and
//!   redirect (303)
//! - A missing entity or a failed page load is a `BackendError` response

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Data access layer
pub mod db;

/// Quote table
pub mod quotes;

/// Tag table
pub mod tags;

/// Quote-tag associations
pub mod quote_tags;

/// Public pages
pub mod public;

/// Admin dashboard
pub mod admin;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Flash messages
pub mod flash;

/// View models
pub mod views;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::create_app;

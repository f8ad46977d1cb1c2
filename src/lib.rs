//! Quoteshufl - Main Library
//!
//! A small quote database with a public face and an admin area. Visitors get
//! a random quote, listings of tagged quotes and a tag picker; a logged-in
//! admin edits quotes, tags and the associations between them.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types with no dependency on the HTTP server
//!   - Quote, tag and association records
//!   - Typed forms and validation rules
//!   - Configuration and shared error types
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, routes and the admin login gate
//!   - Postgres data access through sqlx
//!   - Sessions, flash messages and view models
//!
//! # Usage
//!
//! ```rust,no_run
//! use quoteshufl::backend::server::init::create_app;
//! use quoteshufl::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Rendering
//!
//! Handlers return JSON view models (`backend::views`). Turning them into
//! markup is left to whatever sits in front of the server.
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` - payload serialization failures
//! - `backend::db::DataError` - data access failures, flashed by handlers
//! - `backend::error::BackendError` - failures that end a request with an
//!   error status

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;

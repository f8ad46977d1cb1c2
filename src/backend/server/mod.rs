//! Server Module
//!
//! Everything needed to go from an `AppConfig` to a running `Router`.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Pool creation, migrations, admin seeding
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Database**: connect the pool and run migrations
//! 2. **Seeding**: create the configured admin account if it is missing
//! 3. **State**: pool + session manager
//! 4. **Background Tasks**: prune expired session revocations
//! 5. **Router Creation**: public routes, gated admin routes, static files

/// Application state management
pub mod state;

/// Database configuration
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::{create_app, InitError};
pub use state::AppState;

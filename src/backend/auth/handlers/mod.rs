//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports
//! ├── login.rs    - Login form and credential check
//! └── logout.rs   - Session revocation
//! ```
//!
//! # Handlers
//!
//! - **`login_page`** - GET /login
//! - **`login`** - POST /login
//! - **`logout`** - GET /logout

/// Login handler
pub mod login;
/// Logout handler
pub mod logout;

pub use login::{login, login_page, ADMIN_PATH, INVALID_LOGIN_MESSAGE};
pub use logout::{logout, LOGGED_OUT_MESSAGE};

//! Authentication Module
//!
//! Admin login for the quote database: credential checks against the
//! `users` table and the session principal that gates `/admin`.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - Principal, session tokens, revocation
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── login.rs    - Login form and credential check
//!     └── logout.rs   - Session revocation
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: username + password -> checked in Postgres -> session cookie set
//! 2. **Admin request**: cookie -> token verified, expiry and revocation checked
//!    by the auth middleware -> `Principal` available to the handler
//! 3. **Logout**: session id revoked -> cookie cleared
//!
//! # Security
//!
//! - Hashes are bcrypt (`$2a$`), compared with pgcrypto's `crypt()`
//! - Sessions last five minutes by default and are not extended by activity
//! - No lockout or throttling of failed attempts

/// User model and database operations
pub mod users;

/// Session principal and token management
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, login_page, logout};
pub use sessions::{Principal, SessionError, SessionManager};

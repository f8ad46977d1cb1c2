//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Database test fixtures
//! - A cookie-keeping client for driving the router
//! - Authentication test helpers
//! - Custom assertion macros
//!
//! Each test binary uses a different subset.
#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod client;
pub mod database;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use client::*;
pub use database::*;

//! Common types and utilities shared across Storelens crates.
//!
//! This crate defines the shared error type and observability helpers used
//! throughout the Storelens workspace. It is intentionally lightweight and
//! dependency‑minimal so that all crates can depend on it without
//! introducing heavy transitive costs.
//!
//! # Overview
//!
//! - [`observability`]: Centralised tracing/logging initialisation
//! - [`StorelensError`] and [`Result`]: Shared error handling

pub mod observability;

/// Error types used across the Storelens system.
#[derive(thiserror::Error, Debug)]
pub enum StorelensError {
    /// A page could not be fetched or analysed.
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// The web server failed to start or serve.
    #[error("Server error: {0}")]
    Server(#[from] anyhow::Error),

    /// Configuration was incomplete or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenient alias for results that use [`StorelensError`].
pub type Result<T> = std::result::Result<T, StorelensError>;

//! Error types for BankEase.
//!
//! Navigation itself is total: the gate, chrome rules, and route table never
//! fail. Errors only arise at the I/O edges (flag persistence, configuration).

/// Top-level error type. Configuration errors surface before anything runs
/// and go straight to the binary's `main`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Navigator stopped: {0}")]
    Navigator(String),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Flag store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed settings document: {0}")]
    Malformed(String),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

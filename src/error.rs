//! Error types for the shift dashboard service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions the service can surface.

use thiserror::Error;

/// The main error type for the shift dashboard service.
///
/// All fallible operations in the service return this error type, making
/// it easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use shiftboard::error::DashboardError;
///
/// let error = DashboardError::MissingEnvVar {
///     name: "INTERNAL_KEY".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing required environment variable: INTERNAL_KEY");
/// ```
#[derive(Debug, Error)]
pub enum DashboardError {
    /// A required environment variable was absent at startup.
    #[error("Missing required environment variable: {name}")]
    MissingEnvVar {
        /// The variable that was not set.
        name: String,
    },

    /// An environment variable was present but could not be parsed.
    #[error("Invalid value for environment variable '{name}': {message}")]
    InvalidEnvVar {
        /// The variable with the bad value.
        name: String,
        /// A description of the parse failure.
        message: String,
    },

    /// A read against one of the upstream stores failed.
    ///
    /// Distinct from an empty result set, which is a valid response.
    #[error("Upstream {store} store unavailable: {message}")]
    StoreUnavailable {
        /// Which store failed ("sales" or "attendance").
        store: String,
        /// A description of the underlying failure.
        message: String,
    },

    /// A required query parameter was absent from the request.
    #[error("Missing required query parameter: {name}")]
    MissingParam {
        /// The parameter that was not supplied.
        name: String,
    },

    /// The internal key header was absent or did not match.
    #[error("unauthorized")]
    Unauthorized,

    /// The HTTP listener could not be started.
    #[error("Failed to start server: {message}")]
    ServerStartup {
        /// A description of the startup failure.
        message: String,
    },
}

/// A type alias for Results that return DashboardError.
pub type DashboardResult<T> = Result<T, DashboardError>;

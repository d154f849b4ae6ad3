//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Error Flow in the Storefront                            │
//! │                                                                         │
//! │  Frontend                    Rust Facade                                │
//! │  ────────                    ───────────                                │
//! │                                                                         │
//! │  list_products(...)                                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │  Validation Error? ── ValidationError::TooLong ──┐               │  │
//! │  │         │                                        ▼               │  │
//! │  │  Business Error? ──── CoreError::EmptyCart ──── ApiError ──────► │  │
//! │  │         │                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Session store mutations never appear here: they are total.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use ts_rs::TS;

use lumiere_core::{CoreError, ValidationError};

/// API error returned from storefront commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ErrorCode {
    /// Resource not found (unknown product or order id)
    NotFound,

    /// Input validation failed (over-long query or gift message,
    /// status label outside the canonical vocabulary)
    ValidationError,

    /// Business rule violation (e.g. empty-cart checkout)
    BusinessLogic,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EmptyCart => ApiError::new(ErrorCode::BusinessLogic, err.to_string()),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts validation errors directly (for commands that validate input
/// before touching any state).
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

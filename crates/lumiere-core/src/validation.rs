//! # Validation Module
//!
//! Input validation utilities for the storefront facade.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (out of scope)                                       │
//! │  ├── Basic format checks (empty, length)                                │
//! │  └── Immediate user feedback                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Commands facade (Rust)                                        │
//! │  ├── Type validation (deserialization)                                  │
//! │  └── THIS MODULE: bounds on free-text input                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Session store                                                 │
//! │  └── Total operations - invalid input becomes a documented no-op,       │
//! │      never a panic                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{GIFT_MESSAGE_MAX_LEN, SEARCH_QUERY_MAX_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a free-text search query.
///
/// ## Rules
/// - Can be empty (imposes no filter constraint)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
///
/// ## Example
/// ```rust
/// use lumiere_core::validation::validate_search_query;
///
/// assert_eq!(validate_search_query("  diamond ").unwrap(), "diamond");
/// assert!(validate_search_query(&"a".repeat(200)).is_err());
/// ```
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > SEARCH_QUERY_MAX_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: SEARCH_QUERY_MAX_LEN,
        });
    }

    Ok(query.to_string())
}

/// Validates an optional gift message.
///
/// ## Rules
/// - Absent or empty is fine (a gift order does not require a message)
/// - Maximum 250 characters, matching the gifting form's counter
pub fn validate_gift_message(message: Option<&str>) -> ValidationResult<()> {
    if let Some(message) = message {
        if message.chars().count() > GIFT_MESSAGE_MAX_LEN {
            return Err(ValidationError::TooLong {
                field: "gift message".to_string(),
                max: GIFT_MESSAGE_MAX_LEN,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("gold ring").unwrap(), "gold ring");
        assert_eq!(validate_search_query("  gold  ").unwrap(), "gold");
        assert_eq!(validate_search_query("").unwrap(), "");

        assert!(validate_search_query(&"q".repeat(101)).is_err());
        // Exactly at the bound is fine
        assert!(validate_search_query(&"q".repeat(100)).is_ok());
    }

    #[test]
    fn test_validate_gift_message() {
        assert!(validate_gift_message(None).is_ok());
        assert!(validate_gift_message(Some("")).is_ok());
        assert!(validate_gift_message(Some("Happy anniversary!")).is_ok());

        assert!(validate_gift_message(Some(&"x".repeat(250))).is_ok());
        assert!(validate_gift_message(Some(&"x".repeat(251))).is_err());
    }
}

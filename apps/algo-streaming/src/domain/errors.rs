//! Domain errors for algo streaming.

use thiserror::Error;

/// Errors surfaced by the streaming core.
///
/// The publish path itself is infallible (inputs are trusted, see the
/// registry docs); these errors cover the explicit lookup and validation
/// surfaces offered to callers that want stricter semantics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamingError {
    /// No algo stream has ever been published for the requested product.
    #[error("no algo stream published for product: {product_id}")]
    StreamNotFound {
        /// The product id that was looked up.
        product_id: String,
    },

    /// A price update failed boundary validation.
    #[error("invalid price update for '{field}': {message}")]
    InvalidPrice {
        /// Field that failed validation.
        field: String,
        /// Description of the failure.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_not_found_display() {
        let err = StreamingError::StreamNotFound {
            product_id: "IBM".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("IBM"));
        assert!(msg.contains("no algo stream"));
    }

    #[test]
    fn invalid_price_display() {
        let err = StreamingError::InvalidPrice {
            field: "bid_offer_spread".to_string(),
            message: "must not be negative".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("bid_offer_spread"));
        assert!(msg.contains("negative"));
    }

    #[test]
    fn streaming_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(StreamingError::StreamNotFound {
            product_id: "X".to_string(),
        });
        assert!(!err.to_string().is_empty());
    }
}

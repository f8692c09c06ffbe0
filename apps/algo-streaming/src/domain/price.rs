//! Upstream price update value object.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::StreamingError;
use super::product::ProductId;

/// A mid/spread price quote supplied by the upstream pricing feed.
///
/// This core only consumes the value; it never computes mid or spread.
/// Construction accepts the numbers as given. Callers that want boundary
/// checks can run [`PriceUpdate::validate`] before handing the update to
/// the registry; the registry itself trusts its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceUpdate {
    product_id: ProductId,
    mid: Decimal,
    bid_offer_spread: Decimal,
}

impl PriceUpdate {
    /// Create a new price update.
    #[must_use]
    pub const fn new(product_id: ProductId, mid: Decimal, bid_offer_spread: Decimal) -> Self {
        Self {
            product_id,
            mid,
            bid_offer_spread,
        }
    }

    /// Get the product this price belongs to.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Get the midpoint price.
    #[must_use]
    pub const fn mid(&self) -> Decimal {
        self.mid
    }

    /// Get the full bid-offer spread.
    #[must_use]
    pub const fn bid_offer_spread(&self) -> Decimal {
        self.bid_offer_spread
    }

    /// Check whether this update would produce a crossed market
    /// (bid above offer), i.e. the spread is negative.
    #[must_use]
    pub fn is_crossed(&self) -> bool {
        self.bid_offer_spread < Decimal::ZERO
    }

    /// Validate the update for boundary use.
    ///
    /// Rejects an empty product id and a negative spread. The registry
    /// deliberately does not call this: the publish path accepts inputs
    /// as given and a crossed market propagates into a crossed quote.
    ///
    /// # Errors
    ///
    /// Returns [`StreamingError::InvalidPrice`] naming the offending field.
    pub fn validate(&self) -> Result<(), StreamingError> {
        if self.product_id.is_empty() {
            return Err(StreamingError::InvalidPrice {
                field: "product_id".to_string(),
                message: "product id cannot be empty".to_string(),
            });
        }

        if self.is_crossed() {
            return Err(StreamingError::InvalidPrice {
                field: "bid_offer_spread".to_string(),
                message: format!("spread {} must not be negative", self.bid_offer_spread),
            });
        }

        Ok(())
    }
}

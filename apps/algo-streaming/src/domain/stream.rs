//! Quote orders, two-sided price streams, and algo streams.
//!
//! These are the published artifacts of the streaming core. All three types
//! are plain immutable values: the quantity policy (`hidden == 2 × visible`,
//! alternating visible size) is enforced by the registry at construction
//! time, not structurally by the types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::product::ProductId;

/// Which side of the market an order represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Buy side.
    Bid,
    /// Sell side.
    Offer,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bid => write!(f, "BID"),
            Self::Offer => write!(f, "OFFER"),
        }
    }
}

/// One side of a streamed quote: price plus visible and hidden size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteOrder {
    price: Decimal,
    visible_quantity: u64,
    hidden_quantity: u64,
    side: Side,
}

impl QuoteOrder {
    /// Create a new quote order.
    #[must_use]
    pub const fn new(price: Decimal, visible_quantity: u64, hidden_quantity: u64, side: Side) -> Self {
        Self {
            price,
            visible_quantity,
            hidden_quantity,
            side,
        }
    }

    /// Get the quoted price.
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    /// Get the quantity shown to the market.
    #[must_use]
    pub const fn visible_quantity(&self) -> u64 {
        self.visible_quantity
    }

    /// Get the quantity held back from display.
    #[must_use]
    pub const fn hidden_quantity(&self) -> u64 {
        self.hidden_quantity
    }

    /// Get the side of this order.
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Total size of the order (visible plus hidden).
    #[must_use]
    pub const fn total_quantity(&self) -> u64 {
        self.visible_quantity + self.hidden_quantity
    }
}

/// A two-way market for one product: a bid order and an offer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceStream {
    product_id: ProductId,
    bid_order: QuoteOrder,
    offer_order: QuoteOrder,
}

impl PriceStream {
    /// Create a new two-sided price stream.
    #[must_use]
    pub const fn new(product_id: ProductId, bid_order: QuoteOrder, offer_order: QuoteOrder) -> Self {
        Self {
            product_id,
            bid_order,
            offer_order,
        }
    }

    /// Get the product this stream quotes.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Get the bid order.
    #[must_use]
    pub const fn bid_order(&self) -> &QuoteOrder {
        &self.bid_order
    }

    /// Get the offer order.
    #[must_use]
    pub const fn offer_order(&self) -> &QuoteOrder {
        &self.offer_order
    }

    /// Calculate the quoted spread (offer minus bid).
    ///
    /// Negative when the market is crossed.
    #[must_use]
    pub fn spread(&self) -> Decimal {
        self.offer_order.price() - self.bid_order.price()
    }

    /// Calculate the mid price of the quoted market.
    #[must_use]
    pub fn mid_price(&self) -> Decimal {
        (self.bid_order.price() + self.offer_order.price()) / Decimal::TWO
    }
}

/// The published artifact for one product at a point in time.
///
/// A thin wrapper around [`PriceStream`] so downstream consumers are
/// decoupled from the internal stream representation. Its storage key is
/// the product id of the wrapped stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgoStream {
    price_stream: PriceStream,
}

impl AlgoStream {
    /// Create a new algo stream wrapping a price stream.
    #[must_use]
    pub const fn new(price_stream: PriceStream) -> Self {
        Self { price_stream }
    }

    /// Get the wrapped price stream.
    #[must_use]
    pub const fn price_stream(&self) -> &PriceStream {
        &self.price_stream
    }

    /// Get the product id keying this stream.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        self.price_stream.product_id()
    }
}

//! Algo streaming registry.
//!
//! Holds the latest [`AlgoStream`] per product, derives two-sided quotes
//! from incoming price updates, and fans each publish out to registered
//! listeners synchronously.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::domain::{AlgoStream, PriceStream, PriceUpdate, ProductId, QuoteOrder, Side, StreamingError};
use crate::service::listener::ServiceListener;

// ============================================================================
// Constants
// ============================================================================

/// Visible size streamed on even publish counts.
const VISIBLE_QUANTITY_EVEN: u64 = 1_000_000;

/// Visible size streamed on odd publish counts.
const VISIBLE_QUANTITY_ODD: u64 = 2_000_000;

/// Hidden size is always this multiple of the visible size.
const HIDDEN_QUANTITY_MULTIPLIER: u64 = 2;

// ============================================================================
// Registry
// ============================================================================

/// A registry instance shared between an adapter and other callers.
///
/// The registry has no internal locking (single logical writer); sharing
/// one instance across observers goes through this mutex.
pub type SharedStreamingService = Arc<Mutex<AlgoStreamingService>>;

/// Keyed publish/subscribe registry for two-sided streaming quotes.
///
/// One current [`AlgoStream`] is kept per product id; publishing for an
/// existing key replaces the entry in full. Listeners are notified in
/// registration order, strictly after the store mutation and strictly
/// before [`publish`](Self::publish) returns.
///
/// The visible-size alternation counter is shared across all products:
/// two products interleaving publishes share one global parity rather
/// than each seeing a clean alternation of its own.
#[derive(Default)]
pub struct AlgoStreamingService {
    /// Latest algo stream per product id. Overwritten, never deleted.
    streams: HashMap<ProductId, AlgoStream>,
    /// Registered listeners, notified in append order.
    listeners: Vec<Box<dyn ServiceListener<AlgoStream>>>,
    /// Publishes seen so far, across all products. Drives size alternation.
    publish_count: u64,
}

impl AlgoStreamingService {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform a price update into a two-sided algo stream, store it,
    /// and notify every listener.
    ///
    /// Quote derivation: `bid = mid - spread/2`, `offer = mid + spread/2`.
    /// The visible size alternates globally between 1,000,000 and 2,000,000
    /// per publish (starting at 1,000,000); the hidden size is always twice
    /// the visible size.
    ///
    /// Inputs are trusted: a negative spread is warn-logged but still
    /// published as a crossed market, and extreme mids saturate at the
    /// decimal bounds instead of failing. Listeners always receive the
    /// "added" signal, even when the publish replaces an existing entry.
    pub fn publish(&mut self, price: &PriceUpdate) {
        let visible_quantity = if self.publish_count % 2 == 0 {
            VISIBLE_QUANTITY_EVEN
        } else {
            VISIBLE_QUANTITY_ODD
        };
        let hidden_quantity = visible_quantity * HIDDEN_QUANTITY_MULTIPLIER;
        self.publish_count += 1;

        let half_spread = price.bid_offer_spread() / Decimal::TWO;
        let bid_price = price.mid().saturating_sub(half_spread);
        let offer_price = price.mid().saturating_add(half_spread);

        if price.is_crossed() {
            warn!(
                product = %price.product_id(),
                spread = %price.bid_offer_spread(),
                "negative spread produces a crossed market"
            );
        }

        let bid_order = QuoteOrder::new(bid_price, visible_quantity, hidden_quantity, Side::Bid);
        let offer_order = QuoteOrder::new(offer_price, visible_quantity, hidden_quantity, Side::Offer);
        let stream = AlgoStream::new(PriceStream::new(
            price.product_id().clone(),
            bid_order,
            offer_order,
        ));

        debug!(
            product = %price.product_id(),
            bid = %bid_price,
            offer = %offer_price,
            visible = visible_quantity,
            "published algo stream"
        );

        self.streams.insert(price.product_id().clone(), stream.clone());

        for listener in &mut self.listeners {
            listener.on_added(&stream);
        }
    }

    /// Get the latest algo stream for a product, if one has been published.
    #[must_use]
    pub fn get(&self, product_id: &ProductId) -> Option<&AlgoStream> {
        self.streams.get(product_id)
    }

    /// Get the latest algo stream for a product, or an error naming it.
    ///
    /// # Errors
    ///
    /// Returns [`StreamingError::StreamNotFound`] when nothing has been
    /// published for the id.
    pub fn try_get(&self, product_id: &ProductId) -> Result<&AlgoStream, StreamingError> {
        self.streams
            .get(product_id)
            .ok_or_else(|| StreamingError::StreamNotFound {
                product_id: product_id.as_str().to_string(),
            })
    }

    /// Register a listener for publish notifications.
    ///
    /// Listeners are kept in registration order and never deduplicated
    /// or removed.
    pub fn add_listener(&mut self, listener: Box<dyn ServiceListener<AlgoStream>>) {
        self.listeners.push(listener);
    }

    /// Read-only view of the registered listeners, in registration order.
    #[must_use]
    pub fn listeners(&self) -> &[Box<dyn ServiceListener<AlgoStream>>] {
        &self.listeners
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of products with a published stream.
    #[must_use]
    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }

    /// Number of publishes seen so far, across all products.
    #[must_use]
    pub const fn publish_count(&self) -> u64 {
        self.publish_count
    }
}

impl std::fmt::Debug for AlgoStreamingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgoStreamingService")
            .field("streams", &self.streams.len())
            .field("listeners", &self.listeners.len())
            .field("publish_count", &self.publish_count)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

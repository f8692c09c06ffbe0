//! Upstream price-feed adapter.
//!
//! Bridges the upstream pricing feed into the streaming registry: each
//! newly-added price becomes a publish. Removals and updates from the
//! feed are deliberately not propagated; only new prices start a stream.

use tracing::trace;

use crate::domain::PriceUpdate;
use crate::service::listener::ServiceListener;
use crate::service::registry::SharedStreamingService;

/// Observer of the upstream price feed that forwards added prices into
/// [`AlgoStreamingService::publish`](crate::AlgoStreamingService::publish).
///
/// The registry is shared behind a mutex so the same instance can serve
/// this adapter and direct callers; the adapter holds the lock only for
/// the duration of one publish. The lock is held across the listener
/// fan-out and is not reentrant: a listener registered on the registry
/// must not call back into it through this shared handle, or the publish
/// deadlocks.
pub struct PriceFeedAdapter {
    service: SharedStreamingService,
}

impl PriceFeedAdapter {
    /// Create an adapter feeding the given registry.
    #[must_use]
    pub fn new(service: SharedStreamingService) -> Self {
        Self { service }
    }

    /// Get the registry this adapter publishes into.
    #[must_use]
    pub fn service(&self) -> &SharedStreamingService {
        &self.service
    }
}

impl ServiceListener<PriceUpdate> for PriceFeedAdapter {
    fn on_added(&mut self, data: &PriceUpdate) {
        self.service.lock().publish(data);
    }

    fn on_removed(&mut self, data: &PriceUpdate) {
        trace!(product = %data.product_id(), "price removal ignored");
    }

    fn on_updated(&mut self, data: &PriceUpdate) {
        // Only newly-added prices are re-streamed
        trace!(product = %data.product_id(), "price update ignored");
    }
}

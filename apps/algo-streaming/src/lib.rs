#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Algo Streaming - Two-Sided Quote Publisher
//!
//! A keyed publish/subscribe registry that turns mid/spread price updates
//! into two-sided streaming quotes. Each publish derives a bid and an offer
//! (each with a visible and a hidden size), stores the result as the current
//! algo stream for that product, and notifies every registered listener
//! synchronously before returning.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: Immutable value types with no side effects
//!   - `product`: Opaque product identifier
//!   - `price`: Upstream mid/spread price update
//!   - `stream`: Quote orders, two-sided price streams, algo streams
//!
//! - **Service**: Stateful registry and listener wiring
//!   - `registry`: Keyed store + quote derivation + fan-out
//!   - `listener`: Three-signal listener contract
//!   - `adapter`: Upstream price-feed adapter feeding the registry
//!
//! # Data Flow
//!
//! ```text
//! Price feed ──► PriceFeedAdapter ──► AlgoStreamingService::publish
//!                                          │
//!                            derive bid/offer quote orders
//!                                          │
//!                            upsert store[product_id]
//!                                          │
//!                            notify listeners (in order) ──► Consumer 1
//!                                                        ──► Consumer N
//! ```
//!
//! The registry itself carries no locking; callers that share one instance
//! across observers wrap it in `Arc<parking_lot::Mutex<_>>` the way
//! [`PriceFeedAdapter`] does.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Immutable quote and price value types.
pub mod domain;

/// Service layer - Streaming registry, listener contract, feed adapter.
pub mod service;

// =============================================================================
// Re-exports
// =============================================================================

pub use domain::{AlgoStream, PriceStream, PriceUpdate, ProductId, QuoteOrder, Side, StreamingError};
pub use service::{AlgoStreamingService, PriceFeedAdapter, ServiceListener, SharedStreamingService};

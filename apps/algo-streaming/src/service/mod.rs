//! Service layer: streaming registry, listener contract, feed adapter.

mod adapter;
mod listener;
mod registry;

pub use adapter::PriceFeedAdapter;
pub use listener::ServiceListener;
pub use registry::{AlgoStreamingService, SharedStreamingService};

//! End-to-End Stream Publishing Tests
//!
//! Wires the registry, downstream listeners, and the upstream feed adapter
//! together the way a host process would, then drives price-feed signals
//! through the whole pipeline.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use parking_lot::Mutex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use algo_streaming::{
    AlgoStream, AlgoStreamingService, PriceFeedAdapter, PriceUpdate, ProductId, ServiceListener,
    SharedStreamingService,
};

/// Downstream consumer that records every stream it is handed.
struct Recorder {
    label: &'static str,
    log: Arc<Mutex<Vec<(&'static str, AlgoStream)>>>,
}

impl ServiceListener<AlgoStream> for Recorder {
    fn on_added(&mut self, data: &AlgoStream) {
        self.log.lock().push((self.label, data.clone()));
    }
}

fn price(id: &str, mid: Decimal, spread: Decimal) -> PriceUpdate {
    PriceUpdate::new(ProductId::new(id), mid, spread)
}

fn setup() -> (
    PriceFeedAdapter,
    SharedStreamingService,
    Arc<Mutex<Vec<(&'static str, AlgoStream)>>>,
) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let service = Arc::new(Mutex::new(AlgoStreamingService::new()));

    {
        let mut registry = service.lock();
        registry.add_listener(Box::new(Recorder {
            label: "gui",
            log: Arc::clone(&log),
        }));
        registry.add_listener(Box::new(Recorder {
            label: "history",
            log: Arc::clone(&log),
        }));
    }

    let adapter = PriceFeedAdapter::new(Arc::clone(&service));
    (adapter, service, log)
}

#[test]
fn feed_to_listeners_pipeline() {
    let (mut adapter, service, log) = setup();

    adapter.on_added(&price("IBM", dec!(100.0), dec!(0.02)));
    adapter.on_added(&price("MSFT", dec!(380.0), dec!(0.04)));

    let registry = service.lock();
    assert_eq!(registry.stream_count(), 2);

    // First publish: even count, visible 1M; second: odd count, visible 2M
    let ibm = registry.get(&ProductId::new("IBM")).unwrap();
    assert_eq!(ibm.price_stream().bid_order().price(), dec!(99.99));
    assert_eq!(ibm.price_stream().offer_order().price(), dec!(100.01));
    assert_eq!(ibm.price_stream().bid_order().visible_quantity(), 1_000_000);

    let msft = registry.get(&ProductId::new("MSFT")).unwrap();
    assert_eq!(msft.price_stream().bid_order().price(), dec!(379.98));
    assert_eq!(msft.price_stream().offer_order().price(), dec!(380.02));
    assert_eq!(msft.price_stream().bid_order().visible_quantity(), 2_000_000);

    // Both listeners saw both publishes, in registration order each time
    let events = log.lock();
    let labels: Vec<_> = events.iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, vec!["gui", "history", "gui", "history"]);
    assert_eq!(events[0].1, events[1].1);
    assert_eq!(events[2].1, events[3].1);
    assert_eq!(events[0].1.product_id().as_str(), "IBM");
    assert_eq!(events[2].1.product_id().as_str(), "MSFT");
}

#[test]
fn updates_and_removals_do_not_reach_listeners() {
    let (mut adapter, service, log) = setup();

    adapter.on_added(&price("IBM", dec!(100.0), dec!(0.02)));
    adapter.on_updated(&price("IBM", dec!(101.0), dec!(0.02)));
    adapter.on_removed(&price("IBM", dec!(101.0), dec!(0.02)));

    assert_eq!(service.lock().publish_count(), 1);
    assert_eq!(log.lock().len(), 2); // one publish, two listeners
}

#[test]
fn republish_replaces_store_and_fans_out_again() {
    let (mut adapter, service, log) = setup();

    adapter.on_added(&price("IBM", dec!(100.0), dec!(0.02)));
    adapter.on_added(&price("IBM", dec!(101.0), dec!(0.04)));

    let registry = service.lock();
    assert_eq!(registry.stream_count(), 1);

    let stream = registry.get(&ProductId::new("IBM")).unwrap();
    assert_eq!(stream.price_stream().bid_order().price(), dec!(100.98));
    assert_eq!(stream.price_stream().offer_order().price(), dec!(101.02));
    assert_eq!(stream.price_stream().bid_order().visible_quantity(), 2_000_000);
    assert_eq!(stream.price_stream().bid_order().hidden_quantity(), 4_000_000);

    // Listeners cannot distinguish replacement from insertion
    let events = log.lock();
    assert_eq!(events.len(), 4);
    assert_eq!(&events[3].1, stream);
}

#[test]
fn alternation_is_global_across_the_feed() {
    let (mut adapter, service, _log) = setup();

    let feed = ["IBM", "MSFT", "GOOGL", "IBM", "MSFT", "GOOGL"];
    for id in feed {
        adapter.on_added(&price(id, dec!(100.0), dec!(0.02)));
    }

    let registry = service.lock();
    assert_eq!(registry.publish_count(), 6);

    // Parity is shared: each product's latest size reflects its position
    // in the global feed order, not a per-product alternation.
    let googl = registry.get(&ProductId::new("GOOGL")).unwrap();
    assert_eq!(googl.price_stream().bid_order().visible_quantity(), 2_000_000);
    let ibm = registry.get(&ProductId::new("IBM")).unwrap();
    assert_eq!(ibm.price_stream().bid_order().visible_quantity(), 2_000_000);
    let msft = registry.get(&ProductId::new("MSFT")).unwrap();
    assert_eq!(msft.price_stream().bid_order().visible_quantity(), 1_000_000);
}

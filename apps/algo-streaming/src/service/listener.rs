//! Three-signal listener contract.

/// A registered consumer of service events.
///
/// Services notify listeners synchronously with one of three signals:
/// added, removed, or updated. The non-propagating signals default to
/// no-ops so a consumer only implements what it reacts to.
///
/// Callbacks are fire-and-forget: they return nothing, and a service does
/// not catch panics raised by a listener. By the time a listener runs, the
/// service has already committed its own state change.
pub trait ServiceListener<T>: Send {
    /// Called when new data is added to the service.
    fn on_added(&mut self, data: &T);

    /// Called when data is removed from the service.
    fn on_removed(&mut self, _data: &T) {}

    /// Called when existing data is updated in the service.
    fn on_updated(&mut self, _data: &T) {}
}

//! The bridge handle and its one-time resolution.
//!
//! A [`Bridge`] is either connected to a host transport or disconnected.
//! Call sites never branch on host presence themselves: sending on a
//! disconnected bridge does nothing, and subscribing yields an inert
//! [`Subscription`] whose handler can never fire.

use crate::error::Result;
use crate::message::{InboundEvent, OutboundEvent};
use crate::registry::{HandlerRegistry, InboundHandler, Subscription};
use crate::transport::HostTransport;
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Lifecycle of the process-wide bridge handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    /// Resolution has not run yet.
    Unresolved,
    /// A host capability was found.
    Bound,
    /// The host capability is confirmed missing.
    Absent,
}

impl fmt::Display for BridgeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unresolved => write!(f, "unresolved"),
            Self::Bound => write!(f, "bound"),
            Self::Absent => write!(f, "absent"),
        }
    }
}

/// A bound host: the transport plus the handlers listening on it.
pub struct Connection {
    transport: Box<dyn HostTransport>,
    registry: Arc<HandlerRegistry>,
    installed: Mutex<HashSet<String>>,
}

impl Connection {
    /// Wraps a transport.
    #[must_use]
    pub fn new(transport: Box<dyn HostTransport>) -> Self {
        Self {
            transport,
            registry: Arc::new(HandlerRegistry::new()),
            installed: Mutex::new(HashSet::new()),
        }
    }

    /// The handlers registered on this connection.
    #[must_use]
    pub fn registry(&self) -> &Arc<HandlerRegistry> {
        &self.registry
    }

    /// Installs the transport-level handler for `name` unless already done.
    fn ensure_installed(&self, name: &str) -> Result<()> {
        let mut installed = self
            .installed
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if installed.contains(name) {
            return Ok(());
        }

        let registry = Arc::clone(&self.registry);
        self.transport.install_handler(
            name,
            Arc::new(move |event: InboundEvent| {
                let delivered = registry.dispatch(&event);
                tracing::debug!(event = %event.name, handlers = delivered, "Dispatched host message");
            }),
        )?;
        installed.insert(name.to_string());
        Ok(())
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("transport", &self.transport.name())
            .field("registry", &self.registry)
            .finish()
    }
}

/// Handle to the optional host capability.
///
/// Cheap to clone; provide one to the component tree at startup.
#[derive(Clone, Debug, Default)]
pub enum Bridge {
    Connected(Arc<Connection>),
    #[default]
    Disconnected,
}

impl Bridge {
    /// Creates a connected bridge over `transport`.
    pub fn connected(transport: impl HostTransport + 'static) -> Self {
        Self::Connected(Arc::new(Connection::new(Box::new(transport))))
    }

    /// Runs `lookup` and converts any failure into [`Bridge::Disconnected`].
    ///
    /// A missing host is the expected standalone case, so it is logged at
    /// debug level only.
    pub fn resolve_with<F>(lookup: F) -> Self
    where
        F: FnOnce() -> Result<Box<dyn HostTransport>>,
    {
        match lookup() {
            Ok(transport) => {
                tracing::info!(transport = transport.name(), "Host bridge bound");
                Self::Connected(Arc::new(Connection::new(transport)))
            }
            Err(e) => {
                tracing::debug!(error = %e, "Host bridge absent, running standalone");
                Self::Disconnected
            }
        }
    }

    /// Returns true if a host is bound.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }

    /// The lifecycle state this handle represents.
    #[must_use]
    pub fn state(&self) -> BridgeState {
        match self {
            Self::Connected(_) => BridgeState::Bound,
            Self::Disconnected => BridgeState::Absent,
        }
    }

    /// Sends `event` to the host if one is bound.
    ///
    /// Returns `Ok(false)` without doing anything when disconnected.
    pub fn try_send(&self, event: &OutboundEvent) -> Result<bool> {
        match self {
            Self::Connected(connection) => {
                connection.transport.send_input(event)?;
                Ok(true)
            }
            Self::Disconnected => Ok(false),
        }
    }

    /// Sends `event` to the host if one is bound, swallowing failures.
    pub fn send(&self, event: &OutboundEvent) {
        match self.try_send(event) {
            Ok(true) => tracing::debug!(event = %event.name, "Sent event to host"),
            Ok(false) => tracing::trace!(event = %event.name, "No host bound, event dropped"),
            Err(e) => tracing::warn!(event = %event.name, error = %e, "Failed to send event to host"),
        }
    }

    /// Registers `handler` for inbound events named `name`.
    ///
    /// The handler stays registered until the returned guard is dropped.
    /// On a disconnected bridge, or if the host refuses the handler, the
    /// guard is inert.
    pub fn subscribe<F>(&self, name: &str, handler: F) -> Subscription
    where
        F: Fn(&InboundEvent) + Send + Sync + 'static,
    {
        let Self::Connected(connection) = self else {
            return Subscription::inert();
        };

        if let Err(e) = connection.ensure_installed(name) {
            tracing::warn!(event = %name, error = %e, "Failed to install host message handler");
            return Subscription::inert();
        }

        let handler: InboundHandler = Arc::new(handler);
        connection.registry.subscribe(name, handler)
    }
}

/// Process-wide slot holding the resolved bridge.
///
/// The lookup runs at most once; every later caller gets the cached handle.
#[derive(Debug, Default)]
pub struct BridgeCell {
    bridge: OnceLock<Bridge>,
}

impl BridgeCell {
    /// Creates an unresolved cell. Usable in a `static`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bridge: OnceLock::new(),
        }
    }

    /// Returns the cached bridge, resolving it with `lookup` on first use.
    pub fn get_or_resolve<F>(&self, lookup: F) -> Bridge
    where
        F: FnOnce() -> Result<Box<dyn HostTransport>>,
    {
        self.bridge
            .get_or_init(|| Bridge::resolve_with(lookup))
            .clone()
    }

    /// Returns the bridge if resolution already ran.
    #[must_use]
    pub fn get(&self) -> Option<&Bridge> {
        self.bridge.get()
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> BridgeState {
        self.bridge
            .get()
            .map_or(BridgeState::Unresolved, Bridge::state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BridgeError;
    use crate::loopback::LoopbackHost;
    use crate::message::InputPriority;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn absent() -> Result<Box<dyn HostTransport>> {
        Err(BridgeError::unavailable("no host in tests").into())
    }

    fn present() -> Result<Box<dyn HostTransport>> {
        Ok(Box::new(LoopbackHost::new()))
    }

    #[test]
    fn failed_lookup_resolves_to_disconnected() {
        let bridge = Bridge::resolve_with(absent);
        assert!(!bridge.is_connected());
        assert_eq!(bridge.state(), BridgeState::Absent);
    }

    #[test]
    fn successful_lookup_resolves_to_connected() {
        let bridge = Bridge::resolve_with(present);
        assert!(bridge.is_connected());
        assert_eq!(bridge.state(), BridgeState::Bound);
    }

    #[test]
    fn cell_runs_lookup_once() {
        let cell = BridgeCell::new();
        assert_eq!(cell.state(), BridgeState::Unresolved);
        assert!(cell.get().is_none());

        let calls = AtomicUsize::new(0);
        let first = cell.get_or_resolve(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            present()
        });
        let second = cell.get_or_resolve(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            absent()
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(first.is_connected());
        assert!(second.is_connected());
        assert_eq!(cell.state(), BridgeState::Bound);
    }

    #[test]
    fn cell_caches_absence() {
        let cell = BridgeCell::new();
        cell.get_or_resolve(absent);
        let again = cell.get_or_resolve(present);
        assert!(!again.is_connected());
        assert_eq!(cell.state(), BridgeState::Absent);
    }

    #[test]
    fn disconnected_send_is_noop() {
        let bridge = Bridge::Disconnected;
        let event = OutboundEvent::new("checkComms", json!({ "data": "x" }));
        assert!(!bridge.try_send(&event).expect("should not fail"));
        bridge.send(&event);
    }

    #[test]
    fn connected_send_reaches_transport() {
        let host = LoopbackHost::new();
        let bridge = Bridge::connected(host.clone());
        let event = OutboundEvent::new("checkComms", json!({ "data": "x" }))
            .with_priority(InputPriority::Event);

        assert!(bridge.try_send(&event).expect("send should succeed"));
        assert_eq!(host.sent(), vec![event]);
    }

    #[test]
    fn send_failure_is_swallowed() {
        let host = LoopbackHost::rejecting();
        let bridge = Bridge::connected(host.clone());
        let event = OutboundEvent::new("checkComms", json!(null));

        assert!(bridge.try_send(&event).is_err());
        bridge.send(&event);
        assert!(host.sent().is_empty());
    }

    #[test]
    fn disconnected_subscribe_is_inert() {
        let sub = Bridge::Disconnected.subscribe("returnComms", |_| {});
        assert!(!sub.is_active());
    }

    #[test]
    fn handler_installed_once_per_name() {
        let host = LoopbackHost::new();
        let bridge = Bridge::connected(host.clone());

        let first = bridge.subscribe("returnComms", |_| {});
        let second = bridge.subscribe("returnComms", |_| {});
        let other = bridge.subscribe("other", |_| {});

        assert_eq!(host.installed_handlers("returnComms"), 1);
        assert_eq!(host.installed_handlers("other"), 1);
        drop((first, second, other));
    }

    #[test]
    fn remount_keeps_a_single_live_handler() {
        let host = LoopbackHost::new();
        let bridge = Bridge::connected(host.clone());
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&hits);
        let first_mount = bridge.subscribe("returnComms", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        drop(first_mount);

        let counter = Arc::clone(&hits);
        let _second_mount = bridge.subscribe("returnComms", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        host.deliver(InboundEvent::new("returnComms", json!({ "data": "ok" })));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(host.installed_handlers("returnComms"), 1);

        let Bridge::Connected(connection) = &bridge else {
            panic!("bridge should be connected");
        };
        assert_eq!(connection.registry().handler_count("returnComms"), 1);
    }

    #[test]
    fn refused_handler_yields_inert_subscription() {
        let host = LoopbackHost::rejecting();
        let bridge = Bridge::connected(host.clone());
        let sub = bridge.subscribe("returnComms", |_| {});
        assert!(!sub.is_active());

        // Refusal is not remembered as installed; a later subscribe retries.
        let retry = bridge.subscribe("returnComms", |_| {});
        assert!(!retry.is_active());
        assert_eq!(host.installed_handlers("returnComms"), 0);
    }

    #[test]
    fn state_display() {
        assert_eq!(BridgeState::Unresolved.to_string(), "unresolved");
        assert_eq!(BridgeState::Bound.to_string(), "bound");
        assert_eq!(BridgeState::Absent.to_string(), "absent");
    }
}

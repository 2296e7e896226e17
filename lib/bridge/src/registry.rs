//! Scoped registration of inbound event handlers.
//!
//! Handlers are registered per event name and released when their
//! [`Subscription`] is dropped, so a view that mounts, unmounts and mounts
//! again ends up with exactly one live handler.

use crate::message::InboundEvent;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A handler for inbound events.
pub type InboundHandler = Arc<dyn Fn(&InboundEvent) + Send + Sync>;

/// Identifies one registered handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

/// Handlers keyed by inbound event name.
#[derive(Default)]
pub struct HandlerRegistry {
    next_id: AtomicU64,
    handlers: Mutex<HashMap<String, Vec<(HandlerId, InboundHandler)>>>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<(HandlerId, InboundHandler)>>> {
        self.handlers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers `handler` for events named `name`.
    pub fn register(&self, name: &str, handler: InboundHandler) -> HandlerId {
        let id = HandlerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock()
            .entry(name.to_string())
            .or_default()
            .push((id, handler));
        id
    }

    /// Removes a handler. Returns false if it was already gone.
    pub fn deregister(&self, name: &str, id: HandlerId) -> bool {
        let mut handlers = self.lock();
        let Some(entries) = handlers.get_mut(name) else {
            return false;
        };
        let before = entries.len();
        entries.retain(|(existing, _)| *existing != id);
        let removed = entries.len() != before;
        if entries.is_empty() {
            handlers.remove(name);
        }
        removed
    }

    /// Registers `handler` and returns a guard that deregisters it on drop.
    pub fn subscribe(self: &Arc<Self>, name: &str, handler: InboundHandler) -> Subscription {
        let id = self.register(name, handler);
        Subscription {
            registered: Some(Registered {
                registry: Arc::clone(self),
                name: name.to_string(),
                id,
            }),
        }
    }

    /// Number of live handlers for `name`.
    #[must_use]
    pub fn handler_count(&self, name: &str) -> usize {
        self.lock().get(name).map_or(0, Vec::len)
    }

    /// Calls every handler registered for the event's name.
    ///
    /// Handlers run outside the lock, so they may subscribe or drop
    /// subscriptions themselves. Returns how many handlers were called.
    pub fn dispatch(&self, event: &InboundEvent) -> usize {
        let handlers: Vec<InboundHandler> = self
            .lock()
            .get(&event.name)
            .map(|entries| entries.iter().map(|(_, h)| Arc::clone(h)).collect())
            .unwrap_or_default();

        for handler in &handlers {
            handler(event);
        }
        handlers.len()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<String, usize> = self
            .lock()
            .iter()
            .map(|(name, entries)| (name.clone(), entries.len()))
            .collect();
        f.debug_struct("HandlerRegistry")
            .field("handlers", &counts)
            .finish()
    }
}

struct Registered {
    registry: Arc<HandlerRegistry>,
    name: String,
    id: HandlerId,
}

/// Guard for a registered handler.
///
/// Dropping it deregisters the handler. An inert subscription (from a
/// disconnected bridge) owns nothing and drops silently.
#[must_use = "dropping a Subscription deregisters its handler immediately"]
pub struct Subscription {
    registered: Option<Registered>,
}

impl Subscription {
    /// A subscription that holds no handler.
    pub fn inert() -> Self {
        Self { registered: None }
    }

    /// Returns true if this subscription still holds a registered handler.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registered.is_some()
    }

    /// Deregisters the handler now rather than at drop.
    pub fn cancel(&mut self) {
        if let Some(registered) = self.registered.take() {
            registered
                .registry
                .deregister(&registered.name, registered.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.registered {
            Some(registered) => f
                .debug_struct("Subscription")
                .field("name", &registered.name)
                .field("id", &registered.id)
                .finish(),
            None => f.write_str("Subscription(inert)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::AtomicUsize;

    fn counting_handler(counter: &Arc<AtomicUsize>) -> InboundHandler {
        let counter = Arc::clone(counter);
        Arc::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn dispatch_reaches_only_matching_name() {
        let registry = HandlerRegistry::new();
        let hits = Arc::new(AtomicUsize::new(0));
        registry.register("returnComms", counting_handler(&hits));

        assert_eq!(registry.dispatch(&InboundEvent::new("other", json!({}))), 0);
        assert_eq!(
            registry.dispatch(&InboundEvent::new("returnComms", json!({}))),
            1
        );
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn deregister_removes_handler() {
        let registry = HandlerRegistry::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let id = registry.register("a", counting_handler(&hits));

        assert!(registry.deregister("a", id));
        assert!(!registry.deregister("a", id));
        assert_eq!(registry.handler_count("a"), 0);
        registry.dispatch(&InboundEvent::new("a", json!(null)));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn dropping_subscription_deregisters() {
        let registry = Arc::new(HandlerRegistry::new());
        let hits = Arc::new(AtomicUsize::new(0));
        let sub = registry.subscribe("a", counting_handler(&hits));
        assert!(sub.is_active());
        assert_eq!(registry.handler_count("a"), 1);

        drop(sub);
        assert_eq!(registry.handler_count("a"), 0);
    }

    #[test]
    fn cancel_is_idempotent() {
        let registry = Arc::new(HandlerRegistry::new());
        let hits = Arc::new(AtomicUsize::new(0));
        let mut sub = registry.subscribe("a", counting_handler(&hits));

        sub.cancel();
        sub.cancel();
        assert!(!sub.is_active());
        assert_eq!(registry.handler_count("a"), 0);
    }

    #[test]
    fn inert_subscription_is_inactive() {
        let sub = Subscription::inert();
        assert!(!sub.is_active());
        assert_eq!(format!("{sub:?}"), "Subscription(inert)");
    }

    #[test]
    fn handler_may_drop_subscriptions_during_dispatch() {
        let registry = Arc::new(HandlerRegistry::new());
        let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

        let slot_in_handler = Arc::clone(&slot);
        let sub = registry.subscribe(
            "a",
            Arc::new(move |_| {
                slot_in_handler.lock().expect("lock").take();
            }),
        );
        *slot.lock().expect("lock") = Some(sub);

        assert_eq!(registry.dispatch(&InboundEvent::new("a", json!(null))), 1);
        assert_eq!(registry.handler_count("a"), 0);
    }
}

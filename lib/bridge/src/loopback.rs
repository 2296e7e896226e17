//! In-process host for standalone runs and tests.
//!
//! `LoopbackHost` records every input sent to it and lets the caller push
//! messages back in, optionally replying automatically to a named input the
//! way a host server would answer a comms check.

use crate::error::{BridgeError, Result};
use crate::message::{InboundEvent, OutboundEvent};
use crate::transport::{HostTransport, InboundDispatch};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Default)]
struct LoopbackInner {
    rejecting: bool,
    sent: Mutex<Vec<OutboundEvent>>,
    handlers: Mutex<HashMap<String, Vec<InboundDispatch>>>,
    replies: Mutex<HashMap<String, InboundEvent>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A host transport that lives entirely in this process.
///
/// Clones share state, so a test can hand one clone to a [`Bridge`] and keep
/// another for assertions.
///
/// [`Bridge`]: crate::bridge::Bridge
#[derive(Clone, Default)]
pub struct LoopbackHost {
    inner: Arc<LoopbackInner>,
}

impl LoopbackHost {
    /// Creates a host that accepts everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a host whose every call fails with [`BridgeError::HostCall`].
    #[must_use]
    pub fn rejecting() -> Self {
        Self {
            inner: Arc::new(LoopbackInner {
                rejecting: true,
                ..LoopbackInner::default()
            }),
        }
    }

    /// Replies with `reply` whenever an input named `request` arrives.
    #[must_use]
    pub fn reply_to(self, request: impl Into<String>, reply: InboundEvent) -> Self {
        lock(&self.inner.replies).insert(request.into(), reply);
        self
    }

    /// Inputs received so far, oldest first.
    #[must_use]
    pub fn sent(&self) -> Vec<OutboundEvent> {
        lock(&self.inner.sent).clone()
    }

    /// Number of transport-level handlers installed for `name`.
    #[must_use]
    pub fn installed_handlers(&self, name: &str) -> usize {
        lock(&self.inner.handlers).get(name).map_or(0, Vec::len)
    }

    /// Pushes a message to every handler installed for its name.
    ///
    /// Returns how many handlers received it.
    pub fn deliver(&self, event: InboundEvent) -> usize {
        let handlers: Vec<InboundDispatch> = lock(&self.inner.handlers)
            .get(&event.name)
            .cloned()
            .unwrap_or_default();

        for handler in &handlers {
            handler(event.clone());
        }
        handlers.len()
    }

    fn reject(&self, operation: &str) -> Result<()> {
        if self.inner.rejecting {
            return Err(BridgeError::HostCall {
                operation: operation.to_string(),
                details: "loopback host rejects all calls".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl HostTransport for LoopbackHost {
    fn name(&self) -> &str {
        "loopback"
    }

    fn send_input(&self, event: &OutboundEvent) -> Result<()> {
        self.reject("setInputValue")?;
        lock(&self.inner.sent).push(event.clone());

        let reply = lock(&self.inner.replies).get(&event.name).cloned();
        if let Some(reply) = reply {
            self.deliver(reply);
        }
        Ok(())
    }

    fn install_handler(&self, name: &str, dispatch: InboundDispatch) -> Result<()> {
        self.reject("addCustomMessageHandler")?;
        lock(&self.inner.handlers)
            .entry(name.to_string())
            .or_default()
            .push(dispatch);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn records_sent_inputs_in_order() {
        let host = LoopbackHost::new();
        host.send_input(&OutboundEvent::new("a", json!(1)))
            .expect("send should succeed");
        host.send_input(&OutboundEvent::new("b", json!(2)))
            .expect("send should succeed");

        let names: Vec<String> = host.sent().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn deliver_without_handlers_reaches_nobody() {
        let host = LoopbackHost::new();
        assert_eq!(host.deliver(InboundEvent::new("x", json!(null))), 0);
    }

    #[test]
    fn reply_is_delivered_on_matching_input() {
        let received = Arc::new(AtomicUsize::new(0));
        let host = LoopbackHost::new().reply_to("ping", InboundEvent::new("pong", json!({})));

        let counter = Arc::clone(&received);
        host.install_handler(
            "pong",
            Arc::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        )
        .expect("install should succeed");

        host.send_input(&OutboundEvent::new("other", json!(null)))
            .expect("send should succeed");
        assert_eq!(received.load(Ordering::SeqCst), 0);

        host.send_input(&OutboundEvent::new("ping", json!(null)))
            .expect("send should succeed");
        assert_eq!(received.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn rejecting_host_fails_every_call() {
        let host = LoopbackHost::rejecting();
        assert!(host.send_input(&OutboundEvent::new("a", json!(null))).is_err());
        assert!(host.install_handler("a", Arc::new(|_| {})).is_err());
        assert!(host.sent().is_empty());
        assert_eq!(host.installed_handlers("a"), 0);
    }
}

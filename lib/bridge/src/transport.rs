//! Host transport abstraction.
//!
//! A transport is the thin layer that actually talks to the host: in the
//! browser it calls into `window.Shiny`, in tests it is a [`LoopbackHost`].
//!
//! [`LoopbackHost`]: crate::loopback::LoopbackHost

use crate::error::Result;
use crate::message::{InboundEvent, OutboundEvent};
use std::sync::Arc;

/// Callback a transport invokes for every inbound event of an installed name.
pub type InboundDispatch = Arc<dyn Fn(InboundEvent) + Send + Sync>;

/// A live connection to a host that accepts named inputs and emits named
/// messages.
pub trait HostTransport: Send + Sync {
    /// Short name for log output.
    fn name(&self) -> &str;

    /// Sends one named input to the host.
    fn send_input(&self, event: &OutboundEvent) -> Result<()>;

    /// Installs the host-side handler for messages named `name`.
    ///
    /// [`Connection`](crate::bridge::Connection) calls this at most once per
    /// name, so implementations need not guard against repeats.
    fn install_handler(&self, name: &str, dispatch: InboundDispatch) -> Result<()>;
}

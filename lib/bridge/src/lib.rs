//! Host bridge for the shiny-leptos template.
//!
//! This crate provides:
//!
//! - **Bridge handle**: `Bridge::Connected` wraps a host transport,
//!   `Bridge::Disconnected` turns every operation into a silent no-op
//! - **Resolution**: `BridgeCell` resolves the handle once per process
//! - **Scoped handlers**: `Subscription` guards deregister on drop
//! - **Comms check**: the `checkComms` / `returnComms` round trip
//! - **View state**: the notice and animation flags the home page owns
//!
//! Nothing here touches the browser. The wasm-side transport lives in the
//! web crate and plugs in through [`HostTransport`].

pub mod bridge;
pub mod comms;
pub mod error;
pub mod loopback;
pub mod message;
pub mod registry;
pub mod state;
pub mod transport;

pub use bridge::{Bridge, BridgeCell, BridgeState, Connection};
pub use comms::{comms_check_event, listen_for_ack, send_check};
pub use error::{BridgeError, Result};
pub use loopback::LoopbackHost;
pub use message::{
    CHECK_COMMS, COMMS_CHECK_TEXT, CommsPayload, InboundEvent, InputPriority, OutboundEvent,
    RETURN_COMMS,
};
pub use registry::{HandlerId, HandlerRegistry, InboundHandler, Subscription};
pub use state::{NoticeState, SpinState};
pub use transport::{HostTransport, InboundDispatch};

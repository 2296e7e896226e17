//! The comms-check round trip.
//!
//! The UI sends `checkComms` carrying `{ data: "Comms check." }` and shows a
//! notice when any `returnComms` message arrives. Sends and receipts are not
//! correlated: an unsolicited `returnComms` shows the notice too.

use crate::bridge::Bridge;
use crate::error::Result;
use crate::message::{
    CHECK_COMMS, COMMS_CHECK_TEXT, CommsPayload, InputPriority, OutboundEvent, RETURN_COMMS,
};
use crate::registry::Subscription;

/// Builds the outbound comms-check event.
///
/// Uses event priority so repeated checks with the same text all reach the
/// host.
pub fn comms_check_event() -> Result<OutboundEvent> {
    Ok(
        OutboundEvent::from_payload(CHECK_COMMS, &CommsPayload::new(COMMS_CHECK_TEXT))?
            .with_priority(InputPriority::Event),
    )
}

/// Sends one comms check. Does nothing on a disconnected bridge.
pub fn send_check(bridge: &Bridge) {
    match comms_check_event() {
        Ok(event) => bridge.send(&event),
        Err(e) => tracing::warn!(error = %e, "Failed to build comms check"),
    }
}

/// Calls `on_ack` for every `returnComms` message until the returned guard
/// is dropped.
///
/// The payload's `data` field is logged; nothing else about it is checked.
pub fn listen_for_ack<F>(bridge: &Bridge, on_ack: F) -> Subscription
where
    F: Fn() + Send + Sync + 'static,
{
    bridge.subscribe(RETURN_COMMS, move |event| {
        match event.data() {
            Some(data) => tracing::info!(data = %data, "Comms acknowledged by host"),
            None => tracing::info!("Comms acknowledged by host without data"),
        }
        on_ack();
    })
}

//! Named events exchanged with the host.

use crate::error::{BridgeError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Outbound event sent when the user asks for a comms check.
pub const CHECK_COMMS: &str = "checkComms";

/// Inbound event the host sends back to acknowledge a comms check.
pub const RETURN_COMMS: &str = "returnComms";

/// Payload text carried by the comms check.
pub const COMMS_CHECK_TEXT: &str = "Comms check.";

/// The `{ data: string }` payload used by both directions of the comms check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommsPayload {
    pub data: String,
}

impl CommsPayload {
    /// Creates a payload carrying the given text.
    #[must_use]
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

/// How the host treats an input value that did not change.
///
/// With `Deferred` the host drops a value equal to the previous one, so two
/// identical comms checks in a row would only reach it once. `Event` makes
/// every send count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPriority {
    #[default]
    Deferred,
    Event,
}

impl InputPriority {
    /// Returns the name the host expects for this priority.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Deferred => "deferred",
            Self::Event => "event",
        }
    }
}

/// A named event sent to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundEvent {
    pub name: String,
    pub payload: JsonValue,
    #[serde(default)]
    pub priority: InputPriority,
}

impl OutboundEvent {
    /// Creates an event with an already-encoded payload.
    #[must_use]
    pub fn new(name: impl Into<String>, payload: JsonValue) -> Self {
        Self {
            name: name.into(),
            payload,
            priority: InputPriority::default(),
        }
    }

    /// Creates an event by serializing `payload`.
    pub fn from_payload<T: Serialize>(name: impl Into<String>, payload: &T) -> Result<Self> {
        let payload = serde_json::to_value(payload).map_err(|e| BridgeError::Encode {
            details: e.to_string(),
        })?;
        Ok(Self::new(name, payload))
    }

    /// Sets the input priority.
    #[must_use]
    pub fn with_priority(mut self, priority: InputPriority) -> Self {
        self.priority = priority;
        self
    }
}

/// A named event received from the host.
///
/// The payload is kept as raw JSON; nothing about its shape is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundEvent {
    pub name: String,
    #[serde(default)]
    pub payload: JsonValue,
}

impl InboundEvent {
    /// Creates an inbound event.
    #[must_use]
    pub fn new(name: impl Into<String>, payload: JsonValue) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }

    /// Returns the payload's `data` field, if it has one.
    #[must_use]
    pub fn data(&self) -> Option<&JsonValue> {
        self.payload.get("data")
    }
}

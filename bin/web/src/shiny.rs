//! `window.Shiny` transport.
//!
//! Shiny injects a global object into pages it serves. When the bundle runs
//! under the dev server (or any page without Shiny) the lookup fails and the
//! app runs with a disconnected bridge.

use js_sys::{Function, JSON, Object, Reflect};
use serde_json::Value as JsonValue;
use shiny_leptos_bridge::{
    BridgeError, HostTransport, InboundDispatch, InboundEvent, OutboundEvent, Result,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

const SHINY_GLOBAL: &str = "Shiny";
const SET_INPUT_VALUE: &str = "setInputValue";
const ADD_MESSAGE_HANDLER: &str = "addCustomMessageHandler";

/// Transport over the page's `window.Shiny` object.
///
/// Holds no JS references itself; each call looks the global up again so
/// the transport stays `Send + Sync` for Leptos context.
#[derive(Debug, Clone, Copy)]
pub struct ShinyTransport;

/// Looks up `window.Shiny` and checks it exposes the two functions the
/// bridge calls.
///
/// # Errors
///
/// Returns [`BridgeError::Unavailable`] when there is no window, no
/// `Shiny` global, or either function is missing.
pub fn resolve_shiny() -> Result<Box<dyn HostTransport>> {
    let shiny = shiny_global()?;
    shiny_function(&shiny, SET_INPUT_VALUE)?;
    shiny_function(&shiny, ADD_MESSAGE_HANDLER)?;
    Ok(Box::new(ShinyTransport))
}

fn shiny_global() -> Result<JsValue> {
    let window = web_sys::window().ok_or_else(|| BridgeError::unavailable("no window"))?;
    let shiny = Reflect::get(&window, &JsValue::from_str(SHINY_GLOBAL))
        .map_err(|e| BridgeError::unavailable(describe_js_error(&e)))?;
    if shiny.is_undefined() || shiny.is_null() {
        return Err(BridgeError::unavailable("window.Shiny is not defined").into());
    }
    Ok(shiny)
}

fn shiny_function(shiny: &JsValue, name: &str) -> Result<Function> {
    let function = Reflect::get(shiny, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or_else(|| BridgeError::unavailable(format!("Shiny.{name} is not a function")))?;
    Ok(function)
}

fn describe_js_error(error: &JsValue) -> String {
    if let Some(error) = error.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    error
        .as_string()
        .unwrap_or_else(|| "unknown JavaScript error".to_string())
}

fn host_call_error(operation: &str, error: &JsValue) -> BridgeError {
    BridgeError::HostCall {
        operation: operation.to_string(),
        details: describe_js_error(error),
    }
}

fn to_js(value: &JsonValue) -> Result<JsValue> {
    let json = serde_json::to_string(value).map_err(|e| BridgeError::Encode {
        details: e.to_string(),
    })?;
    let value = JSON::parse(&json).map_err(|e| host_call_error("JSON.parse", &e))?;
    Ok(value)
}

fn from_js(value: &JsValue) -> JsonValue {
    JSON::stringify(value)
        .ok()
        .and_then(|json| json.as_string())
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or(JsonValue::Null)
}

impl HostTransport for ShinyTransport {
    fn name(&self) -> &str {
        "shiny"
    }

    fn send_input(&self, event: &OutboundEvent) -> Result<()> {
        let shiny = shiny_global()?;
        let set_input_value = shiny_function(&shiny, SET_INPUT_VALUE)?;

        let value = to_js(&event.payload)?;
        let options = Object::new();
        Reflect::set(
            &options,
            &JsValue::from_str("priority"),
            &JsValue::from_str(event.priority.as_str()),
        )
        .map_err(|e| host_call_error(SET_INPUT_VALUE, &e))?;

        set_input_value
            .call3(&shiny, &JsValue::from_str(&event.name), &value, &options)
            .map_err(|e| host_call_error(SET_INPUT_VALUE, &e))?;
        Ok(())
    }

    fn install_handler(&self, name: &str, dispatch: InboundDispatch) -> Result<()> {
        let shiny = shiny_global()?;
        let add_handler = shiny_function(&shiny, ADD_MESSAGE_HANDLER)?;

        let event_name = name.to_string();
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |message: JsValue| {
            dispatch(InboundEvent::new(event_name.clone(), from_js(&message)));
        });

        add_handler
            .call2(&shiny, &JsValue::from_str(name), callback.as_ref())
            .map_err(|e| host_call_error(ADD_MESSAGE_HANDLER, &e))?;

        // Shiny keeps the handler for the life of the page.
        callback.forget();
        Ok(())
    }
}

//! Event handlers and their composition.

use std::error::Error;
use std::fmt;
use std::rc::Rc;

use serde_json::Value;

/// Error a handler may raise; composition passes it through untouched.
pub type HandlerError = Box<dyn Error + Send + Sync>;

/// Outcome of invoking a handler.
pub type HandlerResult = Result<(), HandlerError>;

/// Event delivered to slot handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotEvent {
    name: String,
    detail: Value,
    handled: bool,
}

impl SlotEvent {
    /// New unhandled event with no detail payload.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: Value::Null,
            handled: false,
        }
    }

    /// Attach a detail payload.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<Value>) -> Self {
        self.detail = detail.into();
        self
    }

    /// Event name, e.g. `click`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Detail payload.
    #[must_use]
    pub const fn detail(&self) -> &Value {
        &self.detail
    }

    /// Stop later composed handlers from running.
    pub const fn mark_handled(&mut self) {
        self.handled = true;
    }

    /// Whether a handler already claimed the event.
    #[must_use]
    pub const fn is_handled(&self) -> bool {
        self.handled
    }
}

/// Shared, cheaply clonable event callback.
#[derive(Clone)]
pub struct EventHandler(Rc<dyn Fn(&mut SlotEvent) -> HandlerResult>);

impl EventHandler {
    /// Wrap a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&mut SlotEvent) -> HandlerResult + 'static,
    {
        Self(Rc::new(handler))
    }

    /// Invoke the handler.
    ///
    /// # Errors
    ///
    /// Returns whatever error the wrapped closure raises.
    pub fn call(&self, event: &mut SlotEvent) -> HandlerResult {
        (self.0)(event)
    }

    /// Chain `child` then `host` into one handler.
    ///
    /// The host handler is skipped when the child marks the event handled or
    /// returns an error; the error is returned unchanged.
    #[must_use]
    pub fn compose(child: Self, host: Self) -> Self {
        Self::new(move |event| {
            child.call(event)?;
            if event.is_handled() {
                return Ok(());
            }
            host.call(event)
        })
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("EventHandler")
    }
}

/// Whether `name` follows the `on*` event prop convention (`onClick`, `onKeyDown`).
#[must_use]
pub fn is_event_prop(name: &str) -> bool {
    name.strip_prefix("on")
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_uppercase)
}

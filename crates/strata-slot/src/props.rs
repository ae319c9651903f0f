//! Prop bags and the child/host merge rules.
//!
//! # Design
//! - Well-known keys (`className`, `style`, handlers) get dedicated fields with
//!   explicit merge rules; everything else lives in an open attribute map.
//! - Host intent wins: host classes land last, host styles and attributes
//!   override, host `on*` handlers run after the child's.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde_json::{Map, Value};
use strata_variants::merge_classes;
use tracing::warn;

use crate::handler::{EventHandler, is_event_prop};

/// Inline style declarations keyed by property name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style(BTreeMap<String, String>);

impl Style {
    /// Empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a declaration.
    #[must_use]
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(property.into(), value.into());
        self
    }

    /// Declared value for `property`.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    /// Whether no declarations are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shallow union; entries from `host` replace entries from `self`.
    #[must_use]
    pub fn merged(mut self, host: Self) -> Self {
        self.0.extend(host.0);
        self
    }

    /// Render as an inline `style` attribute value.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.0
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Props destined for a rendered element.
#[derive(Debug, Clone, Default)]
pub struct PropBag {
    class_name: Option<String>,
    style: Option<Style>,
    handlers: BTreeMap<String, EventHandler>,
    attrs: Map<String, Value>,
}

impl PropBag {
    /// Empty prop bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class string.
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set the inline style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Register a handler under its event prop name (`onClick`).
    ///
    /// Callbacks under other names are accepted but merge like plain props:
    /// the host's value replaces the child's.
    #[must_use]
    pub fn on(mut self, prop: impl Into<String>, handler: EventHandler) -> Self {
        let prop = prop.into();
        if !is_event_prop(&prop) {
            warn!(prop = %prop, "handler registered under a non-event prop name");
        }
        self.handlers.insert(prop, handler);
        self
    }

    /// Set a pass-through attribute.
    ///
    /// Event prop names (`onClick`) are reserved for [`PropBag::on`]; such
    /// attributes are dropped with a warning.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        if is_event_prop(&name) {
            warn!(prop = %name, "event prop passed as attribute; use a handler instead");
            return self;
        }
        self.attrs.insert(name, value.into());
        self
    }

    /// Current class string.
    #[must_use]
    pub fn get_class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Current inline style.
    #[must_use]
    pub const fn get_style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    /// Handler registered under `prop`.
    #[must_use]
    pub fn handler(&self, prop: &str) -> Option<&EventHandler> {
        self.handlers.get(prop)
    }

    /// Handler prop names in sorted order.
    pub fn handler_names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Pass-through attribute named `name`.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    /// All pass-through attributes.
    #[must_use]
    pub const fn attrs(&self) -> &Map<String, Value> {
        &self.attrs
    }
}

/// Merge host props onto child props.
///
/// - class names: child first, host last, through the class merger
/// - style: shallow union, host entries win
/// - `on*` handlers present on both sides: child runs first, then host
/// - other props, callbacks included: host overrides, non-overlapping props
///   from both sides kept
#[must_use]
pub fn merge_props(child: PropBag, host: PropBag) -> PropBag {
    let class_name = Some(merge_classes([
        child.class_name.as_deref(),
        host.class_name.as_deref(),
    ]))
    .filter(|merged| !merged.is_empty());

    let style = match (child.style, host.style) {
        (Some(child_style), Some(host_style)) => Some(child_style.merged(host_style)),
        (child_style, host_style) => host_style.or(child_style),
    };

    let mut handlers = child.handlers;
    let mut attrs = child.attrs;
    for name in host.attrs.keys() {
        handlers.remove(name);
    }
    for (prop, host_handler) in host.handlers {
        attrs.remove(&prop);
        match handlers.entry(prop) {
            Entry::Occupied(mut slot) if is_event_prop(slot.key()) => {
                let child_handler = slot.get().clone();
                slot.insert(EventHandler::compose(child_handler, host_handler));
            }
            Entry::Occupied(mut slot) => {
                slot.insert(host_handler);
            }
            Entry::Vacant(slot) => {
                slot.insert(host_handler);
            }
        }
    }
    attrs.extend(host.attrs);

    PropBag {
        class_name,
        style,
        handlers,
        attrs,
    }
}

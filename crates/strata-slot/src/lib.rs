#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! Slot composition for styled primitives.
//!
//! A host component that opts into slot rendering does not emit an element of
//! its own. It hands its props, handlers and ref to [`compose_slot`], which
//! merges them onto the single child element and returns that child.
//!
//! Layout: `props.rs` (prop bags and merge rules), `handler.rs` (event handler
//! composition), `node_ref.rs` (ref fan-out), `element.rs` (element trait and
//! plain tree element), `compose.rs` (the composer), `error.rs` (error types).

pub mod compose;
pub mod element;
pub mod error;
pub mod handler;
pub mod node_ref;
pub mod props;

pub use compose::{SlotRequest, compose_slot};
pub use element::{Child, Element, SlotElement};
pub use error::{SlotError, SlotResult};
pub use handler::{EventHandler, HandlerError, HandlerResult, SlotEvent, is_event_prop};
pub use node_ref::{NodeRef, compose_refs};
pub use props::{PropBag, Style, merge_props};

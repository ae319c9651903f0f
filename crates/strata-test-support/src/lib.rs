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

//! Shared test helpers used across integration suites.
//! Layout: fixtures.rs (catalogue schemas), sink.rs (recording diagnostic sink).

pub mod fixtures;
pub mod sink;

pub use fixtures::{badge_schema, button_schema, card_schema};
pub use sink::RecordingSink;

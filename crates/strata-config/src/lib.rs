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

//! Engine configuration loaded from the environment or a JSON file.
//!
//! Layout: `model.rs` (typed config), `loader.rs` (environment and JSON
//! loading), `validate.rs` (value parsing), `defaults.rs` (variable names),
//! `error.rs` (error types).

pub mod defaults;
pub mod error;
mod loader;
pub mod model;
mod validate;

pub use defaults::{ENV_DIAGNOSTICS, ENV_LOG_FORMAT, ENV_LOG_LEVEL};
pub use error::{ConfigError, ConfigResult};
pub use model::EngineConfig;

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

//! Variant resolution engine for styled UI primitives.
//!
//! A component declares a [`VariantSchema`] once (base classes, ordered axes,
//! compound rules, defaults) and resolves a partial [`Selection`] against it on
//! every render. The result is a single class string produced by [`merge`].
//!
//! Layout: `classes.rs` (token lists + merger), `schema.rs` (schema model and
//! builder), `selection.rs` (caller and resolved selections), `compound.rs`
//! (compound rule matching), `resolver.rs` (resolution), `diagnostics.rs`
//! (warning sink), `lint.rs` (schema linter), `error.rs` (error types).

pub mod classes;
pub mod compound;
pub mod diagnostics;
pub mod error;
pub mod lint;
pub mod resolver;
pub mod schema;
pub mod selection;

pub use classes::{ClassList, merge, merge_classes};
pub use compound::apply_compounds;
pub use diagnostics::{Diagnostic, DiagnosticSink, DiagnosticsMode, SilentSink, TracingSink};
pub use error::{ResolveError, ResolveResult, SchemaError, SchemaResult};
pub use lint::{LintFinding, LintReport, lint};
pub use resolver::{Resolver, resolve};
pub use schema::{Axis, AxisValue, CompoundRule, MatchValue, SchemaBuilder, VariantSchema};
pub use selection::{ResolvedSelection, Selection};

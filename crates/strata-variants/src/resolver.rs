//! Variant resolution: selection + schema → class string.
//!
//! # Design
//! - Output order is base, axis classes in axis declaration order, compound
//!   classes in rule order, then caller classes.
//! - The resolver never mutates a schema, so one schema can serve any number
//!   of concurrent resolves.
//! - Unknown values are recovered locally and surfaced only as diagnostics.

use std::fmt;
use std::sync::Arc;

use crate::classes::ClassList;
use crate::compound::apply_compounds;
use crate::diagnostics::{Diagnostic, DiagnosticSink, DiagnosticsMode, TracingSink};
use crate::error::{ResolveError, ResolveResult};
use crate::schema::VariantSchema;
use crate::selection::{ResolvedSelection, Selection};

/// Resolve `selection` against `schema` with the build-inferred diagnostics mode.
///
/// # Errors
///
/// Returns [`ResolveError::MissingDefault`] when an axis has neither a selected
/// value nor a default.
pub fn resolve(schema: &VariantSchema, selection: &Selection) -> ResolveResult<String> {
    Resolver::default().resolve(schema, selection)
}

/// Resolution entry point carrying the diagnostics policy and sink.
#[derive(Clone)]
pub struct Resolver {
    mode: DiagnosticsMode,
    sink: Arc<dyn DiagnosticSink>,
}

impl Resolver {
    /// Resolver reporting through [`TracingSink`].
    #[must_use]
    pub fn new(mode: DiagnosticsMode) -> Self {
        Self::with_sink(mode, Arc::new(TracingSink))
    }

    /// Resolver reporting through a caller-supplied sink.
    #[must_use]
    pub fn with_sink(mode: DiagnosticsMode, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { mode, sink }
    }

    /// Active diagnostics mode.
    #[must_use]
    pub const fn mode(&self) -> DiagnosticsMode {
        self.mode
    }

    /// Resolve to the final merged class string.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingDefault`] when an axis has neither a
    /// selected value nor a default.
    pub fn resolve(&self, schema: &VariantSchema, selection: &Selection) -> ResolveResult<String> {
        Ok(self.resolve_classes(schema, selection)?.merged())
    }

    /// Resolve to the ordered, unmerged class list.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingDefault`] when an axis has neither a
    /// selected value nor a default.
    pub fn resolve_classes(
        &self,
        schema: &VariantSchema,
        selection: &Selection,
    ) -> ResolveResult<ClassList> {
        let resolved = self.resolve_selection(schema, selection)?;

        let mut classes = schema.base().clone();
        for (axis, value) in schema.axes().iter().zip(resolved.iter().map(|(_, value)| value)) {
            match axis.classes_for(value) {
                Some(axis_classes) => classes.extend_from(axis_classes),
                None => self.report(&Diagnostic::UnknownAxisValue {
                    schema: schema.name().to_string(),
                    axis: axis.name().to_string(),
                    value: value.clone(),
                }),
            }
        }
        classes.extend_from(&apply_compounds(schema, &resolved));
        if let Some(extra) = selection.class() {
            classes.push_str(extra);
        }
        Ok(classes)
    }

    /// Fill every axis from the selection or its default.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingDefault`] when an axis has neither a
    /// selected value nor a default.
    pub fn resolve_selection(
        &self,
        schema: &VariantSchema,
        selection: &Selection,
    ) -> ResolveResult<ResolvedSelection> {
        for axis in selection.axes() {
            if schema.axis(axis).is_none() {
                self.report(&Diagnostic::UnknownAxis {
                    schema: schema.name().to_string(),
                    axis: axis.to_string(),
                });
            }
        }

        let mut resolved = ResolvedSelection::new();
        for axis in schema.axes() {
            let value = selection
                .get(axis.name())
                .or_else(|| axis.default_value())
                .ok_or_else(|| ResolveError::MissingDefault {
                    schema: schema.name().to_string(),
                    axis: axis.name().to_string(),
                })?;
            resolved.push(axis.name(), value.clone());
        }
        Ok(resolved)
    }

    fn report(&self, diagnostic: &Diagnostic) {
        if self.mode.reports() {
            self.sink.report(diagnostic);
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(DiagnosticsMode::infer())
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Resolver")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

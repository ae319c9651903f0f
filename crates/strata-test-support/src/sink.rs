//! Diagnostic sink that keeps everything it receives.

use std::sync::{Mutex, PoisonError};

use strata_variants::{Diagnostic, DiagnosticSink};

/// Thread-safe sink recording diagnostics in arrival order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    seen: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    /// Empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    #[must_use]
    pub fn recorded(&self) -> Vec<Diagnostic> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain and return everything recorded so far.
    #[must_use]
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.seen.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_then_drains() {
        let sink = RecordingSink::new();
        sink.report(&Diagnostic::UnknownAxis {
            schema: "card".to_string(),
            axis: "glow".to_string(),
        });
        assert_eq!(sink.recorded().len(), 1);
        assert_eq!(sink.take().len(), 1);
        assert!(sink.recorded().is_empty());
    }
}

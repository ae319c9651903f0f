//! Error types for slot composition.

use thiserror::Error;

/// Contract violations raised by [`crate::compose_slot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlotError {
    /// Slot received zero or several renderable children.
    #[error("slot expects exactly one child element, found {found}")]
    Arity {
        /// Renderable children supplied.
        found: usize,
    },
    /// The single renderable child is a text node, not an element.
    #[error("slot child must be an element, not text")]
    NotAnElement,
}

/// Convenience alias for slot composition results.
pub type SlotResult<T> = Result<T, SlotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_error_reports_count() {
        assert_eq!(
            SlotError::Arity { found: 2 }.to_string(),
            "slot expects exactly one child element, found 2"
        );
        assert_eq!(
            SlotError::NotAnElement.to_string(),
            "slot child must be an element, not text"
        );
    }
}

//! Errors raised when a component is composed outside its required parent.
//!
//! # Design
//! - Sub-components (modal header, drawer close button, ...) receive their
//!   parent's context explicitly and fail at construction when it is absent.
//! - The error names both sides of the contract so the integration mistake is
//!   obvious from the console.

use thiserror::Error;

/// Composition errors for parent-bound sub-components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    /// A sub-component was rendered without its parent in the tree.
    #[error("{child} must be used within {parent}")]
    MissingParent {
        /// Name of the sub-component that was rendered.
        child: &'static str,
        /// Name of the parent component that must wrap it.
        parent: &'static str,
    },
}

/// Resolve a parent context, failing when it is not present.
///
/// # Errors
/// Returns [`ContextError::MissingParent`] when `context` is `None`.
pub fn require_parent<T>(
    context: Option<T>,
    child: &'static str,
    parent: &'static str,
) -> Result<T, ContextError> {
    context.ok_or(ContextError::MissingParent { child, parent })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parent_names_both_components() {
        let err = require_parent::<u8>(None, "ModalHeader", "Modal").unwrap_err();
        assert_eq!(
            err,
            ContextError::MissingParent {
                child: "ModalHeader",
                parent: "Modal",
            }
        );
        assert_eq!(err.to_string(), "ModalHeader must be used within Modal");
    }

    #[test]
    fn present_parent_is_returned() {
        assert_eq!(require_parent(Some(7), "DrawerClose", "Drawer"), Ok(7));
    }
}

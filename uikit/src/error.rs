//! Error types for the component kit.

use thiserror::Error;

/// Misuse of the collapsible compound component.
///
/// Parts can only be created from a live [`Collapsible`](crate::components::Collapsible);
/// once that container is dropped (unmounted) the parts it handed out are
/// orphaned and every stateful operation on them fails with this error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollapsibleError {
    #[error("Collapsible{part} cannot be rendered outside the Collapsible component")]
    OutsideCollapsible {
        /// Which compound part was used ("Trigger", "Content").
        part: &'static str,
    },
}

/// Top-level error for widget rendering and event handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error(transparent)]
    Collapsible(#[from] CollapsibleError),
}

//! Widget trait for interactive components.
//!
//! Widgets produce a uidom [`Element`] for rendering and react to input
//! events, reporting what happened through [`WidgetResult`].

use uidom::{Element, Event};

use crate::error::UiError;

/// Result of a widget handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetResult {
    /// Event was not handled by this widget.
    #[default]
    Ignored,
    /// Event was handled; the resulting state change is owned elsewhere.
    Handled,
    /// A disclosure region was opened.
    Expanded,
    /// A disclosure region was closed.
    Collapsed,
}

impl WidgetResult {
    /// Check if the event was handled (not Ignored).
    pub fn is_handled(&self) -> bool {
        !matches!(self, WidgetResult::Ignored)
    }
}

pub trait Widget: Send + Sync {
    /// Key of the element this widget renders.
    fn id(&self) -> &str;

    fn is_focusable(&self) -> bool {
        false
    }

    /// Build the element for the current state.
    ///
    /// `Ok(None)` means the widget renders nothing at all.
    fn element(&self) -> Result<Option<Element>, UiError>;

    fn handle_event(&self, event: &Event) -> Result<WidgetResult, UiError> {
        let _ = event;
        Ok(WidgetResult::Ignored)
    }
}

/// Offer `event` to each widget in order until one handles it.
pub fn dispatch(widgets: &[&dyn Widget], event: &Event) -> Result<WidgetResult, UiError> {
    for widget in widgets {
        let result = widget.handle_event(event)?;
        if result.is_handled() {
            log::trace!("[dispatch] {:?} handled by {}", event, widget.id());
            return Ok(result);
        }
    }
    Ok(WidgetResult::Ignored)
}

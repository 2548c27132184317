//! Input handling for the collapsible trigger.

use uidom::{Event, Key, MouseButton};

use super::{CollapsibleTrigger, OpenAction};
use crate::error::CollapsibleError;
use crate::widget::WidgetResult;

impl CollapsibleTrigger {
    /// Press the trigger: toggle the open flag through the effective setter.
    ///
    /// Disabled triggers ignore activation. In controlled mode the owner's
    /// setter receives [`OpenAction::Toggle`] and the result is `Handled`,
    /// since the visible state only changes once the owner syncs it back.
    pub fn activate(&self) -> Result<WidgetResult, CollapsibleError> {
        let shared = self.shared()?;
        if shared.disabled {
            log::trace!("[collapsible {}] activation refused: disabled", shared.native_id);
            return Ok(WidgetResult::Ignored);
        }

        let open = shared.dispatch(OpenAction::Toggle);
        Ok(match (shared.is_controlled(), open) {
            (true, _) => WidgetResult::Handled,
            (false, true) => WidgetResult::Expanded,
            (false, false) => WidgetResult::Collapsed,
        })
    }

    /// Primary click or Enter/Space aimed at this trigger activates it.
    pub(super) fn on_event(&self, event: &Event) -> Result<WidgetResult, CollapsibleError> {
        if event.target() != Some(self.id.as_str()) {
            return Ok(WidgetResult::Ignored);
        }

        match event {
            Event::Click {
                button: MouseButton::Left,
                ..
            } => self.activate(),
            Event::Key { key, modifiers, .. }
                if modifiers.none() && matches!(key, Key::Enter | Key::Char(' ')) =>
            {
                self.activate()
            }
            _ => Ok(WidgetResult::Ignored),
        }
    }
}

pub mod components;
pub mod error;
pub mod native_id;
pub mod state;
pub mod theme;
pub mod widget;

pub use error::{CollapsibleError, UiError};
pub use native_id::NativeId;

pub mod prelude {
    pub use crate::components::{
        Collapsible, CollapsibleContent, CollapsibleHeader, CollapsibleProps, CollapsibleTrigger,
        OpenAction, SetOpen, VisibilityTransition,
    };
    pub use crate::error::{CollapsibleError, UiError};
    pub use crate::native_id::NativeId;
    pub use crate::state::State;
    pub use crate::theme::{ButtonSize, ButtonStyle, ButtonVariant, button_variants};
    pub use crate::widget::{Widget, WidgetResult, dispatch};

    pub use uidom::{Element, Event, Key, Style};
}

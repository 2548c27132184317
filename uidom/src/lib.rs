pub mod animation;
pub mod element;
pub mod event;
pub mod transitions;
pub mod types;

pub use animation::{Phase, PresenceState};
pub use element::{count_elements, find_element, Aria, Content, Element, Role};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use transitions::{Easing, EnterTransition, ExitTransition, Frame};
pub use types::*;

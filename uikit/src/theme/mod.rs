//! Theming: variant resolvers over uidom's color variables.

mod button;

pub use button::{ButtonSize, ButtonStyle, ButtonVariant, button_variants};
pub use uidom::{DefaultTheme, Theme};

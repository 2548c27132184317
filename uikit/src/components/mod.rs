//! UI components with self-managed state.
//!
//! Each component lives in its own module with:
//! - `state.rs` - the component state type
//! - `render.rs` - element construction
//! - `events.rs` - input handling
//! - `mod.rs` - public types and exports

pub mod collapsible;

pub use collapsible::{
    Collapsible, CollapsibleContent, CollapsibleHeader, CollapsibleProps, CollapsibleTrigger,
    OpenAction, SetOpen, VisibilityTransition,
};

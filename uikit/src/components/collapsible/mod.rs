//! Collapsible - a disclosure widget built from four parts.
//!
//! [`Collapsible`] owns the open flag and hands out its parts:
//! [`CollapsibleHeader`] (a layout row), [`CollapsibleTrigger`] (toggles the
//! flag) and [`CollapsibleContent`] (present only while open). Parts hold a
//! weak handle to the container, so they cannot exist without one and stop
//! working once it is dropped.
//!
//! ```
//! use uikit::prelude::*;
//!
//! let faq = Collapsible::new(CollapsibleProps::new());
//! let trigger = faq.trigger().child(Element::text("Show answer"));
//! let content = faq.content().child(Element::text("42"));
//!
//! assert!(content.render()?.is_none());
//! trigger.activate()?;
//! assert!(content.render()?.is_some());
//! # Ok::<(), uikit::UiError>(())
//! ```

mod events;
mod render;
mod state;

use std::collections::BTreeMap;
use std::sync::{Arc, Weak};
use std::time::Duration;

use uidom::{Element, Style};

pub use state::{CollapsibleProps, OpenAction, SetOpen, VisibilityTransition};

use self::state::Shared;
use crate::error::CollapsibleError;
use crate::native_id::NativeId;
use crate::theme::{ButtonSize, ButtonVariant};

/// Exit duration of the content region.
pub const CONTENT_EXIT_DURATION: Duration = Duration::from_millis(150);

/// Spacing between stacked children, in points.
const GAP: u16 = 12;
const HEADER_PADDING_X: u16 = 16;

/// Container that owns the open/closed state.
pub struct Collapsible {
    shared: Arc<Shared>,
    style: Style,
    data: BTreeMap<String, String>,
}

impl Collapsible {
    pub fn new(props: CollapsibleProps) -> Self {
        let shared = Arc::new(Shared::new(&props));
        log::debug!(
            "[collapsible {}] mounted (controlled: {}, open: {}, disabled: {})",
            shared.native_id,
            shared.is_controlled(),
            shared.is_open(),
            shared.disabled
        );
        Self {
            shared,
            style: props.style,
            data: props.data,
        }
    }

    pub fn native_id(&self) -> NativeId {
        self.shared.native_id
    }

    /// Effective visibility: the controlled value if one was supplied,
    /// otherwise the internal flag.
    pub fn is_open(&self) -> bool {
        self.shared.is_open()
    }

    pub fn is_disabled(&self) -> bool {
        self.shared.disabled
    }

    pub fn is_controlled(&self) -> bool {
        self.shared.is_controlled()
    }

    /// Push the owner's current value in controlled mode.
    pub fn sync_open(&self, open: bool) {
        self.shared.sync(open);
    }

    /// Invoke `listener` every time the effective visibility flips.
    ///
    /// Listeners run in flip order, one flip at a time. A listener must not
    /// activate or sync this same instance.
    pub fn on_visibility_change(
        &self,
        listener: impl Fn(VisibilityTransition) + Send + Sync + 'static,
    ) {
        self.shared.add_listener(Arc::new(listener));
    }

    /// True once the open flag has been written since the last `mark_rendered`.
    pub fn needs_render(&self) -> bool {
        self.shared.needs_render()
    }

    pub fn mark_rendered(&self) {
        self.shared.mark_rendered();
    }

    pub fn header(&self) -> CollapsibleHeader {
        CollapsibleHeader::new(self.shared.native_id.key("collapsible-header"))
    }

    pub fn trigger(&self) -> CollapsibleTrigger {
        CollapsibleTrigger {
            id: self.shared.native_id.key("collapsible-trigger"),
            shared: Arc::downgrade(&self.shared),
            variant: ButtonVariant::Outline,
            size: ButtonSize::Sm,
            style: Style::default(),
            data: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn content(&self) -> CollapsibleContent {
        CollapsibleContent {
            id: self.shared.native_id.key("collapsible-content"),
            shared: Arc::downgrade(&self.shared),
            style: Style::default(),
            data: BTreeMap::new(),
            children: Vec::new(),
        }
    }
}

impl Drop for Collapsible {
    fn drop(&mut self) {
        log::trace!("[collapsible {}] unmounted", self.shared.native_id);
    }
}

/// Horizontal heading row. Stateless.
#[derive(Debug, Clone)]
pub struct CollapsibleHeader {
    id: String,
    style: Style,
    data: BTreeMap<String, String>,
    children: Vec<Element>,
}

/// Pressable that toggles the container's open flag.
#[derive(Debug, Clone)]
pub struct CollapsibleTrigger {
    id: String,
    shared: Weak<Shared>,
    variant: ButtonVariant,
    size: ButtonSize,
    style: Style,
    data: BTreeMap<String, String>,
    children: Vec<Element>,
}

/// Region that exists only while the container is open.
#[derive(Debug, Clone)]
pub struct CollapsibleContent {
    id: String,
    shared: Weak<Shared>,
    style: Style,
    data: BTreeMap<String, String>,
    children: Vec<Element>,
}

impl CollapsibleHeader {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            style: Style::default(),
            data: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }
}

impl CollapsibleTrigger {
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Extra style merged over the variant's.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_expanded(&self) -> Result<bool, CollapsibleError> {
        Ok(self.shared()?.is_open())
    }

    fn shared(&self) -> Result<Arc<Shared>, CollapsibleError> {
        self.shared
            .upgrade()
            .ok_or(CollapsibleError::OutsideCollapsible { part: "Trigger" })
    }
}

impl CollapsibleContent {
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_visible(&self) -> Result<bool, CollapsibleError> {
        Ok(self.shared()?.is_open())
    }

    fn shared(&self) -> Result<Arc<Shared>, CollapsibleError> {
        self.shared
            .upgrade()
            .ok_or(CollapsibleError::OutsideCollapsible { part: "Content" })
    }
}

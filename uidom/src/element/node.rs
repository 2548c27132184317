use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::transitions::{EnterTransition, ExitTransition};
use crate::types::{Align, Direction, Edges, Justify, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Semantic role consumed by the platform accessibility bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Presentation,
    Heading,
    Button,
    Summary,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Presentation => "presentation",
            Role::Heading => "heading",
            Role::Button => "button",
            Role::Summary => "summary",
        }
    }
}

/// Accessibility state attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aria {
    /// Mirrors whether the region this element controls is expanded.
    pub expanded: Option<bool>,
    /// Native ID of the element that labels this one.
    pub labelled_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    /// Stable key within the tree.
    pub id: String,
    /// Platform-visible identifier used for accessibility linkage.
    pub native_id: Option<String>,

    // Semantics
    pub role: Option<Role>,
    pub aria: Aria,

    // Content
    pub content: Content,

    // Flex container
    pub direction: Direction,
    pub gap: u16,
    pub padding: Edges,
    pub justify: Justify,
    pub align: Align,
    pub height: Option<u16>,

    // Visual
    pub style: Style,
    /// Played when the element first appears in the tree.
    pub enter: Option<EnterTransition>,
    /// Played after the element has been removed from the tree.
    pub exit: Option<ExitTransition>,

    // Interaction
    pub clickable: bool,
    pub focusable: bool,
    /// Disabled elements don't receive input.
    pub disabled: bool,

    // Pass-through attributes
    pub data: BTreeMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            native_id: None,
            role: None,
            aria: Aria::default(),
            content: Content::None,
            direction: Direction::Column,
            gap: 0,
            padding: Edges::default(),
            justify: Justify::Start,
            align: Align::Stretch,
            height: None,
            style: Style::default(),
            enter: None,
            exit: None,
            clickable: false,
            focusable: false,
            disabled: false,
            data: BTreeMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    /// A clickable, focusable container.
    pub fn pressable() -> Self {
        Self {
            id: generate_id("pressable"),
            direction: Direction::Row,
            clickable: true,
            focusable: true,
            ..Default::default()
        }
    }

    // Identity

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn native_id(mut self, native_id: impl Into<String>) -> Self {
        self.native_id = Some(native_id.into());
        self
    }

    // Semantics

    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn aria_expanded(mut self, expanded: bool) -> Self {
        self.aria.expanded = Some(expanded);
        self
    }

    pub fn aria_labelled_by(mut self, native_id: impl Into<String>) -> Self {
        self.aria.labelled_by = Some(native_id.into());
        self
    }

    // Content

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    /// Child elements, empty for text or empty nodes.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    // Layout

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }

    // Visual

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn enter(mut self, transition: EnterTransition) -> Self {
        self.enter = Some(transition);
        self
    }

    pub fn exit(mut self, transition: ExitTransition) -> Self {
        self.exit = Some(transition);
        self
    }

    // Interaction

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Merge pass-through attributes; existing keys are overwritten.
    pub fn extend_data(mut self, data: impl IntoIterator<Item = (String, String)>) -> Self {
        self.data.extend(data);
        self
    }

    /// Indented text rendering of the tree, one node per line.
    ///
    /// Prints identity, accessibility and `data` fields plus text content.
    /// Layout and style are left out. Anonymous nodes print their generated ID.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}<{}", self.id);
        if let Some(role) = self.role {
            let _ = write!(out, " role={}", role.as_str());
        }
        if let Some(native_id) = &self.native_id {
            let _ = write!(out, " nativeID={native_id}");
        }
        if let Some(expanded) = self.aria.expanded {
            let _ = write!(out, " aria-expanded={expanded}");
        }
        if let Some(labelled_by) = &self.aria.labelled_by {
            let _ = write!(out, " labelledby={labelled_by}");
        }
        if self.disabled {
            out.push_str(" disabled");
        }
        for (key, value) in &self.data {
            let _ = write!(out, " {key}={value:?}");
        }
        out.push('>');

        match &self.content {
            Content::None => out.push('\n'),
            Content::Text(text) => {
                let _ = writeln!(out, " {text:?}");
            }
            Content::Children(children) => {
                out.push('\n');
                for child in children {
                    child.dump_into(out, depth + 1);
                }
            }
        }
    }
}

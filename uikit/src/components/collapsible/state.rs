//! Shared open/closed state for the collapsible parts.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use uidom::{EnterTransition, ExitTransition, Style};

use crate::native_id::NativeId;
use crate::state::State;

/// Functional update applied to the open flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenAction {
    Set(bool),
    /// `open -> !open`, evaluated against the latest value.
    Toggle,
}

impl OpenAction {
    pub fn apply(self, prev: bool) -> bool {
        match self {
            OpenAction::Set(value) => value,
            OpenAction::Toggle => !prev,
        }
    }
}

/// External setter for controlled mode.
pub type SetOpen = Arc<dyn Fn(OpenAction) + Send + Sync>;

/// Presence change of the content region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VisibilityTransition {
    Entering(EnterTransition),
    Exiting(ExitTransition),
}

impl VisibilityTransition {
    pub fn is_entering(&self) -> bool {
        matches!(self, VisibilityTransition::Entering(_))
    }
}

type Listener = Arc<dyn Fn(VisibilityTransition) + Send + Sync>;

/// Configuration for a [`Collapsible`](super::Collapsible).
///
/// Supplying `open` selects controlled mode; the widget then only ever
/// reports changes through `set_open` and follows whatever value the owner
/// pushes back with `sync_open`.
#[derive(Clone)]
pub struct CollapsibleProps {
    pub open: Option<bool>,
    pub set_open: Option<SetOpen>,
    pub default_open: bool,
    pub disabled: bool,
    pub style: Style,
    /// Pass-through attributes for the container element.
    pub data: BTreeMap<String, String>,
    pub content_enter: EnterTransition,
    pub content_exit: ExitTransition,
}

impl Default for CollapsibleProps {
    fn default() -> Self {
        Self {
            open: None,
            set_open: None,
            default_open: false,
            disabled: false,
            style: Style::default(),
            data: BTreeMap::new(),
            content_enter: EnterTransition::fade_in_down(),
            content_exit: ExitTransition::fade_out_up().duration(super::CONTENT_EXIT_DURATION),
        }
    }
}

impl std::fmt::Debug for CollapsibleProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollapsibleProps")
            .field("open", &self.open)
            .field("set_open", &self.set_open.as_ref().map(|_| ".."))
            .field("default_open", &self.default_open)
            .field("disabled", &self.disabled)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl CollapsibleProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    pub fn set_open(mut self, set_open: impl Fn(OpenAction) + Send + Sync + 'static) -> Self {
        self.set_open = Some(Arc::new(set_open));
        self
    }

    pub fn default_open(mut self, default_open: bool) -> Self {
        self.default_open = default_open;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn content_transitions(mut self, enter: EnterTransition, exit: ExitTransition) -> Self {
        self.content_enter = enter;
        self.content_exit = exit;
        self
    }
}

fn noop_setter() -> SetOpen {
    Arc::new(|_: OpenAction| {})
}

/// Who owns the open flag. Decided once at construction.
pub(crate) enum OpenMode {
    Controlled {
        open: State<bool>,
        set_open: SetOpen,
    },
    Uncontrolled {
        open: State<bool>,
        /// Told about every internal change when only a setter was supplied.
        observer: Option<SetOpen>,
    },
}

impl OpenMode {
    fn resolve(props: &CollapsibleProps) -> Self {
        match (props.open, props.set_open.clone()) {
            (Some(open), set_open) => OpenMode::Controlled {
                open: State::new(open),
                set_open: set_open.unwrap_or_else(noop_setter),
            },
            (None, observer) => OpenMode::Uncontrolled {
                open: State::new(props.default_open),
                observer,
            },
        }
    }

    fn open(&self) -> &State<bool> {
        match self {
            OpenMode::Controlled { open, .. } | OpenMode::Uncontrolled { open, .. } => open,
        }
    }
}

/// State owned by the container and borrowed weakly by its parts.
pub(crate) struct Shared {
    pub native_id: NativeId,
    pub disabled: bool,
    pub content_enter: EnterTransition,
    pub content_exit: ExitTransition,
    mode: OpenMode,
    listeners: RwLock<Vec<Listener>>,
    /// Held from each flag write through its notification, so listeners see
    /// transitions in the order the flag changed.
    transitions: Mutex<()>,
}

impl Shared {
    pub fn new(props: &CollapsibleProps) -> Self {
        Self {
            native_id: NativeId::new(),
            disabled: props.disabled,
            content_enter: props.content_enter,
            content_exit: props.content_exit,
            mode: OpenMode::resolve(props),
            listeners: RwLock::new(Vec::new()),
            transitions: Mutex::new(()),
        }
    }

    pub fn is_open(&self) -> bool {
        self.mode.open().get()
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self.mode, OpenMode::Controlled { .. })
    }

    pub fn needs_render(&self) -> bool {
        self.mode.open().is_dirty()
    }

    pub fn mark_rendered(&self) {
        self.mode.open().clear_dirty();
    }

    pub fn add_listener(&self, listener: Listener) {
        self.listeners
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(listener);
    }

    /// Route `action` through the effective setter.
    ///
    /// Returns the open flag as it stands afterwards. In controlled mode that
    /// is unchanged until the owner calls `sync`.
    pub fn dispatch(&self, action: OpenAction) -> bool {
        match &self.mode {
            OpenMode::Controlled { open, set_open } => {
                log::debug!("[collapsible {}] {action:?} -> owner", self.native_id);
                set_open(action);
                open.get()
            }
            OpenMode::Uncontrolled { open, observer } => {
                let ordered = self.lock_transitions();
                let (prev, next) = open.update(|v| {
                    let prev = *v;
                    *v = action.apply(prev);
                    (prev, *v)
                });
                log::debug!("[collapsible {}] {action:?}: {prev} -> {next}", self.native_id);
                if prev != next {
                    self.notify(next);
                }
                drop(ordered);
                if let Some(observer) = observer {
                    observer(action);
                }
                next
            }
        }
    }

    /// Push a new controlled value. Ignored in uncontrolled mode.
    pub fn sync(&self, value: bool) {
        match &self.mode {
            OpenMode::Controlled { open, .. } => {
                let _ordered = self.lock_transitions();
                // Unchanged values leave the dirty flag alone.
                if open.get() == value {
                    return;
                }
                open.set(value);
                log::debug!("[collapsible {}] synced {} -> {value}", self.native_id, !value);
                self.notify(value);
            }
            OpenMode::Uncontrolled { .. } => {
                log::warn!(
                    "[collapsible {}] sync_open({value}) ignored: instance is uncontrolled",
                    self.native_id
                );
            }
        }
    }

    fn lock_transitions(&self) -> MutexGuard<'_, ()> {
        self.transitions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn notify(&self, open: bool) {
        let transition = if open {
            VisibilityTransition::Entering(self.content_enter)
        } else {
            VisibilityTransition::Exiting(self.content_exit)
        };
        // Snapshot so listeners may register further listeners.
        let listeners: Vec<Listener> = self
            .listeners
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        for listener in listeners {
            listener(transition);
        }
    }
}

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::element::Element;
use crate::transitions::{progress, EnterTransition, ExitTransition, Frame};

/// Which half of a presence transition an element is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Exiting,
}

#[derive(Debug, Clone)]
enum ActiveTransition {
    Entering {
        transition: EnterTransition,
        from: Frame,
        start: Instant,
    },
    Exiting {
        transition: ExitTransition,
        from: Frame,
        start: Instant,
        /// Last rendered version of the removed element.
        ghost: Box<Element>,
    },
}

impl ActiveTransition {
    fn duration(&self) -> Duration {
        match self {
            Self::Entering { transition, .. } => transition.duration,
            Self::Exiting { transition, .. } => transition.duration,
        }
    }

    fn start(&self) -> Instant {
        match self {
            Self::Entering { start, .. } | Self::Exiting { start, .. } => *start,
        }
    }

    fn phase(&self) -> Phase {
        match self {
            Self::Entering { .. } => Phase::Entering,
            Self::Exiting { .. } => Phase::Exiting,
        }
    }

    fn frame(&self, now: Instant) -> Frame {
        let t = progress(now.saturating_duration_since(self.start()), self.duration());
        match self {
            Self::Entering {
                transition, from, ..
            } => Frame::lerp(*from, Frame::SETTLED, transition.easing.apply(t)),
            Self::Exiting {
                transition, from, ..
            } => Frame::lerp(*from, transition.to, transition.easing.apply(t)),
        }
    }

    fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start()) >= self.duration()
    }
}

/// Tracks mount and unmount transitions across frames.
///
/// Feed every rendered tree to [`update`](Self::update). Elements carrying
/// an `enter` transition animate in when they first appear; elements carrying
/// an `exit` transition are retained as ghosts after they disappear so the
/// renderer can keep painting them until the exit completes.
#[derive(Debug, Default)]
pub struct PresenceState {
    /// IDs present in the previous tree.
    present: HashSet<String>,
    /// Previous-frame copies of elements that can play an exit.
    snapshots: HashMap<String, Element>,
    active: HashMap<String, ActiveTransition>,
    /// Reduced motion flag - when true, transitions complete instantly.
    reduced_motion: bool,
}

impl PresenceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reduced motion (accessibility).
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
        if enabled {
            self.active.clear();
        }
    }

    /// Returns true if any transition was still running as of the last
    /// update. Finished transitions are only pruned by the next update.
    pub fn has_active(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn update(&mut self, root: Option<&Element>) {
        self.update_at(root, Instant::now());
    }

    /// Diff `root` against the previous tree and start or prune transitions.
    /// `None` means nothing is rendered this frame.
    pub fn update_at(&mut self, root: Option<&Element>, now: Instant) {
        self.active.retain(|_, transition| !transition.is_finished(now));

        let mut current = HashMap::new();
        if let Some(root) = root {
            collect(root, &mut current);
        }

        for (id, element) in &current {
            if self.present.contains(*id) {
                continue;
            }
            let Some(enter) = element.enter else {
                self.active.remove(*id);
                continue;
            };
            if self.reduced_motion {
                continue;
            }
            // Re-entering mid-exit picks up from wherever the exit got to.
            let from = match self.active.get(*id) {
                Some(running @ ActiveTransition::Exiting { .. }) => running.frame(now),
                _ => enter.from,
            };
            log::debug!("[presence] {id} entering over {:?}", enter.duration);
            self.active.insert(
                (*id).to_string(),
                ActiveTransition::Entering {
                    transition: enter,
                    from,
                    start: now,
                },
            );
        }

        let removed: Vec<String> = self
            .present
            .iter()
            .filter(|id| !current.contains_key(id.as_str()))
            .cloned()
            .collect();
        for id in removed {
            let snapshot = self.snapshots.remove(&id);
            let exit = snapshot.as_ref().and_then(|el| el.exit);
            match (snapshot, exit) {
                (Some(ghost), Some(exit)) if !self.reduced_motion => {
                    let from = match self.active.get(&id) {
                        Some(running @ ActiveTransition::Entering { .. }) => running.frame(now),
                        _ => Frame::SETTLED,
                    };
                    log::debug!("[presence] {id} exiting over {:?}", exit.duration);
                    self.active.insert(
                        id,
                        ActiveTransition::Exiting {
                            transition: exit,
                            from,
                            start: now,
                            ghost: Box::new(ghost),
                        },
                    );
                }
                _ => {
                    self.active.remove(&id);
                }
            }
        }

        self.snapshots = current
            .iter()
            .filter(|(_, el)| el.exit.is_some())
            .map(|(id, el)| ((*id).to_string(), (*el).clone()))
            .collect();
        self.present = current.into_keys().map(str::to_string).collect();
    }

    pub fn phase(&self, id: &str) -> Option<Phase> {
        self.active.get(id).map(ActiveTransition::phase)
    }

    pub fn frame(&self, id: &str) -> Option<Frame> {
        self.frame_at(id, Instant::now())
    }

    /// Interpolated frame for a running transition.
    /// Returns None when the element is not animating.
    pub fn frame_at(&self, id: &str, now: Instant) -> Option<Frame> {
        self.active.get(id).map(|t| t.frame(now))
    }

    /// Removed elements whose exit was still playing as of the last update.
    pub fn exiting(&self) -> impl Iterator<Item = &Element> {
        self.active.values().filter_map(|t| match t {
            ActiveTransition::Exiting { ghost, .. } => Some(ghost.as_ref()),
            ActiveTransition::Entering { .. } => None,
        })
    }
}

fn collect<'a>(element: &'a Element, out: &mut HashMap<&'a str, &'a Element>) {
    out.insert(element.id.as_str(), element);
    for child in element.child_elements() {
        collect(child, out);
    }
}

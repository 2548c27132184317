use std::time::Duration;

/// Default duration for presence transitions.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// Vertical travel of the fade presets, in points.
pub const FADE_OFFSET: f32 = 25.0;

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Visual state of an element at one instant of a presence transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub opacity: f32,
    /// Vertical displacement; negative is up.
    pub offset_y: f32,
}

impl Frame {
    pub const SETTLED: Frame = Frame {
        opacity: 1.0,
        offset_y: 0.0,
    };

    pub(crate) fn lerp(from: Frame, to: Frame, t: f32) -> Frame {
        Frame {
            opacity: from.opacity + (to.opacity - from.opacity) * t,
            offset_y: from.offset_y + (to.offset_y - from.offset_y) * t,
        }
    }
}

/// Played when an element mounts: animates from `from` to [`Frame::SETTLED`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnterTransition {
    pub duration: Duration,
    pub easing: Easing,
    pub from: Frame,
}

impl EnterTransition {
    /// Fade in while sliding down into place.
    pub fn fade_in_down() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            easing: Easing::EaseOut,
            from: Frame {
                opacity: 0.0,
                offset_y: -FADE_OFFSET,
            },
        }
    }

    /// Plain fade in.
    pub fn fade_in() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            easing: Easing::EaseOut,
            from: Frame {
                opacity: 0.0,
                offset_y: 0.0,
            },
        }
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Frame at `progress` (0.0 to 1.0) through the transition.
    pub fn sample(&self, progress: f32) -> Frame {
        Frame::lerp(self.from, Frame::SETTLED, self.easing.apply(progress))
    }
}

/// Played when an element unmounts: animates from [`Frame::SETTLED`] to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitTransition {
    pub duration: Duration,
    pub easing: Easing,
    pub to: Frame,
}

impl ExitTransition {
    /// Fade out while sliding up.
    pub fn fade_out_up() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            easing: Easing::EaseIn,
            to: Frame {
                opacity: 0.0,
                offset_y: -FADE_OFFSET,
            },
        }
    }

    /// Plain fade out.
    pub fn fade_out() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            easing: Easing::EaseIn,
            to: Frame {
                opacity: 0.0,
                offset_y: 0.0,
            },
        }
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn sample(&self, progress: f32) -> Frame {
        Frame::lerp(Frame::SETTLED, self.to, self.easing.apply(progress))
    }
}

/// Fraction of `duration` covered by `elapsed`, clamped to 1.0.
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        1.0
    } else {
        (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
    }
}

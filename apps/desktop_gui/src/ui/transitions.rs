//! Declarative enter/exit transitions and the keyed presence slot that plays
//! them. Everything here is a pure function of the frame clock.

/// Visual properties a transition interpolates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub offset_y: f32,
}

impl Pose {
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        offset_y: 0.0,
    };

    pub const fn faded(offset_y: f32) -> Self {
        Self {
            opacity: 0.0,
            offset_y,
        }
    }

    fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            offset_y: self.offset_y + (to.offset_y - self.offset_y) * t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub initial: Pose,
    pub animate: Pose,
    pub exit: Pose,
    pub duration_secs: f32,
}

impl Transition {
    /// Fact card: slides up into place whenever the trigger changes.
    pub const CARD: Self = Self {
        initial: Pose::faded(20.0),
        animate: Pose::VISIBLE,
        exit: Pose::faded(-20.0),
        duration_secs: 0.5,
    };

    /// Spinner, error, and fact text: plain cross-fade.
    pub const FADE: Self = Self {
        initial: Pose::faded(0.0),
        animate: Pose::VISIBLE,
        exit: Pose::faded(0.0),
        duration_secs: 0.3,
    };

    fn progress(&self, elapsed: f64) -> f32 {
        if self.duration_secs <= 0.0 {
            return 1.0;
        }
        ease_out_cubic((elapsed.max(0.0) as f32 / self.duration_secs).min(1.0))
    }

    pub fn enter_pose(&self, elapsed: f64) -> Pose {
        self.enter_from(self.initial, elapsed)
    }

    pub fn exit_pose(&self, elapsed: f64) -> Pose {
        self.exit_from(self.animate, elapsed)
    }

    /// Enter that starts wherever an interrupted transition left off.
    pub fn enter_from(&self, from: Pose, elapsed: f64) -> Pose {
        from.lerp(self.animate, self.progress(elapsed))
    }

    pub fn exit_from(&self, from: Pose, elapsed: f64) -> Pose {
        from.lerp(self.exit, self.progress(elapsed))
    }

    fn is_done(&self, elapsed: f64) -> bool {
        elapsed >= f64::from(self.duration_secs)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceMode {
    /// The outgoing child finishes its exit before the incoming one enters.
    Wait,
    /// The incoming child replaces the outgoing one at once and plays its
    /// enter transition.
    Replace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Entering,
    Present,
    Exiting,
}

#[derive(Debug, Clone)]
struct Slot<K> {
    key: K,
    stage: Stage,
    since: f64,
    /// Pose the current stage started from.
    from: Pose,
}

impl<K> Slot<K> {
    fn entering(key: K, since: f64, transition: &Transition) -> Self {
        Self {
            key,
            stage: Stage::Entering,
            since,
            from: transition.initial,
        }
    }

    fn pose(&self, transition: &Transition, now: f64) -> Pose {
        let elapsed = now - self.since;
        match self.stage {
            Stage::Entering => transition.enter_from(self.from, elapsed),
            Stage::Present => transition.animate,
            Stage::Exiting => transition.exit_from(self.from, elapsed),
        }
    }

    fn restart(&mut self, stage: Stage, transition: &Transition, now: f64) {
        self.from = self.pose(transition, now);
        self.stage = stage;
        self.since = now;
    }
}

/// Tracks which keyed child is on screen and where it is in its transition.
#[derive(Debug, Clone)]
pub struct Presence<K> {
    transition: Transition,
    mode: PresenceMode,
    shown: Option<Slot<K>>,
    queued: Option<K>,
}

impl<K: Clone + PartialEq> Presence<K> {
    pub fn new(transition: Transition, mode: PresenceMode) -> Self {
        Self {
            transition,
            mode,
            shown: None,
            queued: None,
        }
    }

    /// Advances the slot toward `target` and returns the child to draw this
    /// frame together with its pose.
    pub fn frame(&mut self, target: &K, now: f64) -> (K, Pose) {
        self.retarget(target, now);
        self.advance(now);

        let transition = self.transition;
        let slot = self
            .shown
            .get_or_insert_with(|| Slot::entering(target.clone(), now, &transition));
        (slot.key.clone(), slot.pose(&transition, now))
    }

    /// True while a transition is still running and the caller should keep
    /// repainting.
    pub fn is_animating(&self) -> bool {
        self.queued.is_some()
            || self
                .shown
                .as_ref()
                .map(|slot| slot.stage != Stage::Present)
                .unwrap_or(false)
    }

    fn retarget(&mut self, target: &K, now: f64) {
        let transition = self.transition;
        let Some(slot) = self.shown.as_mut() else {
            return;
        };

        if slot.key == *target {
            self.queued = None;
            if slot.stage == Stage::Exiting {
                slot.restart(Stage::Entering, &transition, now);
            }
            return;
        }

        match self.mode {
            PresenceMode::Replace => {
                *slot = Slot::entering(target.clone(), now, &transition);
                self.queued = None;
            }
            PresenceMode::Wait => {
                if slot.stage != Stage::Exiting {
                    slot.restart(Stage::Exiting, &transition, now);
                }
                self.queued = Some(target.clone());
            }
        }
    }

    fn advance(&mut self, now: f64) {
        let transition = self.transition;
        let Some(slot) = self.shown.as_mut() else {
            return;
        };
        let elapsed = now - slot.since;
        let stage = slot.stage;
        match stage {
            Stage::Entering if transition.is_done(elapsed) => slot.stage = Stage::Present,
            Stage::Exiting if transition.is_done(elapsed) => {
                let exit_finished_at = slot.since + f64::from(transition.duration_secs);
                match self.queued.take() {
                    Some(next) => {
                        *slot = Slot::entering(next, exit_finished_at, &transition);
                        if transition.is_done(now - exit_finished_at) {
                            slot.stage = Stage::Present;
                        }
                    }
                    None => self.shown = None,
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "tests/transitions_tests.rs"]
mod tests;

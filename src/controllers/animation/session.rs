use crate::controllers::animation::schedule::RateSchedule;
use crate::core::data::distribution::Distribution;
use crate::core::data::rate::Rate;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    #[default]
    Idle,
    Running,
    Paused,
}

/// Mutable state of one animation session: the phase machine, the repeat
/// flag, the frame cursor into the precomputed schedule, and the trail of
/// distributions emitted so far in the current run.
///
/// Constructed once per session and owned by the controller; command
/// handlers are the only mutators.
#[derive(Debug, Default)]
pub struct AnimationSession {
    phase: AnimationPhase,
    repeat: bool,
    frame_index: usize,
    schedule: Option<RateSchedule>,
    history: Vec<Distribution>,
}

impl AnimationSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh run. Allowed from any phase; discards the previous
    /// run's cursor and trail.
    pub fn start(&mut self, schedule: RateSchedule, repeat: bool) {
        self.phase = AnimationPhase::Running;
        self.repeat = repeat;
        self.frame_index = 0;
        self.schedule = Some(schedule);
        self.history.clear();
    }

    /// Freeze a running session. Returns false (and changes nothing) when
    /// the session is not running.
    pub fn pause(&mut self) -> bool {
        if self.phase != AnimationPhase::Running {
            return false;
        }

        self.phase = AnimationPhase::Paused;
        true
    }

    /// Continue a paused session. Cursor and trail are kept. Returns false
    /// when the session is not paused.
    pub fn resume(&mut self) -> bool {
        if self.phase != AnimationPhase::Paused {
            return false;
        }

        self.phase = AnimationPhase::Running;
        true
    }

    /// Abandon the run from any phase.
    pub fn stop(&mut self) {
        self.phase = AnimationPhase::Idle;
        self.repeat = false;
        self.frame_index = 0;
        self.schedule = None;
        self.history.clear();
    }

    /// Rate for the next frame to emit, while one remains.
    #[must_use]
    pub fn next_rate(&self) -> Option<Rate> {
        self.schedule
            .as_ref()
            .and_then(|schedule| schedule.rate_at(self.frame_index))
    }

    /// Record an emitted frame: append to the trail and advance the cursor.
    pub fn record_frame(&mut self, distribution: Distribution) {
        self.history.push(distribution);
        self.frame_index += 1;
    }

    /// True once every scheduled frame of the current cycle has been emitted.
    #[must_use]
    pub fn cycle_complete(&self) -> bool {
        match &self.schedule {
            Some(schedule) => self.frame_index >= schedule.len(),
            None => false,
        }
    }

    /// Restart the cycle in place for a repeating run.
    pub fn rollover(&mut self) {
        self.frame_index = 0;
        self.history.clear();
    }

    /// Natural (non-repeat) completion: back to idle with cursor reset.
    /// The trail is cleared; the static render that follows shows none.
    pub fn finish(&mut self) {
        self.phase = AnimationPhase::Idle;
        self.frame_index = 0;
        self.schedule = None;
        self.history.clear();
    }

    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    #[must_use]
    pub fn repeat_enabled(&self) -> bool {
        self.repeat
    }

    #[must_use]
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    #[must_use]
    pub fn history(&self) -> &[Distribution] {
        &self.history
    }
}

use crate::controllers::animation::command::AnimationCommand;
use crate::controllers::animation::schedule::{ANIMATION_STEPS, RateSchedule};
use crate::controllers::animation::session::{AnimationPhase, AnimationSession};
use crate::controllers::data::frame::PlotFrame;
use crate::controllers::data::parameter_snapshot::ParameterSnapshot;
use crate::controllers::errors::FrameError;
use crate::controllers::ports::display::DisplayPort;
use crate::core::data::rate::Rate;
use crate::core::poisson::normal_approximation::{DEFAULT_OVERLAY_SAMPLES, normal_overlay};
use crate::core::poisson::pmf::pmf;
use std::sync::Arc;
use std::time::Duration;

/// Probability axis limit during animation: fixed at 1.0 so growing bars are
/// read against a stable scale.
pub const ANIMATION_AXIS_LIMIT: f64 = 1.0;

/// Outcome of one cooperative tick.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub frames_emitted: u32,
    pub completed_run: bool,
    pub phase: AnimationPhase,
}

/// Drives the animation state machine and hands frames to the Display port.
///
/// The surrounding event loop owns the clock: it calls [`advance`] once per
/// scheduling tick with the elapsed wall time, and the controller emits the
/// frames that have come due. The pacing interval is re-read from the
/// parameter snapshot on every call, and the phase is re-checked before
/// every frame, so a Pause or Stop issued between ticks takes effect within
/// one pacing interval — never later.
///
/// [`advance`]: AnimationController::advance
pub struct AnimationController {
    display: Arc<dyn DisplayPort>,
    session: AnimationSession,
    accumulator: Duration,
    emit_immediately: bool,
}

impl AnimationController {
    #[must_use]
    pub fn new(display: Arc<dyn DisplayPort>) -> Self {
        Self {
            display,
            session: AnimationSession::new(),
            accumulator: Duration::ZERO,
            emit_immediately: false,
        }
    }

    /// Applies one discrete playback command.
    ///
    /// The interpolation target for Start/Repeat is the λ current at the
    /// moment the command is issued; later slider changes only affect the
    /// next run. An invalid domain rejects the command before any state
    /// changes, so no frame is ever computed from it.
    pub fn handle_command(
        &mut self,
        command: AnimationCommand,
        params: &ParameterSnapshot,
    ) -> Result<(), FrameError> {
        match command {
            AnimationCommand::Start => self.begin_run(params, false),
            AnimationCommand::Repeat => self.begin_run(params, true),
            AnimationCommand::Pause => {
                if self.session.pause() {
                    self.emit_immediately = false;
                    self.accumulator = Duration::ZERO;
                    self.reemit_current_frame();
                }
                Ok(())
            }
            AnimationCommand::Resume => {
                if self.session.resume() {
                    self.emit_immediately = true;
                }
                Ok(())
            }
            AnimationCommand::Stop => {
                self.session.stop();
                self.emit_immediately = false;
                self.accumulator = Duration::ZERO;
                self.render_static(params)
            }
        }
    }

    /// One cooperative scheduling tick: emit every frame that has come due
    /// in the elapsed time, re-checking the phase before each one.
    ///
    /// A single call emits at most one schedule's worth of frames; any
    /// excess elapsed time is dropped so a stalled event loop cannot queue
    /// an unbounded burst.
    pub fn advance(
        &mut self,
        elapsed: Duration,
        params: &ParameterSnapshot,
    ) -> Result<TickReport, FrameError> {
        let mut frames_emitted: u32 = 0;
        let mut completed_run = false;

        if self.session.phase() == AnimationPhase::Running {
            self.accumulator = self.accumulator.saturating_add(elapsed);
            let pacing = params.step_delay;
            let cap = ANIMATION_STEPS as u32;

            while self.session.phase() == AnimationPhase::Running && frames_emitted < cap {
                let due = self.emit_immediately || self.accumulator >= pacing;
                if !due {
                    break;
                }

                let Some(rate) = self.session.next_rate() else {
                    break;
                };

                if self.emit_immediately {
                    self.emit_immediately = false;
                } else {
                    self.accumulator = self.accumulator.saturating_sub(pacing);
                }

                self.emit_animation_frame(rate, params)?;
                frames_emitted += 1;

                if self.session.cycle_complete() {
                    if self.session.repeat_enabled() {
                        self.session.rollover();
                    } else {
                        self.session.finish();
                        self.accumulator = Duration::ZERO;
                        self.render_static(params)?;
                        completed_run = true;
                    }
                }
            }

            if frames_emitted >= cap {
                self.accumulator = Duration::ZERO;
            }
        }

        Ok(TickReport {
            frames_emitted,
            completed_run,
            phase: self.session.phase(),
        })
    }

    /// Emits the single static frame for the current parameters: bars only,
    /// no trail, auto-scaled axis. Used while idle, after Stop, and after a
    /// non-repeating run completes.
    pub fn render_static(&self, params: &ParameterSnapshot) -> Result<(), FrameError> {
        let domain = params.domain()?;
        let rate = params.rate()?;

        self.display
            .present(PlotFrame::from_distribution(pmf(domain, rate)));

        Ok(())
    }

    #[must_use]
    pub fn session(&self) -> &AnimationSession {
        &self.session
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.session.phase() == AnimationPhase::Running
    }

    fn begin_run(&mut self, params: &ParameterSnapshot, repeat: bool) -> Result<(), FrameError> {
        // Reject a bad domain before touching any state.
        params.domain()?;
        let schedule = RateSchedule::new(params.rate()?, ANIMATION_STEPS)?;

        self.session.start(schedule, repeat);
        self.accumulator = Duration::ZERO;
        self.emit_immediately = true;

        Ok(())
    }

    fn emit_animation_frame(
        &mut self,
        rate: Rate,
        params: &ParameterSnapshot,
    ) -> Result<(), FrameError> {
        // The domain is sampled fresh each frame; edits mid-run apply to
        // subsequent frames, never to already-emitted ones.
        let domain = params.domain()?;
        let distribution = pmf(domain, rate);
        let overlay = normal_overlay(&distribution, DEFAULT_OVERLAY_SAMPLES);

        self.display.present(PlotFrame {
            distribution: distribution.clone(),
            trail: self.session.history().to_vec(),
            overlay,
            highlight: None,
            y_max: ANIMATION_AXIS_LIMIT,
            label: format!("λ = {}", rate),
        });

        self.session.record_frame(distribution);

        Ok(())
    }

    /// Re-shows the frame at the cursor's last position without advancing or
    /// appending. Used by Pause so the screen keeps the frozen frame.
    fn reemit_current_frame(&self) {
        let Some((current, earlier)) = self.session.history().split_last() else {
            return;
        };

        let overlay = normal_overlay(current, DEFAULT_OVERLAY_SAMPLES);

        self.display.present(PlotFrame {
            distribution: current.clone(),
            trail: earlier.to_vec(),
            overlay,
            highlight: None,
            y_max: ANIMATION_AXIS_LIMIT,
            label: format!("λ = {}", current.rate()),
        });
    }
}

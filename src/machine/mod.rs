//! Phase state machine
//!
//! Sequences the work, rest and round-rest phases of a workout and decides
//! what to show and announce. The machine performs no I/O and owns no
//! timer: the countdown session calls [`PhaseMachine::tick`] once per
//! second while [`PhaseMachine::is_running`] holds, and forwards the
//! returned [`Step`] to the display and announcer.
//!
//! ```text
//!            start                 0, more exercises
//!  Idle ──► [Preparing] ──► Working ─────────────────► Resting
//!   ▲                        │  ▲ ▲                       │
//!   │                        │  │ └───────────────────────┘
//!   │      0, more rounds    │  │         0
//!   │   ┌────────────────────┘  │
//!   │   ▼           0           │
//!   │ RoundResting ─────────────┘
//!   │                        │ 0, last exercise of last round
//!   │        reset           ▼
//!   └──────────────────── Finished
//! ```
//!
//! Phases whose duration resolves to 0 at entry are skipped, and a work
//! phase of 0 seconds finishes the workout, so a single tick never runs
//! more than one chime and one phase announcement.

mod step;

pub use step::{phrases, status, Cue, Frame, Step};

use tracing::{debug, info};

use crate::{
    error::TimerError,
    state::{ConfigSource, Field, Phase, TimerState, WorkoutConfig},
    utils::format_time,
};

/// Optional behaviours of the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MachineOptions {
    /// Run a round-rest length "GET READY" phase before round 1
    pub prepare: bool,
    /// Speak a one-time cue at the midpoint of each work phase
    pub halfway_cue: bool,
}

/// The interval-workout phase machine
#[derive(Debug, Clone)]
pub struct PhaseMachine {
    state: TimerState,
    options: MachineOptions,
}

impl PhaseMachine {
    /// Create an idle machine
    pub fn new(options: MachineOptions) -> Self {
        Self {
            state: TimerState::new(),
            options,
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn options(&self) -> MachineOptions {
        self.options
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Recompute the idle preview. Outside `Idle` the live display takes
    /// precedence and the step is empty.
    pub fn preview(&self, source: &impl ConfigSource) -> Step {
        if self.state.running || self.state.phase != Phase::Idle {
            return Step::default();
        }
        Step::with_frame(self.current_frame(source))
    }

    /// The single start/pause/reset control
    pub fn toggle(&mut self, source: &impl ConfigSource) -> Result<Step, TimerError> {
        if self.state.running {
            Ok(self.pause())
        } else if self.state.phase == Phase::Finished {
            self.reset(source)
        } else {
            self.start(source)
        }
    }

    /// Begin a workout from `Idle`/`Finished`, or resume a paused one.
    /// Starting while already running does nothing.
    pub fn start(&mut self, source: &impl ConfigSource) -> Result<Step, TimerError> {
        match self.state.phase {
            Phase::Idle | Phase::Finished => self.begin(source.current()),
            _ if self.state.running => Ok(Step::default()),
            _ => Ok(self.resume(source.current())),
        }
    }

    /// Stop ticking, keeping the phase and counters. Idempotent.
    pub fn pause(&mut self) -> Step {
        if !self.state.running {
            return Step::default();
        }
        self.state.running = false;
        info!(
            "Paused in {} with {}s remaining",
            self.state.phase, self.state.remaining_seconds
        );
        Step::with_frame(self.frame())
    }

    /// Return to `Idle` after a finished workout
    pub fn reset(&mut self, source: &impl ConfigSource) -> Result<Step, TimerError> {
        if self.state.phase != Phase::Finished {
            return Err(TimerError::NotFinished {
                phase: self.state.phase,
            });
        }
        self.state = TimerState::new();
        info!("Timer reset");
        Ok(self.preview(source))
    }

    /// Advance the countdown by one second
    pub fn tick(&mut self, source: &impl ConfigSource) -> Step {
        let mut step = Step::default();
        if !self.state.running || !self.state.phase.is_active() {
            return step;
        }

        self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);
        let remaining = self.state.remaining_seconds;
        debug!("Tick: {} {}s", self.state.phase, remaining);

        if remaining == 0 {
            step.chime();
            self.complete_phase(source.current(), &mut step);
            return step;
        }

        if (1..=3).contains(&remaining) {
            step.speak(remaining.to_string());
        } else if self.halfway_due() {
            self.state.halfway_announced = true;
            step.speak(phrases::HALFWAY);
        }
        step.show(self.frame());
        step
    }

    /// What the display should show right now
    pub fn current_frame(&self, source: &impl ConfigSource) -> Frame {
        if self.state.phase == Phase::Idle {
            let total = source.current().total_seconds(self.options.prepare);
            return Frame::new(format_time(total), status::PRESS_START);
        }
        self.frame()
    }

    fn frame(&self) -> Frame {
        let state = &self.state;
        let label = if state.is_paused() {
            status::PAUSED.to_string()
        } else {
            match state.phase {
                Phase::Idle => status::PRESS_START.to_string(),
                Phase::Preparing => status::GET_READY.to_string(),
                Phase::Working => format!(
                    "WORK {}/{} (Round {}/{})",
                    state.current_exercise,
                    state.config.exercise_count,
                    state.current_round,
                    state.config.round_count
                ),
                Phase::Resting => status::REST.to_string(),
                Phase::RoundResting => status::ROUND_REST.to_string(),
                Phase::Finished => status::DONE.to_string(),
            }
        };
        Frame::new(format_time(u64::from(state.remaining_seconds)), label)
    }

    fn begin(&mut self, config: WorkoutConfig) -> Result<Step, TimerError> {
        ensure_startable(&config)?;

        self.state.current_exercise = 1;
        self.state.current_round = 1;
        self.state.running = true;
        info!(
            "Workout started: {} exercises x {} rounds, {}s work / {}s rest / {}s round rest",
            config.exercise_count,
            config.round_count,
            config.work_seconds,
            config.rest_seconds,
            config.round_rest_seconds
        );

        let mut step = Step::default();
        let first = if self.options.prepare {
            Phase::Preparing
        } else {
            Phase::Working
        };
        self.enter(first, config, &mut step);
        Ok(step)
    }

    fn resume(&mut self, config: WorkoutConfig) -> Step {
        self.state.config = config;
        self.state.running = true;
        info!(
            "Resumed {} with {}s remaining",
            self.state.phase, self.state.remaining_seconds
        );
        Step::with_frame(self.frame())
    }

    /// Decide the phase that follows the one just completed
    fn complete_phase(&mut self, config: WorkoutConfig, step: &mut Step) {
        match self.state.phase {
            Phase::Preparing => self.enter(Phase::Working, config, step),
            Phase::Working => {
                if self.state.current_exercise < config.exercise_count {
                    self.enter(Phase::Resting, config, step);
                } else if self.state.current_round < config.round_count {
                    self.enter(Phase::RoundResting, config, step);
                } else {
                    self.finish(step);
                }
            }
            Phase::Resting => {
                self.state.current_exercise += 1;
                self.enter(Phase::Working, config, step);
            }
            Phase::RoundResting => {
                self.state.current_round += 1;
                self.state.current_exercise = 1;
                self.enter(Phase::Working, config, step);
            }
            Phase::Idle | Phase::Finished => {}
        }
    }

    fn enter(&mut self, phase: Phase, config: WorkoutConfig, step: &mut Step) {
        let duration = match phase {
            Phase::Preparing | Phase::RoundResting => config.round_rest_seconds,
            Phase::Resting => config.rest_seconds,
            Phase::Working => config.work_seconds,
            Phase::Idle | Phase::Finished => 0,
        };

        self.state.phase = phase;
        self.state.config = config;
        self.state.halfway_announced = false;

        if duration == 0 {
            if phase == Phase::Working {
                debug!("Work duration is 0, finishing workout");
                self.finish(step);
            } else {
                debug!("Skipping zero-length {} phase", phase);
                self.complete_phase(config, step);
            }
            return;
        }

        self.state.remaining_seconds = duration;
        debug!(
            "Entered {} for {}s (exercise {}, round {})",
            phase, duration, self.state.current_exercise, self.state.current_round
        );

        let phrase = match phase {
            Phase::Preparing => phrases::GET_READY,
            Phase::Working => phrases::WORK,
            Phase::Resting => phrases::REST,
            _ => phrases::ROUND_COMPLETE,
        };
        step.speak(phrase);
        step.show(self.frame());
    }

    fn finish(&mut self, step: &mut Step) {
        self.state.phase = Phase::Finished;
        self.state.remaining_seconds = 0;
        self.state.running = false;
        self.state.halfway_announced = false;
        info!("Workout complete");

        step.speak(phrases::WORKOUT_COMPLETE);
        step.show(self.frame());
    }

    fn halfway_due(&self) -> bool {
        let half = self.state.config.work_seconds / 2;
        self.options.halfway_cue
            && self.state.phase == Phase::Working
            && !self.state.halfway_announced
            && half > 3
            && self.state.remaining_seconds == half
    }
}

impl Default for PhaseMachine {
    fn default() -> Self {
        Self::new(MachineOptions::default())
    }
}

fn ensure_startable(config: &WorkoutConfig) -> Result<(), TimerError> {
    let zero = if config.work_seconds == 0 {
        Some(Field::Work)
    } else if config.exercise_count == 0 {
        Some(Field::Exercises)
    } else if config.round_count == 0 {
        Some(Field::Rounds)
    } else {
        None
    };

    match zero {
        Some(field) => Err(TimerError::ZeroDuration { field }),
        None => Ok(()),
    }
}

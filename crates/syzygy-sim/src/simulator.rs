use syzygy_core::constants::PREALLOCATED_SAMPLES;
use syzygy_core::{
    EclipseError, FluxSample, Mode, SimConfig, SimulationParameters, Viewport,
};
use syzygy_optics::{evaluate, Evaluation};

use crate::clock::SimClock;
use crate::light_curve::LightCurve;
use crate::state_machine::{transition, Command, RunState};

/// Light-curve accumulator driven one tick at a time by an external clock
/// (typically a display-refresh callback).
///
/// Owns the configuration, the run state and the light curve. Nothing else
/// mutates the curve; `reset` is the only way to shorten it.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimConfig,
    state: RunState,
    clock: SimClock,
    curve: LightCurve,
    last_evaluation: Option<Evaluation>,
}

impl Simulator {
    /// Create an idle simulator. Constants, optics, viewport and timing must
    /// be valid up front; parameters are re-checked at each evaluation.
    pub fn new(config: SimConfig) -> Result<Self, EclipseError> {
        config.constants.validate()?;
        config.optics.validate()?;
        config.viewport.validate()?;
        config.timing.validate()?;

        Ok(Self {
            clock: SimClock::new(config.timing),
            curve: LightCurve::with_capacity(
                config.timing.sample_count().min(PREALLOCATED_SAMPLES),
            ),
            config,
            state: RunState::Idle,
            last_evaluation: None,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.config.parameters
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn light_curve(&self) -> &LightCurve {
        &self.curve
    }

    /// Geometry and occlusion of the most recent sample.
    pub fn last_evaluation(&self) -> Option<&Evaluation> {
        self.last_evaluation.as_ref()
    }

    /// Simulated time of the next sample.
    pub fn time(&self) -> f64 {
        self.clock.time()
    }

    pub fn progress(&self) -> f64 {
        self.clock.progress()
    }

    /// Apply a UI edit to the parameters. Switching mode resets the run,
    /// since solar and lunar samples do not belong on one curve.
    pub fn update_parameters(&mut self, edit: impl FnOnce(&mut SimulationParameters)) {
        let previous_mode = self.config.parameters.mode;
        edit(&mut self.config.parameters);
        if self.config.parameters.mode != previous_mode {
            log::info!(
                "Mode changed {} -> {}, resetting",
                previous_mode.name(),
                self.config.parameters.mode.name()
            );
            self.reset();
        }
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.update_parameters(|p| p.mode = mode);
    }

    /// Resize the canvas. Takes effect from the next sample.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<(), EclipseError> {
        viewport.validate()?;
        self.config.viewport = viewport;
        Ok(())
    }

    /// Idle → Running, or Finished → Running from time zero.
    pub fn start(&mut self) -> bool {
        let from = self.state;
        if !self.apply(Command::Start) {
            return false;
        }
        if from == RunState::Finished {
            self.rewind();
        }
        true
    }

    pub fn pause(&mut self) -> bool {
        self.apply(Command::Pause)
    }

    pub fn resume(&mut self) -> bool {
        self.apply(Command::Resume)
    }

    /// Back to Idle with an empty curve. Idempotent.
    pub fn reset(&mut self) {
        self.apply(Command::Reset);
        self.rewind();
        log::info!("Simulation reset");
    }

    /// Produce one sample if Running. Called once per frame by the driver;
    /// returns `Ok(None)` in every other state.
    ///
    /// On a configuration error nothing is appended and the run pauses.
    pub fn tick(&mut self) -> Result<Option<FluxSample>, EclipseError> {
        if self.state != RunState::Running {
            return Ok(None);
        }
        match self.sample() {
            Ok(sample) => {
                if self.clock.is_exhausted() {
                    self.apply(Command::Complete);
                }
                Ok(Some(sample))
            }
            Err(e) => {
                self.apply(Command::Pause);
                Err(e)
            }
        }
    }

    /// Produce exactly one sample outside continuous running. Ignored while
    /// Running. Stepping a finished run starts it over.
    pub fn step(&mut self) -> Result<Option<FluxSample>, EclipseError> {
        if transition(self.state, Command::Step).is_none() {
            log::debug!("Step ignored while {}", self.state.name());
            return Ok(None);
        }
        let sample = if self.state == RunState::Finished {
            // Evaluate before rewinding so a bad configuration keeps the old curve
            let evaluation = self.preview(0.0)?;
            self.rewind();
            self.record(evaluation)?
        } else {
            self.sample()?
        };
        self.apply(Command::Step);
        if self.clock.is_exhausted() {
            self.apply(Command::Complete);
        }
        Ok(Some(sample))
    }

    /// Run from the current position to the end of the event, headless.
    /// Returns the number of samples added.
    pub fn run_to_end(&mut self) -> Result<usize, EclipseError> {
        if self.state != RunState::Running && !self.start() {
            self.resume();
        }
        let before = self.curve.len();
        while self.state == RunState::Running {
            self.tick()?;
        }
        Ok(self.curve.len() - before)
    }

    /// Evaluate at the clock's position, append, and advance the clock.
    fn sample(&mut self) -> Result<FluxSample, EclipseError> {
        let evaluation = self.preview(self.clock.progress())?;
        self.record(evaluation)
    }

    /// Evaluate the current configuration at `progress` without touching
    /// the curve or the clock. Used for scrubbing and previews.
    pub fn preview(&self, progress: f64) -> Result<Evaluation, EclipseError> {
        let params = SimulationParameters {
            time_progress: progress,
            ..self.config.parameters
        };
        evaluate(
            &self.config.constants,
            &self.config.optics,
            &params,
            &self.config.viewport,
        )
        .inspect_err(|e| log::warn!("Evaluation failed at progress {progress:.4}: {e}"))
    }

    fn record(&mut self, evaluation: Evaluation) -> Result<FluxSample, EclipseError> {
        let sample = FluxSample::new(self.clock.time(), &evaluation.occlusion);
        self.curve.push(sample)?;
        self.config.parameters.time_progress = self.clock.progress();
        self.last_evaluation = Some(evaluation);
        self.clock.advance();

        log::trace!("t={:.3} flux={:.6}", sample.time, sample.flux);
        Ok(sample)
    }

    fn rewind(&mut self) {
        self.clock.rewind();
        self.curve.clear();
        self.last_evaluation = None;
        self.config.parameters.time_progress = 0.0;
    }

    fn apply(&mut self, command: Command) -> bool {
        match transition(self.state, command) {
            Some(next) => {
                if next != self.state {
                    log::debug!(
                        "{:?}: {} -> {}",
                        command,
                        self.state.name(),
                        next.name()
                    );
                }
                self.state = next;
                true
            }
            None => {
                log::debug!("{:?} ignored while {}", command, self.state.name());
                false
            }
        }
    }
}

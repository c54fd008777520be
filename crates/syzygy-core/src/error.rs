use thiserror::Error;

/// Invalid configuration detected while evaluating the eclipse model.
///
/// None of these are fatal: fix the offending value and evaluate again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EclipseError {
    #[error("{name} must be a positive distance, got {value}")]
    NonPositiveDistance { name: &'static str, value: f64 },

    #[error("{name} must be a non-negative radius, got {value}")]
    NegativeRadius { name: &'static str, value: f64 },

    #[error("Sun radius {sun} must exceed Earth radius {earth} for the umbra to converge")]
    SunNotLargerThanEarth { sun: f64, earth: f64 },

    #[error("Moon distance scale must be positive, got {0}")]
    InvalidMoonDistanceScale(f64),

    #[error("Impact parameter {value} outside [-{max}, {max}]")]
    ImpactParameterOutOfRange { value: f64, max: f64 },

    #[error("Sample grid size must be at least 1")]
    ZeroSampleGrid,

    #[error("Sample grid size {size} exceeds maximum {max}")]
    SampleGridTooLarge { size: u32, max: u32 },

    #[error("Time progress {0} outside [0, 1]")]
    TimeProgressOutOfRange(f64),

    #[error("Viewport {width}x{height} must have positive dimensions")]
    InvalidViewport { width: f64, height: f64 },

    #[error("{name} = {value} outside its valid range")]
    InvalidCoefficient { name: &'static str, value: f64 },

    #[error("Timing needs positive duration and step, got duration {duration}, step {time_step}")]
    InvalidTiming { duration: f64, time_step: f64 },

    #[error("Time step {time_step} is finer than the minimum {min}")]
    TimeStepTooFine { time_step: f64, min: f64 },

    #[error("Duration {duration} at step {time_step} needs more than {max} samples")]
    TooManySamples {
        duration: f64,
        time_step: f64,
        max: usize,
    },

    #[error("{0} is not a finite number")]
    NonFinite(&'static str),

    #[error("Sample time {next} does not follow previous sample time {previous}")]
    NonMonotonicTime { previous: f64, next: f64 },
}

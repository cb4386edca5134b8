use thiserror::Error;

/// Rejected tuning values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("rate range is inverted: min {min} > max {max}")]
    RateRange { min: f32, max: f32 },
    #[error("speed thresholds must increase: low {low} >= high {high}")]
    Thresholds { low: f32, high: f32 },
    #[error("{name} must not be negative (got {value})")]
    Negative { name: &'static str, value: f32 },
    #[error("{name} must be positive (got {value})")]
    NonPositive { name: &'static str, value: f64 },
    #[error("{name} must lie in {range} (got {value})")]
    OutOfRange {
        name: &'static str,
        range: &'static str,
        value: f32,
    },
}

/// Failure to start audio playback. Never fatal; playback is retried on the
/// next user gesture.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AudioError {
    #[error("playback rejected: {0}")]
    Rejected(String),
}

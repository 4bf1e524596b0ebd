use thiserror::Error;

/// Failures outside the simulation core: bad configuration and report output.
///
/// Turn processing and arrivals never fail; an empty queue is a normal
/// [`TurnResult::Empty`](crate::simulation::engine::TurnResult::Empty).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SimulationError {
    /// A configured range has its lower bound above its upper bound.
    #[error("invalid range for {name}: {low} > {high}")]
    InvalidRange {
        name: &'static str,
        low: u32,
        high: u32,
    },

    /// The driver needs a positive turn cadence.
    #[error("turn interval must be at least 1 second")]
    ZeroTurnInterval,

    #[error("failed to write turn log: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

use thiserror::Error;

/// Fatal generation failures. Constraint violations inside the per-slot
/// retry loop are not errors; they are the expected rejection-sampling path.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A requested team name did not resolve via the roster provider.
    #[error("team not found: {0:?}")]
    TeamNotFound(String),

    /// A side's eligible pool is too small for the splits it must fill.
    #[error("pool for {team:?} has {available} eligible players, need at least {required}")]
    InsufficientPool {
        team: String,
        available: usize,
        required: usize,
    },

    /// A criteria-flag mapping named a flag the engine does not recognize.
    #[error("unrecognized criteria flag: {0:?}")]
    UnknownCriterion(String),

    /// Roster JSON failed to parse.
    #[error("invalid roster data: {0}")]
    InvalidRoster(String),
}

use std::fmt;
use thiserror::Error;

/// Main error type for the CP engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Caller supplied a value the engine refuses; the call can be retried
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    /// An operation ran before its precondition was met
    #[error("Illegal state: {0}")]
    IllegalState(#[from] IllegalStateError),
    /// Engine configuration could not be read
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised when validating caller input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name was empty or only whitespace
    #[error("Name should not be empty or contain only spaces")]
    EmptyName,
    /// Ranking selector outside 1..=4
    #[error("Unknown ranking mode: {0}")]
    UnknownRankingMode(u8),
}

/// Which of the two attack slots an operation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackSlot {
    Fast,
    Special,
}

impl fmt::Display for AttackSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackSlot::Fast => write!(f, "fast attack"),
            AttackSlot::Special => write!(f, "special attack"),
        }
    }
}

/// Errors raised when an operation's precondition does not hold
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalStateError {
    /// The attack slot was used before an attack was chosen for it
    #[error("{species} has no {slot} chosen")]
    AttackNotChosen { species: String, slot: AttackSlot },
}

/// Errors related to loading engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Could not read config: {0}")]
    Io(String),
    /// The configuration text is not valid RON for `EngineConfig`
    #[error("Malformed config: {0}")]
    Parse(String),
}

/// Type alias for Results using EngineError
pub type EngineResult<T> = Result<T, EngineError>;

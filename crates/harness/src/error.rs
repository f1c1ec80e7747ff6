use chain::ChainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    /// A round's relational check did not hold. Fatal for the run.
    #[error("round {round}: assertion `{assertion}` failed")]
    AssertionFailed { round: usize, assertion: String },

    #[error("round {round}: input closed before a chain was read")]
    InputClosed { round: usize },

    #[error("no round {index}: the harness has {rounds} rounds")]
    NoSuchRound { index: usize, rounds: usize },

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error("harness I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

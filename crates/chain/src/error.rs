use memory::MemoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("activation failed: {0}")]
    Memory(#[from] MemoryError),

    #[error("failed to write chain output: {0}")]
    Io(#[from] std::io::Error),
}

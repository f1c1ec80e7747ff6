use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("stack overflow: frame of {requested} bytes, {available} bytes left above the heap")]
    StackOverflow { requested: usize, available: usize },

    #[error("out of memory: allocation of {requested} bytes, {available} bytes left below the stack")]
    OutOfMemory { requested: usize, available: usize },
}

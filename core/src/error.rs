use thiserror::Error;

/// Everything that can stop the interpreter from making progress.
///
/// Malformed opcodes and call stack over/underflow are deliberately absent:
/// the CPU treats those as no-ops rather than faults.
#[derive(Debug, Error)]
pub enum Error {
    #[error("ROM is too large ({size} bytes), max size is {max} bytes")]
    RomTooLarge { size: usize, max: usize },

    #[error("memory access out of bounds at address {address:#06X}")]
    AddressOutOfRange { address: usize },

    #[error("unable to read ROM: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

/// Errors from unpacking a serialized continuation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("invalid {engine} state bits {bits:#010x}")]
    InvalidBits { engine: &'static str, bits: u32 },
}

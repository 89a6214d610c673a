use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliceError {
    #[error("source palette is empty")]
    InvalidSource,

    #[error("slice step cannot be zero")]
    InvalidSlice,

    #[error("attempt to assign {got} colors to an extended slice of size {expected}")]
    SliceLengthMismatch { expected: usize, got: usize },

    #[error("palette index {index} out of range for length {len}")]
    IndexOutOfRange { index: isize, len: usize },
}

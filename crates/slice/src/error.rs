use derive_more::{Display, Error};

/// Failures raised by the index-sensitive primitives.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum SliceError {
    /// An index addressed a slot outside `0..len`.
    #[display("index {index} is out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A `[start, end)` window does not fit the sequence.
    #[display("range {start}..{end} is invalid for sequence of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    /// The operation needs at least one element.
    #[display("sequence is empty")]
    Empty,

    #[display("chunk size must be non-zero")]
    ZeroChunkSize,

    /// `ChunkMode::Reference` was used without a per-chunk callback.
    #[display("chunk callback is required in reference mode")]
    MissingCallback,
}

pub type Result<T> = std::result::Result<T, SliceError>;

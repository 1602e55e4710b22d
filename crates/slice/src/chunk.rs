use tracing::{debug, trace};

use crate::{Result, SliceError};

/// How [`chunk_with_mode`] treats the tail of a sequence.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum ChunkMode {
    /// `ceil(len / size)` chunks; the last one may be shorter. The callback is optional.
    #[default]
    Complete,
    /// `floor(len / size)` chunks; a trailing partial chunk is dropped and the
    /// callback is mandatory. Kept for parity with the legacy partitioner.
    Reference,
}

pub const DEFAULT_CHUNK_MODE: ChunkMode = ChunkMode::Complete;

pub type ChunkCallback<'f, T> = &'f mut dyn FnMut(&[T], usize);

/// Splits `s` into consecutive sub-slices of `chunk_size` elements.
///
/// Equivalent to [`chunk_with_mode`] with [`ChunkMode::Complete`].
pub fn chunk<'a, T>(
    s: &'a [T],
    chunk_size: usize,
    callback: Option<ChunkCallback<'_, T>>,
) -> Result<Vec<&'a [T]>> {
    chunk_with_mode(s, chunk_size, DEFAULT_CHUNK_MODE, callback)
}

/// Splits `s` into consecutive sub-slices, invoking `callback(chunk, index)`
/// once per produced chunk in order.
pub fn chunk_with_mode<'a, T>(
    s: &'a [T],
    chunk_size: usize,
    mode: ChunkMode,
    mut callback: Option<ChunkCallback<'_, T>>,
) -> Result<Vec<&'a [T]>> {
    if chunk_size == 0 {
        return Err(SliceError::ZeroChunkSize);
    }

    let count = match mode {
        ChunkMode::Complete => s.len().div_ceil(chunk_size),
        ChunkMode::Reference => {
            if callback.is_none() {
                return Err(SliceError::MissingCallback);
            }
            let dropped = s.len() % chunk_size;
            if dropped > 0 {
                debug!(dropped, chunk_size, "dropping trailing partial chunk");
            }
            s.len() / chunk_size
        }
    };
    trace!(len = s.len(), chunk_size, count, ?mode, "partitioning sequence");

    let mut chunks = Vec::with_capacity(count);
    for (i, part) in s.chunks(chunk_size).take(count).enumerate() {
        if let Some(f) = callback.as_mut() {
            f(part, i);
        }
        chunks.push(part);
    }
    Ok(chunks)
}

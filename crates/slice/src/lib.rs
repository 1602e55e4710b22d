mod access;
mod chunk;
mod error;
mod mutate;
mod transform;

pub use access::{first, last, slice};
pub use chunk::{ChunkCallback, ChunkMode, DEFAULT_CHUNK_MODE, chunk, chunk_with_mode};
pub use error::{Result, SliceError};
pub use mutate::{add, concat, merge, pop, push, remove, remove_aliased};
pub use transform::{clear, copy, except, filter, for_each, map, reverse};

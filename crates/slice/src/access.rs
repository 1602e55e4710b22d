use crate::{Result, SliceError};

pub fn first<T>(s: &[T]) -> Result<&T> {
    s.first().ok_or(SliceError::Empty)
}

pub fn last<T>(s: &[T]) -> Result<&T> {
    s.last().ok_or(SliceError::Empty)
}

/// Borrows the half-open window `[start, end)`.
pub fn slice<T>(s: &[T], start: usize, end: usize) -> Result<&[T]> {
    if start > end || end > s.len() {
        return Err(SliceError::InvalidRange {
            start,
            end,
            len: s.len(),
        });
    }
    Ok(&s[start..end])
}

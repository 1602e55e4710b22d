use tracing::debug;

use crate::{Result, SliceError};

// Every function here takes the sequence by value and hands back the result;
// callers rebind to the returned vector.

pub fn add<T>(mut s: Vec<T>, v: T) -> Vec<T> {
    s.push(v);
    s
}

/// Alias of [`add`].
pub fn push<T>(s: Vec<T>, v: T) -> Vec<T> {
    add(s, v)
}

/// Removes `s[index]`, shifting the tail left by one.
pub fn remove<T>(mut s: Vec<T>, index: usize) -> Result<Vec<T>> {
    if index >= s.len() {
        return Err(SliceError::IndexOutOfRange {
            index,
            len: s.len(),
        });
    }
    s.remove(index);
    Ok(s)
}

/// Removes `s[index]` by shifting the tail over it inside the caller's storage.
///
/// The returned prefix holds the remaining elements. The storage behind `s`
/// is rewritten: once the borrow ends, its last slot still holds a duplicate
/// of the old final element, e.g. removing index 1 from `[1, 2, 3, 4]` leaves
/// the storage as `[1, 3, 4, 4]`.
pub fn remove_aliased<T: Copy>(s: &mut [T], index: usize) -> Result<&mut [T]> {
    let len = s.len();
    if index >= len {
        return Err(SliceError::IndexOutOfRange { index, len });
    }
    s.copy_within(index + 1.., index);
    if index + 1 < len {
        debug!(index, len, "remove left a stale trailing slot in shared storage");
    }
    Ok(&mut s[..len - 1])
}

/// Appends `s2` after `s`. An empty `s2` returns `s` without touching its allocation.
pub fn concat<T>(mut s: Vec<T>, s2: Vec<T>) -> Vec<T> {
    if s2.is_empty() {
        return s;
    }
    s.extend(s2);
    s
}

/// Removes the last element, returning the shortened sequence and the element.
pub fn pop<T>(mut s: Vec<T>) -> Result<(Vec<T>, T)> {
    match s.pop() {
        Some(last) => Ok((s, last)),
        None => Err(SliceError::Empty),
    }
}

pub fn merge<T: Clone>(mut s1: Vec<T>, s2: &[T]) -> Vec<T> {
    s1.extend_from_slice(s2);
    s1
}

/// Returns a copy of `s` with independent storage.
pub fn copy<T: Clone>(s: &[T]) -> Vec<T> {
    s.to_vec()
}

/// Applies `f(value, index)` to every element in index order.
pub fn map<T, U, F>(s: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(&T, usize) -> U,
{
    let mut mapped = Vec::with_capacity(s.len());
    for (i, v) in s.iter().enumerate() {
        mapped.push(f(v, i));
    }
    mapped
}

/// Keeps the elements for which `f(value, index)` holds.
///
/// `index` always refers to the position in `s`, not in the output.
pub fn filter<T, F>(s: &[T], mut f: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, usize) -> bool,
{
    let mut filtered = Vec::new();
    for (i, v) in s.iter().enumerate() {
        if f(v, i) {
            filtered.push(v.clone());
        }
    }
    filtered
}

/// Complement of [`filter`]: keeps the elements for which `f` is false.
pub fn except<T, F>(s: &[T], mut f: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, usize) -> bool,
{
    filter(s, |v, i| !f(v, i))
}

pub fn for_each<T, F>(s: &[T], mut f: F) -> &[T]
where
    F: FnMut(&T, usize),
{
    for (i, v) in s.iter().enumerate() {
        f(v, i);
    }
    s
}

/// Returns a fresh empty sequence; `s` itself is left as is.
pub fn clear<T>(_s: &[T]) -> Vec<T> {
    Vec::new()
}

pub fn reverse<T: Clone>(s: &[T]) -> Vec<T> {
    let mut reversed = Vec::with_capacity(s.len());
    for v in s.iter().rev() {
        reversed.push(v.clone());
    }
    reversed
}

use std::mem;

use slice::{ChunkCallback, ChunkMode, DEFAULT_CHUNK_MODE, Result, SliceError};

use crate::Collection;

/// [`Collection`] over an owned `Vec<T>`.
#[derive(Clone, Debug)]
pub struct BaseCollection<T> {
    items: Vec<T>,
    chunk_mode: ChunkMode,
}

impl<T> BaseCollection<T> {
    /// Switches how [`Collection::chunk`] treats a trailing partial chunk.
    pub fn with_chunk_mode(mut self, mode: ChunkMode) -> Self {
        self.chunk_mode = mode;
        self
    }

    pub fn chunk_mode(&self) -> ChunkMode {
        self.chunk_mode
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    fn derive(&self, items: Vec<T>) -> Self {
        Self {
            items,
            chunk_mode: self.chunk_mode,
        }
    }
}

impl<T: Clone> Collection for BaseCollection<T> {
    type Item = T;

    fn new(items: Vec<T>) -> Self {
        Self {
            items,
            chunk_mode: DEFAULT_CHUNK_MODE,
        }
    }

    fn items(&self) -> &[T] {
        &self.items
    }

    fn count(&self) -> usize {
        self.items.len()
    }

    fn add(&mut self, item: T) {
        self.items = slice::add(mem::take(&mut self.items), item);
    }

    fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(&T, usize) -> T,
    {
        self.derive(slice::map(&self.items, f))
    }

    fn filter<F>(&self, f: F) -> Self
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.derive(slice::filter(&self.items, f))
    }

    fn except<F>(&self, f: F) -> Self
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.derive(slice::except(&self.items, f))
    }

    fn chunk(&self, chunk_size: usize, callback: Option<ChunkCallback<'_, T>>) -> Result<Vec<&[T]>> {
        slice::chunk_with_mode(&self.items, chunk_size, self.chunk_mode, callback)
    }

    fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T, usize),
    {
        slice::for_each(&self.items, f);
    }

    fn remove(&mut self, index: usize) -> Result<()> {
        // `slice::remove` consumes the vector, so reject bad indices while we still own it.
        let len = self.items.len();
        if index >= len {
            return Err(SliceError::IndexOutOfRange { index, len });
        }
        self.items = slice::remove(mem::take(&mut self.items), index)?;
        Ok(())
    }

    fn concat(&mut self, items: Vec<T>) {
        self.items = slice::concat(mem::take(&mut self.items), items);
    }
}

impl<T> Default for BaseCollection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            chunk_mode: DEFAULT_CHUNK_MODE,
        }
    }
}

impl<T: PartialEq> PartialEq for BaseCollection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for BaseCollection<T> {}

impl<T> From<Vec<T>> for BaseCollection<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            chunk_mode: DEFAULT_CHUNK_MODE,
        }
    }
}

impl<T> FromIterator<T> for BaseCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> IntoIterator for BaseCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a BaseCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

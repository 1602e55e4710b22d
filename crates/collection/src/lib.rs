mod base;

pub use base::BaseCollection;
pub use slice::{ChunkCallback, ChunkMode, Result, SliceError};

/// Collection interface over an ordered sequence.
///
/// - `map`, `filter` and `except` return a new collection; the receiver is untouched.
/// - `add`, `remove` and `concat` mutate the receiver in place.
/// - `count()` always equals `items().len()`.
pub trait Collection: Sized {
    type Item;

    fn new(items: Vec<Self::Item>) -> Self;

    fn items(&self) -> &[Self::Item];

    fn count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    fn add(&mut self, item: Self::Item);

    fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(&Self::Item, usize) -> Self::Item;

    fn filter<F>(&self, f: F) -> Self
    where
        F: FnMut(&Self::Item, usize) -> bool;

    fn except<F>(&self, f: F) -> Self
    where
        F: FnMut(&Self::Item, usize) -> bool;

    /// Partitions the items into sub-slices of `chunk_size`, following the
    /// collection's [`ChunkMode`].
    fn chunk(
        &self,
        chunk_size: usize,
        callback: Option<ChunkCallback<'_, Self::Item>>,
    ) -> Result<Vec<&[Self::Item]>>;

    fn for_each<F>(&self, f: F)
    where
        F: FnMut(&Self::Item, usize);

    /// Removes the item at `index`. Out-of-range indices leave the collection unchanged.
    fn remove(&mut self, index: usize) -> Result<()>;

    fn concat(&mut self, items: Vec<Self::Item>);
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::{BaseCollection, ChunkMode, Collection, SliceError};

    fn check_basic<C: Collection<Item = i32>>() {
        let mut c = C::new(Vec::new());
        assert_eq!(c.count(), 0);
        assert!(c.is_empty());
        assert!(c.items().is_empty());

        c.add(5);
        assert_eq!(c.count(), 1);
        assert_eq!(c.items(), [5]);

        c.concat(vec![6, 7]);
        assert_eq!(c.items(), [5, 6, 7]);
        c.concat(Vec::new());
        assert_eq!(c.count(), 3);

        assert_eq!(c.remove(0), Ok(()));
        assert_eq!(c.items(), [6, 7]);
        assert_eq!(
            c.remove(2),
            Err(SliceError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(c.items(), [6, 7]);
    }

    fn check_transforms_leave_receiver<C: Collection<Item = i32>>() {
        let c = C::new(vec![10, 20, 30]);

        let doubled = c.map(|v, _| v * 2);
        assert_eq!(doubled.items(), [20, 40, 60]);

        let big = c.filter(|v, _| *v > 15);
        assert_eq!(big.items(), [20, 30]);

        let small = c.except(|v, _| *v > 15);
        assert_eq!(small.items(), [10]);

        assert_eq!(c.items(), [10, 20, 30]);
        assert_eq!(big.count() + small.count(), c.count());
    }

    fn check_for_each<C: Collection<Item = i32>>() {
        let c = C::new(vec![4, 5, 6]);
        let mut seen = Vec::new();
        c.for_each(|v, i| seen.push((i, *v)));
        assert_eq!(seen, [(0, 4), (1, 5), (2, 6)]);
    }

    fn check_random<C: Collection<Item = i32>>() {
        let mut rng = StdRng::seed_from_u64(0xC011_EC71);
        let mut c = C::new(Vec::new());
        let mut oracle: Vec<i32> = Vec::new();

        const OPS: usize = 5_000;
        for _ in 0..OPS {
            let roll = rng.random_range(0..100);
            if roll < 50 {
                let v = rng.random::<i32>();
                c.add(v);
                oracle.push(v);
            } else if roll < 80 {
                let index = rng.random_range(0..oracle.len() + 2);
                let got = c.remove(index);
                if index < oracle.len() {
                    oracle.remove(index);
                    assert_eq!(got, Ok(()));
                } else {
                    assert!(got.is_err());
                }
            } else {
                let extra = (0..rng.random_range(0..4))
                    .map(|_| rng.random::<i32>())
                    .collect::<Vec<_>>();
                oracle.extend_from_slice(&extra);
                c.concat(extra);
            }

            assert_eq!(c.count(), oracle.len());
            assert_eq!(c.items(), oracle.as_slice());
        }
    }

    macro_rules! test_all {
        ($name:ident, $func:ident) => {
            #[test]
            fn $name() {
                $func::<BaseCollection<i32>>();
            }
        };
    }

    test_all!(basic_all_impls, check_basic);
    test_all!(transforms_all_impls, check_transforms_leave_receiver);
    test_all!(for_each_all_impls, check_for_each);
    test_all!(random_all_impls, check_random);

    #[test]
    fn chunk_follows_configured_mode() {
        let c = BaseCollection::new(vec![1, 2, 3, 4, 5]);
        assert_eq!(c.chunk_mode(), ChunkMode::Complete);
        let chunks = c.chunk(2, None).unwrap();
        assert_eq!(chunks, vec![&[1, 2][..], &[3, 4][..], &[5][..]]);

        let legacy = c.clone().with_chunk_mode(ChunkMode::Reference);
        assert_eq!(legacy.chunk(2, None), Err(SliceError::MissingCallback));

        let mut indices = Vec::new();
        let mut record = |_: &[i32], i: usize| indices.push(i);
        let chunks = legacy.chunk(2, Some(&mut record)).unwrap();
        assert_eq!(chunks, vec![&[1, 2][..], &[3, 4][..]]);
        assert_eq!(indices, [0, 1]);
    }

    #[test]
    fn derived_collections_keep_chunk_mode() {
        let c = BaseCollection::new(vec![1, 2, 3]).with_chunk_mode(ChunkMode::Reference);
        assert_eq!(c.map(|v, _| *v).chunk_mode(), ChunkMode::Reference);
        assert_eq!(c.filter(|_, _| true).chunk_mode(), ChunkMode::Reference);
        assert_eq!(c.except(|_, _| false).chunk_mode(), ChunkMode::Reference);
    }

    #[test]
    fn conversions() {
        let c: BaseCollection<i32> = (1..=3).collect();
        assert_eq!(c, BaseCollection::from(vec![1, 2, 3]));
        assert_eq!((&c).into_iter().copied().sum::<i32>(), 6);
        assert_eq!(c.into_items(), [1, 2, 3]);

        let empty = BaseCollection::<String>::default();
        assert!(empty.is_empty());
    }
}

use super::Space;
use rand::distributions::Distribution;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// An index space; integers 0 .. size-1
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexSpace {
    pub size: usize,
}

impl IndexSpace {
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    /// Number of elements in the space.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Iterate over the elements of the space in increasing order.
    pub fn iter(&self) -> Range<usize> {
        0..self.size
    }
}

impl fmt::Display for IndexSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "IndexSpace({})", self.size)
    }
}

impl Space for IndexSpace {
    type Element = usize;

    fn contains(&self, value: &Self::Element) -> bool {
        value < &self.size
    }
}

impl<'a> IntoIterator for &'a IndexSpace {
    type Item = usize;
    type IntoIter = Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Uniform sample from the space.
///
/// Panics if the space is empty.
impl Distribution<usize> for IndexSpace {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Prng;
    use rand::SeedableRng;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(5)]
    fn iter_is_ordered(#[case] size: usize) {
        let space = IndexSpace::new(size);
        assert_eq!(space.iter().collect::<Vec<_>>(), (0..size).collect::<Vec<_>>());
    }

    #[test]
    fn contains() {
        let space = IndexSpace::new(3);
        assert!(space.contains(&0));
        assert!(space.contains(&2));
        assert!(!space.contains(&3));
    }

    #[test]
    fn samples_are_contained() {
        let space = IndexSpace::new(4);
        let mut rng = Prng::seed_from_u64(0);
        for _ in 0..100 {
            assert!(space.contains(&space.sample(&mut rng)));
        }
    }

    #[test]
    fn display() {
        assert_eq!(IndexSpace::new(10).to_string(), "IndexSpace(10)");
    }
}

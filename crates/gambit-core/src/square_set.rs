//! A set of squares packed into a `u64`, one bit per square (LERF mapping).

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use crate::square::Square;

/// A set of squares, used for legal destinations and highlighting.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(u64);

impl SquareSet {
    /// No squares.
    pub const EMPTY: SquareSet = SquareSet(0);

    /// All 64 squares.
    pub const FULL: SquareSet = SquareSet(!0);

    /// Return a set holding only `sq`.
    #[inline]
    pub const fn single(sq: Square) -> SquareSet {
        SquareSet(1u64 << sq.index())
    }

    /// Return `true` if no squares are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Count the squares in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Return `true` if `sq` is in the set.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1u64 << sq.index())) != 0
    }

    /// Add `sq` to the set.
    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1u64 << sq.index();
    }

    /// Return a new set with `sq` added.
    #[inline]
    pub const fn with(self, sq: Square) -> SquareSet {
        SquareSet(self.0 | (1u64 << sq.index()))
    }

    /// Return a new set with `sq` removed.
    #[inline]
    pub const fn without(self, sq: Square) -> SquareSet {
        SquareSet(self.0 & !(1u64 << sq.index()))
    }

    /// Iterate the squares in index order.
    #[inline]
    pub const fn iter(self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

impl BitAnd for SquareSet {
    type Output = SquareSet;
    #[inline]
    fn bitand(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 & rhs.0)
    }
}

impl BitOr for SquareSet {
    type Output = SquareSet;
    #[inline]
    fn bitor(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: SquareSet) {
        self.0 |= rhs.0;
    }
}

impl Not for SquareSet {
    type Output = SquareSet;
    #[inline]
    fn not(self) -> SquareSet {
        SquareSet(!self.0)
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> SquareSet {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> SquareSetIter {
        self.iter()
    }
}

/// Iterator over the squares of a [`SquareSet`], lowest index first.
#[derive(Debug, Clone)]
pub struct SquareSetIter(u64);

impl Iterator for SquareSetIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let sq = Square::from_index_unchecked(self.0.trailing_zeros() as u8);
            self.0 &= self.0 - 1;
            Some(sq)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count_ones() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for SquareSetIter {}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::SquareSet;
    use crate::square::Square;

    #[test]
    fn insert_contains_remove() {
        let mut set = SquareSet::EMPTY;
        set.insert(Square::E4);
        assert!(set.contains(Square::E4));
        assert!(!set.contains(Square::D4));
        assert_eq!(set.count(), 1);
        assert!(set.without(Square::E4).is_empty());
    }

    #[test]
    fn iterator_order_and_len() {
        let set = SquareSet::EMPTY
            .with(Square::H8)
            .with(Square::A1)
            .with(Square::E4);
        let squares: Vec<_> = set.iter().collect();
        assert_eq!(squares, vec![Square::A1, Square::E4, Square::H8]);
        assert_eq!(set.iter().len(), 3);
    }

    #[test]
    fn collect_from_squares() {
        let set: SquareSet = [Square::C3, Square::C3, Square::F6].into_iter().collect();
        assert_eq!(set.count(), 2);
        assert_eq!(set, SquareSet::single(Square::C3) | SquareSet::single(Square::F6));
    }

    #[test]
    fn full_and_complement() {
        assert_eq!(SquareSet::FULL.count(), 64);
        assert_eq!(!SquareSet::EMPTY, SquareSet::FULL);
        assert_eq!(SquareSet::FULL & SquareSet::single(Square::B2), SquareSet::single(Square::B2));
    }

    #[test]
    fn debug_lists_squares() {
        let set = SquareSet::single(Square::E4);
        assert_eq!(format!("{set:?}"), "{Square(e4)}");
    }
}

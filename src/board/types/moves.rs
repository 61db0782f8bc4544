//! Destination list returned by the movement rules.

use std::ops::Index;

use super::Square;

/// Most destinations any single rule can produce (a queen on an open board).
pub const MAX_DESTINATIONS: usize = 27;

const EMPTY_SQUARE: Square = Square(0, 0);

/// Fixed-size, ordered list of destination squares to avoid heap allocation.
///
/// Order is the generation order of the rule that filled it.
#[derive(Clone, Copy, Debug)]
pub struct SquareList {
    squares: [Square; MAX_DESTINATIONS],
    len: usize,
}

impl SquareList {
    pub(crate) const fn new() -> Self {
        SquareList {
            squares: [EMPTY_SQUARE; MAX_DESTINATIONS],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, sq: Square) {
        self.squares[self.len] = sq;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Square> {
        self.as_slice().get(idx).copied()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Square> {
        self.as_slice().to_vec()
    }
}

impl PartialEq for SquareList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for SquareList {}

impl PartialEq<[Square]> for SquareList {
    fn eq(&self, other: &[Square]) -> bool {
        self.as_slice() == other
    }
}

impl<const N: usize> PartialEq<[Square; N]> for SquareList {
    fn eq(&self, other: &[Square; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a> IntoIterator for &'a SquareList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for SquareList {
    fn default() -> Self {
        SquareList::new()
    }
}

/// Owning iterator over squares in a `SquareList`
pub struct SquareListIntoIter {
    list: SquareList,
    idx: usize,
}

impl Iterator for SquareListIntoIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let sq = self.list.squares[self.idx];
            self.idx += 1;
            Some(sq)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SquareListIntoIter {}

impl IntoIterator for SquareList {
    type Item = Square;
    type IntoIter = SquareListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        SquareListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for SquareList {
    type Output = Square;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "SquareList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.squares[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut list = SquareList::new();
        list.push(Square(2, 1));
        list.push(Square(3, 1));
        assert_eq!(list.len(), 2);
        assert_eq!(list, [Square(2, 1), Square(3, 1)]);
        assert_eq!(list[1], Square(3, 1));
        assert_eq!(list.get(2), None);
    }

    #[test]
    fn test_into_iter_is_exact() {
        let mut list = SquareList::new();
        list.push(Square(0, 0));
        list.push(Square(7, 7));
        let iter = list.into_iter();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.collect::<Vec<_>>(), vec![Square(0, 0), Square(7, 7)]);
    }

    #[test]
    fn test_equality_ignores_unused_capacity() {
        let mut a = SquareList::new();
        let mut b = SquareList::new();
        a.push(Square(1, 1));
        b.push(Square(1, 1));
        assert_eq!(a, b);
        assert!(SquareList::default().is_empty());
    }
}

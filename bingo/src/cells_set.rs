use std::iter::FusedIterator;

use crate::bitset::bitset_traits;

/// Number of cells along one side of the board.
pub const BOARD_SIDE: usize = 5;

/// Number of cells on a full board.
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

const VALID_BITS: u32 = (1u32 << BOARD_CELLS) - 1;

/// A compact set of board indices (`0..25`).
///
/// Allows intersection/union/xor with other such sets via bitwise ops,
/// and iterates in ascending index order.
///
/// ```
/// use bingo::CellsSet;
/// let mut set = CellsSet::new();
/// // Like the bitwise ops, `insert` returns a new `CellsSet`.
/// set = set.insert(12);
/// set = set.insert(12); // Inserting a second time has no effect
/// set = set.insert(3);
/// assert_eq!(Vec::from_iter(set), vec![3, 12]);
/// ```
///
/// Indices outside of the board are ignored by all methods.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellsSet {
    // Only the low 25 bits are used.
    pub(crate) bits: u32,
}

impl CellsSet {
    /// Creates a new, empty set.
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// All cells of a full board.
    pub const fn full() -> Self {
        Self { bits: VALID_BITS }
    }

    /// Usable in constant definitions, unlike [`FromIterator`].
    pub const fn from_cells<const N: usize>(cells: [usize; N]) -> Self {
        let mut bits = 0;
        let mut k = 0;
        while k < N {
            if cells[k] < BOARD_CELLS {
                bits |= 1u32 << cells[k];
            }
            k += 1;
        }
        Self { bits }
    }

    pub fn len(self) -> u32 {
        self.bits.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn contains(self, index: usize) -> bool {
        index < BOARD_CELLS && (self.bits & (1u32 << index)) != 0
    }

    /// Whether every cell of `other` is also in `self`.
    pub fn is_superset(self, other: CellsSet) -> bool {
        self.bits & other.bits == other.bits
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn insert(self, index: usize) -> Self {
        if index >= BOARD_CELLS {
            return self;
        }
        Self {
            bits: self.bits | (1u32 << index),
        }
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn remove(self, index: usize) -> Self {
        if index >= BOARD_CELLS {
            return self;
        }
        Self {
            bits: self.bits & !(1u32 << index),
        }
    }
}

bitset_traits!(CellsSet, VALID_BITS);

impl std::fmt::Debug for CellsSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(*self).finish()
    }
}

impl FromIterator<usize> for CellsSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        iter.into_iter().fold(Self::new(), |set, index| set.insert(index))
    }
}

impl IntoIterator for CellsSet {
    type Item = usize;

    type IntoIter = CellsSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CellsSetIter { bits: self.bits }
    }
}

/// Iterator for a [`CellsSet`] that returns indices in ascending order.
#[derive(Clone, Copy, Debug)]
pub struct CellsSetIter {
    bits: u32,
}

impl Iterator for CellsSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            None
        } else {
            // The number of trailing zeros is the cell index
            let index = self.bits.trailing_zeros() as usize;
            self.bits ^= 1u32 << index;
            Some(index)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.bits.count_ones() as usize;
        (size, Some(size))
    }
}

impl ExactSizeIterator for CellsSetIter {
    fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }
}

impl FusedIterator for CellsSetIter {}

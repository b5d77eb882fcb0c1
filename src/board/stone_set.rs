//! Insertion-ordered stone set with O(1) membership

use std::collections::HashSet;

use super::Pos;

/// Stones of one color.
///
/// Keeps placement order for drawing and a hash set of packed
/// `row * size + col` keys for membership tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoneSet {
    size: u8,
    order: Vec<Pos>,
    keys: HashSet<u16>,
}

impl StoneSet {
    /// Create empty set for a `size` x `size` board
    pub fn new(size: u8) -> Self {
        Self {
            size,
            order: Vec::new(),
            keys: HashSet::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Add a stone. Returns false if it was already present or off the board.
    pub fn insert(&mut self, pos: Pos) -> bool {
        if !pos.in_bounds(self.size) || !self.keys.insert(pos.to_index(self.size)) {
            return false;
        }
        self.order.push(pos);
        true
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.in_bounds(self.size) && self.keys.contains(&pos.to_index(self.size))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Most recently inserted stone
    #[inline]
    pub fn last(&self) -> Option<Pos> {
        self.order.last().copied()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.keys.clear();
    }

    /// Stones in placement order
    #[inline]
    pub fn as_slice(&self) -> &[Pos] {
        &self.order
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pos> {
        self.order.iter()
    }
}

impl<'a> IntoIterator for &'a StoneSet {
    type Item = &'a Pos;
    type IntoIter = std::slice::Iter<'a, Pos>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

use crate::game::Vertex;

/// A set of vertices drawn from a fixed contiguous range `[lo, hi)`.
///
/// Membership is a single bit lookup and the size is tracked explicitly, so `insert`,
/// `contains` and `len` are all O(1). Iteration visits elements in ascending order and
/// takes time proportional to the range.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DenseSet {
    lo: Vertex,
    hi: Vertex,
    words: Vec<u64>,
    len: usize,
}

impl DenseSet {
    /// Create an empty set over `[lo, hi)`.
    pub fn new(lo: Vertex, hi: Vertex) -> DenseSet {
        assert!(lo <= hi, "Invalid range [{lo}, {hi}).");
        DenseSet {
            lo,
            hi,
            words: vec![0; (hi - lo).div_ceil(64)],
            len: 0,
        }
    }

    /// Insert `vertex` and return `true` if it was not present before.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is outside of the range of this set.
    pub fn insert(&mut self, vertex: Vertex) -> bool {
        let (word, bit) = self.position(vertex);
        let fresh = self.words[word] & bit == 0;
        if fresh {
            self.words[word] |= bit;
            self.len += 1;
        }
        fresh
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        if vertex < self.lo || vertex >= self.hi {
            return false;
        }
        let (word, bit) = self.position(vertex);
        self.words[word] & bit != 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The range `[lo, hi)` this set ranges over.
    pub fn range(&self) -> std::ops::Range<Vertex> {
        self.lo..self.hi
    }

    pub fn iter(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.range().filter(|v| self.contains(*v))
    }

    fn position(&self, vertex: Vertex) -> (usize, u64) {
        assert!(
            vertex >= self.lo && vertex < self.hi,
            "Vertex {vertex} outside of [{}, {}).",
            self.lo,
            self.hi
        );
        let offset = vertex - self.lo;
        (offset / 64, 1u64 << (offset % 64))
    }
}

//! Indexed min-priority queue over cells.
//!
//! A binary heap paired with a position index per [`CellId`], so that
//! [`Frontier::decrease_key`] and [`Frontier::remove`] are logarithmic.
//! Entries with equal keys leave in the order they were first inserted.

use std::fmt;

use wayfind_core::CellId;

#[derive(Clone, Copy, Debug)]
struct Entry<K> {
    id: CellId,
    key: K,
    seq: u64,
}

impl<K: Ord> Entry<K> {
    #[inline]
    fn precedes(&self, other: &Self) -> bool {
        (&self.key, self.seq) < (&other.key, other.seq)
    }
}

/// Keyed min-heap with FIFO tie-breaking.
#[derive(Clone, Debug)]
pub struct Frontier<K> {
    heap: Vec<Entry<K>>,
    /// Heap slot of each cell, indexed by `CellId`.
    slots: Vec<Option<usize>>,
    next_seq: u64,
}

impl<K: Ord + Copy> Default for Frontier<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Copy> Frontier<K> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Pre-size the index for cell ids below `cells`.
    pub fn with_capacity(cells: usize) -> Self {
        Self {
            heap: Vec::new(),
            slots: vec![None; cells],
            next_seq: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: CellId) -> bool {
        self.slot(id).is_some()
    }

    /// Current key of `id`, if present.
    pub fn key(&self, id: CellId) -> Option<K> {
        self.slot(id).map(|i| self.heap[i].key)
    }

    /// The entry that [`extract_min`](Self::extract_min) would return.
    pub fn peek(&self) -> Option<(CellId, K)> {
        self.heap.first().map(|e| (e.id, e.key))
    }

    /// Add `id` with `key`. Fails if `id` is already queued.
    pub fn insert(&mut self, id: CellId, key: K) -> Result<(), FrontierError> {
        if self.contains(id) {
            return Err(FrontierError::AlreadyPresent(id));
        }
        self.push(id, key);
        Ok(())
    }

    /// Lower the key of a queued cell.
    ///
    /// Returns `Ok(false)` without changes if `key` is not strictly lower
    /// than the current key. The cell keeps its first insertion order.
    pub fn decrease_key(&mut self, id: CellId, key: K) -> Result<bool, FrontierError> {
        let Some(i) = self.slot(id) else {
            return Err(FrontierError::NotPresent(id));
        };
        Ok(self.lower(i, key))
    }

    /// Insert `id`, or lower its key if already queued.
    ///
    /// Returns whether the frontier changed.
    pub fn push_or_decrease(&mut self, id: CellId, key: K) -> bool {
        match self.slot(id) {
            Some(i) => self.lower(i, key),
            None => {
                self.push(id, key);
                true
            }
        }
    }

    /// Remove and return the entry with the smallest key.
    pub fn extract_min(&mut self) -> Option<(CellId, K)> {
        self.take(0).map(|e| (e.id, e.key))
    }

    /// Remove an arbitrary queued cell, returning its key.
    pub fn remove(&mut self, id: CellId) -> Option<K> {
        let i = self.slot(id)?;
        self.take(i).map(|e| e.key)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        for e in self.heap.drain(..) {
            self.slots[e.id.index()] = None;
        }
    }

    // -----------------------------------------------------------------------
    // Heap internals
    // -----------------------------------------------------------------------

    #[inline]
    fn slot(&self, id: CellId) -> Option<usize> {
        self.slots.get(id.index()).copied().flatten()
    }

    fn push(&mut self, id: CellId, key: K) {
        if id.index() >= self.slots.len() {
            self.slots.resize(id.index() + 1, None);
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        let i = self.heap.len();
        self.heap.push(Entry { id, key, seq });
        self.slots[id.index()] = Some(i);
        self.sift_up(i);
    }

    fn lower(&mut self, i: usize, key: K) -> bool {
        if key >= self.heap[i].key {
            return false;
        }
        self.heap[i].key = key;
        self.sift_up(i);
        true
    }

    fn take(&mut self, i: usize) -> Option<Entry<K>> {
        if i >= self.heap.len() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(i, last);
        let e = self.heap.pop()?;
        self.slots[e.id.index()] = None;
        if i < self.heap.len() {
            self.sift_down(i);
            self.sift_up(i);
        }
        Some(e)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots[self.heap[a].id.index()] = Some(a);
        self.slots[self.heap[b].id.index()] = Some(b);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.heap[i].precedes(&self.heap[parent]) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let l = 2 * i + 1;
            let r = l + 1;
            let mut best = i;
            if l < n && self.heap[l].precedes(&self.heap[best]) {
                best = l;
            }
            if r < n && self.heap[r].precedes(&self.heap[best]) {
                best = r;
            }
            if best == i {
                break;
            }
            self.swap(i, best);
            i = best;
        }
    }
}

/// Misuse of the [`Frontier`] API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierError {
    /// `insert` on a cell that is already queued; use `decrease_key`.
    AlreadyPresent(CellId),
    /// `decrease_key` on a cell that is not queued.
    NotPresent(CellId),
}

impl fmt::Display for FrontierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyPresent(id) => write!(f, "cell {id} is already in the frontier"),
            Self::NotPresent(id) => write!(f, "cell {id} is not in the frontier"),
        }
    }
}

impl std::error::Error for FrontierError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(f: &mut Frontier<i32>) -> Vec<(usize, i32)> {
        std::iter::from_fn(|| f.extract_min())
            .map(|(id, k)| (id.index(), k))
            .collect()
    }

    #[test]
    fn extracts_in_key_order() {
        let mut f = Frontier::with_capacity(8);
        for (id, k) in [(0, 5), (1, 3), (2, 8), (3, 1), (4, 4)] {
            f.insert(CellId(id), k).unwrap();
        }
        assert_eq!(f.len(), 5);
        assert_eq!(f.peek(), Some((CellId(3), 1)));
        assert_eq!(drain(&mut f), vec![(3, 1), (1, 3), (4, 4), (0, 5), (2, 8)]);
        assert!(f.is_empty());
        assert_eq!(f.extract_min(), None);
    }

    #[test]
    fn equal_keys_leave_in_insertion_order() {
        let mut f = Frontier::new();
        for id in [7, 2, 9, 4, 0] {
            f.insert(CellId(id), 1).unwrap();
        }
        let order: Vec<usize> = drain(&mut f).into_iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![7, 2, 9, 4, 0]);
    }

    #[test]
    fn insert_twice_is_rejected() {
        let mut f = Frontier::new();
        f.insert(CellId(1), 4).unwrap();
        assert_eq!(
            f.insert(CellId(1), 2),
            Err(FrontierError::AlreadyPresent(CellId(1)))
        );
        assert_eq!(f.key(CellId(1)), Some(4));
    }

    #[test]
    fn decrease_key_reorders() {
        let mut f = Frontier::with_capacity(4);
        f.insert(CellId(0), 10).unwrap();
        f.insert(CellId(1), 20).unwrap();
        f.insert(CellId(2), 30).unwrap();
        assert_eq!(f.decrease_key(CellId(2), 5), Ok(true));
        assert_eq!(f.peek(), Some((CellId(2), 5)));
        assert_eq!(drain(&mut f), vec![(2, 5), (0, 10), (1, 20)]);
    }

    #[test]
    fn decrease_key_ignores_higher_or_equal_keys() {
        let mut f = Frontier::new();
        f.insert(CellId(0), 10).unwrap();
        assert_eq!(f.decrease_key(CellId(0), 10), Ok(false));
        assert_eq!(f.decrease_key(CellId(0), 12), Ok(false));
        assert_eq!(f.key(CellId(0)), Some(10));
        assert_eq!(
            f.decrease_key(CellId(5), 1),
            Err(FrontierError::NotPresent(CellId(5)))
        );
    }

    #[test]
    fn decreased_entry_keeps_first_insertion_order() {
        let mut f = Frontier::new();
        f.insert(CellId(0), 5).unwrap();
        f.insert(CellId(1), 3).unwrap();
        f.decrease_key(CellId(0), 3).unwrap();
        assert_eq!(drain(&mut f), vec![(0, 3), (1, 3)]);
    }

    #[test]
    fn remove_arbitrary_entry() {
        let mut f = Frontier::new();
        for (id, k) in [(0, 4), (1, 1), (2, 7), (3, 2), (4, 9), (5, 3)] {
            f.insert(CellId(id), k).unwrap();
        }
        assert_eq!(f.remove(CellId(3)), Some(2));
        assert_eq!(f.remove(CellId(3)), None);
        assert!(!f.contains(CellId(3)));
        assert_eq!(drain(&mut f), vec![(1, 1), (5, 3), (0, 4), (2, 7), (4, 9)]);
    }

    #[test]
    fn push_or_decrease_upserts() {
        let mut f = Frontier::new();
        assert!(f.push_or_decrease(CellId(3), 9));
        assert!(f.push_or_decrease(CellId(3), 4));
        assert!(!f.push_or_decrease(CellId(3), 6));
        assert_eq!(f.len(), 1);
        assert_eq!(f.key(CellId(3)), Some(4));
    }

    #[test]
    fn tuple_keys_order_lexicographically() {
        let mut f: Frontier<(i32, i32)> = Frontier::new();
        f.insert(CellId(0), (8, 3)).unwrap();
        f.insert(CellId(1), (8, 0)).unwrap();
        f.insert(CellId(2), (7, 9)).unwrap();
        let order: Vec<usize> = std::iter::from_fn(|| f.extract_min())
            .map(|(id, _)| id.index())
            .collect();
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn clear_resets_membership() {
        let mut f = Frontier::new();
        f.insert(CellId(0), 1).unwrap();
        f.insert(CellId(1), 2).unwrap();
        f.clear();
        assert!(f.is_empty());
        assert!(!f.contains(CellId(0)));
        f.insert(CellId(0), 3).unwrap();
        assert_eq!(f.len(), 1);
    }

    #[test]
    fn many_random_like_operations_stay_sorted() {
        let mut f = Frontier::with_capacity(64);
        for i in 0..64usize {
            f.insert(CellId(i), ((i * 37) % 64) as i32).unwrap();
        }
        for i in (0..64usize).step_by(3) {
            f.decrease_key(CellId(i), -(i as i32)).unwrap();
        }
        for i in (1..64usize).step_by(5) {
            f.remove(CellId(i));
        }
        let keys: Vec<i32> = drain(&mut f).into_iter().map(|(_, k)| k).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}

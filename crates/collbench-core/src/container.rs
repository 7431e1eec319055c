//! The two-operation capability shared by every benchmarked container.
//!
//! [`Container`] is implemented directly on the standard collections for
//! the array, list, and set variants. [`Stack`] and [`Queue`] are thin
//! newtypes so their insertion goes through push / offer semantics rather
//! than the backing collection's general API.

use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::ops::Range;

/// Bulk insertion plus membership probing over `u64` elements.
pub trait Container {
    /// Insert every value of `values` in ascending order.
    fn bulk_insert(&mut self, values: Range<u64>);

    /// Whether `value` is present.
    fn contains(&self, value: u64) -> bool;

    /// Number of stored elements.
    fn len(&self) -> usize;

    /// Whether the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Container for Vec<u64> {
    fn bulk_insert(&mut self, values: Range<u64>) {
        for v in values {
            self.push(v);
        }
    }

    fn contains(&self, value: u64) -> bool {
        self.as_slice().contains(&value)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl Container for LinkedList<u64> {
    fn bulk_insert(&mut self, values: Range<u64>) {
        for v in values {
            self.push_back(v);
        }
    }

    fn contains(&self, value: u64) -> bool {
        self.iter().any(|&v| v == value)
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }
}

impl Container for HashSet<u64> {
    fn bulk_insert(&mut self, values: Range<u64>) {
        for v in values {
            self.insert(v);
        }
    }

    fn contains(&self, value: u64) -> bool {
        HashSet::contains(self, &value)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl Container for BTreeSet<u64> {
    fn bulk_insert(&mut self, values: Range<u64>) {
        for v in values {
            self.insert(v);
        }
    }

    fn contains(&self, value: u64) -> bool {
        BTreeSet::contains(self, &value)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}

// ── Stack ──────────────────────────────────────────────────────────

/// LIFO stack backed by a `Vec`.
#[derive(Clone, Debug, Default)]
pub struct Stack {
    items: Vec<u64>,
}

impl Stack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push onto the top.
    pub fn push(&mut self, value: u64) {
        self.items.push(value);
    }

    /// Pop from the top.
    pub fn pop(&mut self) -> Option<u64> {
        self.items.pop()
    }

    /// Top element without removing it.
    pub fn peek(&self) -> Option<u64> {
        self.items.last().copied()
    }
}

impl Container for Stack {
    fn bulk_insert(&mut self, values: Range<u64>) {
        for v in values {
            self.push(v);
        }
    }

    fn contains(&self, value: u64) -> bool {
        self.items.as_slice().contains(&value)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

// ── Queue ──────────────────────────────────────────────────────────

/// FIFO queue backed by a `VecDeque`.
#[derive(Clone, Debug, Default)]
pub struct Queue {
    items: VecDeque<u64>,
}

impl Queue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue at the tail.
    pub fn offer(&mut self, value: u64) {
        self.items.push_back(value);
    }

    /// Dequeue from the head.
    pub fn poll(&mut self) -> Option<u64> {
        self.items.pop_front()
    }

    /// Head element without removing it.
    pub fn peek(&self) -> Option<u64> {
        self.items.front().copied()
    }
}

impl Container for Queue {
    fn bulk_insert(&mut self, values: Range<u64>) {
        for v in values {
            self.offer(v);
        }
    }

    fn contains(&self, value: u64) -> bool {
        self.items.contains(&value)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Variant;

    #[test]
    fn stack_is_lifo() {
        let mut s = Stack::new();
        s.bulk_insert(0..3);
        assert_eq!(s.peek(), Some(2));
        assert_eq!(s.pop(), Some(2));
        assert_eq!(s.pop(), Some(1));
        assert_eq!(s.pop(), Some(0));
        assert_eq!(s.pop(), None);
    }

    #[test]
    fn stack_membership_after_pops() {
        let mut s = Stack::new();
        s.bulk_insert(0..4);
        assert!(Container::contains(&s, 3));
        s.pop();
        assert!(!Container::contains(&s, 3));
        assert!(Container::contains(&s, 0));
        assert_eq!(Container::len(&s), 3);
    }

    #[test]
    fn queue_is_fifo() {
        let mut q = Queue::new();
        q.bulk_insert(0..3);
        assert_eq!(q.peek(), Some(0));
        assert_eq!(q.poll(), Some(0));
        assert_eq!(q.poll(), Some(1));
        assert_eq!(q.poll(), Some(2));
        assert_eq!(q.poll(), None);
    }

    #[test]
    fn sequence_variants_keep_ascending_order() {
        let mut v: Vec<u64> = Vec::new();
        v.bulk_insert(0..5);
        assert_eq!(v, vec![0, 1, 2, 3, 4]);

        let mut l: LinkedList<u64> = LinkedList::new();
        l.bulk_insert(0..5);
        assert!(l.iter().copied().eq(0..5));
    }

    #[test]
    fn ordered_set_iterates_ascending() {
        let mut s: BTreeSet<u64> = BTreeSet::new();
        s.bulk_insert(0..5);
        s.bulk_insert(2..8);
        assert!(s.iter().copied().eq(0..8));
    }

    #[test]
    fn sets_deduplicate_repeated_inserts() {
        for variant in [Variant::HashSet, Variant::OrderedSet] {
            let mut c = variant.instantiate();
            c.bulk_insert(0..10);
            c.bulk_insert(0..10);
            assert_eq!(c.len(), 10, "{variant}");
        }
    }

    #[test]
    fn sequences_keep_duplicates() {
        for variant in [
            Variant::DynamicArray,
            Variant::LinkedList,
            Variant::Stack,
            Variant::Queue,
        ] {
            let mut c = variant.instantiate();
            c.bulk_insert(0..10);
            c.bulk_insert(0..10);
            assert_eq!(c.len(), 20, "{variant}");
        }
    }

    #[test]
    fn membership_after_insert() {
        for variant in Variant::ALL {
            let mut c = variant.instantiate();
            c.bulk_insert(0..100);
            assert!(c.contains(0), "{variant}");
            assert!(c.contains(99), "{variant}");
            assert!(!c.contains(100), "{variant}");
        }
    }

    #[test]
    fn empty_range_is_noop() {
        for variant in Variant::ALL {
            let mut c = variant.instantiate();
            c.bulk_insert(0..0);
            assert!(c.is_empty(), "{variant}");
            assert!(!c.contains(0), "{variant}");
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_variant() -> impl Strategy<Value = Variant> {
            prop::sample::select(Variant::ALL.to_vec())
        }

        proptest! {
            #[test]
            fn len_matches_inserted_count(variant in arb_variant(), size in 0u64..2048) {
                let mut c = variant.instantiate();
                c.bulk_insert(0..size);
                prop_assert_eq!(c.len() as u64, size);
            }

            #[test]
            fn every_inserted_value_is_found(variant in arb_variant(), size in 1u64..512, probe in 0u64..1024) {
                let mut c = variant.instantiate();
                c.bulk_insert(0..size);
                prop_assert_eq!(c.contains(probe), probe < size);
            }
        }
    }
}

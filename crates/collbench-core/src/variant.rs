//! The fixed set of container archetypes under benchmark.

use std::fmt;
use std::str::FromStr;

use crate::container::{Container, Queue, Stack};
use crate::error::ParseVariantError;

/// A container archetype that can be benchmarked.
///
/// Each variant maps onto one standard-library collection (or a thin
/// newtype over one) and is dispatched through [`Container`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Growable contiguous array (`Vec`).
    DynamicArray,
    /// Doubly-linked list (`LinkedList`).
    LinkedList,
    /// Hash-based set (`HashSet`).
    HashSet,
    /// Ordered set (`BTreeSet`).
    OrderedSet,
    /// LIFO stack over a `Vec`.
    Stack,
    /// FIFO queue over a `VecDeque`.
    Queue,
}

impl Variant {
    /// All variants, in menu order.
    pub const ALL: [Variant; 6] = [
        Variant::DynamicArray,
        Variant::LinkedList,
        Variant::HashSet,
        Variant::OrderedSet,
        Variant::Stack,
        Variant::Queue,
    ];

    /// Display name, also used as the summary table key.
    pub fn name(self) -> &'static str {
        match self {
            Self::DynamicArray => "Vec",
            Self::LinkedList => "LinkedList",
            Self::HashSet => "HashSet",
            Self::OrderedSet => "BTreeSet",
            Self::Stack => "Stack",
            Self::Queue => "Queue",
        }
    }

    /// Kebab-case identifier accepted by [`FromStr`].
    pub fn slug(self) -> &'static str {
        match self {
            Self::DynamicArray => "dynamic-array",
            Self::LinkedList => "linked-list",
            Self::HashSet => "hash-set",
            Self::OrderedSet => "ordered-set",
            Self::Stack => "stack",
            Self::Queue => "queue",
        }
    }

    /// 1-based position in the interactive menu.
    pub fn menu_index(self) -> u32 {
        match self {
            Self::DynamicArray => 1,
            Self::LinkedList => 2,
            Self::HashSet => 3,
            Self::OrderedSet => 4,
            Self::Stack => 5,
            Self::Queue => 6,
        }
    }

    /// Inverse of [`menu_index`](Self::menu_index). `None` outside `1..=6`.
    pub fn from_menu_index(index: u32) -> Option<Self> {
        let slot = usize::try_from(index.checked_sub(1)?).ok()?;
        Self::ALL.get(slot).copied()
    }

    /// Whether inserting a duplicate value leaves the element count unchanged.
    pub fn deduplicates(self) -> bool {
        matches!(self, Self::HashSet | Self::OrderedSet)
    }

    /// Create a fresh, empty container of this variant.
    pub fn instantiate(self) -> Box<dyn Container> {
        match self {
            Self::DynamicArray => Box::new(Vec::<u64>::new()),
            Self::LinkedList => Box::new(std::collections::LinkedList::<u64>::new()),
            Self::HashSet => Box::new(std::collections::HashSet::<u64>::new()),
            Self::OrderedSet => Box::new(std::collections::BTreeSet::<u64>::new()),
            Self::Stack => Box::new(Stack::new()),
            Self::Queue => Box::new(Queue::new()),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.slug().eq_ignore_ascii_case(needle) || v.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseVariantError {
                input: needle.to_string(),
            })
    }
}

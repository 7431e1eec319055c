//! Benchmark profiles for the collbench container variants.
//!
//! Provides pre-built size and probe profiles shared by the criterion
//! benches:
//!
//! - [`REFERENCE_SIZES`]: element counts swept by every bench group
//! - [`populated`]: a container of one variant filled with `[0, size)`
//! - [`probe_profile`]: deterministic random lookups via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use collbench_core::{Container, ProbePlan, Variant};

/// Element counts swept by the benches: 1K, 10K, 100K.
pub const REFERENCE_SIZES: [u64; 3] = [1_000, 10_000, 100_000];

/// Lookups per search-phase iteration.
pub const PROBES_PER_ITER: usize = 100;

/// Build a container of `variant` holding `[0, size)`.
pub fn populated(variant: Variant, size: u64) -> Box<dyn Container> {
    let mut container = variant.instantiate();
    container.bulk_insert(0..size);
    container
}

/// Deterministic probe values for a container of `size`.
///
/// Same plan the interactive session uses, at a smaller count so the
/// linear-scan variants stay tractable at 100K elements.
pub fn probe_profile(size: u64, seed: u64) -> Vec<u64> {
    ProbePlan::Random {
        count: PROBES_PER_ITER,
        seed,
    }
    .values(size)
}

/// Whether `variant` is worth sweeping at `size`.
///
/// Linear-scan lookups on a linked list at 100K elements dominate the
/// whole run without telling anything the 10K point does not.
pub fn lookup_sweep_enabled(variant: Variant, size: u64) -> bool {
    !(variant == Variant::LinkedList && size > 10_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populated_has_every_element() {
        for variant in Variant::ALL {
            let c = populated(variant, 1_000);
            assert_eq!(c.len(), 1_000, "{variant}");
            assert!(c.contains(999), "{variant}");
        }
    }

    #[test]
    fn probe_profile_deterministic() {
        let a = probe_profile(10_000, 42);
        let b = probe_profile(10_000, 42);
        assert_eq!(a, b);
        assert_eq!(a.len(), PROBES_PER_ITER);
        assert!(a.iter().all(|&v| v < 10_000));
    }

    #[test]
    fn linked_list_skipped_at_largest_size() {
        assert!(lookup_sweep_enabled(Variant::LinkedList, 10_000));
        assert!(!lookup_sweep_enabled(Variant::LinkedList, 100_000));
        assert!(lookup_sweep_enabled(Variant::DynamicArray, 100_000));
    }
}

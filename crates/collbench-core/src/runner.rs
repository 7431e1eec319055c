//! Timed insert and search phases for a single variant.
//!
//! [`insert_phase`] builds a fresh container and times the bulk insert of
//! `[0, size)`; [`search_phase`] times membership lookups for an already
//! resolved probe set. Anything between the two (resolving probes, reading
//! them from the console) is outside both timed regions. [`run`] chains
//! the phases. The container is dropped at the end of the search phase;
//! nothing is reused across variants.

use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::container::Container;
use crate::probe::ProbePlan;
use crate::summary::SummaryEntry;
use crate::variant::Variant;

/// Outcome of one membership lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProbeResult {
    /// The value looked up.
    pub value: u64,
    /// Whether it was present.
    pub found: bool,
}

/// Everything a single benchmark run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    /// Timing pair to record in the summary table.
    pub entry: SummaryEntry,
    /// Element count after the insert phase.
    pub len: usize,
    /// Per-probe results, in probe order.
    pub probes: Vec<ProbeResult>,
}

impl RunOutcome {
    /// Number of probes that found their value.
    pub fn hits(&self) -> usize {
        self.probes.iter().filter(|p| p.found).count()
    }
}

/// A freshly populated container, handed from the insert phase to the
/// search phase.
pub struct Populated {
    variant: Variant,
    size: u64,
    container: Box<dyn Container>,
    insert_elapsed: Duration,
}

impl Populated {
    /// Variant that was populated.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Insert phase duration, whole milliseconds.
    pub fn insert_time_ms(&self) -> u64 {
        whole_millis(self.insert_elapsed)
    }

    /// Element count after the insert phase.
    pub fn len(&self) -> usize {
        self.container.len()
    }

    /// Whether the insert phase stored nothing.
    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }
}

/// Timed insert phase: a fresh `variant` filled with `[0, size)`.
pub fn insert_phase(variant: Variant, size: u64) -> Populated {
    let mut container = variant.instantiate();

    let insert_start = Instant::now();
    container.bulk_insert(0..size);
    let insert_elapsed = insert_start.elapsed();

    debug!(
        variant = variant.name(),
        size,
        insert_us = whole_micros(insert_elapsed),
        "insert phase complete"
    );

    Populated {
        variant,
        size,
        container,
        insert_elapsed,
    }
}

/// Timed search phase over already-resolved `probe_values`.
///
/// Consumes the container; it is dropped before returning.
pub fn search_phase(populated: Populated, probe_values: &[u64]) -> RunOutcome {
    let Populated {
        variant,
        size,
        container,
        insert_elapsed,
    } = populated;

    let mut probes = Vec::with_capacity(probe_values.len());
    let search_start = Instant::now();
    for &value in probe_values {
        let found = black_box(container.contains(black_box(value)));
        probes.push(ProbeResult { value, found });
    }
    let search_elapsed = search_start.elapsed();

    let len = container.len();
    drop(container);

    debug!(
        variant = variant.name(),
        size,
        len,
        probes = probes.len(),
        search_us = whole_micros(search_elapsed),
        "search phase complete"
    );

    RunOutcome {
        entry: SummaryEntry::new(
            variant.name(),
            whole_millis(insert_elapsed),
            whole_millis(search_elapsed),
        ),
        len,
        probes,
    }
}

/// Benchmark `variant` with `size` sequential inserts and the lookups of `plan`.
pub fn run(variant: Variant, size: u64, plan: &ProbePlan) -> RunOutcome {
    let probe_values = plan.values(size);
    search_phase(insert_phase(variant, size), &probe_values)
}

/// Truncate to whole microseconds, saturating at `u64::MAX`.
fn whole_micros(d: Duration) -> u64 {
    u64::try_from(d.as_micros()).unwrap_or(u64::MAX)
}

/// Truncate to whole milliseconds, saturating at `u64::MAX`.
fn whole_millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_millis_truncates() {
        assert_eq!(whole_millis(Duration::from_micros(1_999)), 1);
        assert_eq!(whole_millis(Duration::from_micros(999)), 0);
        assert_eq!(whole_millis(Duration::from_secs(2)), 2_000);
    }

    #[test]
    fn whole_micros_saturates() {
        assert_eq!(whole_micros(Duration::from_nanos(1_999)), 1);
        assert_eq!(whole_micros(Duration::MAX), u64::MAX);
    }

    #[test]
    fn phases_split_matches_run() {
        let populated = insert_phase(Variant::Queue, 64);
        assert_eq!(populated.variant(), Variant::Queue);
        assert_eq!(populated.len(), 64);
        let insert_ms = populated.insert_time_ms();

        let out = search_phase(populated, &[0, 63, 64]);
        assert_eq!(out.entry.name, "Queue");
        assert_eq!(out.entry.insert_time_ms, insert_ms);
        assert_eq!(out.len, 64);
        assert_eq!(out.hits(), 2);
    }

    #[test]
    fn empty_insert_phase() {
        let populated = insert_phase(Variant::HashSet, 0);
        assert!(populated.is_empty());
        let out = search_phase(populated, &[]);
        assert!(out.probes.is_empty());
    }

    #[test]
    fn entry_is_keyed_by_variant_name() {
        let out = run(Variant::OrderedSet, 10, &ProbePlan::default());
        assert_eq!(out.entry.name, "BTreeSet");
    }

    #[test]
    fn len_matches_size_for_every_variant() {
        for variant in Variant::ALL {
            let out = run(variant, 1_000, &ProbePlan::Random { count: 16, seed: 3 });
            assert_eq!(out.len, 1_000, "{variant}");
            assert_eq!(out.probes.len(), 16, "{variant}");
        }
    }

    #[test]
    fn random_probes_always_hit() {
        for variant in Variant::ALL {
            let out = run(variant, 256, &ProbePlan::Random { count: 50, seed: 11 });
            assert_eq!(out.hits(), 50, "{variant}");
        }
    }

    #[test]
    fn explicit_probes_report_each_value() {
        let plan = ProbePlan::Explicit(vec![3, 42, 7]);
        let out = run(Variant::LinkedList, 10, &plan);
        assert_eq!(
            out.probes,
            vec![
                ProbeResult { value: 3, found: true },
                ProbeResult { value: 42, found: false },
                ProbeResult { value: 7, found: true },
            ]
        );
        assert_eq!(out.hits(), 2);
    }

    #[test]
    fn zero_size_skips_random_probes() {
        for variant in Variant::ALL {
            let out = run(variant, 0, &ProbePlan::default());
            assert_eq!(out.len, 0, "{variant}");
            assert!(out.probes.is_empty(), "{variant}");
        }
    }

    #[test]
    fn zero_size_explicit_probes_all_miss() {
        let out = run(Variant::HashSet, 0, &ProbePlan::Explicit(vec![0, 1]));
        assert_eq!(out.hits(), 0);
        assert_eq!(out.probes.len(), 2);
    }

    #[test]
    fn reference_scenario_dynamic_array() {
        let out = run(Variant::DynamicArray, 100_000, &ProbePlan::default());
        assert_eq!(out.len, 100_000);
        assert_eq!(out.probes.len(), 1_000);
        assert_eq!(out.hits(), 1_000);
        assert_eq!(out.entry.name, "Vec");
        assert!(out.entry.total_ms() >= out.entry.insert_time_ms);
    }
}

//! Per-session result accumulation and the fastest/slowest report.
//!
//! [`SummaryTable`] keeps entries in first-recorded order. Recording a
//! name that is already present overwrites its timings in place, so the
//! entry keeps its original position for display and tie-breaking.

use std::fmt;

use indexmap::IndexMap;

/// Recorded timing pair for one variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryEntry {
    /// Variant name (the table key).
    pub name: String,
    /// Insert phase duration, whole milliseconds.
    pub insert_time_ms: u64,
    /// Search phase duration, whole milliseconds.
    pub search_time_ms: u64,
}

impl SummaryEntry {
    /// Create an entry.
    pub fn new(name: impl Into<String>, insert_time_ms: u64, search_time_ms: u64) -> Self {
        Self {
            name: name.into(),
            insert_time_ms,
            search_time_ms,
        }
    }

    /// Insert plus search time, saturating.
    pub fn total_ms(&self) -> u64 {
        self.insert_time_ms.saturating_add(self.search_time_ms)
    }
}

/// Ordered mapping from variant name to its latest [`SummaryEntry`].
#[derive(Clone, Debug, Default)]
pub struct SummaryTable {
    entries: IndexMap<String, SummaryEntry>,
}

impl SummaryTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `entry`, overwriting any previous entry with the same name.
    ///
    /// Returns the entry it replaced, if any.
    pub fn record(&mut self, entry: SummaryEntry) -> Option<SummaryEntry> {
        self.entries.insert(entry.name.clone(), entry)
    }

    /// Look up the latest entry for `name`.
    pub fn get(&self, name: &str) -> Option<&SummaryEntry> {
        self.entries.get(name)
    }

    /// Number of distinct variants recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-recorded order.
    pub fn iter(&self) -> impl Iterator<Item = &SummaryEntry> + '_ {
        self.entries.values()
    }

    /// Build the final report.
    ///
    /// Ties on total time resolve to the entry recorded first, for both
    /// the fastest and the slowest pick.
    pub fn report(&self) -> Report {
        let rows: Vec<RankedRow> = self
            .iter()
            .map(|e| RankedRow {
                name: e.name.clone(),
                insert_time_ms: e.insert_time_ms,
                search_time_ms: e.search_time_ms,
                total_ms: e.total_ms(),
            })
            .collect();

        let mut iter = rows.iter().enumerate();
        let Some((_, first)) = iter.next() else {
            return Report::NoData;
        };

        let (mut fastest, mut slowest) = (0, 0);
        let (mut min, mut max) = (first.total_ms, first.total_ms);
        for (i, row) in iter {
            if row.total_ms < min {
                min = row.total_ms;
                fastest = i;
            }
            if row.total_ms > max {
                max = row.total_ms;
                slowest = i;
            }
        }

        Report::Ranked {
            rows,
            fastest,
            slowest,
        }
    }
}

/// One display row of the report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedRow {
    /// Variant name.
    pub name: String,
    /// Insert phase, ms.
    pub insert_time_ms: u64,
    /// Search phase, ms.
    pub search_time_ms: u64,
    /// Insert plus search, ms.
    pub total_ms: u64,
}

/// Result of [`SummaryTable::report`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report {
    /// Nothing was recorded; no ranking is computed.
    NoData,
    /// At least one entry exists.
    Ranked {
        /// All rows in first-recorded order.
        rows: Vec<RankedRow>,
        /// Index into `rows` of the minimum total.
        fastest: usize,
        /// Index into `rows` of the maximum total.
        slowest: usize,
    },
}

impl Report {
    /// Row with the minimum total, if any.
    pub fn fastest(&self) -> Option<&RankedRow> {
        match self {
            Self::NoData => None,
            Self::Ranked { rows, fastest, .. } => rows.get(*fastest),
        }
    }

    /// Row with the maximum total, if any.
    pub fn slowest(&self) -> Option<&RankedRow> {
        match self {
            Self::NoData => None,
            Self::Ranked { rows, slowest, .. } => rows.get(*slowest),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self::Ranked { rows, .. } = self else {
            return writeln!(f, "No tests run.");
        };

        writeln!(f, "=== Performance Summary ===")?;
        for row in rows {
            writeln!(
                f,
                "{} > Add: {} ms | Search: {} ms | Total: {} ms",
                row.name, row.insert_time_ms, row.search_time_ms, row.total_ms
            )?;
        }
        if let (Some(fast), Some(slow)) = (self.fastest(), self.slowest()) {
            writeln!(f)?;
            writeln!(f, "Fastest Overall: {} ({} ms)", fast.name, fast.total_ms)?;
            writeln!(f, "Slowest Overall: {} ({} ms)", slow.name, slow.total_ms)?;
        }
        Ok(())
    }
}

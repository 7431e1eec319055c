//! Core types for the collbench container benchmark.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the container variants under test, the two-operation [`Container`]
//! capability they share, the timed benchmark runner, and the
//! [`SummaryTable`] that accumulates results across a session.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod container;
pub mod error;
pub mod probe;
pub mod runner;
pub mod summary;
pub mod variant;

pub use container::{Container, Queue, Stack};
pub use error::{InputError, ParseVariantError};
pub use probe::{ProbePlan, DEFAULT_PROBE_COUNT, DEFAULT_PROBE_SEED};
pub use runner::{insert_phase, run, search_phase, Populated, ProbeResult, RunOutcome};
pub use summary::{RankedRow, Report, SummaryEntry, SummaryTable};
pub use variant::Variant;

//! Bar chart export for collbench summary tables.
//!
//! [`ChartExporter`] is the seam the menu loop calls once the session
//! ends. [`SvgBarChart`] is the bundled implementation: a grouped bar
//! chart with one group per variant and two series (insert time, search
//! time) against an auto-scaled millisecond axis.
//!
//! Export failures are never fatal to the caller; they surface as
//! [`ExportError`] for the caller to report as a warning.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod svg;

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use collbench_core::SummaryTable;

pub use svg::SvgBarChart;

/// Default output file name.
pub const DEFAULT_CHART_PATH: &str = "add_vs_search_chart.svg";

/// Renders a [`SummaryTable`] to an image file.
pub trait ChartExporter {
    /// Write the chart and return the path written.
    fn export(&self, table: &SummaryTable) -> Result<PathBuf, ExportError>;
}

/// Errors from [`ChartExporter::export`].
#[derive(Debug)]
pub enum ExportError {
    /// The table is empty; there is nothing to plot.
    NoData,
    /// Writing the output file failed.
    Io {
        /// Destination that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoData => write!(f, "No data to plot."),
            Self::Io { path, source } => {
                write!(f, "Could not save chart to {}: {source}", path.display())
            }
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::NoData => None,
        }
    }
}

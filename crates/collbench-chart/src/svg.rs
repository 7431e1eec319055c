//! SVG grouped bar chart.

use std::fs;
use std::path::{Path, PathBuf};

use collbench_core::{SummaryEntry, SummaryTable};
use tracing::{debug, info};

use crate::{ChartExporter, ExportError, DEFAULT_CHART_PATH};

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 150.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 70.0;

/// Target number of value-axis intervals before rounding to a nice step.
const AXIS_INTERVALS: u64 = 5;

const SERIES: [(&str, &str); 2] = [("Add Time", "#4e79a7"), ("Search Time", "#f28e2b")];

/// Grouped bar chart written as a standalone SVG document.
#[derive(Clone, Debug)]
pub struct SvgBarChart {
    path: PathBuf,
    width: u32,
    height: u32,
    title: String,
}

impl Default for SvgBarChart {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CHART_PATH),
            width: 900,
            height: 600,
            title: "Add vs Search Performance".to_string(),
        }
    }
}

impl SvgBarChart {
    /// Chart written to `path` with the default 900x600 canvas.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Override the canvas size in pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Output path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render the SVG document for `table`.
    ///
    /// # Errors
    ///
    /// [`ExportError::NoData`] if the table is empty.
    pub fn render(&self, table: &SummaryTable) -> Result<String, ExportError> {
        if table.is_empty() {
            return Err(ExportError::NoData);
        }
        let entries: Vec<&SummaryEntry> = table.iter().collect();

        let width = f64::from(self.width);
        let height = f64::from(self.height);
        let plot_w = (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let plot_h = (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
        let plot_bottom = MARGIN_TOP + plot_h;

        let peak = entries
            .iter()
            .map(|e| e.insert_time_ms.max(e.search_time_ms))
            .max()
            .unwrap_or(0);
        let (axis_max, step) = value_axis(peak);
        let scale = plot_h / axis_max as f64;

        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">\n",
            w = self.width,
            h = self.height
        ));
        out.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
        out.push_str(&format!(
            "<text x=\"{:.1}\" y=\"30\" font-size=\"20\" text-anchor=\"middle\">{}</text>\n",
            width / 2.0,
            escape(&self.title)
        ));

        // Value axis: gridlines and tick labels.
        let mut tick = 0;
        while tick <= axis_max {
            let y = plot_bottom - tick as f64 * scale;
            out.push_str(&format!(
                "<line x1=\"{MARGIN_LEFT}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"#dddddd\"/>\n",
                MARGIN_LEFT + plot_w
            ));
            out.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\" text-anchor=\"end\">{tick}</text>\n",
                MARGIN_LEFT - 8.0,
                y + 4.0
            ));
            tick += step;
        }
        out.push_str(&format!(
            "<line x1=\"{MARGIN_LEFT}\" y1=\"{MARGIN_TOP}\" x2=\"{MARGIN_LEFT}\" y2=\"{plot_bottom:.1}\" stroke=\"black\"/>\n"
        ));
        out.push_str(&format!(
            "<line x1=\"{MARGIN_LEFT}\" y1=\"{plot_bottom:.1}\" x2=\"{:.1}\" y2=\"{plot_bottom:.1}\" stroke=\"black\"/>\n",
            MARGIN_LEFT + plot_w
        ));

        // Bars, grouped per variant.
        let group_w = plot_w / entries.len() as f64;
        let bar_w = group_w * 0.35;
        for (i, entry) in entries.iter().enumerate() {
            let group_x = MARGIN_LEFT + group_w * i as f64;
            let first_bar_x = group_x + (group_w - bar_w * 2.0) / 2.0;
            let values = [entry.insert_time_ms, entry.search_time_ms];
            for (s, (&value, (_, color))) in values.iter().zip(SERIES.iter()).enumerate() {
                let bar_h = value as f64 * scale;
                let x = first_bar_x + bar_w * s as f64;
                let y = plot_bottom - bar_h;
                out.push_str(&format!(
                    "<rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{bar_w:.1}\" height=\"{bar_h:.1}\" fill=\"{color}\"/>\n"
                ));
                out.push_str(&format!(
                    "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" text-anchor=\"middle\">{value}</text>\n",
                    x + bar_w / 2.0,
                    y - 4.0
                ));
            }
            out.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"13\" text-anchor=\"middle\">{}</text>\n",
                group_x + group_w / 2.0,
                plot_bottom + 20.0,
                escape(&entry.name)
            ));
        }

        // Axis titles.
        out.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"14\" text-anchor=\"middle\">Data Structure</text>\n",
            MARGIN_LEFT + plot_w / 2.0,
            height - 20.0
        ));
        out.push_str(&format!(
            "<text x=\"20\" y=\"{:.1}\" font-size=\"14\" text-anchor=\"middle\" transform=\"rotate(-90 20 {:.1})\">Time (ms)</text>\n",
            MARGIN_TOP + plot_h / 2.0,
            MARGIN_TOP + plot_h / 2.0
        ));

        // Legend.
        let legend_x = MARGIN_LEFT + plot_w + 20.0;
        for (s, (label, color)) in SERIES.iter().enumerate() {
            let y = MARGIN_TOP + 22.0 * s as f64;
            out.push_str(&format!(
                "<rect x=\"{legend_x:.1}\" y=\"{y:.1}\" width=\"14\" height=\"14\" fill=\"{color}\"/>\n"
            ));
            out.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"13\">{label}</text>\n",
                legend_x + 20.0,
                y + 12.0
            ));
        }

        out.push_str("</svg>\n");
        Ok(out)
    }
}

impl ChartExporter for SvgBarChart {
    fn export(&self, table: &SummaryTable) -> Result<PathBuf, ExportError> {
        let doc = self.render(table)?;
        debug!(path = %self.path.display(), bytes = doc.len(), "writing chart");
        fs::write(&self.path, doc).map_err(|source| ExportError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), variants = table.len(), "chart saved");
        Ok(self.path.clone())
    }
}

/// Round `peak` up to a value-axis maximum with a 1/2/5 x 10^n step.
///
/// Returns `(axis_max, step)`. A zero peak still gets a unit axis so
/// bars of height zero have somewhere to sit.
fn value_axis(peak: u64) -> (u64, u64) {
    if peak == 0 {
        return (1, 1);
    }
    let raw = peak.div_ceil(AXIS_INTERVALS).max(1);
    let mut magnitude: u64 = 1;
    while magnitude.saturating_mul(10) <= raw {
        magnitude = magnitude.saturating_mul(10);
    }
    let step = [1, 2, 5, 10]
        .into_iter()
        .map(|m| magnitude.saturating_mul(m))
        .find(|&s| s >= raw)
        .unwrap_or(raw);
    (peak.div_ceil(step).saturating_mul(step), step)
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static SCRATCH: AtomicU32 = AtomicU32::new(0);

    fn scratch_path(name: &str) -> PathBuf {
        let n = SCRATCH.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "collbench-chart-{}-{n}-{name}",
            std::process::id()
        ))
    }

    fn sample_table() -> SummaryTable {
        let mut t = SummaryTable::new();
        t.record(SummaryEntry::new("Vec", 12, 40));
        t.record(SummaryEntry::new("HashSet", 30, 1));
        t
    }

    #[test]
    fn value_axis_uses_nice_steps() {
        assert_eq!(value_axis(0), (1, 1));
        assert_eq!(value_axis(1), (1, 1));
        assert_eq!(value_axis(7), (8, 2));
        assert_eq!(value_axis(40), (40, 10));
        assert_eq!(value_axis(43), (50, 10));
        assert_eq!(value_axis(1234), (1500, 500));
    }

    #[test]
    fn axis_max_covers_peak() {
        for peak in 0..2000u64 {
            let (max, step) = value_axis(peak);
            assert!(max >= peak, "peak {peak}");
            assert_eq!(max % step, 0, "peak {peak}");
        }
    }

    #[test]
    fn render_empty_table_is_no_data() {
        let err = SvgBarChart::default().render(&SummaryTable::new()).unwrap_err();
        assert!(matches!(err, ExportError::NoData));
        assert_eq!(err.to_string(), "No data to plot.");
    }

    #[test]
    fn render_contains_series_and_categories() {
        let svg = SvgBarChart::default().render(&sample_table()).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Add vs Search Performance"));
        assert!(svg.contains("Add Time"));
        assert!(svg.contains("Search Time"));
        assert!(svg.contains(">Vec<"));
        assert!(svg.contains(">HashSet<"));
        assert!(svg.contains(">40<"));
        // One add-time bar per variant plus its legend swatch.
        let bars = svg.matches("fill=\"#4e79a7\"").count();
        assert_eq!(bars, 3);
    }

    #[test]
    fn render_respects_canvas_size() {
        let svg = SvgBarChart::default()
            .with_size(400, 300)
            .render(&sample_table())
            .unwrap();
        assert!(svg.contains("width=\"400\" height=\"300\""));
    }

    #[test]
    fn escape_handles_markup() {
        assert_eq!(escape("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
    }

    #[test]
    fn export_writes_file() {
        let path = scratch_path("chart.svg");
        let chart = SvgBarChart::new(&path);
        assert_eq!(chart.path(), path.as_path());
        let written = chart.export(&sample_table()).unwrap();
        assert_eq!(written, path);
        let body = fs::read_to_string(&path).unwrap();
        assert!(body.contains("Data Structure"));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn export_to_missing_directory_is_io_error() {
        let path = scratch_path("missing-dir").join("chart.svg");
        let err = SvgBarChart::new(&path).export(&sample_table()).unwrap_err();
        match err {
            ExportError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn export_empty_table_writes_nothing() {
        let path = scratch_path("empty.svg");
        let err = SvgBarChart::new(&path).export(&SummaryTable::new()).unwrap_err();
        assert!(matches!(err, ExportError::NoData));
        assert!(!path.exists());
    }
}

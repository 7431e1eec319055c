//! The interactive menu loop.
//!
//! [`Menu`] owns the session's [`SummaryTable`]; each completed run is
//! recorded into it and the finished table is handed back from
//! [`Menu::run`]. Input is read as whitespace-separated tokens, so a
//! size, a choice, and probe values may share a line or span several.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use collbench_chart::ChartExporter;
use collbench_core::{
    insert_phase, search_phase, InputError, ProbePlan, RunOutcome, SummaryTable, Variant,
};
use tracing::{info, warn};

use crate::config::{ProbeMode, SessionConfig};

/// Menu number of the "Show Summary & Exit" action.
pub const FINISH_CHOICE: u32 = Variant::ALL.len() as u32 + 1;

/// A parsed menu selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    /// Benchmark a variant.
    Run(Variant),
    /// Print the summary, export the chart, and stop.
    Finish,
}

impl MenuChoice {
    /// Parse one input token. `None` for anything outside the menu.
    pub fn parse(token: &str) -> Option<Self> {
        let n: u32 = token.trim().parse().ok()?;
        if n == FINISH_CHOICE {
            return Some(Self::Finish);
        }
        Variant::from_menu_index(n).map(Self::Run)
    }
}

/// Interactive session over any line-oriented reader and writer.
pub struct Menu<R, W> {
    input: R,
    output: W,
    tokens: VecDeque<String>,
    config: SessionConfig,
    exporter: Option<Box<dyn ChartExporter>>,
    table: SummaryTable,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a session. `exporter` is invoked once on finish, if present.
    pub fn new(
        input: R,
        output: W,
        config: SessionConfig,
        exporter: Option<Box<dyn ChartExporter>>,
    ) -> Self {
        Self {
            input,
            output,
            tokens: VecDeque::new(),
            config,
            exporter,
            table: SummaryTable::new(),
        }
    }

    /// Run the session to completion and return the final table.
    ///
    /// End of input at the menu prompt finishes the session as if the
    /// finish action had been chosen.
    ///
    /// # Errors
    ///
    /// Console I/O failures, and end of input while a size or probe
    /// value is still expected.
    pub fn run(mut self) -> Result<SummaryTable, InputError> {
        let size = match self.config.size {
            Some(size) => size,
            None => self.prompt_size()?,
        };
        info!(size, probe_mode = ?self.config.probe_mode, "session started");

        loop {
            self.print_menu()?;
            let Some(token) = self.next_token()? else {
                warn!("input closed at menu prompt, finishing session");
                writeln!(self.output)?;
                break;
            };
            match MenuChoice::parse(&token) {
                Some(MenuChoice::Run(variant)) => self.benchmark(variant, size)?,
                Some(MenuChoice::Finish) => break,
                None => {
                    warn!(choice = %token, "invalid menu choice");
                    writeln!(self.output, "Invalid choice! Try again.")?;
                }
            }
        }

        self.finish()?;
        Ok(self.table)
    }

    fn prompt_size(&mut self) -> Result<u64, InputError> {
        loop {
            write!(self.output, "Enter number of elements to test with: ")?;
            self.output.flush()?;
            let token = self.next_token()?.ok_or(InputError::UnexpectedEof {
                expected: "an element count",
            })?;
            match token.parse::<u64>() {
                Ok(size) => return Ok(size),
                Err(_) => {
                    let err = InputError::NotAnInteger { token };
                    warn!(%err, "rejected element count");
                    writeln!(self.output, "{err}; enter a non-negative integer.")?;
                }
            }
        }
    }

    fn print_menu(&mut self) -> Result<(), InputError> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Choose Data Structure to Test ===")?;
        for variant in Variant::ALL {
            writeln!(self.output, "{}. {}", variant.menu_index(), variant.name())?;
        }
        writeln!(self.output, "{FINISH_CHOICE}. Show Summary & Exit")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn benchmark(&mut self, variant: Variant, size: u64) -> Result<(), InputError> {
        writeln!(self.output)?;
        writeln!(self.output, ">> Testing {}", variant.name())?;

        let populated = insert_phase(variant, size);
        writeln!(
            self.output,
            "{} {size} elements in {} ms",
            insert_verb(variant),
            populated.insert_time_ms()
        )?;

        let plan = match self.config.probe_mode {
            ProbeMode::Random => self.config.random_plan(),
            ProbeMode::Manual => ProbePlan::Explicit(self.prompt_probe_values()?),
        };
        let outcome = search_phase(populated, &plan.values(size));
        self.print_search(&plan, &outcome)?;

        info!(
            variant = variant.name(),
            insert_ms = outcome.entry.insert_time_ms,
            search_ms = outcome.entry.search_time_ms,
            "recorded"
        );
        self.table.record(outcome.entry);
        Ok(())
    }

    fn prompt_probe_values(&mut self) -> Result<Vec<u64>, InputError> {
        let wanted = self.config.manual_probe_count;
        writeln!(self.output, "Enter {wanted} values to search:")?;
        self.output.flush()?;

        let mut values = Vec::with_capacity(wanted);
        while values.len() < wanted {
            let token = self.next_token()?.ok_or(InputError::UnexpectedEof {
                expected: "a probe value",
            })?;
            match token.parse::<u64>() {
                Ok(v) => values.push(v),
                Err(_) => {
                    let err = InputError::NotAnInteger { token };
                    writeln!(self.output, "{err}; skipped.")?;
                }
            }
        }
        Ok(values)
    }

    fn print_search(&mut self, plan: &ProbePlan, outcome: &RunOutcome) -> Result<(), InputError> {
        if plan.is_explicit() {
            for probe in &outcome.probes {
                let status = if probe.found { "Found" } else { "Not Found" };
                writeln!(self.output, "{}: {status}", probe.value)?;
            }
        } else {
            writeln!(
                self.output,
                "{}/{} hits",
                outcome.hits(),
                outcome.probes.len()
            )?;
        }
        writeln!(
            self.output,
            "Search Time: {} ms",
            outcome.entry.search_time_ms
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), InputError> {
        writeln!(self.output)?;
        write!(self.output, "{}", self.table.report())?;

        if let Some(exporter) = &self.exporter {
            match exporter.export(&self.table) {
                Ok(path) => writeln!(self.output, "Chart saved as {}", path.display())?,
                Err(err) => {
                    warn!(%err, "chart export failed");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Next whitespace-separated token, refilling from input by line.
    fn next_token(&mut self) -> Result<Option<String>, InputError> {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.tokens
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

fn insert_verb(variant: Variant) -> &'static str {
    match variant {
        Variant::Stack => "Pushed",
        Variant::Queue => "Offered",
        _ => "Added",
    }
}

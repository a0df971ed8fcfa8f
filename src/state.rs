use crate::configuration::Config;
use crate::lasso::{Lasso, Verdict};
use crate::style::{Palette, Style};
use crate::timer::{Clock, SystemClock};
use std::io::Write;
use std::time::Instant;

/// State shared by assertions and test runs of one batch.
///
/// `passed` only describes the assertions made since the last
/// [`Lasso::run`]; the run tally is what accumulates across tests.
pub struct RunContext {
    passed: bool,
    count: usize,
    total_run_count: usize,
    failed_run_count: usize,
    label_width: usize,
    quiet: bool,
    palette: Palette,
    out: Box<dyn Write>,
    clock: Box<dyn Clock>,
}

impl RunContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            passed: true,
            count: 0,
            total_run_count: 0,
            failed_run_count: 0,
            label_width: config.label_width,
            quiet: config.quiet,
            palette: Palette::new(config.color),
            out: Box::new(std::io::stdout()),
            clock: Box::new(SystemClock),
        }
    }

    /// Redirect diagnostics and reports.
    #[must_use]
    pub fn with_writer(mut self, out: impl Write + 'static) -> Self {
        self.out = Box::new(out);
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Display index of the most recently constructed test in this section.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn label_width(&self) -> usize {
        self.label_width
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn total_run_count(&self) -> usize {
        self.total_run_count
    }

    pub fn failed_run_count(&self) -> usize {
        self.failed_run_count
    }

    pub fn all_passed(&self) -> bool {
        self.failed_run_count == 0
    }

    /// Print a grouping banner and restart display numbering.
    pub fn section(&mut self, label: &str) {
        let banner = if label.is_empty() {
            "\n\n".to_string()
        } else {
            format!(
                "\n\n {}\n",
                self.palette.paint(Style::Title, format_args!("[ {label} ]"))
            )
        };
        self.emit(&banner);
        self.count = 0;
    }

    /// Write the terminal report of `test`, skipping passing runs when quiet.
    pub fn report<A>(&mut self, test: &Lasso<'_, A>) {
        if self.quiet && test.verdict() == Some(Verdict::Pass) {
            return;
        }
        let line = test.terminal_string(self);
        self.emit(&line);
    }

    #[must_use]
    pub fn summary(&self) -> String {
        let result_string = format!(
            "[{}/{}] tests pass",
            self.total_run_count - self.failed_run_count,
            self.total_run_count
        );
        if self.all_passed() {
            self.palette.paint(Style::Ok, result_string)
        } else {
            self.palette.paint(Style::Fail, result_string)
        }
    }

    pub(crate) fn next_index(&mut self) -> usize {
        self.count += 1;
        self.count
    }

    pub(crate) fn now(&self) -> Instant {
        self.clock.now()
    }

    pub(crate) fn begin_run(&mut self) {
        self.passed = true;
    }

    pub(crate) fn mark_failed(&mut self) {
        self.passed = false;
    }

    pub(crate) fn record_run(&mut self, verdict: Verdict) {
        self.total_run_count += 1;
        if verdict == Verdict::Fail {
            self.failed_run_count += 1;
        }
    }

    // Write errors are ignored.
    pub(crate) fn emit(&mut self, text: &str) {
        let _ = self.out.write_all(text.as_bytes());
        let _ = self.out.flush();
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new()
    }
}

//! Non-fatal equality checks.
//!
//! A passing check prints nothing. A failing check writes a diagnostic block
//! to the context's sink and marks the current run as failed, then returns so
//! the rest of the routine keeps going.

use crate::state::RunContext;
use crate::style::Style;
use std::fmt::{Debug, Display};
use std::panic::Location;
use tracing::trace;

/// File and line a check was made from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    file: &'static str,
    line: u32,
}

impl SourceLocation {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of whoever called the current `#[track_caller]` chain.
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl From<&'static Location<'static>> for SourceLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Check that `actual` equals `expected`.
///
/// ```
/// use lasso::{expect, CaptureBuffer, RunContext};
///
/// let buffer = CaptureBuffer::new();
/// let mut ctx = RunContext::new().with_writer(buffer.clone());
///
/// expect(&mut ctx, "four is 2 plus 2", 4, 2 + 2);
/// assert!(ctx.passed());
/// assert!(buffer.is_empty());
///
/// expect(&mut ctx, "five is 2 plus 2", 5, 2 + 2);
/// assert!(!ctx.passed());
/// assert!(buffer.contents().contains("five is 2 plus 2"));
/// ```
#[track_caller]
pub fn expect<T, U>(ctx: &mut RunContext, description: impl Display, expected: T, actual: U)
where
    T: PartialEq<U> + Display,
    U: Display,
{
    expect_at(ctx, SourceLocation::caller(), description, expected, actual);
}

/// [`expect`] with an explicit location, for helpers forwarding their own caller.
pub fn expect_at<T, U>(
    ctx: &mut RunContext,
    location: SourceLocation,
    description: impl Display,
    expected: T,
    actual: U,
) where
    T: PartialEq<U> + Display,
    U: Display,
{
    if expected != actual {
        report_mismatch(ctx, location, &description, &expected, &actual);
    }
}

/// Like [`expect`], but renders both values with `Debug`.
#[track_caller]
pub fn expect_debug<T, U>(ctx: &mut RunContext, description: impl Display, expected: T, actual: U)
where
    T: PartialEq<U> + Debug,
    U: Debug,
{
    if expected != actual {
        let expected = format!("{expected:?}");
        let actual = format!("{actual:?}");
        report_mismatch(
            ctx,
            SourceLocation::caller(),
            &description,
            &expected,
            &actual,
        );
    }
}

fn report_mismatch(
    ctx: &mut RunContext,
    location: SourceLocation,
    description: &dyn Display,
    expected: &dyn Display,
    actual: &dyn Display,
) {
    trace!(%location, %description, %expected, %actual, "expectation mismatch");

    let palette = ctx.palette();
    let block = format!(
        "{}{}{}{}{}{}\n",
        palette.paint(Style::Title, format_args!("\n    ->  {description}")),
        palette.paint(Style::Muted, "\n     -  wanted  "),
        expected,
        palette.paint(Style::Muted, "\n     -  got     "),
        actual,
        palette.paint(Style::Muted, format_args!("\n     @  {location}")),
    );

    ctx.emit(&block);
    ctx.mark_failed();
}

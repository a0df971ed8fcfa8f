//! A small, non-fatal unit testing kit.
//!
//! [`expect`] compares two values and, on mismatch, prints a diagnostic and
//! marks the current run as failed. [`Lasso`] wraps a test routine, times it,
//! and renders a one-line report. Both work through an explicit
//! [`RunContext`].
//!
//! ```
//! use lasso::{expect, Lasso, RunContext};
//!
//! fn mult(m: i32, n: i32) -> i32 {
//!     m * n
//! }
//!
//! let mut ctx = RunContext::new();
//! let mut test = Lasso::new(&mut ctx, "multiply", |ctx: &mut RunContext| {
//!     expect(ctx, "five times five", 25, mult(5, 5));
//!     expect(ctx, "five times zero", 0, mult(5, 0));
//! });
//!
//! test.run(&mut ctx);
//! ctx.report(&test);
//! assert!(ctx.all_passed());
//! ```

mod configuration;
mod error_slot;
mod expect;
mod lasso;
mod output;
mod state;
mod style;
mod timer;

pub use crate::configuration::{ColorMode, Config, ConfigError, DEFAULT_LABEL_WIDTH};
pub use crate::error_slot::ErrorSlot;
pub use crate::expect::{expect, expect_at, expect_debug, SourceLocation};
pub use crate::lasso::{Lasso, Verdict};
pub use crate::output::CaptureBuffer;
pub use crate::state::RunContext;
pub use crate::style::{Palette, Style};
pub use crate::timer::{Clock, SystemClock, Timer};

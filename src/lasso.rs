use crate::state::RunContext;
use crate::style::Style;
use crate::timer::Timer;
use std::time::Duration;
use tracing::debug;

type Routine<'a, A> = Box<dyn FnMut(&mut RunContext, A) + 'a>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

/// A named, timed test routine.
///
/// `A` is the argument the routine is run with; zero-argument routines use
/// `()`, several arguments are passed as a tuple.
pub struct Lasso<'a, A = ()> {
    name: String,
    index: usize, // assigned by the context at construction
    routine: Routine<'a, A>,
    timer: Timer,
    verdict: Option<Verdict>, // captured when a run completes
}

impl<'a> Lasso<'a, ()> {
    pub fn new<F, R>(ctx: &mut RunContext, name: impl Into<String>, mut routine: F) -> Self
    where
        F: FnMut(&mut RunContext) -> R + 'a,
    {
        Self::with_args(ctx, name, move |ctx: &mut RunContext, ()| routine(ctx))
    }

    pub fn run(&mut self, ctx: &mut RunContext) {
        self.run_with(ctx, ());
    }
}

impl<'a, A> Lasso<'a, A> {
    pub fn with_args<F, R>(ctx: &mut RunContext, name: impl Into<String>, mut routine: F) -> Self
    where
        F: FnMut(&mut RunContext, A) -> R + 'a,
    {
        let routine: Routine<'a, A> = Box::new(move |ctx: &mut RunContext, args: A| {
            let _ = routine(ctx, args);
        });

        Self {
            name: name.into(),
            index: ctx.next_index(),
            routine,
            timer: Timer::new(ctx.now()),
            verdict: None,
        }
    }

    // Reset the pass flag, then time one execution of the routine.
    pub fn run_with(&mut self, ctx: &mut RunContext, args: A) {
        ctx.begin_run();
        debug!(index = self.index, name = %self.name, "run started");

        self.timer.start(ctx.now());
        (self.routine)(ctx, args);
        self.timer.stop(ctx.now());

        let verdict = if ctx.passed() {
            Verdict::Pass
        } else {
            Verdict::Fail
        };
        self.verdict = Some(verdict);
        ctx.record_run(verdict);

        debug!(
            index = self.index,
            name = %self.name,
            elapsed = ?self.timer.elapsed(),
            ?verdict,
            "run finished"
        );
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// `None` until the first run completes.
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    pub fn duration(&self) -> Duration {
        self.timer.elapsed()
    }

    /// Seconds taken by the last run, to the nanosecond.
    pub fn elapsed(&self) -> String {
        format!("{:.9}", self.timer.elapsed().as_secs_f64())
    }

    /// Report line with index, name, verdict and timing, using the
    /// context's palette and label column.
    pub fn terminal_string(&self, ctx: &RunContext) -> String {
        let palette = ctx.palette();
        let counter = format!("{}/{}", self.index, ctx.count());

        // pad on visible width, escape codes do not take up columns
        let visible = counter.chars().count() + 1 + self.name.chars().count();
        let padding = " ".repeat(ctx.label_width().saturating_sub(visible));

        let verdict = match self.verdict {
            Some(Verdict::Pass) => palette.paint(Style::Ok, "pass"),
            Some(Verdict::Fail) => palette.paint(Style::Fail, "fail"),
            None => palette.paint(Style::Muted, "----"),
        };

        format!(
            "\n {} {}{} {} {}\n",
            palette.paint(Style::Muted, counter),
            palette.paint(Style::Title, &self.name),
            padding,
            verdict,
            palette.paint(
                Style::Muted,
                format_args!("{:.2}s", self.timer.elapsed().as_secs_f64())
            ),
        )
    }

    /// Uncolored one-line summary.
    pub fn raw_string(&self) -> String {
        match self.verdict {
            Some(Verdict::Fail) => format!("\n{} failed", self.name),
            _ => format!("\n{} {:.6}", self.name, self.timer.elapsed().as_secs_f64()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expect::expect;
    use crate::output::CaptureBuffer;
    use crate::style::Palette;
    use crate::timer::Clock;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::rc::Rc;
    use std::time::Instant;

    // Replays offsets from a fixed base, then keeps returning the last one.
    struct ScriptedClock {
        base: Instant,
        offsets: RefCell<VecDeque<i64>>,
        last: Cell<i64>,
    }

    impl ScriptedClock {
        fn new(offsets_ms: &[i64]) -> Self {
            Self {
                base: Instant::now() + Duration::from_secs(60),
                offsets: RefCell::new(offsets_ms.iter().copied().collect()),
                last: Cell::new(0),
            }
        }
    }

    impl Clock for ScriptedClock {
        fn now(&self) -> Instant {
            if let Some(offset) = self.offsets.borrow_mut().pop_front() {
                self.last.set(offset);
            }
            let offset = self.last.get();
            let delta = Duration::from_millis(offset.unsigned_abs());
            if offset < 0 {
                self.base - delta
            } else {
                self.base + delta
            }
        }
    }

    fn plain_context() -> (RunContext, CaptureBuffer) {
        let buffer = CaptureBuffer::new();
        let ctx = RunContext::new()
            .with_palette(Palette::plain())
            .with_writer(buffer.clone());
        (ctx, buffer)
    }

    #[test]
    fn indices_follow_construction_order() {
        let (mut ctx, _) = plain_context();

        let first = Lasso::new(&mut ctx, "first", |_: &mut RunContext| {});
        let second = Lasso::new(&mut ctx, "second", |_: &mut RunContext| {});
        let third = Lasso::new(&mut ctx, "third", |_: &mut RunContext| {});

        assert_eq!([first.index(), second.index(), third.index()], [1, 2, 3]);
        assert_eq!(ctx.count(), 3);
    }

    #[test]
    fn run_resets_the_pass_flag_first() {
        let (mut ctx, _) = plain_context();
        expect(&mut ctx, "stray failure", 1, 2);
        assert!(!ctx.passed());

        let seen = Rc::new(Cell::new(false));
        let observed = seen.clone();
        let mut test = Lasso::new(&mut ctx, "observer", move |ctx: &mut RunContext| {
            observed.set(ctx.passed());
        });
        test.run(&mut ctx);

        assert!(seen.get());
        assert!(ctx.passed());
        assert_eq!(test.verdict(), Some(Verdict::Pass));
    }

    #[test]
    fn second_failing_check_fails_the_run_then_a_fix_passes() {
        let (mut ctx, buffer) = plain_context();
        let broken = Rc::new(Cell::new(true));

        let flag = broken.clone();
        let mut test = Lasso::new(&mut ctx, "three checks", move |ctx: &mut RunContext| {
            expect(ctx, "one", 1, 1);
            expect(ctx, "two", 2, if flag.get() { 3 } else { 2 });
            expect(ctx, "three", 3, 3);
        });

        test.run(&mut ctx);
        assert_eq!(test.verdict(), Some(Verdict::Fail));
        assert!(test.terminal_string(&ctx).contains(" fail "));
        assert_eq!(buffer.contents().matches("    ->  ").count(), 1);
        assert!(buffer.contents().contains("    ->  two"));

        broken.set(false);
        test.run(&mut ctx);
        assert_eq!(test.verdict(), Some(Verdict::Pass));
        assert!(test.terminal_string(&ctx).contains(" pass "));
    }

    #[test]
    fn table_driven_routine_reports_only_the_bad_case() {
        struct ModuloCase {
            name: &'static str,
            x: u32,
            m: u32,
            result: u32,
        }

        let table = [
            ModuloCase {
                name: "ten mod three",
                x: 10,
                m: 3,
                result: 1,
            },
            ModuloCase {
                name: "nine mod three",
                x: 9,
                m: 3,
                result: 1,
            },
            ModuloCase {
                name: "seven mod seven",
                x: 7,
                m: 7,
                result: 0,
            },
        ];

        let (mut ctx, buffer) = plain_context();
        let mut test = Lasso::new(&mut ctx, "modulo table", |ctx: &mut RunContext| {
            for case in &table {
                expect(ctx, case.name, case.result, case.x % case.m);
            }
        });
        test.run(&mut ctx);

        let contents = buffer.contents();
        assert_eq!(contents.matches("    ->  ").count(), 1);
        assert!(contents.contains("    ->  nine mod three"));
        assert!(contents.contains("wanted  1"));
        assert!(contents.contains("got     0"));
    }

    #[test]
    fn arguments_are_passed_through() {
        let (mut ctx, buffer) = plain_context();
        let mut multer = Lasso::with_args(
            &mut ctx,
            "multer",
            |ctx: &mut RunContext, (m, n): (u32, u32)| {
                expect(ctx, "product", 27_u32, m * n);
                m * n
            },
        );

        multer.run_with(&mut ctx, (3, 9));
        assert_eq!(multer.verdict(), Some(Verdict::Pass));

        multer.run_with(&mut ctx, (3, 8));
        assert_eq!(multer.verdict(), Some(Verdict::Fail));
        assert!(buffer.contents().contains("got     24"));
    }

    #[test]
    fn verdict_is_captured_at_run_time() {
        let (mut ctx, _) = plain_context();
        let mut test = Lasso::new(&mut ctx, "passing", |_: &mut RunContext| {});
        test.run(&mut ctx);

        // an unrelated failure after the run
        expect(&mut ctx, "later", 1, 2);

        assert!(test.terminal_string(&ctx).contains(" pass "));
    }

    #[test]
    fn elapsed_stays_non_negative_when_the_clock_goes_back() {
        // baseline, start, then a stop reading earlier than start
        let clock = ScriptedClock::new(&[0, 500, -250]);
        let (ctx, _) = plain_context();
        let mut ctx = ctx.with_clock(clock);

        let mut test = Lasso::new(&mut ctx, "time traveller", |_: &mut RunContext| {});
        test.run(&mut ctx);

        assert_eq!(test.duration(), Duration::ZERO);
        assert_eq!(test.elapsed(), "0.000000000");
    }

    #[test]
    fn each_run_overwrites_timing() {
        let clock = ScriptedClock::new(&[0, 100, 350, 400, 1400]);
        let (ctx, _) = plain_context();
        let mut ctx = ctx.with_clock(clock);

        let mut test = Lasso::new(&mut ctx, "timed", |_: &mut RunContext| {});

        test.run(&mut ctx);
        assert_eq!(test.duration(), Duration::from_millis(250));

        test.run(&mut ctx);
        assert_eq!(test.duration(), Duration::from_millis(1000));
        assert!(test.terminal_string(&ctx).ends_with(" 1.00s\n"));
    }

    #[test]
    fn terminal_string_layout() {
        let clock = ScriptedClock::new(&[0, 0, 0, 1234]);
        let (ctx, _) = plain_context();
        let mut ctx = ctx.with_clock(clock);

        let mut test = Lasso::new(&mut ctx, "multiply", |_: &mut RunContext| {});
        Lasso::new(&mut ctx, "other", |_: &mut RunContext| {});
        test.run(&mut ctx);

        // "1/2 multiply" is 12 columns wide, padded to 32
        let expected = format!("\n 1/2 multiply{} pass 1.23s\n", " ".repeat(20));
        assert_eq!(test.terminal_string(&ctx), expected);
    }

    #[test]
    fn unrun_test_shows_placeholder() {
        let (mut ctx, _) = plain_context();
        let test = Lasso::new(&mut ctx, "idle", |_: &mut RunContext| {});

        assert_eq!(test.verdict(), None);
        assert!(test.terminal_string(&ctx).contains(" ---- "));
    }

    #[test]
    fn raw_string_has_no_escape_codes() {
        let buffer = CaptureBuffer::new();
        let mut ctx = RunContext::new()
            .with_palette(Palette::new(crate::ColorMode::Always))
            .with_writer(buffer)
            .with_clock(ScriptedClock::new(&[0, 0, 1500]));

        let mut ok = Lasso::new(&mut ctx, "ok", |_: &mut RunContext| {});
        ok.run(&mut ctx);
        assert_eq!(ok.raw_string(), "\nok 1.500000");

        let mut bad = Lasso::new(&mut ctx, "bad", |ctx: &mut RunContext| {
            expect(ctx, "x", 1, 0)
        });
        bad.run(&mut ctx);
        assert_eq!(bad.raw_string(), "\nbad failed");
        assert!(bad.terminal_string(&ctx).contains("\x1b[1;31mfail\x1b[0m"));
    }

    #[test]
    fn quiet_context_only_reports_failures() {
        let buffer = CaptureBuffer::new();
        let config = crate::Config {
            color: crate::ColorMode::Never,
            quiet: true,
            ..crate::Config::default()
        };
        let mut ctx = RunContext::with_config(&config).with_writer(buffer.clone());

        let mut good = Lasso::new(&mut ctx, "good", |_: &mut RunContext| {});
        let mut bad = Lasso::new(&mut ctx, "bad", |ctx: &mut RunContext| {
            expect(ctx, "x", 1, 0)
        });

        good.run(&mut ctx);
        ctx.report(&good);
        assert!(buffer.is_empty());

        bad.run(&mut ctx);
        ctx.report(&bad);
        assert!(buffer.contents().contains("2/2 bad"));
        assert_eq!(ctx.summary(), "[1/2] tests pass");
    }
}

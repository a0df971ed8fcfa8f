// Sample functions and their test routines, some of them broken on purpose.

use lasso::{expect, Lasso, RunContext};

// An inefficient but working multiply
pub fn mult(m: u32, n: u32) -> u32 {
    match n {
        0 => 0,
        1 => m,
        _ => m + mult(m, n - 1),
    }
}

#[allow(clippy::erasing_op)]
pub fn bad_mult(_x: u32, y: u32) -> u32 {
    0 * y
}

pub fn fib(n: u32) -> u32 {
    if n < 2 {
        return n;
    }
    fib(n - 1) + fib(n - 2)
}

// Wraps like a 32-bit unsigned int
pub fn fact(n: u32) -> u32 {
    if n == 0 {
        return 1;
    }
    n.wrapping_mul(fact(n - 1))
}

struct MultCase {
    name: &'static str,
    m: u32,
    n: u32,
    result: u32,
}

struct SingleCase {
    name: &'static str,
    n: u32,
    result: u32,
}

pub fn mult_test(ctx: &mut RunContext) {
    let table = [
        MultCase {
            name: "five times five",
            m: 5,
            n: 5,
            result: 25,
        },
        MultCase {
            name: "five times zero",
            m: 5,
            n: 0,
            result: 0,
        },
        MultCase {
            name: "zero times five",
            m: 0,
            n: 5,
            result: 0,
        },
        MultCase {
            name: "fib-complex",
            m: fib(25),
            n: 1,
            result: 75025,
        },
    ];

    for case in &table {
        expect(ctx, case.name, case.result, mult(case.m, case.n));
    }
}

pub fn fib_test(ctx: &mut RunContext) {
    let table = [
        SingleCase {
            name: "zero",
            n: 0,
            result: 0,
        },
        SingleCase {
            name: "one",
            n: 1,
            result: 1,
        },
        SingleCase {
            name: "ten",
            n: 10,
            result: 55,
        },
        SingleCase {
            name: "long execution",
            n: 30,
            result: 832040,
        },
        SingleCase {
            name: "example of test being wrong",
            n: 12,
            result: 143,
        },
    ];

    for case in &table {
        expect(ctx, case.name, case.result, fib(case.n));
    }
}

pub fn fact_test(ctx: &mut RunContext) {
    let table = [
        SingleCase {
            name: "zero",
            n: 0,
            result: 1,
        },
        SingleCase {
            name: "five",
            n: 5,
            result: 120,
        },
        SingleCase {
            name: "big number",
            n: 30,
            result: 1409286144,
        },
    ];

    for case in &table {
        expect(ctx, case.name, case.result, fact(case.n));
    }
}

// Loose checks outside of any test run
pub fn loose_expectations(ctx: &mut RunContext) {
    ctx.section("expect");

    expect(ctx, "a) four is 2 plus 2", 4, 2 + 2);
    expect(ctx, "b) five is 2 plus 2", 5, 2 + 2);
    expect(ctx, "c) four is 2 times 2", 4_u32, mult(2, 2));
    expect(ctx, "d) four is 2 times 2", 4_u32, bad_mult(2, 2));
    expect(ctx, "e) 0 is 0 times 2", 0_u32, bad_mult(0, 2));
    expect(ctx, "f) five is 2 times 2", 5_u32, mult(2, 2));

    ctx.section("expect over a table");

    let table = [
        MultCase {
            name: "2 times 2",
            m: 2,
            n: 2,
            result: 4,
        },
        MultCase {
            name: "5 times 13",
            m: 5,
            n: 13,
            result: 65,
        },
        MultCase {
            name: "0 times 2324",
            m: 0,
            n: 2324,
            result: 0,
        },
    ];
    for case in &table {
        expect(ctx, case.name, case.result, mult(case.m, case.n));
    }
}

/// Runs every sample test, stopping at the first failure when asked to.
pub fn run_suite(ctx: &mut RunContext, break_on_fail: bool) {
    ctx.section("routines");

    let mut tests = [
        Lasso::new(ctx, "multiply (recursive)", mult_test),
        Lasso::new(ctx, "fibonacci (recursive)", fib_test),
        Lasso::new(ctx, "factorial (recursive)", fact_test),
    ];

    for test in &mut tests {
        test.run(ctx);
        ctx.report(test);

        if break_on_fail && !ctx.passed() {
            return;
        }
    }

    ctx.section("routines with arguments");

    let mut fibber = Lasso::with_args(ctx, "fibber", |_: &mut RunContext, n: u32| fib(n));
    fibber.run_with(ctx, 25);
    ctx.report(&fibber);

    let mut multer = Lasso::with_args(ctx, "multer", |ctx: &mut RunContext, (m, n): (u32, u32)| {
        expect(ctx, "multer agrees with *", m * n, mult(m, n));
    });
    multer.run_with(ctx, (3, 9));
    ctx.report(&multer);

    let fibplex = |_: &mut RunContext, (a, b): (u32, u32)| fib(a) - fib(b);
    let mut fibplexer = Lasso::with_args(ctx, "fibplex", fibplex);
    fibplexer.run_with(ctx, (25, 24));
    ctx.report(&fibplexer);
}

use assert_cmd::Command;
use predicates::prelude::*;

fn demo() -> Command {
    Command::cargo_bin("lasso-demo").unwrap()
}

#[test]
fn sample_suite_reports_and_fails() {
    demo()
        .args(["--color", "never"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[ routines ]"))
        .stdout(predicate::str::contains("1/3 multiply (recursive)"))
        .stdout(predicate::str::contains("    ->  b) five is 2 plus 2"))
        .stdout(predicate::str::contains("     -  wanted  5"))
        .stdout(predicate::str::contains("    ->  example of test being wrong"))
        .stdout(predicate::str::contains("3/3 factorial (recursive)"))
        .stdout(predicate::str::contains("[5/6] tests pass"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn break_on_fail_stops_after_the_failing_routine() {
    demo()
        .args(["--color", "never", "--break-on-fail"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("2/3 fibonacci (recursive)"))
        .stdout(predicate::str::contains("factorial").not())
        .stdout(predicate::str::contains("[1/2] tests pass"));
}

#[test]
fn quiet_hides_passing_routines() {
    demo()
        .args(["--color", "never", "--quiet"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("multiply (recursive)").not())
        .stdout(predicate::str::contains("fibonacci (recursive)"));
}

#[test]
fn unreadable_config_is_reported() {
    demo()
        .args(["--config", "/nowhere/lasso.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read /nowhere/lasso.toml"));
}

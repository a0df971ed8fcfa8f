mod global_configuration;
mod samples;

use lasso::RunContext;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::global_configuration::global_args;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let args = global_args();
    let config = match args.resolve_config() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("lasso-demo: {}", error);
            if let Some(cause) = std::error::Error::source(&error) {
                eprintln!("Cause: {}", cause);
            }
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?config, "configuration resolved");

    let mut ctx = RunContext::with_config(&config);

    samples::loose_expectations(&mut ctx);
    samples::run_suite(&mut ctx, args.break_on_fail);

    println!();
    println!("{}", ctx.summary());

    if ctx.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

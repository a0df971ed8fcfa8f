use clap::Parser;
use lasso::{ColorMode, Config, ConfigError};
use std::path::PathBuf;
use std::sync::OnceLock;

pub fn global_args() -> &'static Args {
    static ARGS: OnceLock<Args> = OnceLock::new();
    ARGS.get_or_init(Args::parse)
}

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
pub struct Args {
    /// Path to a lasso.toml report configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// When to color the report
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// Suppress any output except for test failures.
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Stop running the sample suite after the first failing test.
    #[arg(long, default_value_t = false)]
    pub break_on_fail: bool,
}

impl Args {
    // Command line flags win over the configuration file
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(color) = self.color {
            config.color = color;
        }
        config.quiet |= self.quiet;

        Ok(config)
    }
}

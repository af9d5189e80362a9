use clap::Parser;
use fib_core::config::{self, Config, Format, Overrides};
use fib_core::{report, runner};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fib-bench")]
#[command(about = "Times a naive recursive Fibonacci computation", version, long_about = None)]
struct Cli {
    /// Term of the sequence to compute (default 35)
    #[arg(short, long, allow_negative_numbers = true)]
    n: Option<i64>,

    /// Number of timed repetitions
    #[arg(short, long)]
    runs: Option<u32>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Cross-check every result against the iterative implementation
    /// (`--verify false` overrides `verify = true` in the config file)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    verify: Option<bool>,

    /// Config file (defaults to ./fib.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            n: self.n,
            runs: self.runs,
            format: self.format,
            verify: self.verify,
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    let cli = Cli::parse();

    let file = config::load(cli.config.as_deref()).map_err(|e| e.to_string())?;
    let config = Config::resolve(&file, &cli.overrides());
    log::debug!("resolved config: {:?}", config);

    let summary = runner::run(&config).map_err(|e| e.to_string())?;
    log::info!(
        "fib({}) finished {} run(s), mean {:?}",
        summary.n,
        summary.runs.len(),
        summary.mean
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write(&mut out, &summary, config.format).map_err(|e| e.to_string())?;
    out.flush().map_err(|e| e.to_string())
}

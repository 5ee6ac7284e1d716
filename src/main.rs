use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use tracing::debug;

use csvjson::cli::{self, Args, CliConfig};
use csvjson::conversion::ConversionEngine;
use csvjson::ConversionError;

fn main() {
    let args = Args::parse();

    if let Err(err) = run(args) {
        match err.downcast_ref::<ConversionError>() {
            Some(conversion_err) => cli::handle_error(conversion_err),
            None => eprintln!("✗ {:#}", err),
        }
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = CliConfig::from_args(args)?;

    cli::init_logging(config.default_log_filter());
    debug!(
        input = %config.paths.input.display(),
        output = %config.paths.output.display(),
        "resolved paths"
    );

    let engine = ConversionEngine::new(config.conversion_config.clone());
    let outcome = engine.convert_paths(&config.paths)?;

    cli::show_success(
        &format!("Data successfully written to {}", outcome.output_path.display()),
        config.is_quiet(),
    );

    if config.want_stats() && !config.is_quiet() {
        use std::io::Write;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "\n{}", outcome.stats).context("writing statistics")?;
    }

    Ok(())
}

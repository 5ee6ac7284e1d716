//! Command-line interface module

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::conversion::ConversionConfig;
use crate::error::{ConversionError, ConversionResult};

pub mod path_mapping;

use path_mapping::ConversionPaths;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "csvjson")]
#[command(about = "Convert <NAME>.csv into a headers/data JSON document at <NAME>.json")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Base file name without extension (reads NAME.csv, writes NAME.json)
    #[arg(value_name = "NAME")]
    pub base_name: PathBuf,

    /// Spaces per indentation level (0-8, default: 4)
    #[arg(long)]
    pub indent: Option<u8>,

    /// Output conversion statistics
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub paths: ConversionPaths,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let conversion_config = Self::create_conversion_config(&args)?;
        let paths = ConversionPaths::from_base_name(&args.base_name);

        Ok(Self {
            args,
            paths,
            conversion_config,
        })
    }

    fn create_conversion_config(args: &Args) -> ConversionResult<ConversionConfig> {
        let mut config = ConversionConfig::default();
        if let Some(indent) = args.indent {
            config = config
                .with_indent_size(indent)
                .map_err(ConversionError::configuration)?;
        }

        config.validate().map_err(ConversionError::configuration)?;

        Ok(config)
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    /// Default log filter when RUST_LOG is unset
    pub fn default_log_filter(&self) -> &'static str {
        if self.is_verbose() {
            "debug"
        } else if self.is_quiet() {
            "error"
        } else {
            "warn"
        }
    }
}

/// Install the stderr log subscriber; `RUST_LOG` wins over `default_filter`
pub fn init_logging(default_filter: &str) {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Show a success message (if not in quiet mode)
pub fn show_success(message: &str, quiet: bool) {
    if !quiet {
        println!("{}", message);
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConversionError) {
    eprintln!("✗ {}", error.user_message());
    eprintln!("\nTry 'csvjson --help' for usage information.");
}

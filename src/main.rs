//! Shape editor configuration checker.
//!
//! Resolves a config document the same way the editor does at startup and
//! reports the result.
//!
//! ```text
//! shapes-config check config.toml        # exit 1 if the document is unusable
//! shapes-config show config.toml -f json # print the fully resolved settings
//! shapes-config defaults                 # print the built-in document
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use shapes_config::config::loader::DEFAULT_CONFIG_TOML;
use shapes_config::config::{load_config, load_config_or_default, ResolvedConfig};
use shapes_config::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "shapes-config")]
#[command(about = "Validate and inspect shape editor configuration", long_about = None)]
struct Cli {
    /// Log filter (e.g. "debug"); overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a config file and report whether it is usable
    Check { path: PathBuf },
    /// Print the resolved configuration
    Show {
        path: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Format::Toml)]
        format: Format,

        /// Use built-in defaults when the file does not exist
        #[arg(long)]
        allow_missing: bool,
    },
    /// Print the built-in default document
    Defaults,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Toml,
    Json,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    match cli.command {
        Commands::Check { path } => match load_config(&path) {
            Ok(config) => {
                tracing::info!(
                    title = %config.window.title,
                    width = config.window.width,
                    height = config.window.height,
                    msaa_level = config.window.msaa_level.samples(),
                    "Configuration is valid"
                );
                println!("{}: OK", path.display());
            }
            Err(e) => {
                eprintln!("{}: {}", path.display(), e);
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Show {
            path,
            format,
            allow_missing,
        } => {
            let loaded = if allow_missing {
                load_config_or_default(&path)
            } else {
                load_config(&path)
            };
            match loaded {
                Ok(config) => print_config(&config, format)?,
                Err(e) => {
                    eprintln!("{}: {}", path.display(), e);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Commands::Defaults => print!("{}", DEFAULT_CONFIG_TOML),
    }

    Ok(ExitCode::SUCCESS)
}

fn print_config(config: &ResolvedConfig, format: Format) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        Format::Toml => print!("{}", config.to_toml_string()?),
        Format::Json => println!("{}", serde_json::to_string_pretty(config)?),
    }
    Ok(())
}

//! Code Review - terminal front end for a remote code analysis service
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use code_review::OutputFormat;
use coderev_app::config::{self, ConfigOverrides};
use color_eyre::eyre::WrapErr;

/// Code Review - submit code for analysis and browse the diagnostics
#[derive(Parser, Debug)]
#[command(name = "coderev")]
#[command(about = "Submit code to an analysis service and review the results", long_about = None)]
struct Args {
    /// Base URL of the analysis service (overrides CODEREV_ENDPOINT and config)
    #[arg(long, global = true, value_name = "URL")]
    endpoint: Option<String>,

    /// Give up on a request after this many milliseconds
    #[arg(long, global = true, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Directory holding .coderev/config.toml (defaults to the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    project: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default .coderev/config.toml
    Init,

    /// Analyze a file without the TUI and print the results
    Analyze {
        /// File to submit, or `-` for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Emit NDJSON events instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    coderev_core::logging::init()?;

    let args = Args::parse();

    let project_path = args
        .project
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let overrides = ConfigOverrides {
        endpoint: args.endpoint.clone(),
        timeout_ms: args.timeout_ms,
    };

    match args.command {
        Some(Command::Init) => {
            if config::init_config_dir(&project_path)? {
                eprintln!(
                    "✅ Created {}",
                    project_path.join(".coderev/config.toml").display()
                );
            } else {
                eprintln!("Config already exists, left untouched.");
            }
            Ok(())
        }

        Some(Command::Analyze { file, json }) => {
            let code = read_source(&file)
                .wrap_err_with(|| format!("Failed to read {}", file.display()))?;
            let settings = config::resolve_settings(&project_path, &overrides);
            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            };

            if !code_review::run_headless(settings, code, format).await? {
                std::process::exit(1);
            }
            Ok(())
        }

        None => {
            let settings = config::resolve_settings(&project_path, &overrides);
            if let Err(e) = code_review::run(settings).await {
                if let Ok(log) = coderev_core::logging::get_current_log_file() {
                    eprintln!("Logs: {}.*", log.display());
                }
                return Err(e.into());
            }
            Ok(())
        }
    }
}

fn read_source(file: &Path) -> std::io::Result<String> {
    if file.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin())
    } else {
        std::fs::read_to_string(file)
    }
}

//! Confref - command line entry point
//!
//! Parses configuration references, resolves them against a values file and
//! lists what a set of references depends on.

mod commands;
mod values;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::values::{ValuesFormat, load_values};

#[derive(Parser)]
#[command(name = "confref", version, about = "Inspect and resolve configuration references")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse references and print each descriptor as JSON
    Parse {
        /// References such as `var.region` or `aws_instance.web.*.id`
        #[arg(required = true)]
        references: Vec<String>,
    },
    /// Resolve references against a values file
    Resolve {
        /// References to resolve
        #[arg(required = true)]
        references: Vec<String>,

        /// JSON or YAML file mapping reference keys to values
        #[arg(long, env = "CONFREF_VALUES")]
        values: PathBuf,

        /// Values file format (inferred from the extension by default)
        #[arg(long, value_enum)]
        format: Option<ValuesFormat>,

        /// Fail on the first unresolved reference
        #[arg(long)]
        strict: bool,
    },
    /// List the variables, user variables and resources referenced
    Inventory {
        /// References to inspect
        #[arg(required = true)]
        references: Vec<String>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("CONFREF_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let mut out = io::stdout().lock();

    let complete = match args.command {
        Command::Parse { references } => commands::parse(&references, &mut out)?,
        Command::Resolve {
            references,
            values,
            format,
            strict,
        } => {
            let values = load_values(&values, format)?;
            commands::resolve(&references, values, strict, &mut out)?
        }
        Command::Inventory { references } => commands::inventory(&references, &mut out)?,
    };

    Ok(if complete {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

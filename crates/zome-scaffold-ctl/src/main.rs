//! zome-scaffold-ctl
//!
//! Generates Holochain integrity zome sources from a zome definition file or
//! from entry type names given on the command line.

mod cli_config;
mod commands;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::DefinitionArgs;

#[derive(Parser, Debug)]
#[command(
    name = "zome-scaffold-ctl",
    version,
    about = "Scaffold Holochain integrity zomes",
    styles = output::clap_styles()
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the integrity zome lib.rs
    Render {
        #[command(flatten)]
        source: DefinitionArgs,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a complete integrity zome crate (Cargo.toml, lib.rs, entry modules)
    Scaffold {
        #[command(flatten)]
        source: DefinitionArgs,

        /// Zome name, overriding the one in the definition file
        #[arg(short, long)]
        name: Option<String>,

        /// Directory to create the zome crate in (default: config or current directory)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Overwrite files that already exist
        #[arg(long)]
        force: bool,
    },

    /// Check that every entry type and field produces a valid Rust identifier
    Validate {
        #[command(flatten)]
        source: DefinitionArgs,
    },

    /// Create a .zome-scaffold.toml with default settings
    Init,
}

fn init_tracing(verbose: bool) {
    let default_directives = if verbose {
        "zome_scaffold_ctl=debug,zome_scaffold_sdk=debug"
    } else {
        "warn,zome_scaffold_ctl=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli_config::load_cli_config();

    match cli.command {
        Commands::Render { source, output } => {
            commands::handle_render_command(&source, output.as_deref(), &config)?
        }
        Commands::Scaffold {
            source,
            name,
            output_dir,
            force,
        } => {
            commands::handle_scaffold_command(
                &source,
                name.as_deref(),
                output_dir.as_deref(),
                force,
                &config,
            )?;
        }
        Commands::Validate { source } => commands::handle_validate_command(&source)?,
        Commands::Init => commands::handle_init_command(std::path::Path::new("."))?,
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

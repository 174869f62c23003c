//! CLI Adapter.

mod deploy;
mod install;
mod pack;
mod update;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::{AppError, InstallReport};

#[derive(Parser)]
#[command(name = "rezgo")]
#[command(version)]
#[command(about = "Quick rez installer: bootstrap a portable rez toolset", long_about = None)]
struct Cli {
    /// Settings file (defaults to rezgo.toml next to the executable)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Show diagnostic logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new rez setup in the local folder
    #[clap(visible_alias = "i")]
    Install(install::InstallArgs),
    /// Replace the installed rez of an existing toolset
    #[clap(visible_alias = "u")]
    Update {
        /// Toolset folder (defaults to the persisted toolset variable)
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,
        /// Set a remote folder as release_packages_path
        #[arg(short = 'r', long = "release", value_name = "FOLDER")]
        release: Option<String>,
        /// Download latest rez from GitHub
        #[arg(short = 'd', long = "download")]
        download: bool,
        /// Rez source archive to use instead of the bundled one
        #[arg(long, value_name = "ZIP", conflicts_with = "download")]
        rez_archive: Option<PathBuf>,
    },
    /// Pack the core folder of a toolset into a redistributable zip
    #[clap(visible_alias = "p")]
    Pack {
        /// Toolset folder containing the core folder
        toolset_dir: PathBuf,
    },
    /// Unpack a redistributable zip as a new toolset
    #[clap(visible_alias = "d")]
    Deploy {
        /// Archive produced by `pack`
        archive: PathBuf,
        /// Folder receiving the toolset
        install_root: PathBuf,
        /// Map the toolset folder to another disk unit
        #[arg(short = 'm', long = "map", value_name = "UNIT")]
        map: Option<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config.as_deref();
    let result: Result<(), AppError> = match cli.command {
        Commands::Install(args) => install::run_install(config, args),
        Commands::Update { root, release, download, rez_archive } => {
            update::run_update(config, root, release, download, rez_archive)
        }
        Commands::Pack { toolset_dir } => pack::run_pack(config, &toolset_dir),
        Commands::Deploy { archive, install_root, map } => {
            deploy::run_deploy(config, archive, install_root, map)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default filter.
fn init_tracing(verbose: bool) {
    let default = if verbose { "rezgo=debug" } else { "rezgo=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn print_report(headline: &str, report: &InstallReport) {
    println!("✅ {}: {}", headline, report.core_dir.display());
    if let Some(release) = &report.rez_release {
        println!("  rez release: {}", release);
    }
    if !report.warnings.is_empty() {
        println!("⚠️  Completed with warnings:");
        for warning in &report.warnings {
            println!("  • {}: {}", warning.step, warning.message);
        }
    }
}

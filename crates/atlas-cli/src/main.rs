mod cmd;
mod output;

use anyhow::Context;
use atlas_core::{catalog::Catalog, role::Role};
use clap::{Parser, Subcommand};
use cmd::{catalog::CatalogSubcommand, run::RunArgs};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "atlas",
    about = "ATLAS CONTROL console — role-gated directives with validation, risk advisory, and audit",
    version,
    propagate_version = true
)]
struct Cli {
    /// Session clearance level (OPERATOR, MANAGER, ADMINISTRATOR, SYSTEM_CORE)
    #[arg(long, global = true, env = "ATLAS_ROLE", default_value = "ADMINISTRATOR")]
    role: String,

    /// Catalog YAML replacing the built-in directive set
    #[arg(long, global = true, env = "ATLAS_CATALOG")]
    catalog: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List directives visible at the current clearance
    Directives,

    /// Show one directive and its parameter schema
    Show {
        /// Catalog id (e.g. act_003)
        action_id: String,
    },

    /// Validate parameters and execute a directive end to end
    Run(RunArgs),

    /// Inspect and validate catalog files
    Catalog {
        #[command(subcommand)]
        subcommand: CatalogSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    if let Err(e) = dispatch(cli) {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> anyhow::Result<()> {
    let role: Role = cli.role.parse()?;
    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load catalog '{}'", path.display()))?,
        None => Catalog::builtin(),
    };

    match cli.command {
        Commands::Directives => cmd::directives::run(&catalog, role, cli.json),
        Commands::Show { action_id } => cmd::show::run(&catalog, role, &action_id, cli.json),
        Commands::Run(args) => cmd::run::run(&catalog, role, args, cli.json),
        Commands::Catalog { subcommand } => cmd::catalog::run(subcommand, cli.json),
    }
}

//! Hero Tool CLI
//!
//! Browse the hero catalog, inspect heroes and run roster matchups

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use hero_core::Role;
#[cfg(feature = "cli")]
use hero_tool::Overrides;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "hero_tool")]
#[command(about = "Look up heroes and analyze counter matchups", long_about = None)]
struct Cli {
    /// Hero data JSON file (overrides HERO_DATA_PATH)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Roster shape, e.g. "Tank=1,DPS=2,Support=2" (overrides HERO_ROSTER_SHAPE)
    #[arg(long, global = true)]
    shape: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// List heroes, optionally filtered by name and role
    List {
        /// Case-insensitive name substring
        #[arg(long, default_value = "")]
        query: String,

        /// Allowed role (repeatable); all roles when omitted
        #[arg(long = "role")]
        roles: Vec<Role>,
    },

    /// Show one hero's details
    Show {
        /// Exact hero name
        name: String,
    },

    /// Compare two drafted sides
    Matchup {
        /// Hero on your team (repeatable)
        #[arg(long = "ally")]
        allies: Vec<String>,

        /// Hero on the enemy team (repeatable)
        #[arg(long = "enemy")]
        enemies: Vec<String>,
    },

    /// Export one hero to <name>.json
    Export {
        /// Exact hero name
        name: String,

        /// Output directory (overrides HERO_EXPORT_DIR)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Print one hero as JSON for pasting
    Copy {
        /// Exact hero name
        name: String,
    },

    /// List the reference sources behind the data
    Sources,
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = hero_tool::resolve_config(&Overrides {
        data: cli.data,
        shape: cli.shape,
    })?;
    log::debug!("Using data file {}", config.data_path.display());

    run(cli.command, &config)
}

#[cfg(feature = "cli")]
fn run(command: Commands, config: &hero_core::HeroConfig) -> Result<()> {
    let open = || hero_tool::open_session(config);

    match command {
        Commands::List { query, roles } => {
            println!("{}", hero_tool::list_heroes(&mut open(), &query, &roles));
        }

        Commands::Show { name } => {
            println!("{}", hero_tool::show_hero(&mut open(), &name)?);
        }

        Commands::Matchup { allies, enemies } => {
            println!("{}", hero_tool::run_matchup(&mut open(), &allies, &enemies)?);
        }

        Commands::Export { name, dir } => {
            let dir = dir.unwrap_or_else(|| config.export_dir.clone());
            let path = hero_tool::export_hero(&mut open(), &name, &dir)?;
            println!("✅ Exported {}", path.display());
        }

        Commands::Copy { name } => {
            println!("{}", hero_tool::copy_hero(&mut open(), &name)?);
        }

        Commands::Sources => {
            println!("📚 Sources & References\n{}", hero_tool::sources_text());
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("hero_tool CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}

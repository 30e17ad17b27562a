//! Terminal front end for the Sagenweg adventure engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Save file used when neither `--save` nor `SG_SAVE` is given.
const DEFAULT_SAVE: &str = "sagenweg-save.json";

#[derive(Parser)]
#[command(
    name = "sg",
    about = "Sagenweg: branching adventures with d20 checks",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a character and start a new adventure
    Play {
        /// Adventure file, relative to --dir
        adventure: String,

        /// Character name
        #[arg(short, long)]
        name: String,

        /// Race id (see `sg races`)
        #[arg(short, long)]
        race: String,

        /// Class id (see `sg classes`)
        #[arg(short, long)]
        class: String,

        /// Directory adventure references are resolved against
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// RNG seed for reproducible checks
        #[arg(long)]
        seed: Option<u64>,

        /// Save file
        #[arg(long, env = "SG_SAVE", default_value = DEFAULT_SAVE)]
        save: PathBuf,

        /// Race and class catalog (default: built-in)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Show check results without the rolling animation
        #[arg(long)]
        no_animation: bool,
    },

    /// Resume the saved adventure
    Continue {
        /// Directory adventure references are resolved against
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// RNG seed for reproducible checks
        #[arg(long)]
        seed: Option<u64>,

        /// Save file
        #[arg(long, env = "SG_SAVE", default_value = DEFAULT_SAVE)]
        save: PathBuf,

        /// Race and class catalog (default: built-in)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Show check results without the rolling animation
        #[arg(long)]
        no_animation: bool,
    },

    /// List the adventures in a directory
    List {
        /// Directory to scan for adventure files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Show or delete the saved adventure
    Save {
        /// Save file
        #[arg(long, env = "SG_SAVE", default_value = DEFAULT_SAVE)]
        save: PathBuf,

        /// Delete the save instead of showing it
        #[arg(long)]
        delete: bool,
    },

    /// List playable races
    Races {
        /// Race and class catalog (default: built-in)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// List playable classes
    Classes {
        /// Race and class catalog (default: built-in)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Load an adventure and report structural problems
    Check {
        /// Adventure file
        adventure: PathBuf,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            adventure,
            name,
            race,
            class,
            dir,
            seed,
            save,
            catalog,
            no_animation,
        } => commands::play::run(&commands::play::PlayArgs {
            adventure: &adventure,
            name: &name,
            race: &race,
            class: &class,
            dir: &dir,
            seed,
            save: &save,
            catalog: catalog.as_deref(),
            animate: !no_animation,
        }),
        Commands::Continue {
            dir,
            seed,
            save,
            catalog,
            no_animation,
        } => commands::resume::run(&dir, seed, &save, catalog.as_deref(), !no_animation),
        Commands::List { dir } => commands::list::run(&dir),
        Commands::Save { save, delete } => commands::save::run(&save, delete),
        Commands::Races { catalog } => commands::catalog::races(catalog.as_deref()),
        Commands::Classes { catalog } => commands::catalog::classes(catalog.as_deref()),
        Commands::Check { adventure } => commands::check::run(&adventure),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

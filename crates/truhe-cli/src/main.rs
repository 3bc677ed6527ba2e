//! CLI frontend for the Truhe environment-interaction engine.

mod commands;
mod session;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "truhe",
    about = "Truhe — environment interactions for tabletop scenes",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a directory with a sample scene file
    Init {
        /// Directory to create
        dir: PathBuf,
    },

    /// List the tokens in a scene
    Tokens {
        /// Scene file (JSON)
        scene: PathBuf,
    },

    /// Show the interaction catalog of an environment token
    Items {
        /// Scene file (JSON)
        scene: PathBuf,

        /// Token name (case-insensitive)
        token: String,
    },

    /// Play an interactive session against a scene
    Play {
        /// Scene file (JSON)
        scene: PathBuf,

        /// Player name, matched against token ownership
        #[arg(short, long, default_value = "player")]
        user: String,

        /// Join with GM privileges
        #[arg(long)]
        gm: bool,

        /// RNG seed for deterministic rolls
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Keep the interaction dialog open after using an item
        #[arg(long)]
        no_auto_close: bool,

        /// Ask for proficiency on attacks instead of assuming it
        #[arg(long)]
        ask_proficiency: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { dir } => commands::init::run(&dir),
        Commands::Tokens { scene } => commands::tokens::run(&scene),
        Commands::Items { scene, token } => commands::items::run(&scene, &token),
        Commands::Play {
            scene,
            user,
            gm,
            seed,
            no_auto_close,
            ask_proficiency,
        } => commands::play::run(&scene, &user, gm, seed, no_auto_close, ask_proficiency),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

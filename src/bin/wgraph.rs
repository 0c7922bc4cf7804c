//! CLI entry point for the `wgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use wordgraph::cli::commands;
use wordgraph::GraphConfig;

#[derive(Parser)]
#[command(
    name = "wgraph",
    about = "wgraph — word ladders and dependency ordering over text-described graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest word ladder between two words
    Ladder {
        /// Path to the word list
        file: PathBuf,
        /// Start word (prompted for when omitted)
        #[arg(long)]
        from: Option<String>,
        /// End word (prompted for when omitted)
        #[arg(long)]
        to: Option<String>,
    },
    /// Show the distance of every node from a source
    Distances {
        /// Path to the graph file
        file: PathBuf,
        /// Source node name
        source: String,
    },
    /// Print a topological order of a vertex/edge file
    Order {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Print every adjacency entry
    Adjacency {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Display information about a graph file
    Info {
        /// Path to the graph file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = match GraphConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(commands::exit_code(&e));
        }
    };

    let result = match cli.command {
        Commands::Ladder { file, from, to } => {
            commands::cmd_ladder(&file, &config, from, to, json)
        }
        Commands::Distances { file, source } => {
            commands::cmd_distances(&file, &config, &source, json)
        }
        Commands::Order { file } => commands::cmd_order(&file, &config, json),
        Commands::Adjacency { file } => commands::cmd_adjacency(&file, &config, json),
        Commands::Info { file } => commands::cmd_info(&file, &config, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(commands::exit_code(&e));
    }
}

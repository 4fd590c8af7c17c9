//! Binary entrypoint for the Dragon's Bane CLI.
//!
//! Commands:
//! - `new [--name <NAME>] [--seed <N>]` - start a new adventure
//! - `load [--seed <N>]` - resume the saved game
//! - `init` - create a starter `config.toml`
//! - `how-to-play` - print the rules and controls
//! - `credits` - print the credits
//!
//! See the library crate docs for module-level details: `dragons_bane::`.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::io;
use std::path::Path;

use dragons_bane::config::Config;
use dragons_bane::errors::SaveError;
use dragons_bane::game::{render, GameSession, SaveStore, Terminal};
use dragons_bane::validation::validate_player_name;

#[derive(Parser)]
#[command(name = "dragons-bane")]
#[command(about = "A text adventure: gather three medallions and seal away the dragon")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new game
    New {
        /// Hero name (skips the intro story when given)
        #[arg(short, long)]
        name: Option<String>,
        /// World seed (overrides game.seed from the config)
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Resume the saved game
    Load {
        /// World seed used to regenerate the map
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Write a default configuration file
    Init,
    /// Show the rules and controls
    HowToPlay,
    /// Show the credits
    Credits,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // A missing config file is normal; a broken one is reported once logging is up.
    let (config, config_error) = match cli.command {
        Commands::Init => (Config::default(), None),
        _ if !Path::new(&cli.config).exists() => (Config::default(), None),
        _ => match Config::load(&cli.config) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Config::default(), Some(e)),
        },
    };
    init_logging(&config, cli.verbose);
    if let Some(e) = config_error {
        warn!("{} (falling back to defaults)", e);
    }

    match cli.command {
        Commands::New { name, seed } => {
            let seed = resolve_seed(seed, &config);
            let store = SaveStore::new(config.storage.data_path(), &config.storage.save_slot);
            let stdin = io::stdin();
            let mut term = Terminal::new(
                stdin.lock(),
                io::stdout().lock(),
                config.game.typewriter_delay_ms,
            );
            let name = match name {
                Some(n) => validate_player_name(&n)?,
                None => term.intro(&config.game.default_player_name)?,
            };
            let mut session = GameSession::new_game(&name, &config.game, seed, store);
            let status = term.run(&mut session)?;
            info!("session ended: {:?}", status);
        }
        Commands::Load { seed } => {
            let seed = resolve_seed(seed, &config);
            let store = SaveStore::new(config.storage.data_path(), &config.storage.save_slot);
            let record = match store.load() {
                Ok(record) => record,
                Err(SaveError::NotFound(path)) => {
                    info!("no save at {}", path.display());
                    println!("No saved game found!");
                    return Ok(());
                }
                Err(e) => {
                    warn!("load failed: {}", e);
                    println!("Failed to load game: {}", e);
                    return Ok(());
                }
            };
            let mut session = GameSession::restore(record, &config.game, seed, store);
            let stdin = io::stdin();
            let mut term = Terminal::new(
                stdin.lock(),
                io::stdout().lock(),
                config.game.typewriter_delay_ms,
            );
            let status = term.run(&mut session)?;
            info!("session ended: {:?}", status);
        }
        Commands::Init => {
            if Path::new(&cli.config).exists() {
                println!("{} already exists; leaving it untouched.", cli.config);
            } else {
                Config::create_default(&cli.config)?;
                println!("Wrote default configuration to {}", cli.config);
            }
        }
        Commands::HowToPlay => print!("{}", render::how_to_play()),
        Commands::Credits => print!("{}", render::credits()),
    }

    Ok(())
}

/// CLI flag, then config, then a fresh random seed.
fn resolve_seed(cli_seed: Option<u64>, config: &Config) -> u64 {
    let seed = cli_seed
        .or(config.game.seed)
        .unwrap_or_else(rand::random::<u64>);
    info!("world seed {}", seed);
    seed
}

fn init_logging(config: &Config, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config
            .logging
            .level
            .parse::<log::LevelFilter>()
            .unwrap_or(log::LevelFilter::Warn),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config.logging.file.as_ref().and_then(|file| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
            .ok()
    });

    if let Some(f) = log_file {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        // On a TTY the game owns the screen, so log lines go to the file only.
        let is_tty = atty::is(atty::Stream::Stdout);

        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());

            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }

            if is_tty {
                Ok(())
            } else {
                writeln!(fmt, "{}", line)
            }
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}

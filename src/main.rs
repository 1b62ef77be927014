use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use layoutkit::cli::{execute, Command, Flow};
use layoutkit::{init_logging, Config, DesignerState, FileStore, KeyValueStore, MemoryStore};
use layoutkit::{ShapeGenerator, BUILD_DATE, VERSION};

/// Rectangle layout editor driven by line commands on stdin
#[derive(Parser, Debug)]
#[command(name = "layoutkit")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file (.toml or .json)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory for users and saved layouts, overriding the config
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Keep everything in memory; nothing is written to disk
    #[arg(long)]
    ephemeral: bool,

    /// Seed for the shape generator, for reproducible canvases
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging()?;
    tracing::info!("LayoutKit {} (built {})", VERSION, BUILD_DATE);

    let config_path = args.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load_or_default(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    if let Some(dir) = &args.data_dir {
        config.storage.data_dir = dir.clone();
    }
    config.validate().context("invalid configuration")?;

    let store: Box<dyn KeyValueStore> = if args.ephemeral {
        tracing::info!("Using in-memory storage");
        Box::new(MemoryStore::new())
    } else {
        let dir = &config.storage.data_dir;
        tracing::info!("Using storage at {}", dir.display());
        Box::new(
            FileStore::open(dir)
                .with_context(|| format!("failed to open storage at {}", dir.display()))?,
        )
    };

    let generator = match args.seed {
        Some(seed) => ShapeGenerator::with_seed(config.canvas.width, config.canvas.height, seed),
        None => ShapeGenerator::new(config.canvas.width, config.canvas.height),
    };
    let mut state = DesignerState::open_with_generator(store, config, generator)?;

    run(&mut state)
}

fn run<S: KeyValueStore>(state: &mut DesignerState<S>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    match state.current_user() {
        Some(user) => writeln!(stdout, "signed in as {} ({})", user.name, user.id)?,
        None => writeln!(stdout, "not signed in; use 'login <name>'")?,
    }
    writeln!(
        stdout,
        "{} shapes on the canvas; type 'help' for commands",
        state.canvas.shape_count()
    )?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(stdout, "error: {:#}", err)?;
                continue;
            }
        };

        if execute(state, command, &mut stdout)? == Flow::Quit {
            break;
        }
        stdout.flush()?;
    }

    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use pawnchess::board::layout::Setup;
use pawnchess::config::GameConfig;
use pawnchess::console::Console;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Two-player chess with pawns only", long_about = None)]
struct Args {
    /// Path to a JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting layout, e.g. "8/pppppppp/8/8/8/8/PPPPPPPP/8 w" (default: startpos)
    #[arg(long)]
    position: Option<String>,

    /// Log moves and rejections to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let cfg = match &args.config {
        Some(path) => GameConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => GameConfig::default(),
    };
    let setup = match &args.position {
        Some(text) => Setup::parse(text, &cfg.board).with_context(|| format!("invalid position '{}'", text))?,
        None => Setup::startpos(&cfg.board),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(cfg, stdin.lock(), stdout.lock());
    let result = console.run(setup)?;
    log::info!("game finished: {:?}", result);
    Ok(())
}

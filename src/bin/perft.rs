use anyhow::Context;
use pawnchess::board::layout::Setup;
use pawnchess::config::GameConfig;
use pawnchess::perft::{divide, perft, subtree};
use pawnchess::rules::Rules;
use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Perft driver for pawn chess")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Layout string or "startpos"
    #[arg(value_name = "LAYOUT", default_value = "startpos")]
    layout: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
    /// Print the count below every root move
    #[arg(long, default_value_t = false)]
    divide: bool,
    /// Path to a JSON config file (board geometry)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use rayon::prelude::*;
    use std::time::Instant;

    env_logger::init();
    let args = Args::parse();
    let cfg = match &args.config {
        Some(path) => GameConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => GameConfig::default(),
    };
    let rules = Rules::new(cfg.board);
    let setup = Setup::parse(&args.layout, &cfg.board).with_context(|| format!("invalid layout '{}'", args.layout))?;
    let depth = args.depth;

    if args.divide {
        let mut total = 0u64;
        for (mv, n) in divide(&rules, &setup.board, setup.to_move, None, depth) {
            println!("{mv}: {n}");
            total += n;
        }
        println!("nodes: {total}");
        return Ok(());
    }

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build().context("thread pool")?;
    let (nodes, dt) = pool.install(|| {
        let t0 = Instant::now();
        let nodes = if args.threads <= 1 || depth == 0 {
            perft(&rules, &setup.board, setup.to_move, None, depth)
        } else {
            let root_moves = rules.legal_moves(&setup.board, setup.to_move, None);
            root_moves.par_iter()
                .filter_map(|outcome| subtree(&rules, &setup.board, setup.to_move, outcome, depth))
                .map(|(_, n)| n)
                .sum::<u64>()
        };
        (nodes, t0.elapsed().as_secs_f64())
    });
    log::debug!("perft depth {} threads {} done in {:.3}s", depth, args.threads, dt);

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}

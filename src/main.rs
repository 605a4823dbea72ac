use anyhow::{bail, Context, Result};
use console::style;
use indicatif::ProgressBar;
use rayon::prelude::*;

use knight_paths::{search, Board, Square, Trace};

const USAGE: &str = "\
Usage: knight-paths [SIZE] START GOAL
       knight-paths --survey [SIZE]

Squares are zero-based ROW,COL (e.g. 0,0 or 3,7); SIZE defaults to 8.";

fn main() -> Result<()> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    match args.as_slice() {
        [flag, rest @ ..] if flag == "--survey" => {
            let board = match rest {
                [] => Board::default(),
                [size] => Board::new(parse_size(size)?),
                _ => bail!("{USAGE}"),
            };
            survey(&board)
        }
        [start, goal] => run(&Board::default(), start, goal),
        [size, start, goal] => run(&Board::new(parse_size(size)?), start, goal),
        _ => bail!("{USAGE}"),
    }
}

fn parse_size(s: &str) -> Result<u8> {
    s.parse::<u8>()
        .ok()
        .filter(|size| (1..=16).contains(size))
        .with_context(|| format!("Invalid board size {s:?}, expected 1 to 16"))
}

fn run(board: &Board, start: &str, goal: &str) -> Result<()> {
    let start = start.parse::<Square>().context("Invalid start square")?;
    let goal = goal.parse::<Square>().context("Invalid goal square")?;

    let mut bfs_explored = 0u32;
    let bfs = search::bfs(board, start, goal, || bfs_explored += 1)?
        .context("No knight path exists")?;
    let mut dfs_explored = 0u32;
    let dfs = search::dfs(board, start, goal, || dfs_explored += 1)?
        .context("No knight path exists")?;

    print!("{}", Trace { board, path: &bfs });
    report("bfs", &bfs, bfs_explored);
    report("dfs", &dfs, dfs_explored);
    Ok(())
}

fn report(name: &str, path: &[Square], explored: u32) {
    let moves = path
        .iter()
        .map(|sq| sq.to_string())
        .collect::<Vec<_>>()
        .join(" -> ");
    println!(
        "{}: {} moves, {} squares explored: {}",
        style(name).bold(),
        style(path.len() - 1).green(),
        explored,
        moves,
    );
}

struct PairStat {
    dist: Option<usize>,
    dfs_len: Option<usize>,
    bfs_explored: u64,
    dfs_explored: u64,
}

/// Runs both searches over every ordered pair of distinct squares and
/// reports aggregate efficiency numbers. Searches share the board but own
/// all their state, so the sweep parallelizes freely.
fn survey(board: &Board) -> Result<()> {
    let squares = board.squares().collect::<Vec<_>>();
    let pairs = squares
        .iter()
        .flat_map(|&a| squares.iter().map(move |&b| (a, b)))
        .filter(|(a, b)| a != b)
        .collect::<Vec<_>>();
    if pairs.is_empty() {
        bail!("Nothing to survey on a {0}x{0} board", board.size());
    }

    let bar = ProgressBar::new(pairs.len() as u64);
    let stats = pairs
        .par_iter()
        .map(|&(start, goal)| -> Result<PairStat> {
            let mut bfs_explored = 0u64;
            let bfs = search::bfs(board, start, goal, || bfs_explored += 1)?;
            let mut dfs_explored = 0u64;
            let dfs = search::dfs(board, start, goal, || dfs_explored += 1)?;
            bar.inc(1);
            Ok(PairStat {
                dist: bfs.map(|path| path.len() - 1),
                dfs_len: dfs.map(|path| path.len() - 1),
                bfs_explored,
                dfs_explored,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    bar.finish_and_clear();

    let total = stats.len();
    let reachable = stats.iter().filter(|s| s.dist.is_some()).count();
    let max_dist = stats.iter().filter_map(|s| s.dist).max().unwrap_or(0);
    let mean_dist =
        stats.iter().filter_map(|s| s.dist).sum::<usize>() as f64 / reachable.max(1) as f64;
    let mean_bfs = stats.iter().map(|s| s.bfs_explored).sum::<u64>() as f64 / total as f64;
    let mean_dfs = stats.iter().map(|s| s.dfs_explored).sum::<u64>() as f64 / total as f64;
    let worst_detour = stats
        .iter()
        .filter_map(|s| Some(s.dfs_len? as f64 / s.dist? as f64))
        .fold(0.0_f64, f64::max);

    let size = board.size();
    println!("{total} ordered pairs on the {size}x{size} board, {reachable} reachable");
    println!(
        "{}: max distance {max_dist}, mean distance {mean_dist:.2}, mean explored {mean_bfs:.1}",
        style("bfs").bold(),
    );
    println!(
        "{}: mean explored {mean_dfs:.1}, worst path {worst_detour:.1}x the shortest",
        style("dfs").bold(),
    );
    Ok(())
}

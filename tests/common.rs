use std::path::Path;

use anyhow::{ensure, Result};
use knight_paths::{Board, Square};

#[allow(unused)]
pub const SEPARATOR: &str = "================\n";
pub const TEST_DIR: &str = "tests";
pub const EXTENSION: &str = "path";

/// Checks that `path` is a well-formed knight path from `start` to `goal`:
/// correct endpoints, every consecutive pair one knight move apart.
#[allow(unused)]
pub fn check_path(board: &Board, path: &[Square], start: Square, goal: Square) -> Result<()> {
    ensure!(path.first() == Some(&start), "path does not start at {start}");
    ensure!(path.last() == Some(&goal), "path does not end at {goal}");
    for pair in path.windows(2) {
        ensure!(
            board.neighbors(pair[0]).contains(&pair[1]),
            "{} -> {} is not a knight move",
            pair[0],
            pair[1],
        );
    }
    Ok(())
}

/// Runs each `*.path` scenario file under `tests/<subdir>` through `f` and
/// compares the regenerated content against the file. Set `UPDATE_EXPECT=1`
/// to rewrite the files instead.
#[allow(unused)]
pub fn run_tests(subdir: &str, mut f: impl FnMut(&str) -> Result<String>) {
    let mut tests = std::fs::read_dir(Path::new(TEST_DIR).join(subdir))
        .unwrap()
        .filter_map(|ent| {
            let path = ent.unwrap().path();
            if path.extension().map_or(true, |ext| ext != EXTENSION) {
                return None;
            }
            let name = path.file_stem().unwrap().to_str().unwrap().to_owned();
            Some((name, path))
        })
        .collect::<Vec<_>>();
    tests.sort();

    let do_update_tests = std::env::var("UPDATE_EXPECT").map_or(false, |v| v == "1");

    let mut failed_cnt = 0;
    for (name, path) in &tests {
        eprint!("{name}: ");
        let content = std::fs::read_to_string(path).unwrap();
        match f(&content) {
            Ok(got) if got == content => eprintln!("\x1B[32mOK\x1B[0m"),
            Ok(got) if do_update_tests => {
                std::fs::write(path, got).unwrap();
                eprintln!("\x1B[33mUpdated\x1B[0m");
            }
            Ok(got) => {
                eprintln!("\x1B[31mFAILED\x1B[0m\nExpected:\n{content}Got:\n{got}");
                failed_cnt += 1;
            }
            Err(err) => {
                eprintln!("\x1B[31mFAILED\x1B[0m\n{:?}", err);
                failed_cnt += 1;
            }
        }
    }

    if failed_cnt != 0 {
        eprintln!("{failed_cnt}/{} tests failed", tests.len());
        std::process::exit(1);
    }
}

/// Runs named property checks with the same reporting as [`run_tests`].
#[allow(unused)]
pub fn run_checks(checks: &[(&str, fn() -> Result<()>)]) {
    let mut failed_cnt = 0;
    for (name, check) in checks {
        eprint!("{name}: ");
        match check() {
            Ok(()) => eprintln!("\x1B[32mOK\x1B[0m"),
            Err(err) => {
                eprintln!("\x1B[31mFAILED\x1B[0m\n{:?}", err);
                failed_cnt += 1;
            }
        }
    }

    if failed_cnt != 0 {
        eprintln!("{failed_cnt}/{} checks failed", checks.len());
        std::process::exit(1);
    }
}

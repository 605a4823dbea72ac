//! Knight-path searches over a [`Board`].
//!
//! Both algorithms share one state shape: an insertion-ordered map from each
//! discovered square to the entry index of the square that discovered it.
//! The map doubles as the discovered set (a square is inserted at most once,
//! so its predecessor is fixed at first discovery) and as the record the
//! path is reconstructed from once the goal is processed.

use indexmap::map::Entry;

use crate::{Board, Error, Square};

type IndexMap<K, V> = indexmap::IndexMap<K, V, fxhash::FxBuildHasher>;

/// Shortest knight path from `start` to `goal`, inclusive of both.
///
/// The frontier is FIFO: `cursor` splits the insertion-ordered map into
/// explored entries (before it) and frontier entries (at or after it), so
/// squares are processed in non-decreasing distance from `start` and the
/// first time the goal is processed it was reached along a fewest-moves
/// path. Ties between equal-length paths fall to neighbor order.
///
/// `on_step` runs once per square removed from the frontier. Returns
/// `Ok(None)` if the frontier drains without reaching `goal`.
pub fn bfs(
    board: &Board,
    start: Square,
    goal: Square,
    mut on_step: impl FnMut(),
) -> Result<Option<Vec<Square>>, Error> {
    check_bounds(board, start, goal)?;

    let mut parent = IndexMap::default();
    parent.insert(start, !0usize); // Sentinel.

    let mut cursor = 0;
    loop {
        if cursor >= parent.len() {
            return Ok(None);
        }
        let (&sq, _) = parent.get_index(cursor).unwrap();
        on_step();
        if sq == goal {
            return Ok(Some(walk_back(&parent, cursor)));
        }
        for &next in board.neighbors(sq) {
            parent.entry(next).or_insert(cursor);
        }
        cursor += 1;
    }
}

/// Some knight path from `start` to `goal`, with no length guarantee.
///
/// Same discovered-square map as [`bfs`], but the frontier is a LIFO stack
/// of entry indices: neighbors pushed last are popped first, so the search
/// commits to one branch fully before backtracking. A square keeps the
/// predecessor that first discovered it even if a later branch meets it
/// again.
pub fn dfs(
    board: &Board,
    start: Square,
    goal: Square,
    mut on_step: impl FnMut(),
) -> Result<Option<Vec<Square>>, Error> {
    check_bounds(board, start, goal)?;

    let mut parent = IndexMap::default();
    parent.insert(start, !0usize); // Sentinel.

    let mut stack = vec![0usize];
    while let Some(cursor) = stack.pop() {
        let (&sq, _) = parent.get_index(cursor).unwrap();
        on_step();
        if sq == goal {
            return Ok(Some(walk_back(&parent, cursor)));
        }
        for &next in board.neighbors(sq) {
            if let Entry::Vacant(slot) = parent.entry(next) {
                stack.push(slot.index());
                slot.insert(cursor);
            }
        }
    }
    Ok(None)
}

fn check_bounds(board: &Board, start: Square, goal: Square) -> Result<(), Error> {
    for sq in [start, goal] {
        if !board.contains(sq) {
            return Err(Error::OutOfBounds(sq, board.size()));
        }
    }
    Ok(())
}

/// Walks predecessor links from the entry at `goal_idx` back to the
/// sentinel, then reverses so the path reads start to goal.
fn walk_back(parent: &IndexMap<Square, usize>, goal_idx: usize) -> Vec<Square> {
    let mut path = std::iter::successors(Some(goal_idx), |&i| {
        let (_, &up) = parent.get_index(i).unwrap();
        (up != !0usize).then_some(up)
    })
    .map(|i| *parent.get_index(i).unwrap().0)
    .collect::<Vec<_>>();
    path.reverse();
    path
}

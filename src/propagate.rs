//! Restoring local arc-consistency after a cell changes.
use crate::board::Board;
use crate::grammar;
use crate::position::{Position, OFFSETS};
use std::collections::VecDeque;

/// A tentative placement propagated to an empty superposition somewhere on the board.
///
/// This is a branch pruner, not one of the crate's public [`crate::Error`] variants: the
/// search driver treats it as "discard this candidate and try the next one", never as
/// something a caller of [`crate::solve`] or [`crate::generate`] needs to see.
#[derive(Debug, Clone, Copy)]
pub struct Infeasible;

/// Restores arc-consistency in the eight-neighbour closure of `origin`, transitively.
///
/// Narrows every reachable neighbour's superposition to what the grammar in
/// [`crate::grammar`] still permits given its source, re-queueing any cell that actually
/// shrank. A per-pass "already queued" set (`queued`) keeps a single propagation pass from
/// entering the same position twice while it's still pending.
pub fn propagate(board: &mut Board, origin: Position) -> Result<(), Infeasible> {
    let width = board.width();
    let height = board.height();
    let mut queued = vec![false; width as usize * height as usize];
    let mut queue = VecDeque::new();

    queued[origin.index(width)] = true;
    queue.push_back(origin);

    while let Some(p) = queue.pop_front() {
        queued[p.index(width)] = false;
        let source = board.cell(p);

        for &(dx, dy) in OFFSETS.iter() {
            let Some(n) = p.offset(dx, dy, width, height) else {
                continue;
            };
            let current = board.cell(n);
            if current.is_collapsed() {
                continue;
            }

            let allowed = grammar::allowed_union(source, (dx, dy));
            let narrowed = current.intersect(allowed);
            if narrowed == current {
                continue;
            }
            if narrowed.is_empty() {
                return Err(Infeasible);
            }

            board.place(n, narrowed);
            let idx = n.index(width);
            if !queued[idx] {
                queued[idx] = true;
                queue.push_back(n);
            }
        }
    }

    Ok(())
}

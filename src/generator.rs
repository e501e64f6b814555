//! Puzzle generation: run the search with no clues and an empty hint set, then derive
//! clues and sample a handful of cells back out as hints.
use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::constraints::Clues;
use crate::error::Error;
use crate::hint::{Hint, HintLabel};
use crate::label::{Label, Tile};
use crate::position::Position;
use crate::solver::search;

/// Retries attempted against an unlucky empty-board search before surfacing
/// [`Error::NoSolution`] for a ship multiset that cannot fit the board at all.
const MAX_ATTEMPTS: u32 = 64;

/// The default hint count when the caller passes `resolution: None`.
const DEFAULT_RESOLUTION: usize = 2;

/// Generates a puzzle: a board satisfying `ship_multiset` with no other constraints,
/// projected down to row/column clues plus a small set of sampled hints sufficient to
/// make it solvable.
pub fn generate<R: Rng + ?Sized>(
    width: u16,
    height: u16,
    ship_multiset: &BTreeMap<u16, u16>,
    resolution: Option<usize>,
    rng: &mut R,
) -> Result<(Vec<Hint>, Vec<u16>, Vec<u16>), Error> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidInput("board dimensions must be positive".into()));
    }
    let longest_side = width.max(height);
    let total_ship_cells: u32 = ship_multiset.iter().map(|(&len, &count)| len as u32 * count as u32).sum();
    for &length in ship_multiset.keys() {
        if length == 0 || length > longest_side {
            return Err(Error::InvalidInput(format!(
                "ship length {length} does not fit a {width}x{height} board"
            )));
        }
    }
    if total_ship_cells > width as u32 * height as u32 {
        return Err(Error::InvalidInput(format!(
            "ship multiset covers {total_ship_cells} cells but the board only has {}",
            width as u32 * height as u32
        )));
    }

    let clues = Clues::new(None, None, ship_multiset);
    let board = (0..MAX_ATTEMPTS)
        .find_map(|_| search(&Board::new(width, height), &clues, rng))
        .ok_or(Error::NoSolution)?;

    let projected = project(&board);
    let row_clues = projected
        .iter()
        .map(|row| row.iter().filter(|&&t| t == Tile::Ship).count() as u16)
        .collect();
    let column_clues = (0..width as usize)
        .map(|x| projected.iter().filter(|row| row[x] == Tile::Ship).count() as u16)
        .collect();

    let mut ship_cells: Vec<Position> = board
        .positions()
        .filter(|&pos| board.cell(pos).collapsed_label().is_some_and(Label::is_ship))
        .collect();
    ship_cells.shuffle(rng);
    let sample_count = resolution.unwrap_or(DEFAULT_RESOLUTION).min(ship_cells.len());

    let hints = ship_cells[..sample_count]
        .iter()
        .map(|&pos| Hint::new(pos.x, pos.y, classify(&board, pos)))
        .collect();

    Ok((hints, row_clues, column_clues))
}

fn project(board: &Board) -> Vec<Vec<Tile>> {
    (0..board.height())
        .map(|y| board.row(y).map(|sp| Tile::from(sp.collapsed_label().expect("board must be collapsed"))).collect())
        .collect()
}

/// Classifies a collapsed ship cell into the richer hint alphabet by counting its
/// four-connected ship neighbours: zero is an isolated `Single`, two a `Middle`. One
/// neighbour means `pos` is the capped (closed) end of the ship, so the cap is named
/// for the *opposite* side from that neighbour (see [`crate::hint::expand_hint`]): a
/// ship neighbour above means the ship continues upward and `pos` is capped below, so
/// it classifies as `CapDown`, and so on. Kept as a defensive fallback for a water cell
/// (returning a plain [`HintLabel::Water`]) in case a caller ever widens the sampling
/// pool beyond ship cells; the sampling above never does.
fn classify(board: &Board, pos: Position) -> HintLabel {
    let width = board.width();
    let height = board.height();

    if !board.cell(pos).collapsed_label().is_some_and(Label::is_ship) {
        return HintLabel::Water;
    }

    let is_ship_at = |n: Option<Position>| {
        n.is_some_and(|n| board.cell(n).collapsed_label().is_some_and(Label::is_ship))
    };
    let up = is_ship_at(pos.offset(0, -1, width, height));
    let down = is_ship_at(pos.offset(0, 1, width, height));
    let left = is_ship_at(pos.offset(-1, 0, width, height));
    let right = is_ship_at(pos.offset(1, 0, width, height));

    match (up, down, left, right) {
        (false, false, false, false) => HintLabel::Single,
        (true, false, false, false) => HintLabel::CapDown,
        (false, true, false, false) => HintLabel::CapUp,
        (false, false, true, false) => HintLabel::CapRight,
        (false, false, false, true) => HintLabel::CapLeft,
        _ => HintLabel::Middle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn multiset(pairs: &[(u16, u16)]) -> BTreeMap<u16, u16> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_generate_round_trips_through_solve() {
        let ships = multiset(&[(1, 2), (2, 1)]);
        let mut gen_rng = StdRng::seed_from_u64(42);
        let (hints, row_clues, column_clues) = generate(4, 4, &ships, Some(2), &mut gen_rng).unwrap();

        let mut solve_rng = StdRng::seed_from_u64(1);
        let solved = solve(4, 4, &hints, &row_clues, &column_clues, &ships, &mut solve_rng).unwrap();

        for (y, row) in solved.iter().enumerate() {
            let count = row.iter().filter(|&&t| t == Tile::Ship).count();
            assert_eq!(count, row_clues[y] as usize);
        }
        for x in 0..4 {
            let count = solved.iter().filter(|row| row[x] == Tile::Ship).count();
            assert_eq!(count, column_clues[x] as usize);
        }
    }

    #[test]
    fn test_generate_clamps_resolution_to_available_ship_cells() {
        let ships = multiset(&[(1, 1)]);
        let mut rng = StdRng::seed_from_u64(7);
        let (hints, _, _) = generate(3, 3, &ships, Some(50), &mut rng).unwrap();
        assert!(hints.len() <= 1);
    }

    #[test]
    fn test_generate_rejects_ship_multiset_too_large_for_board() {
        let ships = multiset(&[(4, 1)]);
        let mut rng = StdRng::seed_from_u64(8);
        let result = generate(2, 2, &ships, None, &mut rng);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_generate_default_resolution_is_two() {
        let ships = multiset(&[(1, 3), (2, 1)]);
        let mut rng = StdRng::seed_from_u64(11);
        let (hints, _, _) = generate(5, 5, &ships, None, &mut rng).unwrap();
        assert_eq!(hints.len(), 2);
    }
}

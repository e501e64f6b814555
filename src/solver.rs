//! The wave-function-collapse search driver: hint application, minimum-entropy
//! collapse, randomized candidate order, and the public [`solve`] entry point.
use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::constraints::Clues;
use crate::error::Error;
use crate::hint::{expand_hint, Hint};
use crate::label::{Label, Tile};
use crate::position::Position;
use crate::propagate::propagate;
use crate::superposition::Superposition;

/// Solves a puzzle instance: applies `hints`, then searches for a board satisfying
/// `row_clues`, `column_clues` and `ship_multiset`, using `rng` as the sole source of
/// non-determinism (seed it for reproducible runs).
pub fn solve<R: Rng + ?Sized>(
    width: u16,
    height: u16,
    hints: &[Hint],
    row_clues: &[u16],
    column_clues: &[u16],
    ship_multiset: &BTreeMap<u16, u16>,
    rng: &mut R,
) -> Result<Vec<Vec<Tile>>, Error> {
    validate_common(width, height, hints)?;
    if row_clues.len() != height as usize {
        return Err(Error::InvalidInput(format!(
            "row_clues has length {}, expected height {height}",
            row_clues.len()
        )));
    }
    if column_clues.len() != width as usize {
        return Err(Error::InvalidInput(format!(
            "column_clues has length {}, expected width {width}",
            column_clues.len()
        )));
    }
    validate_ship_multiset(width, height, ship_multiset)?;
    let total_ship_cells: u32 = ship_multiset.iter().map(|(&len, &count)| len as u32 * count as u32).sum();
    let row_total: u32 = row_clues.iter().map(|&c| c as u32).sum();
    if total_ship_cells > row_total {
        return Err(Error::InvalidInput(format!(
            "ship multiset covers {total_ship_cells} cells but clues request only {row_total}"
        )));
    }

    let mut board = Board::new(width, height);
    if apply_hints(&mut board, hints, width, height).is_err() {
        return Err(Error::NoSolution);
    }

    let clues = Clues::new(Some(row_clues), Some(column_clues), ship_multiset);
    match search(&board, &clues, rng) {
        Some(solved) => Ok(project(&solved)),
        None => Err(Error::NoSolution),
    }
}

/// Applies every hint's expansion to `board`, propagating after each. Returns `Err(())`
/// (a local branch-kill, not one of the crate's error kinds) the moment any expansion
/// makes the board locally infeasible.
pub(crate) fn apply_hints(board: &mut Board, hints: &[Hint], width: u16, height: u16) -> Result<(), ()> {
    for &hint in hints {
        for (pos, forced) in expand_hint(hint, width, height) {
            let narrowed = board.cell(pos).intersect(forced);
            if narrowed.is_empty() {
                return Err(());
            }
            board.place(pos, narrowed);
            if propagate(board, pos).is_err() {
                return Err(());
            }
        }
    }
    Ok(())
}

/// The recursive collapse step: picks a minimum-entropy cell, tries its candidate
/// labels in random order, propagates, prunes by the soft predicate, and recurses.
pub(crate) fn search<R: Rng + ?Sized>(board: &Board, clues: &Clues, rng: &mut R) -> Option<Board> {
    if board.is_collapsed() {
        return if clues.hard(board) { Some(board.clone()) } else { None };
    }

    let pos = pick_min_entropy_cell(board, rng)?;
    let mut candidates = board.cell(pos).labels();
    candidates.shuffle(rng);

    for label in candidates {
        let mut clone = board.clone();
        clone.place(pos, Superposition::single(label));
        if propagate(&mut clone, pos).is_err() {
            continue;
        }
        if !clues.soft(&clone) {
            continue;
        }
        if clone.is_collapsed() {
            if clues.hard(&clone) {
                return Some(clone);
            }
            continue;
        }
        if let Some(solved) = search(&clone, clues, rng) {
            return Some(solved);
        }
    }

    None
}

fn pick_min_entropy_cell<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let mut min_len = u32::MAX;
    let mut minima = Vec::new();
    for pos in board.positions() {
        let len = board.cell(pos).len();
        if len <= 1 {
            continue;
        }
        if len < min_len {
            min_len = len;
            minima.clear();
        }
        if len == min_len {
            minima.push(pos);
        }
    }
    minima.choose(rng).copied()
}

fn project(board: &Board) -> Vec<Vec<Tile>> {
    (0..board.height())
        .map(|y| {
            board
                .row(y)
                .map(|sp| Tile::from(sp.collapsed_label().expect("board must be collapsed")))
                .collect()
        })
        .collect()
}

fn validate_common(width: u16, height: u16, hints: &[Hint]) -> Result<(), Error> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidInput("board dimensions must be positive".into()));
    }
    let mut seen: BTreeMap<(u16, u16), u8> = BTreeMap::new();
    for hint in hints {
        if hint.x >= width || hint.y >= height {
            return Err(Error::InvalidInput(format!(
                "hint at ({}, {}) is outside a {width}x{height} board",
                hint.x, hint.y
            )));
        }
        let value = hint.label.value();
        match seen.get(&(hint.x, hint.y)) {
            Some(&existing) if existing != value => {
                return Err(Error::InvalidInput(format!(
                    "conflicting hints at ({}, {})",
                    hint.x, hint.y
                )))
            }
            _ => {
                seen.insert((hint.x, hint.y), value);
            }
        }
    }
    Ok(())
}

fn validate_ship_multiset(width: u16, height: u16, ship_multiset: &BTreeMap<u16, u16>) -> Result<(), Error> {
    let longest_side = width.max(height);
    for &length in ship_multiset.keys() {
        if length == 0 || length > longest_side {
            return Err(Error::InvalidInput(format!(
                "ship length {length} does not fit a {width}x{height} board"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn multiset(pairs: &[(u16, u16)]) -> BTreeMap<u16, u16> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_scenario_a_trivial_1x1_all_water() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = solve(1, 1, &[], &[0], &[0], &multiset(&[]), &mut rng).unwrap();
        assert_eq!(result, vec![vec![Tile::Water]]);
    }

    #[test]
    fn test_scenario_b_forced_single_ship() {
        let mut rng = StdRng::seed_from_u64(2);
        let result = solve(2, 2, &[], &[1, 0], &[1, 0], &multiset(&[(1, 1)]), &mut rng).unwrap();
        assert_eq!(result, vec![vec![Tile::Ship, Tile::Water], vec![Tile::Water, Tile::Water]]);
    }

    #[test]
    fn test_scenario_c_hint_forces_orientation() {
        use crate::hint::HintLabel;
        let mut rng = StdRng::seed_from_u64(3);
        let hints = [Hint::new(0, 0, HintLabel::CapLeft)];
        let result = solve(4, 1, &hints, &[2], &[1, 1, 0, 0], &multiset(&[(2, 1)]), &mut rng).unwrap();
        assert_eq!(result, vec![vec![Tile::Ship, Tile::Ship, Tile::Water, Tile::Water]]);
    }

    #[test]
    fn test_scenario_d_empty_board_all_water() {
        let mut rng = StdRng::seed_from_u64(4);
        let result = solve(3, 3, &[], &[0, 0, 0], &[0, 0, 0], &multiset(&[]), &mut rng).unwrap();
        assert!(result.iter().flatten().all(|&t| t == Tile::Water));
    }

    #[test]
    fn test_scenario_f_infeasible_returns_no_solution() {
        let mut rng = StdRng::seed_from_u64(5);
        let result = solve(2, 2, &[], &[2, 2], &[2, 2], &multiset(&[]), &mut rng);
        assert_eq!(result, Err(Error::NoSolution));
    }

    #[test]
    fn test_rejects_zero_dimension() {
        let mut rng = StdRng::seed_from_u64(6);
        let result = solve(0, 2, &[], &[], &[0, 0], &multiset(&[]), &mut rng);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_clue_length_mismatch() {
        let mut rng = StdRng::seed_from_u64(7);
        let result = solve(2, 2, &[], &[1], &[1, 1], &multiset(&[(1, 1)]), &mut rng);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_hint_outside_board() {
        use crate::hint::HintLabel;
        let mut rng = StdRng::seed_from_u64(8);
        let hints = [Hint::new(5, 5, HintLabel::Water)];
        let result = solve(2, 2, &hints, &[0, 0], &[0, 0], &multiset(&[]), &mut rng);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_scenario_e_classical_fleet_satisfies_invariants() {
        let mut rng = StdRng::seed_from_u64(9);
        use crate::hint::HintLabel;
        let hints = [Hint::new(2, 2, HintLabel::CapUp)];
        let row_clues = [3u16, 1, 2, 3, 0, 1];
        let column_clues = [3u16, 0, 3, 0, 1, 3];
        let ships = multiset(&[(1, 3), (2, 2), (3, 1)]);
        let result = solve(6, 6, &hints, &row_clues, &column_clues, &ships, &mut rng).unwrap();

        for (y, row) in result.iter().enumerate() {
            let count = row.iter().filter(|&&t| t == Tile::Ship).count();
            assert_eq!(count, row_clues[y] as usize);
        }
        for x in 0..6 {
            let count = result.iter().filter(|row| row[x] == Tile::Ship).count();
            assert_eq!(count, column_clues[x] as usize);
        }
    }
}

//! Row/column clue and ship-multiset predicates, in their soft (prune-early) and hard
//! (final-validity) variants.
use crate::board::Board;
use crate::label::Label;
use std::collections::BTreeMap;

/// The puzzle constants a search is run against.
///
/// `row_clues`/`column_clues` are `None` in generator mode, where the row/column
/// predicates are vacuously true and only the ship multiset is enforced.
pub struct Clues<'a> {
    pub row_clues: Option<&'a [u16]>,
    pub column_clues: Option<&'a [u16]>,
    pub ship_multiset: &'a BTreeMap<u16, u16>,
}

impl<'a> Clues<'a> {
    pub fn new(
        row_clues: Option<&'a [u16]>,
        column_clues: Option<&'a [u16]>,
        ship_multiset: &'a BTreeMap<u16, u16>,
    ) -> Self {
        Clues {
            row_clues,
            column_clues,
            ship_multiset,
        }
    }

    /// Whether the partial board is still compatible with completion.
    pub fn soft(&self, board: &Board) -> bool {
        self.soft_lines(board) && soft_ship_multiset(&ship_histogram(board), self.ship_multiset)
    }

    /// Whether a fully collapsed board exactly satisfies every clue and the ship
    /// multiset. Callers are expected to only invoke this once `board.is_collapsed()`.
    pub fn hard(&self, board: &Board) -> bool {
        self.hard_lines(board) && ship_histogram(board) == *self.ship_multiset
    }

    fn soft_lines(&self, board: &Board) -> bool {
        let rows_ok = match self.row_clues {
            None => true,
            Some(clues) => (0..board.height())
                .all(|y| soft_line(board.row(y).map(contains_ship_state), clues[y as usize])),
        };
        let cols_ok = match self.column_clues {
            None => true,
            Some(clues) => (0..board.width())
                .all(|x| soft_line(board.column(x).map(contains_ship_state), clues[x as usize])),
        };
        rows_ok && cols_ok
    }

    fn hard_lines(&self, board: &Board) -> bool {
        let rows_ok = match self.row_clues {
            None => true,
            Some(clues) => (0..board.height())
                .all(|y| hard_line(board.row(y).map(contains_ship_state), clues[y as usize])),
        };
        let cols_ok = match self.column_clues {
            None => true,
            Some(clues) => (0..board.width())
                .all(|x| hard_line(board.column(x).map(contains_ship_state), clues[x as usize])),
        };
        rows_ok && cols_ok
    }
}

/// For a single cell: `(collapsed-to-ship, still-possibly-ship)`.
fn contains_ship_state(sp: crate::superposition::Superposition) -> (bool, bool) {
    let maybe_ship = sp.contains(Label::ShipH) || sp.contains(Label::ShipV);
    (sp.is_collapsed() && maybe_ship, !sp.is_collapsed() && maybe_ship)
}

fn soft_line(cells: impl Iterator<Item = (bool, bool)>, clue: u16) -> bool {
    let (k, u) = count_line(cells);
    k <= clue && k + u >= clue
}

fn hard_line(cells: impl Iterator<Item = (bool, bool)>, clue: u16) -> bool {
    let (k, u) = count_line(cells);
    k == clue && u == 0
}

fn count_line(cells: impl Iterator<Item = (bool, bool)>) -> (u16, u16) {
    cells.fold((0u16, 0u16), |(k, u), (is_ship, maybe_ship)| {
        (k + is_ship as u16, u + maybe_ship as u16)
    })
}

/// The ship-length histogram of every live instance currently on the board.
fn ship_histogram(board: &Board) -> BTreeMap<u16, u16> {
    let mut histogram = BTreeMap::new();
    for ship in board.ships() {
        *histogram.entry(ship.length() as u16).or_insert(0) += 1;
    }
    histogram
}

/// The soft ship-length-multiset predicate: descending through the target lengths, too
/// many of any one size is fatal; too few of a longer size is tolerated only until the
/// shorter sizes are exactly met.
fn soft_ship_multiset(histogram: &BTreeMap<u16, u16>, target: &BTreeMap<u16, u16>) -> bool {
    for (&length, &required) in target.iter().rev() {
        match histogram.get(&length) {
            None => return true,
            Some(&have) if have != required => return have < required,
            Some(_) => continue,
        }
    }
    true
}

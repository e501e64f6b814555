//! The board: a width×height grid of superpositions, plus the placer that keeps a flat,
//! id-indexed table of connected ship instances in sync with it.
//!
//! Ship instances are not stored as a pointer graph threaded through cells (the design
//! this crate was distilled from considered and rejected that shape — see the crate-level
//! design notes). Instead each collapsed ship cell carries an `Option<ShipId>` into a flat
//! `Vec<ShipInstance>` owned by the board. Merging two instances rewrites the absorbed
//! instance's cells to point at the survivor and leaves the absorbed slot an empty
//! tombstone rather than shifting every other id down.
use crate::position::Position;
use crate::superposition::Superposition;

/// An opaque handle into a [`Board`]'s ship table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipId(usize);

/// A contiguous, axis-aligned run of cells committed to a ship label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipInstance {
    /// Positions in increasing (x, y) order. Empty means this instance was absorbed into
    /// another during a merge and is a tombstone.
    positions: Vec<Position>,
}

impl ShipInstance {
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn length(&self) -> usize {
        self.positions.len()
    }

    fn is_tombstone(&self) -> bool {
        self.positions.is_empty()
    }
}

/// A width×height grid of [`Superposition`]s plus its ship-instance table.
///
/// Cloning a board deep-copies both the cell array and the ship table (plain `Vec`
/// clones), which is exactly the cost the search driver wants: O(W·H + ship cells) per
/// explored branch, with no shared mutable state between a parent board and its clones.
#[derive(Debug, Clone)]
pub struct Board {
    width: u16,
    height: u16,
    cells: Vec<Superposition>,
    ship_of_cell: Vec<Option<ShipId>>,
    ships: Vec<ShipInstance>,
}

impl Board {
    /// A new board with every cell holding the full alphabet.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Board {
            width,
            height,
            cells: vec![Superposition::full(); size],
            ship_of_cell: vec![None; size],
            ships: Vec::new(),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// The current superposition at `pos`.
    pub fn cell(&self, pos: Position) -> Superposition {
        self.cells[pos.index(self.width)]
    }

    /// The ship instance a collapsed ship cell belongs to, or `None` for water or
    /// still-undetermined cells.
    pub fn ship_at(&self, pos: Position) -> Option<&ShipInstance> {
        self.ship_of_cell[pos.index(self.width)].map(|id| &self.ships[id.0])
    }

    /// Every live (non-tombstoned) ship instance on the board.
    pub fn ships(&self) -> impl Iterator<Item = &ShipInstance> {
        self.ships.iter().filter(|ship| !ship.is_tombstone())
    }

    /// Whether every cell on the board has collapsed to a single label.
    pub fn is_collapsed(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_collapsed())
    }

    /// An iterator over every on-board position, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// The cells of row `y`, in increasing x order.
    pub fn row(&self, y: u16) -> impl Iterator<Item = Superposition> + '_ {
        (0..self.width).map(move |x| self.cell(Position::new(x, y)))
    }

    /// The cells of column `x`, in increasing y order.
    pub fn column(&self, x: u16) -> impl Iterator<Item = Superposition> + '_ {
        (0..self.height).map(move |y| self.cell(Position::new(x, y)))
    }

    /// Narrows `pos`'s superposition to `new`, updating the ship table when `new`
    /// collapses to a ship label for the first time at this cell.
    ///
    /// Panics (an [`crate::error`]-documented *InvariantViolated* condition) if a newly
    /// collapsed ship cell has more than two collinear ship-instance neighbours, or if
    /// its two neighbouring instances are not collinear with it — both are impossible
    /// given the grammar in [`crate::grammar`] and indicate a bug upstream.
    pub fn place(&mut self, pos: Position, new: Superposition) {
        let idx = pos.index(self.width);
        self.cells[idx] = new;
        if let Some(label) = new.collapsed_label() {
            if label.is_ship() && self.ship_of_cell[idx].is_none() {
                self.register_ship_cell(pos);
            }
        }
    }

    fn register_ship_cell(&mut self, pos: Position) {
        let idx = pos.index(self.width);
        let ship_neighbours: Vec<(Position, ShipId)> = pos
            .cardinal_neighbours(self.width, self.height)
            .into_iter()
            .filter_map(|n| self.ship_of_cell[n.index(self.width)].map(|id| (n, id)))
            .collect();

        match ship_neighbours.len() {
            0 => {
                let id = ShipId(self.ships.len());
                self.ships.push(ShipInstance {
                    positions: vec![pos],
                });
                self.ship_of_cell[idx] = Some(id);
            }
            1 => {
                let (_, id) = ship_neighbours[0];
                self.ship_of_cell[idx] = Some(id);
                let ship = &mut self.ships[id.0];
                ship.positions.push(pos);
                ship.positions.sort_by_key(|p| (p.x, p.y));
            }
            2 => {
                let (pa, ida) = ship_neighbours[0];
                let (pb, idb) = ship_neighbours[1];
                if !collinear(pa, pb) {
                    panic!(
                        "InvariantViolated: ship neighbours {pa:?} and {pb:?} of {pos:?} are not collinear"
                    );
                }
                self.merge_ships(pos, ida, idb);
            }
            n => panic!(
                "InvariantViolated: {pos:?} has {n} collinear ship-instance neighbours, the grammar permits at most two"
            ),
        }
    }

    fn merge_ships(&mut self, pos: Position, a: ShipId, b: ShipId) {
        let (survivor, absorbed) = if a.0 <= b.0 { (a, b) } else { (b, a) };

        let mut positions = self.ships[survivor.0].positions.clone();
        positions.extend(self.ships[absorbed.0].positions.iter().copied());
        positions.push(pos);
        positions.sort_by_key(|p| (p.x, p.y));

        let all_same_x = positions.iter().all(|p| p.x == positions[0].x);
        let all_same_y = positions.iter().all(|p| p.y == positions[0].y);
        if !all_same_x && !all_same_y {
            panic!("InvariantViolated: merged ship at {pos:?} is not axis-aligned");
        }

        for &p in &positions {
            self.ship_of_cell[p.index(self.width)] = Some(survivor);
        }
        self.ship_of_cell[pos.index(self.width)] = Some(survivor);
        self.ships[survivor.0].positions = positions;
        self.ships[absorbed.0].positions = Vec::new();
    }
}

fn collinear(a: Position, b: Position) -> bool {
    a.x == b.x || a.y == b.y
}

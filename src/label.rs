//! The canonical tile alphabet and its projection to the external board representation.
//!
//! Three labels are live during the search: [`Label::Water`], [`Label::ShipH`] (a ship
//! segment known to continue horizontally) and [`Label::ShipV`] (known to continue
//! vertically). Once the board is collapsed, [`Label::ShipH`] and [`Label::ShipV`]
//! collapse further into the single [`Tile::Ship`] a caller actually cares about.
use strum::{Display, EnumIter};

/// A tile label in the canonical three-element alphabet used during the search.
#[derive(Debug, Display, EnumIter, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Label {
    Water,
    ShipH,
    ShipV,
}

impl Label {
    /// The bit this label occupies in a [`crate::superposition::Superposition`].
    pub(crate) fn bit(self) -> u8 {
        match self {
            Label::Water => 1 << 0,
            Label::ShipH => 1 << 1,
            Label::ShipV => 1 << 2,
        }
    }

    /// Whether this label is one of the two ship orientations.
    pub fn is_ship(self) -> bool {
        matches!(self, Label::ShipH | Label::ShipV)
    }
}

/// The external, orientation-erased tile a caller of [`crate::solve`] or
/// [`crate::generate`] sees.
#[derive(Debug, Display, EnumIter, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Tile {
    Water,
    Ship,
}

impl From<Label> for Tile {
    fn from(label: Label) -> Self {
        match label {
            Label::Water => Tile::Water,
            Label::ShipH | Label::ShipV => Tile::Ship,
        }
    }
}

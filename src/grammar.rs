//! The tile grammar: which labels a cell may hold, given a labelled neighbour and the
//! offset between them.
//!
//! This is `G[a][d]` from the design: a pure function of a label and an offset, not a
//! precomputed table, since the alphabet is three labels and the offsets are eight —
//! a `match` costs nothing a `HashMap` lookup wouldn't, minus the allocation.
use crate::label::Label;
use crate::superposition::Superposition;

/// The labels permitted at a cell offset by `(dx, dy)` from a cell labelled `label`.
///
/// `(dx, dy)` must be one of the eight entries in [`crate::position::OFFSETS`]; any
/// other value (including `(0, 0)`) is a programming error in this crate, not a
/// propagation outcome a caller can hit.
pub fn allowed(label: Label, offset: (i8, i8)) -> Superposition {
    let (dx, dy) = offset;
    let full = Superposition::full();
    let water_only = Superposition::single(Label::Water);

    match label {
        Label::Water => full,
        Label::ShipH => {
            if dx != 0 && dy != 0 {
                water_only
            } else if dy != 0 {
                water_only
            } else {
                water_only.insert(Label::ShipH)
            }
        }
        Label::ShipV => {
            if dx != 0 && dy != 0 {
                water_only
            } else if dx != 0 {
                water_only
            } else {
                water_only.insert(Label::ShipV)
            }
        }
    }
}

/// The union, over every label still live in `source`, of what `allowed` permits at the
/// given offset. This is the right-hand side of the propagator's narrowing step:
/// `⋃_{a∈cell(p)} G[a][d]`.
pub fn allowed_union(source: Superposition, offset: (i8, i8)) -> Superposition {
    source
        .labels()
        .into_iter()
        .fold(Superposition::empty(), |acc, label| {
            acc.union(allowed(label, offset))
        })
}

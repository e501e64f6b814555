//! The richer, eight-valued hint alphabet used at the public boundary, and its expansion
//! into canonical-alphabet forced assignments the search can consume directly.
use crate::label::Label;
use crate::position::Position;
use crate::superposition::Superposition;

/// A hint label, encoded bit-exactly per the external numeric contract: 1=Water,
/// 2=ShipAny, 3=CapLeft, 4=CapUp, 5=CapRight, 6=CapDown, 7=Single, 8=Middle.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum HintLabel {
    Water,
    ShipAny,
    CapLeft,
    CapUp,
    CapRight,
    CapDown,
    Single,
    Middle,
}

impl HintLabel {
    pub fn value(self) -> u8 {
        match self {
            HintLabel::Water => 1,
            HintLabel::ShipAny => 2,
            HintLabel::CapLeft => 3,
            HintLabel::CapUp => 4,
            HintLabel::CapRight => 5,
            HintLabel::CapDown => 6,
            HintLabel::Single => 7,
            HintLabel::Middle => 8,
        }
    }

    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(HintLabel::Water),
            2 => Some(HintLabel::ShipAny),
            3 => Some(HintLabel::CapLeft),
            4 => Some(HintLabel::CapUp),
            5 => Some(HintLabel::CapRight),
            6 => Some(HintLabel::CapDown),
            7 => Some(HintLabel::Single),
            8 => Some(HintLabel::Middle),
            _ => None,
        }
    }
}

/// A prefilled hint at a board position, in the external hint alphabet.
#[derive(Debug, Clone, Copy)]
pub struct Hint {
    pub x: u16,
    pub y: u16,
    pub label: HintLabel,
}

impl Hint {
    pub fn new(x: u16, y: u16, label: HintLabel) -> Self {
        Hint { x, y, label }
    }

    fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// A ship segment whose orientation is known but whose length is not yet: the
/// continuation neighbour of a cap hint is forced into this, not a single label.
fn generic_ship() -> Superposition {
    Superposition::single(Label::ShipH).union(Superposition::single(Label::ShipV))
}

/// Expands `hint` into the set of forced `(position, superposition)` assignments it
/// implies, ready to be fed through [`crate::board::Board::place`] and
/// [`crate::propagate::propagate`] in turn.
///
/// A cap hint is named for its *closed* end: `CapLeft` means the ship is capped
/// (water-bounded) on its left and continues to the right, `CapUp` is capped above and
/// continues downward, and so on — the hinted cell itself plus the three named
/// directions force water, while the one remaining direction forces an unoriented ship
/// continuation.
///
/// Neighbour cells that would fall off a `width`×`height` board are silently omitted
/// rather than forced; a cap or single hint placed against the board edge with no
/// room for its implied neighbour is a validation concern for the caller, not this
/// expansion (see [`crate::error::Error::InvalidInput`]).
pub fn expand_hint(hint: Hint, width: u16, height: u16) -> Vec<(Position, Superposition)> {
    let here = hint.position();
    let mut forced = Vec::new();

    let cardinals = |dx: i8, dy: i8| here.offset(dx, dy, width, height);
    let up = cardinals(0, -1);
    let down = cardinals(0, 1);
    let left = cardinals(-1, 0);
    let right = cardinals(1, 0);

    match hint.label {
        HintLabel::Water => forced.push((here, Superposition::single(Label::Water))),
        HintLabel::ShipAny => forced.push((here, generic_ship())),
        HintLabel::Middle => forced.push((here, generic_ship())),
        HintLabel::Single => {
            forced.push((here, generic_ship()));
            for n in [up, down, left, right].into_iter().flatten() {
                forced.push((n, Superposition::single(Label::Water)));
            }
        }
        HintLabel::CapLeft => {
            forced.push((here, Superposition::single(Label::ShipH)));
            if let Some(n) = right {
                forced.push((n, generic_ship()));
            }
            for n in [up, left, down].into_iter().flatten() {
                forced.push((n, Superposition::single(Label::Water)));
            }
        }
        HintLabel::CapRight => {
            forced.push((here, Superposition::single(Label::ShipH)));
            if let Some(n) = left {
                forced.push((n, generic_ship()));
            }
            for n in [up, right, down].into_iter().flatten() {
                forced.push((n, Superposition::single(Label::Water)));
            }
        }
        HintLabel::CapUp => {
            forced.push((here, Superposition::single(Label::ShipV)));
            if let Some(n) = down {
                forced.push((n, generic_ship()));
            }
            for n in [left, right, up].into_iter().flatten() {
                forced.push((n, Superposition::single(Label::Water)));
            }
        }
        HintLabel::CapDown => {
            forced.push((here, Superposition::single(Label::ShipV)));
            if let Some(n) = up {
                forced.push((n, generic_ship()));
            }
            for n in [left, right, down].into_iter().flatten() {
                forced.push((n, Superposition::single(Label::Water)));
            }
        }
    }

    forced
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(HintLabel::Water, 1)]
    #[case(HintLabel::ShipAny, 2)]
    #[case(HintLabel::CapLeft, 3)]
    #[case(HintLabel::CapUp, 4)]
    #[case(HintLabel::CapRight, 5)]
    #[case(HintLabel::CapDown, 6)]
    #[case(HintLabel::Single, 7)]
    #[case(HintLabel::Middle, 8)]
    fn test_value_round_trips(#[case] label: HintLabel, #[case] value: u8) {
        assert_eq!(label.value(), value);
        assert_eq!(HintLabel::from_value(value), Some(label));
    }

    #[test]
    fn test_from_value_rejects_out_of_range() {
        assert_eq!(HintLabel::from_value(0), None);
        assert_eq!(HintLabel::from_value(9), None);
    }

    #[test]
    fn test_expand_water_is_a_single_forcing() {
        let hint = Hint::new(1, 1, HintLabel::Water);
        let forced = expand_hint(hint, 4, 4);
        assert_eq!(forced, vec![(Position::new(1, 1), Superposition::single(Label::Water))]);
    }

    #[test]
    fn test_expand_middle_forces_only_self() {
        let hint = Hint::new(1, 1, HintLabel::Middle);
        let forced = expand_hint(hint, 4, 4);
        assert_eq!(forced, vec![(Position::new(1, 1), generic_ship())]);
    }

    #[test]
    fn test_expand_single_forces_four_neighbours_to_water() {
        let hint = Hint::new(1, 1, HintLabel::Single);
        let forced = expand_hint(hint, 4, 4);
        assert_eq!(forced.len(), 5);
        assert_eq!(forced[0], (Position::new(1, 1), generic_ship()));
        for &(_, sp) in &forced[1..] {
            assert_eq!(sp, Superposition::single(Label::Water));
        }
    }

    #[test]
    fn test_expand_cap_left_commits_orientation_and_forces_continuation() {
        let hint = Hint::new(2, 2, HintLabel::CapLeft);
        let forced = expand_hint(hint, 4, 4);
        assert!(forced.contains(&(Position::new(2, 2), Superposition::single(Label::ShipH))));
        assert!(forced.contains(&(Position::new(3, 2), generic_ship())));
        assert!(forced.contains(&(Position::new(2, 1), Superposition::single(Label::Water))));
        assert!(forced.contains(&(Position::new(1, 2), Superposition::single(Label::Water))));
        assert!(forced.contains(&(Position::new(2, 3), Superposition::single(Label::Water))));
    }

    #[test]
    fn test_expand_cap_up_commits_vertical_orientation() {
        let hint = Hint::new(2, 2, HintLabel::CapUp);
        let forced = expand_hint(hint, 4, 4);
        assert!(forced.contains(&(Position::new(2, 2), Superposition::single(Label::ShipV))));
        assert!(forced.contains(&(Position::new(2, 3), generic_ship())));
    }

    #[test]
    fn test_expand_cap_at_board_edge_omits_missing_neighbour() {
        // CapRight at x=0 has no continuation cell to its left; the edge is elided
        // rather than forced, leaving validation to the caller.
        let hint = Hint::new(0, 1, HintLabel::CapRight);
        let forced = expand_hint(hint, 4, 4);
        assert!(!forced.iter().any(|(_, sp)| *sp == generic_ship()));
        // self + up + right + down: no left neighbour exists to force a continuation.
        assert_eq!(forced.len(), 4);
    }
}

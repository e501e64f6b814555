//! Board coordinates.
//!
//! The external interface fixes (x, y) with x the column and y the row, origin at the
//! top-left corner; this module is the one place that convention is pinned down, so the
//! rest of the crate never has to juggle (row, column) against (x, y).

/// The eight unit offsets a cell can propagate through, in no particular order.
pub const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A cell coordinate on a width×height board.
///
/// x is the column (0..width), y is the row (0..height).
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    pub fn new(x: u16, y: u16) -> Self {
        Position { x, y }
    }

    /// The position offset by `(dx, dy)`, or `None` if it would fall outside a board of
    /// the given dimensions.
    pub fn offset(&self, dx: i8, dy: i8, width: u16, height: u16) -> Option<Position> {
        let x = self.x.checked_add_signed(dx as i16)?;
        let y = self.y.checked_add_signed(dy as i16)?;
        if x < width && y < height {
            Some(Position { x, y })
        } else {
            None
        }
    }

    /// The four edge-adjacent neighbours on a board of the given dimensions, in a fixed
    /// up/down/left/right order.
    pub fn cardinal_neighbours(&self, width: u16, height: u16) -> Vec<Position> {
        [(0, -1), (0, 1), (-1, 0), (1, 0)]
            .into_iter()
            .filter_map(|(dx, dy)| self.offset(dx, dy, width, height))
            .collect()
    }

    /// The row-major index of this position in a flat `width`-wide array.
    pub fn index(&self, width: u16) -> usize {
        self.y as usize * width as usize + self.x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, -1, -1, 10, 10, None)]
    #[case(0, 0, 1, 0, 10, 10, Some((1, 0)))]
    #[case(9, 9, 1, 0, 10, 10, None)]
    #[case(9, 9, 0, 1, 10, 10, None)]
    #[case(5, 5, -1, 1, 10, 10, Some((4, 6)))]
    fn test_offset(
        #[case] x: u16,
        #[case] y: u16,
        #[case] dx: i8,
        #[case] dy: i8,
        #[case] width: u16,
        #[case] height: u16,
        #[case] expected: Option<(u16, u16)>,
    ) {
        let got = Position::new(x, y).offset(dx, dy, width, height);
        assert_eq!(got, expected.map(|(x, y)| Position::new(x, y)));
    }

    #[test]
    fn test_cardinal_neighbours_corner() {
        let neighbours = Position::new(0, 0).cardinal_neighbours(3, 3);
        assert_eq!(neighbours.len(), 2);
        assert!(neighbours.contains(&Position::new(1, 0)));
        assert!(neighbours.contains(&Position::new(0, 1)));
    }

    #[test]
    fn test_cardinal_neighbours_interior() {
        let neighbours = Position::new(1, 1).cardinal_neighbours(3, 3);
        assert_eq!(neighbours.len(), 4);
    }

    #[test]
    fn test_index_is_row_major() {
        assert_eq!(Position::new(0, 0).index(4), 0);
        assert_eq!(Position::new(3, 0).index(4), 3);
        assert_eq!(Position::new(0, 1).index(4), 4);
        assert_eq!(Position::new(2, 1).index(4), 6);
    }
}

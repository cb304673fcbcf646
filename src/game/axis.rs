/// The four directions a line of pieces can run in.
///
/// Rows grow downward (row 0 is the top of the board), so `DiagonalUp`
/// steps one row up for every column to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Bottom-left to top-right, `/`.
    DiagonalUp,
    /// Top-left to bottom-right, `\`.
    DiagonalDown,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalUp,
        Axis::DiagonalDown,
    ];

    /// Unit step as (row delta, column delta).
    pub fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalUp => (-1, 1),
            Axis::DiagonalDown => (1, 1),
        }
    }

    /// Move `distance` steps from (row, col), or `None` if that leaves a
    /// `side` × `side` board. Negative distances walk backwards.
    pub fn offset(self, row: usize, col: usize, distance: isize, side: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.step();
        let r = row as isize + dr * distance;
        let c = col as isize + dc * distance;
        if r < 0 || c < 0 || r >= side as isize || c >= side as isize {
            return None;
        }
        Some((r as usize, c as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Axis::Horizontal.offset(2, 2, 3, 6), Some((2, 5)));
        assert_eq!(Axis::Vertical.offset(2, 2, -2, 6), Some((0, 2)));
        assert_eq!(Axis::DiagonalUp.offset(5, 0, 3, 6), Some((2, 3)));
        assert_eq!(Axis::DiagonalDown.offset(0, 0, 5, 6), Some((5, 5)));
    }

    #[test]
    fn test_offset_off_board() {
        assert_eq!(Axis::Horizontal.offset(0, 4, 2, 6), None);
        assert_eq!(Axis::DiagonalUp.offset(1, 0, 2, 6), None);
        assert_eq!(Axis::DiagonalDown.offset(0, 0, -1, 6), None);
    }
}

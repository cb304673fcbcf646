use crate::game::{Board, Cell, Player};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Terminal columns taken by one board cell.
pub const CELL_WIDTH: u16 = 3;

/// Where the board sits on screen, used to map mouse positions to columns.
///
/// Layout, top to bottom: hanging-piece row, top border, `side` cell rows,
/// bottom border, column numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    outer: Rect,
    side: usize,
}

impl BoardGeometry {
    /// Center a board with `side` columns inside `area`.
    pub fn centered(area: Rect, side: usize) -> Self {
        let width = (side as u16 * CELL_WIDTH + 2).min(area.width);
        let height = (side as u16 + 4).min(area.height);
        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        BoardGeometry {
            outer: Rect::new(x, y, width, height),
            side,
        }
    }

    pub fn outer(&self) -> Rect {
        self.outer
    }

    /// Column under the terminal cell (x, y), or `None` outside the board.
    pub fn column_at(&self, x: u16, y: u16) -> Option<usize> {
        let grid_left = self.outer.x + 1;
        if x < grid_left || y < self.outer.y || y >= self.outer.y + self.outer.height {
            return None;
        }
        let col = ((x - grid_left) / CELL_WIDTH) as usize;
        (col < self.side).then_some(col)
    }
}

fn piece_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn cell_span(cell: Cell, highlight: bool) -> Span<'static> {
    let (symbol, color) = match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::Red => (" \u{25cf} ", Color::Red),
        Cell::Yellow => (" \u{25cf} ", Color::Yellow),
    };
    let mut style = Style::default().fg(color);
    if highlight {
        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    Span::styled(symbol, style)
}

/// Render the board with the active player's piece hanging over the
/// selected column.
pub fn render_board(
    frame: &mut Frame,
    board: &Board,
    geometry: BoardGeometry,
    selected_column: usize,
    hanging: Option<Player>,
    last_move: Option<(usize, usize)>,
) {
    let side = board.side_length();
    let bar = "\u{2550}".repeat(side * CELL_WIDTH as usize);
    let mut lines = Vec::with_capacity(side + 4);

    let mut hang_line = vec![Span::raw(" ")];
    for col in 0..side {
        match hanging {
            Some(player) if col == selected_column => hang_line.push(Span::styled(
                " \u{25cf} ",
                Style::default().fg(piece_color(player)).add_modifier(Modifier::BOLD),
            )),
            _ => hang_line.push(Span::raw("   ")),
        }
    }
    lines.push(Line::from(hang_line));

    lines.push(Line::from(format!("\u{2554}{bar}\u{2557}")));
    for row in 0..side {
        let mut spans = vec![Span::raw("\u{2551}")];
        for col in 0..side {
            spans.push(cell_span(board.get(row, col), last_move == Some((row, col))));
        }
        spans.push(Span::raw("\u{2551}"));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(format!("\u{255a}{bar}\u{255d}")));

    let mut numbers = vec![Span::raw(" ")];
    for col in 0..side {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            numbers.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            numbers.push(Span::raw(label));
        }
    }
    lines.push(Line::from(numbers));

    frame.render_widget(Paragraph::new(lines), geometry.outer());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_is_centered() {
        let geometry = BoardGeometry::centered(Rect::new(0, 0, 43, 21), 7);
        // 7 cells * 3 + 2 borders = 23 wide, 7 rows + 4 = 11 tall
        assert_eq!(geometry.outer(), Rect::new(10, 5, 23, 11));
    }

    #[test]
    fn test_column_at_maps_cells() {
        let geometry = BoardGeometry::centered(Rect::new(0, 0, 43, 21), 7);
        // Grid starts one column right of the left border at x = 10
        assert_eq!(geometry.column_at(11, 8), Some(0));
        assert_eq!(geometry.column_at(13, 8), Some(0));
        assert_eq!(geometry.column_at(14, 8), Some(1));
        assert_eq!(geometry.column_at(31, 5), Some(6));
    }

    #[test]
    fn test_column_at_outside_board() {
        let geometry = BoardGeometry::centered(Rect::new(0, 0, 43, 21), 7);
        assert_eq!(geometry.column_at(10, 8), None); // left border
        assert_eq!(geometry.column_at(32, 8), None); // right border
        assert_eq!(geometry.column_at(0, 8), None);
        assert_eq!(geometry.column_at(15, 4), None); // above
        assert_eq!(geometry.column_at(15, 16), None); // below
    }

    #[test]
    fn test_geometry_clamps_to_small_area() {
        let geometry = BoardGeometry::centered(Rect::new(2, 3, 10, 5), 7);
        assert_eq!(geometry.outer(), Rect::new(2, 3, 10, 5));
    }
}

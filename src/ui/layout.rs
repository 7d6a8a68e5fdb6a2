//! Panel layout management
//!
//! Splits the terminal into the catalog column on the left (schemas over
//! tables) and the detail column on the right (columns, results, query
//! editor, status line).

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the catalog column
const CATALOG_WIDTH: u16 = 35;

/// Height of the query editor (content + border)
const EDITOR_HEIGHT: u16 = 6;

/// Computed areas for every panel
#[derive(Debug, Clone, Copy)]
pub struct PanelLayout {
    pub schemas: Rect,
    pub tables: Rect,
    pub columns: Rect,
    pub results: Rect,
    pub editor: Rect,
    pub status: Rect,
}

/// Calculate panel layout for the whole screen
pub fn panel_layout(area: Rect) -> PanelLayout {
    let [body, status] = split(
        area,
        Direction::Vertical,
        [Constraint::Min(0), Constraint::Length(1)],
    );

    let [catalog, detail] = split(
        body,
        Direction::Horizontal,
        [Constraint::Length(CATALOG_WIDTH), Constraint::Min(0)],
    );

    let [schemas, tables] = split(
        catalog,
        Direction::Vertical,
        [Constraint::Percentage(50), Constraint::Percentage(50)],
    );

    let [columns, results, editor] = split(
        detail,
        Direction::Vertical,
        [
            Constraint::Percentage(25),
            Constraint::Min(0),
            Constraint::Length(EDITOR_HEIGHT),
        ],
    );

    PanelLayout {
        schemas,
        tables,
        columns,
        results,
        editor,
        status,
    }
}

fn split<const N: usize>(
    area: Rect,
    direction: Direction,
    constraints: [Constraint; N],
) -> [Rect; N] {
    let chunks = Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area);
    std::array::from_fn(|i| chunks[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_covers_expected_panels() {
        let layout = panel_layout(Rect::new(0, 0, 120, 50));

        assert_eq!(layout.schemas.width, CATALOG_WIDTH);
        assert_eq!(layout.tables.width, CATALOG_WIDTH);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.editor.height, EDITOR_HEIGHT);
        assert!(layout.results.width > 0);
        assert!(layout.columns.width > 0);
    }

    #[test]
    fn test_layout_tiny_terminal_does_not_panic() {
        let layout = panel_layout(Rect::new(0, 0, 10, 3));
        assert!(layout.status.height <= 3);
    }
}

//! Results grid
//!
//! Scrollable table over a materialized query result with cell-level
//! selection. Also renders the column pane (a fixed three-column grid
//! fed from catalog metadata).

use crate::db::types::QueryResults;
use crate::ui::theme::Theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

/// Widest a column may render
const MAX_COL_WIDTH: usize = 40;

/// Rows jumped by PageUp/PageDown
const PAGE_SIZE: usize = 20;

pub struct ResultsGrid {
    results: Option<QueryResults>,
    selected_row: usize,
    selected_col: usize,
    scroll_row: usize,
    scroll_col: usize,
    col_widths: Vec<usize>,
}

impl ResultsGrid {
    pub fn new() -> Self {
        Self {
            results: None,
            selected_row: 0,
            selected_col: 0,
            scroll_row: 0,
            scroll_col: 0,
            col_widths: Vec::new(),
        }
    }

    /// Replace the displayed result wholesale.
    pub fn set_results(&mut self, results: QueryResults) {
        self.col_widths = compute_column_widths(&results);
        self.results = Some(results);
        self.selected_row = 0;
        self.selected_col = 0;
        self.scroll_row = 0;
        self.scroll_col = 0;
    }

    pub fn clear(&mut self) {
        self.results = None;
        self.selected_row = 0;
        self.selected_col = 0;
        self.scroll_row = 0;
        self.scroll_col = 0;
        self.col_widths.clear();
    }

    pub fn results(&self) -> Option<&QueryResults> {
        self.results.as_ref()
    }

    /// Text of the selected cell
    pub fn selected_cell_text(&self) -> Option<String> {
        let results = self.results.as_ref()?;
        results
            .rows
            .get(self.selected_row)?
            .get(self.selected_col)
            .cloned()
    }

    /// Tab-separated text of the selected row
    pub fn selected_row_text(&self) -> Option<String> {
        let results = self.results.as_ref()?;
        results.rows.get(self.selected_row).map(|r| r.join("\t"))
    }

    pub fn move_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let count = self.row_count();
        if count > 0 && self.selected_row < count - 1 {
            self.selected_row += 1;
        }
    }

    pub fn move_left(&mut self) {
        self.selected_col = self.selected_col.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        let count = self.col_count();
        if count > 0 && self.selected_col < count - 1 {
            self.selected_col += 1;
        }
    }

    pub fn page_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(PAGE_SIZE);
    }

    pub fn page_down(&mut self) {
        let count = self.row_count();
        self.selected_row = (self.selected_row + PAGE_SIZE).min(count.saturating_sub(1));
    }

    pub fn go_to_top(&mut self) {
        self.selected_row = 0;
    }

    pub fn go_to_bottom(&mut self) {
        self.selected_row = self.row_count().saturating_sub(1);
    }

    fn row_count(&self) -> usize {
        self.results.as_ref().map_or(0, |r| r.rows.len())
    }

    fn col_count(&self) -> usize {
        self.results.as_ref().map_or(0, |r| r.headers.len())
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let visible_rows = (area.height as usize).saturating_sub(1);
        self.ensure_visible(visible_rows, area.width as usize);

        let Some(results) = self.results.as_ref() else {
            return;
        };
        if results.headers.is_empty() {
            return;
        }

        let mut lines: Vec<Line> = Vec::with_capacity(visible_rows + 1);
        lines.push(self.grid_line(
            &results.headers,
            area.width as usize,
            theme,
            None,
            theme.results_header,
        ));
        for (i, row) in results
            .rows
            .iter()
            .enumerate()
            .skip(self.scroll_row)
            .take(visible_rows)
        {
            let selected = (focused && i == self.selected_row).then_some(self.selected_col);
            lines.push(self.grid_line(row, area.width as usize, theme, selected, theme.results_row));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Render one row of cells, truncated and padded to column widths,
    /// starting at the horizontal scroll column.
    fn grid_line(
        &self,
        cells: &[String],
        max_width: usize,
        theme: &Theme,
        selected_col: Option<usize>,
        base: ratatui::style::Style,
    ) -> Line<'static> {
        let mut spans: Vec<Span> = Vec::new();
        let mut used = 0usize;
        for (col, cell) in cells.iter().enumerate().skip(self.scroll_col) {
            if used >= max_width {
                break;
            }
            let width = self.col_widths.get(col).copied().unwrap_or(8);
            let (shown, shown_width) = cell.unicode_truncate(width);
            let padded = format!("{}{} ", shown, " ".repeat(width - shown_width));
            let style = if selected_col == Some(col) {
                theme.results_selected
            } else if cell == "NULL" && base != theme.results_header {
                theme.results_null
            } else {
                base
            };
            used += padded.width();
            spans.push(Span::styled(padded, style));
        }
        Line::from(spans)
    }

    /// Keep the selected cell inside the viewport.
    fn ensure_visible(&mut self, visible_rows: usize, width: usize) {
        if visible_rows == 0 {
            return;
        }
        if self.selected_row < self.scroll_row {
            self.scroll_row = self.selected_row;
        } else if self.selected_row >= self.scroll_row + visible_rows {
            self.scroll_row = self.selected_row + 1 - visible_rows;
        }

        if self.selected_col < self.scroll_col {
            self.scroll_col = self.selected_col;
        }
        // Scroll right until the selected column's right edge fits
        while self.scroll_col < self.selected_col {
            let span: usize = self
                .col_widths
                .iter()
                .skip(self.scroll_col)
                .take(self.selected_col - self.scroll_col + 1)
                .map(|w| w + 1)
                .sum();
            if span <= width {
                break;
            }
            self.scroll_col += 1;
        }
    }
}

impl Default for ResultsGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-column display width: widest of header and cells, capped.
fn compute_column_widths(results: &QueryResults) -> Vec<usize> {
    let mut widths: Vec<usize> = results.headers.iter().map(|h| h.width()).collect();
    for row in &results.rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.width());
            }
        }
    }
    widths.iter().map(|w| (*w).clamp(1, MAX_COL_WIDTH)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sample() -> QueryResults {
        QueryResults::new(
            vec!["id".to_string(), "name".to_string()],
            vec![
                vec!["1".to_string(), "ada".to_string()],
                vec!["2".to_string(), "NULL".to_string()],
                vec!["3".to_string(), "grace".to_string()],
            ],
            Duration::from_millis(7),
        )
    }

    #[test]
    fn test_set_results_resets_selection() {
        let mut grid = ResultsGrid::new();
        grid.set_results(sample());
        grid.move_down();
        grid.move_right();
        assert_eq!(grid.selected_cell_text().as_deref(), Some("NULL"));

        grid.set_results(sample());
        assert_eq!(grid.selected_cell_text().as_deref(), Some("1"));
    }

    #[test]
    fn test_navigation_clamps_at_edges() {
        let mut grid = ResultsGrid::new();
        grid.set_results(sample());

        grid.move_up();
        assert_eq!(grid.selected_row, 0);
        for _ in 0..10 {
            grid.move_down();
        }
        assert_eq!(grid.selected_row, 2);
        for _ in 0..10 {
            grid.move_right();
        }
        assert_eq!(grid.selected_col, 1);
    }

    #[test]
    fn test_selected_row_text_tab_separated() {
        let mut grid = ResultsGrid::new();
        grid.set_results(sample());
        grid.move_down();
        assert_eq!(grid.selected_row_text().as_deref(), Some("2\tNULL"));
    }

    #[test]
    fn test_clear_empties_grid() {
        let mut grid = ResultsGrid::new();
        grid.set_results(sample());
        grid.clear();
        assert!(grid.results().is_none());
        assert!(grid.selected_cell_text().is_none());
    }

    #[test]
    fn test_column_widths_capped() {
        let results = QueryResults::new(
            vec!["c".to_string()],
            vec![vec!["x".repeat(500)]],
            Duration::ZERO,
        );
        let widths = compute_column_widths(&results);
        assert_eq!(widths, vec![MAX_COL_WIDTH]);
    }

    #[test]
    fn test_page_navigation() {
        let rows: Vec<Vec<String>> = (0..100).map(|i| vec![i.to_string()]).collect();
        let mut grid = ResultsGrid::new();
        grid.set_results(QueryResults::new(
            vec!["n".to_string()],
            rows,
            Duration::ZERO,
        ));

        grid.page_down();
        assert_eq!(grid.selected_row, 20);
        grid.go_to_bottom();
        assert_eq!(grid.selected_row, 99);
        grid.page_up();
        assert_eq!(grid.selected_row, 79);
        grid.go_to_top();
        assert_eq!(grid.selected_row, 0);
    }
}

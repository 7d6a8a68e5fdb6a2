//! Top-level render function
//!
//! Draws every panel from the current `App` state. Rendering never
//! mutates anything except per-grid scroll offsets.

use crate::app::App;
use crate::toast::ToastLevel;
use crate::ui::Pane;
use crate::ui::layout::panel_layout;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = panel_layout(frame.area());
    let theme = app.theme.clone();

    render_list(
        frame,
        layout.schemas,
        " Schemas ",
        app.navigator.schemas(),
        app.navigator.current_schema(),
        app.schema_cursor,
        app.focus == Pane::Schemas,
        app,
    );
    render_list(
        frame,
        layout.tables,
        " Tables ",
        app.navigator.tables(),
        app.navigator.current_table(),
        app.table_cursor,
        app.focus == Pane::Tables,
        app,
    );

    let columns_block = Block::default()
        .borders(Borders::ALL)
        .title(" Columns ")
        .border_style(theme.border_style(app.focus == Pane::Columns));
    let columns_inner = columns_block.inner(layout.columns);
    frame.render_widget(columns_block, layout.columns);
    let focused = app.focus == Pane::Columns;
    app.columns.render(frame, columns_inner, focused, &theme);

    let results_block = Block::default()
        .borders(Borders::ALL)
        .title(" Results / Preview ")
        .border_style(theme.border_style(app.focus == Pane::Results));
    let results_inner = results_block.inner(layout.results);
    frame.render_widget(results_block, layout.results);
    let focused = app.focus == Pane::Results;
    app.results.render(frame, results_inner, focused, &theme);

    let editor_block = Block::default()
        .borders(Borders::ALL)
        .title(" SQL Query (F5 to run) ")
        .border_style(theme.border_style(app.focus == Pane::Editor));
    let editor_inner = editor_block.inner(layout.editor);
    frame.render_widget(editor_block, layout.editor);
    app.editor
        .render(frame, editor_inner, app.focus == Pane::Editor, &theme);

    render_status(frame, layout.status, app);
}

#[allow(clippy::too_many_arguments)]
fn render_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    items: &[String],
    current: &str,
    cursor: usize,
    focused: bool,
    app: &App,
) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(theme.border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let height = inner.height as usize;
    let offset = if height > 0 && cursor >= height {
        cursor + 1 - height
    } else {
        0
    };

    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(i, name)| {
            let marker = if name == current { "* " } else { "  " };
            let style = if focused && i == cursor {
                theme.list_selected
            } else {
                theme.list_item
            };
            Line::styled(format!("{}{}", marker, name), style)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let widget = if let Some((message, level)) = app.toasts.active() {
        let style = match level {
            ToastLevel::Success => theme.status_success,
            ToastLevel::Error => theme.status_error,
            ToastLevel::Info => theme.status_info,
        };
        Paragraph::new(format!("[{}] {}", app.connection_name, message)).style(style)
    } else {
        Paragraph::new(format!(
            "[{}] F5: Run | q: Quit | r: Refresh | Tab: Cycle Focus | y/Y: Copy",
            app.connection_name
        ))
        .style(theme.status_idle)
    };
    frame.render_widget(widget, area);
}

//! Application state and event handling
//!
//! Central state machine: events come in, state updates, actions go out.
//! The event loop in `main` owns the only `App` value and is the only
//! context that touches display state; background work communicates
//! exclusively through `AppEvent`s.

use crate::db::types::{ColumnInfo, QueryResults};
use crate::error::DbError;
use crate::history::QueryHistory;
use crate::navigator::{NavAction, Navigator};
use crate::sql;
use crate::toast::{ToastLevel, Toasts};
use crate::ui::Pane;
use crate::ui::editor::QueryEditor;
use crate::ui::results::ResultsGrid;
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

/// Which display slot a query's result belongs to. Previews also carry
/// the selection they were issued for, so stale completions can be fenced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryTarget {
    Preview { schema: String, table: String },
    Adhoc,
}

/// Events consumed by the state machine. Everything a background task
/// wants to say arrives as one of these over the event channel.
pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Resize,
    SchemasLoaded(Vec<String>),
    SchemasFailed(String),
    TablesLoaded {
        schema: String,
        tables: Vec<String>,
    },
    TablesFailed {
        schema: String,
        error: String,
    },
    ColumnsLoaded {
        schema: String,
        table: String,
        columns: Vec<ColumnInfo>,
    },
    ColumnsFailed {
        schema: String,
        table: String,
        error: String,
    },
    QueryCompleted {
        target: QueryTarget,
        results: QueryResults,
    },
    QueryFailed {
        target: QueryTarget,
        error: String,
    },
    ToastExpired(u64),
}

/// Work the event loop must run on behalf of the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    LoadSchemas,
    LoadTables { schema: String },
    LoadColumns { schema: String, table: String },
    RunQuery { sql: String, target: QueryTarget },
    Quit,
}

/// Main application state
pub struct App {
    /// Which panel currently has focus
    pub focus: Pane,

    /// Catalog selection state machine
    pub navigator: Navigator,

    /// Highlight cursors for the two catalog lists
    pub schema_cursor: usize,
    pub table_cursor: usize,

    /// Column metadata for the selected table, as a grid
    pub columns: ResultsGrid,

    /// Preview / ad-hoc results
    pub results: ResultsGrid,

    /// Ad-hoc SQL input
    pub editor: QueryEditor,

    /// Transient status notifications
    pub toasts: Toasts,

    /// UI theme (created once, reused every frame)
    pub theme: Theme,

    /// Shown in the status line, e.g. `mydb@localhost`
    pub connection_name: String,

    /// Preview row limit (immutable after construction)
    preview_limit: usize,

    /// Query history for Ctrl+Up/Down navigation
    history: QueryHistory,

    /// Persistent clipboard handle (kept alive to avoid Linux clipboard
    /// drop race)
    clipboard: Option<arboard::Clipboard>,

    /// Error from clipboard initialization (preserved for diagnostics)
    clipboard_error: Option<String>,
}

impl App {
    pub fn new(connection_name: String, preview_limit: usize) -> Self {
        let (clipboard, clipboard_error) = match arboard::Clipboard::new() {
            Ok(c) => (Some(c), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            focus: Pane::Schemas,
            navigator: Navigator::new(),
            schema_cursor: 0,
            table_cursor: 0,
            columns: ResultsGrid::new(),
            results: ResultsGrid::new(),
            editor: QueryEditor::new(),
            toasts: Toasts::new(),
            theme: Theme::default(),
            connection_name,
            preview_limit,
            history: QueryHistory::new(),
            clipboard,
            clipboard_error,
        }
    }

    /// Handle one event, returning the follow-up work for the event loop.
    pub fn handle_event(&mut self, event: AppEvent) -> Vec<Action> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Paste(data) => {
                if self.focus == Pane::Editor {
                    self.editor.insert_text(&data);
                }
                Vec::new()
            }
            AppEvent::Resize => Vec::new(),
            AppEvent::SchemasLoaded(names) => {
                let actions = self.navigator.schemas_loaded(names);
                self.schema_cursor = 0;
                self.table_cursor = 0;
                self.apply_nav(actions)
            }
            AppEvent::SchemasFailed(error) => {
                self.toast(format!("Failed to load schemas: {}", error), ToastLevel::Error);
                Vec::new()
            }
            AppEvent::TablesLoaded { schema, tables } => {
                let fresh = self.navigator.matches_schema(&schema);
                let actions = self.navigator.tables_loaded(&schema, tables);
                if fresh {
                    self.table_cursor = 0;
                }
                self.apply_nav(actions)
            }
            AppEvent::TablesFailed { schema, error } => {
                if self.navigator.matches_schema(&schema) {
                    self.toast(format!("Failed to load tables: {}", error), ToastLevel::Error);
                }
                Vec::new()
            }
            AppEvent::ColumnsLoaded {
                schema,
                table,
                columns,
            } => {
                if self.navigator.matches_selection(&schema, &table) {
                    self.columns.set_results(columns_grid(columns));
                }
                Vec::new()
            }
            AppEvent::ColumnsFailed {
                schema,
                table,
                error,
            } => {
                if self.navigator.matches_selection(&schema, &table) {
                    self.toast(format!("Failed to load columns: {}", error), ToastLevel::Error);
                }
                Vec::new()
            }
            AppEvent::QueryCompleted { target, results } => {
                if let QueryTarget::Preview { schema, table } = &target
                    && !self.navigator.matches_selection(schema, table)
                {
                    return Vec::new();
                }
                self.toast(
                    format!(
                        "{} rows in {}ms",
                        results.row_count(),
                        results.elapsed.as_millis()
                    ),
                    ToastLevel::Success,
                );
                self.results.set_results(results);
                Vec::new()
            }
            AppEvent::QueryFailed { target, error } => {
                match &target {
                    QueryTarget::Preview { schema, table }
                        if !self.navigator.matches_selection(schema, table) => {}
                    _ => self.toast(format!("Query error: {}", error), ToastLevel::Error),
                }
                Vec::new()
            }
            AppEvent::ToastExpired(seq) => {
                self.toasts.expire(seq);
                Vec::new()
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Action> {
        // Global bindings, live regardless of focus
        match key.code {
            KeyCode::F(5) => return self.run_adhoc(),
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return Vec::new();
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return Vec::new();
            }
            _ => {}
        }

        // Only when the query input is not focused
        if self.focus != Pane::Editor {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => return vec![Action::Quit],
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    self.toast("Refreshing schemas...", ToastLevel::Info);
                    return vec![Action::LoadSchemas];
                }
                _ => {}
            }
        }

        match self.focus {
            Pane::Schemas => self.schemas_key(key),
            Pane::Tables => self.tables_key(key),
            Pane::Columns => {
                match key.code {
                    KeyCode::Up => self.columns.move_up(),
                    KeyCode::Down => self.columns.move_down(),
                    _ => {}
                }
                Vec::new()
            }
            Pane::Results => self.results_key(key),
            Pane::Editor => self.editor_key(key),
        }
    }

    fn schemas_key(&mut self, key: KeyEvent) -> Vec<Action> {
        let count = self.navigator.schemas().len();
        match key.code {
            KeyCode::Up => {
                self.schema_cursor = self.schema_cursor.saturating_sub(1);
                Vec::new()
            }
            KeyCode::Down => {
                if count > 0 && self.schema_cursor < count - 1 {
                    self.schema_cursor += 1;
                }
                Vec::new()
            }
            KeyCode::Enter => {
                let Some(name) = self.navigator.schemas().get(self.schema_cursor).cloned() else {
                    return Vec::new();
                };
                self.table_cursor = 0;
                let actions = self.navigator.select_schema(&name);
                self.apply_nav(actions)
            }
            _ => Vec::new(),
        }
    }

    fn tables_key(&mut self, key: KeyEvent) -> Vec<Action> {
        let count = self.navigator.tables().len();
        match key.code {
            KeyCode::Up => {
                self.table_cursor = self.table_cursor.saturating_sub(1);
                Vec::new()
            }
            KeyCode::Down => {
                if count > 0 && self.table_cursor < count - 1 {
                    self.table_cursor += 1;
                }
                Vec::new()
            }
            KeyCode::Enter => {
                let Some(name) = self.navigator.tables().get(self.table_cursor).cloned() else {
                    return Vec::new();
                };
                let actions = self.navigator.select_table(&name);
                self.apply_nav(actions)
            }
            _ => Vec::new(),
        }
    }

    fn results_key(&mut self, key: KeyEvent) -> Vec<Action> {
        match key.code {
            KeyCode::Up => self.results.move_up(),
            KeyCode::Down => self.results.move_down(),
            KeyCode::Left => self.results.move_left(),
            KeyCode::Right => self.results.move_right(),
            KeyCode::PageUp => self.results.page_up(),
            KeyCode::PageDown => self.results.page_down(),
            KeyCode::Char('g') => self.results.go_to_top(),
            KeyCode::Char('G') => self.results.go_to_bottom(),
            KeyCode::Char('y') => {
                if let Some(text) = self.results.selected_cell_text() {
                    self.copy_to_clipboard(&text);
                }
            }
            KeyCode::Char('Y') => {
                if let Some(text) = self.results.selected_row_text() {
                    self.copy_to_clipboard(&text);
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn editor_key(&mut self, key: KeyEvent) -> Vec<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('f') => self.format_query(),
                KeyCode::Up => {
                    let current = self.editor.content();
                    if let Some(entry) = self.history.back(&current).map(String::from) {
                        self.editor.set_content(&entry);
                    }
                }
                KeyCode::Down => {
                    if let Some(entry) = self.history.forward().map(String::from) {
                        self.editor.set_content(&entry);
                    }
                }
                _ => {}
            }
            // Unbound Ctrl combinations must not insert their character
            return Vec::new();
        }
        self.editor.handle_key(key);
        Vec::new()
    }

    /// Trim, guard, and dispatch the editor content as an ad-hoc query.
    fn run_adhoc(&mut self) -> Vec<Action> {
        let sql_text = self.editor.content().trim().to_string();
        if sql_text.is_empty() {
            return Vec::new();
        }
        if sql::has_multiple_statements(&sql_text) {
            self.toast(DbError::MultipleStatements.to_string(), ToastLevel::Error);
            return Vec::new();
        }
        self.history.push(&sql_text);
        self.toast("Executing query...", ToastLevel::Info);
        vec![Action::RunQuery {
            sql: sql_text,
            target: QueryTarget::Adhoc,
        }]
    }

    fn format_query(&mut self) {
        let sql_text = self.editor.content();
        if sql_text.trim().is_empty() {
            return;
        }
        let formatted = sqlformat::format(
            &sql_text,
            &sqlformat::QueryParams::None,
            &sqlformat::FormatOptions {
                indent: sqlformat::Indent::Spaces(2),
                uppercase: Some(true),
                lines_between_queries: 1,
                ..Default::default()
            },
        );
        self.editor.set_content(&formatted);
        self.toast("Query formatted", ToastLevel::Info);
    }

    /// Turn navigator follow-ups into event-loop actions, building the
    /// preview SQL with the configured row limit.
    fn apply_nav(&mut self, actions: Vec<NavAction>) -> Vec<Action> {
        let mut out = Vec::new();
        for action in actions {
            match action {
                NavAction::LoadTables { schema } => out.push(Action::LoadTables { schema }),
                NavAction::LoadColumns { schema, table } => {
                    out.push(Action::LoadColumns { schema, table });
                }
                NavAction::Preview { schema, table } => {
                    let sql_text = format!(
                        "SELECT * FROM {} LIMIT {}",
                        sql::qualified_table(&schema, &table),
                        self.preview_limit
                    );
                    out.push(Action::RunQuery {
                        sql: sql_text,
                        target: QueryTarget::Preview { schema, table },
                    });
                }
                NavAction::ClearDetail => {
                    self.columns.clear();
                    self.results.clear();
                }
            }
        }
        out
    }

    fn toast(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.toasts.post(message, level);
    }

    fn copy_to_clipboard(&mut self, text: &str) {
        if let Some(clipboard) = self.clipboard.as_mut() {
            match clipboard.set_text(text) {
                Ok(()) => self.toast("Copied to clipboard", ToastLevel::Success),
                Err(e) => self.toast(format!("Clipboard error: {}", e), ToastLevel::Error),
            }
        } else {
            let reason = self.clipboard_error.as_deref().unwrap_or("unknown reason");
            self.toast(
                format!("Clipboard unavailable: {}", reason),
                ToastLevel::Error,
            );
        }
    }
}

/// Shape catalog column metadata into the fixed three-column grid
fn columns_grid(columns: Vec<ColumnInfo>) -> QueryResults {
    QueryResults::new(
        vec![
            "Column".to_string(),
            "Type".to_string(),
            "Nullable".to_string(),
        ],
        columns
            .into_iter()
            .map(|c| vec![c.name, c.data_type, c.is_nullable])
            .collect(),
        Duration::ZERO,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new("test@localhost".to_string(), 100)
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn sample_results(rows: usize) -> QueryResults {
        QueryResults::new(
            vec!["n".to_string()],
            (0..rows).map(|i| vec![i.to_string()]).collect(),
            Duration::from_millis(12),
        )
    }

    #[test]
    fn test_schemas_loaded_auto_selects_and_loads_tables() {
        let mut app = app();
        let actions = app.handle_event(AppEvent::SchemasLoaded(strings(&[
            "public", "pg_toast", "analytics",
        ])));
        assert_eq!(app.navigator.current_schema(), "analytics");
        assert_eq!(
            actions,
            vec![Action::LoadTables {
                schema: "analytics".to_string()
            }]
        );
    }

    #[test]
    fn test_tables_loaded_triggers_columns_and_preview() {
        let mut app = app();
        app.handle_event(AppEvent::SchemasLoaded(strings(&["public"])));
        let actions = app.handle_event(AppEvent::TablesLoaded {
            schema: "public".to_string(),
            tables: strings(&["Orders", "users"]),
        });

        assert_eq!(actions.len(), 2);
        assert_eq!(
            actions[0],
            Action::LoadColumns {
                schema: "public".to_string(),
                table: "Orders".to_string()
            }
        );
        match &actions[1] {
            Action::RunQuery { sql, target } => {
                assert_eq!(sql, "SELECT * FROM public.\"Orders\" LIMIT 100");
                assert_eq!(
                    *target,
                    QueryTarget::Preview {
                        schema: "public".to_string(),
                        table: "Orders".to_string()
                    }
                );
            }
            other => panic!("expected RunQuery, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_schema_clears_panes() {
        let mut app = app();
        app.handle_event(AppEvent::SchemasLoaded(strings(&["public"])));
        app.handle_event(AppEvent::QueryCompleted {
            target: QueryTarget::Adhoc,
            results: sample_results(3),
        });
        assert!(app.results.results().is_some());

        let actions = app.handle_event(AppEvent::TablesLoaded {
            schema: "public".to_string(),
            tables: Vec::new(),
        });
        assert!(actions.is_empty());
        assert!(app.results.results().is_none());
        assert!(app.columns.results().is_none());
    }

    #[test]
    fn test_multi_statement_adhoc_rejected_without_query() {
        let mut app = app();
        app.focus = Pane::Editor;
        app.editor.set_content("SELECT 1; SELECT 2");

        let actions = app.handle_event(key(KeyCode::F(5)));
        assert!(actions.is_empty());
        let (message, level) = app.toasts.active().expect("toast posted");
        assert_eq!(
            message,
            "Multiple statements detected; please run one at a time."
        );
        assert_eq!(level, ToastLevel::Error);
    }

    #[test]
    fn test_single_statement_with_trailing_semicolon_runs() {
        let mut app = app();
        app.editor.set_content("SELECT 1;  ");

        let actions = app.handle_event(key(KeyCode::F(5)));
        assert_eq!(
            actions,
            vec![Action::RunQuery {
                sql: "SELECT 1;".to_string(),
                target: QueryTarget::Adhoc,
            }]
        );
    }

    #[test]
    fn test_empty_adhoc_is_noop() {
        let mut app = app();
        let actions = app.handle_event(key(KeyCode::F(5)));
        assert!(actions.is_empty());
        assert!(app.toasts.active().is_none());
    }

    #[test]
    fn test_query_completed_sets_results_and_toasts() {
        let mut app = app();
        let actions = app.handle_event(AppEvent::QueryCompleted {
            target: QueryTarget::Adhoc,
            results: sample_results(5),
        });
        assert!(actions.is_empty());
        assert_eq!(app.results.results().map(|r| r.row_count()), Some(5));
        let (message, level) = app.toasts.active().expect("toast posted");
        assert_eq!(message, "5 rows in 12ms");
        assert_eq!(level, ToastLevel::Success);
    }

    #[test]
    fn test_query_failed_keeps_prior_results() {
        let mut app = app();
        app.handle_event(AppEvent::QueryCompleted {
            target: QueryTarget::Adhoc,
            results: sample_results(2),
        });

        app.handle_event(AppEvent::QueryFailed {
            target: QueryTarget::Adhoc,
            error: "syntax error at or near \"FORM\"".to_string(),
        });

        // Previous result is untouched; the failure only toasts.
        assert_eq!(app.results.results().map(|r| r.row_count()), Some(2));
        let (message, level) = app.toasts.active().expect("toast posted");
        assert!(message.contains("syntax error"));
        assert_eq!(level, ToastLevel::Error);
    }

    #[test]
    fn test_stale_preview_completion_dropped() {
        let mut app = app();
        app.handle_event(AppEvent::SchemasLoaded(strings(&["public"])));
        app.handle_event(AppEvent::TablesLoaded {
            schema: "public".to_string(),
            tables: strings(&["a", "b"]),
        });
        assert_eq!(app.navigator.current_table(), "a");

        // User moves on to table "b" before the preview of "a" lands
        app.focus = Pane::Tables;
        app.table_cursor = 1;
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.navigator.current_table(), "b");

        let actions = app.handle_event(AppEvent::QueryCompleted {
            target: QueryTarget::Preview {
                schema: "public".to_string(),
                table: "a".to_string(),
            },
            results: sample_results(9),
        });
        assert!(actions.is_empty());
        assert!(app.results.results().is_none());
    }

    #[test]
    fn test_stale_columns_completion_dropped() {
        let mut app = app();
        app.handle_event(AppEvent::SchemasLoaded(strings(&["public"])));
        app.handle_event(AppEvent::TablesLoaded {
            schema: "public".to_string(),
            tables: strings(&["a", "b"]),
        });
        app.focus = Pane::Tables;
        app.table_cursor = 1;
        app.handle_event(key(KeyCode::Enter));

        app.handle_event(AppEvent::ColumnsLoaded {
            schema: "public".to_string(),
            table: "a".to_string(),
            columns: vec![ColumnInfo {
                name: "id".to_string(),
                data_type: "integer".to_string(),
                is_nullable: "NO".to_string(),
            }],
        });
        assert!(app.columns.results().is_none());
    }

    #[test]
    fn test_columns_loaded_populates_grid() {
        let mut app = app();
        app.handle_event(AppEvent::SchemasLoaded(strings(&["public"])));
        app.handle_event(AppEvent::TablesLoaded {
            schema: "public".to_string(),
            tables: strings(&["users"]),
        });

        app.handle_event(AppEvent::ColumnsLoaded {
            schema: "public".to_string(),
            table: "users".to_string(),
            columns: vec![
                ColumnInfo {
                    name: "id".to_string(),
                    data_type: "integer".to_string(),
                    is_nullable: "NO".to_string(),
                },
                ColumnInfo {
                    name: "email".to_string(),
                    data_type: "text".to_string(),
                    is_nullable: "YES".to_string(),
                },
            ],
        });

        let grid = app.columns.results().expect("columns set");
        assert_eq!(grid.headers, vec!["Column", "Type", "Nullable"]);
        assert_eq!(grid.rows.len(), 2);
        assert_eq!(grid.rows[0], vec!["id", "integer", "NO"]);
    }

    #[test]
    fn test_schemas_failed_preserves_state() {
        let mut app = app();
        app.handle_event(AppEvent::SchemasLoaded(strings(&["public"])));
        app.handle_event(AppEvent::TablesLoaded {
            schema: "public".to_string(),
            tables: strings(&["users"]),
        });

        // A later manual refresh fails; selection survives.
        app.handle_event(AppEvent::SchemasFailed("connection refused".to_string()));
        assert_eq!(app.navigator.current_schema(), "public");
        assert_eq!(app.navigator.current_table(), "users");
        let (message, _) = app.toasts.active().expect("toast posted");
        assert!(message.contains("Failed to load schemas"));
    }

    #[test]
    fn test_toast_expiry_is_sequence_fenced() {
        let mut app = app();
        app.handle_event(AppEvent::QueryFailed {
            target: QueryTarget::Adhoc,
            error: "boom".to_string(),
        });
        let first_seq = app.toasts.seq();

        app.handle_event(AppEvent::QueryCompleted {
            target: QueryTarget::Adhoc,
            results: sample_results(1),
        });

        // The first toast's revert fires late; the second must survive.
        app.handle_event(AppEvent::ToastExpired(first_seq));
        assert_eq!(
            app.toasts.active().map(|(m, _)| m),
            Some("1 rows in 12ms")
        );

        app.handle_event(AppEvent::ToastExpired(app.toasts.seq()));
        assert!(app.toasts.active().is_none());
    }

    #[test]
    fn test_quit_key_outside_editor() {
        let mut app = app();
        app.focus = Pane::Results;
        assert_eq!(app.handle_event(key(KeyCode::Char('q'))), vec![Action::Quit]);
    }

    #[test]
    fn test_q_types_into_editor() {
        let mut app = app();
        app.focus = Pane::Editor;
        let actions = app.handle_event(key(KeyCode::Char('q')));
        assert!(actions.is_empty());
        assert_eq!(app.editor.content(), "q");
    }

    #[test]
    fn test_refresh_key_reloads_schemas() {
        let mut app = app();
        app.focus = Pane::Schemas;
        assert_eq!(
            app.handle_event(key(KeyCode::Char('r'))),
            vec![Action::LoadSchemas]
        );
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut app = app();
        assert_eq!(app.focus, Pane::Schemas);
        app.handle_event(key(KeyCode::Tab));
        assert_eq!(app.focus, Pane::Tables);
        app.handle_event(key(KeyCode::BackTab));
        assert_eq!(app.focus, Pane::Schemas);
    }

    #[test]
    fn test_schema_selection_via_enter() {
        let mut app = app();
        app.handle_event(AppEvent::SchemasLoaded(strings(&["a", "b"])));
        app.focus = Pane::Schemas;
        app.handle_event(key(KeyCode::Down));
        let actions = app.handle_event(key(KeyCode::Enter));

        assert_eq!(app.navigator.current_schema(), "b");
        assert_eq!(
            actions,
            vec![Action::LoadTables {
                schema: "b".to_string()
            }]
        );
    }

    #[test]
    fn test_paste_routed_to_editor_only_when_focused() {
        let mut app = app();
        app.handle_event(AppEvent::Paste("SELECT 1".to_string()));
        assert_eq!(app.editor.content(), "");

        app.focus = Pane::Editor;
        app.handle_event(AppEvent::Paste("SELECT 1".to_string()));
        assert_eq!(app.editor.content(), "SELECT 1");
    }

    #[test]
    fn test_history_recall_after_run() {
        let mut app = app();
        app.focus = Pane::Editor;
        app.editor.set_content("SELECT 42");
        app.handle_event(key(KeyCode::F(5)));

        app.editor.clear();
        let ctrl_up = AppEvent::Key(KeyEvent::new(KeyCode::Up, KeyModifiers::CONTROL));
        app.handle_event(ctrl_up);
        assert_eq!(app.editor.content(), "SELECT 42");

        let ctrl_down = AppEvent::Key(KeyEvent::new(KeyCode::Down, KeyModifiers::CONTROL));
        app.handle_event(ctrl_down);
        assert_eq!(app.editor.content(), "");
    }

    #[test]
    fn test_format_query_uppercases_keywords() {
        let mut app = app();
        app.focus = Pane::Editor;
        app.editor.set_content("select id from users where id > 1");
        let ctrl_f = AppEvent::Key(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL));
        app.handle_event(ctrl_f);

        let content = app.editor.content();
        assert!(content.contains("SELECT"));
        assert!(content.contains("FROM"));
        assert!(content.contains("WHERE"));
    }
}

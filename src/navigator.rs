//! Catalog selection state machine
//!
//! Drives the schemas → tables → columns navigation: which describe and
//! preview queries are issued, in what order, and what the current
//! selection is. The navigator owns the selection exclusively; everything
//! else reads it.
//!
//! Loads complete asynchronously, so every completion is fenced: a result
//! that no longer matches the current selection is dropped rather than
//! allowed to overwrite a newer selection's display.

/// Schemas the catalog reports but the browser never offers
const SYSTEM_SCHEMAS: [&str; 3] = ["pg_toast", "pg_temp_1", "pg_toast_temp_1"];

/// Navigation state: which levels of the catalog have a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    NoSchema,
    SchemaSelected,
    TableSelected,
}

/// Follow-up work a transition asks the event loop to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    LoadTables { schema: String },
    LoadColumns { schema: String, table: String },
    Preview { schema: String, table: String },
    /// Selected schema has no tables: clear the column and result panes
    ClearDetail,
}

#[derive(Debug)]
pub struct Navigator {
    state: NavState,
    schemas: Vec<String>,
    tables: Vec<String>,
    current_schema: String,
    current_table: String,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            state: NavState::NoSchema,
            schemas: Vec::new(),
            tables: Vec::new(),
            current_schema: String::new(),
            current_table: String::new(),
        }
    }

    /// Apply a completed schema-list load. Filters system schemas, sorts,
    /// and auto-selects the first schema when any exist.
    ///
    /// On a manual refresh that fails, this is simply never called, so the
    /// prior selection survives.
    pub fn schemas_loaded(&mut self, names: Vec<String>) -> Vec<NavAction> {
        let mut schemas: Vec<String> = names
            .into_iter()
            .filter(|n| !SYSTEM_SCHEMAS.contains(&n.as_str()))
            .collect();
        schemas.sort();
        self.schemas = schemas;

        match self.schemas.first().cloned() {
            Some(first) => self.select_schema(&first),
            None => {
                self.state = NavState::NoSchema;
                self.current_schema.clear();
                self.current_table.clear();
                self.tables.clear();
                vec![NavAction::ClearDetail]
            }
        }
    }

    /// Select a schema and request its tables. The previous table
    /// selection is cleared immediately; it belonged to the old schema.
    pub fn select_schema(&mut self, name: &str) -> Vec<NavAction> {
        self.current_schema = name.to_string();
        self.current_table.clear();
        self.tables.clear();
        self.state = NavState::SchemaSelected;
        vec![NavAction::LoadTables {
            schema: name.to_string(),
        }]
    }

    /// Apply a completed table-list load. Dropped when the user has
    /// already moved to a different schema.
    pub fn tables_loaded(&mut self, schema: &str, tables: Vec<String>) -> Vec<NavAction> {
        if schema != self.current_schema {
            return Vec::new();
        }
        self.tables = tables;

        match self.tables.first().cloned() {
            Some(first) => self.select_table(&first),
            None => {
                self.current_table.clear();
                self.state = NavState::SchemaSelected;
                vec![NavAction::ClearDetail]
            }
        }
    }

    /// Select a table: load its columns and issue a preview.
    ///
    /// Only tables from the most recent load for the current schema are
    /// selectable; anything else is ignored.
    pub fn select_table(&mut self, name: &str) -> Vec<NavAction> {
        if !self.tables.iter().any(|t| t == name) {
            return Vec::new();
        }
        self.current_table = name.to_string();
        self.state = NavState::TableSelected;
        vec![
            NavAction::LoadColumns {
                schema: self.current_schema.clone(),
                table: name.to_string(),
            },
            NavAction::Preview {
                schema: self.current_schema.clone(),
                table: name.to_string(),
            },
        ]
    }

    /// Whether a completion tagged with this (schema, table) still
    /// matches the current selection.
    pub fn matches_selection(&self, schema: &str, table: &str) -> bool {
        schema == self.current_schema && table == self.current_table
    }

    /// Whether a schema-level completion still matches.
    pub fn matches_schema(&self, schema: &str) -> bool {
        schema == self.current_schema
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn schemas(&self) -> &[String] {
        &self.schemas
    }

    pub fn tables(&self) -> &[String] {
        &self.tables
    }

    pub fn current_schema(&self) -> &str {
        &self.current_schema
    }

    pub fn current_table(&self) -> &str {
        &self.current_table
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

//! Table view seam and its console implementation

use colored::Colorize;
use tabled::{Table, Tabled};
use tally_common::InventoryRow;

/// Columns the view supports searching on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchColumn {
    ResourceType,
    Namespace,
}

/// The widget boundary. Implementations retain the row set across searches;
/// active needles survive a row replacement and re-apply to the new rows.
pub trait TableView {
    /// Replace the underlying data set wholesale
    fn replace_rows(&mut self, rows: Vec<InventoryRow>);

    /// Set one column's needle and recompute visibility. An empty needle
    /// clears the column. Resource type matches case-insensitively on a
    /// substring of the kind label; namespace matches exactly.
    fn search(&mut self, column: SearchColumn, needle: &str);
}

/// Row as rendered by the console table, placeholder already substituted
#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Resource Type")]
    resource_type: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Namespace")]
    namespace: String,
    #[tabled(rename = "Replicas")]
    replicas: String,
    #[tabled(rename = "Available Replicas")]
    available_replicas: String,
    #[tabled(rename = "Creation Timestamp")]
    creation_timestamp: String,
    #[tabled(rename = "Labels")]
    labels: String,
}

impl From<&InventoryRow> for TableRow {
    fn from(row: &InventoryRow) -> Self {
        let display = row.display();
        Self {
            resource_type: display.resource_type,
            name: display.name,
            namespace: display.namespace,
            replicas: display.replicas,
            available_replicas: display.available_replicas,
            creation_timestamp: display.creation_timestamp,
            labels: display.labels,
        }
    }
}

/// Console table: retains the full row set plus the active needles and
/// renders only the rows passing both.
#[derive(Default)]
pub struct ConsoleTable {
    rows: Vec<InventoryRow>,
    visible: Vec<usize>,
    type_needle: String,
    namespace_needle: String,
}

impl ConsoleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// All retained rows, unfiltered
    pub fn rows(&self) -> &[InventoryRow] {
        &self.rows
    }

    /// Rows passing the active needles, in retained order
    pub fn visible(&self) -> Vec<&InventoryRow> {
        self.visible.iter().map(|&index| &self.rows[index]).collect()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Render the visible rows, or a notice when nothing matches
    pub fn render(&self) -> String {
        if self.visible.is_empty() {
            return "No results found".yellow().to_string();
        }
        let rows: Vec<TableRow> = self.visible().into_iter().map(TableRow::from).collect();
        Table::new(rows).to_string()
    }

    pub fn print(&self) {
        println!("{}", self.render());
    }

    fn matches(&self, row: &InventoryRow) -> bool {
        let type_ok = self.type_needle.is_empty()
            || row
                .resource_type
                .label()
                .to_lowercase()
                .contains(&self.type_needle);
        let namespace_ok = self.namespace_needle.is_empty()
            || row.namespace.as_deref() == Some(self.namespace_needle.as_str());
        type_ok && namespace_ok
    }

    // Needles fully determine the outcome, so recomputing is idempotent.
    fn refresh(&mut self) {
        let visible: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| self.matches(row))
            .map(|(index, _)| index)
            .collect();
        self.visible = visible;
    }
}

impl TableView for ConsoleTable {
    fn replace_rows(&mut self, rows: Vec<InventoryRow>) {
        self.rows = rows;
        self.refresh();
    }

    fn search(&mut self, column: SearchColumn, needle: &str) {
        match column {
            SearchColumn::ResourceType => self.type_needle = needle.to_lowercase(),
            SearchColumn::Namespace => self.namespace_needle = needle.to_string(),
        }
        self.refresh();
    }
}

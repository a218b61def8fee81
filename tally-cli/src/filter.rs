//! Filter state and the controller that drives the table view

use crate::view::{SearchColumn, TableView};
use tally_common::InventoryRow;

/// Current filter selections. `None` means the dimension is unfiltered;
/// the raw selections `""` and `"all"` normalize to `None` on entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub resource_type: Option<String>,
    pub namespace: Option<String>,
}

impl FilterState {
    /// Build a state from raw selections, applying the same ""/"all"
    /// normalization the controller applies
    pub fn from_selections(resource_type: Option<&str>, namespace: Option<&str>) -> Self {
        Self {
            resource_type: resource_type.and_then(normalize_selection),
            namespace: namespace.and_then(normalize_selection),
        }
    }

    /// Value a dimension contributes to the export query, empty when unset
    pub fn resource_type_param(&self) -> &str {
        self.resource_type.as_deref().unwrap_or("")
    }

    pub fn namespace_param(&self) -> &str {
        self.namespace.as_deref().unwrap_or("")
    }
}

/// Filter mutations flowing from user input to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    ResourceTypeSelected(String),
    NamespaceSelected(String),
    Reset,
}

/// Owns the filter state and the view it drives. Every filter mutation
/// goes through here; nothing else touches the view's searches.
pub struct FilterController<V: TableView> {
    state: FilterState,
    view: V,
}

impl<V: TableView> FilterController<V> {
    pub fn new(view: V) -> Self {
        Self {
            state: FilterState::default(),
            view,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Hand a fresh row set to the view; the active filters re-apply
    pub fn load(&mut self, rows: Vec<InventoryRow>) {
        self.view.replace_rows(rows);
    }

    /// Event-dispatch entry point for user input
    pub fn handle(&mut self, event: FilterEvent) {
        match event {
            FilterEvent::ResourceTypeSelected(value) => self.set_resource_type(&value),
            FilterEvent::NamespaceSelected(value) => self.set_namespace(&value),
            FilterEvent::Reset => self.reset(),
        }
    }

    pub fn set_resource_type(&mut self, raw: &str) {
        self.state.resource_type = normalize_selection(raw);
        self.view
            .search(SearchColumn::ResourceType, self.state.resource_type_param());
    }

    pub fn set_namespace(&mut self, raw: &str) {
        self.state.namespace = normalize_selection(raw);
        self.view
            .search(SearchColumn::Namespace, self.state.namespace_param());
    }

    /// Clear both dimensions
    pub fn reset(&mut self) {
        self.state = FilterState::default();
        self.view.search(SearchColumn::ResourceType, "");
        self.view.search(SearchColumn::Namespace, "");
    }
}

// "" and "all" (any case) mean no filter for the dimension
fn normalize_selection(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

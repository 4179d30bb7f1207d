//! Data table component types.
//!
//! These types configure the list screens (columns, filters, bulk-action
//! scaffolding). Filters here are declarative only; their values are always
//! forwarded to the Platform API, never applied to an already-fetched page.

use serde::{Deserialize, Serialize};

use bristle_core::OrderStatus;

use crate::platform::types::ProductStatus;

/// Column definition for a data table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableColumn {
    /// Unique key for the column.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
    /// Whether the column is visible by default.
    pub default_visible: bool,
}

impl TableColumn {
    /// Create a new column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            default_visible: true,
        }
    }

    /// Set whether the column is visible by default.
    #[must_use]
    pub const fn visible(mut self, visible: bool) -> Self {
        self.default_visible = visible;
        self
    }
}

/// Filter type for data tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    /// Text input filter.
    Text,
    /// Single-select dropdown.
    Select,
    /// Date range picker.
    DateRange,
}

/// Filter definition for a data table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableFilter {
    /// Filter parameter key, forwarded verbatim to the Platform API.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Filter type.
    pub filter_type: FilterType,
    /// Placeholder text (for text inputs).
    pub placeholder: Option<String>,
    /// Available options (for selects).
    pub options: Vec<FilterOption>,
}

/// Option for select filters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    /// Create a new filter option.
    #[must_use]
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

impl TableFilter {
    /// Create a text filter.
    #[must_use]
    pub fn text(key: &str, label: &str, placeholder: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            filter_type: FilterType::Text,
            placeholder: Some(placeholder.to_string()),
            options: vec![],
        }
    }

    /// Create a select filter.
    #[must_use]
    pub fn select(key: &str, label: &str, options: Vec<FilterOption>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            filter_type: FilterType::Select,
            placeholder: None,
            options,
        }
    }

    /// Create a date range filter (rendered as `from`/`to` date inputs).
    #[must_use]
    pub fn date_range(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            filter_type: FilterType::DateRange,
            placeholder: None,
            options: vec![],
        }
    }
}

/// Bulk action definition for data tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkAction {
    /// Action key (posted with the selected row IDs).
    pub key: String,
    /// Display label.
    pub label: String,
    /// Whether this is a destructive action.
    pub destructive: bool,
}

impl BulkAction {
    /// Create a new bulk action.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            destructive: false,
        }
    }

    /// Mark this action as destructive.
    #[must_use]
    pub const fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataTableConfig {
    /// Unique table identifier.
    pub table_id: String,
    /// Column definitions.
    pub columns: Vec<TableColumn>,
    /// Filter definitions.
    pub filters: Vec<TableFilter>,
    /// Bulk action definitions.
    pub bulk_actions: Vec<BulkAction>,
    /// Search placeholder text.
    pub search_placeholder: String,
    /// Title for empty state.
    pub empty_title: String,
    /// Description for empty state.
    pub empty_description: Option<String>,
    /// Whether to show the bulk action bar.
    pub has_bulk_actions: bool,
    /// Whether to show the filter panel.
    pub has_filters: bool,
}

impl DataTableConfig {
    /// Create a new data table configuration.
    #[must_use]
    pub fn new(table_id: &str) -> Self {
        Self {
            table_id: table_id.to_string(),
            columns: vec![],
            filters: vec![],
            bulk_actions: vec![],
            search_placeholder: "Search...".to_string(),
            empty_title: "No items found".to_string(),
            empty_description: None,
            has_bulk_actions: false,
            has_filters: false,
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Add a filter.
    #[must_use]
    pub fn filter(mut self, filter: TableFilter) -> Self {
        self.has_filters = true;
        self.filters.push(filter);
        self
    }

    /// Add a bulk action.
    #[must_use]
    pub fn bulk_action(mut self, action: BulkAction) -> Self {
        self.has_bulk_actions = true;
        self.bulk_actions.push(action);
        self
    }

    /// Set search placeholder.
    #[must_use]
    pub fn search_placeholder(mut self, placeholder: &str) -> Self {
        self.search_placeholder = placeholder.to_string();
        self
    }

    /// Set empty state configuration.
    #[must_use]
    pub fn empty_state(mut self, title: &str, description: Option<&str>) -> Self {
        self.empty_title = title.to_string();
        self.empty_description = description.map(ToString::to_string);
        self
    }

    /// Get default visible columns.
    #[must_use]
    pub fn default_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.default_visible)
            .map(|c| c.key.clone())
            .collect()
    }
}

fn order_status_options() -> Vec<FilterOption> {
    OrderStatus::ALL
        .iter()
        .map(|status| FilterOption::new(&status.to_string(), status.label()))
        .collect()
}

fn product_status_options() -> Vec<FilterOption> {
    ProductStatus::ALL
        .iter()
        .map(|status| FilterOption::new(status.as_str(), status.label()))
        .collect()
}

/// Build the products table configuration.
#[must_use]
pub fn products_table_config(categories: Vec<FilterOption>) -> DataTableConfig {
    DataTableConfig::new("products")
        .column(TableColumn::new("name", "Product"))
        .column(TableColumn::new("category", "Category"))
        .column(TableColumn::new("price", "Price"))
        .column(TableColumn::new("stock", "Stock"))
        .column(TableColumn::new("status", "Status"))
        .column(TableColumn::new("featured", "Featured").visible(false))
        .column(TableColumn::new("created", "Created").visible(false))
        .filter(TableFilter::select("category", "Category", categories))
        .filter(TableFilter::select(
            "status",
            "Status",
            product_status_options(),
        ))
        .bulk_action(BulkAction::new("feature", "Mark Featured"))
        .bulk_action(BulkAction::new("archive", "Archive").destructive())
        .search_placeholder("Search products by name or handle...")
        .empty_state(
            "No products found",
            Some("Try adjusting your search or filters"),
        )
}

/// Build the orders table configuration.
#[must_use]
pub fn orders_table_config() -> DataTableConfig {
    DataTableConfig::new("orders")
        .column(TableColumn::new("order", "Order"))
        .column(TableColumn::new("placed", "Placed"))
        .column(TableColumn::new("customer", "Customer"))
        .column(TableColumn::new("status", "Status"))
        .column(TableColumn::new("total", "Total"))
        .filter(TableFilter::select(
            "status",
            "Status",
            order_status_options(),
        ))
        .filter(TableFilter::date_range("placed_at", "Placed Date"))
        .search_placeholder("Search orders by number or customer...")
        .empty_state("No orders found", Some("Try widening the date range"))
}

/// Build the users table configuration.
#[must_use]
pub fn users_table_config() -> DataTableConfig {
    DataTableConfig::new("users")
        .column(TableColumn::new("name", "Customer"))
        .column(TableColumn::new("email", "Email"))
        .column(TableColumn::new("orders", "Orders"))
        .column(TableColumn::new("spent", "Spent"))
        .column(TableColumn::new("created", "Joined").visible(false))
        .search_placeholder("Search customers by name or email...")
        .empty_state("No customers found", None)
}

/// Build the staff table configuration.
#[must_use]
pub fn staff_table_config() -> DataTableConfig {
    DataTableConfig::new("staff")
        .column(TableColumn::new("name", "Name"))
        .column(TableColumn::new("email", "Email"))
        .column(TableColumn::new("role", "Role"))
        .column(TableColumn::new("created", "Added"))
        .search_placeholder("Search staff...")
        .empty_state("No staff accounts", None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_columns_respects_visibility() {
        let config = products_table_config(vec![]);
        let columns = config.default_columns();
        assert!(columns.contains(&"name".to_string()));
        assert!(!columns.contains(&"created".to_string()));
    }

    #[test]
    fn test_filter_marks_panel_visible() {
        let config = DataTableConfig::new("t");
        assert!(!config.has_filters);
        let config = config.filter(TableFilter::text("q", "Search", "..."));
        assert!(config.has_filters);
    }

    #[test]
    fn test_order_status_filter_covers_all_states() {
        let config = orders_table_config();
        let status_filter = config
            .filters
            .iter()
            .find(|f| f.key == "status")
            .expect("status filter present");
        assert_eq!(status_filter.options.len(), OrderStatus::ALL.len());
    }
}

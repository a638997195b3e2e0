//! Table configuration

use chrono::Duration;

use crate::column::DEFAULT_WIDTH;
use crate::selection::SelectionMode;

/// Presentation settings for a [`BeanTable`](crate::BeanTable).
///
/// # Example
///
/// ```
/// use beantable_lib::TableConfig;
/// use beantable_lib::selection::SelectionMode;
///
/// let config = TableConfig::default()
///     .with_default_width(120)
///     .with_selection_mode(SelectionMode::Multi);
/// ```
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Width given to columns not in a saved layout.
    ///
    /// Default: 75
    pub default_width: u16,

    /// Smallest width a column may be set to.
    ///
    /// Default: 1
    pub min_width: u16,

    /// Text shown for a cell whose accessor failed.
    ///
    /// Default: "N/A"
    pub unavailable_text: String,

    /// How many rows may be selected.
    ///
    /// Default: single
    pub selection_mode: SelectionMode,

    /// Whether cells can be selected by column as well as by row.
    ///
    /// Default: false
    pub column_selection: bool,

    /// Dates older than this are shown with their year.
    ///
    /// Default: 365 days
    pub date_cutoff: Duration,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_WIDTH,
            min_width: 1,
            unavailable_text: "N/A".to_string(),
            selection_mode: SelectionMode::Single,
            column_selection: false,
            date_cutoff: Duration::days(365),
        }
    }
}

impl TableConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default column width.
    pub fn with_default_width(mut self, width: u16) -> Self {
        self.default_width = width;
        self
    }

    /// Sets the minimum column width.
    pub fn with_min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    /// Sets the placeholder for unreadable cells.
    pub fn with_unavailable_text(mut self, text: impl Into<String>) -> Self {
        self.unavailable_text = text.into();
        self
    }

    /// Sets the selection mode.
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Allows or forbids column selection.
    pub fn with_column_selection(mut self, allowed: bool) -> Self {
        self.column_selection = allowed;
        self
    }

    /// Sets the date cutoff.
    pub fn with_date_cutoff(mut self, cutoff: Duration) -> Self {
        self.date_cutoff = cutoff;
        self
    }
}

use std::collections::VecDeque;
use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::catalog::Product;
use crate::config::Config;
use crate::history::BrowsingHistory;
use crate::preferences::available_categories;
use crate::preferences::Preferences;
use crate::recommendation::RecommendationSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Preferences,
    History,
    Catalog,
    Recommendations,
}

impl Panel {
    pub fn next(self) -> Self {
        match self {
            Self::Preferences => Self::History,
            Self::History => Self::Catalog,
            Self::Catalog => Self::Recommendations,
            Self::Recommendations => Self::Preferences,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Preferences => Self::Recommendations,
            Self::History => Self::Preferences,
            Self::Catalog => Self::History,
            Self::Recommendations => Self::Catalog,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Preferences => "Preferences",
            Self::History => "History",
            Self::Catalog => "Product Catalog",
            Self::Recommendations => "Recommendations",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopOverlay {
    None,
    Logs,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSource {
    App,
    Client,
    View,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub seq: u64,
    pub level: LogLevel,
    pub ts_ms: Option<u64>,
    pub source: LogSource,
    pub context: Option<String>,
    pub message: String,
}

impl LogEntry {
    /// Stamped with the wall clock; `seq` is assigned by the buffer.
    pub fn new(level: LogLevel, source: LogSource, message: impl Into<String>) -> Self {
        Self {
            seq: 0,
            level,
            ts_ms: u64::try_from(chrono::Utc::now().timestamp_millis()).ok(),
            source,
            context: None,
            message: message.into(),
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct LogBuffer {
    cap: usize,
    next_seq: u64,
    buf: VecDeque<LogEntry>,
}

impl LogBuffer {
    pub fn new(cap: usize) -> Self {
        let cap = cap.max(1);
        Self {
            cap,
            next_seq: 1,
            buf: VecDeque::with_capacity(cap),
        }
    }

    pub fn append(&mut self, mut entry: LogEntry) {
        entry.seq = self.next_seq;
        self.next_seq += 1;

        if self.buf.len() == self.cap {
            self.buf.pop_front();
        }
        self.buf.push_back(entry);
    }

    pub fn clear(&mut self) {
        self.buf.clear();
        self.next_seq = 1;
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LogEntry> {
        self.buf.iter()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ShopHeader {
    pub service_url: Arc<str>,
}

/// Cursor per panel plus which panel has focus.
///
/// Row 0 of the preferences panel is the price select; rows from 1 map to
/// the derived category list. `catalog_offset` is the first catalog row on
/// screen and only moves when the cursor leaves the window.
#[derive(Debug, Clone)]
pub struct ShopSelection {
    pub focus: Panel,
    pub preferences_row: usize,
    pub history_row: usize,
    pub catalog_row: usize,
    pub catalog_offset: usize,
    pub recommendation_row: usize,
}

impl Default for ShopSelection {
    fn default() -> Self {
        Self {
            focus: Panel::Catalog,
            preferences_row: 0,
            history_row: 0,
            catalog_row: 0,
            catalog_offset: 0,
            recommendation_row: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShopInteraction {
    pub overlay: ShopOverlay,
}

#[derive(Debug, Clone)]
pub struct ShopState {
    pub header: ShopHeader,
    pub catalog: CatalogStore,
    pub preferences: Preferences,
    pub history: BrowsingHistory,
    pub recommendations: RecommendationSession,
    pub selection: ShopSelection,
    pub interaction: ShopInteraction,
    pub logs: LogBuffer,
}

impl ShopState {
    pub fn new(config: &Config) -> Self {
        Self {
            header: ShopHeader {
                service_url: config.api.base_url.as_str().into(),
            },
            catalog: CatalogStore::default(),
            preferences: Preferences::default(),
            history: BrowsingHistory::default(),
            recommendations: RecommendationSession::default(),
            selection: ShopSelection::default(),
            interaction: ShopInteraction {
                overlay: ShopOverlay::None,
            },
            logs: LogBuffer::new(config.ui.log_capacity),
        }
    }

    pub fn available_categories(&self) -> Vec<String> {
        available_categories(self.catalog.products())
    }

    pub fn history_products(&self) -> Vec<Product> {
        self.history.resolve(self.catalog.products())
    }

    pub fn preference_row_count(&self) -> usize {
        1 + self.available_categories().len()
    }

    pub fn row_count(&self, panel: Panel) -> usize {
        match panel {
            Panel::Preferences => self.preference_row_count(),
            Panel::History => self.history_products().len(),
            Panel::Catalog => self.catalog.visible().len(),
            Panel::Recommendations => self.recommendations.items.len(),
        }
    }

    pub fn row(&self, panel: Panel) -> usize {
        match panel {
            Panel::Preferences => self.selection.preferences_row,
            Panel::History => self.selection.history_row,
            Panel::Catalog => self.selection.catalog_row,
            Panel::Recommendations => self.selection.recommendation_row,
        }
    }

    pub fn row_mut(&mut self, panel: Panel) -> &mut usize {
        match panel {
            Panel::Preferences => &mut self.selection.preferences_row,
            Panel::History => &mut self.selection.history_row,
            Panel::Catalog => &mut self.selection.catalog_row,
            Panel::Recommendations => &mut self.selection.recommendation_row,
        }
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.catalog.visible().get(self.selection.catalog_row)
    }

    /// The category under the preferences cursor, if the cursor is on one.
    pub fn selected_category(&self) -> Option<String> {
        let row = self.selection.preferences_row.checked_sub(1)?;
        self.available_categories().into_iter().nth(row)
    }

    /// Pulls every cursor back inside its panel after a list changed size.
    pub fn reconcile_selection(&mut self) {
        for panel in [
            Panel::Preferences,
            Panel::History,
            Panel::Catalog,
            Panel::Recommendations,
        ] {
            let len = self.row_count(panel);
            let row = self.row_mut(panel);
            *row = (*row).min(len.saturating_sub(1));
        }
        self.selection.catalog_offset = self
            .selection
            .catalog_offset
            .min(self.selection.catalog_row);
    }

    /// Keeps the catalog cursor inside a window of `height` rows.
    pub fn scroll_catalog_into_view(&mut self, height: usize) {
        self.selection.catalog_offset = scroll_offset(
            self.selection.catalog_offset,
            self.selection.catalog_row,
            height,
        );
    }
}

/// Smallest move of `offset` that puts `selected` inside a window of
/// `height` rows.
pub fn scroll_offset(offset: usize, selected: usize, height: usize) -> usize {
    if height == 0 || selected < offset {
        return selected.min(offset);
    }
    if selected >= offset + height {
        return selected + 1 - height;
    }
    offset
}

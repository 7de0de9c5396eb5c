use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use crate::color::ColorMap;
use crate::config::{DashboardConfig, Density};
use crate::data::cache::DatasetCache;
use crate::data::filter::{FilterSelection, Selection, filtered_indices};
use crate::data::model::{Field, SwimDataset, SwimRecord};
use crate::data::ranking::{RankingGroup, rank_total_times};
use crate::data::views::{CategorySection, SwimmerDetail, chart_sections, swimmer_details};

/// Which overview the dashboard shows below the tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    /// No swimmer selected: best-time ranking of everybody.
    Ranking,
    /// At least one swimmer selected: comparison charts and detail tables.
    Comparison,
}

/// Tables and charts derived for the current selection.
#[derive(Debug, Clone, Default)]
pub struct DerivedViews {
    pub visible_indices: Vec<usize>,
    pub charts: Vec<CategorySection>,
    pub details: Vec<SwimmerDetail>,
    pub ranking: Vec<RankingGroup>,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Memoised canonical table of the current input file.
    cache: DatasetCache,

    /// Loaded dataset (None until a file has been loaded).
    pub dataset: Option<Arc<SwimDataset>>,

    /// Five-field filter selection.
    pub selection: FilterSelection,

    /// Selected swimmers in the order they were picked.
    pub swimmer_order: Vec<String>,

    /// Views for the current selection (recomputed on every change).
    pub views: DerivedViews,

    pub color_map: ColorMap,

    pub density: Density,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            cache: DatasetCache::new(),
            dataset: None,
            selection: FilterSelection::default(),
            swimmer_order: Vec::new(),
            views: DerivedViews::default(),
            color_map: ColorMap::default(),
            density: Density::default(),
            status_message: None,
        }
    }

    /// Load (or re-use) the canonical table for `path`.
    ///
    /// On failure the previous dataset stays and the error is shown in the
    /// status bar.
    pub fn open_path(&mut self, path: &Path) {
        match self.cache.load(path) {
            Ok(dataset) => {
                let unchanged = self
                    .dataset
                    .as_ref()
                    .is_some_and(|current| Arc::ptr_eq(current, &dataset));
                let digest = self
                    .cache
                    .key()
                    .and_then(|key| key.digest.get(..12))
                    .unwrap_or_default();
                log::info!(
                    "Loaded {} rows for {} swimmers from {} (sha256 {digest})",
                    dataset.len(),
                    dataset.distinct(Field::Swimmer).len(),
                    path.display()
                );
                if unchanged {
                    self.status_message = None;
                } else {
                    self.set_dataset(dataset);
                }
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Ingest a newly loaded dataset and reset the selection.
    pub fn set_dataset(&mut self, dataset: Arc<SwimDataset>) {
        self.color_map = ColorMap::new(dataset.distinct(Field::Swimmer));
        self.selection = FilterSelection::default();
        self.swimmer_order.clear();
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refresh_views();
    }

    /// Ranking when nobody is selected, comparison otherwise.
    pub fn active_view(&self) -> ActiveView {
        let universe = self
            .dataset
            .as_ref()
            .map_or(&[][..], |ds| ds.distinct(Field::Swimmer));
        if self.selection.swimmers.resolve(universe).is_empty() {
            ActiveView::Ranking
        } else {
            ActiveView::Comparison
        }
    }

    /// Recompute every derived view from the canonical table.
    pub fn refresh_views(&mut self) {
        let Some(ds) = self.dataset.clone() else {
            self.views = DerivedViews::default();
            return;
        };

        let visible_indices = filtered_indices(&ds, &self.selection);
        let rows: Vec<&SwimRecord> = visible_indices.iter().map(|&i| &ds.records[i]).collect();

        let ranking = match self.active_view() {
            ActiveView::Ranking => rank_total_times(&ds.records),
            ActiveView::Comparison => Vec::new(),
        };

        self.views = DerivedViews {
            charts: chart_sections(&rows),
            details: swimmer_details(&rows, &self.swimmer_order),
            ranking,
            visible_indices,
        };
    }

    /// Add or remove a swimmer. Adding beyond `max_swimmers` is refused and
    /// returns `false`.
    pub fn toggle_swimmer(&mut self, swimmer: &str) -> bool {
        if let Some(pos) = self.swimmer_order.iter().position(|s| s == swimmer) {
            self.swimmer_order.remove(pos);
        } else if self.swimmer_order.len() < self.config.max_swimmers {
            self.swimmer_order.push(swimmer.to_string());
        } else {
            return false;
        }
        self.selection.swimmers =
            Selection::Explicit(self.swimmer_order.iter().cloned().collect());
        self.refresh_views();
        true
    }

    /// Tick or untick the "select all" box of a field. Unticking leaves
    /// nothing selected.
    pub fn set_all(&mut self, field: Field, all: bool) {
        *self.selection.get_mut(field) = if all {
            Selection::All
        } else {
            Selection::default()
        };
        self.refresh_views();
    }

    /// Toggle a single value of a non-swimmer field.
    pub fn toggle_value(&mut self, field: Field, value: &str) {
        if field == Field::Swimmer {
            self.toggle_swimmer(value);
            return;
        }
        let universe = self
            .dataset
            .as_ref()
            .map(|ds| ds.distinct(field).to_vec())
            .unwrap_or_default();
        let mut set: BTreeSet<String> = self.selection.get(field).resolve(&universe);
        if !set.remove(value) {
            set.insert(value.to_string());
        }
        *self.selection.get_mut(field) = Selection::Explicit(set);
        self.refresh_views();
    }

    pub fn set_density(&mut self, density: Density) {
        if self.density != density {
            log::debug!("layout density now {density:?}");
            self.density = density;
        }
    }
}

// src/config/options.rs
use std::collections::BTreeSet;
use std::path::Path;

use super::consts::*;

/// Per-table configuration. Everything here is caller-supplied; the table
/// itself only owns sort and page state.
#[derive(Clone, Debug, PartialEq)]
pub struct TableOptions {
    /// Column indices that get sort controls.
    pub sortable_columns: BTreeSet<usize>,
    /// Shown as a single full-width row when there is no data.
    pub empty_message: String,
    /// Presentation bounds (egui points). `None` = unbounded.
    pub max_height: Option<f32>,
    pub max_width: Option<f32>,
    /// Column whose cells are always treated as dates when sorting.
    pub date_column: Option<usize>,
    /// Initial page size.
    pub items_per_page: usize,
    /// Choices offered by the page-size selector.
    pub page_size_choices: Vec<usize>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            sortable_columns: BTreeSet::from([DEFAULT_SORTABLE_COLUMN]),
            empty_message: s!(DEFAULT_EMPTY_MESSAGE),
            max_height: Some(DEFAULT_MAX_HEIGHT),
            max_width: None,
            date_column: None,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            page_size_choices: PAGE_SIZE_CHOICES.to_vec(),
        }
    }
}

impl TableOptions {
    pub fn sortable<I: IntoIterator<Item = usize>>(mut self, cols: I) -> Self {
        self.sortable_columns = cols.into_iter().collect();
        self
    }

    pub fn empty_message(mut self, msg: impl Into<String>) -> Self {
        self.empty_message = msg.into();
        self
    }

    pub fn date_column(mut self, col: Option<usize>) -> Self {
        self.date_column = col;
        self
    }

    pub fn items_per_page(mut self, n: usize) -> Self {
        self.items_per_page = n.max(1);
        self
    }

    pub fn max_height(mut self, h: Option<f32>) -> Self {
        self.max_height = h;
        self
    }

    pub fn max_width(mut self, w: Option<f32>) -> Self {
        self.max_width = w;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(&self) -> char {
        match self { Delim::Csv => ',', Delim::Tsv => '\t' }
    }

    /// `.tsv`/`.tab` → Tsv, anything else → Csv.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()) {
            Some(ref e) if e == "tsv" || e == "tab" => Delim::Tsv,
            _ => Delim::Csv,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(Delim::Csv),
            "tsv" => Some(Delim::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderMode {
    /// First row is the header.
    Present,
    /// No header row; columns are named "Col N".
    Absent,
    /// Guess from the first row.
    Detect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    /// `None` = pick from the file extension.
    pub delim: Option<Delim>,
    pub headers: HeaderMode,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delim: None, headers: HeaderMode::Detect }
    }
}

impl LoadOptions {
    pub fn delim_for(&self, path: &Path) -> Delim {
        self.delim.unwrap_or_else(|| Delim::from_path(path))
    }
}

// src/config/state.rs
use std::path::PathBuf;

use super::consts::{DEFAULT_EXPORT_FILE, WINDOW_H, WINDOW_W};
use super::options::{LoadOptions, TableOptions};

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,

    /// File shown in the table; `None` = built-in demo data.
    pub source_path: Option<PathBuf>,

    /// Show the day navigation bar above the table
    pub show_date_bar: bool,

    /// Only show rows whose date column falls on the selected day
    pub filter_by_date: bool,

    /// Record detail panel on the right
    pub show_details: bool,

    /// Where "Export view" writes the current sorted rows
    pub export_path: PathBuf,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            source_path: None,
            show_date_bar: true,
            filter_by_date: false,
            show_details: true,
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub table: TableOptions,
    pub load: LoadOptions,
    pub gui: GuiState,
}

// src/config/consts.rs

// Pagination
pub const PAGE_SIZE_CHOICES: &[usize] = &[5, 10, 25, 50];
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
pub const MAX_PAGE_BUTTONS: usize = 5;

// Table
pub const DEFAULT_EMPTY_MESSAGE: &str = "No Data Available";
pub const DEFAULT_SORTABLE_COLUMN: usize = 0;
pub const DEFAULT_MAX_HEIGHT: f32 = 700.0;
pub const ROW_HEIGHT: f32 = 22.0;
pub const HEADER_HEIGHT: f32 = 26.0;
pub const MIN_COLUMN_WIDTH: f32 = 40.0;

// Dates
pub const ISO_DATE: &str = "%Y-%m-%d";
pub const DISPLAY_DATE: &str = "%a %b %d %Y"; // "Wed Jan 10 2024"

// Window
pub const WINDOW_TITLE: &str = "POS Tables";
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 760.0;

// Files
pub const DEFAULT_EXPORT_FILE: &str = "table_view.csv";

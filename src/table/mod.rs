// src/table/mod.rs
pub mod cell;
pub mod date_nav;
pub mod model;
pub mod paging;
pub mod sort;

pub use cell::Cell;
pub use date_nav::DateNav;
pub use model::{IndexedRow, SortablePagedTable, TableBody};
pub use paging::PageWindow;
pub use sort::{SortDirection, SortDirective};

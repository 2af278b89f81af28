// src/table/model.rs
//! SortablePagedTable: sort + page state over caller-supplied rows.
//!
//! Rows are kept in input order, each tagged with its original index. The
//! display order is a list of original indices recomputed whenever the data
//! or the sort directive changes; the pager slices that list. Row clicks
//! always resolve through it, so the callback sees the caller's index no
//! matter how the table is sorted or paged.

use std::fmt;
use std::ops::Range;

use crate::config::options::TableOptions;

use super::cell::Cell;
use super::paging::PageWindow;
use super::sort::{self, SortDirection, SortDirective};

static ABSENT: Cell = Cell::Absent;

/// A row plus its position in the caller's input. The index never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexedRow {
    pub original_index: usize,
    pub cells: Vec<Cell>,
}

impl IndexedRow {
    pub fn new(original_index: usize, cells: Vec<Cell>) -> Self {
        Self { original_index, cells }
    }

    /// Cell at `col`; `None` past the end of a short row.
    pub fn cell(&self, col: usize) -> Option<&Cell> {
        self.cells.get(col)
    }

    /// Cells padded/truncated to `ncols`, missing ones read as Absent.
    pub fn cells_for(&self, ncols: usize) -> impl Iterator<Item = &Cell> {
        (0..ncols).map(move |c| self.cells.get(c).unwrap_or(&ABSENT))
    }
}

/// What the table body shows for the current page.
#[derive(Debug, PartialEq)]
pub enum TableBody<'a> {
    Rows(Vec<&'a IndexedRow>),
    /// No data at all: one full-width row with this message.
    Empty(&'a str),
}

pub type RowClick = Box<dyn FnMut(usize)>;

pub struct SortablePagedTable {
    columns: Vec<String>,
    rows: Vec<IndexedRow>,
    options: TableOptions,
    directive: SortDirective,
    /// Original indices in display order
    order: Vec<usize>,
    window: PageWindow,
    on_row_click: Option<RowClick>,
}

impl fmt::Debug for SortablePagedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortablePagedTable")
            .field("columns", &self.columns)
            .field("rows", &self.rows.len())
            .field("directive", &self.directive)
            .field("window", &self.window)
            .field("on_row_click", &self.on_row_click.is_some())
            .finish()
    }
}

impl SortablePagedTable {
    pub fn new<C, S>(columns: C, data: Vec<Vec<Cell>>) -> Self
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_options(columns, data, TableOptions::default())
    }

    pub fn with_options<C, S>(columns: C, data: Vec<Vec<Cell>>, options: TableOptions) -> Self
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows = index_rows(data);
        let window = PageWindow::new(options.items_per_page, rows.len());
        let mut t = Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows,
            options,
            directive: SortDirective::Unsorted,
            order: Vec::new(),
            window,
            on_row_click: None,
        };
        t.resort();
        t
    }

    /* ---------- inputs ---------- */

    /// Replace the data. Rows are re-indexed from 0; sort and page are kept.
    pub fn set_data(&mut self, data: Vec<Vec<Cell>>) {
        self.rows = index_rows(data);
        self.window.set_total_items(self.rows.len());
        self.resort();
        logd!("Table: data replaced (rows={})", self.rows.len());
    }

    pub fn set_columns<C, S>(&mut self, columns: C)
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
    }

    pub fn set_on_row_click(&mut self, f: impl FnMut(usize) + 'static) {
        self.on_row_click = Some(Box::new(f));
    }

    pub fn clear_on_row_click(&mut self) {
        self.on_row_click = None;
    }

    pub fn options(&self) -> &TableOptions { &self.options }

    /// Swap options. The page size only resets the page when it changes.
    pub fn set_options(&mut self, options: TableOptions) {
        let resize = options.items_per_page != self.options.items_per_page;
        self.options = options;
        if resize {
            self.window.set_items_per_page(self.options.items_per_page);
        }
        if let Some(col) = self.directive.column() {
            if !self.is_sortable(col) {
                self.directive = SortDirective::Unsorted;
            }
        }
        self.resort();
    }

    /* ---------- reads ---------- */

    pub fn columns(&self) -> &[String] { &self.columns }
    pub fn ncols(&self) -> usize { self.columns.len() }
    pub fn rows(&self) -> &[IndexedRow] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn empty_message(&self) -> &str { &self.options.empty_message }

    /// Row by original index.
    pub fn row(&self, original_index: usize) -> Option<&IndexedRow> {
        self.rows.get(original_index)
    }

    /* ---------- sorting ---------- */

    pub fn is_sortable(&self, col: usize) -> bool {
        self.options.sortable_columns.contains(&col)
    }

    pub fn sort_directive(&self) -> SortDirective { self.directive }

    /// Up/down control on a column. Re-requesting the active direction clears.
    pub fn request_sort(&mut self, col: usize, direction: SortDirection) {
        if !self.is_sortable(col) {
            return;
        }
        self.set_directive(self.directive.requested(col, direction));
    }

    /// Header click on a column: ascending → descending → cleared.
    pub fn cycle_sort(&mut self, col: usize) {
        if !self.is_sortable(col) {
            return;
        }
        self.set_directive(self.directive.cycled(col));
    }

    /// Set a directive outright. Directives on non-sortable columns are ignored.
    pub fn apply_sort(&mut self, directive: SortDirective) {
        if let Some(col) = directive.column() {
            if !self.is_sortable(col) {
                return;
            }
        }
        self.set_directive(directive);
    }

    pub fn clear_sort(&mut self) {
        self.set_directive(SortDirective::Unsorted);
    }

    fn set_directive(&mut self, directive: SortDirective) {
        if directive != self.directive {
            logd!("Table: sort {:?} → {:?}", self.directive, directive);
        }
        self.directive = directive;
        self.resort();
    }

    fn resort(&mut self) {
        self.order = sort::sorted_order(&self.rows, self.directive, self.options.date_column);
    }

    /// Original indices in display order (all pages).
    pub fn sorted_indices(&self) -> &[usize] { &self.order }

    /// All rows in display order.
    pub fn sorted_rows(&self) -> impl Iterator<Item = &IndexedRow> {
        self.order.iter().map(move |&ix| &self.rows[ix])
    }

    /* ---------- paging ---------- */

    pub fn page_window(&self) -> PageWindow { self.window }
    pub fn current_page(&self) -> usize { self.window.current_page() }
    pub fn total_pages(&self) -> usize { self.window.total_pages() }
    pub fn items_per_page(&self) -> usize { self.window.items_per_page() }
    pub fn page_size_choices(&self) -> &[usize] { &self.options.page_size_choices }

    pub fn set_page(&mut self, page: usize) { self.window.set_page(page) }
    pub fn next_page(&mut self) { self.window.next() }
    pub fn prev_page(&mut self) { self.window.prev() }
    pub fn first_page(&mut self) { self.window.set_page(1) }
    pub fn last_page(&mut self) { self.window.set_page(self.window.total_pages()) }
    pub fn has_prev(&self) -> bool { !self.window.is_first() }
    pub fn has_next(&self) -> bool { !self.window.is_last() }

    /// Any size is accepted (0 counts as 1); always returns to page 1.
    pub fn set_items_per_page(&mut self, n: usize) {
        self.options.items_per_page = n.max(1);
        self.window.set_items_per_page(n);
    }

    pub fn page_numbers(&self) -> Vec<usize> { self.window.page_numbers() }
    pub fn all_pages(&self) -> Range<usize> { self.window.all_pages() }
    pub fn showing_range(&self) -> (usize, usize, usize) { self.window.showing() }

    /// Original indices on the current page, in display order.
    pub fn page_indices(&self) -> &[usize] {
        &self.order[self.window.slice()]
    }

    pub fn page_rows(&self) -> Vec<&IndexedRow> {
        self.page_indices().iter().map(|&ix| &self.rows[ix]).collect()
    }

    pub fn body(&self) -> TableBody<'_> {
        if self.rows.is_empty() {
            TableBody::Empty(&self.options.empty_message)
        } else {
            TableBody::Rows(self.page_rows())
        }
    }

    /* ---------- clicks ---------- */

    /// Original index of the row shown at `display_pos` on the current page.
    pub fn original_index_at(&self, display_pos: usize) -> Option<usize> {
        self.page_indices().get(display_pos).copied()
    }

    /// Resolve a click on the current page and notify the callback.
    pub fn click(&mut self, display_pos: usize) -> Option<usize> {
        let ix = self.original_index_at(display_pos)?;
        if let Some(cb) = self.on_row_click.as_mut() {
            cb(ix);
        }
        Some(ix)
    }
}

fn index_rows(data: Vec<Vec<Cell>>) -> Vec<IndexedRow> {
    data.into_iter()
        .enumerate()
        .map(|(i, cells)| IndexedRow::new(i, cells))
        .collect()
}

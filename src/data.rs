// src/data.rs
//
// Canonical loaded data and the row selections handed to the table.
//
// - DataSet: headers + cell rows as loaded (file or demo). Read-only once built.
// - RowSelection: which DataSet rows the table currently gets (all of them, or
//   one day's worth). Holds indices only; the table's "original index" is a
//   position in `row_ix`, and `source_index` maps it back to the DataSet.

use chrono::NaiveDate;

use crate::csv::default_headers;
use crate::table::cell::Cell;
use crate::table::sort::parse_date;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl DataSet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    /// Build from parsed text. Missing headers become "Col N".
    pub fn from_text_rows(headers: Option<Vec<String>>, rows: Vec<Vec<String>>) -> Self {
        let headers = headers.unwrap_or_else(|| {
            default_headers(rows.iter().map(Vec::len).max().unwrap_or(0))
        });
        let rows = rows
            .into_iter()
            .map(|r| r.iter().map(|c| Cell::parse(c)).collect())
            .collect();
        Self { headers, rows }
    }

    pub fn ncols(&self) -> usize { self.headers.len() }
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// A column headed "date" (any case, e.g. "Order Date"), else the first
    /// column whose present cells all parse as dates.
    pub fn date_column(&self) -> Option<usize> {
        if let Some(ix) = self.headers.iter().position(|h| h.to_lowercase().contains("date")) {
            return Some(ix);
        }
        (0..self.ncols()).find(|&c| {
            let mut present = self.rows.iter().filter_map(|r| r.get(c)).filter(|c| !c.is_absent()).peekable();
            present.peek().is_some() && present.all(|cell| day_of(cell).is_some())
        })
    }

    /// Latest day found in `col`, if any.
    pub fn latest_date(&self, col: usize) -> Option<NaiveDate> {
        self.rows.iter().filter_map(|r| r.get(col)).filter_map(day_of).max()
    }

    /// Rows whose `column` falls on `day`, in dataset order.
    pub fn rows_on(&self, day: NaiveDate, column: usize) -> Vec<Vec<Cell>> {
        RowSelection::on_day(self, column, day).to_owned_rows()
    }

    /// Rows as display text, padded to the header width.
    pub fn text_rows(&self, row_ix: &[usize]) -> Vec<Vec<String>> {
        row_ix
            .iter()
            .filter_map(|&ix| self.rows.get(ix))
            .map(|r| (0..self.ncols()).map(|c| r.get(c).map(Cell::display_text).unwrap_or_default()).collect())
            .collect()
    }
}

/// Calendar day of a cell (dates and date-times), if it has one.
pub fn day_of(cell: &Cell) -> Option<NaiveDate> {
    let text = match cell {
        Cell::Text(t) => t.as_str(),
        Cell::Composite(_) => cell.first_text()?,
        _ => return None,
    };
    parse_date(text).map(|dt| dt.date())
}

/// Index projection over a DataSet.
#[derive(Clone, Debug)]
pub struct RowSelection<'a> {
    /// Positions of kept rows in the dataset
    pub row_ix: Vec<usize>,
    ds: &'a DataSet,
}

impl<'a> RowSelection<'a> {
    pub fn all(ds: &'a DataSet) -> Self {
        Self { row_ix: (0..ds.rows.len()).collect(), ds }
    }

    /// Rows whose `col` falls on `day`.
    pub fn on_day(ds: &'a DataSet, col: usize, day: NaiveDate) -> Self {
        let row_ix = ds
            .rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.get(col).and_then(day_of) == Some(day))
            .map(|(i, _)| i)
            .collect();
        Self { row_ix, ds }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// DataSet index of the selection's `i`-th row.
    pub fn source_index(&self, i: usize) -> Option<usize> {
        self.row_ix.get(i).copied()
    }

    /// Materialize owned rows for the table.
    pub fn to_owned_rows(&self) -> Vec<Vec<Cell>> {
        self.row_ix.iter().map(|&ix| self.ds.rows[ix].clone()).collect()
    }
}

/// Built-in daily transactions so the viewer has something to show.
pub fn demo_dataset() -> DataSet {
    const ITEMS: &[(&str, f64)] = &[
        ("Chicken Adobo", 145.0),
        ("Pork Sinigang", 165.0),
        ("Garlic Rice", 35.0),
        ("Halo-Halo", 95.0),
        ("Iced Tea", 45.0),
        ("Pancit Canton", 120.0),
        ("Lumpia (6 pcs)", 80.0),
        ("Leche Flan", 60.0),
    ];
    const PAYMENTS: &[&str] = &["Cash", "GCash", "Card"];
    const STATUS: &[&str] = &["Served", "Served", "Served", "Voided", "Pending"];

    let headers = ["Date", "Order #", "Item", "Qty", "Amount", "Payment", "Status"]
        .iter()
        .map(|h| s!(*h))
        .collect();

    let first_day = NaiveDate::from_ymd_opt(2024, 1, 8);
    let mut rows = Vec::new();
    let mut seed: u32 = 7;
    let mut next = |n: usize| {
        // LCG; only needs to look varied
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        ((seed >> 16) as usize) % n
    };

    for order in 0..48u32 {
        let day = first_day.and_then(|d| d.checked_add_days(chrono::Days::new((order / 12) as u64)));
        let hour = 10 + next(11);
        let minute = next(60);
        let date = day.map(|d| format!("{} {:02}:{:02}", d.format("%Y-%m-%d"), hour, minute));
        let (item, price) = ITEMS[next(ITEMS.len())];
        let qty = 1 + next(4) as u32;
        let status = STATUS[next(STATUS.len())];
        // Some orders have no payment recorded yet
        let payment = if status == "Pending" { None } else { Some(PAYMENTS[next(PAYMENTS.len())]) };

        rows.push(vec![
            Cell::from(date),
            Cell::from(format!("ORD-{:04}", 1000 + order)),
            Cell::from(item),
            Cell::from(qty),
            Cell::from(price * qty as f64),
            Cell::from(payment),
            Cell::Composite(vec![Cell::from(status), Cell::from(if status == "Voided" { "✖" } else { "✔" })]),
        ]);
    }

    DataSet { headers, rows }
}

// src/table/sort.rs
//! Sort directive and the type-sniffing row comparator.
//!
//! Each row's cell in the sorted column is reduced to a key once, then the
//! keys are compared:
//! - missing cells go last, whatever the direction;
//! - dates (reserved date column, or text with a `-`/`/` separator that is not
//!   a plain number) compare chronologically;
//! - text that parses fully as a number compares numerically;
//! - everything else compares case-insensitively.
//!
//! Keys of different kinds order as number < date < text, which keeps the
//! comparator a total order on mixed columns.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::cell::{parse_number, Cell};
use super::model::IndexedRow;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "⬆",
            SortDirection::Descending => "⬇",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" | "up" => Some(SortDirection::Ascending),
            "desc" | "descending" | "down" => Some(SortDirection::Descending),
            _ => None,
        }
    }
}

/// Either fully specified or absent; there is no half-set state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortDirective {
    #[default]
    Unsorted,
    By { column: usize, direction: SortDirection },
}

impl SortDirective {
    pub fn by(column: usize, direction: SortDirection) -> Self {
        SortDirective::By { column, direction }
    }

    pub fn column(&self) -> Option<usize> {
        match self {
            SortDirective::By { column, .. } => Some(*column),
            SortDirective::Unsorted => None,
        }
    }

    pub fn direction(&self) -> Option<SortDirection> {
        match self {
            SortDirective::By { direction, .. } => Some(*direction),
            SortDirective::Unsorted => None,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, SortDirective::Unsorted)
    }

    /// Direction active on `column`, if that column is the sorted one.
    pub fn direction_for(&self, column: usize) -> Option<SortDirection> {
        match self {
            SortDirective::By { column: c, direction } if *c == column => Some(*direction),
            _ => None,
        }
    }

    /// Explicit up/down control: asking for the active direction again clears.
    pub fn requested(self, column: usize, direction: SortDirection) -> Self {
        if self.direction_for(column) == Some(direction) {
            SortDirective::Unsorted
        } else {
            SortDirective::by(column, direction)
        }
    }

    /// Header click: ascending → descending → cleared → ascending.
    pub fn cycled(self, column: usize) -> Self {
        match self.direction_for(column) {
            None => SortDirective::by(column, SortDirection::Ascending),
            Some(SortDirection::Ascending) => SortDirective::by(column, SortDirection::Descending),
            Some(SortDirection::Descending) => SortDirective::Unsorted,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SortKey {
    Number(f64),
    Date(NaiveDateTime),
    Text(String),
}

impl SortKey {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Number(_) => 0,
            SortKey::Date(_) => 1,
            SortKey::Text(_) => 2,
        }
    }

    /// Reduce a cell to its key. `None` for a missing cell.
    pub fn of(cell: &Cell, date_column: bool) -> Option<Self> {
        if cell.is_absent() {
            return None;
        }

        let date_text = match cell {
            Cell::Text(t) => Some(t.as_str()),
            Cell::Composite(_) => cell.first_text(),
            _ => None,
        };
        if let Some(t) = date_text {
            if date_column || looks_like_date(t) {
                if let Some(d) = parse_date(t) {
                    return Some(SortKey::Date(d));
                }
            }
        }

        let text = cell.sort_text();
        if date_column {
            if let Some(d) = parse_date(&text) {
                return Some(SortKey::Date(d));
            }
        }
        match cell {
            Cell::Number(n) if n.is_finite() => Some(SortKey::Number(*n)),
            _ => match parse_number(&text) {
                Some(n) => Some(SortKey::Number(n)),
                None => Some(SortKey::Text(text.to_lowercase())),
            },
        }
    }
}

impl Eq for SortKey {}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Missing keys sort after present ones in both directions.
pub fn compare_keys(a: Option<&SortKey>, b: Option<&SortKey>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => direction.apply(a.cmp(b)),
    }
}

/// Heuristic: has a date separator and is not just a (negative) number.
pub fn looks_like_date(s: &str) -> bool {
    let t = s.trim();
    (t.contains('-') || t.contains('/'))
        && parse_number(t).is_none()
        && t.chars().any(|c| c.is_ascii_digit())
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y, %I:%M:%S %p",
    "%m/%d/%Y, %I:%M %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d %b %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%a %b %d %Y",
];

/// Parse the calendar date/time formats seen in POS exports.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(t) {
        return Some(dt.naive_utc());
    }
    for f in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(t, f) {
            return Some(dt);
        }
    }
    if let Some(d) = parse_day(t) {
        return d.and_hms_opt(0, 0, 0);
    }
    // "<date> <anything>": fall back to the leading date token
    let head = t.split([' ', ',']).next().unwrap_or(t);
    if head.len() < t.len() {
        return parse_day(head).and_then(|d| d.and_hms_opt(0, 0, 0));
    }
    None
}

fn parse_day(t: &str) -> Option<NaiveDate> {
    DATE_FORMATS.iter().find_map(|f| NaiveDate::parse_from_str(t, f).ok())
}

/// Original indices of `rows` in display order. Stable: ties keep input order.
pub fn sorted_order(rows: &[IndexedRow], directive: SortDirective, date_column: Option<usize>) -> Vec<usize> {
    let SortDirective::By { column, direction } = directive else {
        return rows.iter().map(|r| r.original_index).collect();
    };

    let is_date_col = date_column == Some(column);
    let mut keyed: Vec<(usize, Option<SortKey>)> = rows
        .iter()
        .map(|r| (r.original_index, r.cell(column).and_then(|c| SortKey::of(c, is_date_col))))
        .collect();

    keyed.sort_by(|(_, a), (_, b)| compare_keys(a.as_ref(), b.as_ref(), direction));
    keyed.into_iter().map(|(ix, _)| ix).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use SortDirection::*;

    fn rows(cells: &[&str]) -> Vec<IndexedRow> {
        cells
            .iter()
            .enumerate()
            .map(|(i, c)| IndexedRow::new(i, vec![Cell::parse(c)]))
            .collect()
    }

    fn texts(rs: &[IndexedRow], order: &[usize]) -> Vec<String> {
        order.iter().map(|&i| rs[i].cells[0].display_text()).collect()
    }

    #[test]
    fn numbers_sort_numerically() {
        let rs = rows(&["9", "10", "2"]);
        let ord = sorted_order(&rs, SortDirective::by(0, Ascending), None);
        assert_eq!(texts(&rs, &ord), ["2", "9", "10"]);
    }

    #[test]
    fn numeric_text_cells_sort_numerically() {
        let rs: Vec<IndexedRow> = ["9", "10", "2"]
            .iter()
            .enumerate()
            .map(|(i, c)| IndexedRow::new(i, vec![Cell::from(*c)]))
            .collect();
        let ord = sorted_order(&rs, SortDirective::by(0, Ascending), None);
        assert_eq!(ord, vec![2, 0, 1]);
    }

    #[test]
    fn dates_sort_chronologically() {
        let rs = rows(&["2024-01-10", "2023-12-31", "2024-02-01"]);
        let ord = sorted_order(&rs, SortDirective::by(0, Ascending), None);
        assert_eq!(texts(&rs, &ord), ["2023-12-31", "2024-01-10", "2024-02-01"]);

        let ord = sorted_order(&rs, SortDirective::by(0, Descending), None);
        assert_eq!(texts(&rs, &ord), ["2024-02-01", "2024-01-10", "2023-12-31"]);
    }

    #[test]
    fn slash_dates_are_us_order() {
        let rs = rows(&["02/01/2024", "12/31/2023", "01/10/2024"]);
        let ord = sorted_order(&rs, SortDirective::by(0, Ascending), None);
        assert_eq!(ord, vec![1, 2, 0]);
    }

    #[test]
    fn reserved_date_column_parses_month_names() {
        let rs = rows(&["Feb 01, 2024", "Dec 31, 2023", "Jan 10, 2024"]);
        // Not date-like by separator, so without the reserved column it is text.
        let ord = sorted_order(&rs, SortDirective::by(0, Ascending), None);
        assert_eq!(ord, vec![1, 0, 2]);
        let ord = sorted_order(&rs, SortDirective::by(0, Ascending), Some(0));
        assert_eq!(ord, vec![1, 2, 0]);
    }

    #[test]
    fn strings_compare_case_insensitively() {
        let rs = rows(&["banana", "Apple", "cherry"]);
        let ord = sorted_order(&rs, SortDirective::by(0, Ascending), None);
        assert_eq!(texts(&rs, &ord), ["Apple", "banana", "cherry"]);
    }

    #[test]
    fn absent_sorts_last_in_both_directions() {
        let rs = rows(&["", "2", "", "1"]);
        let asc = sorted_order(&rs, SortDirective::by(0, Ascending), None);
        assert_eq!(asc, vec![3, 1, 0, 2]);
        let desc = sorted_order(&rs, SortDirective::by(0, Descending), None);
        assert_eq!(desc, vec![1, 3, 0, 2]);
    }

    #[test]
    fn ties_keep_input_order_when_descending() {
        let rs = rows(&["b", "a", "B", "a"]);
        let desc = sorted_order(&rs, SortDirective::by(0, Descending), None);
        assert_eq!(desc, vec![0, 2, 1, 3]);
    }

    #[test]
    fn negative_numbers_are_not_dates() {
        assert!(!looks_like_date("-5"));
        assert!(!looks_like_date("n/a"));
        assert!(looks_like_date("2024-01-10"));
        let rs = rows(&["3", "-5", "0"]);
        let ord = sorted_order(&rs, SortDirective::by(0, Ascending), None);
        assert_eq!(ord, vec![1, 2, 0]);
    }

    #[test]
    fn composite_date_uses_first_text_child() {
        let a = Cell::Composite(vec![Cell::from("2024-03-01"), Cell::from("(late)")]);
        let b = Cell::Composite(vec![Cell::from("2024-01-15"), Cell::from("(ok)")]);
        assert!(matches!(SortKey::of(&a, false), Some(SortKey::Date(_))));
        assert_eq!(compare_keys(SortKey::of(&b, false).as_ref(), SortKey::of(&a, false).as_ref(), Ascending), Ordering::Less);
    }

    #[test]
    fn mixed_kinds_order_number_date_text() {
        let rs = rows(&["abc", "2024-01-01", "7"]);
        let ord = sorted_order(&rs, SortDirective::by(0, Ascending), None);
        assert_eq!(ord, vec![2, 1, 0]);
    }

    #[test]
    fn directive_transitions() {
        let d = SortDirective::Unsorted.requested(0, Ascending);
        assert_eq!(d, SortDirective::by(0, Ascending));
        assert_eq!(d.requested(0, Ascending), SortDirective::Unsorted);
        assert_eq!(d.requested(0, Descending), SortDirective::by(0, Descending));
        assert_eq!(d.requested(1, Ascending), SortDirective::by(1, Ascending));

        let c = SortDirective::Unsorted.cycled(2);
        assert_eq!(c, SortDirective::by(2, Ascending));
        let c = c.cycled(2);
        assert_eq!(c, SortDirective::by(2, Descending));
        assert_eq!(c.cycled(2), SortDirective::Unsorted);
        assert_eq!(c.cycled(1), SortDirective::by(1, Ascending));
    }

    #[test]
    fn parse_date_formats() {
        assert!(parse_date("2024-01-10").is_some());
        assert!(parse_date("2024-01-10 13:45").is_some());
        assert!(parse_date("2024-01-10T13:45:00Z").is_some());
        assert!(parse_date("Wed Jan 10 2024").is_some());
        assert!(parse_date("10 Jan 2024").is_some());
        assert!(parse_date("not a date").is_none());
    }

    #[test]
    fn twelve_hour_timestamps_sort_chronologically() {
        let rs = rows(&["02/01/2024 9:00 AM", "12/31/2023 11:00 PM", "02/01/2024 8:15:30 AM", "2/1/2024, 9:05:00 AM"]);
        let ord = sorted_order(&rs, SortDirective::by(0, Ascending), None);
        assert_eq!(ord, vec![1, 2, 0, 3]);
        assert_eq!(
            parse_date("12/31/2023 11:00 PM"),
            NaiveDate::from_ymd_opt(2023, 12, 31).and_then(|d| d.and_hms_opt(23, 0, 0))
        );
    }

    #[test]
    fn leading_date_token_is_enough() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 10).and_then(|d| d.and_hms_opt(0, 0, 0));
        assert_eq!(parse_date("2024-01-10 (voided)"), day);
        assert_eq!(parse_date("01/10/2024, lunch"), day);
        assert!(parse_date("Lunch 2024-01-10").is_none());
    }
}

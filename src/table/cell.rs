// src/table/cell.rs
//! Cell content for table rows.
//!
//! A cell is either a scalar value or a composite fragment (a label built from
//! several pieces, e.g. an amount plus a badge). Sorting never looks at how a
//! composite is drawn; it only flattens the text-bearing leaves.

use std::fmt;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Cell {
    /// Missing value. Renders blank, sorts last.
    #[default]
    Absent,
    Text(String),
    Number(f64),
    Bool(bool),
    Composite(Vec<Cell>),
}

impl Cell {
    /// Classify raw text from a file: empty → Absent, finite number → Number,
    /// true/false → Bool, anything else → Text (untrimmed).
    pub fn parse(raw: &str) -> Self {
        let t = raw.trim();
        if t.is_empty() {
            return Cell::Absent;
        }
        if let Some(n) = parse_number(t) {
            return Cell::Number(n);
        }
        if t.eq_ignore_ascii_case("true") {
            return Cell::Bool(true);
        }
        if t.eq_ignore_ascii_case("false") {
            return Cell::Bool(false);
        }
        Cell::Text(s!(raw))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Cell::Absent)
    }

    /// Text used when drawing the cell. Composite pieces are space-separated.
    pub fn display_text(&self) -> String {
        match self {
            Cell::Absent => s!(),
            Cell::Text(t) => t.clone(),
            Cell::Number(n) => fmt_number(*n),
            Cell::Bool(b) => b.to_string(),
            Cell::Composite(children) => children
                .iter()
                .map(Cell::display_text)
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Comparable text: composites concatenate their text-bearing children,
    /// recursively. Scalars give their raw value.
    pub fn sort_text(&self) -> String {
        let mut out = s!();
        self.push_sort_text(&mut out);
        out
    }

    fn push_sort_text(&self, out: &mut String) {
        match self {
            Cell::Absent => {}
            Cell::Text(t) => out.push_str(t),
            Cell::Number(n) => out.push_str(&fmt_number(*n)),
            Cell::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Cell::Composite(children) => {
                for c in children {
                    c.push_sort_text(out);
                }
            }
        }
    }

    /// First text-bearing leaf, depth first.
    pub fn first_text(&self) -> Option<&str> {
        match self {
            Cell::Text(t) if !t.trim().is_empty() => Some(t.as_str()),
            Cell::Composite(children) => children.iter().find_map(Cell::first_text),
            _ => None,
        }
    }
}

/// Whole-string, finite number parse. Rejects "", "NaN", "inf".
pub fn parse_number(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Integers print without a trailing ".0".
fn fmt_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self { Cell::Text(s!(s)) }
}

impl From<String> for Cell {
    fn from(s: String) -> Self { Cell::Text(s) }
}

impl From<&String> for Cell {
    fn from(s: &String) -> Self { Cell::Text(s.clone()) }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self { Cell::Number(n) }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self { Cell::Number(n as f64) }
}

impl From<i32> for Cell {
    fn from(n: i32) -> Self { Cell::Number(n as f64) }
}

impl From<u32> for Cell {
    fn from(n: u32) -> Self { Cell::Number(n as f64) }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self { Cell::Bool(b) }
}

impl From<Vec<Cell>> for Cell {
    fn from(children: Vec<Cell>) -> Self { Cell::Composite(children) }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Cell::Absent)
    }
}

/// Build a row from anything convertible into cells.
pub fn row<I, T>(cells: I) -> Vec<Cell>
where
    I: IntoIterator<Item = T>,
    T: Into<Cell>,
{
    cells.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_classifies_raw_text() {
        assert_eq!(Cell::parse(""), Cell::Absent);
        assert_eq!(Cell::parse("  "), Cell::Absent);
        assert_eq!(Cell::parse("12.5"), Cell::Number(12.5));
        assert_eq!(Cell::parse("-3"), Cell::Number(-3.0));
        assert_eq!(Cell::parse("TRUE"), Cell::Bool(true));
        assert_eq!(Cell::parse("NaN"), Cell::Text(s!("NaN")));
        assert_eq!(Cell::parse("2024-01-10"), Cell::Text(s!("2024-01-10")));
    }

    #[test]
    fn composite_text_flattens_recursively() {
        let c = Cell::Composite(vec![
            Cell::from("₱"),
            Cell::Composite(vec![Cell::from(1200), Cell::Absent]),
            Cell::from(".50"),
        ]);
        assert_eq!(c.sort_text(), "₱1200.50");
        assert_eq!(c.display_text(), "₱ 1200 .50");
        assert_eq!(c.first_text(), Some("₱"));
    }

    #[test]
    fn first_text_skips_blank_and_non_text() {
        let c = Cell::Composite(vec![
            Cell::from(" "),
            Cell::from(3),
            Cell::Composite(vec![Cell::from("2024-02-01")]),
        ]);
        assert_eq!(c.first_text(), Some("2024-02-01"));
        assert_eq!(Cell::from(5).first_text(), None);
    }

    #[test]
    fn numbers_display_without_trailing_zero() {
        assert_eq!(Cell::from(10).display_text(), "10");
        assert_eq!(Cell::from(2.25).display_text(), "2.25");
        assert_eq!(Cell::from(None::<&str>), Cell::Absent);
    }
}

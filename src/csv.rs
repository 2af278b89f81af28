// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::config::options::HeaderMode;
use crate::table::cell::parse_number;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant).
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text); // Excel BOM
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                // move the field without cloning
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Split off the header row according to `mode`.
///
/// `Detect` treats the first row as a header when every cell is non-empty,
/// non-numeric text and the second row (if any) has at least one number or
/// date-ish value, or when there is only one row.
pub fn detect_headers(mut rows: Vec<Vec<String>>, mode: HeaderMode) -> (Option<Vec<String>>, Vec<Vec<String>>) {
    if rows.is_empty() { return (None, rows); }

    let take_first = match mode {
        HeaderMode::Present => true,
        HeaderMode::Absent => false,
        HeaderMode::Detect => looks_like_header(&rows[0], rows.get(1).map(Vec::as_slice)),
    };

    if take_first {
        let header = rows.remove(0);
        return (Some(header), rows);
    }
    (None, rows)
}

fn looks_like_header(first: &[String], second: Option<&[String]>) -> bool {
    let all_labels = !first.is_empty()
        && first.iter().all(|c| !c.trim().is_empty() && parse_number(c).is_none());
    if !all_labels { return false; }
    match second {
        None => true,
        Some(next) => next.iter().any(|c| {
            parse_number(c).is_some() || crate::table::sort::looks_like_date(c)
        }),
    }
}

/// Column labels for headerless data: "Col 1", "Col 2", ...
pub fn default_headers(ncols: usize) -> Vec<String> {
    (1..=ncols).map(|i| format!("Col {}", i)).collect()
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stringify rows (header first, if any).
pub fn rows_to_string(headers: Option<&[String]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quotes_and_crlf() {
        let rows = parse_rows("a,\"b,c\",\"say \"\"hi\"\"\"\r\n1,2,3\r\n", ',');
        assert_eq!(rows, vec![
            vec![s!("a"), s!("b,c"), s!("say \"hi\"")],
            vec![s!("1"), s!("2"), s!("3")],
        ]);
    }

    #[test]
    fn skips_blank_lines_and_keeps_unterminated_last_row() {
        let rows = parse_rows("x\ty\n\n1\t2", '\t');
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec![s!("1"), s!("2")]);
    }

    #[test]
    fn header_detection() {
        let rows = parse_rows("Date,Item,Qty\n2024-01-10,Rice,3\n", ',');
        let (h, r) = detect_headers(rows, HeaderMode::Detect);
        assert_eq!(h.map(|h| h.len()), Some(3));
        assert_eq!(r.len(), 1);

        let rows = parse_rows("Rice,Adobo\nTea,Soup\n", ',');
        let (h, r) = detect_headers(rows, HeaderMode::Detect);
        assert!(h.is_none());
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn write_round_trips_awkward_fields() {
        let out = rows_to_string(Some(&[s!("A"), s!("B")][..]), &[vec![s!("x,y"), s!("z")]], ',');
        assert_eq!(out, "A,B\n\"x,y\",z\n");
    }
}

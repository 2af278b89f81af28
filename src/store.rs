// src/store.rs
use std::{error::Error, fs, io, path::Path};

use crate::config::options::{Delim, LoadOptions};
use crate::csv::{self, detect_headers, parse_rows};
use crate::data::DataSet;

/// Read a CSV/TSV file into a DataSet.
/// Delimiter comes from `opts.delim`, else the file extension.
pub fn load_table(path: &Path, opts: &LoadOptions) -> Result<DataSet, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Reading {}: {}", path.display(), e))?;
    let delim = opts.delim_for(path);
    let (headers, rows) = detect_headers(parse_rows(&text, delim.sep()), opts.headers);

    logf!(
        "Loaded {} rows ({} headers) from {}",
        rows.len(),
        if headers.is_some() { "with" } else { "no" },
        path.display()
    );
    Ok(DataSet::from_text_rows(headers, rows))
}

/// Write `row_ix` of `ds` (display text) with its header row.
pub fn save_table(path: &Path, ds: &DataSet, row_ix: &[usize], delim: Delim) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let body = csv::rows_to_string(Some(ds.headers.as_slice()), &ds.text_rows(row_ix), delim.sep());
    fs::write(path, body)?;
    logf!("Saved {} rows → {}", row_ix.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::HeaderMode;
    use crate::table::Cell;

    fn scratch(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("pos_tables_store_{}", std::process::id()));
        let _ = fs::create_dir_all(&dir);
        dir.join(name)
    }

    #[test]
    fn tsv_by_extension() {
        let p = scratch("daily.tsv");
        fs::write(&p, "Item\tQty\nRice\t3\nTea\t\n").unwrap();
        let ds = load_table(&p, &LoadOptions::default()).unwrap();
        assert_eq!(ds.headers, vec![s!("Item"), s!("Qty")]);
        assert_eq!(ds.rows[0][1], Cell::Number(3.0));
        assert_eq!(ds.rows[1][1], Cell::Absent);
    }

    #[test]
    fn forced_headerless() {
        let p = scratch("plain.csv");
        fs::write(&p, "Item,Qty\nRice,3\n").unwrap();
        let opts = LoadOptions { headers: HeaderMode::Absent, ..LoadOptions::default() };
        let ds = load_table(&p, &opts).unwrap();
        assert_eq!(ds.headers, vec![s!("Col 1"), s!("Col 2")]);
        assert_eq!(ds.row_count(), 2);
    }

    #[test]
    fn missing_file_names_path() {
        let err = load_table(Path::new("/definitely/not/here.csv"), &LoadOptions::default()).unwrap_err();
        assert!(err.to_string().contains("here.csv"));
    }

    #[test]
    fn save_then_load_keeps_rows() {
        let p = scratch("out/saved.csv");
        let ds = crate::data::demo_dataset();
        save_table(&p, &ds, &[0, 5], Delim::Csv).unwrap();
        let back = load_table(&p, &LoadOptions::default()).unwrap();
        assert_eq!(back.headers, ds.headers);
        assert_eq!(back.row_count(), 2);
        assert_eq!(back.rows[1][1], ds.rows[5][1]);
    }
}

// src/cli.rs
use std::{error::Error, path::PathBuf};

use crate::config::options::{Delim, HeaderMode, LoadOptions, TableOptions};
use crate::csv;
use crate::data::DataSet;
use crate::store;
use crate::table::{SortDirection, SortablePagedTable};

pub const HELP: &str = include_str!("cli_help.txt");

/// `--sort` target before the header row is known.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnRef {
    Index(usize),
    Name(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CliArgs {
    pub path: PathBuf,
    pub sort: Option<(ColumnRef, SortDirection)>,
    pub table: TableOptions,
    pub load: LoadOptions,
    pub page: usize,
    pub format: Delim,
    pub show_pages: bool,
}

#[derive(Debug, PartialEq)]
pub enum Command {
    Help,
    Print(CliArgs),
}

pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut path: Option<PathBuf> = None;
    let mut sort = None;
    let mut table = TableOptions::default();
    let mut load = LoadOptions::default();
    let mut page = 1usize;
    let mut format = Delim::Csv;
    let mut show_pages = false;

    while let Some(a) = args.next() {
        match a.as_str() {
            "--sort" => {
                let v = args.next().ok_or("Missing value for --sort")?;
                sort = Some(parse_sort(&v)?);
            }
            "--sortable" => {
                let v = args.next().ok_or("Missing value for --sortable")?;
                table.sortable_columns = parse_ids_list(&v)?.into_iter().collect();
            }
            "--date-col" => {
                let v: usize = args.next().ok_or("Missing value for --date-col")?.parse()?;
                table.date_column = Some(v);
            }
            "--page" => {
                page = args.next().ok_or("Missing value for --page")?.parse()?;
            }
            "--per-page" => {
                let v: usize = args.next().ok_or("Missing value for --per-page")?.parse()?;
                if v == 0 { return Err("--per-page must be at least 1".into()); }
                table.items_per_page = v;
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                format = Delim::parse(&v).ok_or_else(|| format!("Unknown format: {}", v))?;
            }
            "--delim" => {
                let v = args.next().ok_or("Missing value for --delim")?;
                load.delim = Some(Delim::parse(&v).ok_or_else(|| format!("Unknown delimiter: {}", v))?);
            }
            "--headers" => load.headers = HeaderMode::Present,
            "--no-headers" => load.headers = HeaderMode::Absent,
            "--empty-message" => {
                table.empty_message = args.next().ok_or("Missing value for --empty-message")?;
            }
            "--pages" => show_pages = true,
            "-h" | "--help" => return Ok(Command::Help),
            s if s.starts_with('-') && s.len() > 1 => return Err(format!("Unknown arg: {}", a).into()),
            _ => {
                if path.is_some() { return Err(format!("Unexpected extra file: {}", a).into()); }
                path = Some(PathBuf::from(a));
            }
        }
    }

    let path = path.ok_or("Missing input file (see --help)")?;
    Ok(Command::Print(CliArgs { path, sort, table, load, page, format, show_pages }))
}

/// `COL` or `COL:asc|desc`; COL is an index or a header name.
fn parse_sort(v: &str) -> Result<(ColumnRef, SortDirection), Box<dyn Error>> {
    let (col, dir) = match v.rsplit_once(':') {
        Some((c, d)) => {
            let dir = SortDirection::parse(d).ok_or_else(|| format!("Unknown sort direction: {}", d))?;
            (c, dir)
        }
        None => (v, SortDirection::Ascending),
    };
    let col = col.trim();
    if col.is_empty() { return Err("Empty column in --sort".into()); }
    let col = match col.parse::<usize>() {
        Ok(ix) => ColumnRef::Index(ix),
        Err(_) => ColumnRef::Name(s!(col)),
    };
    Ok((col, dir))
}

/// "0,2-4" → [0, 2, 3, 4]
fn parse_ids_list(s: &str) -> Result<Vec<usize>, Box<dyn Error>> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        if let Some(dash) = part.find('-') {
            let a: usize = part[..dash].trim().parse()?;
            let b: usize = part[dash + 1..].trim().parse()?;
            if a > b { return Err(format!("Invalid range: {}", part).into()); }
            out.extend(a..=b);
        } else {
            out.push(part.parse()?);
        }
    }
    out.sort_unstable();
    out.dedup();
    Ok(out)
}

fn resolve_column(col: &ColumnRef, ds: &DataSet) -> Result<usize, Box<dyn Error>> {
    match col {
        ColumnRef::Index(ix) if *ix < ds.ncols() => Ok(*ix),
        ColumnRef::Index(ix) => Err(format!("Column {} out of range (0..{})", ix, ds.ncols()).into()),
        ColumnRef::Name(name) => ds
            .headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| format!("No column named {:?}", name).into()),
    }
}

/// Load, sort and page per `args`.
pub fn build_table(args: &CliArgs) -> Result<SortablePagedTable, Box<dyn Error>> {
    let ds = store::load_table(&args.path, &args.load)?;
    let mut table = SortablePagedTable::with_options(ds.headers.clone(), ds.rows.clone(), args.table.clone());

    if let Some((col, dir)) = &args.sort {
        let ix = resolve_column(col, &ds)?;
        if !table.is_sortable(ix) {
            return Err(format!("Column {} ({}) is not sortable; see --sortable", ix, ds.headers[ix]).into());
        }
        table.request_sort(ix, *dir);
    }
    table.set_page(args.page);
    Ok(table)
}

/// Current page as CSV/TSV, header row first.
pub fn page_text(table: &SortablePagedTable, sep: char) -> String {
    let ncols = table.ncols();
    let rows: Vec<Vec<String>> = table
        .page_rows()
        .iter()
        .map(|r| r.cells_for(ncols).map(|c| c.display_text()).collect())
        .collect();
    if rows.is_empty() {
        return csv::rows_to_string(Some(table.columns()), &[vec![s!(table.empty_message())]], sep);
    }
    csv::rows_to_string(Some(table.columns()), &rows, sep)
}

/// "[2] 3 4 5 6 of 9"
pub fn page_buttons(table: &SortablePagedTable) -> String {
    let current = table.current_page();
    let buttons: Vec<String> = table
        .page_numbers()
        .into_iter()
        .map(|n| if n == current { format!("[{}]", n) } else { n.to_string() })
        .collect();
    format!("{} of {}", buttons.join(" "), table.total_pages())
}

pub fn run(args: &CliArgs) -> Result<(), Box<dyn Error>> {
    let table = build_table(args)?;
    let (first, last, total) = table.showing_range();
    logd!("CLI: page {}/{}", table.current_page(), table.total_pages());

    print!("{}", page_text(&table, args.format.sep()));
    eprintln!("Showing {} to {} of {}", first, last, total);
    if args.show_pages {
        eprintln!("Pages: {}", page_buttons(&table));
    }
    Ok(())
}

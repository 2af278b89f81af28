// tests/pagination.rs
use pos_tables::config::options::TableOptions;
use pos_tables::table::{Cell, SortDirection, SortablePagedTable, TableBody};

fn numbered(n: usize, per_page: usize) -> SortablePagedTable {
    let data = (1..=n).map(|i| vec![Cell::from(i as i64)]).collect();
    SortablePagedTable::with_options(["N"], data, TableOptions::default().items_per_page(per_page))
}

fn page_values(t: &SortablePagedTable) -> Vec<String> {
    t.page_rows().iter().map(|r| r.cells[0].display_text()).collect()
}

#[test]
fn five_rows_two_per_page() {
    let mut t = numbered(5, 2);
    assert_eq!(t.total_pages(), 3);
    assert_eq!(page_values(&t), ["1", "2"]);
    t.set_page(3);
    assert_eq!(page_values(&t), ["5"]);
    assert_eq!(t.showing_range(), (5, 5, 5));
    assert!(!t.has_next());
}

#[test]
fn last_page_length_matches_remainder() {
    for (n, v) in [(23, 5), (20, 5), (1, 10), (11, 10)] {
        let mut t = numbered(n, v);
        t.last_page();
        let pages = n.div_ceil(v);
        assert_eq!(t.total_pages(), pages);
        assert_eq!(t.page_rows().len(), n - (pages - 1) * v, "n={n} v={v}");
    }
}

#[test]
fn out_of_range_pages_clamp() {
    let mut t = numbered(12, 5);
    t.set_page(0);
    assert_eq!(t.current_page(), 1);
    t.set_page(99);
    assert_eq!(t.current_page(), 3);
    t.next_page();
    assert_eq!(t.current_page(), 3);
    t.first_page();
    t.prev_page();
    assert_eq!(t.current_page(), 1);
}

#[test]
fn page_size_change_returns_to_first_page() {
    let mut t = numbered(40, 5);
    t.set_page(6);
    t.set_items_per_page(10);
    assert_eq!(t.current_page(), 1);
    assert_eq!(t.total_pages(), 4);
}

#[test]
fn shrinking_data_keeps_page_within_range() {
    let mut t = numbered(50, 10);
    t.set_page(5);
    t.set_data((0..12).map(|i| vec![Cell::from(i)]).collect());
    assert_eq!(t.current_page(), 2);
    assert_eq!(page_values(&t), ["10", "11"]);
}

#[test]
fn sorting_keeps_current_page() {
    let mut t = numbered(30, 10);
    t.set_page(2);
    t.request_sort(0, SortDirection::Descending);
    assert_eq!(t.current_page(), 2);
    assert_eq!(page_values(&t).first().map(String::as_str), Some("20"));
}

#[test]
fn page_button_window() {
    let mut t = numbered(100, 10);
    assert_eq!(t.page_numbers(), [1, 2, 3, 4, 5]);
    t.set_page(6);
    assert_eq!(t.page_numbers(), [4, 5, 6, 7, 8]);
    t.last_page();
    assert_eq!(t.page_numbers(), [6, 7, 8, 9, 10]);
    assert_eq!(t.all_pages().count(), 10);

    let small = numbered(25, 10);
    assert_eq!(small.page_numbers(), [1, 2, 3]);
}

#[test]
fn empty_table_has_one_page_and_message() {
    let t = SortablePagedTable::with_options(
        ["Date", "Total"],
        Vec::new(),
        TableOptions::default().empty_message("No sales today"),
    );
    assert_eq!(t.total_pages(), 1);
    assert_eq!(t.showing_range(), (0, 0, 0));
    assert_eq!(t.body(), TableBody::Empty("No sales today"));
    assert!(!t.has_prev() && !t.has_next());
}

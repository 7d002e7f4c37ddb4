use super::*;

// =============================================================
// page_count
// =============================================================

#[test]
fn page_count_rounds_up_partial_pages() {
    assert_eq!(page_count(35, 10), 4);
    assert_eq!(page_count(31, 10), 4);
    assert_eq!(page_count(40, 10), 4);
}

#[test]
fn page_count_of_empty_set_is_one() {
    assert_eq!(page_count(0, 10), 1);
}

#[test]
fn page_count_of_exact_page_is_one() {
    assert_eq!(page_count(10, 10), 1);
    assert_eq!(page_count(11, 10), 2);
}

#[test]
fn page_count_guards_against_zero_per_page() {
    assert_eq!(page_count(35, 0), 1);
}

// =============================================================
// page_window
// =============================================================

#[test]
fn window_shows_all_pages_when_few() {
    assert_eq!(page_window(1, 4), vec![1, 2, 3, 4]);
    assert_eq!(page_window(3, 4), vec![1, 2, 3, 4]);
}

#[test]
fn window_centers_on_current_page() {
    assert_eq!(page_window(10, 20), vec![7, 8, 9, 10, 11, 12, 13]);
}

#[test]
fn window_clamps_at_start() {
    assert_eq!(page_window(2, 20), vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn window_clamps_at_end() {
    assert_eq!(page_window(19, 20), vec![14, 15, 16, 17, 18, 19, 20]);
}

#[test]
fn window_of_single_page() {
    assert_eq!(page_window(1, 1), vec![1]);
}

#[test]
fn window_tolerates_out_of_range_current() {
    assert_eq!(page_window(9, 4), vec![1, 2, 3, 4]);
}

use super::*;

#[test]
fn page_count_rounds_up_and_never_hits_zero() {
    assert_eq!(page_count(0, 25), 1);
    assert_eq!(page_count(1, 25), 1);
    assert_eq!(page_count(25, 25), 1);
    assert_eq!(page_count(26, 25), 2);
}

#[test]
fn page_slice_covers_the_collection_without_overlap() {
    assert_eq!(page_slice(60, 0, 25), 0..25);
    assert_eq!(page_slice(60, 1, 25), 25..50);
    assert_eq!(page_slice(60, 2, 25), 50..60);
}

#[test]
fn page_slice_past_the_end_is_empty() {
    assert_eq!(page_slice(10, 5, 25), 10..10);
    assert_eq!(page_slice(0, 0, 25), 0..0);
}

#[test]
fn clamp_page_recovers_after_shrink() {
    // Was on page 2 of 3, list shrank to one page.
    assert_eq!(clamp_page(2, 10, 25), 0);
    // Still valid pages stay put.
    assert_eq!(clamp_page(1, 60, 25), 1);
    assert_eq!(clamp_page(0, 0, 25), 0);
}

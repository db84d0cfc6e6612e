use super::*;

#[test]
fn violation_label_distinguishes_unscanned_from_clean() {
    assert_eq!(violation_label(0, false), "unscanned");
    assert_eq!(violation_label(0, true), "clean");
}

#[test]
fn violation_label_counts_with_singular_form() {
    assert_eq!(violation_label(1, true), "1 violation");
    assert_eq!(violation_label(4, true), "4 violations");
}

#[test]
fn display_secs_clamps_negative_durations() {
    assert_eq!(display_secs(-5), 0);
    assert_eq!(display_secs(90), 90);
}

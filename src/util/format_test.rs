use super::*;

#[test]
fn format_elapsed_pads_minutes_and_seconds() {
    assert_eq!(format_elapsed(0), "00:00");
    assert_eq!(format_elapsed(5), "00:05");
    assert_eq!(format_elapsed(65), "01:05");
    assert_eq!(format_elapsed(600), "10:00");
}

#[test]
fn format_elapsed_does_not_cap_minutes() {
    assert_eq!(format_elapsed(6000), "100:00");
}

#[test]
fn mask_key_appends_bullets() {
    assert_eq!(mask_key("vd_live_ab"), "vd_live_ab\u{2022}\u{2022}\u{2022}\u{2022}");
}

#[test]
fn short_date_takes_the_date_part() {
    assert_eq!(short_date("2026-02-01T12:00:00Z"), "2026-02-01");
    assert_eq!(short_date("2026"), "2026");
}

#[test]
fn batch_summary_formats_counts() {
    assert_eq!(batch_summary(3, 0), "Saved 3 settings");
    assert_eq!(batch_summary(1, 0), "Saved 1 setting");
    assert_eq!(batch_summary(2, 1), "Saved 2 settings, 1 failed");
    assert_eq!(batch_summary(0, 2), "Saved 0 settings, 2 failed");
}

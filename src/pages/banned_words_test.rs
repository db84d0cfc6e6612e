use super::*;

#[test]
fn normalize_word_trims_and_lowercases() {
    assert_eq!(normalize_word("  Refund  "), Some("refund".to_owned()));
    assert_eq!(normalize_word("FREE MONEY"), Some("free money".to_owned()));
}

#[test]
fn normalize_word_rejects_empty_input() {
    assert_eq!(normalize_word(""), None);
    assert_eq!(normalize_word("   "), None);
}

#[test]
fn normalize_word_rejects_overlong_input() {
    let long = "x".repeat(MAX_WORD_LEN + 1);
    assert_eq!(normalize_word(&long), None);
    let max = "x".repeat(MAX_WORD_LEN);
    assert_eq!(normalize_word(&max), Some(max));
}

#[test]
fn scan_summary_reports_both_counts() {
    let report = ScanReport { calls_scanned: 120, matches_found: 3 };
    assert_eq!(scan_summary(&report), "Scanned 120 calls, found 3 matches");
}

#[test]
fn severities_are_ordered_mildest_first() {
    assert_eq!(SEVERITIES, ["low", "medium", "high"]);
}

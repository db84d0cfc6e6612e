//! Display formatting helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format elapsed seconds as `MM:SS` for the call timer and call table.
/// Minutes are not capped; a 99+ minute call shows its real minute count.
pub fn format_elapsed(total_secs: u32) -> String {
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Render a stored key prefix as a masked secret for tables.
pub fn mask_key(prefix: &str) -> String {
    format!("{prefix}\u{2022}\u{2022}\u{2022}\u{2022}")
}

/// Date part of an ISO 8601 timestamp, for compact table columns.
/// Falls back to the whole string when it is shorter than a date.
pub fn short_date(iso: &str) -> &str {
    iso.get(..10).unwrap_or(iso)
}

/// Summarize a batch save for the toast, e.g. `"Saved 3 settings, 1 failed"`.
pub fn batch_summary(saved: usize, failed: usize) -> String {
    let noun = if saved == 1 { "setting" } else { "settings" };
    if failed == 0 {
        format!("Saved {saved} {noun}")
    } else {
        format!("Saved {saved} {noun}, {failed} failed")
    }
}

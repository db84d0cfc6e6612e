use super::*;

#[test]
fn ui_state_defaults() {
    let s = UiState::default();
    assert!(!s.dark_mode);
}

#[test]
fn section_paths_are_unique() {
    let paths: Vec<&str> = Section::all().iter().map(|s| s.path()).collect();
    let mut deduped = paths.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(paths.len(), deduped.len());
}

#[test]
fn overview_is_the_root_route() {
    assert_eq!(Section::Overview.path(), "/");
}

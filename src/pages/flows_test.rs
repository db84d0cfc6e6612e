use super::*;

#[test]
fn step_label_uses_singular_for_one() {
    assert_eq!(step_label(1), "1 step");
}

#[test]
fn step_label_pluralizes() {
    assert_eq!(step_label(0), "0 steps");
    assert_eq!(step_label(7), "7 steps");
}

use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut s = ToastState::default();
    let a = s.push_success("saved");
    let b = s.push_error("failed");
    assert!(b > a);
    assert_eq!(s.toasts.len(), 2);
    assert_eq!(s.toasts[0].kind, ToastKind::Success);
    assert_eq!(s.toasts[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_the_named_toast() {
    let mut s = ToastState::default();
    let a = s.push_success("one");
    let b = s.push_success("two");
    s.dismiss(a);
    assert_eq!(s.toasts.len(), 1);
    assert_eq!(s.toasts[0].id, b);
}

#[test]
fn dismiss_ignores_unknown_ids() {
    let mut s = ToastState::default();
    s.push_success("one");
    s.dismiss(999);
    assert_eq!(s.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut s = ToastState::default();
    let a = s.push_success("one");
    s.dismiss(a);
    let b = s.push_success("two");
    assert!(b > a);
}

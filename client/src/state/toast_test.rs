use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.error("bad");
    let b = state.success("good");
    assert!(b > a);
    assert_eq!(state.toasts().len(), 2);
    assert_eq!(state.toasts()[0].kind, ToastKind::Error);
    assert_eq!(state.toasts()[1].message, "good");
}

#[test]
fn queue_evicts_oldest_beyond_cap() {
    let mut state = ToastState::default();
    let first = state.error("one");
    for msg in ["two", "three", "four"] {
        state.error(msg);
    }
    assert_eq!(state.toasts().len(), MAX_VISIBLE_TOASTS);
    assert!(state.toasts().iter().all(|t| t.id != first));
    assert_eq!(state.toasts()[0].message, "two");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.success("a");
    let b = state.success("b");
    state.dismiss(a);
    assert_eq!(state.toasts().len(), 1);
    assert_eq!(state.toasts()[0].id, b);

    state.dismiss(999);
    assert_eq!(state.toasts().len(), 1);
}

#[test]
fn kind_class_carries_modifier() {
    assert_eq!(ToastKind::Success.class(), "toast toast--success");
    assert_eq!(ToastKind::Error.class(), "toast toast--error");
}

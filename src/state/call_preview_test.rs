use super::*;

#[test]
fn start_goes_to_terms_only_when_required() {
    let mut p = CallPreview::default();
    p.start(true);
    assert_eq!(p.stage, CallStage::Terms);

    let mut p = CallPreview::default();
    p.start(false);
    assert_eq!(p.stage, CallStage::Connecting);
}

#[test]
fn start_is_a_noop_outside_idle() {
    let mut p = CallPreview { stage: CallStage::Active, elapsed_secs: 3, ..CallPreview::default() };
    p.start(true);
    assert_eq!(p.stage, CallStage::Active);
    assert_eq!(p.elapsed_secs, 3);
}

#[test]
fn continue_from_terms_requires_consent() {
    let mut p = CallPreview::default();
    p.start(true);

    p.continue_from_terms();
    assert_eq!(p.stage, CallStage::Terms);

    p.set_terms_accepted(true);
    p.continue_from_terms();
    assert_eq!(p.stage, CallStage::Connecting);
}

#[test]
fn cancel_terms_returns_to_idle_and_clears_consent() {
    let mut p = CallPreview::default();
    p.start(true);
    p.set_terms_accepted(true);
    p.cancel_terms();
    assert_eq!(p, CallPreview::default());
}

#[test]
fn connected_enters_active_at_zero() {
    let mut p = CallPreview::default();
    p.start(false);
    p.connected();
    assert_eq!(p.stage, CallStage::Active);
    assert_eq!(p.elapsed_secs, 0);
}

#[test]
fn connected_is_a_noop_outside_connecting() {
    let mut p = CallPreview::default();
    p.connected();
    assert_eq!(p.stage, CallStage::Idle);
}

#[test]
fn tick_counts_only_while_active() {
    let mut p = CallPreview::default();
    p.tick();
    assert_eq!(p.elapsed_secs, 0);

    p.start(false);
    p.connected();
    p.tick();
    p.tick();
    assert_eq!(p.elapsed_secs, 2);

    // No further increments after leaving Active.
    p.hang_up();
    p.tick();
    assert_eq!(p.elapsed_secs, 2);
}

#[test]
fn mute_toggles_only_while_active() {
    let mut p = CallPreview::default();
    p.toggle_mute();
    assert!(!p.muted);

    p.start(false);
    p.connected();
    p.toggle_mute();
    assert!(p.muted);
    p.toggle_mute();
    assert!(!p.muted);
}

#[test]
fn hang_up_then_finish_resets_transient_fields() {
    let mut p = CallPreview::default();
    p.start(false);
    p.connected();
    for _ in 0..5 {
        p.tick();
    }
    p.toggle_mute();
    p.hang_up();
    assert_eq!(p.stage, CallStage::Ended);
    // Elapsed time is preserved for the ended view, then cleared on finish.
    assert_eq!(p.elapsed_secs, 5);
    p.finish();
    assert_eq!(p, CallPreview::default());
}

#[test]
fn reset_forces_idle_from_any_stage() {
    for setup in [
        |p: &mut CallPreview| p.start(true),
        |p: &mut CallPreview| p.start(false),
        |p: &mut CallPreview| {
            p.start(false);
            p.connected();
            p.tick();
            p.toggle_mute();
        },
        |p: &mut CallPreview| {
            p.start(false);
            p.connected();
            p.hang_up();
        },
    ] {
        let mut p = CallPreview::default();
        setup(&mut p);
        p.reset();
        assert_eq!(p, CallPreview::default());
    }
}

#[test]
fn full_cycle_round_trips_to_initial_state() {
    let mut p = CallPreview::default();
    p.start(true);
    p.set_terms_accepted(true);
    p.continue_from_terms();
    p.connected();
    p.tick();
    p.toggle_mute();
    p.hang_up();
    p.finish();
    assert_eq!(p, CallPreview::default());
}

#[test]
fn terms_is_skipped_entirely_when_not_required() {
    let mut p = CallPreview::default();
    p.start(false);
    assert_ne!(p.stage, CallStage::Terms);
    p.connected();
    assert_eq!(p.stage, CallStage::Active);
}

#[test]
fn delays_match_the_widget_runtime() {
    assert_eq!(CONNECT_DELAY_MS, 2000);
    assert_eq!(ENDED_DELAY_MS, 1500);
    assert_eq!(TICK_MS, 1000);
}

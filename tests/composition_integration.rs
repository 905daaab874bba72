//! Integration tests for combination, sequencing, and notification routing

use confluence::testing::Probe;
use confluence::{assert_failed, assert_success, ComponentResult, NoNotification};

type R = ComponentResult<i32, &'static str, NoNotification, String>;
type Step = Box<dyn FnOnce(i32) -> R>;

#[test]
fn sequence_runs_steps_left_to_right() {
    let steps: Vec<fn(i32) -> R> = vec![
        |n| R::with_model(n + 1),
        |n| R::with_model(n * 10),
        |n| R::with_model(n - 3),
    ];
    let result: R = ComponentResult::sequence(steps, 1);
    assert_eq!(result.model(), Some(&17));
}

#[test]
fn sequence_accumulates_prior_effects_before_new_ones() {
    let steps: Vec<fn(i32) -> R> = vec![
        |n| R::with_model(n).with_effect("first"),
        |n| R::with_model(n).with_effect("second"),
        |n| R::with_model(n).with_effect("third"),
    ];
    let result: R = ComponentResult::sequence(steps, 0);
    let effects: Vec<_> = result.effects().unwrap().iter().copied().collect();
    assert_eq!(effects, vec!["first", "second", "third"]);
}

#[test]
fn sequence_short_circuits_and_skips_later_steps() {
    let probe = Probe::new();
    let seen = probe.clone();
    let steps: Vec<Step> = vec![
        Box::new(|n| R::with_model(n + 1).with_effect("kept?")),
        Box::new(|_| R::just_error("step two failed".to_string())),
        Box::new(move |n| {
            seen.record();
            R::with_model(n)
        }),
    ];

    let result: R = ComponentResult::sequence(steps, 0);
    assert_eq!(result, R::just_error("step two failed".to_string()));
    assert_eq!(probe.count(), 0);
}

#[test]
fn sequence_drops_effects_accumulated_before_the_failure() {
    // Failed carries nothing, including effects queued by earlier steps.
    let steps: Vec<Step> = vec![
        Box::new(|n| R::with_model(n).with_effect("queued then dropped")),
        Box::new(|_| R::just_error("boom".to_string())),
    ];
    let result: R = ComponentResult::sequence(steps, 0);
    assert_failed!(result);
    assert!(result.effects().is_none());
}

#[test]
fn map2_merges_models_and_concatenates_effects() {
    let combined = R::with_model(2)
        .with_effect("left")
        .map2_model(R::with_model(40).with_effect("right"), |a, b| a + b);
    assert_success!(combined);
    assert_eq!(combined.model(), Some(&42));
    let effects: Vec<_> = combined.effects().unwrap().iter().copied().collect();
    assert_eq!(effects, vec!["left", "right"]);
}

#[test]
fn apply_notification_invokes_handler_exactly_once() {
    let probe = Probe::new();
    let seen = probe.clone();

    let child = ComponentResult::<_, &str, NoNotification, String>::with_model(10)
        .with_notification("child spoke");

    let result: R = child.apply_notification(move |note, r| {
        seen.record();
        assert_eq!(note, "child spoke");
        r
    });

    assert_eq!(probe.count(), 1);
    assert_eq!(result.model(), Some(&10));
}

#[test]
fn apply_notification_hands_over_model_and_effects_intact() {
    let child = ComponentResult::<_, &str, NoNotification, String>::with_model(3)
        .with_effect("tick")
        .with_notification(5);

    let result: R = child.apply_notification(|n, r| {
        assert_eq!(r, R::with_model(3).with_effect("tick"));
        r.map_model(|m| m + n)
    });

    assert_eq!(result.model(), Some(&8));
    assert_eq!(result.effects().unwrap().len(), 1);
}

#[test]
fn apply_notification_skips_handler_without_notification() {
    let probe = Probe::new();
    let seen = probe.clone();

    let result: R = R::with_model(1).apply_notification(move |_, r| {
        seen.record();
        r
    });

    assert_eq!(probe.count(), 0);
    assert_eq!(result, R::with_model(1));
}

#[test]
fn apply_notification_passes_failure_through() {
    let probe = Probe::new();
    let seen = probe.clone();

    let child = ComponentResult::<i32, &'static str, String, String>::just_error(
        "broken".to_string(),
    );
    let result: R = child.apply_notification(move |_, r| {
        seen.record();
        r
    });

    assert_eq!(probe.count(), 0);
    assert_failed!(result);
}

#[test]
fn handler_may_attach_a_fresh_notification() {
    let child = ComponentResult::<_, &str, NoNotification, String>::with_model(1)
        .with_notification("inner");

    let relayed: ComponentResult<i32, &str, String, String> = child
        .apply_notification(|note, r| {
            // Slot is vacant inside the handler, so re-notifying upward
            // with a new type is legal.
            r.with_notification(format!("relayed: {note}"))
        });

    assert_eq!(relayed.notification(), Some(&"relayed: inner".to_string()));
}

#[test]
fn resolve_error_feeds_recovery_with_the_error() {
    let r = R::just_error("page 9 of 3".to_string());
    let (model, effects) = r
        .resolve_error(|err| {
            assert_eq!(err, "page 9 of 3");
            ComponentResult::with_model(0).with_effect("reset view")
        })
        .resolve();
    assert_eq!(model, 0);
    assert_eq!(effects.into_vec(), vec!["reset view"]);
}

#[test]
fn resolve_error_is_identity_on_success() {
    let (model, effects) = R::with_model(6)
        .with_effect("kept")
        .resolve_error(|_| ComponentResult::with_model(0))
        .resolve();
    assert_eq!(model, 6);
    assert_eq!(effects.len(), 1);
}

#[cfg(feature = "tracing")]
#[test]
fn tracing_feature_does_not_alter_semantics() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let steps: Vec<Step> = vec![
        Box::new(|n| R::with_model(n + 1)),
        Box::new(|_| R::just_error("traced failure".to_string())),
    ];
    let result: R = ComponentResult::sequence(steps, 0);
    assert_eq!(result, R::just_error("traced failure".to_string()));
}

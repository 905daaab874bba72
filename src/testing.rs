//! Testing utilities for code that produces component results
//!
//! This module provides assertion macros for the three branches of a
//! [`ComponentResult`](crate::ComponentResult), a shareable [`Probe`] call
//! counter for verifying that short-circuited update steps are never
//! invoked, and (behind the `proptest` feature) strategies for generating
//! arbitrary results in property tests.
//!
//! # Examples
//!
//! ## Assertion macros
//!
//! ```
//! use confluence::{assert_failed, assert_success, ComponentResult};
//!
//! let ok = ComponentResult::<_, String, String, String>::with_model(42);
//! assert_success!(ok);
//!
//! let bad = ComponentResult::<i32, String, String, _>::just_error("boom");
//! assert_failed!(bad);
//! ```
//!
//! ## Counting invocations
//!
//! ```
//! use confluence::testing::Probe;
//!
//! let probe = Probe::new();
//! let seen = probe.clone();
//! let step = move || seen.record();
//! step();
//! assert_eq!(probe.count(), 1);
//! ```

use std::cell::Cell;
use std::rc::Rc;

/// A shareable invocation counter.
///
/// Clones share the same underlying count, so a clone can be moved into a
/// closure handed to [`sequence`](crate::ComponentResult::sequence) or
/// [`apply_notification`](crate::ComponentResult::apply_notification)
/// while the original stays behind to assert on.
///
/// # Example
///
/// ```
/// use confluence::testing::Probe;
/// use confluence::{ComponentResult, NoNotification};
///
/// type R = ComponentResult<i32, &'static str, NoNotification, String>;
///
/// let probe = Probe::new();
/// let seen = probe.clone();
///
/// let steps: Vec<Box<dyn FnOnce(i32) -> R>> = vec![
///     Box::new(|_| R::just_error("stop".to_string())),
///     Box::new(move |n| {
///         seen.record();
///         R::with_model(n)
///     }),
/// ];
///
/// let result: R = ComponentResult::sequence(steps, 1);
/// assert!(result.is_failed());
/// assert_eq!(probe.count(), 0); // the second step never ran
/// ```
#[derive(Debug, Clone, Default)]
pub struct Probe {
    hits: Rc<Cell<usize>>,
}

impl Probe {
    /// Create a fresh counter at zero.
    pub fn new() -> Self {
        Probe::default()
    }

    /// Record one invocation.
    pub fn record(&self) {
        self.hits.set(self.hits.get() + 1);
    }

    /// Number of invocations recorded so far, across all clones.
    pub fn count(&self) -> usize {
        self.hits.get()
    }
}

/// Assert that a component result is a success (with or without a pending
/// notification).
///
/// Panics with the debug representation of the value otherwise.
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        match &$result {
            r => assert!(r.is_success(), "expected success, got: {:?}", r),
        }
    };
}

/// Assert that a component result is `Failed`.
///
/// Panics with the debug representation of the value otherwise.
#[macro_export]
macro_rules! assert_failed {
    ($result:expr) => {
        match &$result {
            r => assert!(r.is_failed(), "expected failure, got: {:?}", r),
        }
    };
}

/// Assert that a component result carries a pending notification.
///
/// Panics with the debug representation of the value otherwise.
#[macro_export]
macro_rules! assert_notifying {
    ($result:expr) => {
        match &$result {
            r => assert!(
                r.has_notification(),
                "expected a pending notification, got: {:?}",
                r
            ),
        }
    };
}

/// Proptest strategies for generating arbitrary component results.
///
/// Only available with the `proptest` feature enabled.
#[cfg(feature = "proptest")]
pub mod strategies {
    use crate::{ComponentResult, EffectSet};
    use proptest::prelude::*;

    /// Strategy producing effect sets of 0 to `max` descriptions.
    pub fn effect_set<E>(
        effect: impl Strategy<Value = E>,
        max: usize,
    ) -> impl Strategy<Value = EffectSet<E>>
    where
        E: std::fmt::Debug,
    {
        prop::collection::vec(effect, 0..=max).prop_map(EffectSet::from)
    }

    /// Strategy producing any of the three result variants.
    pub fn component_result<M, E, X, Err>(
        model: impl Strategy<Value = M> + Clone,
        effect: impl Strategy<Value = E> + Clone,
        notification: impl Strategy<Value = X>,
        error: impl Strategy<Value = Err>,
    ) -> impl Strategy<Value = ComponentResult<M, E, X, Err>>
    where
        M: std::fmt::Debug,
        E: std::fmt::Debug,
        X: std::fmt::Debug,
        Err: std::fmt::Debug,
    {
        prop_oneof![
            (model.clone(), effect_set(effect.clone(), 3))
                .prop_map(|(m, fx)| ComponentResult::Updated(m, fx)),
            (model, notification, effect_set(effect, 3))
                .prop_map(|(m, x, fx)| ComponentResult::Notifying(m, x, fx)),
            error.prop_map(ComponentResult::just_error),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ComponentResult;

    type R = ComponentResult<i32, &'static str, String, String>;

    #[test]
    fn probe_counts_across_clones() {
        let probe = Probe::new();
        let clone = probe.clone();
        clone.record();
        clone.record();
        assert_eq!(probe.count(), 2);
    }

    #[test]
    fn assertion_macros_accept_matching_branches() {
        assert_success!(R::with_model(1));
        assert_failed!(R::just_error("boom".to_string()));
    }

    #[test]
    #[should_panic(expected = "expected success")]
    fn assert_success_panics_on_failure() {
        assert_success!(R::just_error("boom".to_string()));
    }
}

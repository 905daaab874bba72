//! The composite result of a component update step
//!
//! This module provides [`ComponentResult`], the value a component's
//! `init`/`update`-style function returns: a new model, a queue of opaque
//! effect descriptions, optionally one notification aimed at the caller,
//! or — exclusively — an error. The combinators here are the whole
//! algebra: construction, augmentation, mapping, combination, sequencing,
//! notification routing, and terminal resolution into the plain
//! `(model, effects)` pair a host runtime consumes.
//!
//! # Type-level states
//!
//! Two of the four type parameters double as type-level state:
//!
//! - `X`, the notification type. A result that is statically known to
//!   carry no notification uses the uninhabited [`NoNotification`] alias.
//!   [`with_notification`](ComponentResult::with_notification) only exists
//!   on that state, so attaching a second notification is a compile error,
//!   not a runtime check.
//! - `Err`, the error type. After [`resolve_error`](ComponentResult::resolve_error)
//!   the error slot is [`NoError`], so [`resolve`](ComponentResult::resolve)
//!   can demand — at compile time — that every failure path was handled.
//!
//! # Short-circuiting
//!
//! Once a result is [`Failed`](ComponentResult::Failed), every combinator
//! except [`map_error`](ComponentResult::map_error),
//! [`resolve_error`](ComponentResult::resolve_error), and
//! [`escape`](ComponentResult::escape) propagates it unchanged. Augmenting
//! a failed result with effects or a notification is a silent no-op: the
//! error decision belongs to the caller, never to an intermediate
//! combinator.
//!
//! # Examples
//!
//! ```
//! use confluence::{ComponentResult, NoNotification};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Counter {
//!     count: i32,
//! }
//!
//! fn increment(c: Counter) -> ComponentResult<Counter, &'static str, NoNotification, String> {
//!     ComponentResult::with_model(Counter { count: c.count + 1 })
//!         .with_effect("record timestamp")
//! }
//!
//! let result = increment(Counter { count: 0 });
//! assert!(result.is_success());
//! ```

use crate::effects::EffectSet;

/// Alias for the uninhabited notification state.
///
/// A `ComponentResult<M, E, NoNotification, Err>` structurally cannot be
/// in the [`Notifying`](ComponentResult::Notifying) variant, because no
/// value of [`NoNotification`] exists. Combinators that require "no
/// notification yet" accept exactly this state.
pub type NoNotification = std::convert::Infallible;

/// Alias for the uninhabited error state.
///
/// A `ComponentResult<M, E, X, NoError>` structurally cannot be in the
/// [`Failed`](ComponentResult::Failed) variant.
/// [`resolve_error`](ComponentResult::resolve_error) produces this state;
/// [`resolve`](ComponentResult::resolve) requires it.
pub type NoError = std::convert::Infallible;

/// The result of one component update step.
///
/// Exactly one of:
///
/// - [`Updated`](ComponentResult::Updated): a new model plus queued
///   effects, no notification pending.
/// - [`Notifying`](ComponentResult::Notifying): a new model, queued
///   effects, and one pending notification for the caller.
/// - [`Failed`](ComponentResult::Failed): a terminal error. No model, no
///   effects, no notification.
///
/// # Type Parameters
///
/// * `M` - The component's model
/// * `E` - The effect description type (opaque to this crate)
/// * `X` - The notification type; [`NoNotification`] when statically absent
/// * `Err` - The error type; [`NoError`] when statically impossible
///
/// # Example
///
/// ```
/// use confluence::{ComponentResult, NoNotification};
///
/// let r = ComponentResult::<_, String, NoNotification, String>::with_model(42);
/// let (model, effects) = r
///     .resolve_error(|_err| ComponentResult::with_model(0))
///     .resolve();
/// assert_eq!(model, 42);
/// assert!(effects.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComponentResult<M, E, X, Err> {
    /// Success: new model plus queued effects, no notification pending.
    Updated(M, EffectSet<E>),
    /// Success with one pending notification for the caller.
    Notifying(M, X, EffectSet<E>),
    /// Terminal error. Carries nothing but the error itself.
    Failed(Err),
}

impl<M, E, X, Err> ComponentResult<M, E, X, Err> {
    // ========== Construction ==========

    /// Build a success result with the given model, no effects, no
    /// notification. Total — never fails.
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::ComponentResult;
    ///
    /// let r = ComponentResult::<_, String, String, String>::with_model("ready");
    /// assert!(r.is_success());
    /// assert!(!r.has_notification());
    /// ```
    #[inline]
    pub fn with_model(model: M) -> Self {
        ComponentResult::Updated(model, EffectSet::none())
    }

    /// Build a failed result.
    ///
    /// Every later augmentation call (effect or notification attachment)
    /// on this value is a no-op; only [`map_error`](Self::map_error),
    /// [`resolve_error`](Self::resolve_error), and
    /// [`escape`](Self::escape) can observe the error.
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::ComponentResult;
    ///
    /// let r = ComponentResult::<i32, String, String, _>::just_error("page out of range")
    ///     .with_effect("never queued".to_string());
    /// assert!(r.is_failed());
    /// ```
    #[inline]
    pub fn just_error(err: Err) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            error_type = std::any::type_name::<Err>(),
            "component update failed; downstream combinators will short-circuit"
        );
        ComponentResult::Failed(err)
    }

    /// Convert a plain `Result` into a component result.
    ///
    /// `Ok` becomes [`with_model`](Self::with_model), `Err` becomes
    /// [`just_error`](Self::just_error).
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::ComponentResult;
    ///
    /// let ok = ComponentResult::<_, String, String, String>::from_result(Ok(1));
    /// assert!(ok.is_success());
    ///
    /// let bad = ComponentResult::<i32, String, String, _>::from_result(Err("nope"));
    /// assert!(bad.is_failed());
    /// ```
    #[inline]
    pub fn from_result(result: Result<M, Err>) -> Self {
        match result {
            Ok(model) => ComponentResult::with_model(model),
            Err(err) => ComponentResult::just_error(err),
        }
    }

    // ========== Predicates & accessors ==========

    /// `true` for [`Updated`](Self::Updated) and
    /// [`Notifying`](Self::Notifying).
    #[inline]
    pub fn is_success(&self) -> bool {
        !self.is_failed()
    }

    /// `true` for [`Failed`](Self::Failed).
    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self, ComponentResult::Failed(_))
    }

    /// `true` when a notification is pending.
    #[inline]
    pub fn has_notification(&self) -> bool {
        matches!(self, ComponentResult::Notifying(..))
    }

    /// The model, if this result carries one.
    #[inline]
    pub fn model(&self) -> Option<&M> {
        match self {
            ComponentResult::Updated(model, _) => Some(model),
            ComponentResult::Notifying(model, _, _) => Some(model),
            ComponentResult::Failed(_) => None,
        }
    }

    /// The queued effect set, if this result carries one.
    #[inline]
    pub fn effects(&self) -> Option<&EffectSet<E>> {
        match self {
            ComponentResult::Updated(_, effects) => Some(effects),
            ComponentResult::Notifying(_, _, effects) => Some(effects),
            ComponentResult::Failed(_) => None,
        }
    }

    /// The pending notification, if any.
    #[inline]
    pub fn notification(&self) -> Option<&X> {
        match self {
            ComponentResult::Notifying(_, notification, _) => Some(notification),
            _ => None,
        }
    }

    // ========== Augmentation ==========

    /// Batch one effect description onto the queue. No-op on `Failed`.
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::ComponentResult;
    ///
    /// let r = ComponentResult::<_, _, String, String>::with_model(1)
    ///     .with_effect("record timestamp");
    /// assert_eq!(r.effects().unwrap().len(), 1);
    /// ```
    pub fn with_effect(self, effect: E) -> Self {
        match self {
            ComponentResult::Updated(model, mut effects) => {
                effects.push(effect);
                ComponentResult::Updated(model, effects)
            }
            ComponentResult::Notifying(model, notification, mut effects) => {
                effects.push(effect);
                ComponentResult::Notifying(model, notification, effects)
            }
            ComponentResult::Failed(err) => ComponentResult::Failed(err),
        }
    }

    /// Batch a collection of effects in one call.
    ///
    /// An empty collection is a no-op. Append order among the inputs is
    /// preserved, but execution order is still not part of the contract
    /// (see [`EffectSet`]).
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::ComponentResult;
    ///
    /// let r = ComponentResult::<_, _, String, String>::with_model(1)
    ///     .with_effects(["a", "b"]);
    /// assert_eq!(r.effects().unwrap().len(), 2);
    ///
    /// let same = ComponentResult::<_, &str, String, String>::with_model(1)
    ///     .with_effects([]);
    /// assert!(same.effects().unwrap().is_empty());
    /// ```
    pub fn with_effects<I>(self, effects: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        match self {
            ComponentResult::Updated(model, mut queued) => {
                queued.extend(effects);
                ComponentResult::Updated(model, queued)
            }
            ComponentResult::Notifying(model, notification, mut queued) => {
                queued.extend(effects);
                ComponentResult::Notifying(model, notification, queued)
            }
            ComponentResult::Failed(err) => ComponentResult::Failed(err),
        }
    }

    // ========== Mapping ==========

    /// Transform the model, if present. Identity on `Failed`.
    ///
    /// Effects and any pending notification pass through untouched.
    /// Callers use this to embed a child model into the parent model.
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::ComponentResult;
    ///
    /// let r = ComponentResult::<_, String, String, String>::with_model(5)
    ///     .map_model(|n| n * 2);
    /// assert_eq!(r.model(), Some(&10));
    /// ```
    #[inline]
    pub fn map_model<M2, F>(self, f: F) -> ComponentResult<M2, E, X, Err>
    where
        F: FnOnce(M) -> M2,
    {
        match self {
            ComponentResult::Updated(model, effects) => ComponentResult::Updated(f(model), effects),
            ComponentResult::Notifying(model, notification, effects) => {
                ComponentResult::Notifying(f(model), notification, effects)
            }
            ComponentResult::Failed(err) => ComponentResult::Failed(err),
        }
    }

    /// Transform every queued effect description. Identity on `Failed`.
    ///
    /// Callers use this to tag a child's effects with a wrapper the
    /// parent's runtime wiring recognizes.
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::ComponentResult;
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// enum ParentFx {
    ///     FromChild(&'static str),
    /// }
    ///
    /// let r = ComponentResult::<_, _, String, String>::with_model(1)
    ///     .with_effect("tick")
    ///     .map_effect(ParentFx::FromChild);
    /// assert_eq!(
    ///     r.effects().unwrap().iter().next(),
    ///     Some(&ParentFx::FromChild("tick")),
    /// );
    /// ```
    pub fn map_effect<E2, F>(self, f: F) -> ComponentResult<M, E2, X, Err>
    where
        F: FnMut(E) -> E2,
    {
        match self {
            ComponentResult::Updated(model, effects) => {
                ComponentResult::Updated(model, effects.map(f))
            }
            ComponentResult::Notifying(model, notification, effects) => {
                ComponentResult::Notifying(model, notification, effects.map(f))
            }
            ComponentResult::Failed(err) => ComponentResult::Failed(err),
        }
    }

    /// Transform the pending notification, if any.
    ///
    /// Pass-through on `Updated` and `Failed`. Useful when a caller wants
    /// to re-emit a child's notification upward under its own type.
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::{ComponentResult, NoNotification};
    ///
    /// let r = ComponentResult::<_, String, NoNotification, String>::with_model(1)
    ///     .with_notification("accepted")
    ///     .map_notification(|n| n.len());
    /// assert_eq!(r.notification(), Some(&8));
    /// ```
    pub fn map_notification<X2, F>(self, f: F) -> ComponentResult<M, E, X2, Err>
    where
        F: FnOnce(X) -> X2,
    {
        match self {
            ComponentResult::Updated(model, effects) => ComponentResult::Updated(model, effects),
            ComponentResult::Notifying(model, notification, effects) => {
                ComponentResult::Notifying(model, f(notification), effects)
            }
            ComponentResult::Failed(err) => ComponentResult::Failed(err),
        }
    }

    /// Transform the error, if this result failed. Identity on success.
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::ComponentResult;
    ///
    /// let r = ComponentResult::<i32, String, String, _>::just_error("bad index")
    ///     .map_error(|e| format!("editor: {e}"));
    /// assert_eq!(r, ComponentResult::just_error("editor: bad index".to_string()));
    /// ```
    #[inline]
    pub fn map_error<Err2, F>(self, f: F) -> ComponentResult<M, E, X, Err2>
    where
        F: FnOnce(Err) -> Err2,
    {
        match self {
            ComponentResult::Updated(model, effects) => ComponentResult::Updated(model, effects),
            ComponentResult::Notifying(model, notification, effects) => {
                ComponentResult::Notifying(model, notification, effects)
            }
            ComponentResult::Failed(err) => ComponentResult::Failed(f(err)),
        }
    }

    // ========== Combination ==========

    /// Combine two results into one by merging their models.
    ///
    /// `other` must be statically notification-free; only `self`'s
    /// notification, if any, survives. Effect sets concatenate in
    /// `(self, other)` order.
    ///
    /// Error precedence is asymmetric and deliberate: if `self` failed,
    /// its error is returned regardless of `other`'s state; otherwise
    /// `other`'s failure wins. Callers may observe and rely on this
    /// tie-break.
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::{ComponentResult, NoNotification};
    ///
    /// type Child = ComponentResult<i32, &'static str, NoNotification, String>;
    ///
    /// let combined = Child::with_model(2)
    ///     .with_effect("left")
    ///     .map2_model(Child::with_model(3).with_effect("right"), |a, b| a + b);
    ///
    /// assert_eq!(combined.model(), Some(&5));
    /// assert_eq!(
    ///     combined.effects().unwrap().iter().collect::<Vec<_>>(),
    ///     vec![&"left", &"right"],
    /// );
    /// ```
    pub fn map2_model<M2, M3, F>(
        self,
        other: ComponentResult<M2, E, NoNotification, Err>,
        f: F,
    ) -> ComponentResult<M3, E, X, Err>
    where
        F: FnOnce(M, M2) -> M3,
    {
        match (self, other) {
            // Left error wins, even over a right error.
            (ComponentResult::Failed(err), _) => ComponentResult::Failed(err),
            (_, ComponentResult::Failed(err)) => ComponentResult::Failed(err),
            (ComponentResult::Updated(a, fa), ComponentResult::Updated(b, fb)) => {
                ComponentResult::Updated(f(a, b), fa.batch(fb))
            }
            (ComponentResult::Notifying(a, notification, fa), ComponentResult::Updated(b, fb)) => {
                ComponentResult::Notifying(f(a, b), notification, fa.batch(fb))
            }
            (_, ComponentResult::Notifying(_, never, _)) => match never {},
        }
    }

    /// Fold a series of update steps over a starting model, left to right.
    ///
    /// Each step takes the running model and returns a notification-free
    /// result. On success the next step runs on the new model, with the
    /// previously accumulated effects batched *before* the step's own. The
    /// first `Failed` short-circuits: remaining steps are never invoked
    /// and their effects are never queued.
    ///
    /// An empty step list is equivalent to
    /// [`with_model(initial)`](Self::with_model).
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::{ComponentResult, NoNotification};
    ///
    /// type R = ComponentResult<i32, &'static str, NoNotification, String>;
    ///
    /// let steps: Vec<fn(i32) -> R> = vec![
    ///     |n| R::with_model(n + 1).with_effect("tick"),
    ///     |n| R::with_model(n * 10),
    /// ];
    ///
    /// let result = ComponentResult::sequence(steps, 1);
    /// assert_eq!(result, R::with_model(20).with_effect("tick"));
    /// ```
    pub fn sequence<I, F>(steps: I, initial: M) -> ComponentResult<M, E, X, Err>
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(M) -> ComponentResult<M, E, NoNotification, Err>,
    {
        let mut running: ComponentResult<M, E, NoNotification, Err> =
            ComponentResult::with_model(initial);
        for step in steps {
            running = match running {
                ComponentResult::Updated(model, accumulated) => {
                    step(model).prepend_effects(accumulated)
                }
                ComponentResult::Notifying(_, never, _) => match never {},
                ComponentResult::Failed(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!("sequence short-circuited on failed step");
                    return ComponentResult::Failed(err);
                }
            };
        }
        running.discard_notification()
    }

    /// Consume the pending notification, if any.
    ///
    /// When notifying, `handler` is invoked exactly once with the
    /// notification and the same result stripped of it — original model
    /// and effects intact, notification slot statically vacant — and the
    /// handler's output is returned. Because the handed-over result is in
    /// the [`NoNotification`] state, the handler may attach a fresh
    /// notification of its own choosing. When not notifying, the result
    /// passes through with the notification slot re-typed as vacant.
    /// `Failed` passes through unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::{ComponentResult, NoNotification};
    ///
    /// let child = ComponentResult::<_, &str, NoNotification, String>::with_model(1)
    ///     .with_notification(7);
    ///
    /// let parent: ComponentResult<i32, &str, NoNotification, String> =
    ///     child.apply_notification(|n, r| r.map_model(|m| m + n));
    ///
    /// assert_eq!(parent.model(), Some(&8));
    /// ```
    pub fn apply_notification<X2, F>(self, handler: F) -> ComponentResult<M, E, X2, Err>
    where
        F: FnOnce(X, ComponentResult<M, E, NoNotification, Err>) -> ComponentResult<M, E, X2, Err>,
    {
        match self {
            ComponentResult::Updated(model, effects) => ComponentResult::Updated(model, effects),
            ComponentResult::Notifying(model, notification, effects) => {
                handler(notification, ComponentResult::Updated(model, effects))
            }
            ComponentResult::Failed(err) => ComponentResult::Failed(err),
        }
    }

    /// Drop any pending notification, keeping model, effects, and error.
    ///
    /// The notification slot is re-typed as vacant, so a later
    /// [`with_notification`](Self::with_notification) may fill it again.
    /// Used when a caller deliberately ignores the side channel.
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::{ComponentResult, NoNotification};
    ///
    /// let r = ComponentResult::<_, String, NoNotification, String>::with_model(1)
    ///     .with_notification("ignored");
    /// let quiet: ComponentResult<i32, String, NoNotification, String> =
    ///     r.discard_notification();
    /// assert!(!quiet.has_notification());
    /// assert_eq!(quiet.model(), Some(&1));
    /// ```
    pub fn discard_notification<X2>(self) -> ComponentResult<M, E, X2, Err> {
        match self {
            ComponentResult::Updated(model, effects) => ComponentResult::Updated(model, effects),
            ComponentResult::Notifying(model, _, effects) => {
                ComponentResult::Updated(model, effects)
            }
            ComponentResult::Failed(err) => ComponentResult::Failed(err),
        }
    }

    // ========== Resolution ==========

    /// Handle the error branch, producing a result that statically cannot
    /// fail.
    ///
    /// On `Failed`, `recover` builds a fresh result with the same model,
    /// effect, and notification types; on success this is the identity.
    /// The output's error slot is [`NoError`], which is what
    /// [`resolve`](Self::resolve) demands — the type system forces full
    /// error handling at the boundary.
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::{ComponentResult, NoNotification};
    ///
    /// let r = ComponentResult::<i32, &str, NoNotification, String>::just_error(
    ///     "page out of range".to_string(),
    /// );
    /// let (model, _) = r
    ///     .resolve_error(|_| ComponentResult::with_model(0))
    ///     .resolve();
    /// assert_eq!(model, 0);
    /// ```
    pub fn resolve_error<F>(self, recover: F) -> ComponentResult<M, E, X, NoError>
    where
        F: FnOnce(Err) -> ComponentResult<M, E, X, NoError>,
    {
        match self {
            ComponentResult::Updated(model, effects) => ComponentResult::Updated(model, effects),
            ComponentResult::Notifying(model, notification, effects) => {
                ComponentResult::Notifying(model, notification, effects)
            }
            ComponentResult::Failed(err) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("recovering failed component result at boundary");
                recover(err)
            }
        }
    }

    /// Exhaustive fallback conversion into a plain [`Outcome`].
    ///
    /// For debugging and test contexts that need to inspect every branch
    /// without the type-level guarantees of [`resolve`](Self::resolve).
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::{ComponentResult, NoNotification, Outcome};
    ///
    /// let r = ComponentResult::<_, &str, NoNotification, String>::with_model(5)
    ///     .with_notification("ping");
    ///
    /// match r.escape() {
    ///     Outcome::Settled { model, notification, .. } => {
    ///         assert_eq!(model, 5);
    ///         assert_eq!(notification, Some("ping"));
    ///     }
    ///     Outcome::Failed(_) => unreachable!(),
    /// }
    /// ```
    pub fn escape(self) -> crate::Outcome<M, E, X, Err> {
        match self {
            ComponentResult::Updated(model, effects) => crate::Outcome::Settled {
                model,
                effects,
                notification: None,
            },
            ComponentResult::Notifying(model, notification, effects) => crate::Outcome::Settled {
                model,
                effects,
                notification: Some(notification),
            },
            ComponentResult::Failed(err) => crate::Outcome::Failed(err),
        }
    }
}

impl<M, E, Err> ComponentResult<M, E, NoNotification, Err> {
    /// Attach a notification to a result statically known to carry none.
    ///
    /// Only available on the [`NoNotification`] state, so attaching a
    /// second notification is a type error at the call site. No-op on
    /// `Failed` — the short-circuit contract, not an error.
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::{ComponentResult, NoNotification};
    ///
    /// let r = ComponentResult::<_, String, NoNotification, String>::with_model(1)
    ///     .with_notification("value accepted");
    /// assert_eq!(r.notification(), Some(&"value accepted"));
    /// ```
    pub fn with_notification<X>(self, notification: X) -> ComponentResult<M, E, X, Err> {
        match self {
            ComponentResult::Updated(model, effects) => {
                ComponentResult::Notifying(model, notification, effects)
            }
            ComponentResult::Notifying(_, never, _) => match never {},
            ComponentResult::Failed(err) => ComponentResult::Failed(err),
        }
    }
}

impl<M, E> ComponentResult<M, E, NoNotification, NoError> {
    /// Terminal conversion into the `(model, effects)` pair a host
    /// runtime's program loop expects.
    ///
    /// Only available once the notification slot is vacant and the error
    /// slot is uninhabited — an unconsumed notification or an unhandled
    /// error is a compile error at the call site, never a runtime one.
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::{ComponentResult, NoError, NoNotification};
    ///
    /// let r: ComponentResult<i32, &str, NoNotification, NoError> =
    ///     ComponentResult::with_model(4).with_effect("tick");
    ///
    /// let (model, effects) = r.resolve();
    /// assert_eq!(model, 4);
    /// assert_eq!(effects.into_vec(), vec!["tick"]);
    /// ```
    pub fn resolve(self) -> (M, EffectSet<E>) {
        match self {
            ComponentResult::Updated(model, effects) => (model, effects),
            ComponentResult::Notifying(_, never, _) => match never {},
            ComponentResult::Failed(never) => match never {},
        }
    }
}

impl<M, E, X, Err> ComponentResult<M, E, X, Err> {
    // Batches previously accumulated effects in front of this result's
    // own queue. Keeps sequence's (prior, then new) effect order.
    fn prepend_effects(self, prior: EffectSet<E>) -> Self {
        match self {
            ComponentResult::Updated(model, effects) => {
                ComponentResult::Updated(model, prior.batch(effects))
            }
            ComponentResult::Notifying(model, notification, effects) => {
                ComponentResult::Notifying(model, notification, prior.batch(effects))
            }
            ComponentResult::Failed(err) => ComponentResult::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type R = ComponentResult<i32, &'static str, NoNotification, String>;

    #[test]
    fn with_model_has_no_effects_or_notification() {
        let r = R::with_model(7);
        assert_eq!(r.model(), Some(&7));
        assert!(r.effects().unwrap().is_empty());
        assert!(!r.has_notification());
    }

    #[test]
    fn just_error_ignores_augmentation() {
        let r = R::just_error("boom".to_string())
            .with_effect("dropped")
            .with_effects(["also dropped"]);
        assert_eq!(r, R::just_error("boom".to_string()));
    }

    #[test]
    fn with_notification_keeps_model_and_effects() {
        let r = R::with_model(1)
            .with_effect("tick")
            .with_notification("accepted");
        assert_eq!(r.model(), Some(&1));
        assert_eq!(r.notification(), Some(&"accepted"));
        assert_eq!(r.effects().unwrap().len(), 1);
    }

    #[test]
    fn with_notification_noop_on_failed() {
        let r = R::just_error("boom".to_string()).with_notification("dropped");
        assert!(r.is_failed());
        assert_eq!(r.notification(), None);
    }

    #[test]
    fn map_model_preserves_notification_and_effects() {
        let r = R::with_model(2)
            .with_effect("tick")
            .with_notification("n")
            .map_model(|m| m * 3);
        assert_eq!(r.model(), Some(&6));
        assert_eq!(r.notification(), Some(&"n"));
        assert_eq!(r.effects().unwrap().len(), 1);
    }

    #[test]
    fn map_effect_covers_every_member() {
        let r = R::with_model(0)
            .with_effects(["a", "b"])
            .map_effect(|e| format!("child:{e}"));
        let effects: Vec<_> = r.effects().unwrap().iter().cloned().collect();
        assert_eq!(effects, vec!["child:a".to_string(), "child:b".to_string()]);
    }

    #[test]
    fn map_error_identity_on_success() {
        let r = R::with_model(1).map_error(|e| format!("wrapped: {e}"));
        assert_eq!(r.model(), Some(&1));
        assert!(!r.is_failed());
    }

    #[test]
    fn map2_error_precedence_left_wins() {
        let left = R::just_error("left".to_string());
        let right = R::just_error("right".to_string());
        let combined = left.map2_model(right, |a, b| a + b);
        assert_eq!(combined, R::just_error("left".to_string()));
    }

    #[test]
    fn map2_right_error_when_left_succeeds() {
        let combined =
            R::with_model(1).map2_model(R::just_error("right".to_string()), |a, b| a + b);
        assert_eq!(combined, R::just_error("right".to_string()));
    }

    #[test]
    fn map2_concatenates_effects_left_first() {
        let combined = R::with_model(1)
            .with_effect("left")
            .map2_model(R::with_model(2).with_effect("right"), |a, b| a + b);
        let effects: Vec<_> = combined.effects().unwrap().iter().copied().collect();
        assert_eq!(effects, vec!["left", "right"]);
    }

    #[test]
    fn map2_keeps_left_notification() {
        let left = R::with_model(1).with_notification("from left");
        let combined = left.map2_model(R::with_model(2), |a, b| a + b);
        assert_eq!(combined.notification(), Some(&"from left"));
        assert_eq!(combined.model(), Some(&3));
    }

    #[test]
    fn apply_notification_passthrough_without_notification() {
        let r: ComponentResult<i32, &str, NoNotification, String> =
            R::with_model(1).apply_notification(|never: NoNotification, _| match never {});
        assert_eq!(r.model(), Some(&1));
    }

    #[test]
    fn discard_notification_keeps_effects() {
        let r = R::with_model(1).with_effect("kept").with_notification("n");
        let quiet: R = r.discard_notification();
        assert!(!quiet.has_notification());
        assert_eq!(quiet.effects().unwrap().len(), 1);
    }

    #[test]
    fn escape_exposes_all_branches() {
        match R::just_error("boom".to_string()).escape() {
            crate::Outcome::Failed(err) => assert_eq!(err, "boom"),
            crate::Outcome::Settled { .. } => panic!("expected failure branch"),
        }
    }

    #[test]
    fn from_result_round_trip() {
        let ok = R::from_result(Ok(3));
        assert_eq!(ok, R::with_model(3));
        let bad = R::from_result(Err("nope".to_string()));
        assert!(bad.is_failed());
    }
}

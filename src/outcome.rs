//! Plain tagged outcome for exhaustive inspection
//!
//! [`Outcome`] is the shape
//! [`ComponentResult::escape`](crate::ComponentResult::escape) produces: a
//! flat success record with an optional notification, or the error. It
//! trades the type-level guarantees of the result algebra for plain
//! pattern matching, which is what debugging and test assertions want.

use crate::effects::EffectSet;

/// Every branch of a [`ComponentResult`](crate::ComponentResult), flattened.
///
/// # Example
///
/// ```
/// use confluence::{ComponentResult, NoNotification, Outcome};
///
/// let r = ComponentResult::<_, &str, NoNotification, String>::with_model(1)
///     .with_effect("tick");
///
/// match r.escape() {
///     Outcome::Settled { model, effects, notification } => {
///         assert_eq!(model, 1);
///         assert_eq!(effects.len(), 1);
///         assert_eq!(notification, None);
///     }
///     Outcome::Failed(_) => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<M, E, X, Err> {
    /// The update settled on a model, with its queued effects and an
    /// optional pending notification.
    Settled {
        /// The final model.
        model: M,
        /// Effects queued along the way, in append order.
        effects: EffectSet<E>,
        /// The pending notification, if one was attached and never consumed.
        notification: Option<X>,
    },
    /// The update failed.
    Failed(Err),
}

impl<M, E, X, Err> Outcome<M, E, X, Err> {
    /// `true` for the [`Settled`](Outcome::Settled) branch.
    #[inline]
    pub fn is_settled(&self) -> bool {
        matches!(self, Outcome::Settled { .. })
    }

    /// `true` for the [`Failed`](Outcome::Failed) branch.
    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    /// The model, when settled.
    #[inline]
    pub fn model(&self) -> Option<&M> {
        match self {
            Outcome::Settled { model, .. } => Some(model),
            Outcome::Failed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ComponentResult, NoNotification};

    #[test]
    fn settled_reports_model() {
        let outcome = ComponentResult::<_, &str, NoNotification, String>::with_model(9).escape();
        assert!(outcome.is_settled());
        assert_eq!(outcome.model(), Some(&9));
    }

    #[test]
    fn failed_reports_no_model() {
        let outcome =
            ComponentResult::<i32, &str, NoNotification, _>::just_error("boom").escape();
        assert!(outcome.is_failed());
        assert_eq!(outcome.model(), None);
    }
}

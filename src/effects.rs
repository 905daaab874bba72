//! Ordered collections of opaque effect descriptions
//!
//! This module provides [`EffectSet`], the queue of effect descriptions a
//! [`ComponentResult`](crate::ComponentResult) accumulates as it flows
//! through combinators. Effects are *descriptions* of work (an HTTP
//! request, a timestamp to record, a focus change) — the core never
//! executes them. A host runtime receives the final set at resolution time
//! and runs it however it likes.
//!
//! # Ordering
//!
//! Batching preserves append order, but the contract deliberately does NOT
//! guarantee execution order across members — host runtimes commonly give
//! no interleaving guarantee for batched effects, and this crate mirrors
//! that. Callers must not depend on one queued effect running before
//! another.
//!
//! # Examples
//!
//! ```
//! use confluence::EffectSet;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Fx {
//!     RecordTimestamp,
//!     Save(String),
//! }
//!
//! let a: EffectSet<Fx> = [Fx::RecordTimestamp].into_iter().collect();
//! let b: EffectSet<Fx> = [Fx::Save("draft".into())].into_iter().collect();
//!
//! let batched = a.batch(b);
//! assert_eq!(batched.len(), 2);
//! ```

use crate::{Monoid, Semigroup};

/// An ordered multiset of effect descriptions, composed by concatenation.
///
/// `EffectSet` is a thin wrapper over `Vec` whose API is restricted to the
/// operations the result algebra needs: batching, mapping, and terminal
/// iteration. The empty set is the identity for batching, which makes
/// `EffectSet` a lawful [`Monoid`].
///
/// # Example
///
/// ```
/// use confluence::EffectSet;
///
/// let mut fx = EffectSet::none();
/// assert!(fx.is_empty());
///
/// fx.push("record timestamp");
/// let fx = fx.batch(EffectSet::from(vec!["save", "log"]));
/// assert_eq!(fx.into_vec(), vec!["record timestamp", "save", "log"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectSet<E> {
    effects: Vec<E>,
}

impl<E> EffectSet<E> {
    /// The empty effect set.
    ///
    /// Identity for [`batch`](EffectSet::batch): batching it onto any set,
    /// from either side, leaves the set unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::EffectSet;
    ///
    /// let fx: EffectSet<String> = EffectSet::none();
    /// assert!(fx.is_empty());
    /// ```
    #[inline]
    pub fn none() -> Self {
        EffectSet { effects: Vec::new() }
    }

    /// An effect set holding a single description.
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::EffectSet;
    ///
    /// let fx = EffectSet::of("record timestamp");
    /// assert_eq!(fx.len(), 1);
    /// ```
    #[inline]
    pub fn of(effect: E) -> Self {
        EffectSet { effects: vec![effect] }
    }

    /// Append a single effect description.
    #[inline]
    pub fn push(&mut self, effect: E) {
        self.effects.push(effect);
    }

    /// Concatenate two effect sets, `self` first.
    ///
    /// Append order is preserved; execution order across members remains
    /// unspecified (see module docs).
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::EffectSet;
    ///
    /// let fx = EffectSet::of(1).batch(EffectSet::of(2));
    /// assert_eq!(fx.into_vec(), vec![1, 2]);
    /// ```
    #[inline]
    pub fn batch(mut self, other: Self) -> Self {
        self.effects.extend(other.effects);
        self
    }

    /// Transform every queued effect description.
    ///
    /// Used by callers to wrap a child component's effects in a
    /// parent-recognizable tag so the runtime can route responses back.
    ///
    /// # Example
    ///
    /// ```
    /// use confluence::EffectSet;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum Parent {
    ///     Child(u32),
    /// }
    ///
    /// let fx = EffectSet::from(vec![1u32, 2]).map(Parent::Child);
    /// assert_eq!(fx.into_vec(), vec![Parent::Child(1), Parent::Child(2)]);
    /// ```
    pub fn map<E2, F>(self, f: F) -> EffectSet<E2>
    where
        F: FnMut(E) -> E2,
    {
        EffectSet {
            effects: self.effects.into_iter().map(f).collect(),
        }
    }

    /// Number of queued effect descriptions.
    #[inline]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Whether the set holds no effect descriptions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Iterate over the queued descriptions without consuming the set.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.effects.iter()
    }

    /// Unwrap into the underlying vector, in append order.
    #[inline]
    pub fn into_vec(self) -> Vec<E> {
        self.effects
    }
}

impl<E> From<Vec<E>> for EffectSet<E> {
    #[inline]
    fn from(effects: Vec<E>) -> Self {
        EffectSet { effects }
    }
}

impl<E> FromIterator<E> for EffectSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        EffectSet {
            effects: iter.into_iter().collect(),
        }
    }
}

impl<E> Extend<E> for EffectSet<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.effects.extend(iter);
    }
}

impl<E> IntoIterator for EffectSet<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a EffectSet<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.iter()
    }
}

impl<E> Semigroup for EffectSet<E> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.batch(other)
    }
}

impl<E> Monoid for EffectSet<E> {
    fn empty() -> Self {
        EffectSet::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_empty() {
        let fx: EffectSet<i32> = EffectSet::none();
        assert!(fx.is_empty());
        assert_eq!(fx.len(), 0);
    }

    #[test]
    fn batch_preserves_append_order() {
        let fx = EffectSet::from(vec![1, 2]).batch(EffectSet::from(vec![3]));
        assert_eq!(fx.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn batch_identity_both_sides() {
        let fx = EffectSet::from(vec!["a", "b"]);
        assert_eq!(fx.clone().batch(EffectSet::none()), fx);
        assert_eq!(EffectSet::none().batch(fx.clone()), fx);
    }

    #[test]
    fn map_keeps_order_and_count() {
        let fx = EffectSet::from(vec![1, 2, 3]).map(|n| n * 10);
        assert_eq!(fx.into_vec(), vec![10, 20, 30]);
    }

    #[test]
    fn combine_agrees_with_batch() {
        let a = EffectSet::from(vec![1]);
        let b = EffectSet::from(vec![2]);
        assert_eq!(a.clone().combine(b.clone()), a.batch(b));
    }

    #[test]
    fn monoid_empty_is_none() {
        let empty: EffectSet<i32> = Monoid::empty();
        assert_eq!(empty, EffectSet::none());
    }

    #[test]
    fn collect_from_iterator() {
        let fx: EffectSet<i32> = (1..=3).collect();
        assert_eq!(fx.into_vec(), vec![1, 2, 3]);
    }
}

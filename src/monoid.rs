//! Monoid trait for semigroups with an identity element
//!
//! A `Monoid` extends [`Semigroup`] with an identity value. For effect
//! batching this is the empty effect set: batching nothing onto a result
//! leaves it unchanged, from either side.
//!
//! # Mathematical Properties
//!
//! 1. **Associativity** (from Semigroup):
//!    ```text
//!    a.combine(b).combine(c) == a.combine(b.combine(c))
//!    ```
//! 2. **Right identity**: `a.combine(M::empty()) == a`
//! 3. **Left identity**: `M::empty().combine(a) == a`
//!
//! # Examples
//!
//! ```
//! use confluence::{Monoid, Semigroup};
//!
//! let effects = vec!["fetch", "save"];
//! let empty: Vec<&str> = Monoid::empty();
//! assert_eq!(effects.clone().combine(empty.clone()), effects);
//! assert_eq!(empty.combine(effects.clone()), effects);
//! ```

use crate::Semigroup;

/// A `Semigroup` with an identity element.
///
/// # Laws
///
/// ```text
/// a.combine(M::empty()) == a           (right identity)
/// M::empty().combine(a) == a           (left identity)
/// ```
pub trait Monoid: Semigroup {
    /// The identity element for this monoid.
    fn empty() -> Self;
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_identity_laws() {
        let v = vec![1, 2, 3];
        let empty: Vec<i32> = Monoid::empty();
        assert_eq!(v.clone().combine(empty.clone()), v);
        assert_eq!(empty.combine(v.clone()), v);
    }

    #[test]
    fn string_identity_laws() {
        let s = "hello".to_string();
        let empty: String = Monoid::empty();
        assert_eq!(s.clone().combine(empty.clone()), s);
        assert_eq!(empty.combine(s.clone()), s);
    }

    #[test]
    fn option_identity_is_none() {
        let empty: Option<String> = Monoid::empty();
        assert_eq!(empty, None);
        assert_eq!(Some("x".to_string()).combine(Monoid::empty()), Some("x".to_string()));
    }
}

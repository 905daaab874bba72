//! Semigroup trait for associative combination
//!
//! A Semigroup is a type with an associative binary operation. In this crate
//! it is the foundation of effect batching: queued effect descriptions are
//! combined by concatenation, and concatenation is associative, so callers
//! may batch in any grouping without changing the final queue.
//!
//! # Mathematical Properties
//!
//! For a type to be a valid Semigroup, the `combine` operation must be
//! associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use confluence::Semigroup;
//!
//! let left = vec!["save", "notify"];
//! let right = vec!["log"];
//! assert_eq!(left.combine(right), vec!["save", "notify", "log"]);
//!
//! let greeting = "component ".to_string();
//! assert_eq!(greeting.combine("updated".to_string()), "component updated");
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Note on Ownership
///
/// `combine` takes `self` by value. If you need to preserve the original
/// values, clone them before combining.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// # Examples
    ///
    /// ```
    /// use confluence::Semigroup;
    ///
    /// let combined = vec![1, 2].combine(vec![3]);
    /// assert_eq!(combined, vec![1, 2, 3]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

// Vec combines by concatenation, the same shape effect batching takes.
impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

// Option lifts an inner semigroup; None is absorbed on either side.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.combine(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_combines_by_concatenation() {
        assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
    }

    #[test]
    fn string_combines_by_append() {
        let s = "status: ".to_string().combine("ok".to_string());
        assert_eq!(s, "status: ok");
    }

    #[test]
    fn option_absorbs_none() {
        let some = Some(vec![1]);
        assert_eq!(some.clone().combine(None), Some(vec![1]));
        assert_eq!(None.combine(some), Some(vec![1]));
    }

    #[test]
    fn vec_associativity() {
        let a = vec![1];
        let b = vec![2];
        let c = vec![3];
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        assert_eq!(left, right);
    }

    #[test]
    fn option_associativity() {
        let a = Some("a".to_string());
        let b: Option<String> = None;
        let c = Some("c".to_string());
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        assert_eq!(left, right);
    }
}

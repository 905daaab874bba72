//! # Confluence
//!
//! > *"Where update streams meet"*
//!
//! A Rust library for composing the results of component update functions:
//! models, batched effect descriptions, typed side-channel notifications,
//! and caller-handled errors, all in one value with a small combinator
//! algebra.
//!
//! ## Philosophy
//!
//! In a component-oriented architecture every component owns a model and
//! an update function. An update may queue asynchronous effects, may emit
//! one notification for its caller, or may fail outright. **Confluence**
//! makes that whole outcome a single immutable value,
//! [`ComponentResult`], and keeps the bookkeeping honest at the type
//! level: a second notification cannot be attached, an unhandled error
//! cannot reach the host runtime, and a failed update can never smuggle a
//! model or effects past its caller.
//!
//! ## Quick Example
//!
//! ```rust
//! use confluence::ComponentResult;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Editor {
//!     value: String,
//! }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Fx {
//!     RecordTimestamp,
//! }
//!
//! fn accept(editor: Editor) -> ComponentResult<Editor, Fx, String, String> {
//!     let value = editor.value.clone();
//!     ComponentResult::with_model(editor)
//!         .with_effect(Fx::RecordTimestamp)
//!         .with_notification(format!("accepted: {value}"))
//! }
//!
//! // The caller consumes the notification and resolves for its runtime.
//! let (editor, effects) = accept(Editor { value: "draft".into() })
//!     .apply_notification(|note, result| {
//!         assert_eq!(note, "accepted: draft");
//!         result
//!     })
//!     .resolve_error(|_: String| unreachable!("accept cannot fail"))
//!     .resolve();
//!
//! assert_eq!(editor.value, "draft");
//! assert_eq!(effects.len(), 1);
//! ```
//!
//! For complete parent/child wiring, see the runnable programs in the
//! `demos/` directory.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod effects;
pub mod monoid;
pub mod outcome;
pub mod result;
pub mod semigroup;
pub mod testing;

// Re-exports
pub use effects::EffectSet;
pub use monoid::Monoid;
pub use outcome::Outcome;
pub use result::{ComponentResult, NoError, NoNotification};
pub use semigroup::Semigroup;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::effects::EffectSet;
    pub use crate::monoid::Monoid;
    pub use crate::outcome::Outcome;
    pub use crate::result::{ComponentResult, NoError, NoNotification};
    pub use crate::semigroup::Semigroup;
}

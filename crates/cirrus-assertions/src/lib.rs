//! cirrus-assertions — test helpers for synthesized stacks.
//!
//! Load a [`Template`] from a [`cirrus_core::Stack`] (or from the JSON wire
//! form) and query it for expected resource shapes. All checks return a
//! typed [`AssertionError`] describing the mismatch.

pub mod error;
pub mod template;

pub use error::{AssertionError, AssertionResult};
pub use template::Template;

//! # antipode
//!
//! A small library providing the "mirror-opposite" predicate over two
//! ordered sequences, defined by recursively peeling matching ends.
//!
//! ## Overview
//!
//! Two sequences are *opposite* when repeatedly applying these rules, in
//! order, ends in the empty pair:
//!
//! 1. Both sequences empty: the relation holds.
//! 2. Different lengths, or equal leading elements: the relation fails.
//! 3. Leading element of the first differs from the trailing element of the
//!    second: the relation fails.
//! 4. Otherwise drop the first sequence's head and the second sequence's
//!    last element, and continue.
//!
//! The crate provides:
//!
//! - **Relation**: [`is_opposite`], the direct recursive definition, and
//!   [`is_opposite_stack_safe`], the same rules evaluated on a trampoline
//!   so that input length does not bound the call stack.
//! - **Control**: [`Trampoline`], the stack-safe recursion support the
//!   trampolined variant is built on.
//!
//! ## Example
//!
//! ```rust
//! use antipode::prelude::*;
//!
//! assert!(is_opposite::<i32>(&[], &[]));
//! assert!(!is_opposite(&[1, 2, 3], &[1, 2, 3]));
//! ```
//!
//! [`is_opposite`]: relation::is_opposite
//! [`is_opposite_stack_safe`]: relation::is_opposite_stack_safe
//! [`Trampoline`]: control::Trampoline

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use antipode::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::relation::*;
}

pub mod control;

pub mod relation;

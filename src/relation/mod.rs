//! The mirror-opposite relation over sequences.
//!
//! This module provides [`is_opposite`], a pure predicate checking whether
//! two slices satisfy the recursive end-peeling relation, and
//! [`is_opposite_stack_safe`], the same rules evaluated on a
//! [`Trampoline`](crate::control::Trampoline) for inputs long enough to
//! threaten the call stack.

mod opposite;

pub use opposite::{is_opposite, is_opposite_stack_safe};

//! Control structures for stack-safe recursion.
//!
//! This module provides:
//!
//! - [`Trampoline`]: recursion expressed as data and interpreted in a loop,
//!   so that recursion depth does not consume call-stack frames.
//!
//! # Examples
//!
//! ```rust
//! use antipode::control::Trampoline;
//!
//! fn count_down(n: u64) -> Trampoline<'static, u64> {
//!     if n == 0 {
//!         Trampoline::done(0)
//!     } else {
//!         Trampoline::suspend(move || count_down(n - 1))
//!     }
//! }
//!
//! // This depth would overflow the stack with plain recursion.
//! assert_eq!(count_down(1_000_000).run(), 0);
//! ```

mod trampoline;

pub use trampoline::Trampoline;

//! Recursive mirror-opposite predicate.
//!
//! Two sequences are *opposite* when the following rules, applied in order
//! and re-applied after each peeling step, terminate in rule 1:
//!
//! 1. Both sequences empty: `true`.
//! 2. Different lengths, or equal leading elements: `false`.
//! 3. Leading element of the first not equal to the trailing element of the
//!    second: `false`.
//! 4. Otherwise recurse on the first sequence without its head and the
//!    second without its last element.
//!
//! The rules are preserved exactly as stated rather than replaced by a
//! closed-form reformulation; for inputs with repeated elements the two are
//! not obviously equivalent, and the step-by-step definition is the
//! authoritative one.
//!
//! # A note on the relation
//!
//! Rules 2 and 3 are jointly unsatisfiable for a pair of singletons: rule 2
//! rejects equal leading elements while rule 3 demands the lone element of
//! the first equal the lone element of the second. Since rule 4 peels one
//! element per step, every nonempty equal-length pair eventually reaches
//! that singleton pair (or fails earlier), so the relation holds only for
//! the empty pair. The predicate still evaluates the rules mechanically;
//! callers should not rely on the degenerate shortcut.

use crate::control::Trampoline;

/// Checks whether two slices are mirror-opposite, by direct recursion.
///
/// Recursion depth equals the slice length; for very long inputs prefer
/// [`is_opposite_stack_safe`], which evaluates the same rules without
/// consuming call-stack frames.
///
/// The inputs are only inspected by position, never mutated or retained.
///
/// # Examples
///
/// ```rust
/// use antipode::relation::is_opposite;
///
/// // The empty pair is the only pair in the relation.
/// assert!(is_opposite::<i32>(&[], &[]));
///
/// // Equal leading elements fail immediately.
/// assert!(!is_opposite(&[1, 2, 3], &[1, 2, 3]));
///
/// // A reversal fails once the peeling meets in the middle.
/// assert!(!is_opposite(&[1, 2, 3], &[3, 2, 1]));
///
/// // Length mismatch fails.
/// assert!(!is_opposite(&[1, 2], &[2, 1, 0]));
/// ```
pub fn is_opposite<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    if a.is_empty() && b.is_empty() {
        return true;
    }

    if a.len() != b.len() || a.first() == b.first() {
        return false;
    }

    if a.first() != b.last() {
        return false;
    }

    is_opposite(&a[1..], &b[..b.len() - 1])
}

/// Checks whether two slices are mirror-opposite, in constant stack space.
///
/// Evaluates exactly the same rules as [`is_opposite`], but each peeling
/// step is suspended on a [`Trampoline`] and interpreted in a loop, so the
/// input length does not bound the call stack.
///
/// Agrees with [`is_opposite`] on every input.
///
/// # Examples
///
/// ```rust
/// use antipode::relation::is_opposite_stack_safe;
///
/// assert!(is_opposite_stack_safe::<i32>(&[], &[]));
/// assert!(!is_opposite_stack_safe(&[1, 2, 3], &[3, 2, 1]));
///
/// // This pair survives every peeling step until the singletons; plain
/// // recursion at this length would overflow the stack.
/// let mut a = vec![0_u32; 1_000_000];
/// *a.last_mut().unwrap() = 1;
/// let b: Vec<u32> = a.iter().rev().copied().collect();
/// assert!(!is_opposite_stack_safe(&a, &b));
/// ```
pub fn is_opposite_stack_safe<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    opposite_step(a, b).run()
}

/// One peeling step of the relation, with the recursive case suspended.
fn opposite_step<'a, T: PartialEq>(a: &'a [T], b: &'a [T]) -> Trampoline<'a, bool> {
    if a.is_empty() && b.is_empty() {
        return Trampoline::done(true);
    }

    if a.len() != b.len() || a.first() == b.first() {
        return Trampoline::done(false);
    }

    if a.first() != b.last() {
        return Trampoline::done(false);
    }

    Trampoline::suspend(move || opposite_step(&a[1..], &b[..b.len() - 1]))
}

//! Stack-safe recursion via trampolining.
//!
//! Rust does not guarantee tail call optimization, so deeply recursive
//! functions can overflow the stack. A trampoline represents each recursive
//! step as data; an interpreter loop then drives the computation in constant
//! stack space.
//!
//! Unlike a `'static` trampoline, this one is generic over a lifetime so
//! that suspended steps may borrow from their environment. A predicate
//! recursing over `&'a [T]` can suspend closures that capture those slices
//! directly.
//!
//! # Examples
//!
//! ```rust
//! use antipode::control::Trampoline;
//!
//! fn all_distinct_from_head<'a>(items: &'a [i32]) -> Trampoline<'a, bool> {
//!     match items.split_first() {
//!         None => Trampoline::done(true),
//!         Some((head, rest)) if rest.contains(head) => Trampoline::done(false),
//!         Some((_, rest)) => Trampoline::suspend(move || all_distinct_from_head(rest)),
//!     }
//! }
//!
//! let items = vec![1, 2, 3, 4];
//! assert!(all_distinct_from_head(&items).run());
//! ```

/// A potentially recursive computation producing a value of type `A`.
///
/// Instead of using the call stack, each recursive step is encoded as a
/// suspended closure and interpreted in a loop by [`run`].
///
/// # Type Parameters
///
/// * `'a` - The lifetime of data the suspended steps may borrow.
/// * `A` - The type of the final result.
///
/// # Examples
///
/// ```rust
/// use antipode::control::Trampoline;
///
/// // Completed computation
/// assert_eq!(Trampoline::done(42).run(), 42);
///
/// // Suspended computation
/// assert_eq!(Trampoline::suspend(|| Trampoline::done(42)).run(), 42);
/// ```
///
/// [`run`]: Trampoline::run
pub enum Trampoline<'a, A> {
    /// The computation has completed with value `A`.
    Done(A),
    /// The computation is suspended and needs another step.
    ///
    /// The boxed function returns the next state of the trampoline.
    Suspend(Box<dyn FnOnce() -> Trampoline<'a, A> + 'a>),
}

impl<'a, A> Trampoline<'a, A> {
    /// Creates a completed trampoline with the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use antipode::control::Trampoline;
    ///
    /// let trampoline = Trampoline::done(42);
    /// assert_eq!(trampoline.run(), 42);
    /// ```
    #[inline]
    pub const fn done(value: A) -> Self {
        Self::Done(value)
    }

    /// Creates a suspended trampoline that will continue with the given thunk.
    ///
    /// The thunk is not evaluated until [`run`] or [`resume`] is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use antipode::control::Trampoline;
    ///
    /// let trampoline = Trampoline::suspend(|| Trampoline::done(42));
    /// assert_eq!(trampoline.run(), 42);
    /// ```
    ///
    /// [`run`]: Trampoline::run
    /// [`resume`]: Trampoline::resume
    #[inline]
    pub fn suspend<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Trampoline<'a, A> + 'a,
    {
        Self::Suspend(Box::new(thunk))
    }

    /// Runs the trampoline to completion and returns the final value.
    ///
    /// Evaluation is a loop over the suspended steps and uses constant
    /// stack space regardless of depth.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use antipode::control::Trampoline;
    ///
    /// fn count_down(n: u64) -> Trampoline<'static, u64> {
    ///     if n == 0 {
    ///         Trampoline::done(0)
    ///     } else {
    ///         Trampoline::suspend(move || count_down(n - 1))
    ///     }
    /// }
    ///
    /// assert_eq!(count_down(100_000).run(), 0);
    /// ```
    pub fn run(self) -> A {
        let mut current = self;

        loop {
            match current {
                Self::Done(value) => return value,
                Self::Suspend(thunk) => current = thunk(),
            }
        }
    }

    /// Takes one step of the computation.
    ///
    /// Returns `Ok(value)` if the computation is complete, or `Err(next)`
    /// with the remaining trampoline if there is more work to do.
    ///
    /// # Errors
    ///
    /// The `Err` variant is not a failure; it carries the rest of the
    /// computation for step-by-step evaluation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use antipode::control::Trampoline;
    ///
    /// let trampoline = Trampoline::suspend(|| Trampoline::done(42));
    ///
    /// match trampoline.resume() {
    ///     Err(next) => assert_eq!(next.run(), 42),
    ///     Ok(_) => unreachable!("one suspension remains"),
    /// }
    /// ```
    #[inline]
    pub fn resume(self) -> Result<A, Self> {
        match self {
            Self::Done(value) => Ok(value),
            Self::Suspend(thunk) => Err(thunk()),
        }
    }
}

impl<A> std::fmt::Debug for Trampoline<'_, A>
where
    A: std::fmt::Debug,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Done(value) => formatter.debug_tuple("Done").field(value).finish(),
            Self::Suspend(_) => formatter.write_str("Suspend(..)"),
        }
    }
}

//! Unit tests for the Trampoline type.
//!
//! Tests cover:
//! - Basic construction (done, suspend)
//! - Nested suspensions
//! - Stack safety with deep suspension chains
//! - resume for step-by-step evaluation
//! - Borrowing suspended steps (the lifetime-generic case)

use antipode::control::Trampoline;
use rstest::rstest;

// =============================================================================
// Basic Construction
// =============================================================================

#[rstest]
fn done_returns_value() {
    let trampoline = Trampoline::done(42);
    assert_eq!(trampoline.run(), 42);
}

#[rstest]
fn done_with_string() {
    let trampoline = Trampoline::done("hello".to_string());
    assert_eq!(trampoline.run(), "hello");
}

#[rstest]
fn suspend_delays_computation() {
    let trampoline = Trampoline::suspend(|| Trampoline::done(42));
    assert_eq!(trampoline.run(), 42);
}

#[rstest]
fn nested_suspend() {
    let trampoline = Trampoline::suspend(|| {
        Trampoline::suspend(|| Trampoline::suspend(|| Trampoline::done(42)))
    });
    assert_eq!(trampoline.run(), 42);
}

#[rstest]
fn suspended_thunk_is_not_evaluated_until_run() {
    use std::cell::Cell;

    let evaluated = Cell::new(false);
    let trampoline = Trampoline::suspend(|| {
        evaluated.set(true);
        Trampoline::done(())
    });

    assert!(!evaluated.get());
    trampoline.run();
    assert!(evaluated.get());
}

// =============================================================================
// Deep Recursion (Stack Safety)
// =============================================================================

fn count_down(n: u64) -> Trampoline<'static, u64> {
    if n == 0 {
        Trampoline::done(0)
    } else {
        Trampoline::suspend(move || count_down(n - 1))
    }
}

#[rstest]
fn deep_suspension_chain_runs_in_constant_stack() {
    // This depth would overflow the stack with plain recursion.
    assert_eq!(count_down(5_000_000).run(), 0);
}

fn factorial(n: u64, accumulator: u64) -> Trampoline<'static, u64> {
    if n <= 1 {
        Trampoline::done(accumulator)
    } else {
        Trampoline::suspend(move || factorial(n - 1, n * accumulator))
    }
}

#[rstest]
#[case(0, 1)]
#[case(1, 1)]
#[case(5, 120)]
#[case(10, 3_628_800)]
#[case(20, 2_432_902_008_176_640_000)]
fn trampolined_factorial(#[case] input: u64, #[case] expected: u64) {
    assert_eq!(factorial(input, 1).run(), expected);
}

// =============================================================================
// Step-by-Step Evaluation
// =============================================================================

#[rstest]
fn resume_on_done_yields_the_value() {
    let trampoline = Trampoline::done(7);
    assert!(matches!(trampoline.resume(), Ok(7)));
}

#[rstest]
fn resume_on_suspend_yields_the_next_state() {
    let trampoline = Trampoline::suspend(|| Trampoline::done(7));
    match trampoline.resume() {
        Err(next) => assert_eq!(next.run(), 7),
        Ok(_) => unreachable!("one suspension remains"),
    }
}

#[rstest]
fn resume_steps_through_a_chain() {
    let mut current = count_down(3);
    let mut steps = 0;

    let result = loop {
        match current.resume() {
            Ok(value) => break value,
            Err(next) => {
                steps += 1;
                current = next;
            }
        }
    };

    assert_eq!(result, 0);
    assert_eq!(steps, 3);
}

// =============================================================================
// Borrowing Suspensions
// =============================================================================

fn sum_by_peeling<'a>(items: &'a [u64], accumulator: u64) -> Trampoline<'a, u64> {
    match items.split_first() {
        None => Trampoline::done(accumulator),
        Some((head, rest)) => {
            let total = accumulator + head;
            Trampoline::suspend(move || sum_by_peeling(rest, total))
        }
    }
}

#[rstest]
fn suspended_steps_may_borrow_their_input() {
    let items: Vec<u64> = (1..=100).collect();
    assert_eq!(sum_by_peeling(&items, 0).run(), 5050);
}

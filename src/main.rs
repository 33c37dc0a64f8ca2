//! Evaluates the mirror-opposite predicate on one fixed pair of sequences
//! and prints the boolean result.

use antipode::relation::is_opposite;

fn main() {
    println!("{}", is_opposite(&[1, 2, 3], &[3, 2, 1]));
}

//! Pattern 5: Eager Sequence Algorithms
//! Example: Left-Associative Folds
//!
//! Run with: cargo run --bin p6_accumulate

use closure_iteration_patterns::algo::fold_left;

fn main() {
    println!("=== Folding a Sequence ===\n");

    let nums = vec![1, 5, 2, 9];
    let sum = fold_left(&nums, 0, |acc, &x| acc + x);
    let product = fold_left(&nums, 1, |acc, &x| acc * x);
    println!("sum = {}", sum);
    println!("product = {}", product);
    assert_eq!(sum, 17);
    assert_eq!(product, 90);

    println!("\n=== Association Order Matters ===");
    // calculates ((((6 - 1) - 5) - 2) - 9) = -11
    let sub = fold_left(&nums, 6, |acc, &x| acc - x);
    println!("sub = {}", sub);
    assert_eq!(sub, -11);

    // The standard adapter folds the same way.
    let via_iter = nums.iter().fold(6, |acc, &x| acc - x);
    assert_eq!(via_iter, sub);

    println!("\n=== Key Points ===");
    println!("1. A fold collapses a sequence with an initial value and a combiner");
    println!("2. Combination runs left to right: combine(combine(init, a0), a1)...");
    println!("3. Non-commutative combiners expose the association order");
}

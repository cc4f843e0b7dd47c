//! Pattern 5: Eager Sequence Algorithms
//! Example: Mutating Every Element In Place
//!
//! Run with: cargo run --bin p6_for_each

use closure_iteration_patterns::algo::{for_each_mut, print_all};

fn main() {
    println!("=== Mutating For-Each ===\n");

    let mut nums = vec![1, 2, 3];
    for_each_mut(&mut nums, |x| *x += 1);
    println!("elements of nums:");
    print_all(&nums);
    assert_eq!(nums, vec![2, 3, 4]);

    // `iter_mut` is the same idea without the helper.
    println!("\n=== Via iter_mut ===");
    for x in nums.iter_mut() {
        *x *= 10;
    }
    print_all(&nums);
    assert_eq!(nums, vec![20, 30, 40]);

    println!("\n=== Key Points ===");
    println!("1. The operation receives `&mut` to each element");
    println!("2. No new sequence is produced; the input changes in place");
    println!("3. The caller sees the mutations immediately afterwards");
}

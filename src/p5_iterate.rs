//! Pattern 4: Generic Iteration
//! Example: One Traversal Routine, Three Containers
//!
//! Run with: cargo run --bin p5_iterate

use std::collections::{BTreeSet, VecDeque};

use closure_iteration_patterns::algo::print_all;

fn main() {
    println!("=== Generic Iteration ===\n");

    let num_vector = vec![1, 2, 3];
    let num_deque: VecDeque<i32> = VecDeque::from(vec![4, 5, 6]);
    let num_set: BTreeSet<i32> = [9, 7, 8].into_iter().collect();

    // The same routine handles each container; `IntoIterator` is the only
    // capability it asks for.
    println!("vector:");
    print_all(&num_vector);
    println!("deque:");
    print_all(&num_deque);
    println!("set (sorted, unique):");
    print_all(&num_set);

    // Traversal order is the container's own: insertion order for the
    // sequence types, ascending order for the sorted set.
    let in_order: Vec<i32> = num_set.iter().copied().collect();
    assert_eq!(in_order, vec![7, 8, 9]);

    println!("\n=== Key Points ===");
    println!("1. `IntoIterator` is the begin/advance/end abstraction");
    println!("2. One generic function replaces per-container overloads");
    println!("3. Each container decides its own traversal order");
}

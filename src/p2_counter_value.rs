//! Pattern 1: Value Capture
//! Example: A Counter That Owns Its State
//!
//! Run with: cargo run --bin p2_counter_value

use closure_iteration_patterns::capture::make_counter;

fn main() {
    println!("=== Counter With Owned State ===\n");

    let x = 0;
    // `move` copies `x` into the closure; the closure mutates its own copy.
    let mut counter = {
        let mut count = x;
        move || {
            count += 1;
            count
        }
    };

    println!("counter() = {}", counter()); // 1
    println!("counter() = {}", counter()); // 2
    println!("x is still {}", x);
    assert_eq!(x, 0);

    println!("\n=== Cloning Duplicates the State ===");
    let mut counter = make_counter(0);
    println!("counter() = {}", counter()); // 1

    // Both clones snapshot the count at 1 and advance independently.
    let mut counter1 = counter.clone();
    let mut counter2 = counter.clone();
    println!("counter1() = {}", counter1()); // 2
    println!("counter1() = {}", counter1()); // 3
    println!("counter2() = {}", counter2()); // 2
    println!("counter2() = {}", counter2()); // 3

    let a = counter1();
    let b = counter2();
    assert_eq!((a, b), (4, 4)); // never (4, 5): the clones do not share state

    println!("\n=== Key Points ===");
    println!("1. A `move` closure owns a private copy of what it captured");
    println!("2. The enclosing variable is never touched");
    println!("3. Cloning copies the state at that moment; clones then diverge");
}

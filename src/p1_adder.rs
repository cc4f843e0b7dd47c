//! Pattern 1: Value Capture
//! Example: An Adder Factory
//!
//! Run with: cargo run --bin p1_adder

use closure_iteration_patterns::capture::make_adder;

fn main() {
    println!("=== Adder Factory ===\n");

    // Each call snapshots its own `x`; the returned closures never interfere.
    let add_by_5 = make_adder(5);
    let add_by_3 = make_adder(3);

    println!("add_by_5(3) = {}", add_by_5(3));
    println!("add_by_3(3) = {}", add_by_3(3));
    assert_eq!(add_by_5(3), 8);
    assert_eq!(add_by_3(3), 6);

    // Call order does not matter: the captured values are fixed at creation.
    println!("\n=== Independent Instances ===");
    assert_eq!(add_by_3(10), 13);
    assert_eq!(add_by_5(10), 15);
    println!("add_by_3(10) = {}", add_by_3(10));
    println!("add_by_5(10) = {}", add_by_5(10));

    // The same factory works inline, without the library helper.
    println!("\n=== Inline Form ===");
    let adder = |x: i32| move |y: i32| x + y;
    let add_by_100 = adder(100);
    println!("adder(100)(1) = {}", add_by_100(1));
    assert_eq!(add_by_100(1), 101);

    println!("\n=== Key Points ===");
    println!("1. `move` copies the captured value into the closure");
    println!("2. Every factory call produces an independent instance");
    println!("3. A closure returning a closure is an ordinary value");
}

//! Pattern 7: Mutation Through References
//! Example: Incrementing Caller-Owned Storage
//!
//! Run with: cargo run --bin p8_increment

/// Adds one to the integer behind the reference. The caller owns the
/// storage; the function only borrows it for the call.
fn increment(x: &mut i32) {
    *x += 1;
}

fn main() {
    println!("=== Increment Through &mut ===\n");

    let mut x = 0;
    increment(&mut x);
    println!("{}", x); // prints 1
    increment(&mut x);
    println!("{}", x); // prints 2
    assert_eq!(x, 2);

    println!("\n=== Key Points ===");
    println!("1. `&mut` passes the storage location, not a copy of the value");
    println!("2. Each call's effect is visible to the caller immediately");
    println!("3. The borrow ends at the call, so calls can repeat freely");
}

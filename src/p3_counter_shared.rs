//! Pattern 2: Reference Capture
//! Example: Counters That Share One Storage Slot
//!
//! Run with: cargo run --bin p3_counter_shared

use closure_iteration_patterns::capture::shared_counter;

fn main() {
    println!("=== Counter Borrowing the Enclosing Variable ===\n");

    let mut x = 0;
    {
        // The closure holds a mutable borrow of `x` for its whole lifetime.
        let mut counter = || {
            x += 1;
            println!("{}", x);
        };
        for _ in 0..3 {
            counter();
        }
    }
    // The borrow ended with the closure, and the mutations stuck.
    println!("x after the loop = {}", x);
    assert_eq!(x, 3);

    println!("\n=== Shared Storage Across Instances ===");
    // The borrow checker allows only one live `&mut` closure at a time, so
    // sharing one counter between several closures goes through Rc<RefCell>.
    let (slot, tick) = shared_counter();
    let tick2 = tick.clone();
    println!("tick()  = {}", tick()); // 1
    println!("tick2() = {}", tick2()); // 2
    println!("tick()  = {}", tick()); // 3
    assert_eq!(*slot.borrow(), 3);
    println!("slot = {}", slot.borrow());

    println!("\n=== Captured Variables Are Read Late ===");
    let flag = std::cell::Cell::new(true);
    let pick = || if flag.get() { 1 } else { 4 };
    println!("pick() = {}", pick()); // 1
    flag.set(false);
    println!("pick() = {}", pick()); // 4
    assert_eq!(pick(), 4);

    println!("\n=== Key Points ===");
    println!("1. A borrowing closure mutates the original variable directly");
    println!("2. Rc<RefCell> gives many closures one aliased storage slot");
    println!("3. Reference captures see changes made between calls");
}

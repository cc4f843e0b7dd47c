//! Pattern 6: Lazy Views
//! Example: Filter and Map Without Materializing
//!
//! Run with: cargo run --bin p7_views

use closure_iteration_patterns::views::{filter_view, map_view};

fn main() {
    println!("=== Lazy Filter View ===\n");

    let nums = vec![1, 2, 3, 4, 5];
    for i in filter_view(&nums, |&x| x % 2 == 0) {
        println!("{}", i);
    }

    println!("\n=== Lazy Map View ===");
    let nums = vec![1, 2, 3];
    for i in map_view(&nums, |&x| 2 * x) {
        println!("{}", i);
    }

    println!("\n=== The View Computes on Demand ===");
    let mut pulled = 0;
    let mut doubled = map_view(&nums, |&x| {
        pulled += 1;
        2 * x
    });
    println!("view created, nothing computed yet");
    println!("first element:  {:?}", doubled.next());
    println!("second element: {:?}", doubled.next());
    drop(doubled);
    // Only the two pulled elements were transformed.
    assert_eq!(pulled, 2);
    println!("transform ran {} times", pulled);

    println!("\n=== Composing a Pipeline ===");
    let big_doubles: Vec<i32> = filter_view(&nums, |&x| x >= 2)
        .map(|&x| 2 * x)
        .collect();
    println!("{:?}", big_doubles);
    assert_eq!(big_doubles, vec![4, 6]);

    println!("\n=== Key Points ===");
    println!("1. A view borrows the source; no output container is built");
    println!("2. Each element is computed once, when it is pulled");
    println!("3. A consumed view is done; recreate it to traverse again");
}

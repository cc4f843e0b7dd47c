//! Pattern 5: Eager Sequence Algorithms
//! Example: Transforming Into Preallocated Buffers
//!
//! Run with: cargo run --bin p6_transform

use itertools::Itertools;

use closure_iteration_patterns::algo::{combine_into, map_into, print_all, SizeMismatch};

fn main() -> Result<(), SizeMismatch> {
    println!("=== Transform Into a Buffer ===\n");

    let nums = vec![1, 2, 3];
    let mut doublenums = vec![0; nums.len()];
    map_into(&nums, &mut doublenums, |&x| 2 * x)?;
    println!("elements of doublenums:");
    print_all(&doublenums);
    assert_eq!(doublenums, vec![2, 4, 6]);

    println!("\n=== Element-Wise Combine ===");
    let mut triplenums = vec![0; nums.len()];
    combine_into(&nums, &doublenums, &mut triplenums, |&x, &y| x + y)?;
    println!("elements of triplenums:");
    print_all(&triplenums);
    assert_eq!(triplenums, vec![3, 6, 9]);

    println!("\n=== Undersized Buffers Are Rejected ===");
    let mut too_small = vec![0; 2];
    let err = map_into(&nums, &mut too_small, |&x| x).unwrap_err();
    println!("error: {}", err);
    assert_eq!(err, SizeMismatch { needed: 3, dst: 2 });

    println!("\n=== Summary ===");
    println!(
        "{} -> doubled {} -> combined {}",
        nums.iter().join(","),
        doublenums.iter().join(","),
        triplenums.iter().join(",")
    );

    println!("\n=== Key Points ===");
    println!("1. The caller sizes the destination; the algorithm fills it");
    println!("2. The binary form pairs two equal-length inputs by index");
    println!("3. A short destination is a contract violation, reported once");
    Ok(())
}

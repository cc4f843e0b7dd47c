//! Pattern 5: Eager Sequence Algorithms
//! Example: Stable Filtering With a Written-Count Result
//!
//! Run with: cargo run --bin p6_copy_if

use closure_iteration_patterns::algo::{copy_if_into, print_all, SizeMismatch};

fn main() -> Result<(), SizeMismatch> {
    println!("=== Filter Into a Buffer ===\n");

    let num = vec![1, -4, 4, 7, -2];
    // Worst case keeps everything, so both buffers get the full length.
    let mut positive = vec![0; num.len()];
    let mut even = vec![0; num.len()];

    let end_positive = copy_if_into(&num, &mut positive, |&x| x > 0)?;
    let end_even = copy_if_into(&num, &mut even, |&x| x % 2 == 0)?;

    println!("positive:");
    print_all(&positive[..end_positive]);
    println!("even:");
    print_all(&even[..end_even]);

    // Relative order is preserved; only the count tells the output apart
    // from the leftover tail of the buffer.
    assert_eq!(&positive[..end_positive], &[1, 4, 7]);
    assert_eq!(&even[..end_even], &[-4, 4, -2]);

    println!("\n=== Key Points ===");
    println!("1. Filtering never reorders the kept elements");
    println!("2. The returned count marks the end of valid output");
    println!("3. Slicing with the count hides the unused tail");
    Ok(())
}

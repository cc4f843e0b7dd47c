//! Pattern 3: Function Objects
//! Example: A Multiplier Struct Interchangeable With a Closure
//!
//! Run with: cargo run --bin p4_multiplier

/// A callable with a fixed factor: equivalent capability to a closure that
/// captured the factor by value, but spelled as a named type.
struct MultiplyBy {
    factor: i32,
}

impl MultiplyBy {
    fn new(factor: i32) -> Self {
        MultiplyBy { factor }
    }

    fn apply(&self, arg: i32) -> i32 {
        self.factor * arg
    }
}

/// Any value with the `Fn(i32) -> i32` capability fits here; no hierarchy,
/// just the call signature.
fn apply_twice(f: impl Fn(i32) -> i32, start: i32) -> i32 {
    f(f(start))
}

fn main() {
    println!("=== Function Object ===\n");

    let mult_by_3 = MultiplyBy::new(3);
    println!("mult_by_3.apply(5) = {}", mult_by_3.apply(5));
    assert_eq!(mult_by_3.apply(5), 15);

    println!("\n=== Interchangeable With a Closure ===");
    let factor = 3;
    let closure_mult_by_3 = move |arg: i32| factor * arg;
    assert_eq!(mult_by_3.apply(7), closure_mult_by_3(7));
    println!("both forms map 7 to {}", closure_mult_by_3(7));

    // Both satisfy the same single-method capability.
    let via_struct = apply_twice(|n| mult_by_3.apply(n), 2);
    let via_closure = apply_twice(closure_mult_by_3, 2);
    println!("apply_twice with struct:  {}", via_struct);
    println!("apply_twice with closure: {}", via_closure);
    assert_eq!(via_struct, 18);
    assert_eq!(via_closure, 18);

    println!("\n=== Key Points ===");
    println!("1. A struct with stored state plus a call method is a closure spelled out");
    println!("2. Construction fixes the state once, like capture at creation");
    println!("3. Generic `impl Fn` seams accept either form");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_applies_its_factor() {
        assert_eq!(MultiplyBy::new(3).apply(5), 15);
        assert_eq!(MultiplyBy::new(-2).apply(4), -8);
    }

    #[test]
    fn struct_and_closure_are_interchangeable() {
        let m = MultiplyBy::new(4);
        assert_eq!(apply_twice(|n| m.apply(n), 1), 16);
        assert_eq!(apply_twice(|n| 4 * n, 1), 16);
    }
}

//! # Closure & Iteration Patterns
//!
//! This crate contains examples for closures, function objects, generic
//! iteration, eager sequence algorithms, and lazy views.
//!
//! ## Patterns Covered
//!
//! 1. **Value Capture**
//!    - Closures that snapshot their environment (adder factory)
//!    - Mutable state owned by the closure, duplicated on clone
//!
//! 2. **Reference Capture**
//!    - A closure mutating the enclosing variable through a borrow
//!    - Shared mutable state across closure instances with `Rc<RefCell>`
//!
//! 3. **Function Objects**
//!    - A named type with stored state, usable wherever a closure is
//!
//! 4. **Generic Iteration**
//!    - One traversal routine over `Vec`, `VecDeque`, and `BTreeSet`
//!
//! 5. **Eager Sequence Algorithms**
//!    - `map_into` and `combine_into` with caller-provided buffers
//!    - `copy_if_into` stable filtering with a written-count result
//!    - `fold_left` left-associative reduction
//!    - `for_each_mut` in-place mutation
//!
//! 6. **Lazy Views**
//!    - Hand-written `FilterView` and `MapView` iterator adapters
//!
//! 7. **Mutation Through References**
//!    - Incrementing caller-owned storage via `&mut`
//!
//! ## Running Examples
//!
//! ```bash
//! # Pattern 1: Value Capture
//! cargo run --bin p1_adder
//! cargo run --bin p2_counter_value
//!
//! # Pattern 2: Reference Capture
//! cargo run --bin p3_counter_shared
//!
//! # Pattern 3: Function Objects
//! cargo run --bin p4_multiplier
//!
//! # Pattern 4: Generic Iteration
//! cargo run --bin p5_iterate
//!
//! # Pattern 5: Eager Sequence Algorithms
//! cargo run --bin p6_transform
//! cargo run --bin p6_copy_if
//! cargo run --bin p6_accumulate
//! cargo run --bin p6_for_each
//!
//! # Pattern 6: Lazy Views
//! cargo run --bin p7_views
//!
//! # Pattern 7: Mutation Through References
//! cargo run --bin p8_increment
//! ```

pub mod algo;
pub mod capture;
pub mod views;

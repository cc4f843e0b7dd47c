//! Closure constructors contrasting value capture with reference capture.
//!
//! A value-capturing closure snapshots its environment at creation time and
//! owns the copy; separately created (or cloned) instances never interfere.
//! A reference-capturing closure holds a handle to shared storage, so every
//! instance built from the same handle observes the same mutations.

use std::cell::RefCell;
use std::rc::Rc;

/// Returns a closure that adds `x` to its argument.
/// `x` is copied into the closure when `make_adder` runs, so later instances
/// with different `x` are fully independent.
pub fn make_adder(x: i32) -> impl Fn(i32) -> i32 {
    move |y| x + y
}

/// Returns a counter closure that owns its count, starting from `start`.
/// Each call bumps the private copy and returns it. Cloning the closure
/// duplicates the count at the point of the clone; the original and the
/// clone diverge from there.
pub fn make_counter(start: i32) -> impl FnMut() -> i32 + Clone {
    let mut count = start;
    move || {
        count += 1;
        count
    }
}

/// A counter whose storage is shared across every closure built from it.
/// The handle aliases one slot, so all instances observe the same mutations.
pub fn shared_counter() -> (Rc<RefCell<i32>>, impl Fn() -> i32 + Clone) {
    let slot = Rc::new(RefCell::new(0));
    let handle = Rc::clone(&slot);
    let tick = move || {
        let mut count = handle.borrow_mut();
        *count += 1;
        *count
    };
    (slot, tick)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adders_are_independent() {
        let add_by_5 = make_adder(5);
        let add_by_3 = make_adder(3);
        assert_eq!(add_by_5(3), 8);
        assert_eq!(add_by_3(3), 6);
        // Call order does not matter.
        assert_eq!(add_by_3(3), 6);
        assert_eq!(add_by_5(3), 8);
    }

    #[test]
    fn counter_owns_its_state() {
        let mut counter = make_counter(0);
        assert_eq!(counter(), 1);
        assert_eq!(counter(), 2);
    }

    #[test]
    fn cloned_counters_diverge() {
        let mut counter = make_counter(0);
        assert_eq!(counter(), 1);

        // Both clones snapshot the count at 1, then advance on their own.
        let mut counter1 = counter.clone();
        let mut counter2 = counter.clone();
        assert_eq!(counter1(), 2);
        assert_eq!(counter1(), 3);
        assert_eq!(counter2(), 2);
        assert_eq!(counter2(), 3);

        // The original is untouched by its clones.
        assert_eq!(counter(), 2);
    }

    #[test]
    fn shared_counter_aliases_one_slot() {
        let (slot, tick) = shared_counter();
        let tick2 = tick.clone();
        assert_eq!(tick(), 1);
        assert_eq!(tick2(), 2);
        assert_eq!(tick(), 3);
        assert_eq!(*slot.borrow(), 3);
    }
}

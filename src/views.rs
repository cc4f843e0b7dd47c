//! Lazy filter and map views over borrowed slices.
//!
//! A view wraps the source without copying it; the predicate or transform
//! runs only when the next element is pulled. A view is consumed by
//! traversal and restarted by creating a new one from the source.

/// Lazily yields references to the elements of a slice that satisfy `pred`.
pub struct FilterView<'a, T, P> {
    items: &'a [T],
    pos: usize,
    pred: P,
}

/// Builds a [`FilterView`] over `items`. Nothing is evaluated until the
/// view is iterated.
pub fn filter_view<T, P>(items: &[T], pred: P) -> FilterView<'_, T, P>
where
    P: FnMut(&T) -> bool,
{
    FilterView { items, pos: 0, pred }
}

impl<'a, T, P> Iterator for FilterView<'a, T, P>
where
    P: FnMut(&T) -> bool,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.items.len() {
            let item = &self.items[self.pos];
            self.pos += 1;
            if (self.pred)(item) {
                return Some(item);
            }
        }
        None
    }
}

/// Lazily yields `transform(item)` for each element of a slice.
pub struct MapView<'a, T, F> {
    items: &'a [T],
    pos: usize,
    transform: F,
}

/// Builds a [`MapView`] over `items`. The transform runs once per element,
/// at the moment the element is pulled.
pub fn map_view<T, U, F>(items: &[T], transform: F) -> MapView<'_, T, F>
where
    F: FnMut(&T) -> U,
{
    MapView { items, pos: 0, transform }
}

impl<'a, T, U, F> Iterator for MapView<'a, T, F>
where
    F: FnMut(&'a T) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos < self.items.len() {
            let item = &self.items[self.pos];
            self.pos += 1;
            Some((self.transform)(item))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn filter_view_yields_matching_elements_in_order() {
        let nums = [1, 2, 3, 4, 5];
        let even: Vec<i32> = filter_view(&nums, |&x| x % 2 == 0).copied().collect();
        assert_eq!(even, vec![2, 4]);
    }

    #[test]
    fn map_view_transforms_on_demand() {
        let nums = [1, 2, 3];
        let calls = Cell::new(0);
        let mut doubled = map_view(&nums, |&x| {
            calls.set(calls.get() + 1);
            2 * x
        });

        // Creating the view computed nothing.
        assert_eq!(calls.get(), 0);
        assert_eq!(doubled.next(), Some(2));
        assert_eq!(calls.get(), 1);
        assert_eq!(doubled.next(), Some(4));
        assert_eq!(doubled.next(), Some(6));
        assert_eq!(doubled.next(), None);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn views_compose_into_pipelines() {
        let nums = [1, 2, 3, 4, 5, 6];
        let squares_of_even: Vec<i32> = filter_view(&nums, |&x| x % 2 == 0)
            .map(|&x| x * x)
            .collect();
        assert_eq!(squares_of_even, vec![4, 16, 36]);
    }

    #[test]
    fn view_is_exhausted_after_one_traversal() {
        let nums = [1, 2, 3];
        let mut view = map_view(&nums, |&x| x + 1);
        assert_eq!(view.by_ref().count(), 3);
        assert_eq!(view.next(), None);

        // Restarting means recreating the view from the source.
        let restarted: Vec<i32> = map_view(&nums, |&x| x + 1).collect();
        assert_eq!(restarted, vec![2, 3, 4]);
    }
}

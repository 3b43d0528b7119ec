//! Property-based tests for the comparator-parameterized binary heap.

use aoc_search::BinaryHeap;
use proptest::prelude::*;

fn drain<F: Fn(&i64, &i64) -> bool>(mut heap: BinaryHeap<i64, F>) -> Vec<i64> {
    let mut drained = Vec::new();
    while let Some(value) = heap.remove_root() {
        drained.push(value);
    }
    drained
}

proptest! {
    /// *For any* sequence of inserts, draining through `remove_root` yields
    /// the elements in the comparator's order.
    #[test]
    fn prop_drain_is_sorted(values in prop::collection::vec(any::<i64>(), 0..200)) {
        let mut heap = BinaryHeap::new(|a: &i64, b: &i64| a < b);
        for &value in &values {
            heap.insert(value);
        }
        let drained = drain(heap);
        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(drained, expected);
    }

    /// *For any* sequence of inserts with a reversed comparator, draining
    /// yields non-increasing order (max-heap behavior).
    #[test]
    fn prop_reversed_comparator_is_a_max_heap(values in prop::collection::vec(any::<i64>(), 1..100)) {
        let mut heap = BinaryHeap::new(|a: &i64, b: &i64| a > b);
        for &value in &values {
            heap.insert(value);
        }
        let drained = drain(heap);
        prop_assert!(drained.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    /// *For any* interleaving of inserts and root removals, `peek` always
    /// reports the minimum element still present.
    #[test]
    fn prop_peek_is_always_the_minimum(
        values in prop::collection::vec(any::<i32>(), 1..100),
        pop_every in 2usize..5,
    ) {
        let mut heap = BinaryHeap::new(|a: &i32, b: &i32| a < b);
        let mut mirror: Vec<i32> = Vec::new();
        for (i, &value) in values.iter().enumerate() {
            heap.insert(value);
            mirror.push(value);
            if i % pop_every == 0 {
                let popped = heap.remove_root();
                prop_assert_eq!(popped, Some(*mirror.iter().min().unwrap()));
                let index = mirror.iter().position(|&v| Some(v) == popped).unwrap();
                mirror.swap_remove(index);
            }
            prop_assert_eq!(heap.peek(), mirror.iter().min());
            prop_assert_eq!(heap.len(), mirror.len());
        }
    }

    /// *For any* sequence of removals at arbitrary valid indices, the removed
    /// and drained elements together are the inserted multiset and the drain
    /// stays sorted.
    #[test]
    fn prop_remove_at_index_preserves_the_invariant(
        values in prop::collection::vec(any::<i64>(), 1..100),
        seed in any::<u64>(),
    ) {
        let mut heap = BinaryHeap::new(|a: &i64, b: &i64| a < b);
        for &value in &values {
            heap.insert(value);
        }

        // Pseudo-random valid indices from the seed.
        let mut removed = Vec::new();
        let mut state = seed;
        for _ in 0..values.len() / 3 {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let index = (state % heap.len() as u64) as usize;
            removed.push(heap.remove(index));
        }

        let drained = drain(heap);
        prop_assert!(drained.windows(2).all(|pair| pair[0] <= pair[1]));

        let mut all = drained;
        all.extend(removed);
        all.sort_unstable();
        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(all, expected);
    }
}

#[cfg(test)]
mod unit_tests {
    use aoc_search::BinaryHeap;

    #[test]
    fn remove_root_then_reuse() {
        let mut heap = BinaryHeap::with_capacity(4, |a: &u32, b: &u32| a < b);
        heap.insert(2);
        heap.insert(1);
        assert_eq!(heap.remove_root(), Some(1));
        heap.insert(0);
        assert_eq!(heap.peek(), Some(&0));
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn remove_at_root_index_equals_remove_root() {
        let mut heap = BinaryHeap::new(|a: &u32, b: &u32| a < b);
        for value in [4, 2, 7] {
            heap.insert(value);
        }
        assert_eq!(heap.remove(0), 2);
        assert_eq!(heap.remove_root(), Some(4));
    }
}

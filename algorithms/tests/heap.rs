use algos::data_structures::heap::{heapify_slice_to_index, is_heap_slice};
use algos::invariant::{HeapOrdered, Invariant};
use algos::{by_key, HeapError, IndexedHeap, NaturalOrder, Polarity, Reversed};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn min_heap(elements: &[i32]) -> IndexedHeap<i32> {
    let heap = IndexedHeap::new(Polarity::Min, elements.to_vec());
    assert!(heap.is_valid_heap(), "heap property violated: {:?}", heap.as_slice());
    heap
}

fn drain<T, C: algos::Comparator<T>>(mut heap: IndexedHeap<T, C>) -> Vec<T> {
    let mut out = Vec::with_capacity(heap.len());
    while let Some(x) = heap.pop() {
        out.push(x);
    }
    out
}

#[test]
fn empty_heap_is_valid() {
    let heap = min_heap(&[]);
    assert!(heap.is_empty());
    assert_eq!(heap.as_slice(), &[] as &[i32]);
    assert_eq!(heap.peek(), None);
}

#[test]
fn heapify_layouts_match_sift_down_order() {
    let cases: &[(&[i32], &[i32])] = &[
        (&[10], &[10]),
        (&[10, 5], &[5, 10]),
        (&[10, 15, 20, 5], &[5, 10, 20, 15]),
        (&[5, 10, 20, 15], &[5, 10, 20, 15]),
        (&[0, -5, 10, -10], &[-10, -5, 10, 0]),
        (&[10, 10, 5, 5], &[5, 10, 5, 10]),
        (&[-10, -20, -5, -15], &[-20, -15, -5, -10]),
        (&[50, 40, 30, 20, 10, 5, 15], &[5, 10, 15, 20, 40, 30, 50]),
    ];
    for (input, expected) in cases {
        let heap = min_heap(input);
        assert_eq!(heap.as_slice(), *expected, "heapify({:?})", input);
    }
}

#[test]
fn max_heap_puts_largest_at_root() {
    let heap = IndexedHeap::new(Polarity::Max, vec![10, 15, 20, 5]);
    assert!(heap.is_valid_heap());
    assert_eq!(heap.as_slice(), &[20, 15, 10, 5]);
    assert_eq!(heap.polarity(), Polarity::Max);
}

#[test]
fn insert_bubbles_up() {
    let mut heap = min_heap(&[]);
    heap.insert(10);
    heap.insert(5);
    heap.insert(20);
    assert_eq!(heap.as_slice(), &[5, 10, 20]);

    let mut heap = min_heap(&[5, 10, 20]);
    heap.insert(15);
    assert_eq!(heap.as_slice(), &[5, 10, 20, 15]);
    heap.insert(1);
    assert_eq!(heap.as_slice(), &[1, 5, 20, 15, 10]);
    assert!(heap.is_valid_heap());
}

#[test]
fn insert_moves_equal_keys_above_their_parent() {
    let cmp = by_key(|x: &(i32, char)| x.0);
    let mut heap = IndexedHeap::with_comparator(Polarity::Min, vec![(1, 'a')], cmp);
    heap.insert((1, 'b'));
    assert_eq!(heap.as_slice(), &[(1, 'b'), (1, 'a')]);

    heap.insert((2, 'c'));
    assert_eq!(heap.as_slice(), &[(1, 'b'), (1, 'a'), (2, 'c')]);
}

#[test]
fn delete_out_of_range_is_a_no_op() {
    let mut heap = IndexedHeap::new(Polarity::Max, vec![10, 15, 20, 5]);
    let before = heap.as_slice().to_vec();
    heap.delete(4);
    heap.delete(usize::MAX);
    assert_eq!(heap.as_slice(), before.as_slice());

    let mut empty = min_heap(&[]);
    empty.delete(0);
    assert!(empty.is_empty());
}

#[test]
fn delete_single_and_last_elements() {
    let mut heap = min_heap(&[7]);
    heap.delete(0);
    assert!(heap.is_empty());

    let mut heap = min_heap(&[5, 10, 20, 15]);
    heap.delete(3);
    assert_eq!(heap.as_slice(), &[5, 10, 20]);
}

#[test]
fn delete_root_sifts_replacement_down() {
    let mut heap = IndexedHeap::new(Polarity::Max, vec![10, 15, 20, 5]);
    heap.delete(0);
    assert_eq!(heap.as_slice(), &[15, 5, 10]);
    assert!(heap.is_valid_heap());
}

#[test]
fn delete_lifts_replacement_from_another_subtree() {
    let mut heap = min_heap(&[0, 10, 1, 11, 12, 2, 3]);
    assert_eq!(heap.as_slice(), &[0, 10, 1, 11, 12, 2, 3]);
    heap.delete(4);
    assert_eq!(heap.as_slice(), &[0, 3, 1, 11, 10, 2]);
    assert!(heap.is_valid_heap());
}

#[test]
fn remove_reports_out_of_range() {
    let mut heap = min_heap(&[3, 1, 2]);
    assert_eq!(heap.remove(1), Ok(3));
    assert_eq!(
        heap.remove(9),
        Err(HeapError::IndexOutOfRange { index: 9, len: 2 })
    );
    assert_eq!(
        HeapError::IndexOutOfRange { index: 9, len: 2 }.to_string(),
        "index 9 out of range for heap of length 2"
    );
}

#[test]
fn try_pop_on_empty_heap_fails() {
    let mut heap = min_heap(&[4]);
    assert_eq!(heap.try_pop(), Ok(4));
    assert_eq!(heap.try_pop(), Err(HeapError::Empty));
    assert_eq!(heap.pop(), None);
}

#[test]
fn heapify_to_index_leaves_tail_untouched() {
    let mut data = [1, 2, 3, 9, 8];
    heapify_slice_to_index(&mut data, 3, Polarity::Max, &NaturalOrder);
    assert_eq!(data, [3, 2, 1, 9, 8]);
    assert!(is_heap_slice(&data[..3], Polarity::Max, &NaturalOrder));
    assert!(!is_heap_slice(&data, Polarity::Max, &NaturalOrder));
}

#[test]
fn heapify_to_index_clamps_past_the_end() {
    let mut heap = IndexedHeap::new(Polarity::Min, vec![4, 8, 1, 3]);
    let before = heap.as_slice().to_vec();
    heap.heapify_to_index(100);
    assert_eq!(heap.as_slice(), before.as_slice());
}

#[test]
fn ordering_by_secondary_field() {
    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        name: &'static str,
        born: (u16, u8, u8),
    }

    let people = vec![
        Person {
            name: "ada",
            born: (1815, 12, 10),
        },
        Person {
            name: "alan",
            born: (1912, 6, 23),
        },
        Person {
            name: "grace",
            born: (1906, 12, 9),
        },
    ];
    let heap = IndexedHeap::with_comparator(Polarity::Min, people, by_key(|p: &Person| p.born));
    let names: Vec<_> = drain(heap).into_iter().map(|p| p.name).collect();
    assert_eq!(names, ["ada", "grace", "alan"]);
}

#[test]
fn random_operations_preserve_heap_property() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for polarity in [Polarity::Min, Polarity::Max] {
        let initial: Vec<i32> = (0..32).map(|_| rng.random_range(-50..50)).collect();
        let mut model = initial.clone();
        let mut heap = IndexedHeap::new(polarity, initial);

        for _ in 0..2000 {
            let len = heap.len();
            if rng.random_bool(0.5) {
                let x = rng.random_range(-50..50);
                heap.insert(x);
                model.push(x);
                assert_eq!(heap.len(), len + 1);
            } else {
                // occasionally aim past the end
                let index = rng.random_range(0..len + 2);
                let expected = heap.as_slice().get(index).copied();
                match heap.remove(index) {
                    Ok(x) => {
                        assert_eq!(Some(x), expected);
                        let pos = model.iter().position(|&m| m == x).unwrap();
                        model.swap_remove(pos);
                        assert_eq!(heap.len(), len - 1);
                    }
                    Err(err) => {
                        assert_eq!(err, HeapError::IndexOutOfRange { index, len });
                        assert_eq!(heap.len(), len);
                    }
                }
            }
            assert!(heap.is_valid_heap(), "{:?}: {:?}", polarity, heap.as_slice());
        }

        let mut remaining = heap.into_vec();
        remaining.sort();
        model.sort();
        assert_eq!(remaining, model);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn heapify_is_idempotent(items in proptest::collection::vec(-1000i32..1000, 0..200)) {
        for polarity in [Polarity::Min, Polarity::Max] {
            let mut heap = IndexedHeap::new(polarity, items.clone());
            let once = heap.as_slice().to_vec();
            heap.heapify();
            prop_assert_eq!(heap.as_slice(), once.as_slice());
            let order = HeapOrdered {
                polarity,
                comparator: NaturalOrder,
            };
            let ordered = order.check(heap.as_slice());
            prop_assert!(ordered, "{:?} out of order: {:?}", polarity, heap.as_slice());
        }
    }

    #[test]
    fn min_heap_drains_ascending(items in proptest::collection::vec(any::<u32>(), 0..200)) {
        let mut sorted = items.clone();
        sorted.sort();
        prop_assert_eq!(drain(IndexedHeap::new(Polarity::Min, items)), sorted);
    }

    #[test]
    fn reversed_comparator_drains_descending(
        items in proptest::collection::vec(any::<i16>(), 0..200)
    ) {
        let mut expected = items.clone();
        expected.sort_by(|a, b| b.cmp(a));
        let reversed = Reversed(NaturalOrder);
        let heap = IndexedHeap::with_comparator(Polarity::Min, items.clone(), reversed);
        prop_assert_eq!(drain(heap), expected.clone());
        prop_assert_eq!(drain(IndexedHeap::new(Polarity::Max, items)), expected);
    }

    #[test]
    fn inserts_keep_heap_valid(items in proptest::collection::vec(any::<i8>(), 0..100)) {
        let mut heap = IndexedHeap::new(Polarity::Max, Vec::new());
        for (n, x) in items.into_iter().enumerate() {
            heap.insert(x);
            prop_assert_eq!(heap.len(), n + 1);
            prop_assert!(heap.is_valid_heap());
        }
    }
}

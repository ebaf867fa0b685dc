use growstack::{ContainerError, GrowBuf, GrowthPolicy, Occurrence};

fn buf_of(items: &[i32]) -> GrowBuf<i32> {
    items.iter().copied().collect()
}

#[test]
fn test_buffer_initialization() {
    let buf: GrowBuf<i32> = GrowBuf::new();

    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert_eq!(buf.capacity(), 1);
    assert!(!buf.is_loaded());
}

#[test]
fn test_with_len_fills_default_values() {
    let buf: GrowBuf<String> = GrowBuf::with_len(3);
    assert_eq!(buf.len(), 3);
    assert!(buf.iter().all(String::is_empty));
    assert_eq!(buf.capacity(), 5); // ceil(3 * 1.5)
}

#[test]
fn test_from_elem_fills_value() {
    let buf = GrowBuf::from_elem(4, 7u8);
    assert_eq!(buf.as_slice(), &[7, 7, 7, 7]);
    assert_eq!(buf.capacity(), 6);
}

#[test]
fn test_at_and_at_mut_share_bound() {
    let mut buf = buf_of(&[1, 2, 3]);

    assert_eq!(buf.at(2), Ok(&3));
    *buf.at_mut(0).unwrap() = 10;
    assert_eq!(buf[0], 10);

    assert!(buf.at(3).is_err());
    assert!(buf.at_mut(3).is_err());
    assert_eq!(buf.get(3), None);
}

#[test]
fn test_push_and_pop_back() {
    let mut buf = GrowBuf::new();
    for i in 0..10 {
        buf.push_back(i);
    }
    assert_eq!(buf.len(), 10);

    assert_eq!(buf.pop_back(), Some(9));
    assert_eq!(buf.pop_back(), Some(8));
    assert_eq!(buf.len(), 8);
    assert_eq!(buf.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_pop_back_keeps_capacity() {
    let mut buf = buf_of(&[1, 2, 3, 4, 5]);
    let capacity = buf.capacity();
    while buf.pop_back().is_some() {}
    assert!(buf.is_empty());
    assert_eq!(buf.capacity(), capacity);
    assert_eq!(buf.pop_back(), None);
}

#[test]
fn test_push_front_and_pop_front() {
    let mut buf = GrowBuf::new();
    buf.push_front(3);
    buf.push_front(2);
    buf.push_front(1);
    assert_eq!(buf.as_slice(), &[1, 2, 3]);

    assert_eq!(buf.pop_front(), Some(1));
    assert_eq!(buf.as_slice(), &[2, 3]);
    buf.clear();
    assert_eq!(buf.pop_front(), None);
}

#[test]
fn test_insert_shifts_tail() {
    let mut buf = buf_of(&[1, 2, 4]);
    buf.insert(2, 3).unwrap();
    assert_eq!(buf.as_slice(), &[1, 2, 3, 4]);

    buf.insert(4, 5).unwrap();
    buf.insert(0, 0).unwrap();
    assert_eq!(buf.as_slice(), &[0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_insert_past_end_fails_without_change() {
    let mut buf = buf_of(&[1, 2]);
    assert_eq!(
        buf.insert(3, 9),
        Err(ContainerError::InsertOutOfBounds {
            index: 3,
            length: 2
        })
    );
    assert_eq!(buf.as_slice(), &[1, 2]);
}

#[test]
fn test_insert_all_splices_other_buffer() {
    let mut buf = buf_of(&[1, 5]);
    let other = buf_of(&[2, 3, 4]);
    buf.insert_all(1, &other).unwrap();

    assert_eq!(buf.as_slice(), &[1, 2, 3, 4, 5]);
    // combined length 5 exceeded capacity 2, so capacity = ceil(5 * 1.5)
    assert_eq!(buf.capacity(), 8);
    assert_eq!(other.as_slice(), &[2, 3, 4]);
}

#[test]
fn test_insert_all_within_capacity_keeps_capacity() {
    let mut buf = buf_of(&[1]);
    buf.reserve(10);
    buf.insert_all(1, &buf_of(&[2, 3])).unwrap();
    assert_eq!(buf.capacity(), 10);
    assert_eq!(buf.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_insert_all_at_end_and_out_of_bounds() {
    let mut buf = buf_of(&[1]);
    buf.insert_all(1, &buf_of(&[2, 3])).unwrap();
    assert_eq!(buf.as_slice(), &[1, 2, 3]);
    assert!(buf.insert_all(4, &buf_of(&[9])).is_err());
}

#[test]
fn test_erase_single() {
    let mut buf = buf_of(&[1, 2, 3, 4]);
    assert_eq!(buf.erase(1), Ok(2));
    assert_eq!(buf.as_slice(), &[1, 3, 4]);
    assert_eq!(
        buf.erase(3),
        Err(ContainerError::IndexOutOfBounds {
            index: 3,
            length: 3
        })
    );
}

#[test]
fn test_erase_single_on_empty_errors() {
    let mut buf: GrowBuf<i32> = GrowBuf::new();
    assert!(buf.erase(0).is_err());
}

#[test]
fn test_erase_range_clamps_length() {
    let mut buf = buf_of(&[1, 2, 3, 4, 5]);
    assert_eq!(buf.erase_range(1, 2), Ok(2));
    assert_eq!(buf.as_slice(), &[1, 4, 5]);

    assert_eq!(buf.erase_range(1, 100), Ok(2));
    assert_eq!(buf.as_slice(), &[1]);
}

#[test]
fn test_erase_range_on_empty_is_noop() {
    let mut buf: GrowBuf<i32> = GrowBuf::new();
    assert_eq!(buf.erase_range(0, 3), Ok(0));
    assert_eq!(buf.erase_range(5, 1), Ok(0));
}

#[test]
fn test_erase_range_out_of_bounds_on_non_empty() {
    let mut buf = buf_of(&[1, 2]);
    assert!(buf.erase_range(2, 1).is_err());
    assert_eq!(buf.len(), 2);
}

#[test]
fn test_find_first_and_last() {
    let buf = buf_of(&[3, 1, 3, 2, 3]);

    assert_eq!(buf.find(&3, Occurrence::First).index(), 0);
    assert_eq!(buf.find(&3, Occurrence::Last).index(), 4);
    assert_eq!(buf.find(&2, Occurrence::Last).index(), 3);
    assert_eq!(buf.find(&9, Occurrence::First), buf.end());
    assert_eq!(buf.find(&9, Occurrence::Last), buf.end());
    assert!(buf.contains(&1));
    assert!(!buf.contains(&9));
}

#[test]
fn test_find_on_empty_returns_end() {
    let buf: GrowBuf<i32> = GrowBuf::new();
    assert_eq!(buf.find(&0, Occurrence::First), buf.end());
    assert_eq!(buf.end(), buf.begin());
}

#[test]
fn test_reserve_grows_but_never_shrinks() {
    let mut buf = buf_of(&[1, 2, 3]);
    buf.reserve(20);
    assert_eq!(buf.capacity(), 20);
    buf.reserve(4);
    assert_eq!(buf.capacity(), 20);
    assert_eq!(buf.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_resize_within_capacity() {
    let mut buf = buf_of(&[1, 2]);
    buf.reserve(10);
    buf.resize(5, 0);
    assert_eq!(buf.as_slice(), &[1, 2, 0, 0, 0]);
    assert_eq!(buf.capacity(), 10);
}

#[test]
fn test_resize_beyond_capacity_reallocates() {
    let mut buf = buf_of(&[1, 2]);
    buf.resize(7, 9);
    assert_eq!(buf.as_slice(), &[1, 2, 9, 9, 9, 9, 9]);
    assert_eq!(buf.capacity(), 11); // ceil(7 * 1.5)
}

#[test]
fn test_resize_shrinks_and_drops() {
    let mut buf: GrowBuf<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    let capacity = buf.capacity();
    buf.resize(1, String::new());
    assert_eq!(buf.as_slice(), &["a".to_string()]);
    assert_eq!(buf.capacity(), capacity);
}

#[test]
fn test_resize_default() {
    let mut buf = buf_of(&[5]);
    buf.resize_default(3);
    assert_eq!(buf.as_slice(), &[5, 0, 0]);
}

#[test]
fn test_clear_keeps_capacity() {
    let mut buf = buf_of(&[1, 2, 3, 4]);
    let capacity = buf.capacity();
    buf.clear();
    assert!(buf.is_empty());
    assert_eq!(buf.capacity(), capacity);
}

#[test]
fn test_additive_growth_law() {
    let policy = GrowthPolicy::additive(2.0).unwrap();
    let mut buf = GrowBuf::with_policy(policy);
    let mut capacities = Vec::new();
    for i in 0..8 {
        buf.push_back(i);
        capacities.push(buf.capacity());
    }
    assert_eq!(capacities, vec![1, 3, 3, 5, 5, 7, 7, 9]);
}

#[test]
fn test_decimal_multiplicative_growth_law() {
    let policy = GrowthPolicy::multiplicative(1.2).unwrap();
    let mut buf = GrowBuf::with_policy(policy);
    let mut capacities = Vec::new();
    for i in 0..8 {
        buf.push_back(i);
        capacities.push(buf.capacity());
    }
    // ceil(1.2), ceil(2.4), ceil(3.6), ceil(4.8), ceil(6.0), ceil(7.2)
    assert_eq!(capacities, vec![1, 2, 3, 4, 5, 6, 8, 8]);
}

#[test]
fn test_decimal_coefficients_at_construction_and_resize() {
    let policy = GrowthPolicy::multiplicative(1.1).unwrap();
    let buf: GrowBuf<u8> = GrowBuf::with_len_and_policy(10, policy);
    assert_eq!(buf.capacity(), 11);

    let mut buf: GrowBuf<u8> = GrowBuf::with_policy(GrowthPolicy::multiplicative(1.2).unwrap());
    buf.resize(25, 0);
    assert_eq!(buf.capacity(), 30);

    let mut buf = GrowBuf::from_elem_with_policy(7, 'a', GrowthPolicy::additive(0.3).unwrap());
    assert_eq!(buf.capacity(), 8);
    buf.push_back('b');
    buf.push_back('c');
    assert_eq!(buf.capacity(), 9); // ceil(8 + 0.3)
}

#[test]
fn test_oversized_coefficient_rejected() {
    assert!(matches!(
        GrowthPolicy::additive(1e30),
        Err(ContainerError::InvalidGrowthPolicy { .. })
    ));
    assert!(GrowthPolicy::multiplicative(1e7).is_err());

    let mut buf = GrowBuf::with_policy(GrowthPolicy::additive(1000.0).unwrap());
    buf.push_back(1);
    buf.push_back(2);
    assert_eq!(buf.capacity(), 1001);
}

#[test]
fn test_clone_is_independent() {
    let original = buf_of(&[1, 2, 3]);
    let mut copy = original.clone();
    copy.push_back(4);
    copy[0] = 100;

    assert_eq!(original.as_slice(), &[1, 2, 3]);
    assert_eq!(copy.as_slice(), &[100, 2, 3, 4]);
}

#[test]
fn test_debug_lists_elements() {
    let buf = buf_of(&[1, 2]);
    assert_eq!(format!("{buf:?}"), "[1, 2]");
}

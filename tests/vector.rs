//! # Integration tests for `Vector`
//!
//! All code written in this module could be written by an external user of the crate.
use utmatrix::{LinearAlgebraError, MAX_VECTOR_SIZE, Vector};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The vectors `[1, 2, 3]` and `[4, 4, 4]`.
fn v1_v2() -> (Vector<i32>, Vector<i32>) {
    let mut v1 = Vector::new(3).unwrap();
    v1[0] = 1;
    v1[1] = 2;
    v1[2] = 3;
    let mut v2 = Vector::new(3).unwrap();
    for i in 0..v2.len() {
        v2.set(i, 4).unwrap();
    }

    (v1, v2)
}

/// A vector of length one holding `9`.
fn v0() -> Vector<i32> {
    Vector::from_values(vec![9], 0).unwrap()
}

#[test]
fn can_create_vector_with_positive_length() {
    init();
    assert!(Vector::<i32>::new(5).is_ok());
    assert!(Vector::<i32>::new(1).is_ok());
}

#[test]
fn can_create_vector_of_maximum_length() {
    init();
    let v = Vector::<u8>::new(MAX_VECTOR_SIZE).unwrap();

    assert_eq!(v.len(), MAX_VECTOR_SIZE);
    assert_eq!(v.end_index(), MAX_VECTOR_SIZE - 1);
}

#[test]
fn can_create_vector_ending_at_largest_index() {
    init();
    let v = Vector::<u8>::with_start_index(1, usize::MAX).unwrap();

    assert!(v.get(usize::MAX).is_ok());
    assert!(v.get(usize::MAX - 1).unwrap_err().is_out_of_range());
}

#[test]
fn cant_create_too_large_vector() {
    init();
    assert_eq!(
        Vector::<i32>::new(MAX_VECTOR_SIZE + 1),
        Err(LinearAlgebraError::InvalidArgument {
            size: MAX_VECTOR_SIZE + 1,
            maximum: MAX_VECTOR_SIZE,
        }),
    );
}

#[test]
fn cant_create_empty_vector() {
    init();
    assert!(Vector::<i32>::new(0).unwrap_err().is_invalid_argument());
    assert!(Vector::<i32>::with_start_index(0, 2).unwrap_err().is_invalid_argument());
}

#[test]
fn copied_vector_is_equal_to_source_one() {
    let (v1, _) = v1_v2();
    let v0 = v1.clone();

    assert_eq!(v0, v1);
}

#[test]
fn copied_vector_has_its_own_memory() {
    let (v1, _) = v1_v2();
    let mut v0 = v1.clone();

    assert!(!std::ptr::eq(v0.as_slice(), v1.as_slice()));
    v0[1] = 100;
    assert_eq!(v1[1], 2);
}

#[test]
fn can_get_size_and_start_index() {
    let v = Vector::<i32>::with_start_index(4, 2).unwrap();

    assert_eq!(v.len(), 4);
    assert_eq!(v.start_index(), 2);
}

#[test]
fn can_set_and_get_element() {
    let mut v = Vector::<i32>::new(4).unwrap();
    v[0] = 4;

    assert_eq!(v[0], 4);
    assert_eq!(v.get(0), Ok(&4));
}

#[test]
fn cant_access_element_with_too_large_index() {
    let (mut v1, _) = v1_v2();

    assert_eq!(
        v1.get(9),
        Err(LinearAlgebraError::OutOfRange { index: 9, start_index: 0, len: 3 }),
    );
    assert!(v1.set(3, 1).unwrap_err().is_out_of_range());
}

#[test]
fn cant_access_element_before_start_index() {
    let mut v = Vector::<i32>::with_start_index(3, 5).unwrap();

    assert!(v.get(4).unwrap_err().is_out_of_range());
    assert!(v.set(0, 1).unwrap_err().is_out_of_range());
    assert!(v.get(5).is_ok());
    assert!(v.get(7).is_ok());
    assert!(v.get(8).unwrap_err().is_out_of_range());
}

#[test]
fn can_assign_vector_to_itself() {
    let (mut v1, _) = v1_v2();
    let before = v1.clone();

    v1 = v1.clone();
    assert_eq!(v1, before);
    v1.clone_from(&before);
    assert_eq!(v1, before);
}

#[test]
fn can_assign_vectors_of_equal_size() {
    let (mut v1, v2) = v1_v2();

    v1.clone_from(&v2);
    assert_eq!(v1, v2);
}

#[test]
fn can_assign_vectors_of_different_size() {
    let (v1, _) = v1_v2();
    let mut v0 = v0();

    v0.clone_from(&v1);
    assert_eq!(v0.len(), 3);
    assert_eq!(v0, v1);
}

#[test]
fn compare_vector_with_itself_return_true() {
    let (v1, _) = v1_v2();

    assert!(v1 == v1);
}

#[test]
fn vectors_with_different_size_are_not_equal() {
    let (v1, _) = v1_v2();

    assert_ne!(v1, v0());
}

#[test]
fn can_add_subtract_and_multiply_scalar() {
    let (v1, _) = v1_v2();

    assert_eq!(v1.clone() + 2, Vector::from_values(vec![3, 4, 5], 0).unwrap());
    assert_eq!(v1.clone() - 2, Vector::from_values(vec![-1, 0, 1], 0).unwrap());
    assert_eq!(v1 * 2, Vector::from_values(vec![2, 4, 6], 0).unwrap());
}

#[test]
fn can_add_and_subtract_vectors_with_equal_size() {
    let (v1, v2) = v1_v2();

    assert_eq!(&v1 + &v2, Ok(Vector::from_values(vec![5, 6, 7], 0).unwrap()));
    assert_eq!(&v1 - &v2, Ok(Vector::from_values(vec![-3, -2, -1], 0).unwrap()));
}

#[test]
fn can_multiply_vectors_with_equal_size() {
    let (v1, v2) = v1_v2();

    assert_eq!(&v1 * &v2, Ok(24));
}

#[test]
fn cant_combine_vectors_with_not_equal_size() {
    let (v1, _) = v1_v2();
    let v0 = v0();

    assert!((&v0 + &v1).unwrap_err().is_incompatible_size());
    assert!((&v0 - &v1).unwrap_err().is_incompatible_size());
    assert!((&v0 * &v1).unwrap_err().is_incompatible_size());
}

use std::cmp::Ordering;

use kaitai_stream::{
    StreamError, array_max, array_min, byte_array_compare, bytes_strip_right, bytes_terminate,
    modulo,
};
use rstest::rstest;

#[rstest]
#[case(&[1, 2, 0, 0], 0, &[1, 2])]
#[case(&[0, 0], 0, &[])]
#[case(&[1, 2, 3], 0, &[1, 2, 3])]
#[case(&[0x20, 0x41, 0x20], 0x20, &[0x20, 0x41])]
fn strip_right_drops_trailing_padding(
    #[case] data: &[u8],
    #[case] pad: u8,
    #[case] expected: &[u8],
) {
    assert_eq!(bytes_strip_right(data, pad), expected);
}

#[rstest]
#[case(&[1, 2, 0, 3], false, &[1, 2])]
#[case(&[1, 2, 0, 3], true, &[1, 2, 0])]
#[case(&[1, 2, 3], true, &[1, 2, 3])]
#[case(&[], false, &[])]
fn terminate_cuts_at_first_terminator(
    #[case] data: &[u8],
    #[case] include: bool,
    #[case] expected: &[u8],
) {
    assert_eq!(bytes_terminate(data, 0, include), expected);
}

#[rstest]
#[case(&[1, 2, 3], &[1, 2, 3], Ordering::Equal)]
#[case(&[1, 2], &[1, 2, 3], Ordering::Less)]
#[case(&[1, 3], &[1, 2, 3], Ordering::Greater)]
#[case(&[0xFF], &[0x00, 0x00], Ordering::Greater)]
fn byte_arrays_compare_lexicographically(
    #[case] a: &[u8],
    #[case] b: &[u8],
    #[case] expected: Ordering,
) {
    assert_eq!(byte_array_compare(a, b), expected);
}

#[rstest]
#[case(7, 3, 1)]
#[case(-7, 3, 2)]
#[case(-9, 3, 0)]
#[case(i64::MIN, 7, 6)]
fn modulo_is_never_negative(#[case] a: i64, #[case] b: i64, #[case] expected: i64) {
    assert_eq!(modulo(a, b).unwrap(), expected);
}

#[test]
fn modulo_rejects_non_positive_divisor() {
    assert!(matches!(modulo(5, 0), Err(StreamError::InvalidArgument(_))));
    assert!(matches!(modulo(5, -2), Err(StreamError::InvalidArgument(_))));
}

#[test]
fn array_min_and_max() {
    assert_eq!(array_min(&[3, -1, 7]), Some(-1));
    assert_eq!(array_max(&[3, -1, 7]), Some(7));
    assert_eq!(array_min(&[2.5, 0.5]), Some(0.5));
    assert_eq!(array_max::<u8>(&[]), None);
}

#[test]
fn validation_errors_carry_values_and_path() {
    let err = StreamError::not_equal(0x50_u8, 0x51_u8, "/seq/0");
    assert_eq!(
        err.to_string(),
        "Validation failed at /seq/0: not equal, expected [80], but got [81]"
    );

    match StreamError::less_than(10, 3, "/seq/1") {
        StreamError::ValidationLessThan { min, actual, .. } => {
            assert_eq!(min, "10");
            assert_eq!(actual, "3");
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!(matches!(
        StreamError::greater_than(10, 30, "/seq/2"),
        StreamError::ValidationGreaterThan { .. }
    ));
    assert!(matches!(
        StreamError::not_any_of("7", "/seq/3"),
        StreamError::ValidationNotAnyOf { .. }
    ));
    assert!(matches!(
        StreamError::expr_mismatch(-1, "/seq/4"),
        StreamError::ValidationExpr { .. }
    ));
    assert!(!StreamError::expr_mismatch(-1, "/seq/4").is_eof());
}

#[test]
fn eof_error_message_names_both_counts() {
    let err = StreamError::EndOfStream {
        requested: 4,
        available: 2,
    };
    assert_eq!(
        err.to_string(),
        "End of stream: requested 4 bytes, but only 2 bytes available"
    );
}

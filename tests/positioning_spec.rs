use kaitai_stream::{KaitaiStream, StreamError, Window};
use rstest::rstest;

const FIVE: [u8; 5] = [0, 1, 2, 3, 4];

#[test]
fn empty_stream_is_eof() {
    let stream = KaitaiStream::new(&[]);
    assert!(stream.eof());
    assert_eq!(stream.size(), 0);
}

#[test]
fn non_empty_stream_is_not_eof() {
    let data = [0u8; 16];
    let stream = KaitaiStream::new(&data);
    assert!(!stream.eof());
}

#[test]
fn seek_moves_to_position() {
    let mut stream = KaitaiStream::new(&FIVE);
    stream.seek(2);
    assert_eq!(stream.pos(), 2);
    assert_eq!(stream.read_u1().unwrap(), 2);
    stream.seek(0);
    assert_eq!(stream.pos(), 0);
    assert_eq!(stream.read_u1().unwrap(), 0);
}

#[rstest]
#[case(-4, 0)]
#[case(20, 4)]
#[case(5, 4)]
#[case(3, 3)]
fn seek_clamps_into_window(#[case] target: i64, #[case] expected: usize) {
    let mut stream = KaitaiStream::new(&FIVE);
    stream.seek(target);
    assert_eq!(stream.pos(), expected);
}

#[rstest]
#[case(f64::NAN, 0)]
#[case(f64::INFINITY, 4)]
#[case(f64::NEG_INFINITY, 0)]
#[case(-0.5, 0)]
#[case(2.9, 2)]
fn seek_f64_handles_non_finite_targets(#[case] target: f64, #[case] expected: usize) {
    let mut stream = KaitaiStream::new(&FIVE);
    stream.seek(3);
    stream.seek_f64(target);
    assert_eq!(stream.pos(), expected);
}

#[test]
fn seek_on_empty_window_stays_at_zero() {
    let mut stream = KaitaiStream::new(&[]);
    stream.seek(10);
    assert_eq!(stream.pos(), 0);
    stream.seek_f64(f64::INFINITY);
    assert_eq!(stream.pos(), 0);
}

#[test]
fn pos_reports_position() {
    let mut stream = KaitaiStream::new(&FIVE);
    stream.seek(3);
    assert_eq!(stream.pos(), 3);
    assert_eq!(stream.remaining(), 2);
}

#[test]
fn reading_past_end_fails_with_eof() {
    let mut stream = KaitaiStream::new(&FIVE);
    let err = stream.read_u8le().unwrap_err();
    assert!(matches!(
        err,
        StreamError::EndOfStream {
            requested: 8,
            available: 5
        }
    ));
    assert!(err.is_eof());
    assert_eq!(stream.pos(), 0);
}

#[test]
fn ensure_bytes_left_checks_remaining() {
    let mut stream = KaitaiStream::new(&FIVE);
    stream.seek(3);
    assert!(stream.ensure_bytes_left(2).is_ok());
    assert!(matches!(
        stream.ensure_bytes_left(3),
        Err(StreamError::EndOfStream {
            requested: 3,
            available: 2
        })
    ));
}

#[test]
fn eof_after_reading_everything() {
    let mut stream = KaitaiStream::new(&FIVE);
    stream.read_bytes(5).unwrap();
    assert!(stream.eof());
}

#[test]
fn window_limits_reads_to_sub_range() {
    let data = [9, 9, 1, 2, 3, 9];
    let mut stream = KaitaiStream::with_window(&data, 2, Some(3)).unwrap();
    assert_eq!(stream.size(), 3);
    assert_eq!(stream.read_bytes_full().unwrap(), &[1, 2, 3]);
    assert!(stream.eof());
}

#[test]
fn window_without_length_extends_to_buffer_end() {
    let data = [9, 9, 1, 2];
    let mut stream = KaitaiStream::with_window(&data, 2, None).unwrap();
    assert_eq!(stream.size(), 2);
    assert_eq!(stream.read_u2be().unwrap(), 0x0102);
}

#[rstest]
#[case(4, Some(3))]
#[case(7, None)]
#[case(usize::MAX, Some(2))]
fn invalid_window_is_rejected(#[case] offset: usize, #[case] length: Option<usize>) {
    let data = [0u8; 6];
    let err = KaitaiStream::with_window(&data, offset, length).unwrap_err();
    assert!(matches!(err, StreamError::InvalidWindow { buffer_len: 6, .. }));
}

#[test]
fn changing_window_recomputes_size() {
    let data = [0, 1, 2, 3, 4, 5, 6, 7];
    let other = [10, 11, 12, 13, 14, 15];
    let mut stream = KaitaiStream::new(&data);
    stream.seek(6);

    stream.set_byte_length(4).unwrap();
    assert_eq!(stream.size(), 4);
    assert_eq!(stream.pos(), 4);

    stream.seek(0);
    stream.set_byte_offset(2).unwrap();
    assert_eq!(stream.read_u1().unwrap(), 2);

    assert!(stream.set_byte_offset(6).is_err());
    assert_eq!(stream.window().offset(), 2);

    stream.set_buffer(&other).unwrap();
    stream.seek(0);
    assert_eq!(stream.read_u1().unwrap(), 12);
}

#[test]
fn streams_can_alias_one_buffer() {
    let data = [1, 2, 3, 4];
    let mut a = KaitaiStream::from_window(Window::new(&data, 0, Some(2)).unwrap());
    let mut b = KaitaiStream::from_window(Window::new(&data, 1, None).unwrap());
    assert_eq!(a.read_u2be().unwrap(), 0x0102);
    assert_eq!(b.read_u2be().unwrap(), 0x0203);
}

#[test]
fn substream_covers_exactly_the_read_region() {
    let data = [0xAA, 1, 2, 3, 0xBB];
    let mut stream = KaitaiStream::new(&data);
    stream.read_u1().unwrap();

    let mut sub = stream.substream(3).unwrap();
    assert_eq!(stream.pos(), 4);
    assert_eq!(sub.size(), 3);
    assert_eq!(sub.window().offset(), 1);
    assert_eq!(sub.read_bytes_full().unwrap(), &[1, 2, 3]);
    assert!(sub.eof());
    assert_eq!(stream.read_u1().unwrap(), 0xBB);
}

#[test]
fn substream_past_end_fails_without_moving() {
    let data = [1, 2];
    let mut stream = KaitaiStream::new(&data);
    assert!(stream.substream(3).is_err());
    assert_eq!(stream.pos(), 0);
}

#[test]
fn nested_substream_offsets_accumulate() {
    let data = [0, 1, 2, 3, 4, 5];
    let mut outer = KaitaiStream::with_window(&data, 1, None).unwrap();
    outer.read_u1().unwrap();
    let mut inner = outer.substream(3).unwrap();
    assert_eq!(inner.window().offset(), 2);
    assert_eq!(inner.read_u1().unwrap(), 2);
}

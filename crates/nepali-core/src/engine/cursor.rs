/// Map a cursor across the replacement of `start..end` by a value of
/// `value_len` characters.
///
/// A cursor inside the replaced span snaps to the end of the inserted value:
/// the span's characters do not correspond one-to-one with the value's.
pub fn remap_cursor(cursor: usize, start: usize, end: usize, value_len: usize) -> usize {
    if cursor >= end {
        // cursor - (end - start) + value_len, ordered to avoid underflow
        cursor - end + start + value_len
    } else if cursor > start {
        start + value_len
    } else {
        cursor
    }
}

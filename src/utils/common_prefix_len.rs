use std::ops::Range;

/// Length of the common prefix of two slice ranges.
pub fn common_prefix_len<T: PartialEq>(
    old: &[T],
    old_range: Range<usize>,
    new: &[T],
    new_range: Range<usize>,
) -> usize {
    old[old_range]
        .iter()
        .zip(&new[new_range])
        .take_while(|(old_item, new_item)| old_item == new_item)
        .count()
}

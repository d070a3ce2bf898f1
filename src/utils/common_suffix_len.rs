use std::ops::Range;

/// Length of the common suffix of two slice ranges.
pub fn common_suffix_len<T: PartialEq>(
    old: &[T],
    old_range: Range<usize>,
    new: &[T],
    new_range: Range<usize>,
) -> usize {
    old[old_range]
        .iter()
        .rev()
        .zip(new[new_range].iter().rev())
        .take_while(|(old_item, new_item)| old_item == new_item)
        .count()
}

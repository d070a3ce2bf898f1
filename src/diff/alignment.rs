use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    tokenizer::token::Token,
    utils::myers_diff::{DiffOp, myers_diff},
};

/// One aligned span over the two line sequences.
///
/// The ranges index into the sequences passed to [`align`]; a side the
/// span does not touch carries an empty range marking where the change
/// happened. Every input line is covered by exactly one span.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlignmentOp {
    /// Lines that are equal after whitespace normalization.
    Equal { a: Range<usize>, b: Range<usize> },
    /// Lines present only in the second sequence.
    Insert { a: Range<usize>, b: Range<usize> },
    /// Lines present only in the first sequence.
    Delete { a: Range<usize>, b: Range<usize> },
    /// Lines changed in place, paired index-by-index downstream.
    Replace { a: Range<usize>, b: Range<usize> },
}

/// Aligns two line sequences, tolerating whitespace-quantity changes.
///
/// Lines are compared by their normalized form, so a single inserted or
/// deleted line shifts the remainder without flagging every following
/// line as changed. The returned spans cover both sequences in order.
pub fn align<S: AsRef<str>>(lines_a: &[S], lines_b: &[S]) -> Vec<AlignmentOp> {
    let tokens_a = lines_a
        .iter()
        .map(|line| Token::line(line.as_ref()))
        .collect::<Vec<_>>();
    let tokens_b = lines_b
        .iter()
        .map(|line| Token::line(line.as_ref()))
        .collect::<Vec<_>>();

    group(&myers_diff(&tokens_a, &tokens_b))
}

/// Coalesces per-line edits into spans. A maximal run of deletions and
/// insertions with no equal line between them becomes a single `Replace`.
fn group(ops: &[DiffOp]) -> Vec<AlignmentOp> {
    let mut spans = Vec::new();
    let (mut a, mut b) = (0, 0);
    let mut index = 0;

    while index < ops.len() {
        if ops[index] == DiffOp::Equal {
            let (start_a, start_b) = (a, b);
            while index < ops.len() && ops[index] == DiffOp::Equal {
                a += 1;
                b += 1;
                index += 1;
            }
            spans.push(AlignmentOp::Equal {
                a: start_a..a,
                b: start_b..b,
            });
        } else {
            let (mut deleted, mut inserted) = (0, 0);
            while index < ops.len() {
                match ops[index] {
                    DiffOp::Delete => deleted += 1,
                    DiffOp::Insert => inserted += 1,
                    DiffOp::Equal => break,
                }
                index += 1;
            }

            let span = if deleted > 0 && inserted > 0 {
                AlignmentOp::Replace {
                    a: a..a + deleted,
                    b: b..b + inserted,
                }
            } else if deleted > 0 {
                AlignmentOp::Delete {
                    a: a..a + deleted,
                    b: b..b,
                }
            } else {
                AlignmentOp::Insert {
                    a: a..a,
                    b: b..b + inserted,
                }
            };

            spans.push(span);
            a += deleted;
            b += inserted;
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_identical_sequences_align_as_one_equal_span() {
        let lines = ["fn main() {", "    body();", "}"];
        assert_eq!(
            align(&lines, &lines),
            vec![AlignmentOp::Equal { a: 0..3, b: 0..3 }]
        );
    }

    #[test]
    fn test_empty_sequences_align_to_nothing() {
        let empty: [&str; 0] = [];
        assert!(align(&empty, &empty).is_empty());
    }

    #[test]
    fn test_empty_versus_nonempty_is_one_insert_span() {
        let empty: [&str; 0] = [];
        assert_eq!(
            align(&empty, &["Line 1", "Line 2"]),
            vec![AlignmentOp::Insert { a: 0..0, b: 0..2 }]
        );
        assert_eq!(
            align(&["Line 1", "Line 2"], &empty),
            vec![AlignmentOp::Delete { a: 0..2, b: 0..0 }]
        );
    }

    #[test]
    fn test_whitespace_quantity_change_aligns_as_equal() {
        assert_eq!(
            align(&["d. H", "x  y"], &["d.  H", "x y"]),
            vec![AlignmentOp::Equal { a: 0..2, b: 0..2 }]
        );
    }

    #[test]
    fn test_inserted_line_does_not_cascade() {
        assert_eq!(
            align(&["Line 1", "Line 3"], &["Line 1", "Line 2", "Line 3"]),
            vec![
                AlignmentOp::Equal { a: 0..1, b: 0..1 },
                AlignmentOp::Insert { a: 1..1, b: 1..2 },
                AlignmentOp::Equal { a: 1..2, b: 2..3 },
            ]
        );
    }

    #[test]
    fn test_deleted_line_does_not_cascade() {
        assert_eq!(
            align(&["Line 1", "Line 2", "Line 3"], &["Line 1", "Line 3"]),
            vec![
                AlignmentOp::Equal { a: 0..1, b: 0..1 },
                AlignmentOp::Delete { a: 1..2, b: 1..1 },
                AlignmentOp::Equal { a: 2..3, b: 1..2 },
            ]
        );
    }

    #[test]
    fn test_changed_line_is_a_replace_span() {
        assert_eq!(
            align(&["Hello World"], &["Hello Universe"]),
            vec![AlignmentOp::Replace { a: 0..1, b: 0..1 }]
        );
    }

    #[test]
    fn test_unequal_replace_keeps_both_ranges() {
        assert_eq!(
            align(&["alpha", "beta"], &["gamma"]),
            vec![AlignmentOp::Replace { a: 0..2, b: 0..1 }]
        );
    }

    #[test]
    fn test_single_insertion_into_large_file_is_isolated() {
        let lines_a: Vec<String> = (0..200).map(|i| format!("line {i}")).collect();
        let mut lines_b = lines_a.clone();
        lines_b.insert(100, "inserted".to_owned());

        assert_eq!(
            align(&lines_a, &lines_b),
            vec![
                AlignmentOp::Equal { a: 0..100, b: 0..100 },
                AlignmentOp::Insert { a: 100..100, b: 100..101 },
                AlignmentOp::Equal { a: 100..200, b: 101..201 },
            ]
        );
    }
}

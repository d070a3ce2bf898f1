use crate::{
    tokenizer::word_tokenizer::word_tokenizer,
    utils::myers_diff::{DiffOp, myers_diff},
};

/// Annotates the differences between two changed lines with inline
/// markers.
///
/// Both lines are split into runs of whitespace and non-whitespace and
/// aligned verbatim, so widening a whitespace run inside an
/// already-changed line still shows up. The result follows the second
/// line: equal tokens are emitted as-is, removed tokens are wrapped in
/// `--...--`, added tokens in `++...++`. Within one changed chunk all
/// removals come before all additions.
///
/// ## Example
///
/// ```
/// use softdiff::annotate;
///
/// assert_eq!(
///     annotate("Hello World", "Hello Universe"),
///     "Hello --World--++Universe++"
/// );
/// ```
pub fn annotate(line_a: &str, line_b: &str) -> String {
    let tokens_a = word_tokenizer(line_a);
    let tokens_b = word_tokenizer(line_b);
    let ops = myers_diff(&tokens_a, &tokens_b);

    let mut result = String::with_capacity(line_b.len());
    let (mut a, mut b) = (0, 0);
    let mut index = 0;

    while index < ops.len() {
        if ops[index] == DiffOp::Equal {
            result.push_str(tokens_b[b].original());
            a += 1;
            b += 1;
            index += 1;
            continue;
        }

        let (mut deleted, mut inserted) = (0, 0);
        while index < ops.len() {
            match ops[index] {
                DiffOp::Delete => deleted += 1,
                DiffOp::Insert => inserted += 1,
                DiffOp::Equal => break,
            }
            index += 1;
        }

        for token in &tokens_a[a..a + deleted] {
            result.push_str("--");
            result.push_str(token.original());
            result.push_str("--");
        }
        for token in &tokens_b[b..b + inserted] {
            result.push_str("++");
            result.push_str(token.original());
            result.push_str("++");
        }

        a += deleted;
        b += inserted;
    }

    result
}

use super::{alignment::AlignmentOp, annotate::annotate};

/// Marker line opening every difference block.
pub const SEPARATOR: &str = "---";

const LABEL_A: &str = "File A";
const LABEL_B: &str = "File B";

/// Renders aligned spans into block-structured text.
///
/// Each reported line becomes one block: the separator, both file rows,
/// a blank line, the annotated line, and a closing blank line. Equal
/// spans produce no output; when nothing differs the result is the empty
/// string. Deciding how to present "no differences" is left to the
/// caller.
pub fn render<S: AsRef<str>>(ops: &[AlignmentOp], lines_a: &[S], lines_b: &[S]) -> String {
    let mut output: Vec<String> = Vec::new();

    for op in ops {
        match op {
            AlignmentOp::Equal { .. } => {}
            AlignmentOp::Insert { b, .. } => {
                for line in &lines_b[b.clone()] {
                    push_insertion(&mut output, line.as_ref());
                }
            }
            AlignmentOp::Delete { a, .. } => {
                for line in &lines_a[a.clone()] {
                    push_deletion(&mut output, line.as_ref());
                }
            }
            AlignmentOp::Replace { a, b } => {
                let paired = a.len().min(b.len());
                for offset in 0..paired {
                    let line_a = lines_a[a.start + offset].as_ref();
                    let line_b = lines_b[b.start + offset].as_ref();
                    push_block(&mut output, line_a, line_b, &annotate(line_a, line_b));
                }

                // Leftover lines on the longer side become pure
                // insertions or deletions, after the paired lines.
                for line in &lines_a[a.start + paired..a.end] {
                    push_deletion(&mut output, line.as_ref());
                }
                for line in &lines_b[b.start + paired..b.end] {
                    push_insertion(&mut output, line.as_ref());
                }
            }
        }
    }

    output.join("\n")
}

fn push_insertion(output: &mut Vec<String>, line: &str) {
    push_block(output, "", line, &format!("++{line}++"));
}

fn push_deletion(output: &mut Vec<String>, line: &str) {
    push_block(output, line, "", &format!("--{line}--"));
}

fn push_block(output: &mut Vec<String>, line_a: &str, line_b: &str, annotated: &str) {
    output.push(SEPARATOR.to_owned());
    output.push(format!("{LABEL_A}: {line_a}"));
    output.push(format!("{LABEL_B}: {line_b}"));
    output.push(String::new());
    output.push(annotated.to_owned());
    output.push(String::new());
}

/// Collapses every maximal run of whitespace into a single space.
///
/// Leading and trailing runs are kept (as one space each), so removing or
/// introducing a whitespace boundary stays detectable while widening one
/// does not.
///
/// ## Example
///
/// ```
/// use softdiff::normalize_line;
///
/// assert_eq!(normalize_line("d.  H"), "d. H");
/// assert_eq!(normalize_line("Hello\tWorld"), "Hello World");
/// assert_eq!(normalize_line("  Hello  "), " Hello ");
/// ```
pub fn normalize_line(line: &str) -> String {
    let mut result = String::with_capacity(line.len());
    let mut previous_char_is_whitespace = false;

    for c in line.chars() {
        if c.is_whitespace() {
            if !previous_char_is_whitespace {
                result.push(' ');
            }
            previous_char_is_whitespace = true;
        } else {
            result.push(c);
            previous_char_is_whitespace = false;
        }
    }

    result
}

/// Whether two lines are equal once their whitespace is normalized.
pub fn lines_equal_normalized(a: &str, b: &str) -> bool { normalize_line(a) == normalize_line(b) }

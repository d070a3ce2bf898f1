use super::token::Token;

/// Splits a line into maximal runs of whitespace and non-whitespace
/// characters, kept verbatim. Concatenating the tokens reproduces the
/// line exactly.
///
/// ## Example
///
/// ```not_rust
/// "Hello  World" -> ["Hello", "  ", "World"]
/// "d.H" -> ["d.H"]
/// ```
pub fn word_tokenizer(text: &str) -> Vec<Token> {
    let mut result = Vec::new();

    let mut run_start = 0;
    let mut previous_char_is_whitespace = text.chars().next().is_none_or(char::is_whitespace);

    for (i, c) in text.char_indices() {
        let is_current_char_whitespace = c.is_whitespace();
        if previous_char_is_whitespace != is_current_char_whitespace {
            result.push(text[run_start..i].into());
            run_start = i;
        }

        previous_char_is_whitespace = is_current_char_whitespace;
    }

    if run_start < text.len() {
        result.push(text[run_start..].into());
    }

    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn originals(tokens: &[Token]) -> Vec<&str> { tokens.iter().map(Token::original).collect() }

    #[test]
    fn test_runs_alternate() {
        assert_eq!(
            originals(&word_tokenizer("Hello World")),
            vec!["Hello", " ", "World"]
        );
        assert_eq!(
            originals(&word_tokenizer("Hello  World")),
            vec!["Hello", "  ", "World"]
        );
        assert_eq!(originals(&word_tokenizer("d.H")), vec!["d.H"]);
        assert_eq!(
            originals(&word_tokenizer(" what? ")),
            vec![" ", "what?", " "]
        );
        assert_eq!(
            originals(&word_tokenizer("a \t b")),
            vec!["a", " \t ", "b"]
        );
    }

    #[test]
    fn test_empty_input_has_no_tokens() {
        assert!(word_tokenizer("").is_empty());
    }

    #[test_case("Hello  World"; "internal run")]
    #[test_case("  leading and trailing\t"; "boundary runs")]
    #[test_case("tschüß,  világ"; "multi byte characters")]
    #[test_case(""; "empty")]
    fn test_tokens_reconstruct_the_line(input: &str) {
        let reconstructed = word_tokenizer(input)
            .iter()
            .map(Token::original)
            .collect::<String>();

        assert_eq!(reconstructed, input);
    }
}

//! Word counting for argument-count validation.
//!
//! Directive handlers gate on how many space-delimited arguments a line
//! carries (`count_words(line) - 1`). This is *not* a tokenizer: argument
//! text is extracted separately and may itself contain spaces.

/// Counts maximal runs of non-whitespace bytes in `line`.
///
/// Whitespace is space, `\r`, or `\n`. Consecutive separators do not create
/// empty words, and trailing separators do not create a trailing word.
pub fn count_words(line: &str) -> usize {
    line.split(is_separator).filter(|run| !run.is_empty()).count()
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\r' | '\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_has_no_words() {
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn test_single_word() {
        assert_eq!(count_words("A"), 1);
        assert_eq!(count_words("STRING"), 1);
    }

    #[test]
    fn test_interior_separators_collapse() {
        assert_eq!(count_words("A B"), 2);
        assert_eq!(count_words("A  B"), 2);
        assert_eq!(count_words("A \r\n B"), 2);
    }

    #[test]
    fn test_trailing_separators_add_no_word() {
        assert_eq!(count_words("A B "), 2);
        assert_eq!(count_words("A  "), 1);
        assert_eq!(count_words("   "), 0);
    }

    #[test]
    fn test_leading_separators_add_no_word() {
        assert_eq!(count_words(" A"), 1);
    }
}

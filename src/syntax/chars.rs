//! Character classes used by the scanner.

pub const PERIOD: char = '.';
pub const COMMA: char = ',';
pub const SINGLE_QUOTE: char = '\'';
pub const DOUBLE_QUOTE: char = '"';
pub const OPEN_PAREN: char = '(';
pub const CLOSE_PAREN: char = ')';
pub const OPEN_BRACKET: char = '[';
pub const CLOSE_BRACKET: char = ']';
pub const QUESTION_MARK: char = '?';
pub const SEMICOLON: char = ';';
pub const COLON: char = ':';
pub const BACKSLASH: char = '\\';

pub fn is_decimal_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// `$`, `_`, ASCII letters, or anything outside ASCII.
pub fn is_identifier_start(ch: char) -> bool {
    ch == '$' || ch == '_' || ch.is_ascii_alphabetic() || (ch as u32) >= 128
}

pub fn is_identifier_part(ch: char) -> bool {
    is_identifier_start(ch) || is_decimal_digit(ch)
}

/// Only space and tab; newlines are not whitespace in this grammar.
pub fn is_space(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_classes() {
        for ch in ['a', 'Z', '$', '_', 'ß', '漢'] {
            assert!(is_identifier_start(ch), "{ch:?} should start an identifier");
        }
        assert!(!is_identifier_start('1'));
        assert!(is_identifier_part('1'));
        assert!(!is_identifier_part('-'));
        assert!(!is_identifier_part(' '));
    }

    #[test]
    fn test_space_excludes_newline() {
        assert!(is_space(' '));
        assert!(is_space('\t'));
        assert!(!is_space('\n'));
        assert!(!is_space('\r'));
    }
}

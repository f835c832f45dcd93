//! Splitting source text into tokens.
use std::fmt;

/// The word that ends a definition started by `:`.
pub const DEFINITION_END: &str = ";";

/// A single whitespace-delimited word of source text.
///
/// The literal value is parsed up front, but a token is always looked up in the
/// dictionary before it is treated as a number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    text: Box<str>,
    literal: Option<i64>,
}

impl Token {
    pub fn new(text: &str) -> Self {
        Token { text: text.into(), literal: parse_literal(text) }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn literal(&self) -> Option<i64> {
        self.literal
    }

    pub fn is_definition_end(&self) -> bool {
        &*self.text == DEFINITION_END
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Parses a base-10 integer with an optional `+` or `-` sign.
pub fn parse_literal(word: &str) -> Option<i64> {
    word.parse().ok()
}

pub fn tokenize(input: &str) -> impl Iterator<Item = Token> + '_ {
    input.split_whitespace().map(Token::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        tokenize(input).map(|t| t.text().to_string()).collect()
    }

    #[test]
    fn test_tokenize_whitespace() {
        assert_eq!(texts(""), Vec::<String>::new());
        assert_eq!(texts("   \t\n "), Vec::<String>::new());
        assert_eq!(texts("1 2 +"), vec!["1", "2", "+"]);
        assert_eq!(texts("  : sq\tdup *\n; "), vec![":", "sq", "dup", "*", ";"]);
    }

    #[test]
    fn test_literals() {
        assert_eq!(parse_literal("42"), Some(42));
        assert_eq!(parse_literal("-7"), Some(-7));
        assert_eq!(parse_literal("+7"), Some(7));
        assert_eq!(parse_literal("0"), Some(0));
        assert_eq!(parse_literal("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_literal("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_literal("9223372036854775808"), None);
        assert_eq!(parse_literal("0x10"), None);
        assert_eq!(parse_literal("1.5"), None);
        assert_eq!(parse_literal("-"), None);
        assert_eq!(parse_literal("dup"), None);
    }

    #[test]
    fn test_definition_end() {
        assert!(Token::new(";").is_definition_end());
        assert!(!Token::new(";;").is_definition_end());
        assert!(!Token::new(":").is_definition_end());
    }
}

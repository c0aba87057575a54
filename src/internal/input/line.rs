//! One line of operator input: trimmed raw text plus its tokens.

use super::tokenizer::{Token, TokenizeError, tokenize};

/// A trimmed input line and the tokens read from it.
///
/// A line with zero tokens is valid (blank input); the session may treat it
/// as "repeat the last command".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Line {
    raw: String,
    tokens: Vec<Token>,
    malformed: Option<TokenizeError>,
    released: bool,
}

impl Line {
    /// Trim `text` and tokenize it.
    pub fn parse(text: &str) -> Self {
        let raw = text.trim().to_string();
        let tokenized = tokenize(&raw);
        tracing::trace!(
            "read {} token(s) from {:?}",
            tokenized.tokens.len(),
            raw
        );
        Self {
            raw,
            tokens: tokenized.tokens,
            malformed: tokenized.error,
            released: false,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn argc(&self) -> usize {
        self.tokens.len()
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(Token::as_str)
    }

    /// The command identifier, i.e. the first token.
    pub fn command(&self) -> Option<&str> {
        self.arg(0)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The lexical error found while tokenizing, if any.
    pub fn malformed(&self) -> Option<&TokenizeError> {
        self.malformed.as_ref()
    }

    /// Raw text after the first token, trimmed.
    ///
    /// Quotes in the remainder are kept as typed; only the leading command
    /// token is cut away.
    pub fn residual(&self) -> &str {
        match self.tokens.first() {
            Some(first) => self.raw[first.span().end..].trim(),
            None => "",
        }
    }

    /// Derive the line seen by a sub-command table: drop the first token and
    /// tokenize what remains afresh.
    pub fn consume(&self) -> Line {
        Line::parse(self.residual())
    }

    /// Release the text and tokens held by this line.
    ///
    /// Safe to call more than once; later calls do nothing.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.raw = String::new();
        self.tokens = Vec::new();
        self.malformed = None;
        self.released = true;
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_input() {
        let line = Line::parse("   break line 10  \n");
        assert_eq!(line.raw(), "break line 10");
        assert_eq!(line.argc(), 3);
        assert_eq!(line.command(), Some("break"));
    }

    #[test]
    fn test_blank_line_has_no_tokens() {
        let line = Line::parse(" \t ");
        assert!(line.is_empty());
        assert_eq!(line.command(), None);
        assert_eq!(line.residual(), "");
        assert!(line.malformed().is_none());
    }

    #[test]
    fn test_residual_uses_token_span() {
        let line = Line::parse(r#""break"   /tmp/x.php:10 "#);
        assert_eq!(line.residual(), "/tmp/x.php:10");

        let line = Line::parse(r#"echo "a b"  c"#);
        assert_eq!(line.residual(), r#""a b"  c"#);
    }

    #[test]
    fn test_consume_drops_first_token() {
        let line = Line::parse("break line 10");
        let sub = line.consume();
        assert_eq!(sub.raw(), "line 10");
        assert_eq!(sub.arg(0), Some("line"));
        assert_eq!(sub.arg(1), Some("10"));
        assert_eq!(sub.consume().raw(), "10");
    }

    #[test]
    fn test_malformed_line_keeps_tokens() {
        let line = Line::parse(r#"echo "oops"#);
        assert_eq!(line.argc(), 1);
        assert!(line.malformed().is_some());
    }

    #[test]
    fn test_release_twice_is_noop() {
        let mut line = Line::parse("break line 10");
        line.release();
        assert!(line.is_released());
        assert!(line.is_empty());
        assert_eq!(line.raw(), "");

        line.release();
        assert!(line.is_released());
        assert!(line.is_empty());
    }
}

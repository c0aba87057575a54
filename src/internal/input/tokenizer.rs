//! Quote-aware tokenizer for console input.
//!
//! The grammar is small:
//!
//! line: SEP* (token SEP+)* token? SEP*
//! token: word | quoted
//! word: /[^\s"][^\s]*/
//! quoted: '"' (/[^"]/ | '\"')* '"'
//!
//! Inside a quoted span a `"` directly preceded by a backslash is a literal
//! quote (the backslash is dropped); any other backslash is kept verbatim.
//! A quoted span that never closes is reported, and whatever tokens were
//! complete before it are still returned.

use std::ops::Range;

use thiserror::Error;

/// Errors raised while splitting a line into tokens.
#[derive(Debug, PartialEq, Eq, Error, Clone)]
pub enum TokenizeError {
    #[error("Malformed command line (unclosed quote) @ {position}: {rest}!")]
    UnterminatedQuote { position: usize, rest: String },
}

/// One unit of input, owned independently of the line it came from.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    text: String,
    /// Byte range in the source line, surrounding quotes included.
    span: Range<usize>,
}

impl Token {
    pub fn new(text: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

/// Output of [`tokenize`]: the tokens produced plus an optional lexical error.
///
/// An error does not invalidate `tokens`; they hold everything emitted
/// before the error was detected.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Tokenized {
    pub tokens: Vec<Token>,
    pub error: Option<TokenizeError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Between,
    Word,
    Quoted,
}

/// Split `input` into tokens.
pub fn tokenize(input: &str) -> Tokenized {
    let mut tokens = Vec::new();
    let mut state = State::Between;
    let mut acc = String::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut last = 0;

    for (pos, c) in input.char_indices() {
        last = pos;
        match state {
            State::Between => {
                if c.is_whitespace() {
                    // separator
                } else if c == '"' {
                    state = State::Quoted;
                    start = pos;
                } else {
                    state = State::Word;
                    start = pos;
                    acc.push(c);
                }
            }
            State::Word => {
                if c.is_whitespace() {
                    tokens.push(Token::new(std::mem::take(&mut acc), start..pos));
                    state = State::Between;
                } else {
                    acc.push(c);
                }
            }
            State::Quoted => {
                if c == '"' {
                    if prev == Some('\\') {
                        acc.pop();
                        acc.push('"');
                    } else {
                        let end = pos + c.len_utf8();
                        tokens.push(Token::new(std::mem::take(&mut acc), start..end));
                        state = State::Between;
                    }
                } else {
                    acc.push(c);
                }
            }
        }
        prev = Some(c);
    }

    let error = match state {
        State::Word => {
            tokens.push(Token::new(acc, start..input.len()));
            None
        }
        State::Quoted => Some(TokenizeError::UnterminatedQuote {
            position: last,
            rest: input[last..].to_string(),
        }),
        State::Between => None,
    };

    Tokenized { tokens, error }
}

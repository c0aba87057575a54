//! Console input: acquiring a line, tokenizing it, and the resulting [`Line`].

pub mod line;
pub mod source;
pub mod tokenizer;

pub use line::Line;
pub use source::{ConsoleSource, LineSource, ScriptSource};
pub use tokenizer::{Token, TokenizeError, Tokenized, tokenize};

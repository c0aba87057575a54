//! Parameter classification: the text left after the command path becomes one
//! typed [`Param`].
//!
//! Classification is purely lexical and tried in a fixed order, first match
//! wins:
//!
//! 1. empty text               -> `Empty`
//! 2. `0x1f` address literal   -> `Address` (base 16)
//! 3. `42`, `-7`, `0755`, ...  -> `Numeric` (base from prefix)
//! 4. `Class::method`          -> `Method`
//! 5. `path/to/file.php:12`    -> `File` (path made absolute)
//! 6. anything else            -> `Str`
//!
//! Integers that do not fit saturate at the bounds of the target type.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::path;

lazy_static! {
    static ref ADDR_RE: Regex = Regex::new(r"^0[xX][0-9a-fA-F]+$").expect("Invalid Regex");
    static ref INT_RE: Regex =
        Regex::new(r"^[+-]?(?:0[xX][0-9a-fA-F]+|0[0-7]*|[1-9][0-9]*)$").expect("Invalid Regex");
    static ref METHOD_RE: Regex = Regex::new(r"^([^\s:]+)::([^\s:]+)$").expect("Invalid Regex");
}

/// A classified command parameter.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Param {
    #[default]
    Empty,
    Address(u64),
    Numeric(i64),
    Method {
        class: String,
        name: String,
    },
    File {
        path: PathBuf,
        line: i64,
    },
    Str(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Empty,
    Address,
    Numeric,
    Method,
    File,
    Str,
}

impl ParamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Address => "address",
            Self::Numeric => "numeric",
            Self::Method => "method",
            Self::File => "file",
            Self::Str => "string",
        }
    }
}

impl Display for ParamKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Param {
    /// Classify `text`. Never fails: anything unrecognised is a `Str`.
    pub fn parse(text: &str) -> Param {
        let param = Self::classify(text);
        tracing::debug!("parse_param({:?}, {}): {}", text, text.len(), param.kind());
        param
    }

    fn classify(text: &str) -> Param {
        if text.is_empty() {
            return Param::Empty;
        }

        if is_addr(text) {
            return Param::Address(parse_addr(text));
        }

        if is_numeric(text) {
            return Param::Numeric(parse_numeric(text));
        }

        if let Some(caps) = METHOD_RE.captures(text) {
            return Param::Method {
                class: caps[1].to_string(),
                name: caps[2].to_string(),
            };
        }

        if let Some((file, line)) = text.split_once(':')
            && !file.is_empty()
            && is_numeric(line)
        {
            return Param::File {
                path: path::resolve(file),
                line: parse_numeric(line),
            };
        }

        Param::Str(text.to_string())
    }

    pub fn kind(&self) -> ParamKind {
        match self {
            Param::Empty => ParamKind::Empty,
            Param::Address(_) => ParamKind::Address,
            Param::Numeric(_) => ParamKind::Numeric,
            Param::Method { .. } => ParamKind::Method,
            Param::File { .. } => ParamKind::File,
            Param::Str(_) => ParamKind::Str,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Param::Empty)
    }
}

impl Display for Param {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Param::Empty => Ok(()),
            Param::Address(addr) => write!(f, "{addr:#x}"),
            Param::Numeric(num) => write!(f, "{num}"),
            Param::Method { class, name } => write!(f, "{class}::{name}"),
            Param::File { path, line } => write!(f, "{}:{line}", path.display()),
            Param::Str(s) => f.write_str(s),
        }
    }
}

/// `0x` followed by hex digits.
pub fn is_addr(text: &str) -> bool {
    ADDR_RE.is_match(text)
}

/// An integer literal: optional sign, then hex, octal or decimal digits.
pub fn is_numeric(text: &str) -> bool {
    INT_RE.is_match(text)
}

fn parse_addr(text: &str) -> u64 {
    u64::from_str_radix(&text[2..], 16).unwrap_or(u64::MAX)
}

fn parse_numeric(text: &str) -> i64 {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (digits, radix) = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        (hex, 16)
    } else if digits.len() > 1 && digits.starts_with('0') {
        (&digits[1..], 8)
    } else {
        (digits, 10)
    };

    let magnitude = u64::from_str_radix(digits, radix)
        .map(i128::from)
        .unwrap_or(i128::MAX);
    let value = if negative { -magnitude } else { magnitude };
    value.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

//! dbgcmd: the command-input core of a debugger console.
//!
//! A raw input line is tokenized ([`internal::input`]), matched against a
//! static command tree ([`internal::dispatch`]), and whatever text follows the
//! resolved command is classified into one typed parameter
//! ([`internal::param`]). A [`internal::session::Session`] drives the read
//! loop and remembers the last command for repeat-on-empty-input.

pub mod cli;
pub mod command;
pub mod internal;
pub mod utils;

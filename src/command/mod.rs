//! Built-in console commands.
//!
//! Each command lives in its own module and exports a `Descriptor` constant;
//! [`COMMANDS`] is the top-level table the binary dispatches against. The
//! handlers only report what was resolved; acting on it is left to the
//! embedding debugger.

pub mod breakpoint;
pub mod echo;
pub mod help;
pub mod quit;

use crate::internal::dispatch::Descriptor;

/// Top-level command table, searched in order.
pub static COMMANDS: &[Descriptor] = &[help::HELP, echo::ECHO, breakpoint::BREAK, quit::QUIT];

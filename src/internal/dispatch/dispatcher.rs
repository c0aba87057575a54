//! Recursive resolution of a [`Line`] against a command table.
//!
//! Token 0 picks a descriptor. With further tokens, a descriptor that has
//! sub-commands first offers the rest of the line to its sub-table; if that
//! resolves and its handler succeeds, the outer handler never runs.
//! Otherwise the remaining raw text is classified into a [`Param`] and the
//! matched handler gets it.

use super::error::DispatchError;
use super::registry::{Control, Descriptor, find};
use crate::internal::input::Line;
use crate::internal::param::Param;

/// Nesting limit used when no configuration overrides it.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// The handler that ran, and with what.
#[derive(Debug, Clone)]
pub struct Dispatched {
    pub command: &'static Descriptor,
    pub param: Param,
    pub control: Control,
    /// Names from the top-level table down to `command`.
    pub path: Vec<&'static str>,
}

impl Dispatched {
    pub fn path_string(&self) -> String {
        self.path.join(" ")
    }
}

/// Resolve `line` against `table` and run the matched handler.
pub fn dispatch(
    table: &'static [Descriptor],
    line: &Line,
    max_depth: usize,
) -> Result<Dispatched, DispatchError> {
    dispatch_at(table, line, 0, max_depth)
}

fn dispatch_at(
    table: &'static [Descriptor],
    line: &Line,
    depth: usize,
    max_depth: usize,
) -> Result<Dispatched, DispatchError> {
    if depth >= max_depth {
        return Err(DispatchError::TooDeep(max_depth));
    }

    let Some(token) = line.command() else {
        return Err(DispatchError::NoInput);
    };
    let command =
        find(table, token).ok_or_else(|| DispatchError::UnknownCommand(token.to_string()))?;

    let mut param = Param::Empty;
    if line.argc() > 1 {
        if command.has_subs() {
            let sub = line.consume();
            tracing::trace!(
                "trying sub commands in \"{}\" for \"{}\" with {} arguments",
                command.name,
                sub.command().unwrap_or_default(),
                sub.argc().saturating_sub(1)
            );

            match dispatch_at(command.subs, &sub, depth + 1, max_depth) {
                Ok(mut found) => {
                    found.path.insert(0, command.name);
                    return Ok(found);
                }
                Err(err @ DispatchError::TooDeep(_)) => return Err(err),
                Err(err) => {
                    tracing::trace!("falling back to \"{}\": {}", command.name, err);
                }
            }
        }

        param = Param::parse(line.residual());
    }

    tracing::debug!(
        "found command {} for {} with {} arguments",
        command.name,
        token,
        line.argc() - 1
    );
    for (index, arg) in line.tokens().iter().enumerate().skip(1) {
        tracing::trace!("\t#{}: [{}={}]", index, arg.as_str(), arg.len());
    }

    let control = command
        .invoke(&param, line)
        .map_err(|source| DispatchError::Handler {
            command: command.name,
            source,
        })?;

    Ok(Dispatched {
        command,
        param,
        control,
        path: vec![command.name],
    })
}

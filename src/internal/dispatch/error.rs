//! Error types for command resolution and handler execution.

use thiserror::Error;

/// Failure reported by a command handler.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The handler does not accept this kind of parameter.
    #[error("{command} does not accept a {got} parameter")]
    WrongParam { command: &'static str, got: &'static str },

    /// The handler requires a parameter and none was given.
    #[error("{0} requires a parameter")]
    MissingParam(&'static str),

    /// Generic handler failure.
    #[error("{0}")]
    Failed(String),
}

/// Result type for command handlers.
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors that can occur while resolving a line against a command table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The line had no tokens to resolve.
    #[error("No function executed !!")]
    NoInput,

    /// No descriptor at any level matched the command token.
    #[error("The command \"{0}\" could not be found")]
    UnknownCommand(String),

    /// A matched handler ran and failed.
    #[error("{command}: {source}")]
    Handler {
        command: &'static str,
        #[source]
        source: CommandError,
    },

    /// The command table nests deeper than the configured limit.
    #[error("command nesting exceeds {0} levels")]
    TooDeep(usize),

    /// Empty input asked to repeat, but nothing has run yet.
    #[error("no previous command to repeat")]
    NothingToRepeat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_error_display() {
        let err = DispatchError::UnknownCommand("zzz".to_string());
        assert_eq!(err.to_string(), "The command \"zzz\" could not be found");

        let err = DispatchError::Handler {
            command: "break",
            source: CommandError::WrongParam {
                command: "break method",
                got: "numeric",
            },
        };
        assert_eq!(
            err.to_string(),
            "break: break method does not accept a numeric parameter"
        );
    }
}

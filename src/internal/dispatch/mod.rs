//! Command tables and the dispatcher that walks them.

pub mod dispatcher;
pub mod error;
pub mod registry;

pub use dispatcher::{DEFAULT_MAX_DEPTH, Dispatched, dispatch};
pub use error::{CommandError, CommandResult, DispatchError};
pub use registry::{Control, Descriptor, Handler, find};

//! `echo`: print how the parameter was classified.

use crate::internal::dispatch::{CommandResult, Control, Descriptor};
use crate::internal::input::Line;
use crate::internal::param::Param;

pub const ECHO: Descriptor =
    Descriptor::new("echo", "show how the argument is classified", execute).alias('e');

pub fn execute(param: &Param, _line: &Line) -> CommandResult<Control> {
    println!("{}", describe(param));
    Ok(Control::Continue)
}

pub fn describe(param: &Param) -> String {
    match param {
        Param::Empty => param.kind().to_string(),
        _ => format!("{} {}", param.kind(), param),
    }
}

use crate::internal::dispatch::{CommandResult, Control, Descriptor};
use crate::internal::input::Line;
use crate::internal::param::Param;

pub const QUIT: Descriptor = Descriptor::new("quit", "exit the console", execute).alias('q');

pub fn execute(_param: &Param, _line: &Line) -> CommandResult<Control> {
    Ok(Control::Quit)
}

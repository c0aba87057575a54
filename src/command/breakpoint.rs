//! `break`: request a breakpoint.
//!
//! `break <param>` accepts any classified location. The sub-commands pin the
//! location kind, so `break method 10` falls back to the plain `break`
//! handler instead of producing a method breakpoint.

use crate::internal::dispatch::{CommandError, CommandResult, Control, Descriptor};
use crate::internal::input::Line;
use crate::internal::param::{Param, ParamKind};

const SUBS: &[Descriptor] = &[
    Descriptor::new("file", "break at a file:line location", on_file).alias('F'),
    Descriptor::new("method", "break on entry to Class::method", on_method).alias('m'),
    Descriptor::new("address", "break at an opline address", on_address).alias('a'),
];

pub const BREAK: Descriptor = Descriptor::new("break", "set a breakpoint", execute)
    .alias('b')
    .subs(SUBS);

pub fn execute(param: &Param, _line: &Line) -> CommandResult<Control> {
    if param.is_empty() {
        return Err(CommandError::MissingParam("break"));
    }
    println!("breakpoint requested at {} {}", param.kind(), param);
    Ok(Control::Continue)
}

fn on_file(param: &Param, _line: &Line) -> CommandResult<Control> {
    request("break file", ParamKind::File, param)
}

fn on_method(param: &Param, _line: &Line) -> CommandResult<Control> {
    request("break method", ParamKind::Method, param)
}

fn on_address(param: &Param, _line: &Line) -> CommandResult<Control> {
    request("break address", ParamKind::Address, param)
}

fn request(command: &'static str, expected: ParamKind, param: &Param) -> CommandResult<Control> {
    match param.kind() {
        ParamKind::Empty => Err(CommandError::MissingParam(command)),
        kind if kind == expected => {
            println!("breakpoint requested at {kind} {param}");
            Ok(Control::Continue)
        }
        kind => Err(CommandError::WrongParam {
            command,
            got: kind.as_str(),
        }),
    }
}

//! `help`: list commands, or describe one command path such as `break file`.

use super::COMMANDS;
use crate::internal::dispatch::{CommandError, CommandResult, Control, Descriptor, find};
use crate::internal::input::Line;
use crate::internal::param::Param;

pub const HELP: Descriptor = Descriptor::new("help", "show help", execute).alias('h');

pub fn execute(param: &Param, _line: &Line) -> CommandResult<Control> {
    match param {
        Param::Empty => {
            print!("{}", render_table(COMMANDS, 0));
            Ok(Control::Continue)
        }
        Param::Str(topic) => {
            let command = lookup(COMMANDS, topic)
                .ok_or_else(|| CommandError::Failed(format!("no help for \"{topic}\"")))?;
            print!("{}", render_command(command));
            Ok(Control::Continue)
        }
        other => Err(CommandError::WrongParam {
            command: "help",
            got: other.kind().as_str(),
        }),
    }
}

/// Follow a space separated command path through nested tables.
pub fn lookup(table: &'static [Descriptor], topic: &str) -> Option<&'static Descriptor> {
    let line = Line::parse(topic);
    let mut names = line.tokens().iter();
    let mut command = find(table, names.next()?.as_str())?;
    for name in names {
        command = find(command.subs, name.as_str())?;
    }
    Some(command)
}

fn render_entry(command: &Descriptor, indent: usize) -> String {
    let alias = command
        .alias
        .map(|alias| format!("[{alias}]"))
        .unwrap_or_default();
    format!(
        "{:indent$}{:<10} {:<4} {}\n",
        "",
        command.name,
        alias,
        command.tip,
        indent = indent
    )
}

fn render_table(table: &[Descriptor], indent: usize) -> String {
    let mut out = String::new();
    for command in table {
        out.push_str(&render_entry(command, indent));
        out.push_str(&render_table(command.subs, indent + 2));
    }
    out
}

fn render_command(command: &Descriptor) -> String {
    let mut out = render_entry(command, 0);
    if command.has_subs() {
        out.push_str("sub-commands:\n");
        out.push_str(&render_table(command.subs, 2));
    }
    out
}

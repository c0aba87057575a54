//! Static command tables.
//!
//! A table is a `&'static [Descriptor]`; a descriptor may carry its own
//! sub-table, which makes the registry a tree. Tables are written at build
//! time and are searched in order, so the first entry whose name or alias
//! matches wins.

use super::error::CommandResult;
use crate::internal::input::Line;
use crate::internal::param::Param;

/// What the session should do after a handler succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// A command handler. Receives the classified parameter and the line it was
/// resolved from.
pub type Handler = fn(&Param, &Line) -> CommandResult<Control>;

/// One entry of a command table.
#[derive(Debug, Clone, Copy)]
pub struct Descriptor {
    pub name: &'static str,
    /// Single-character shorthand, e.g. `b` for `break`.
    pub alias: Option<char>,
    /// One-line description shown by `help`.
    pub tip: &'static str,
    pub handler: Handler,
    pub subs: &'static [Descriptor],
}

impl Descriptor {
    pub const fn new(name: &'static str, tip: &'static str, handler: Handler) -> Self {
        Self {
            name,
            alias: None,
            tip,
            handler,
            subs: &[],
        }
    }

    pub const fn alias(self, alias: char) -> Self {
        Self {
            alias: Some(alias),
            ..self
        }
    }

    pub const fn subs(self, subs: &'static [Descriptor]) -> Self {
        Self { subs, ..self }
    }

    pub fn has_subs(&self) -> bool {
        !self.subs.is_empty()
    }

    /// Exact name match, or a one-character token equal to the alias.
    pub fn matches(&self, token: &str) -> bool {
        if self.name == token {
            return true;
        }
        let Some(alias) = self.alias else {
            return false;
        };
        let mut chars = token.chars();
        chars.next() == Some(alias) && chars.next().is_none()
    }

    pub fn invoke(&self, param: &Param, line: &Line) -> CommandResult<Control> {
        (self.handler)(param, line)
    }
}

/// First descriptor in `table` matching `token`.
pub fn find(table: &'static [Descriptor], token: &str) -> Option<&'static Descriptor> {
    table.iter().find(|command| command.matches(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(_: &Param, _: &Line) -> CommandResult<Control> {
        Ok(Control::Continue)
    }

    const SUBS: &[Descriptor] = &[Descriptor::new("line", "", ok)];
    static TABLE: &[Descriptor] = &[
        Descriptor::new("break", "set a breakpoint", ok)
            .alias('b')
            .subs(SUBS),
        Descriptor::new("back", "show a backtrace", ok).alias('t'),
        Descriptor::new("bt", "shadowed alias", ok).alias('b'),
    ];

    #[test]
    fn test_match_by_name_and_alias() {
        let command = &TABLE[0];
        assert!(command.matches("break"));
        assert!(command.matches("b"));
        assert!(!command.matches("br"));
        assert!(!command.matches("breakpoint"));
        assert!(!command.matches(""));
    }

    #[test]
    fn test_alias_needs_single_char() {
        assert!(!TABLE[0].matches("bb"));
        assert!(!SUBS[0].matches("l"));
    }

    #[test]
    fn test_find_first_match_wins() {
        assert_eq!(find(TABLE, "b").map(|c| c.name), Some("break"));
        assert_eq!(find(TABLE, "t").map(|c| c.name), Some("back"));
        assert_eq!(find(TABLE, "bt").map(|c| c.name), Some("bt"));
        assert!(find(TABLE, "zzz").is_none());
    }

    #[test]
    fn test_subs() {
        assert!(TABLE[0].has_subs());
        assert!(!TABLE[1].has_subs());
        assert_eq!(find(TABLE[0].subs, "line").map(|c| c.name), Some("line"));
    }
}

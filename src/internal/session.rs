//! One console session: reads lines, dispatches them, and remembers the last
//! command so an empty line can repeat it.

use std::fmt::Display;

use colored::Colorize;

use crate::internal::config::ConsoleConfig;
use crate::internal::dispatch::{Control, Descriptor, DispatchError, dispatch};
use crate::internal::input::{Line, LineSource};
use crate::internal::param::Param;

/// Result of asking the session for input.
#[derive(Debug)]
pub enum Input {
    Line(Line),
    /// No more input will come; the read loop must stop.
    Terminate,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionFlags {
    /// Replaying start-up commands; dispatches are not remembered.
    pub initializing: bool,
    pub quitting: bool,
}

/// The most recent successful top-level dispatch.
#[derive(Debug, Clone)]
pub struct LastCommand {
    pub command: &'static Descriptor,
    pub param: Param,
}

pub struct Session {
    commands: &'static [Descriptor],
    config: ConsoleConfig,
    last: Option<LastCommand>,
    flags: SessionFlags,
}

impl Session {
    pub fn new(commands: &'static [Descriptor], config: ConsoleConfig) -> Self {
        Self {
            commands,
            config,
            last: None,
            flags: SessionFlags::default(),
        }
    }

    pub fn flags(&self) -> SessionFlags {
        self.flags
    }

    pub fn is_quitting(&self) -> bool {
        self.flags.quitting
    }

    pub fn last_command(&self) -> Option<&'static Descriptor> {
        self.last.as_ref().map(|last| last.command)
    }

    pub fn last_param(&self) -> Option<&Param> {
        self.last.as_ref().map(|last| &last.param)
    }

    /// Store `command`/`param` as the last dispatch and hand back the
    /// parameter it replaces.
    pub fn remember(&mut self, command: &'static Descriptor, param: Param) -> Option<Param> {
        self.last
            .replace(LastCommand { command, param })
            .map(|previous| previous.param)
    }

    /// Fetch the next line from `source`.
    ///
    /// An interactive source that cannot deliver a line ends the session: it
    /// is reported, the session is marked as quitting, and `Terminate` is
    /// returned. A scripted source simply runs out.
    pub fn read_input(&mut self, source: &mut dyn LineSource) -> Input {
        if self.flags.quitting {
            return Input::Terminate;
        }

        match source.read_line(&self.config.prompt) {
            Ok(Some(text)) => self.accept(&text),
            Ok(None) if !source.is_interactive() => Input::Terminate,
            result => {
                if let Err(e) = result {
                    tracing::debug!("console read failed: {e}");
                }
                report("Failed to read console !");
                self.flags.quitting = true;
                Input::Terminate
            }
        }
    }

    /// Turn already-acquired text into a line, reporting lexical errors.
    pub fn accept(&mut self, text: &str) -> Input {
        if self.flags.quitting {
            return Input::Terminate;
        }

        let line = Line::parse(text);
        if let Some(err) = line.malformed() {
            report(err);
        }
        Input::Line(line)
    }

    /// Dispatch `line` against the session's command table.
    ///
    /// Only a successful dispatch outside initialization updates the last
    /// command; errors leave it as it was.
    pub fn execute(&mut self, line: &Line) -> Result<Control, DispatchError> {
        let dispatched = dispatch(self.commands, line, self.config.max_depth)?;
        let control = dispatched.control;

        if !self.flags.initializing {
            self.remember(dispatched.command, dispatched.param);
        }
        if control == Control::Quit {
            self.flags.quitting = true;
        }
        Ok(control)
    }

    /// Run the last command again with its remembered parameter.
    pub fn repeat_last(&mut self, line: &Line) -> Result<Control, DispatchError> {
        let last = self.last.as_ref().ok_or(DispatchError::NothingToRepeat)?;
        let command = last.command;
        tracing::debug!("repeating {} {}", command.name, last.param);

        let control = command
            .invoke(&last.param, line)
            .map_err(|source| DispatchError::Handler {
                command: command.name,
                source,
            })?;
        if control == Control::Quit {
            self.flags.quitting = true;
        }
        Ok(control)
    }

    /// Replay start-up commands without touching the last-command memory.
    pub fn initialize<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.flags.initializing = true;
        for text in lines {
            let Input::Line(line) = self.accept(text.as_ref()) else {
                break;
            };
            if line.is_empty() {
                continue;
            }
            if let Err(e) = self.execute(&line) {
                report(e);
            }
        }
        self.flags.initializing = false;
    }

    /// Read and dispatch lines until the source ends or a command quits.
    pub fn run(&mut self, source: &mut dyn LineSource) {
        while let Input::Line(line) = self.read_input(source) {
            let result = if line.is_empty() {
                if !self.config.repeat_on_empty || self.last.is_none() {
                    continue;
                }
                self.repeat_last(&line)
            } else {
                self.execute(&line)
            };

            if let Err(e) = result {
                report(e);
            }
        }
    }
}

fn report(message: impl Display) {
    eprintln!("{} {}", "[ERROR]".red(), message);
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io::{self, Cursor};

    use super::*;
    use crate::internal::dispatch::{CommandError, CommandResult};
    use crate::internal::input::{ConsoleSource, ScriptSource};

    thread_local! {
        static CALLS: RefCell<Vec<(&'static str, Param)>> = const { RefCell::new(Vec::new()) };
    }

    fn take_calls() -> Vec<(&'static str, Param)> {
        CALLS.with(|calls| calls.borrow_mut().drain(..).collect())
    }

    fn on_step(param: &Param, _: &Line) -> CommandResult<Control> {
        CALLS.with(|calls| calls.borrow_mut().push(("step", param.clone())));
        Ok(Control::Continue)
    }

    fn on_fail(param: &Param, _: &Line) -> CommandResult<Control> {
        CALLS.with(|calls| calls.borrow_mut().push(("fail", param.clone())));
        Err(CommandError::Failed("nope".to_string()))
    }

    fn on_quit(_: &Param, _: &Line) -> CommandResult<Control> {
        CALLS.with(|calls| calls.borrow_mut().push(("quit", Param::Empty)));
        Ok(Control::Quit)
    }

    static COMMANDS: &[Descriptor] = &[
        Descriptor::new("step", "step", on_step).alias('s'),
        Descriptor::new("fail", "always fails", on_fail),
        Descriptor::new("quit", "quit", on_quit).alias('q'),
    ];

    fn session() -> Session {
        take_calls();
        Session::new(COMMANDS, ConsoleConfig::default())
    }

    struct BrokenSource;

    impl LineSource for BrokenSource {
        fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    struct ClosedConsole;

    impl LineSource for ClosedConsole {
        fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
            Ok(None)
        }
    }

    #[test]
    fn test_success_updates_memory() {
        let mut session = session();
        session.execute(&Line::parse("step 3")).unwrap();
        assert_eq!(session.last_command().map(|c| c.name), Some("step"));
        assert_eq!(session.last_param(), Some(&Param::Numeric(3)));

        session.execute(&Line::parse("s Foo::bar")).unwrap();
        assert_eq!(
            session.last_param(),
            Some(&Param::Method {
                class: "Foo".to_string(),
                name: "bar".to_string(),
            })
        );
    }

    #[test]
    fn test_failures_leave_memory_untouched() {
        let mut session = session();
        session.execute(&Line::parse("step 0x10")).unwrap();

        assert!(session.execute(&Line::parse("zzz 1")).is_err());
        assert!(session.execute(&Line::parse("fail 2")).is_err());

        assert_eq!(session.last_command().map(|c| c.name), Some("step"));
        assert_eq!(session.last_param(), Some(&Param::Address(16)));
    }

    #[test]
    fn test_remember_returns_previous_param_once() {
        let mut session = session();
        assert_eq!(session.remember(&COMMANDS[0], Param::Numeric(1)), None);
        assert_eq!(
            session.remember(&COMMANDS[0], Param::Str("x".to_string())),
            Some(Param::Numeric(1))
        );
        assert_eq!(
            session.remember(&COMMANDS[0], Param::Empty),
            Some(Param::Str("x".to_string()))
        );
    }

    #[test]
    fn test_initialize_does_not_remember() {
        let mut session = session();
        session.initialize(["step 1", "", "zzz"]);
        assert_eq!(take_calls(), vec![("step", Param::Numeric(1))]);
        assert!(session.last_command().is_none());
        assert!(!session.flags().initializing);
    }

    #[test]
    fn test_repeat_last() {
        let mut session = session();
        assert_eq!(
            session.repeat_last(&Line::parse("")).unwrap_err(),
            DispatchError::NothingToRepeat
        );

        session.execute(&Line::parse("step 7")).unwrap();
        session.repeat_last(&Line::parse("")).unwrap();
        assert_eq!(
            take_calls(),
            vec![("step", Param::Numeric(7)), ("step", Param::Numeric(7))]
        );
    }

    #[test]
    fn test_run_repeats_on_empty_line_and_quits() {
        let mut session = session();
        let mut source = ScriptSource::new(["step 1", "", "   ", "zzz", "q", "step 2"]);
        session.run(&mut source);

        assert_eq!(
            take_calls(),
            vec![
                ("step", Param::Numeric(1)),
                ("step", Param::Numeric(1)),
                ("step", Param::Numeric(1)),
                ("quit", Param::Empty),
            ]
        );
        assert!(session.is_quitting());
        assert_eq!(source.remaining(), 1);
    }

    #[test]
    fn test_run_without_repeat() {
        take_calls();
        let config = ConsoleConfig {
            repeat_on_empty: false,
            ..ConsoleConfig::default()
        };
        let mut session = Session::new(COMMANDS, config);
        session.run(&mut ScriptSource::new(["step 1", ""]));
        assert_eq!(take_calls(), vec![("step", Param::Numeric(1))]);
    }

    #[test]
    fn test_interactive_read_failure_terminates() {
        let mut session = session();
        assert!(matches!(
            session.read_input(&mut BrokenSource),
            Input::Terminate
        ));
        assert!(session.is_quitting());
        assert!(matches!(session.accept("step"), Input::Terminate));

        let mut session = Session::new(COMMANDS, ConsoleConfig::default());
        assert!(matches!(
            session.read_input(&mut ClosedConsole),
            Input::Terminate
        ));
        assert!(session.is_quitting());
    }

    #[test]
    fn test_invalid_utf8_does_not_end_session() {
        let mut session = session();
        let mut console = ConsoleSource::new(
            Cursor::new(&b"echo caf\xe9\nquit\n"[..]),
            io::sink(),
        );
        match session.read_input(&mut console) {
            Input::Line(line) => assert_eq!(line.command(), Some("echo")),
            Input::Terminate => panic!("a stray byte must not end the session"),
        }
        assert!(!session.is_quitting());
    }

    #[test]
    fn test_blank_line_is_not_termination() {
        let mut session = session();
        let mut source = ScriptSource::new(["  "]);
        match session.read_input(&mut source) {
            Input::Line(line) => assert!(line.is_empty()),
            Input::Terminate => panic!("blank line must not terminate"),
        }
        assert!(!session.is_quitting());
    }

    #[test]
    fn test_malformed_line_still_dispatches() {
        let mut session = session();
        let Input::Line(line) = session.accept(r#"step "unclosed"#) else {
            panic!("expected a line");
        };
        assert!(line.malformed().is_some());
        session.execute(&line).unwrap();
        assert_eq!(session.last_command().map(|c| c.name), Some("step"));
    }
}

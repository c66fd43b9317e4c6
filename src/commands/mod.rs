use crate::config::EXAMPLE_QUERIES;
use crate::error::Result;
use crate::repl::Repl;

pub mod builtin;

/// Result of command execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Continue REPL loop
    Continue,
    /// Exit REPL loop
    Exit,
}

/// Enum representing all available REPL commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    History,
    Examples,
    /// One-based example number as typed, possibly out of range
    Example(usize),
    Help,
}

impl Command {
    /// Anything that is not a known command is a question for the service.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let lower = input.to_lowercase();
        match lower.as_str() {
            "/exit" | "/quit" | "/q" => return Some(Command::Exit),
            "/history" => return Some(Command::History),
            "/examples" => return Some(Command::Examples),
            "/help" | "/?" => return Some(Command::Help),
            _ => {}
        }

        let n: usize = lower.strip_prefix("/example ")?.trim().parse().ok()?;
        Some(Command::Example(n))
    }

    pub fn execute(&self, repl: &mut Repl) -> Result<CommandResult> {
        match self {
            Command::Exit => builtin::exit_command(repl),
            Command::History => builtin::history_command(repl),
            Command::Examples => builtin::examples_command(),
            Command::Example(n) => builtin::example_command(repl, *n),
            Command::Help => builtin::help_command(),
        }
    }
}

/// Example query by its one-based number.
pub fn example_query(n: usize) -> Option<&'static str> {
    EXAMPLE_QUERIES.get(n.checked_sub(1)?).copied()
}

/// All available commands as strings (for autocomplete)
pub static COMMANDS: &[&str] = &[
    "/exit",
    "/quit",
    "/q",
    "/history",
    "/examples",
    "/example 1",
    "/example 2",
    "/example 3",
    "/help",
];

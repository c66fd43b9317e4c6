use super::{example_query, CommandResult};
use crate::config::EXAMPLE_QUERIES;
use crate::error::Result;
use crate::repl::Repl;
use crate::ui::UI;

pub fn exit_command(repl: &mut Repl) -> Result<CommandResult> {
    UI::print_goodbye(repl.exchange_count());
    Ok(CommandResult::Exit)
}

pub fn history_command(repl: &mut Repl) -> Result<CommandResult> {
    repl.display_history();
    Ok(CommandResult::Continue)
}

pub fn examples_command() -> Result<CommandResult> {
    UI::print_examples();
    Ok(CommandResult::Continue)
}

pub fn example_command(repl: &mut Repl, n: usize) -> Result<CommandResult> {
    match example_query(n) {
        Some(query) => {
            repl.print_submitted(query);
            repl.process_query(query)?;
        }
        None => UI::print_warning(&format!(
            "No example {}. Choose a number from 1 to {}.",
            n,
            EXAMPLE_QUERIES.len()
        )),
    }
    Ok(CommandResult::Continue)
}

pub fn help_command() -> Result<CommandResult> {
    UI::print_help();
    Ok(CommandResult::Continue)
}

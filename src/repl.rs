use crate::api::AnalysisClient;
use crate::commands::{Command, CommandResult, COMMANDS};
use crate::config::{AppConfig, SPINNER_MESSAGE};
use crate::conversation::{ConversationLoop, SubmitOutcome};
use crate::error::{Result, TokenScoreError};
use crate::prompt::ReplPrompt;
use crate::render::{strip_control, ExchangeView};
use crate::ui::{format_exchange, UI};
use colored::Colorize;
use reedline::{
    default_emacs_keybindings, ColumnarMenu, DefaultCompleter, Emacs, KeyCode, KeyModifiers,
    MenuBuilder, Reedline, ReedlineEvent, ReedlineMenu, Signal,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Terminal front-end around one conversation session
pub struct Repl {
    conversation: ConversationLoop,
    runtime: tokio::runtime::Runtime,
    ui: UI,
    editor: Reedline,
    prompt: ReplPrompt,
}

impl Repl {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = AnalysisClient::new(&config.api_url)?;

        let runtime = tokio::runtime::Runtime::new().map_err(|e| {
            TokenScoreError::Config(format!("Failed to create async runtime: {}", e))
        })?;

        let mut completer = DefaultCompleter::with_inclusions(&['/', '-', '_']);
        completer = completer.set_min_word_len(1);
        completer.insert(COMMANDS.iter().map(|c| c.to_string()).collect());
        let completer = Box::new(completer);

        let completion_menu = ColumnarMenu::default().with_name("completion_menu");
        let completion_menu = ReedlineMenu::EngineCompleter(Box::new(completion_menu));

        let mut keybindings = default_emacs_keybindings();
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu("completion_menu".into()),
                ReedlineEvent::MenuNext,
            ]),
        );
        keybindings.add_binding(
            KeyModifiers::SHIFT,
            KeyCode::BackTab,
            ReedlineEvent::MenuPrevious,
        );

        let edit_mode = Box::new(Emacs::new(keybindings));

        let editor = Reedline::create()
            .use_bracketed_paste(true)
            .with_completer(completer)
            .with_edit_mode(edit_mode)
            .with_menu(completion_menu);

        Ok(Self {
            conversation: ConversationLoop::new(client),
            runtime,
            ui: UI::new(config.render_markup),
            editor,
            prompt: ReplPrompt::new(),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        UI::print_welcome(self.conversation.client().endpoint());

        loop {
            match self.editor.read_line(&self.prompt) {
                Ok(Signal::Success(line)) => {
                    if let Some(command) = Command::parse(&line) {
                        match command.execute(self) {
                            Ok(CommandResult::Exit) => break,
                            Ok(CommandResult::Continue) => {}
                            Err(e) => UI::print_error_with_hint(&e),
                        }
                        continue;
                    }

                    if let Err(e) = self.process_query(&line) {
                        UI::print_error_with_hint(&e);
                    }
                }
                Ok(Signal::CtrlC) | Ok(Signal::CtrlD) => {
                    println!("\nExiting...");
                    UI::print_goodbye(self.exchange_count());
                    break;
                }
                Err(err) => {
                    UI::print_error_with_hint(&TokenScoreError::Io(err));
                    break;
                }
            }
        }

        Ok(())
    }

    /// One trip through the loop: validate, wait on the service, then show the outcome.
    pub fn process_query(&mut self, query: &str) -> Result<()> {
        if query.trim().is_empty() {
            if let SubmitOutcome::Rejected(warning) =
                self.runtime.block_on(self.conversation.submit(query))
            {
                UI::print_warning(&warning);
            }
            return Ok(());
        }

        let running = Arc::new(AtomicBool::new(true));
        let running_clone = Arc::clone(&running);
        let spinner = std::thread::spawn(move || {
            UI::run_spinner(SPINNER_MESSAGE.to_string(), running_clone)
        });

        let outcome = self.runtime.block_on(self.conversation.submit(query));

        running.store(false, Ordering::SeqCst);
        let _ = spinner.join();
        tracing::debug!(state = ?self.conversation.state(), "Request finished");

        match outcome {
            SubmitOutcome::Answered(idx) => {
                tracing::debug!(index = idx, "Showing conversation");
                self.display_history();
            }
            SubmitOutcome::Rejected(warning) => UI::print_warning(&warning),
            SubmitOutcome::Failed(e) => {
                UI::print_analysis_error(&e);
                println!();
            }
        }

        Ok(())
    }

    /// Non-interactive mode: ask once, print the answer only.
    pub fn process_single_prompt(&mut self, query: &str) -> Result<()> {
        self.print_submitted(query);
        println!();

        match self.runtime.block_on(self.conversation.submit(query)) {
            SubmitOutcome::Answered(idx) => {
                let exchange = &self.conversation.store().all()[idx];
                let view = ExchangeView::from_exchange(exchange, self.ui.render_markup());
                println!("{}", format_exchange(&view));
                UI::print_footer();
                Ok(())
            }
            SubmitOutcome::Rejected(warning) => Err(TokenScoreError::Validation(warning)),
            SubmitOutcome::Failed(e) => Err(TokenScoreError::Context {
                message: "Analysis Error".to_string(),
                source: Box::new(e),
            }),
        }
    }

    pub fn print_submitted(&self, query: &str) {
        println!("{} {}", "Ask >".bright_blue().bold(), strip_control(query));
    }

    pub fn display_history(&self) {
        println!();
        self.ui.display_exchanges(self.conversation.store());
    }

    pub fn exchange_count(&self) -> usize {
        self.conversation.store().len()
    }
}

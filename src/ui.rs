use crate::config::{APP_SUBTITLE, APP_TITLE, ASSISTANT_NAME, EXAMPLE_QUERIES, FOOTER};
use crate::error::TokenScoreError;
use crate::render::ExchangeView;
use crate::session::SessionStore;
use colored::Colorize;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Message severity levels for consistent UI feedback
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MessageSeverity {
    /// Input that was not sent, e.g. a blank question
    Warning,
    /// Failed requests
    Error,
    Info,
}

impl MessageSeverity {
    pub fn prefix(&self) -> colored::ColoredString {
        match self {
            Self::Warning => "Warning:".bright_yellow().bold(),
            Self::Error => "Error:".bright_red().bold(),
            Self::Info => "Info:".bright_cyan().bold(),
        }
    }
}

/// UI utilities for displaying messages, animations, and formatting
pub struct UI {
    render_markup: bool,
}

impl UI {
    pub fn new(render_markup: bool) -> Self {
        Self { render_markup }
    }

    pub fn render_markup(&self) -> bool {
        self.render_markup
    }

    pub fn print_message(severity: MessageSeverity, message: &str) {
        eprintln!("{} {}", severity.prefix(), message);
    }

    pub fn print_warning(message: &str) {
        Self::print_message(MessageSeverity::Warning, message);
    }

    pub fn print_info(message: &str) {
        Self::print_message(MessageSeverity::Info, message);
    }

    /// Failed analysis requests, with a hint line when one applies.
    pub fn print_analysis_error(error: &TokenScoreError) {
        eprintln!(
            "{} Analysis Error: {}",
            MessageSeverity::Error.prefix(),
            error
        );
        if let Some(hint) = error.hint() {
            eprintln!("  {} {}", "Hint:".bright_cyan(), hint);
        }
    }

    pub fn print_error_with_hint(error: &TokenScoreError) {
        eprintln!("{} {}", MessageSeverity::Error.prefix(), error);
        if let Some(hint) = error.hint() {
            eprintln!("  {} {}", "Hint:".bright_cyan(), hint);
        }
    }

    pub fn print_welcome(endpoint: &str) {
        println!("{}", format!("📊 {}", APP_TITLE).bright_cyan().bold());
        println!("{}", APP_SUBTITLE.bright_white());
        println!("{} {}", "Service:".bright_cyan(), endpoint.dimmed());
        println!();
        Self::print_examples();
        println!(
            "{}",
            "Type your question, '/example <n>' to ask an example, '/help' for commands.".dimmed()
        );
        println!();
    }

    pub fn print_examples() {
        println!("{}", "Example Queries".bright_white().bold());
        for (idx, query) in EXAMPLE_QUERIES.iter().enumerate() {
            println!("  {} 🔍 {}", format!("{}.", idx + 1).bright_cyan(), query);
        }
        println!();
    }

    pub fn print_help() {
        println!("{}", "Commands".bright_white().bold());
        println!("  {:<14} {}", "/example <n>".bright_cyan(), "Ask example query n");
        println!("  {:<14} {}", "/examples".bright_cyan(), "List example queries");
        println!("  {:<14} {}", "/history".bright_cyan(), "Show the conversation so far");
        println!("  {:<14} {}", "/exit".bright_cyan(), "End the session");
        println!();
    }

    pub fn print_goodbye(exchange_count: usize) {
        println!(
            "{}",
            format!(
                "Goodbye! {} exchange{} this session, none saved.",
                exchange_count,
                if exchange_count == 1 { "" } else { "s" }
            )
            .bright_cyan()
        );
    }

    /// Render the whole log, most recent exchange first.
    pub fn display_exchanges(&self, store: &SessionStore) {
        if store.is_empty() {
            Self::print_info("No exchanges yet. Ask a question to get started.");
            return;
        }

        println!("{}", "═".repeat(80).bright_cyan());
        for exchange in store.newest_first() {
            let view = ExchangeView::from_exchange(exchange, self.render_markup);
            println!("{}", format_exchange(&view));
        }
        println!("{}", "═".repeat(80).bright_cyan());
        Self::print_footer();
    }

    pub fn print_footer() {
        println!("{}", FOOTER.dimmed());
        println!();
    }

    /// Spinner shown while a request is in flight. Returns once `running` is cleared.
    pub fn run_spinner(action_message: String, running: Arc<AtomicBool>) {
        let frames = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
        let mut frame_idx = 0;

        let mut out = io::stdout();
        println!();
        let _ = execute!(out, Hide);

        while running.load(Ordering::SeqCst) {
            print!(
                "\r{} {}",
                frames[frame_idx].truecolor(0xFF, 0x99, 0x33),
                action_message.truecolor(0xFF, 0x99, 0x33),
            );
            let _ = out.flush();
            frame_idx = (frame_idx + 1) % frames.len();
            thread::sleep(Duration::from_millis(80));
        }

        print!("\r{}\r", " ".repeat(action_message.chars().count() + 4));
        let _ = execute!(out, Show);
        let _ = out.flush();
    }
}

/// Two cards per exchange: the question, then the answer.
pub fn format_exchange(view: &ExchangeView) -> String {
    let mut card = String::new();

    card.push_str(&format!(
        "{} {}\n",
        "│".blue(),
        format!("You • {}", view.timestamp_display).dimmed()
    ));
    for line in view.query.lines() {
        card.push_str(&format!("{} {}\n", "│".blue(), line));
    }
    card.push('\n');

    let mut header = format!("{} • {}", ASSISTANT_NAME, view.timestamp_display)
        .dimmed()
        .to_string();
    if !view.coins_display.is_empty() {
        header.push_str(&format!(" {}", format!("• Analyzing: {}", view.coins_display).dimmed()));
    }
    card.push_str(&format!("{} {}\n", "│".green(), header));
    for line in view.analysis_text.lines() {
        card.push_str(&format!("{} {}\n", "│".green(), line));
    }

    card
}

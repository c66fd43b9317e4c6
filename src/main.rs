mod api;
mod cli;
mod commands;
mod config;
mod conversation;
mod error;
mod error_ext;
mod prompt;
mod render;
mod repl;
mod session;
mod ui;

use clap::Parser;
use cli::Cli;
use config::AppConfig;
use error::Result;
use repl::Repl;
use ui::UI;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    let config = match AppConfig::resolve(cli.api_url, cli.config.as_deref(), !cli.raw) {
        Ok(config) => config,
        Err(e) => {
            UI::print_error_with_hint(&e);
            eprintln!();
            eprintln!("Set the analysis service URL with:");
            eprintln!("  export TOKENSCORE_API_URL='http://localhost:5000'");
            eprintln!("Or use the --api-url flag:");
            eprintln!("  tokenscore --api-url 'http://localhost:5000'");
            std::process::exit(1);
        }
    };

    tracing::debug!(api_url = %config.api_url, "Starting session");

    let mut repl = match Repl::new(&config) {
        Ok(repl) => repl,
        Err(e) => {
            UI::print_error_with_hint(&e);
            std::process::exit(1);
        }
    };

    if let Some(prompt) = cli.prompt {
        if let Err(e) = repl.process_single_prompt(&prompt) {
            UI::print_error_with_hint(&e);
            std::process::exit(1);
        }
    } else {
        repl.run()?;
    }

    Ok(())
}

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tokenscore",
    about = "Ask the TokenScore service about crypto markets from your terminal",
    long_about = "TokenScore AI is an interactive client for the TokenScore analysis service. Each question is sent to the service and the answers are kept as a conversation log for the rest of the session. Nothing is saved to disk.",
    version
)]
pub struct Cli {
    /// Base URL of the analysis service
    #[arg(long, env = "TOKENSCORE_API_URL")]
    pub api_url: Option<String>,

    /// Config file (defaults to ~/.tokenscore/config.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Question to send (if not provided, starts interactive REPL)
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Show the analysis markup as received instead of converting it
    #[arg(long)]
    pub raw: bool,

    #[arg(short, long)]
    pub verbose: bool,
}

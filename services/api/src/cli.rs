use crate::chat::{run_ask, run_chat, AskArgs, ChatArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use faq_desk::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "FAQ Desk",
    about = "Answer frequently asked questions over HTTP or from the terminal",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Answer a single question and exit
    Ask(AskArgs),
    /// Read questions from stdin and print the chat transcript
    Chat(ChatArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// FAQ data file (JSON or CSV); defaults to APP_FAQ_PATH
    #[arg(long)]
    pub(crate) faq: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Ask(args) => run_ask(args),
        Command::Chat(args) => run_chat(args),
    }
}

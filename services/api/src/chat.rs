use crate::infra::load_desk;
use clap::Args;
use faq_desk::config::AppConfig;
use faq_desk::error::AppError;
use faq_desk::faq::{
    Conversation, FaqDesk, FaqLoader, Message, Sender, EMPTY_SOURCE_NOTICE, LOAD_FAILED_NOTICE,
};
use faq_desk::telemetry;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::error;

#[derive(Args, Debug)]
pub(crate) struct AskArgs {
    /// FAQ data file (JSON or CSV); defaults to APP_FAQ_PATH
    #[arg(long)]
    pub(crate) faq: Option<PathBuf>,
    /// Question to answer
    #[arg(required = true, num_args = 1..)]
    pub(crate) query: Vec<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ChatArgs {
    /// FAQ data file (JSON or CSV); defaults to APP_FAQ_PATH
    #[arg(long)]
    pub(crate) faq: Option<PathBuf>,
}

pub(crate) fn run_ask(args: AskArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let path = args
        .faq
        .unwrap_or_else(|| config.faq.data_path.clone());
    let desk = load_desk(&path, config.faq.reply_templates())?;
    let reply = desk.ask(&args.query.join(" "));

    println!("{}", reply.text());
    Ok(())
}

pub(crate) fn run_chat(args: ChatArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let path = args
        .faq
        .unwrap_or_else(|| config.faq.data_path.clone());
    let mut conversation = Conversation::new();
    let desk = match FaqLoader::from_path(&path) {
        Ok(set) => {
            if set.is_empty() {
                conversation.push_notice(EMPTY_SOURCE_NOTICE);
            }
            FaqDesk::with_replies(set, config.faq.reply_templates())
        }
        Err(err) => {
            error!(path = %path.display(), error = %err, "failed to load faq data");
            conversation.push_notice(LOAD_FAILED_NOTICE);
            FaqDesk::unloaded(config.faq.reply_templates())
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    chat_session(&desk, &mut conversation, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Feed each input line to the desk and echo the transcript as it grows.
pub(crate) fn chat_session<R, W>(
    desk: &FaqDesk,
    conversation: &mut Conversation,
    input: R,
    mut output: W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut printed = flush_transcript(conversation.messages(), 0, &mut output)?;

    for line in input.lines() {
        let line = line?;
        conversation.submit(desk, &line);
        printed = flush_transcript(conversation.messages(), printed, &mut output)?;
    }

    output.flush()
}

fn flush_transcript<W: Write>(
    messages: &[Message],
    printed: usize,
    output: &mut W,
) -> io::Result<usize> {
    for message in &messages[printed..] {
        let speaker = match message.sender {
            Sender::User => "you",
            Sender::Bot => "bot",
        };
        writeln!(output, "{speaker}> {}", message.text)?;
    }
    Ok(messages.len())
}

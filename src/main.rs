//! Coach Chat - terminal client for the Mental Coach backend
//!
//! Keeps a single in-memory conversation, sends each submission to the
//! backend's `/api/chat` endpoint with the prior transcript as context, and
//! renders the reply (or an inline error) in the terminal.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod backend;
mod config;
mod conversation;
mod core;

use backend::HttpBackend;
use config::Config;
use crate::core::{ConversationController, Submission};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coach_chat=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let base_url = config.base_url();
    tracing::info!(base_url = %base_url, "🧠 Coach Chat starting");

    let mut controller = ConversationController::new(HttpBackend::new(base_url));

    println!("🧠 Mental Coach — your supportive AI companion");
    println!("Welcome! I'm here to support you.");
    println!("Feel free to share what's on your mind. Press Ctrl-D to leave.\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("You: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        controller.set_draft(line);
        let text = controller.draft().to_string();
        if text.trim().is_empty() {
            continue;
        }

        println!("Coach is thinking...");
        match controller.submit(&text).await {
            Submission::Ignored => {}
            Submission::Replied | Submission::Failed => {
                if let Some(message) = controller.messages().last() {
                    println!("Coach: {}\n", message.content);
                }
            }
        }
    }

    tracing::info!(messages = controller.messages().len(), "session ended");

    Ok(())
}

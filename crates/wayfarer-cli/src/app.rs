//! Interactive chat loop and transcript rendering.

use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;
use wayfarer_chat::{
    obtain_token, ChatEndpoint, ConversationEvent, EventBus, ExchangeController, ExchangeState,
    Message, Origin,
};
use wayfarer_common::{Result, WayfarerError};
use wayfarer_config::WayfarerConfig;

use crate::cli::Args;
use crate::setup;

pub async fn run(args: &Args, config: &WayfarerConfig) -> Result<()> {
    let settings = setup::chat_settings(config);
    let store = setup::build_store(args, config);

    if args.print_token {
        println!("{}", obtain_token(&*store, &settings.token_key));
        return Ok(());
    }

    let endpoint: Arc<dyn ChatEndpoint> = Arc::new(setup::build_endpoint(args, config)?);
    let events = Arc::new(EventBus::default());

    let controller =
        ExchangeController::activate(&*store, endpoint, &settings, Arc::clone(&events)).await;
    for message in controller.messages() {
        println!("{}", render(&message));
    }

    let renderer = tokio::spawn(render_events(events.subscribe(), std::io::stdout()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.map_err(WayfarerError::Io)? {
        match line.trim() {
            "/quit" => break,
            "/history" => {
                for message in controller.messages() {
                    println!("{}", render(&message));
                }
            }
            "/token" => println!("{}", controller.token()),
            _ => {
                controller.set_draft(line);
                controller.submit_draft().await;
            }
        }
    }

    tracing::info!(session = %controller.token(), "chat closed");

    // Closing the bus lets the renderer drain what is queued, then exit.
    drop(controller);
    drop(events);
    renderer
        .await
        .map_err(|e| WayfarerError::Other(format!("renderer task failed: {e}")))?;
    Ok(())
}

/// Print agent replies and the typing indicator as they happen.
///
/// Runs until every sender of the bus is gone and returns the writer.
async fn render_events<W: Write>(mut rx: broadcast::Receiver<ConversationEvent>, mut out: W) -> W {
    loop {
        match rx.recv().await {
            Ok(ConversationEvent::StateChanged(ExchangeState::AwaitingReply)) => {
                eprintln!("… typing");
            }
            Ok(ConversationEvent::MessageAppended(message)) if message.is_agent() => {
                if let Err(e) = writeln!(out, "{}", render(&message)).and_then(|()| out.flush()) {
                    tracing::debug!(error = %e, "transcript write failed");
                    break;
                }
            }
            Ok(_) => {}
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "renderer lagged");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
    out
}

fn render(message: &Message) -> String {
    let who = match message.origin {
        Origin::User => "you",
        Origin::Agent => "concierge",
    };
    match message.created_at {
        Some(at) => format!("[{}] {who}> {}", at.format("%H:%M"), message.text),
        None => format!("{who}> {}", message.text),
    }
}

// ABOUTME: Conversation background task — one Gemini call per user ask.
// ABOUTME: Owns the wire history; substitutes fixed fallback text on failure.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::assistant::client::{AssistantClient, ChatTurn};
use crate::assistant::{FALLBACK_UNCLEAR, FALLBACK_UNREACHABLE, WELCOME_MESSAGE};
use crate::tui::state::{AssistantEvent, UserEvent};

/// Bundled parameters for the conversation loop.
pub struct ConvoParams {
    pub client: Arc<dyn AssistantClient>,
}

/// Run the conversation loop until the user quits or the channel closes.
///
/// Processing is strictly serial: each ask runs to completion (success or
/// failure) before the next is received, so reply order always matches ask
/// order. Every ask yields exactly one Reply event.
pub async fn run_convo_loop(
    params: ConvoParams,
    mut user_rx: mpsc::Receiver<UserEvent>,
    assistant_tx: mpsc::Sender<AssistantEvent>,
) {
    // The history the model sees starts with the same welcome the user sees.
    let mut history: Vec<ChatTurn> = vec![ChatTurn::model(WELCOME_MESSAGE)];

    loop {
        let event = match user_rx.recv().await {
            Some(e) => e,
            None => break,
        };

        match event {
            UserEvent::Quit => break,
            UserEvent::Ask(text) => {
                // History excludes the input being sent; it rides separately.
                let reply = match params.client.generate(&text, &history).await {
                    Ok(t) if t.trim().is_empty() => FALLBACK_UNCLEAR.to_string(),
                    Ok(t) => t,
                    Err(_) => FALLBACK_UNREACHABLE.to_string(),
                };

                history.push(ChatTurn::user(text));
                history.push(ChatTurn::model(reply.clone()));

                if assistant_tx
                    .send(AssistantEvent::Reply(reply))
                    .await
                    .is_err()
                {
                    break;
                }
            }
        }
    }
}

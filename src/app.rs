// ABOUTME: App orchestrator — wires config, Gemini client, conversation task, and TUI.
// ABOUTME: Runs the crossterm event loop and applies input-result effects.

use std::io::Write;
use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::assistant::client::AssistantClient;
use crate::assistant::{ConvoParams, GeminiClient, run_convo_loop};
use crate::catalog;
use crate::config::Config;
use crate::counter::MalaCounter;
use crate::prompt::InstructionBuilder;
use crate::session::{Session, SessionStore};
use crate::tui::input::{InputResult, handle_key};
use crate::tui::state::{AssistantEvent, MessageRole, TuiState, UserEvent};
use crate::tui::ui;

/// Top-level application that orchestrates all subsystems.
pub struct App {
    config: Config,
}

impl App {
    /// Create a new app with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the application: set up subsystems, launch the conversation task,
    /// and drive the TUI until quit.
    pub async fn run(self) -> anyhow::Result<()> {
        // Load local .env if present, then the home-dir secrets.
        let _ = dotenvy::dotenv();
        let _ = dotenvy::from_path(Config::secrets_env_path());

        let instruction = {
            let mut builder = InstructionBuilder::new();
            builder.load_override();
            builder.build()
        };

        let client: Arc<dyn AssistantClient> = Arc::new(GeminiClient::from_env(
            &self.config.assistant.base_url,
            &self.config.assistant.model,
            instruction,
            self.config.assistant.temperature,
        )?);

        let deities = catalog::load_catalog();
        let store = SessionStore::open_default();
        let sessions = store.load();
        let counter = MalaCounter::new(
            deities,
            self.config.practice.targets.clone(),
            self.config.practice.default_target,
        );
        let state = TuiState::new(counter, sessions, self.config.assistant.model.clone());

        // Channels for TUI <-> conversation task communication.
        let (user_tx, user_rx) = mpsc::channel::<UserEvent>(16);
        let (assistant_tx, assistant_rx) = mpsc::channel::<AssistantEvent>(16);

        let convo_handle = tokio::spawn(run_convo_loop(
            ConvoParams { client },
            user_rx,
            assistant_tx,
        ));

        let terminal = ratatui::init();
        let result = run_event_loop(terminal, state, &store, &user_tx, assistant_rx).await;
        ratatui::restore();

        // Signal the conversation task to quit and wait for it.
        let _ = user_tx.send(UserEvent::Quit).await;
        drop(user_tx);
        let _ = convo_handle.await;

        result
    }
}

/// Drive the TUI: redraw, process terminal events, and apply assistant replies.
async fn run_event_loop(
    mut terminal: ratatui::DefaultTerminal,
    mut state: TuiState,
    store: &SessionStore,
    user_tx: &mpsc::Sender<UserEvent>,
    mut assistant_rx: mpsc::Receiver<AssistantEvent>,
) -> anyhow::Result<()> {
    let mut events = EventStream::new();

    loop {
        terminal.draw(|frame| ui::render(frame, &mut state))?;

        tokio::select! {
            maybe_event = events.next() => {
                let Some(event) = maybe_event else { break };
                let Event::Key(key) = event? else { continue };
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match handle_key(&mut state, key) {
                    InputResult::None => {}
                    InputResult::Quit => break,
                    InputResult::Ask(text) => {
                        let _ = user_tx.send(UserEvent::Ask(text)).await;
                    }
                    InputResult::TargetReached => {
                        ring_bell();
                    }
                    InputResult::Finished(finished) => {
                        let session = Session::new(finished.deity, finished.count);
                        match store.append(session.clone()) {
                            Ok(updated) => state.record_finished(updated),
                            Err(e) => {
                                // Persistence failed; keep the session in memory
                                // so the views stay consistent for this run.
                                eprintln!("Warning: failed to save session: {}", e);
                                let mut updated = state.sessions.clone();
                                updated.insert(0, session);
                                state.record_finished(updated);
                            }
                        }
                    }
                }
            }
            maybe_reply = assistant_rx.recv() => {
                let Some(AssistantEvent::Reply(text)) = maybe_reply else { break };
                state.push_message(MessageRole::Assistant, text);
                state.thinking = false;
            }
        }
    }

    Ok(())
}

/// Best-effort completion signal: the terminal bell, silently absent where
/// the terminal ignores it.
fn ring_bell() {
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(b"\x07");
    let _ = stdout.flush();
}

// ABOUTME: TUI state types — active view, mood, chat transcript, input buffer.
// ABOUTME: Bridges the conversation task to the display via event enums.

use chrono::{DateTime, Local};

use crate::catalog::Mood;
use crate::counter::MalaCounter;
use crate::session::{Session, store};

/// The four mutually exclusive screens, all reachable from each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Jaap,
    Assistant,
    Stats,
}

impl Tab {
    /// Navigation order for Tab-key cycling.
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Jaap, Tab::Assistant, Tab::Stats];

    /// Next tab in navigation order, wrapping.
    pub fn next(&self) -> Tab {
        let pos = Tab::ALL.iter().position(|t| t == self).unwrap_or(0);
        Tab::ALL[(pos + 1) % Tab::ALL.len()]
    }

    /// Label shown in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Jaap => "Jaap",
            Tab::Assistant => "Assistant",
            Tab::Stats => "Stats",
        }
    }
}

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
}

/// A single message in the assistant transcript.
#[derive(Debug)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

/// Events sent from the TUI to the conversation task.
pub enum UserEvent {
    /// User submitted a chat message.
    Ask(String),
    /// User requested to quit.
    Quit,
}

/// Events sent from the conversation task to the TUI.
pub enum AssistantEvent {
    /// The one reply produced for an ask (model text or fallback).
    Reply(String),
}

/// Full TUI application state.
pub struct TuiState {
    pub tab: Tab,
    pub mood: Option<Mood>,
    pub counter: MalaCounter,
    pub sessions: Vec<Session>,
    pub total_count: u64,
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub cursor_pos: usize,
    pub scroll_offset: u16,
    /// In-flight guard: exactly one ask at a time; extra sends are dropped.
    pub thinking: bool,
    pub model_name: String,
}

impl TuiState {
    /// Create the initial state with a seeded welcome message.
    pub fn new(counter: MalaCounter, sessions: Vec<Session>, model_name: String) -> Self {
        let total_count = store::total_count(&sessions);
        let mut state = Self {
            tab: Tab::Home,
            mood: None,
            counter,
            sessions,
            total_count,
            messages: Vec::new(),
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: 0,
            thinking: false,
            model_name,
        };
        state.push_message(MessageRole::Assistant, crate::assistant::WELCOME_MESSAGE);
        state
    }

    /// Append a message to the transcript and reset scroll to bottom.
    pub fn push_message(&mut self, role: MessageRole, content: impl Into<String>) {
        self.messages.push(ChatMessage {
            role,
            content: content.into(),
            timestamp: Local::now(),
        });
        self.scroll_offset = 0;
    }

    /// Select a mood and route straight to the assistant view.
    pub fn select_mood(&mut self, mood: Mood) {
        self.mood = Some(mood);
        self.tab = Tab::Assistant;
    }

    /// Record a finished session: prepend it, bump the total, go home, and
    /// settle the mood to post-practice calm.
    pub fn record_finished(&mut self, sessions: Vec<Session>) {
        self.total_count = store::total_count(&sessions);
        self.sessions = sessions;
        self.tab = Tab::Home;
        self.mood = Some(Mood::Peaceful);
    }

    /// Submit the current input buffer. Returns the trimmed text if non-empty.
    pub fn submit_input(&mut self) -> Option<String> {
        let trimmed = self.input.trim().to_string();
        if trimmed.is_empty() {
            return None;
        }
        self.input.clear();
        self.cursor_pos = 0;
        Some(trimmed)
    }

    /// Clamp the cursor position to the valid character range of the input buffer.
    pub fn clamp_cursor(&mut self) {
        self.cursor_pos = self.cursor_pos.min(self.input_char_len());
    }

    /// Return the current cursor byte index in the UTF-8 input buffer.
    pub fn cursor_byte_index(&self) -> usize {
        char_index_to_byte_index(&self.input, self.cursor_pos)
    }

    /// Return the total number of characters in the input buffer.
    pub fn input_char_len(&self) -> usize {
        self.input.chars().count()
    }

    /// Insert a character at the cursor and advance by one character.
    pub fn insert_char_at_cursor(&mut self, c: char) {
        self.clamp_cursor();
        let byte_index = self.cursor_byte_index();
        self.input.insert(byte_index, c);
        self.cursor_pos += 1;
    }

    /// Delete the character before the cursor (backspace behavior).
    pub fn backspace_char(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos == 0 {
            return;
        }

        let end = self.cursor_byte_index();
        let start = char_index_to_byte_index(&self.input, self.cursor_pos - 1);
        self.input.replace_range(start..end, "");
        self.cursor_pos -= 1;
    }

    /// Delete the character at the cursor (delete behavior).
    pub fn delete_char_at_cursor(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos >= self.input_char_len() {
            return;
        }

        let start = self.cursor_byte_index();
        let end = char_index_to_byte_index(&self.input, self.cursor_pos + 1);
        self.input.replace_range(start..end, "");
    }

    /// Move cursor one character to the left.
    pub fn move_cursor_left(&mut self) {
        self.clamp_cursor();
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    /// Move cursor one character to the right.
    pub fn move_cursor_right(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos < self.input_char_len() {
            self.cursor_pos += 1;
        }
    }

    /// Move cursor to start of input.
    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    /// Move cursor to end of input.
    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.input_char_len();
    }
}

fn char_index_to_byte_index(s: &str, char_index: usize) -> usize {
    if char_index == 0 {
        return 0;
    }

    match s.char_indices().nth(char_index) {
        Some((idx, _)) => idx,
        None => s.len(),
    }
}

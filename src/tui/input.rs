// ABOUTME: Keyboard input handling for the TUI — translates key events into actions.
// ABOUTME: Routes per active view: mood picks, mala taps, chat editing, navigation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::catalog::Mood;
use crate::counter::{FinishedSession, Pulse};
use crate::tui::state::{MessageRole, Tab, TuiState};

/// The result of processing a key event.
#[derive(Debug, PartialEq)]
pub enum InputResult {
    /// No action needed beyond state mutation.
    None,
    /// User submitted a chat message for the assistant.
    Ask(String),
    /// The tap that reached the target; ring the completion signal.
    TargetReached,
    /// User completed a counting session with a positive count.
    Finished(FinishedSession),
    /// User wants to quit.
    Quit,
}

/// Process a key event against the current TUI state and return the resulting action.
pub fn handle_key(state: &mut TuiState, key: KeyEvent) -> InputResult {
    // Ctrl+C always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputResult::Quit;
    }

    // PageUp/PageDown always scroll the active content.
    if handle_scroll_key(state, key.code) {
        return InputResult::None;
    }

    // Tab cycles through the four views from anywhere.
    if key.code == KeyCode::Tab {
        state.tab = state.tab.next();
        return InputResult::None;
    }

    match state.tab {
        Tab::Home => handle_home_key(state, key),
        Tab::Jaap => handle_jaap_key(state, key),
        Tab::Assistant => handle_assistant_key(state, key),
        Tab::Stats => handle_stats_key(state, key),
    }
}

fn handle_scroll_key(state: &mut TuiState, key: KeyCode) -> bool {
    match key {
        KeyCode::PageUp => {
            state.scroll_offset = state.scroll_offset.saturating_add(10);
            true
        }
        KeyCode::PageDown => {
            state.scroll_offset = state.scroll_offset.saturating_sub(10);
            true
        }
        _ => false,
    }
}

/// Home view: mood digits route into the assistant; letters jump to views.
fn handle_home_key(state: &mut TuiState, key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Char(c @ '1'..='4') => {
            let idx = (c as u8 - b'1') as usize;
            state.select_mood(Mood::ALL[idx]);
            InputResult::None
        }
        KeyCode::Char('j') => {
            state.tab = Tab::Jaap;
            InputResult::None
        }
        KeyCode::Char('a') => {
            state.tab = Tab::Assistant;
            InputResult::None
        }
        KeyCode::Char('s') => {
            state.tab = Tab::Stats;
            InputResult::None
        }
        KeyCode::Esc | KeyCode::Char('q') => InputResult::Quit,
        _ => InputResult::None,
    }
}

/// Jaap view: space taps the mala, letters adjust deity/target, c completes.
fn handle_jaap_key(state: &mut TuiState, key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => match state.counter.tap() {
            Pulse::TargetReached => InputResult::TargetReached,
            Pulse::Counted => InputResult::None,
        },
        KeyCode::Char('d') => {
            state.counter.next_deity();
            InputResult::None
        }
        KeyCode::Char('t') => {
            state.counter.next_target();
            InputResult::None
        }
        KeyCode::Char('c') => match state.counter.complete() {
            Some(finished) => InputResult::Finished(finished),
            None => InputResult::None,
        },
        KeyCode::Esc => {
            state.tab = Tab::Home;
            InputResult::None
        }
        _ => InputResult::None,
    }
}

/// Assistant view: line editing plus Enter-to-send with the in-flight guard.
fn handle_assistant_key(state: &mut TuiState, key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Enter => {
            // Drop sends while a request is in flight; nothing is queued.
            if state.thinking {
                return InputResult::None;
            }
            match state.submit_input() {
                Some(text) => {
                    state.push_message(MessageRole::User, text.clone());
                    state.thinking = true;
                    InputResult::Ask(text)
                }
                None => InputResult::None,
            }
        }
        KeyCode::Char(c) => {
            state.insert_char_at_cursor(c);
            InputResult::None
        }
        KeyCode::Backspace => {
            state.backspace_char();
            InputResult::None
        }
        KeyCode::Delete => {
            state.delete_char_at_cursor();
            InputResult::None
        }
        KeyCode::Left => {
            state.move_cursor_left();
            InputResult::None
        }
        KeyCode::Right => {
            state.move_cursor_right();
            InputResult::None
        }
        KeyCode::Home => {
            state.move_cursor_home();
            InputResult::None
        }
        KeyCode::End => {
            state.move_cursor_end();
            InputResult::None
        }
        KeyCode::Up => {
            state.scroll_offset = state.scroll_offset.saturating_add(1);
            InputResult::None
        }
        KeyCode::Down => {
            state.scroll_offset = state.scroll_offset.saturating_sub(1);
            InputResult::None
        }
        KeyCode::Esc => {
            state.tab = Tab::Home;
            InputResult::None
        }
        _ => InputResult::None,
    }
}

fn handle_stats_key(state: &mut TuiState, key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Esc => {
            state.tab = Tab::Home;
            InputResult::None
        }
        _ => InputResult::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Deity;
    use crate::counter::MalaCounter;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_state() -> TuiState {
        let deities = vec![
            Deity {
                name: "Ram".to_string(),
                mantra: "श्री राम".to_string(),
            },
            Deity {
                name: "Shiva".to_string(),
                mantra: "ॐ नमः शिवाय".to_string(),
            },
        ];
        let counter = MalaCounter::new(deities, vec![3, 11], 3);
        TuiState::new(counter, Vec::new(), "gemini-test".to_string())
    }

    #[test]
    fn ctrl_c_quits_from_any_view() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for tab in Tab::ALL {
            let mut state = test_state();
            state.tab = tab;
            assert_eq!(handle_key(&mut state, key), InputResult::Quit);
        }
    }

    #[test]
    fn tab_key_cycles_views() {
        let mut state = test_state();
        handle_key(&mut state, make_key(KeyCode::Tab));
        assert_eq!(state.tab, Tab::Jaap);
        handle_key(&mut state, make_key(KeyCode::Tab));
        assert_eq!(state.tab, Tab::Assistant);
    }

    #[test]
    fn mood_digit_routes_to_assistant_regardless_of_prior_view() {
        let mut state = test_state();
        let result = handle_key(&mut state, make_key(KeyCode::Char('1')));
        assert_eq!(result, InputResult::None);
        assert_eq!(state.mood, Some(Mood::Stressed));
        assert_eq!(state.tab, Tab::Assistant);
    }

    #[test]
    fn all_mood_digits_map_in_display_order() {
        for (digit, mood) in ('1'..='4').zip(Mood::ALL) {
            let mut state = test_state();
            handle_key(&mut state, make_key(KeyCode::Char(digit)));
            assert_eq!(state.mood, Some(mood));
        }
    }

    #[test]
    fn space_taps_the_mala() {
        let mut state = test_state();
        state.tab = Tab::Jaap;
        assert_eq!(
            handle_key(&mut state, make_key(KeyCode::Char(' '))),
            InputResult::None
        );
        assert_eq!(state.counter.count(), 1);
    }

    #[test]
    fn target_tap_reports_the_signal_once() {
        let mut state = test_state();
        state.tab = Tab::Jaap;
        handle_key(&mut state, make_key(KeyCode::Char(' ')));
        handle_key(&mut state, make_key(KeyCode::Char(' ')));
        assert_eq!(
            handle_key(&mut state, make_key(KeyCode::Char(' '))),
            InputResult::TargetReached
        );
        assert_eq!(
            handle_key(&mut state, make_key(KeyCode::Char(' '))),
            InputResult::None,
            "no re-trigger past target"
        );
    }

    #[test]
    fn complete_with_zero_count_does_nothing() {
        let mut state = test_state();
        state.tab = Tab::Jaap;
        assert_eq!(
            handle_key(&mut state, make_key(KeyCode::Char('c'))),
            InputResult::None
        );
    }

    #[test]
    fn complete_emits_finished_session() {
        let mut state = test_state();
        state.tab = Tab::Jaap;
        for _ in 0..5 {
            handle_key(&mut state, make_key(KeyCode::Char(' ')));
        }
        let result = handle_key(&mut state, make_key(KeyCode::Char('c')));
        match result {
            InputResult::Finished(finished) => {
                assert_eq!(finished.deity, "Ram");
                assert_eq!(finished.count, 5);
            }
            other => panic!("expected Finished, got {:?}", other),
        }
        assert_eq!(state.counter.count(), 0);
    }

    #[test]
    fn deity_and_target_keys_cycle_without_reset() {
        let mut state = test_state();
        state.tab = Tab::Jaap;
        handle_key(&mut state, make_key(KeyCode::Char(' ')));
        handle_key(&mut state, make_key(KeyCode::Char('d')));
        handle_key(&mut state, make_key(KeyCode::Char('t')));
        assert_eq!(state.counter.deity().name, "Shiva");
        assert_eq!(state.counter.target(), 11);
        assert_eq!(state.counter.count(), 1);
    }

    #[test]
    fn typing_in_assistant_appends_to_input() {
        let mut state = test_state();
        state.tab = Tab::Assistant;
        handle_key(&mut state, make_key(KeyCode::Char('h')));
        handle_key(&mut state, make_key(KeyCode::Char('i')));
        assert_eq!(state.input, "hi");
        assert_eq!(state.cursor_pos, 2);
    }

    #[test]
    fn enter_sends_and_sets_thinking() {
        let mut state = test_state();
        state.tab = Tab::Assistant;
        state.input = "hello".to_string();
        state.cursor_pos = 5;
        let result = handle_key(&mut state, make_key(KeyCode::Enter));
        assert_eq!(result, InputResult::Ask("hello".to_string()));
        assert!(state.thinking);
        assert_eq!(state.input, "");
        // The user message landed in the transcript after the welcome.
        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[1].role, MessageRole::User);
    }

    #[test]
    fn blank_sends_leave_transcript_unchanged() {
        let mut state = test_state();
        state.tab = Tab::Assistant;
        for input in ["", "   "] {
            state.input = input.to_string();
            let result = handle_key(&mut state, make_key(KeyCode::Enter));
            assert_eq!(result, InputResult::None);
            assert_eq!(state.messages.len(), 1);
            assert!(!state.thinking);
        }
    }

    #[test]
    fn sends_while_thinking_are_dropped_not_queued() {
        let mut state = test_state();
        state.tab = Tab::Assistant;
        state.thinking = true;
        state.input = "another question".to_string();
        state.cursor_pos = state.input_char_len();
        let result = handle_key(&mut state, make_key(KeyCode::Enter));
        assert_eq!(result, InputResult::None);
        assert_eq!(state.messages.len(), 1);
        // The draft stays in the buffer for a manual re-send.
        assert_eq!(state.input, "another question");
    }

    #[test]
    fn esc_returns_home_from_inner_views() {
        for tab in [Tab::Jaap, Tab::Assistant, Tab::Stats] {
            let mut state = test_state();
            state.tab = tab;
            assert_eq!(
                handle_key(&mut state, make_key(KeyCode::Esc)),
                InputResult::None
            );
            assert_eq!(state.tab, Tab::Home);
        }
    }

    #[test]
    fn esc_on_home_quits() {
        let mut state = test_state();
        assert_eq!(
            handle_key(&mut state, make_key(KeyCode::Esc)),
            InputResult::Quit
        );
    }

    #[test]
    fn page_keys_scroll_in_assistant() {
        let mut state = test_state();
        state.tab = Tab::Assistant;
        handle_key(&mut state, make_key(KeyCode::PageUp));
        assert_eq!(state.scroll_offset, 10);
        handle_key(&mut state, make_key(KeyCode::PageDown));
        assert_eq!(state.scroll_offset, 0);
    }
}

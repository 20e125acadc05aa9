// ABOUTME: Chat widget — renders the assistant transcript into styled ratatui Lines.
// ABOUTME: User and assistant messages carry distinct prefixes and a dim timestamp.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::state::{ChatMessage, MessageRole};

/// Render the transcript into styled Lines for display.
pub fn render_chat_lines(messages: &[ChatMessage]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (idx, msg) in messages.iter().enumerate() {
        // Blank separator line between message groups.
        if idx > 0 {
            lines.push(Line::from(""));
        }

        let (prefix, prefix_style) = match msg.role {
            MessageRole::User => (
                "❯ ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            MessageRole::Assistant => (
                "🪷 ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        };

        let content_lines: Vec<&str> = msg.content.split('\n').collect();
        for (i, text) in content_lines.iter().enumerate() {
            if i == 0 {
                lines.push(Line::from(vec![
                    Span::styled(prefix, prefix_style),
                    Span::raw(text.to_string()),
                    Span::styled(
                        format!("  {}", msg.timestamp.format("%H:%M")),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
            } else {
                lines.push(Line::from(Span::raw(text.to_string())));
            }
        }
    }

    lines
}

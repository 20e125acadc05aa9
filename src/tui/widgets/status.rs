// ABOUTME: Navigation and status bar widgets — view tabs, model, totals, thinking flag.
// ABOUTME: Rendered as single-line summaries at the bottom of the TUI.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::state::Tab;

/// Render the navigation bar with the active view highlighted.
pub fn nav_line(active: Tab) -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut spans = vec![Span::styled(" ", dim)];
    for (i, tab) in Tab::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", dim));
        }
        let style = if *tab == active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            dim
        };
        spans.push(Span::styled(tab.label(), style));
    }
    Line::from(spans)
}

/// Render the status bar with model, total counts, and the in-flight marker.
pub fn status_line(model: &str, total_count: u64, thinking: bool) -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut spans = vec![
        Span::styled(format!(" {} ", model), Style::default().fg(Color::Cyan)),
        Span::styled("| ", dim),
        Span::styled(
            format!("{} counts ", total_count),
            Style::default().fg(Color::White),
        ),
    ];

    if thinking {
        spans.push(Span::styled("| ", dim));
        spans.push(Span::styled(
            "thinking... ",
            Style::default().fg(Color::Yellow),
        ));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn nav_line_lists_all_tabs() {
        let text = line_text(&nav_line(Tab::Home));
        for tab in Tab::ALL {
            assert!(text.contains(tab.label()));
        }
    }

    #[test]
    fn nav_line_highlights_active_tab() {
        let line = nav_line(Tab::Assistant);
        let active = line
            .spans
            .iter()
            .find(|s| s.content == "Assistant")
            .unwrap();
        assert_eq!(active.style.fg, Some(Color::Yellow));
        let inactive = line.spans.iter().find(|s| s.content == "Home").unwrap();
        assert_eq!(inactive.style.fg, Some(Color::DarkGray));
    }

    #[test]
    fn status_line_shows_thinking() {
        let text = line_text(&status_line("gemini-3-flash-preview", 120, true));
        assert!(text.contains("gemini-3-flash-preview"));
        assert!(text.contains("120 counts"));
        assert!(text.contains("thinking..."));
    }

    #[test]
    fn status_line_without_thinking() {
        let text = line_text(&status_line("gemini-3-flash-preview", 0, false));
        assert!(!text.contains("thinking"));
    }
}

// ABOUTME: Home widget — greeting, total count card, mood grid, recent sessions.
// ABOUTME: The mood grid doubles as the router into the assistant view.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::catalog::Mood;
use crate::session::Session;

/// How many recent sessions the home view previews.
const RECENT_PREVIEW: usize = 3;

/// Render the home view content.
pub fn home_lines(
    total_count: u64,
    mood: Option<Mood>,
    sessions: &[Session],
) -> Vec<Line<'static>> {
    let accent = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(Span::styled("Namaste 🙏", accent)),
        Line::from(Span::styled(
            "Explore your spiritual peace today.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Total Counts: ", dim),
            Span::styled(total_count.to_string(), accent),
        ]),
        Line::from(Span::styled(
            "Hindi: निरंतर अभ्यास ही शांति की कुंजी है।",
            dim,
        )),
        Line::from(Span::styled(
            "English: Consistent practice is the key to peace.",
            dim,
        )),
        Line::from(""),
        Line::from(Span::styled("How are you feeling today?", accent)),
    ];

    for (i, m) in Mood::ALL.iter().enumerate() {
        let selected = mood == Some(*m);
        let style = if selected {
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let marker = if selected { "●" } else { "○" };
        lines.push(Line::from(Span::styled(
            format!("  [{}] {} {} ({})", i + 1, marker, m.hindi(), m.label()),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Recent Sessions", accent)));
    if sessions.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No sessions yet. Start your first Jaap!",
            dim,
        )));
    } else {
        for s in sessions.iter().take(RECENT_PREVIEW) {
            lines.push(Line::from(vec![
                Span::styled(format!("  {} ", s.deity), Style::default().fg(Color::White)),
                Span::styled(format!("+{}", s.count), accent),
                Span::styled(format!("  {}", s.timestamp.format("%Y-%m-%d")), dim),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[1-4] mood  [j] jaap  [a] assistant  [s] stats  [q] quit",
        dim,
    )));

    lines
}

// ABOUTME: Jaap widget — the digital mala: mantra, big count, target, key hints.
// ABOUTME: Shows a celebration line once the count has reached the target.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::counter::MalaCounter;

/// Render the counting view content.
pub fn jaap_lines(counter: &MalaCounter) -> Vec<Line<'static>> {
    let accent = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(Span::styled("Digital Mala", accent)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Deity: ", dim),
            Span::styled(
                counter.deity().name.clone(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(Span::styled(
            counter.deity().mantra.clone(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(vec![
            Span::styled("Target: ", dim),
            Span::styled(counter.target().to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("        {}", counter.count()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("        JAPA", dim)),
        Line::from(""),
    ];

    if counter.count() >= counter.target() {
        lines.push(Line::from(Span::styled(
            "✨ Target reached! Complete when ready",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Hindi: प्रत्येक जप के साथ ईश्वर की कृपा महसूस करें।",
        dim,
    )));
    lines.push(Line::from(Span::styled(
        "English: Feel the divine grace with every chant.",
        dim,
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[space] chant  [d] deity  [t] target  [c] complete  [esc] home",
        dim,
    )));

    lines
}

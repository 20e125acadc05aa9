// ABOUTME: Stats widget — daily average, streak, and a 7-day activity sparkline.
// ABOUTME: Numbers come from PracticeStats, computed over the stored sessions.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::stats::PracticeStats;

const BAR_STEPS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render the stats view content.
pub fn stats_lines(stats: &PracticeStats) -> Vec<Line<'static>> {
    let accent = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);

    vec![
        Line::from(Span::styled("Your Progress", accent)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Average Daily: ", dim),
            Span::styled(
                stats.daily_average.to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Current Streak: ", dim),
            Span::styled(
                format!("{} Days", stats.streak_days),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("Activity Insights", accent)),
        Line::from(Span::styled(
            activity_bars(&stats.week_activity),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            stats.week_labels.iter().map(|c| format!("{c} ")).collect::<String>(),
            dim,
        )),
        Line::from(""),
        Line::from(Span::styled("[esc] home", dim)),
    ]
}

/// Scale the per-day counts into one sparkline character each.
fn activity_bars(activity: &[u64; 7]) -> String {
    let max = activity.iter().copied().max().unwrap_or(0);
    activity
        .iter()
        .map(|&v| {
            if max == 0 || v == 0 {
                ' '
            } else {
                let idx = ((v * (BAR_STEPS.len() as u64 - 1)).div_ceil(max)) as usize;
                BAR_STEPS[idx.min(BAR_STEPS.len() - 1)]
            }
        })
        .flat_map(|c| [c, ' '])
        .collect()
}

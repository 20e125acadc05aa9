// ABOUTME: Main TUI rendering — assembles header, active view, nav bar, and status bar.
// ABOUTME: Splits the terminal frame into vertical chunks and delegates to widgets.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::stats::PracticeStats;
use crate::tui::state::{Tab, TuiState};
use crate::tui::widgets::chat::render_chat_lines;
use crate::tui::widgets::counter::jaap_lines;
use crate::tui::widgets::home::home_lines;
use crate::tui::widgets::stats::stats_lines;
use crate::tui::widgets::status::{nav_line, status_line};

/// Render the full TUI screen layout to the given frame.
pub fn render(frame: &mut Frame, state: &mut TuiState) {
    let area = frame.area();
    let is_assistant = state.tab == Tab::Assistant;

    let constraints = if is_assistant {
        vec![
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Chat area
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Nav bar
            Constraint::Length(1), // Status bar
        ]
    } else {
        vec![
            Constraint::Length(1), // Header
            Constraint::Min(3),    // View content
            Constraint::Length(1), // Nav bar
            Constraint::Length(1), // Status bar
        ]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    // Header
    let header = Line::from(Span::styled(
        " shanti",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let content_chunk = chunks[1];
    match state.tab {
        Tab::Home => {
            let paragraph = Paragraph::new(home_lines(
                state.total_count,
                state.mood,
                &state.sessions,
            ))
            .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, content_chunk);
        }
        Tab::Jaap => {
            let paragraph = Paragraph::new(jaap_lines(&state.counter)).wrap(Wrap { trim: false });
            frame.render_widget(paragraph, content_chunk);
        }
        Tab::Stats => {
            let stats = PracticeStats::from_sessions(&state.sessions);
            let paragraph = Paragraph::new(stats_lines(&stats)).wrap(Wrap { trim: false });
            frame.render_widget(paragraph, content_chunk);
        }
        Tab::Assistant => {
            render_assistant(frame, state, content_chunk, chunks[2]);
        }
    }

    let (nav_chunk, status_chunk) = if is_assistant {
        (chunks[3], chunks[4])
    } else {
        (chunks[2], chunks[3])
    };

    frame.render_widget(Paragraph::new(nav_line(state.tab)), nav_chunk);
    frame.render_widget(
        Paragraph::new(status_line(
            &state.model_name,
            state.total_count,
            state.thinking,
        )),
        status_chunk,
    );
}

/// Render the assistant view: scrollable transcript plus the input line.
fn render_assistant(
    frame: &mut Frame,
    state: &mut TuiState,
    chat_chunk: ratatui::layout::Rect,
    input_chunk: ratatui::layout::Rect,
) {
    let chat_lines = render_chat_lines(&state.messages);
    let visible_height = chat_chunk.height;

    // Use ratatui's own line_count() for an accurate wrapped line count that
    // matches its internal rendering, so scroll clamping never hides the
    // bottom of the transcript.
    let chat_paragraph = Paragraph::new(chat_lines).wrap(Wrap { trim: false });
    let total_lines = chat_paragraph.line_count(chat_chunk.width) as u16;
    let max_scroll = total_lines.saturating_sub(visible_height);

    if state.scroll_offset > max_scroll {
        state.scroll_offset = max_scroll;
    }

    // scroll_offset is lines scrolled up from the bottom (0 = at bottom).
    let scroll = max_scroll.saturating_sub(state.scroll_offset);
    frame.render_widget(chat_paragraph.scroll((scroll, 0)), chat_chunk);

    // Input area with the in-flight marker in the border title.
    let mut input_block = Block::default().borders(Borders::TOP | Borders::BOTTOM);
    if state.thinking {
        input_block = input_block.title(Span::styled(
            " thinking... ",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let input = Paragraph::new(Span::raw(state.input.clone())).block(input_block);
    frame.render_widget(input, input_chunk);

    if input_chunk.width > 0 && input_chunk.height > 1 {
        state.clamp_cursor();

        // Visual (display) width of the text before the cursor.
        let prefix: String = state.input.chars().take(state.cursor_pos).collect();
        let visual_col = UnicodeWidthStr::width(prefix.as_str());

        let max_visual_col = input_chunk.width.saturating_sub(1) as usize;
        let clamped_visual_col = visual_col.min(max_visual_col);

        let cursor_x = input_chunk.x.saturating_add(clamped_visual_col as u16);
        // +1 for the top border.
        let cursor_y = input_chunk.y.saturating_add(1);
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

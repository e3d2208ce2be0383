//! Help overlay listing keys and commands

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::quiz_panel::centered_rect;

/// Draw the help overlay
pub fn draw(frame: &mut Frame, area: Rect) {
    let overlay_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let entries: &[(&str, &str)] = &[
        ("j/k", "scroll content or move tree selection"),
        ("Tab", "switch between curriculum and content"),
        ("Enter", "open topic / expand module (in tree)"),
        ("n / p", "next / previous topic (global order)"),
        ("m", "toggle completion for the current topic"),
        ("c", "open the topic's quick check"),
        ("[", "toggle the curriculum panel"),
        ("g / G", "jump to top / bottom"),
        ("Ctrl-d/u", "half page down / up"),
        (":goto <id>", "jump to a topic by id"),
        (":progress", "show completion percentage"),
        (":reset", "clear all saved progress"),
        (":q", "quit"),
    ];

    let mut lines = vec![Line::from("")];
    for (key, description) in entries {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<12}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(*description, Style::default().fg(Color::Gray)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

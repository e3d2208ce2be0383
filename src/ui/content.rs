//! Topic content panel
//!
//! Displays the current topic's text as wrapped plain lines with a scrollbar.
//! Markdown is treated as opaque text; there is no inline rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::state::AppState;
use crate::config::Config;
use crate::course::{Course, Sequence};
use crate::progress::ProgressStore;

use super::topic_footer;

/// Draw the content panel
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    state: &mut AppState,
    course: &Course,
    progress: &ProgressStore,
    config: &Config,
    focused: bool,
) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let current_topic =
        state.current_topic_id.as_deref().and_then(|id| course.topic_by_id(id));

    let title = match current_topic {
        Some(topic) => format!(" {} ", topic.title),
        None => " Content ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(topic) = current_topic else {
        draw_welcome(frame, inner, course, config);
        return;
    };
    let topic_id = topic.id.clone();

    // Reserve the bottom for the footer and 1 column for the scrollbar
    let footer_height = topic_footer::FOOTER_HEIGHT.min(inner.height);
    let body = Rect { height: inner.height - footer_height, ..inner };
    let footer_area = Rect { y: inner.y + body.height, height: footer_height, ..inner };

    let content_width = body.width.saturating_sub(2) as usize;
    let content_area = Rect { width: body.width.saturating_sub(1), ..body };
    let scrollbar_x = body.x + body.width.saturating_sub(1);

    let mut lines: Vec<Line> = Vec::new();

    // Header with both numbering schemes: the module-local display label
    // and the topic's global rank in the course sequence.
    let sequence = Sequence::of(course);
    if let Some(entry) = sequence.by_id(&topic_id) {
        lines.push(Line::from(Span::styled(
            format!(
                "Module {} \u{00b7} Topic {}  \u{2014}  Topic {} of {}",
                entry.module.number,
                entry.topic.number,
                entry.global_number,
                sequence.len()
            ),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    for raw_line in topic.content.lines() {
        if raw_line.is_empty() {
            lines.push(Line::from(""));
            continue;
        }
        for wrapped in textwrap::wrap(raw_line, content_width.max(20)) {
            let style = if raw_line.starts_with('#') {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(Span::styled(wrapped.into_owned(), style)));
        }
    }

    let total_lines = lines.len();
    let visible_height = body.height as usize;

    // Update state with content metrics for scroll clamping
    state.content.total_lines = total_lines;
    state.content.visible_height = visible_height;
    state.content.clamp_scroll();

    let scroll_offset = state.content.scroll_offset;
    let end = (scroll_offset + visible_height).min(total_lines);
    let visible_lines: Vec<Line> =
        lines.into_iter().skip(scroll_offset).take(end.saturating_sub(scroll_offset)).collect();

    frame.render_widget(Paragraph::new(visible_lines), content_area);

    draw_scrollbar(frame, scrollbar_x, body.y, body.height, scroll_offset, total_lines);

    topic_footer::draw(frame, footer_area, course, progress, &topic_id);
}

/// Draw a scrollbar indicator
fn draw_scrollbar(
    frame: &mut Frame,
    x: u16,
    y: u16,
    height: u16,
    scroll_offset: usize,
    total_lines: usize,
) {
    if total_lines == 0 || height == 0 {
        return;
    }

    let height = height as usize;

    let visible_ratio = (height as f64 / total_lines as f64).min(1.0);
    let thumb_height = ((height as f64 * visible_ratio).ceil() as usize).max(1);

    let max_scroll = total_lines.saturating_sub(height / 2);
    let scroll_ratio = if total_lines <= height || max_scroll == 0 {
        0.0
    } else {
        scroll_offset as f64 / max_scroll as f64
    };
    let thumb_top = ((height - thumb_height) as f64 * scroll_ratio).round() as usize;

    for i in 0..height {
        let on_thumb = i >= thumb_top && i < thumb_top + thumb_height;
        let (ch, color) = if on_thumb { ("█", Color::Cyan) } else { ("░", Color::DarkGray) };
        let cell = Rect::new(x, y + i as u16, 1, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(ch, Style::default().fg(color))),
            cell,
        );
    }
}

/// Welcome screen when no topic is selected
fn draw_welcome(frame: &mut Frame, area: Rect, course: &Course, config: &Config) {
    let greeting = match &config.display_name {
        Some(name) => format!("Welcome back, {}!", name),
        None => "Welcome!".to_string(),
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            course.title.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(greeting, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(course.description.clone(), Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Select a topic from the curriculum, or press n to start from the beginning.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Press ? for help.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let para = Paragraph::new(text)
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(para, area);
}

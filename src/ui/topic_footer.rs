//! Topic footer with position, completion state, and key hints

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::course::{Course, Sequence};
use crate::progress::ProgressStore;

/// Height of the topic footer in lines
pub const FOOTER_HEIGHT: u16 = 3;

/// Draw the topic footer
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    course: &Course,
    progress: &ProgressStore,
    topic_id: &str,
) {
    if area.height < FOOTER_HEIGHT || area.width < 40 {
        return;
    }

    // Separator line
    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(area.width as usize),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(separator), Rect::new(area.x, area.y, area.width, 1));

    let sequence = Sequence::of(course);
    let position = match sequence.by_id(topic_id) {
        Some(entry) => format!("Topic {} of {}", entry.global_number, sequence.len()),
        None => String::new(),
    };

    let status = if progress.is_completed(topic_id) {
        Span::styled("\u{2713} completed", Style::default().fg(Color::Green))
    } else {
        Span::styled("\u{25cb} not completed", Style::default().fg(Color::DarkGray))
    };

    let status_line = Line::from(vec![
        Span::styled(position, Style::default().fg(Color::Gray)),
        Span::raw("    "),
        status,
    ]);
    frame.render_widget(
        Paragraph::new(status_line),
        Rect::new(area.x, area.y + 1, area.width, 1),
    );

    // Hint line
    let has_prev = sequence.previous(topic_id).is_some();
    let has_next = sequence.next(topic_id).is_some();

    let mut spans = Vec::new();
    if has_prev {
        spans.push(Span::styled("[p]", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(" prev  ", Style::default().fg(Color::Gray)));
    }
    if has_next {
        spans.push(Span::styled("[n]", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(" next  ", Style::default().fg(Color::Gray)));
    }
    spans.push(Span::styled("[m]", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(" toggle complete  ", Style::default().fg(Color::Gray)));

    if course.topic_by_id(topic_id).is_some_and(|t| t.has_quick_check()) {
        spans.push(Span::styled("[c]", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            " quick check",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect::new(area.x, area.y + 2, area.width, 1),
    );
}

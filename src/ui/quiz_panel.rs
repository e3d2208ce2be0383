//! Quick-check overlay component

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::quiz::QuizSession;

/// Draw the quick check as a centered overlay
pub fn draw(frame: &mut Frame, area: Rect, quiz: &QuizSession) {
    let overlay_area = centered_rect(70, 70, area);

    // Clear the background area
    frame.render_widget(Clear, overlay_area);

    let score = quiz.score();
    let title = format!(" Quick Check \u{2014} {}/{} correct ", score.correct, score.answered);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let Some(question) = quiz.current_question() else {
        let msg = Paragraph::new("This topic has no questions")
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(msg, inner);
        return;
    };

    let mut lines = Vec::new();

    // Question navigator: one dot per question, colored once revealed
    lines.push(navigator_line(quiz));
    lines.push(Line::from(""));

    // Question number and text
    lines.push(Line::from(Span::styled(
        format!("Question {} of {}", quiz.current_index() + 1, quiz.questions().len()),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        question.question.clone(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    let revealed = quiz.is_revealed(&question.id);
    let selected = quiz.selected_option(&question.id);

    // Options
    for option in &question.options {
        let is_selected = selected == Some(option.id.as_str());
        let prefix = if is_selected { "\u{25CF}" } else { "\u{25CB}" }; // ● or ○

        let style = if revealed && option.is_correct {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else if revealed && is_selected {
            // Selected but not correct
            Style::default().fg(Color::Red)
        } else if is_selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let marker = if revealed && option.is_correct {
            "  \u{2713}"
        } else if revealed && is_selected && !option.is_correct {
            "  \u{2717}"
        } else {
            ""
        };

        lines.push(Line::from(Span::styled(
            format!("  {} {}) {}{}", prefix, option.id, option.text, marker),
            style,
        )));
        lines.push(Line::from(""));
    }

    // Explanation after reveal
    if revealed {
        let verdict = match quiz.is_correct(&question.id) {
            Some(true) => {
                Span::styled("\u{2713} Correct!", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            }
            _ => Span::styled(
                "\u{2717} Not quite right",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };
        lines.push(Line::from(verdict));
        lines.push(Line::from(Span::styled(
            question.explanation.clone(),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }

    // Hint
    let hint = if revealed {
        "[Enter] Next question    [1-9] Jump    [Esc] Close"
    } else if selected.is_some() {
        "[j/k] Select    [Enter] Check answer    [Esc] Close"
    } else {
        "[j/k] or [a-d] Select an answer    [Esc] Close"
    };
    lines.push(Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))));

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}

/// One dot per question: current is ringed, revealed are green/red
fn navigator_line(quiz: &QuizSession) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, question) in quiz.questions().iter().enumerate() {
        let style = match quiz.is_correct(&question.id) {
            Some(true) => Style::default().fg(Color::Green),
            Some(false) => Style::default().fg(Color::Red),
            None => Style::default().fg(Color::DarkGray),
        };
        let style = if i == quiz.current_index() {
            style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            style
        };
        spans.push(Span::styled(format!(" {} ", i + 1), style));
    }
    Line::from(spans)
}

/// Create a centered rectangle with the given percentage of width and height
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

//! Curriculum tree browser component

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::{AppState, CurriculumState};
use crate::course::Course;
use crate::progress::ProgressStore;

/// Status indicators for topics
const STATUS_NOT_STARTED: &str = "○";
const STATUS_COMPLETED: &str = "✓";

/// Draw the curriculum tree browser
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    state: &mut AppState,
    course: &Course,
    progress: &ProgressStore,
    focused: bool,
) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let title = format!(" Curriculum \u{2014} {}% ", progress.percentage(course));
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Update visible height for scroll calculations
    state.curriculum.visible_height = inner.height as usize;

    // Build curriculum tree
    let mut lines: Vec<Line> = Vec::new();
    let mut flat_index = 0;

    for (module_idx, module) in course.modules.iter().enumerate() {
        let is_expanded = state.curriculum.expanded_modules.contains(&module_idx);
        let expand_icon = if is_expanded { "▼" } else { "▶" };

        let is_module_selected = flat_index == state.curriculum.selected_index;

        // Module line
        let module_text = format!("{} {}. {}", expand_icon, module.number, module.title);
        let module_style = if is_module_selected && focused {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(module_text, module_style)));
        flat_index += 1;

        // Topics (if expanded)
        if is_expanded {
            for topic in &module.topics {
                let is_topic_selected = flat_index == state.curriculum.selected_index;

                let status = if progress.is_completed(&topic.id) {
                    STATUS_COMPLETED
                } else {
                    STATUS_NOT_STARTED
                };

                let topic_text =
                    format!("   {} {}.{} {}", status, module.number, topic.number, topic.title);

                let topic_style = if is_topic_selected && focused {
                    Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else if state.current_topic_id.as_deref() == Some(topic.id.as_str()) {
                    // Currently viewed topic (but not selected in tree)
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::Gray)
                };

                lines.push(Line::from(Span::styled(topic_text, topic_style)));
                flat_index += 1;
            }
        }
    }

    // Handle scroll offset
    let visible_height = inner.height as usize;
    let start = state.curriculum.scroll_offset.min(lines.len());
    let end = (start + visible_height).min(lines.len());
    let visible_lines: Vec<Line> = lines.into_iter().skip(start).take(end - start).collect();

    let tree = Paragraph::new(visible_lines);
    frame.render_widget(tree, inner);
}

/// Represents an item in the curriculum tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurriculumItem {
    Module(usize),
    Topic(usize, usize),
}

/// Total visible items given the current expansion state
pub fn visible_item_count(course: &Course, state: &CurriculumState) -> usize {
    let mut count = 0;
    for (module_idx, module) in course.modules.iter().enumerate() {
        count += 1; // Module itself
        if state.expanded_modules.contains(&module_idx) {
            count += module.topics.len();
        }
    }
    count
}

/// Get the module/topic at a given flat index
pub fn item_at_index(
    course: &Course,
    state: &CurriculumState,
    target_index: usize,
) -> Option<CurriculumItem> {
    let mut current_idx = 0;
    for (module_idx, module) in course.modules.iter().enumerate() {
        if current_idx == target_index {
            return Some(CurriculumItem::Module(module_idx));
        }
        current_idx += 1;

        if state.expanded_modules.contains(&module_idx) {
            for (topic_idx, _topic) in module.topics.iter().enumerate() {
                if current_idx == target_index {
                    return Some(CurriculumItem::Topic(module_idx, topic_idx));
                }
                current_idx += 1;
            }
        }
    }
    None
}

/// Flat index of a topic given the current expansion state.
/// The owning module must already be expanded for the index to land on it.
pub fn flat_index_of(
    course: &Course,
    state: &CurriculumState,
    target_module: usize,
    target_topic: usize,
) -> usize {
    let mut index = 0;
    for (module_idx, module) in course.modules.iter().enumerate() {
        if module_idx == target_module {
            return index + 1 + target_topic;
        }
        index += 1;
        if state.expanded_modules.contains(&module_idx) {
            index += module.topics.len();
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::{Module, Topic};

    fn test_course() -> Course {
        let mut course = Course::new("test", "Test Course", "");

        let mut m1 = Module::new("module-1", 1, "Getting Started", "");
        m1.topics.push(Topic::new("a1", 1, "Installation", ""));
        m1.topics.push(Topic::new("a2", 2, "Hello World", ""));
        course.modules.push(m1);

        let mut m2 = Module::new("module-2", 2, "Basics", "");
        m2.topics.push(Topic::new("b1", 1, "Variables", ""));
        course.modules.push(m2);

        course
    }

    #[test]
    fn count_collapsed() {
        let course = test_course();
        let state = CurriculumState::default();

        // With no modules expanded, only module headers are visible
        assert_eq!(visible_item_count(&course, &state), 2);
    }

    #[test]
    fn count_expanded() {
        let course = test_course();
        let mut state = CurriculumState::default();
        state.expanded_modules.insert(0);

        // Module 1 expanded (2 topics) + module 2 collapsed = 1 + 2 + 1 = 4
        assert_eq!(visible_item_count(&course, &state), 4);
    }

    #[test]
    fn item_at_index_module() {
        let course = test_course();
        let state = CurriculumState::default();

        assert_eq!(item_at_index(&course, &state, 0), Some(CurriculumItem::Module(0)));
        assert_eq!(item_at_index(&course, &state, 1), Some(CurriculumItem::Module(1)));
        assert_eq!(item_at_index(&course, &state, 2), None);
    }

    #[test]
    fn item_at_index_topic() {
        let course = test_course();
        let mut state = CurriculumState::default();
        state.expanded_modules.insert(0);

        assert_eq!(item_at_index(&course, &state, 0), Some(CurriculumItem::Module(0)));
        assert_eq!(item_at_index(&course, &state, 1), Some(CurriculumItem::Topic(0, 0)));
        assert_eq!(item_at_index(&course, &state, 2), Some(CurriculumItem::Topic(0, 1)));
        assert_eq!(item_at_index(&course, &state, 3), Some(CurriculumItem::Module(1)));
    }

    #[test]
    fn flat_index_round_trips_with_item_at_index() {
        let course = test_course();
        let mut state = CurriculumState::default();
        state.expanded_modules.insert(0);
        state.expanded_modules.insert(1);

        let idx = flat_index_of(&course, &state, 1, 0);
        assert_eq!(item_at_index(&course, &state, idx), Some(CurriculumItem::Topic(1, 0)));
    }
}

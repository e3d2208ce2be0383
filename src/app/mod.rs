//! Application state and event handling

pub mod command;
pub mod input;
pub mod state;

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config::{Config, session::Session};
use crate::course::{COURSE, Course, Sequence};
use crate::progress::ProgressStore;
use crate::quiz::QuizSession;
use crate::ui::{self, curriculum};
use command::{Command, ParseResult, parse_command};
use input::{Action, key_with_modifier_to_action};
use state::{AppState, Panel};

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// The course catalog (read-only for the process lifetime)
    course: &'static Course,

    /// Current application state
    state: AppState,

    /// Completion tracking
    progress: ProgressStore,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config, progress: ProgressStore) -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        let course = &*COURSE;

        let mut state = AppState::new();
        Self::restore_session(&mut state, course);

        Ok(Self { config, course, state, progress, terminal })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Apply a saved session to fresh state, ignoring anything stale
    fn restore_session(state: &mut AppState, course: &Course) {
        let session = match Session::load() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Ignoring saved session: {}", e);
                return;
            }
        };

        for (idx, module) in course.modules.iter().enumerate() {
            if session.expanded_modules.contains(&module.id) {
                state.curriculum.expanded_modules.insert(idx);
            }
        }

        if let Some(topic_id) = session.current_topic_id {
            // A topic removed since the last session degrades to none selected.
            if course.topic_by_id(&topic_id).is_some() {
                state.current_topic_id = Some(topic_id);
                state.content.scroll_offset = session.content_scroll_offset;
            }
        }

        state.curriculum.selected_index = session.selected_index;
    }

    /// Persist resumable UI state
    fn save_session(&self) {
        let mut session = Session {
            current_topic_id: self.state.current_topic_id.clone(),
            selected_index: self.state.curriculum.selected_index,
            content_scroll_offset: self.state.content.scroll_offset,
            ..Default::default()
        };

        for (idx, module) in self.course.modules.iter().enumerate() {
            if self.state.curriculum.expanded_modules.contains(&idx) {
                session.expanded_modules.insert(module.id.clone());
            }
        }

        if let Err(e) = session.save() {
            tracing::warn!("Failed to save session: {}", e);
        }
    }

    /// Run the application main loop
    pub fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        loop {
            self.terminal.draw(|frame| {
                ui::draw(frame, &mut self.state, self.course, &self.progress, &self.config);
            })?;

            if event::poll(std::time::Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_key(key) {
                        break;
                    }
                }
            }
        }

        self.save_session();
        self.restore_terminal()?;
        Ok(())
    }

    /// Handle a key press, returns true if should exit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.state.command_line.is_input_mode() {
            return self.handle_command_line_key(key.code);
        }

        if self.state.show_help {
            self.state.show_help = false;
            return false;
        }

        if self.state.quiz.is_some() {
            self.handle_quiz_key(key.code);
            return false;
        }

        if key.code == KeyCode::Char(':') {
            self.state.command_line.enter_command_mode();
            return false;
        }

        if let Some(action) = key_with_modifier_to_action(key.code, key.modifiers) {
            return self.handle_action(action);
        }

        false
    }

    /// Keys while the command line is accepting input
    fn handle_command_line_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Enter => {
                let input = self.state.command_line.input.clone();
                self.state.command_line.exit_input_mode();
                return self.execute_command_input(&input);
            }
            KeyCode::Esc => self.state.command_line.exit_input_mode(),
            KeyCode::Backspace => self.state.command_line.delete_char(),
            KeyCode::Left => self.state.command_line.move_left(),
            KeyCode::Right => self.state.command_line.move_right(),
            KeyCode::Home => self.state.command_line.move_start(),
            KeyCode::End => self.state.command_line.move_end(),
            KeyCode::Char(c) => self.state.command_line.insert_char(c),
            _ => {}
        }
        false
    }

    /// Keys while the quick-check overlay is open
    fn handle_quiz_key(&mut self, key: KeyCode) {
        let Some(quiz) = self.state.quiz.as_mut() else { return };

        match key {
            KeyCode::Esc => {
                self.state.quiz = None;
            }
            KeyCode::Char('j') | KeyCode::Down => Self::move_quiz_selection(quiz, 1),
            KeyCode::Char('k') | KeyCode::Up => Self::move_quiz_selection(quiz, -1),
            KeyCode::Char('h') | KeyCode::Left => {
                let idx = quiz.current_index();
                quiz.jump(idx.saturating_sub(1));
            }
            KeyCode::Char('l') | KeyCode::Right => quiz.advance(),
            KeyCode::Char(c @ '1'..='9') => {
                quiz.jump(c as usize - '1' as usize);
            }
            KeyCode::Char(c @ 'a'..='f') => {
                if let Some(question) = quiz.current_question() {
                    let (question_id, option_id) = (question.id.clone(), c.to_string());
                    quiz.select(&question_id, &option_id);
                }
            }
            KeyCode::Enter => {
                if let Some(question) = quiz.current_question() {
                    let question_id = question.id.clone();
                    if quiz.is_revealed(&question_id) {
                        quiz.advance();
                    } else {
                        quiz.submit(&question_id);
                    }
                }
            }
            _ => {}
        }
    }

    /// Move the selected option up or down for the current question.
    /// Selection is free before submit; the engine ignores it afterwards.
    fn move_quiz_selection(quiz: &mut QuizSession, delta: isize) {
        let Some(question) = quiz.current_question() else { return };
        let question_id = question.id.clone();
        let option_ids: Vec<String> = question.options.iter().map(|o| o.id.clone()).collect();
        if option_ids.is_empty() {
            return;
        }

        let current = quiz
            .selected_option(&question_id)
            .and_then(|sel| option_ids.iter().position(|id| id == sel));

        let next = match current {
            Some(idx) => {
                let len = option_ids.len() as isize;
                ((idx as isize + delta).rem_euclid(len)) as usize
            }
            None => 0,
        };

        quiz.select(&question_id, &option_ids[next]);
    }

    /// Handle a normal-mode action, returns true if should exit
    fn handle_action(&mut self, action: Action) -> bool {
        self.state.command_line.clear_message();

        match action {
            Action::Up
            | Action::Down
            | Action::Top
            | Action::Bottom
            | Action::PageUp
            | Action::PageDown
            | Action::HalfPageUp
            | Action::HalfPageDown => self.handle_movement(action),
            Action::Select => self.handle_select(),
            Action::Back => {
                if self.state.focused_panel == Panel::Curriculum {
                    self.state.focused_panel = Panel::Content;
                }
            }
            Action::SwitchPanel => {
                self.state.focused_panel = match self.state.focused_panel {
                    Panel::Curriculum => Panel::Content,
                    Panel::Content if self.state.show_curriculum => Panel::Curriculum,
                    Panel::Content => Panel::Content,
                };
            }
            Action::ToggleCurriculum => {
                self.state.show_curriculum = !self.state.show_curriculum;
                if !self.state.show_curriculum {
                    self.state.focused_panel = Panel::Content;
                }
            }
            Action::NextTopic => self.step_topic(true),
            Action::PrevTopic => self.step_topic(false),
            Action::MarkComplete => self.toggle_complete(),
            Action::OpenQuiz => self.open_quiz(),
            Action::Help => self.state.show_help = true,
        }

        false
    }

    /// Movement keys, routed to the focused panel
    fn handle_movement(&mut self, action: Action) {
        match self.state.focused_panel {
            Panel::Curriculum => {
                let items = curriculum::visible_item_count(self.course, &self.state.curriculum);
                if items == 0 {
                    return;
                }
                let last = items - 1;
                let sel = &mut self.state.curriculum.selected_index;
                match action {
                    Action::Up => *sel = sel.saturating_sub(1),
                    Action::Down => *sel = (*sel + 1).min(last),
                    Action::Top => *sel = 0,
                    Action::Bottom => *sel = last,
                    Action::PageUp | Action::HalfPageUp => *sel = sel.saturating_sub(10),
                    Action::PageDown | Action::HalfPageDown => *sel = (*sel + 10).min(last),
                    _ => {}
                }
                self.state.curriculum.ensure_selection_visible();
            }
            Panel::Content => {
                let content = &mut self.state.content;
                let page = content.visible_height.max(1);
                match action {
                    Action::Up => content.scroll_offset = content.scroll_offset.saturating_sub(1),
                    Action::Down => content.scroll_offset += 1,
                    Action::Top => content.scroll_offset = 0,
                    Action::Bottom => content.scroll_offset = content.max_scroll(),
                    Action::PageUp => {
                        content.scroll_offset = content.scroll_offset.saturating_sub(page)
                    }
                    Action::PageDown => content.scroll_offset += page,
                    Action::HalfPageUp => {
                        content.scroll_offset = content.scroll_offset.saturating_sub(page / 2)
                    }
                    Action::HalfPageDown => content.scroll_offset += page / 2,
                    _ => {}
                }
                content.clamp_scroll();
            }
        }
    }

    /// Enter on the focused panel
    fn handle_select(&mut self) {
        match self.state.focused_panel {
            Panel::Curriculum => {
                let selected = curriculum::item_at_index(
                    self.course,
                    &self.state.curriculum,
                    self.state.curriculum.selected_index,
                );
                match selected {
                    Some(curriculum::CurriculumItem::Module(module_idx)) => {
                        let expanded = &mut self.state.curriculum.expanded_modules;
                        if !expanded.remove(&module_idx) {
                            expanded.insert(module_idx);
                        }
                    }
                    Some(curriculum::CurriculumItem::Topic(module_idx, topic_idx)) => {
                        let topic_id = self.course.modules[module_idx].topics[topic_idx].id.clone();
                        self.open_topic(&topic_id);
                        self.state.focused_panel = Panel::Content;
                    }
                    None => {}
                }
            }
            Panel::Content => {}
        }
    }

    /// Show a topic by id. Unknown ids degrade to a status message.
    fn open_topic(&mut self, topic_id: &str) {
        let Some(module) = self.course.module_by_topic_id(topic_id) else {
            self.state.command_line.set_error(format!("No such topic: {}", topic_id));
            return;
        };

        self.state.current_topic_id = Some(topic_id.to_string());
        self.state.content.scroll_offset = 0;
        self.state.quiz = None;

        // Keep the tree in sync: expand the owning module and select the topic.
        if let Some(module_idx) = self.course.modules.iter().position(|m| m.id == module.id) {
            self.state.curriculum.expanded_modules.insert(module_idx);
            if let Some(topic_idx) =
                self.course.modules[module_idx].topics.iter().position(|t| t.id == topic_id)
            {
                self.state.curriculum.selected_index = curriculum::flat_index_of(
                    self.course,
                    &self.state.curriculum,
                    module_idx,
                    topic_idx,
                );
                self.state.curriculum.ensure_selection_visible();
            }
        }
    }

    /// Step to the next or previous topic in global order
    fn step_topic(&mut self, forward: bool) {
        let sequence = Sequence::of(self.course);

        let target = match &self.state.current_topic_id {
            Some(id) => {
                if forward {
                    sequence.next(id)
                } else {
                    sequence.previous(id)
                }
            }
            // No topic open yet: start at the beginning.
            None if forward => sequence.by_number(1),
            None => None,
        };

        match target {
            Some(entry) => {
                let id = entry.topic.id.clone();
                self.open_topic(&id);
            }
            None => {
                let msg = if forward { "Already at the last topic" } else { "Already at the first topic" };
                self.state.command_line.set_message(msg);
            }
        }
    }

    /// Toggle completion for the current topic
    fn toggle_complete(&mut self) {
        let Some(topic_id) = self.state.current_topic_id.clone() else {
            self.state.command_line.set_message("Open a topic first");
            return;
        };

        if self.progress.is_completed(&topic_id) {
            self.progress.mark_incomplete(&topic_id);
            self.state.command_line.set_message("Marked incomplete");
        } else {
            self.progress.mark_complete(&topic_id);
            self.state.command_line.set_message(format!(
                "Marked complete - course {}% done",
                self.progress.percentage(self.course)
            ));
        }
    }

    /// Open the quick check for the current topic
    fn open_quiz(&mut self) {
        let Some(topic_id) = self.state.current_topic_id.as_deref() else {
            self.state.command_line.set_message("Open a topic first");
            return;
        };
        let Some(topic) = self.course.topic_by_id(topic_id) else {
            return;
        };

        if topic.has_quick_check() {
            self.state.quiz = Some(QuizSession::new(topic));
        } else {
            self.state.command_line.set_message("This topic has no quick check");
        }
    }

    /// Parse and execute a command-line input, returns true if should exit
    fn execute_command_input(&mut self, input: &str) -> bool {
        match parse_command(input) {
            ParseResult::Ok(cmd) => self.execute_command(cmd),
            ParseResult::UnknownCommand(cmd) => {
                self.state.command_line.set_error(format!("Unknown command: {}", cmd));
                false
            }
            ParseResult::MissingArgument(cmd) => {
                self.state.command_line.set_error(format!("{} requires an argument", cmd));
                false
            }
        }
    }

    /// Execute a parsed command, returns true if should exit
    fn execute_command(&mut self, command: Command) -> bool {
        match command {
            Command::Goto(topic_id) => self.open_topic(&topic_id),
            Command::Complete => {
                if let Some(id) = self.state.current_topic_id.clone() {
                    self.progress.mark_complete(&id);
                    self.state.command_line.set_message("Marked complete");
                } else {
                    self.state.command_line.set_message("Open a topic first");
                }
            }
            Command::Incomplete => {
                if let Some(id) = self.state.current_topic_id.clone() {
                    self.progress.mark_incomplete(&id);
                    self.state.command_line.set_message("Marked incomplete");
                } else {
                    self.state.command_line.set_message("Open a topic first");
                }
            }
            Command::Quiz => self.open_quiz(),
            Command::Next => self.step_topic(true),
            Command::Prev => self.step_topic(false),
            Command::Progress => {
                let done = self.progress.completed_count(self.course);
                let total = self.course.topic_count();
                self.state.command_line.set_message(format!(
                    "{}% complete ({}/{} topics)",
                    self.progress.percentage(self.course),
                    done,
                    total
                ));
            }
            Command::Reset => {
                self.progress.reset();
                self.state.command_line.set_message("Progress cleared");
            }
            Command::Quit => return true,
            Command::Help => self.state.show_help = true,
            Command::Nop => self.state.command_line.clear_message(),
        }
        false
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}

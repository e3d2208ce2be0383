//! Quick-check quiz engine
//!
//! Drives a single topic's quiz through select -> submit -> reveal, one
//! question at a time, with a running score. Sessions are created fresh when
//! the quiz overlay opens and discarded on close; attempts are ephemeral
//! practice, never persisted.

use std::collections::{HashMap, HashSet};

use crate::course::{QuizQuestion, Topic};

/// Running score for a session
///
/// Invariant: `correct <= answered <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Revealed questions whose selected option was correct
    pub correct: usize,
    /// Questions in the revealed state
    pub answered: usize,
    /// Question count for the topic
    pub total: usize,
}

/// In-memory quiz state for one topic
///
/// Each question moves Unanswered -> Selected -> Revealed; Revealed is
/// terminal. Misuse (selecting after reveal, submitting without a selection,
/// advancing past the end) is a defined no-op, never an error.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    current: usize,
    selected: HashMap<String, String>,
    revealed: HashSet<String>,
}

impl QuizSession {
    /// Start a session for a topic's quick check
    pub fn new(topic: &Topic) -> Self {
        Self {
            questions: topic.quick_check.clone(),
            current: 0,
            selected: HashMap::new(),
            revealed: HashSet::new(),
        }
    }

    /// All questions in order
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// Index of the question currently shown
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question currently shown, if the topic has any
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current)
    }

    /// Select an option for a question, overwriting any prior selection.
    /// No-op once the question is revealed (lock after submit), and for
    /// unknown question or option ids.
    pub fn select(&mut self, question_id: &str, option_id: &str) {
        if self.revealed.contains(question_id) {
            return;
        }
        let Some(question) = self.questions.iter().find(|q| q.id == question_id) else {
            return;
        };
        if question.option(option_id).is_none() {
            return;
        }
        self.selected.insert(question_id.to_string(), option_id.to_string());
    }

    /// Reveal the answer for a question. Requires a prior selection; no-op
    /// otherwise, and no-op if already revealed.
    pub fn submit(&mut self, question_id: &str) {
        if !self.selected.contains_key(question_id) {
            return;
        }
        if self.questions.iter().any(|q| q.id == question_id) {
            self.revealed.insert(question_id.to_string());
        }
    }

    /// The selected option id for a question, if any
    pub fn selected_option(&self, question_id: &str) -> Option<&str> {
        self.selected.get(question_id).map(String::as_str)
    }

    /// Whether a question has been revealed
    pub fn is_revealed(&self, question_id: &str) -> bool {
        self.revealed.contains(question_id)
    }

    /// Whether the selected answer was correct. Defined only once revealed.
    pub fn is_correct(&self, question_id: &str) -> Option<bool> {
        if !self.revealed.contains(question_id) {
            return None;
        }
        let question = self.questions.iter().find(|q| q.id == question_id)?;
        let option_id = self.selected.get(question_id)?;
        Some(question.option(option_id).is_some_and(|o| o.is_correct))
    }

    /// Current score tally
    pub fn score(&self) -> Score {
        let answered = self.questions.iter().filter(|q| self.revealed.contains(&q.id)).count();
        let correct = self
            .questions
            .iter()
            .filter(|q| self.is_correct(&q.id).unwrap_or(false))
            .count();
        Score { correct, answered, total: self.questions.len() }
    }

    /// Move to the next question, clamped at the last one
    pub fn advance(&mut self) {
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        }
    }

    /// Jump directly to a question index. Allowed at any time regardless of
    /// the current question's state; out-of-range indices are a no-op.
    /// Abandoning a question does not erase its selection.
    pub fn jump(&mut self, index: usize) {
        if index < self.questions.len() {
            self.current = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::{QuizOption, Topic};
    use pretty_assertions::assert_eq;

    fn quiz_topic() -> Topic {
        Topic::new("t1", 1, "Topic", "").with_quick_check(vec![
            QuizQuestion::new(
                "q1",
                "Which option is right?",
                vec![
                    QuizOption::new("a", "Wrong", false),
                    QuizOption::new("b", "Right", true),
                    QuizOption::new("c", "Also wrong", false),
                ],
                "b is the one",
            ),
            QuizQuestion::new(
                "q2",
                "And here?",
                vec![QuizOption::new("a", "Right", true), QuizOption::new("b", "Wrong", false)],
                "a is the one",
            ),
        ])
    }

    #[test]
    fn select_then_submit_grades_correctly() {
        let topic = quiz_topic();
        let mut session = QuizSession::new(&topic);

        session.select("q1", "b");
        session.submit("q1");

        assert_eq!(session.is_correct("q1"), Some(true));
        assert_eq!(session.score(), Score { correct: 1, answered: 1, total: 2 });
    }

    #[test]
    fn wrong_answer_counts_as_answered_not_correct() {
        let topic = quiz_topic();
        let mut session = QuizSession::new(&topic);

        session.select("q1", "a");
        session.submit("q1");

        assert_eq!(session.is_correct("q1"), Some(false));
        assert_eq!(session.score(), Score { correct: 0, answered: 1, total: 2 });
    }

    #[test]
    fn changing_mind_before_submit_is_free() {
        let topic = quiz_topic();
        let mut session = QuizSession::new(&topic);

        session.select("q1", "a");
        session.select("q1", "b");
        assert_eq!(session.selected_option("q1"), Some("b"));
    }

    #[test]
    fn select_after_reveal_is_locked() {
        let topic = quiz_topic();
        let mut session = QuizSession::new(&topic);

        session.select("q1", "b");
        session.submit("q1");
        session.select("q1", "a");

        assert_eq!(session.selected_option("q1"), Some("b"));
        assert_eq!(session.is_correct("q1"), Some(true));
    }

    #[test]
    fn submit_without_selection_is_noop() {
        let topic = quiz_topic();
        let mut session = QuizSession::new(&topic);

        session.submit("q1");

        assert!(!session.is_revealed("q1"));
        assert_eq!(session.is_correct("q1"), None);
        assert_eq!(session.score(), Score { correct: 0, answered: 0, total: 2 });
    }

    #[test]
    fn unknown_ids_are_noops() {
        let topic = quiz_topic();
        let mut session = QuizSession::new(&topic);

        session.select("nope", "a");
        session.select("q1", "z");
        session.submit("nope");

        assert_eq!(session.selected_option("q1"), None);
        assert_eq!(session.score(), Score { correct: 0, answered: 0, total: 2 });
    }

    #[test]
    fn is_correct_undefined_before_reveal() {
        let topic = quiz_topic();
        let mut session = QuizSession::new(&topic);

        session.select("q1", "b");
        assert_eq!(session.is_correct("q1"), None);
    }

    #[test]
    fn advance_clamps_at_last_question() {
        let topic = quiz_topic();
        let mut session = QuizSession::new(&topic);

        session.advance();
        assert_eq!(session.current_index(), 1);
        session.advance();
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn jump_anywhere_keeps_prior_selection() {
        let topic = quiz_topic();
        let mut session = QuizSession::new(&topic);

        session.select("q1", "b");
        session.jump(1);
        session.jump(0);

        assert_eq!(session.current_index(), 0);
        assert_eq!(session.selected_option("q1"), Some("b"));
    }

    #[test]
    fn jump_out_of_range_is_noop() {
        let topic = quiz_topic();
        let mut session = QuizSession::new(&topic);

        session.jump(5);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn score_invariant_holds_throughout() {
        let topic = quiz_topic();
        let mut session = QuizSession::new(&topic);

        let check = |s: &QuizSession| {
            let score = s.score();
            assert!(score.correct <= score.answered);
            assert!(score.answered <= score.total);
        };

        check(&session);
        session.select("q1", "a");
        check(&session);
        session.submit("q1");
        check(&session);
        session.select("q2", "a");
        session.submit("q2");
        check(&session);
        assert_eq!(session.score(), Score { correct: 1, answered: 2, total: 2 });
    }

    #[test]
    fn empty_quiz_is_degenerate_but_defined() {
        let topic = Topic::new("plain", 1, "No quiz", "");
        let mut session = QuizSession::new(&topic);

        assert!(session.current_question().is_none());
        session.advance();
        session.jump(0);
        assert_eq!(session.score(), Score { correct: 0, answered: 0, total: 0 });
    }
}

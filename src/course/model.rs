//! Content model for courses
//!
//! This module defines the core data structures for representing a course:
//! Course -> Module -> Topic, with optional quick-check quiz questions
//! attached to topics. The tree is immutable after load.

use serde::{Deserialize, Serialize};

/// A complete course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier for the course
    pub id: String,
    /// Display title
    pub title: String,
    /// Description or summary
    pub description: String,
    /// Modules in order
    pub modules: Vec<Module>,
}

impl Course {
    /// Create a new course with no modules
    pub fn new(id: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), description: description.into(), modules: Vec::new() }
    }

    /// Get total topic count across all modules
    pub fn topic_count(&self) -> usize {
        self.modules.iter().map(|m| m.topics.len()).sum()
    }

    /// Find a topic by its id. A miss is a normal outcome the caller handles.
    pub fn topic_by_id(&self, topic_id: &str) -> Option<&Topic> {
        self.modules.iter().flat_map(|m| m.topics.iter()).find(|t| t.id == topic_id)
    }

    /// Find the module that owns a topic
    pub fn module_by_topic_id(&self, topic_id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.topics.iter().any(|t| t.id == topic_id))
    }

    /// Check the catalog for authoring mistakes: duplicate topic ids and
    /// quiz questions without exactly one correct option. Issues are
    /// tolerated at runtime; callers log them at startup.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let mut seen = std::collections::HashSet::new();

        for module in &self.modules {
            for topic in &module.topics {
                if !seen.insert(topic.id.as_str()) {
                    issues.push(format!("duplicate topic id: {}", topic.id));
                }

                for question in &topic.quick_check {
                    let correct = question.options.iter().filter(|o| o.is_correct).count();
                    if correct != 1 {
                        issues.push(format!(
                            "question {} in topic {} has {} correct options (expected 1)",
                            question.id, topic.id, correct
                        ));
                    }
                }
            }
        }

        issues
    }
}

/// A module (named grouping of topics) within a course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    /// Unique identifier within the course
    pub id: String,
    /// Module number (1-indexed, authoring-time display label)
    pub number: usize,
    /// Module title
    pub title: String,
    /// Short description shown in the curriculum tree
    pub description: String,
    /// Topics within this module, in order
    pub topics: Vec<Topic>,
}

impl Module {
    /// Create a new module with no topics
    pub fn new(
        id: impl Into<String>,
        number: usize,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            number,
            title: title.into(),
            description: description.into(),
            topics: Vec::new(),
        }
    }
}

/// A topic, the smallest content unit
///
/// `number` is the module-local display label ("Module 2 - Topic 3"). The
/// global rank used for sequential navigation is not stored here; it is
/// derived by [`crate::course::sequence::Sequence`] from catalog position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    /// Unique identifier across the entire course
    pub id: String,
    /// Topic number within its module (1-indexed)
    pub number: usize,
    /// Topic title
    pub title: String,
    /// Markdown-authored content, displayed as opaque text
    pub content: String,
    /// Optional quick-check quiz questions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quick_check: Vec<QuizQuestion>,
}

impl Topic {
    /// Create a new topic without a quick check
    pub fn new(
        id: impl Into<String>,
        number: usize,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            number,
            title: title.into(),
            content: content.into(),
            quick_check: Vec::new(),
        }
    }

    /// Attach quick-check questions
    pub fn with_quick_check(mut self, questions: Vec<QuizQuestion>) -> Self {
        self.quick_check = questions;
        self
    }

    /// Whether this topic carries a quick check
    pub fn has_quick_check(&self) -> bool {
        !self.quick_check.is_empty()
    }
}

/// A multiple-choice quiz question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Unique identifier within the topic
    pub id: String,
    /// Question text
    pub question: String,
    /// Answer options in order
    pub options: Vec<QuizOption>,
    /// Explanation shown after the answer is revealed
    pub explanation: String,
}

impl QuizQuestion {
    /// Create a new question
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        options: Vec<QuizOption>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            options,
            explanation: explanation.into(),
        }
    }

    /// Find an option by id
    pub fn option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

/// An answer option (ids are conventionally "a".."d")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizOption {
    /// Unique identifier within the question
    pub id: String,
    /// Option text
    pub text: String,
    /// Whether this option is the correct answer
    pub is_correct: bool,
}

impl QuizOption {
    /// Create a new option
    pub fn new(id: impl Into<String>, text: impl Into<String>, is_correct: bool) -> Self {
        Self { id: id.into(), text: text.into(), is_correct }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_course() -> Course {
        let mut course = Course::new("test-course", "Test Course", "A course for tests");

        let mut m1 = Module::new("module-1", 1, "Getting Started", "First steps");
        m1.topics.push(Topic::new("a1", 1, "Intro", "# Intro"));
        m1.topics.push(Topic::new("a2", 2, "Setup", "# Setup"));
        course.modules.push(m1);

        let mut m2 = Module::new("module-2", 2, "Basics", "Core concepts");
        m2.topics.push(Topic::new("b1", 1, "Variables", "# Variables"));
        course.modules.push(m2);

        course
    }

    #[test]
    fn topic_count_sums_all_modules() {
        assert_eq!(test_course().topic_count(), 3);
    }

    #[test]
    fn topic_by_id_finds_across_modules() {
        let course = test_course();
        assert_eq!(course.topic_by_id("a2").unwrap().title, "Setup");
        assert_eq!(course.topic_by_id("b1").unwrap().title, "Variables");
    }

    #[test]
    fn topic_by_id_miss_is_none() {
        assert!(test_course().topic_by_id("nonexistent").is_none());
    }

    #[test]
    fn module_by_topic_id_finds_owner() {
        let course = test_course();
        assert_eq!(course.module_by_topic_id("b1").unwrap().id, "module-2");
        assert!(course.module_by_topic_id("nonexistent").is_none());
    }

    #[test]
    fn validate_accepts_well_formed_course() {
        assert!(test_course().validate().is_empty());
    }

    #[test]
    fn validate_flags_duplicate_topic_ids() {
        let mut course = test_course();
        course.modules[1].topics.push(Topic::new("a1", 2, "Duplicate", ""));

        let issues = course.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("duplicate topic id: a1"));
    }

    #[test]
    fn validate_flags_zero_and_multiple_correct_options() {
        let mut course = test_course();
        course.modules[0].topics[0].quick_check = vec![
            QuizQuestion::new(
                "q1",
                "No correct option?",
                vec![QuizOption::new("a", "Nope", false), QuizOption::new("b", "Also no", false)],
                "",
            ),
            QuizQuestion::new(
                "q2",
                "Two correct options?",
                vec![QuizOption::new("a", "Yes", true), QuizOption::new("b", "Also yes", true)],
                "",
            ),
        ];

        let issues = course.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues[0].contains("0 correct options"));
        assert!(issues[1].contains("2 correct options"));
    }

    #[test]
    fn question_option_lookup() {
        let q = QuizQuestion::new(
            "q1",
            "Pick one",
            vec![QuizOption::new("a", "First", false), QuizOption::new("b", "Second", true)],
            "Second is right",
        );

        assert!(q.option("b").unwrap().is_correct);
        assert!(q.option("z").is_none());
    }

    #[test]
    fn topic_quick_check_builder() {
        let topic = Topic::new("t", 1, "T", "").with_quick_check(vec![QuizQuestion::new(
            "q1",
            "?",
            vec![QuizOption::new("a", "A", true)],
            "",
        )]);

        assert!(topic.has_quick_check());
        assert!(!Topic::new("t2", 2, "T2", "").has_quick_check());
    }
}

//! Global topic ordering
//!
//! Imposes a single deterministic linear order on all topics in a course:
//! module order, then topic order within each module. Each entry carries a
//! 1-based global rank, derived fresh from catalog position on every build.
//! This rank drives "Topic 7 of 23" indicators and next/previous navigation;
//! it is independent of the module-local display numbers and the two must
//! never be conflated.

use super::model::{Course, Module, Topic};

/// A topic annotated with its position in the flattened order
#[derive(Debug, Clone, Copy)]
pub struct SequencedTopic<'a> {
    /// 1-based rank in the full cross-module ordering
    pub global_number: usize,
    /// The topic itself
    pub topic: &'a Topic,
    /// The module that owns it
    pub module: &'a Module,
}

/// The flattened, globally ordered topic sequence for a course
///
/// Built from an immutable course snapshot; building twice on an unchanged
/// course yields identical sequences.
#[derive(Debug)]
pub struct Sequence<'a> {
    entries: Vec<SequencedTopic<'a>>,
}

impl<'a> Sequence<'a> {
    /// Flatten a course into its global topic order
    pub fn of(course: &'a Course) -> Self {
        let mut entries = Vec::with_capacity(course.topic_count());
        for module in &course.modules {
            for topic in &module.topics {
                entries.push(SequencedTopic {
                    global_number: entries.len() + 1,
                    topic,
                    module,
                });
            }
        }
        Self { entries }
    }

    /// Total number of topics in the sequence
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the course has no topics at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in order
    pub fn entries(&self) -> &[SequencedTopic<'a>] {
        &self.entries
    }

    /// 0-based position of a topic, if present
    pub fn position(&self, topic_id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.topic.id == topic_id)
    }

    /// Look up a topic entry by id
    pub fn by_id(&self, topic_id: &str) -> Option<SequencedTopic<'a>> {
        self.position(topic_id).map(|i| self.entries[i])
    }

    /// Look up a topic entry by its 1-based global number
    pub fn by_number(&self, global_number: usize) -> Option<SequencedTopic<'a>> {
        global_number.checked_sub(1).and_then(|i| self.entries.get(i)).copied()
    }

    /// The topic immediately after `topic_id`, or `None` if it is the last
    /// topic or not in the course. Navigation degrades silently on unknown
    /// ids rather than erroring.
    pub fn next(&self, topic_id: &str) -> Option<SequencedTopic<'a>> {
        let pos = self.position(topic_id)?;
        self.entries.get(pos + 1).copied()
    }

    /// The topic immediately before `topic_id`, or `None` if it is the
    /// first topic or not in the course
    pub fn previous(&self, topic_id: &str) -> Option<SequencedTopic<'a>> {
        let pos = self.position(topic_id)?;
        pos.checked_sub(1).map(|i| self.entries[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::model::Topic;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn two_module_course() -> Course {
        let mut course = Course::new("c", "Course", "");

        let mut ma = crate::course::Module::new("module-a", 1, "A", "");
        ma.topics.push(Topic::new("a1", 1, "A1", ""));
        ma.topics.push(Topic::new("a2", 2, "A2", ""));
        course.modules.push(ma);

        let mut mb = crate::course::Module::new("module-b", 2, "B", "");
        mb.topics.push(Topic::new("b1", 1, "B1", ""));
        course.modules.push(mb);

        course
    }

    #[test]
    fn flatten_orders_and_numbers_topics() {
        let course = two_module_course();
        let seq = Sequence::of(&course);

        let ids: Vec<&str> = seq.entries().iter().map(|e| e.topic.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a2", "b1"]);

        let numbers: Vec<usize> = seq.entries().iter().map(|e| e.global_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn global_number_is_independent_of_module_local_number() {
        let course = two_module_course();
        let seq = Sequence::of(&course);

        // b1 is topic 1 of module B for display, but globally topic 3.
        let b1 = seq.by_id("b1").unwrap();
        assert_eq!(b1.topic.number, 1);
        assert_eq!(b1.global_number, 3);
        assert_eq!(b1.module.id, "module-b");
    }

    #[test]
    fn next_crosses_module_boundary() {
        let course = two_module_course();
        let seq = Sequence::of(&course);
        assert_eq!(seq.next("a2").unwrap().topic.id, "b1");
    }

    #[test]
    fn next_of_last_is_none() {
        let course = two_module_course();
        assert!(Sequence::of(&course).next("b1").is_none());
    }

    #[test]
    fn previous_of_first_is_none() {
        let course = two_module_course();
        assert!(Sequence::of(&course).previous("a1").is_none());
    }

    #[test]
    fn unknown_id_navigates_to_none() {
        let course = two_module_course();
        let seq = Sequence::of(&course);
        assert!(seq.next("nonexistent").is_none());
        assert!(seq.previous("nonexistent").is_none());
        assert!(seq.by_id("nonexistent").is_none());
    }

    #[test]
    fn by_number_roundtrips() {
        let course = two_module_course();
        let seq = Sequence::of(&course);
        assert_eq!(seq.by_number(2).unwrap().topic.id, "a2");
        assert!(seq.by_number(0).is_none());
        assert!(seq.by_number(4).is_none());
    }

    #[test]
    fn empty_course_is_empty_sequence() {
        let course = Course::new("empty", "Empty", "");
        let seq = Sequence::of(&course);
        assert!(seq.is_empty());
        assert!(seq.by_number(1).is_none());
    }

    /// Build a course whose module shapes are given by topic counts
    fn course_with_shape(shape: &[usize]) -> Course {
        let mut course = Course::new("gen", "Generated", "");
        for (mi, &topic_count) in shape.iter().enumerate() {
            let mut module =
                crate::course::Module::new(format!("m{}", mi + 1), mi + 1, format!("M{}", mi + 1), "");
            for ti in 0..topic_count {
                module.topics.push(Topic::new(
                    format!("m{}t{}", mi + 1, ti + 1),
                    ti + 1,
                    format!("Topic {}", ti + 1),
                    "",
                ));
            }
            course.modules.push(module);
        }
        course
    }

    proptest! {
        #[test]
        fn flatten_is_idempotent(shape in prop::collection::vec(0usize..6, 0..6)) {
            let course = course_with_shape(&shape);
            let first: Vec<(usize, String)> = Sequence::of(&course)
                .entries()
                .iter()
                .map(|e| (e.global_number, e.topic.id.clone()))
                .collect();
            let second: Vec<(usize, String)> = Sequence::of(&course)
                .entries()
                .iter()
                .map(|e| (e.global_number, e.topic.id.clone()))
                .collect();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn flatten_is_a_bijection_over_topic_ids(shape in prop::collection::vec(0usize..6, 0..6)) {
            let course = course_with_shape(&shape);
            let seq = Sequence::of(&course);

            prop_assert_eq!(seq.len(), course.topic_count());

            let unique: std::collections::HashSet<&str> =
                seq.entries().iter().map(|e| e.topic.id.as_str()).collect();
            prop_assert_eq!(unique.len(), seq.len());

            // Ranks are exactly 1..=len
            for (i, entry) in seq.entries().iter().enumerate() {
                prop_assert_eq!(entry.global_number, i + 1);
            }
        }

        #[test]
        fn next_then_previous_returns_to_start(shape in prop::collection::vec(0usize..6, 1..6)) {
            let course = course_with_shape(&shape);
            let seq = Sequence::of(&course);

            for entry in seq.entries() {
                if let Some(next) = seq.next(&entry.topic.id) {
                    let back = seq.previous(&next.topic.id).unwrap();
                    prop_assert_eq!(&back.topic.id, &entry.topic.id);
                }
            }
        }
    }
}

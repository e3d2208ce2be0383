//! Course content model, embedded catalog, and global topic ordering

pub mod catalog;
pub mod model;
pub mod sequence;

pub use catalog::COURSE;
pub use model::{Course, Module, QuizOption, QuizQuestion, Topic};
pub use sequence::{Sequence, SequencedTopic};

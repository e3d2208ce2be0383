//! Dojo - a TUI for working through structured programming courses
//!
//! Dojo presents a course as modules of readable topics, tracks which
//! topics you have completed, and lets you test yourself with short
//! quick-check quizzes along the way.

pub mod app;
pub mod config;
pub mod course;
pub mod progress;
pub mod quiz;
pub mod ui;

pub use app::App;
pub use config::Config;

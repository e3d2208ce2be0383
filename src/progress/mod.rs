//! Completion tracking
//!
//! The [`ProgressStore`] exclusively owns the set of completed topic ids and
//! writes it through to an injected storage backend on every mutation. The
//! backend is a trait so the store is constructed once at startup with a file
//! backend and tested against an in-memory one.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::course::Course;

/// Errors from a progress storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure
    #[error("progress storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Persisted data could not be parsed
    #[error("malformed progress data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Durable key-value medium for the completed-set
///
/// `load` returns `None` when nothing has been persisted yet. The encoding
/// is a JSON array of topic ids; no other process needs to read it.
pub trait ProgressBackend {
    /// Read the persisted completed-set, if any
    fn load(&self) -> Result<Option<Vec<String>>, StorageError>;
    /// Persist the completed-set
    fn save(&self, completed: &[String]) -> Result<(), StorageError>;
}

/// File-backed storage under the platform data directory
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Create a backend writing to the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Backend at the default location (`progress.json` in the data dir)
    pub fn default_location() -> Result<Self> {
        let dir = crate::config::Config::data_dir().context("Failed to determine data directory")?;
        Ok(Self::new(dir.join("progress.json")))
    }
}

impl ProgressBackend for FileBackend {
    fn load(&self) -> Result<Option<Vec<String>>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        let completed = serde_json::from_str(&contents)?;
        Ok(Some(completed))
    }

    fn save(&self, completed: &[String]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(completed)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// In-memory backend for tests and dry runs
#[derive(Debug, Default)]
pub struct MemoryBackend {
    stored: RefCell<Option<Vec<String>>>,
}

impl MemoryBackend {
    /// Backend pre-seeded with a completed-set
    pub fn with_completed(completed: Vec<String>) -> Self {
        Self { stored: RefCell::new(Some(completed)) }
    }
}

impl ProgressBackend for MemoryBackend {
    fn load(&self) -> Result<Option<Vec<String>>, StorageError> {
        Ok(self.stored.borrow().clone())
    }

    fn save(&self, completed: &[String]) -> Result<(), StorageError> {
        *self.stored.borrow_mut() = Some(completed.to_vec());
        Ok(())
    }
}

/// Durable record of which topics the learner has completed
pub struct ProgressStore {
    completed: HashSet<String>,
    backend: Box<dyn ProgressBackend>,
}

impl ProgressStore {
    /// Open a store over the given backend
    ///
    /// Missing persisted data initializes an empty set. Malformed or
    /// unreadable data is logged and also falls back to empty; it never
    /// surfaces as an error.
    pub fn open(backend: Box<dyn ProgressBackend>) -> Self {
        let completed = match backend.load() {
            Ok(Some(ids)) => ids.into_iter().collect(),
            Ok(None) => HashSet::new(),
            Err(e) => {
                tracing::warn!("Resetting progress: {}", e);
                HashSet::new()
            }
        };
        Self { completed, backend }
    }

    /// Mark a topic complete. Idempotent; already-complete ids are a no-op
    /// and do not rewrite storage.
    pub fn mark_complete(&mut self, topic_id: &str) {
        if self.completed.insert(topic_id.to_string()) {
            tracing::debug!("Marked {} complete", topic_id);
            self.persist();
        }
    }

    /// Mark a topic incomplete. Removing an absent id is a no-op.
    pub fn mark_incomplete(&mut self, topic_id: &str) {
        if self.completed.remove(topic_id) {
            tracing::debug!("Marked {} incomplete", topic_id);
            self.persist();
        }
    }

    /// Whether a topic has been completed
    pub fn is_completed(&self, topic_id: &str) -> bool {
        self.completed.contains(topic_id)
    }

    /// Number of completed topics that still exist in the course
    ///
    /// Stale ids (content removed after the learner completed it) are
    /// excluded so they never inflate the count.
    pub fn completed_count(&self, course: &Course) -> usize {
        self.completed.iter().filter(|id| course.topic_by_id(id).is_some()).count()
    }

    /// Completion percentage against the full topic sequence, rounded
    /// to the nearest integer. Defined as 0 for an empty course.
    pub fn percentage(&self, course: &Course) -> u8 {
        let total = course.topic_count();
        if total == 0 {
            return 0;
        }
        let done = self.completed_count(course);
        ((done as f64 / total as f64) * 100.0).round() as u8
    }

    /// Clear all progress and rewrite storage
    pub fn reset(&mut self) {
        if !self.completed.is_empty() {
            self.completed.clear();
            self.persist();
        }
    }

    fn persist(&self) {
        let mut ids: Vec<String> = self.completed.iter().cloned().collect();
        ids.sort();
        if let Err(e) = self.backend.save(&ids) {
            // The set is tiny and rebuilt from user actions; losing a write
            // must not interrupt the session.
            tracing::warn!("Failed to persist progress: {}", e);
        }
    }
}

//! Session state persistence
//!
//! Stores UI state between sessions so learners can resume where they left
//! off. Losing this file is cosmetic; completion lives in the progress store.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::Config;

/// Resumable UI state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    /// Last viewed topic id (if any)
    pub current_topic_id: Option<String>,
    /// Expanded module ids in the curriculum tree
    pub expanded_modules: HashSet<String>,
    /// Selected index in the curriculum view
    pub selected_index: usize,
    /// Scroll offset in the content view
    pub content_scroll_offset: usize,
}

impl Session {
    /// Load session from disk, falling back to default if absent
    pub fn load() -> Result<Self> {
        let path = Self::session_path()?;

        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read session from {:?}", path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse session.json")
        } else {
            Ok(Self::default())
        }
    }

    /// Save session to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::session_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize session")?;

        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write session to {:?}", path))?;

        Ok(())
    }

    /// Get the path to the session file
    fn session_path() -> Result<PathBuf> {
        Ok(Config::data_dir()?.join("session.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_default_is_empty() {
        let session = Session::default();
        assert!(session.current_topic_id.is_none());
        assert!(session.expanded_modules.is_empty());
    }

    #[test]
    fn session_serializes() {
        let mut session = Session::default();
        session.current_topic_id = Some("intro-to-python".into());
        session.expanded_modules.insert("module-1".into());
        session.content_scroll_offset = 42;

        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("intro-to-python"));
        assert!(json.contains("module-1"));
    }

    #[test]
    fn session_deserializes() {
        let json = r#"{
            "current_topic_id": "variables",
            "expanded_modules": ["module-2"],
            "selected_index": 3,
            "content_scroll_offset": 10
        }"#;

        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.current_topic_id, Some("variables".into()));
        assert!(session.expanded_modules.contains("module-2"));
        assert_eq!(session.selected_index, 3);
        assert_eq!(session.content_scroll_offset, 10);
    }
}

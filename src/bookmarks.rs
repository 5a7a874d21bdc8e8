//! Bookmark persistence behind a narrow interface.
//!
//! Two strategies exist for the same entity: an in-memory store and a JSON
//! blob on disk (the server-side relational variant sits behind the same
//! trait in deployments that have one). The analysis itself is immutable;
//! user notes attach to the bookmark wrapper.

use std::collections::VecDeque;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{Result, ScholarLensError};
use crate::schemas::{AnalysisResult, BookmarkedPaper};

#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// All bookmarks, newest first
    async fn list(&self) -> Result<Vec<BookmarkedPaper>>;
    /// Save an analysis. Rejects a second bookmark for the same paper id.
    async fn add(&self, analysis: AnalysisResult, notes: Option<String>)
        -> Result<BookmarkedPaper>;
    /// Remove by paper id; reports whether anything was removed
    async fn remove(&self, paper_id: &str) -> Result<bool>;
    async fn get(&self, paper_id: &str) -> Result<Option<BookmarkedPaper>>;
    async fn is_bookmarked(&self, paper_id: &str) -> Result<bool>;
    /// Attach or replace free-text notes on an existing bookmark
    async fn update_notes(&self, bookmark_id: &str, notes: String) -> Result<bool>;
}

fn new_bookmark(analysis: AnalysisResult, notes: Option<String>) -> BookmarkedPaper {
    let now = Utc::now();
    BookmarkedPaper {
        id: format!("{}-{}", analysis.paper.id, now.timestamp_millis()),
        analysis,
        bookmarked_at: now,
        notes,
    }
}

/// Volatile store for tests and single-shot CLI runs
#[derive(Default)]
pub struct MemoryBookmarkStore {
    // Newest at the front
    entries: RwLock<VecDeque<BookmarkedPaper>>,
}

impl MemoryBookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookmarkStore for MemoryBookmarkStore {
    async fn list(&self) -> Result<Vec<BookmarkedPaper>> {
        Ok(self.entries.read().await.iter().cloned().collect())
    }

    async fn add(
        &self,
        analysis: AnalysisResult,
        notes: Option<String>,
    ) -> Result<BookmarkedPaper> {
        let mut entries = self.entries.write().await;
        if entries
            .iter()
            .any(|b| b.analysis.paper.id == analysis.paper.id)
        {
            return Err(ScholarLensError::Bookmark {
                message: format!("paper {} already bookmarked", analysis.paper.id),
            });
        }
        let bookmark = new_bookmark(analysis, notes);
        entries.push_front(bookmark.clone());
        Ok(bookmark)
    }

    async fn remove(&self, paper_id: &str) -> Result<bool> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|b| b.analysis.paper.id != paper_id);
        Ok(entries.len() < before)
    }

    async fn get(&self, paper_id: &str) -> Result<Option<BookmarkedPaper>> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .find(|b| b.analysis.paper.id == paper_id)
            .cloned())
    }

    async fn is_bookmarked(&self, paper_id: &str) -> Result<bool> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .any(|b| b.analysis.paper.id == paper_id))
    }

    async fn update_notes(&self, bookmark_id: &str, notes: String) -> Result<bool> {
        let mut entries = self.entries.write().await;
        if let Some(b) = entries.iter_mut().find(|b| b.id == bookmark_id) {
            b.notes = Some(notes);
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

/// JSON-blob store: the whole bookmark list serialized to one file,
/// rewritten on every mutation. Mirrors the browser-local-storage strategy.
pub struct JsonFileBookmarkStore {
    path: PathBuf,
    entries: RwLock<VecDeque<BookmarkedPaper>>,
}

impl JsonFileBookmarkStore {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => VecDeque::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), count = entries.len(), "loaded bookmark file");
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    fn persist(&self, entries: &VecDeque<BookmarkedPaper>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

#[async_trait]
impl BookmarkStore for JsonFileBookmarkStore {
    async fn list(&self) -> Result<Vec<BookmarkedPaper>> {
        Ok(self.entries.read().await.iter().cloned().collect())
    }

    async fn add(
        &self,
        analysis: AnalysisResult,
        notes: Option<String>,
    ) -> Result<BookmarkedPaper> {
        let mut entries = self.entries.write().await;
        if entries
            .iter()
            .any(|b| b.analysis.paper.id == analysis.paper.id)
        {
            return Err(ScholarLensError::Bookmark {
                message: format!("paper {} already bookmarked", analysis.paper.id),
            });
        }
        let bookmark = new_bookmark(analysis, notes);
        entries.push_front(bookmark.clone());
        // Memory must match the file on return: undo on a failed write
        if let Err(e) = self.persist(&entries) {
            entries.pop_front();
            return Err(e);
        }
        Ok(bookmark)
    }

    async fn remove(&self, paper_id: &str) -> Result<bool> {
        let mut entries = self.entries.write().await;
        let filtered: VecDeque<BookmarkedPaper> = entries
            .iter()
            .filter(|b| b.analysis.paper.id != paper_id)
            .cloned()
            .collect();
        if filtered.len() == entries.len() {
            return Ok(false);
        }
        self.persist(&filtered)?;
        *entries = filtered;
        Ok(true)
    }

    async fn get(&self, paper_id: &str) -> Result<Option<BookmarkedPaper>> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .find(|b| b.analysis.paper.id == paper_id)
            .cloned())
    }

    async fn is_bookmarked(&self, paper_id: &str) -> Result<bool> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .any(|b| b.analysis.paper.id == paper_id))
    }

    async fn update_notes(&self, bookmark_id: &str, notes: String) -> Result<bool> {
        let mut entries = self.entries.write().await;
        let Some(b) = entries.iter_mut().find(|b| b.id == bookmark_id) else {
            return Ok(false);
        };
        let previous = std::mem::replace(&mut b.notes, Some(notes));
        if let Err(e) = self.persist(&entries) {
            if let Some(b) = entries.iter_mut().find(|b| b.id == bookmark_id) {
                b.notes = previous;
            }
            return Err(e);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{AcademicField, DocumentType};
    use crate::schemas::{CredibilityScore, Paper, Rating};

    fn sample_analysis(paper_id: &str) -> AnalysisResult {
        AnalysisResult {
            paper: Paper {
                id: paper_id.to_string(),
                title: "Sample".to_string(),
                authors: vec!["Uploaded Document".to_string()],
                journal: None,
                doi: None,
                abstract_text: None,
                url: None,
                year: Some(2026),
                document_type: DocumentType::Article,
                field: AcademicField::Interdisciplinary,
            },
            credibility: CredibilityScore {
                total_score: 7.0,
                rating: Rating::Strong,
                ..Default::default()
            },
            bias: Default::default(),
            key_findings: Default::default(),
            perspective: Default::default(),
            timestamp: Utc::now(),
        }
    }

    #[tokio::test]
    async fn add_list_remove_roundtrip() {
        let store = MemoryBookmarkStore::new();
        store.add(sample_analysis("p1"), None).await.unwrap();
        store
            .add(sample_analysis("p2"), Some("read later".into()))
            .await
            .unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        // Newest first
        assert_eq!(listed[0].analysis.paper.id, "p2");

        assert!(store.remove("p1").await.unwrap());
        assert!(!store.remove("p1").await.unwrap());
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_add_is_rejected() {
        let store = MemoryBookmarkStore::new();
        store.add(sample_analysis("p1"), None).await.unwrap();
        let err = store.add(sample_analysis("p1"), None).await.unwrap_err();
        assert!(matches!(err, ScholarLensError::Bookmark { .. }));
    }

    #[tokio::test]
    async fn notes_update_targets_bookmark_id() {
        let store = MemoryBookmarkStore::new();
        let bookmark = store.add(sample_analysis("p1"), None).await.unwrap();

        assert!(store
            .update_notes(&bookmark.id, "methodology is shaky".into())
            .await
            .unwrap());
        assert!(!store.update_notes("missing-id", "x".into()).await.unwrap());

        let fetched = store.get("p1").await.unwrap().unwrap();
        assert_eq!(fetched.notes.as_deref(), Some("methodology is shaky"));
    }

    #[tokio::test]
    async fn failed_persist_leaves_memory_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.json");
        let store = JsonFileBookmarkStore::new(&path).unwrap();
        let bookmark = store.add(sample_analysis("p1"), None).await.unwrap();

        // Turn the target path into a directory so the next write fails
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        assert!(store.add(sample_analysis("p2"), None).await.is_err());
        assert!(!store.is_bookmarked("p2").await.unwrap());

        assert!(store
            .update_notes(&bookmark.id, "unsaved".into())
            .await
            .is_err());
        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].notes, None);

        assert!(store.remove("p1").await.is_err());
        assert!(store.is_bookmarked("p1").await.unwrap());
    }

    #[tokio::test]
    async fn json_file_store_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.json");

        {
            let store = JsonFileBookmarkStore::new(&path).unwrap();
            store.add(sample_analysis("p1"), None).await.unwrap();
        }

        let reloaded = JsonFileBookmarkStore::new(&path).unwrap();
        assert!(reloaded.is_bookmarked("p1").await.unwrap());
        assert_eq!(reloaded.list().await.unwrap().len(), 1);
    }
}

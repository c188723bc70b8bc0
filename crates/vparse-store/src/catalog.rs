//! Catalog store: the owned, persisted sequence of video entries.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Local, Utc};
use tracing::debug;

use vparse_models::{EntryDraft, EntryId, Platform, VideoEntry};

use crate::backend::{StorageBackend, VIDEO_LIBRARY_KEY};
use crate::error::{StoreError, StoreResult};

/// Catalog view filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LibraryFilter {
    #[default]
    All,
    Free,
    Vip,
}

impl LibraryFilter {
    pub fn matches(&self, entry: &VideoEntry) -> bool {
        match self {
            LibraryFilter::All => true,
            LibraryFilter::Free => !entry.is_vip,
            LibraryFilter::Vip => entry.is_vip,
        }
    }
}

/// The catalog of bookmarked videos.
///
/// Fully loaded from the backend on open and fully rewritten on every
/// mutation. Insertion order is preserved and is the list order.
pub struct CatalogStore {
    entries: Vec<VideoEntry>,
    backend: Arc<dyn StorageBackend>,
}

impl CatalogStore {
    /// Open the catalog, replacing any in-memory state with the stored one.
    pub fn open(backend: Arc<dyn StorageBackend>) -> StoreResult<Self> {
        let entries = match backend.get(VIDEO_LIBRARY_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        debug!(count = entries.len(), "catalog loaded");
        Ok(Self { entries, backend })
    }

    /// Validate a draft, assign a fresh id, derive the platform and append.
    pub fn add(&mut self, draft: EntryDraft) -> StoreResult<EntryId> {
        draft.validate()?;

        let id = self.next_id();
        let url = draft.url.trim().to_string();
        let entry = VideoEntry {
            id: id.clone(),
            title: draft.title.trim().to_string(),
            platform: Platform::from_url(&url),
            url,
            category: draft.category,
            duration: draft.duration,
            description: draft.description,
            is_vip: draft.is_vip,
            add_time: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };

        self.entries.push(entry);
        self.persist()?;
        debug!(id = %id, "entry added");
        Ok(id)
    }

    /// Replace all mutable fields of an existing entry.
    ///
    /// The id and creation timestamp are kept; the platform is re-derived
    /// from the new URL.
    pub fn update(&mut self, id: &EntryId, draft: EntryDraft) -> StoreResult<()> {
        draft.validate()?;

        let entry = self
            .entries
            .iter_mut()
            .find(|e| &e.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        let url = draft.url.trim().to_string();
        entry.title = draft.title.trim().to_string();
        entry.platform = Platform::from_url(&url);
        entry.url = url;
        entry.category = draft.category;
        entry.duration = draft.duration;
        entry.description = draft.description;
        entry.is_vip = draft.is_vip;

        self.persist()?;
        debug!(id = %id, "entry updated");
        Ok(())
    }

    /// Remove all entries whose id is in `ids`. Absent ids are silently
    /// ignored. Returns the number of entries removed.
    pub fn remove(&mut self, ids: &HashSet<EntryId>) -> StoreResult<usize> {
        let before = self.entries.len();
        self.entries.retain(|e| !ids.contains(&e.id));
        let removed = before - self.entries.len();

        if removed > 0 {
            self.persist()?;
            debug!(removed, "entries removed");
        }
        Ok(removed)
    }

    /// List entries under a filter, in insertion order. No side effects.
    pub fn list(&self, filter: LibraryFilter) -> Vec<&VideoEntry> {
        self.entries.iter().filter(|e| filter.matches(e)).collect()
    }

    pub fn get(&self, id: &EntryId) -> Option<&VideoEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn contains(&self, id: &EntryId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Time-derived id, bumped past any existing id so that entries added
    /// within the same millisecond stay unique.
    fn next_id(&self) -> EntryId {
        let mut millis = Utc::now().timestamp_millis();
        loop {
            let id = EntryId::from_millis(millis);
            if !self.contains(&id) {
                return id;
            }
            millis += 1;
        }
    }

    fn persist(&self) -> StoreResult<()> {
        let raw = serde_json::to_string(&self.entries)?;
        self.backend.put(VIDEO_LIBRARY_KEY, &raw)
    }
}

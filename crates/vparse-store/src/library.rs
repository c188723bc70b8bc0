//! Library facade: catalog + selection + parse-result cache.
//!
//! One owned object for whatever drives the UI, so catalog mutations,
//! selection bookkeeping and the cached parse result stay consistent.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;

use vparse_models::{EntryDraft, EntryId, ParseResult, VideoEntry};

use crate::backend::{StorageBackend, LAST_PARSE_RESULT_KEY};
use crate::catalog::{CatalogStore, LibraryFilter};
use crate::error::StoreResult;
use crate::selection::SelectionController;
use crate::view::{project, LibraryView};

pub struct Library {
    catalog: CatalogStore,
    selection: SelectionController,
    backend: Arc<dyn StorageBackend>,
}

impl Library {
    /// Open the library from a storage backend.
    pub fn open(backend: Arc<dyn StorageBackend>) -> StoreResult<Self> {
        let catalog = CatalogStore::open(backend.clone())?;
        Ok(Self {
            catalog,
            selection: SelectionController::new(),
            backend,
        })
    }

    // --- catalog ---

    pub fn add(&mut self, draft: EntryDraft) -> StoreResult<EntryId> {
        self.catalog.add(draft)
    }

    pub fn update(&mut self, id: &EntryId, draft: EntryDraft) -> StoreResult<()> {
        self.catalog.update(id, draft)
    }

    /// Remove entries and prune any now-dangling selected ids.
    pub fn remove(&mut self, ids: &HashSet<EntryId>) -> StoreResult<usize> {
        let removed = self.catalog.remove(ids)?;
        let catalog = &self.catalog;
        self.selection.retain(|id| catalog.contains(id));
        Ok(removed)
    }

    pub fn list(&self, filter: LibraryFilter) -> Vec<&VideoEntry> {
        self.catalog.list(filter)
    }

    pub fn get(&self, id: &EntryId) -> Option<&VideoEntry> {
        self.catalog.get(id)
    }

    // --- selection / batch ---

    pub fn toggle_batch_mode(&mut self) {
        self.selection.toggle_batch_mode();
    }

    pub fn select(&mut self, id: EntryId) {
        self.selection.select(id);
    }

    pub fn deselect(&mut self, id: &EntryId) {
        self.selection.deselect(id);
    }

    /// Select exactly the entries visible under `filter` at call time.
    pub fn select_all(&mut self, filter: LibraryFilter) {
        let visible: Vec<EntryId> = self
            .catalog
            .list(filter)
            .into_iter()
            .map(|e| e.id.clone())
            .collect();
        self.selection.select_all(visible);
    }

    pub fn cancel_selection(&mut self) {
        self.selection.cancel();
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    /// Delete every selected entry.
    ///
    /// A no-op returning 0 when nothing is selected; the caller surfaces
    /// "nothing selected" and gates on user confirmation before invoking.
    /// On completion the selection is cleared and batch mode exits.
    pub fn bulk_delete(&mut self) -> StoreResult<usize> {
        if self.selection.is_empty() {
            return Ok(0);
        }
        let ids = self.selection.ids().clone();
        let removed = self.catalog.remove(&ids)?;
        self.selection.cancel();
        info!(removed, "bulk delete completed");
        Ok(removed)
    }

    // --- views ---

    /// Project the current state into the card/table presentations.
    pub fn view(&self, filter: LibraryFilter) -> LibraryView {
        let entries = self.catalog.list(filter);
        project(&entries, &self.selection)
    }

    // --- parse-result cache ---

    /// Cache the most recent parse result for the fallback player.
    pub fn cache_parse_result(&self, result: &ParseResult) -> StoreResult<()> {
        let raw = serde_json::to_string(result)?;
        self.backend.put(LAST_PARSE_RESULT_KEY, &raw)
    }

    /// Most recent cached parse result, if any.
    pub fn last_parse_result(&self) -> StoreResult<Option<ParseResult>> {
        match self.backend.get(LAST_PARSE_RESULT_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }
}

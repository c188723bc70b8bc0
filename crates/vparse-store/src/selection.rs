//! Selection state for batch operations.

use std::collections::HashSet;

use vparse_models::EntryId;

/// Set of entries checked for batch operations plus the batch-mode flag.
///
/// Never persisted; a new session always starts unselected.
#[derive(Debug, Default)]
pub struct SelectionController {
    selected: HashSet<EntryId>,
    batch_mode: bool,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle batch mode. Entering batch mode clears any prior selection so
    /// the toolbar always starts from zero.
    pub fn toggle_batch_mode(&mut self) {
        self.batch_mode = !self.batch_mode;
        if self.batch_mode {
            self.selected.clear();
        }
    }

    pub fn batch_mode(&self) -> bool {
        self.batch_mode
    }

    pub fn select(&mut self, id: EntryId) {
        self.selected.insert(id);
    }

    pub fn deselect(&mut self, id: &EntryId) {
        self.selected.remove(id);
    }

    /// Select exactly the given ids (the ids currently visible under the
    /// active filter, not the whole catalog).
    pub fn select_all(&mut self, visible: impl IntoIterator<Item = EntryId>) {
        self.selected = visible.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Exit batch mode and drop the selection (cancel path).
    pub fn cancel(&mut self) {
        self.selected.clear();
        self.batch_mode = false;
    }

    pub fn is_selected(&self, id: &EntryId) -> bool {
        self.selected.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn ids(&self) -> &HashSet<EntryId> {
        &self.selected
    }

    /// Drop selected ids that no longer resolve to a catalog entry.
    pub fn retain(&mut self, mut keep: impl FnMut(&EntryId) -> bool) {
        self.selected.retain(|id| keep(id));
    }
}

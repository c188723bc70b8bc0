//! Local catalog store for the vparse frontend.
//!
//! This crate provides:
//! - Whole-value storage backends (file-backed and in-memory)
//! - The catalog store (CRUD + filter over video entries)
//! - Selection/batch state for bulk operations
//! - A `Library` facade tying catalog, selection and the parse-result cache
//! - Pure view projections for the card grid and table presentations

pub mod backend;
pub mod catalog;
pub mod error;
pub mod library;
pub mod selection;
pub mod view;

pub use backend::{FileBackend, MemoryBackend, StorageBackend, LAST_PARSE_RESULT_KEY, VIDEO_LIBRARY_KEY};
pub use catalog::{CatalogStore, LibraryFilter};
pub use error::{StoreError, StoreResult};
pub use library::Library;
pub use selection::SelectionController;
pub use view::{CardView, LibraryView, TableRow};

//! Pure view projections.
//!
//! Given catalog entries, selection state and a filter, derive the two
//! presentations (card grid and table). Stateless given the inputs; the
//! presentation layer only renders these models.

use vparse_models::{EntryId, VideoEntry};

use crate::selection::SelectionController;

/// Card view-model for the grid presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: EntryId,
    pub title: String,
    pub platform_label: &'static str,
    /// Stable slug for per-platform styling
    pub platform_slug: &'static str,
    pub vip: bool,
    pub description: String,
    pub added_at: String,
    /// Checkbox rendered only in batch mode; `Some(checked)` when visible
    pub checkbox: Option<bool>,
}

/// Row view-model for the table presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: EntryId,
    pub title: String,
    pub platform_label: &'static str,
    pub category_label: &'static str,
    pub access_label: &'static str,
    pub added_at: String,
    pub selected: bool,
}

/// The full library presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryView {
    pub cards: Vec<CardView>,
    pub rows: Vec<TableRow>,
    pub empty: bool,
    pub batch_mode: bool,
    pub selected_count: usize,
}

/// Project filtered entries plus selection state into view models.
pub fn project(entries: &[&VideoEntry], selection: &SelectionController) -> LibraryView {
    let cards = entries
        .iter()
        .map(|entry| CardView {
            id: entry.id.clone(),
            title: entry.title.clone(),
            platform_label: entry.platform.display_name(),
            platform_slug: entry.platform.as_str(),
            vip: entry.is_vip,
            description: entry
                .description
                .clone()
                .unwrap_or_else(|| "No description".to_string()),
            added_at: entry.add_time.clone(),
            checkbox: selection
                .batch_mode()
                .then(|| selection.is_selected(&entry.id)),
        })
        .collect();

    let rows = entries
        .iter()
        .map(|entry| TableRow {
            id: entry.id.clone(),
            title: entry.title.clone(),
            platform_label: entry.platform.display_name(),
            category_label: entry.category.display_name(),
            access_label: if entry.is_vip { "VIP" } else { "Free" },
            added_at: entry.add_time.clone(),
            selected: selection.is_selected(&entry.id),
        })
        .collect();

    LibraryView {
        cards,
        rows,
        empty: entries.is_empty(),
        batch_mode: selection.batch_mode(),
        selected_count: selection.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vparse_models::{Category, Platform};

    fn entry(id: &str, title: &str, is_vip: bool) -> VideoEntry {
        VideoEntry {
            id: EntryId::from(id),
            title: title.to_string(),
            url: "https://bilibili.com/video/1".to_string(),
            category: Category::Anime,
            duration: None,
            description: None,
            is_vip,
            platform: Platform::Bilibili,
            add_time: "2024-11-14 12:00:00".to_string(),
        }
    }

    #[test]
    fn test_empty_projection() {
        let selection = SelectionController::new();
        let view = project(&[], &selection);
        assert!(view.empty);
        assert!(view.cards.is_empty());
        assert!(view.rows.is_empty());
    }

    #[test]
    fn test_card_checkbox_only_in_batch_mode() {
        let a = entry("1", "A", false);
        let entries = vec![&a];

        let mut selection = SelectionController::new();
        let view = project(&entries, &selection);
        assert_eq!(view.cards[0].checkbox, None);

        selection.toggle_batch_mode();
        selection.select(EntryId::from("1"));
        let view = project(&entries, &selection);
        assert_eq!(view.cards[0].checkbox, Some(true));
        assert_eq!(view.selected_count, 1);
    }

    #[test]
    fn test_row_labels() {
        let a = entry("1", "A", true);
        let b = entry("2", "B", false);
        let entries = vec![&a, &b];
        let selection = SelectionController::new();

        let view = project(&entries, &selection);
        assert_eq!(view.rows[0].access_label, "VIP");
        assert_eq!(view.rows[1].access_label, "Free");
        assert_eq!(view.rows[0].platform_label, "Bilibili");
        assert_eq!(view.rows[0].category_label, "Anime");
        assert_eq!(view.cards[0].description, "No description");
    }
}

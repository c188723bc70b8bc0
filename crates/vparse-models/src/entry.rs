//! Video catalog entry models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::platform::Platform;
use crate::utils::is_absolute_http_url;

/// Unique identifier for a catalog entry.
///
/// Opaque, time-derived string: the Unix millisecond timestamp at creation,
/// bumped by the catalog until unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl EntryId {
    /// Create an id from a millisecond timestamp.
    pub fn from_millis(millis: i64) -> Self {
        Self(millis.to_string())
    }

    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Fixed category set for catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Education,
    Entertainment,
    Technology,
    Music,
    Sports,
    Vip,
    Movie,
    Tv,
    Anime,
    Documentary,
}

impl Category {
    /// Human-readable category label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Education => "Education",
            Category::Entertainment => "Entertainment",
            Category::Technology => "Technology",
            Category::Music => "Music",
            Category::Sports => "Sports",
            Category::Vip => "VIP",
            Category::Movie => "Movie",
            Category::Tv => "TV Series",
            Category::Anime => "Anime",
            Category::Documentary => "Documentary",
        }
    }
}

/// Validation failures for user-supplied entry fields.
///
/// Surfaced synchronously; a failed validation leaves the catalog unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("video title must not be empty")]
    EmptyTitle,

    #[error("invalid video URL: {0}")]
    InvalidUrl(String),
}

/// A bookmarked video in the catalog.
///
/// `platform` is always a pure function of `url` and is re-derived on every
/// mutation; `id` and `add_time` are fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoEntry {
    /// Unique entry id
    pub id: EntryId,

    /// Video title (non-empty)
    pub title: String,

    /// Source URL (absolute http/https)
    pub url: String,

    /// Category
    pub category: Category,

    /// Free-text duration label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the video is VIP-gated on its source platform
    pub is_vip: bool,

    /// Source platform, derived from the URL
    pub platform: Platform,

    /// Creation timestamp (display string)
    pub add_time: String,
}

/// Mutable fields of an entry, as submitted from the add/edit forms.
///
/// Everything except `id`, `platform` and `add_time` — those are assigned or
/// derived by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    pub title: String,
    pub url: String,
    pub category: Category,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_vip: bool,
}

impl EntryDraft {
    /// Validate user-supplied fields: non-empty title, absolute http/https URL.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if !is_absolute_http_url(self.url.trim()) {
            return Err(ValidationError::InvalidUrl(self.url.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, url: &str) -> EntryDraft {
        EntryDraft {
            title: title.to_string(),
            url: url.to_string(),
            category: Category::Movie,
            duration: None,
            description: None,
            is_vip: false,
        }
    }

    #[test]
    fn test_draft_validation() {
        assert!(draft("Demo", "https://bilibili.com/video/1").validate().is_ok());
        assert_eq!(
            draft("", "https://bilibili.com/video/1").validate(),
            Err(ValidationError::EmptyTitle)
        );
        assert_eq!(
            draft("   ", "https://bilibili.com/video/1").validate(),
            Err(ValidationError::EmptyTitle)
        );
        assert!(matches!(
            draft("Demo", "bilibili.com/video/1").validate(),
            Err(ValidationError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_entry_serde_round_trip() {
        let entry = VideoEntry {
            id: EntryId::from_millis(1700000000000),
            title: "Demo".to_string(),
            url: "https://bilibili.com/video/1".to_string(),
            category: Category::Anime,
            duration: Some("12:34".to_string()),
            description: None,
            is_vip: true,
            platform: Platform::Bilibili,
            add_time: "2024-11-14 12:00:00".to_string(),
        };

        let json = serde_json::to_string(&entry).unwrap();
        // Wire field names match the stored localStorage layout
        assert!(json.contains("\"isVip\":true"));
        assert!(json.contains("\"addTime\""));

        let back: VideoEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}

//! Source platform derivation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source video hosting platform, derived from the entry URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Bilibili,
    Iqiyi,
    Tencent,
    Youku,
    Youtube,
    Mgtv,
    Sohu,
    #[default]
    Unknown,
}

/// Ordered marker table for platform derivation. First match wins, so a URL
/// that could match several markers resolves to the earliest row.
const PLATFORM_MARKERS: &[(&str, Platform)] = &[
    ("bilibili", Platform::Bilibili),
    ("iqiyi", Platform::Iqiyi),
    ("v.qq.com", Platform::Tencent),
    ("qq.com", Platform::Tencent),
    ("youku", Platform::Youku),
    ("youtube", Platform::Youtube),
    ("mgtv", Platform::Mgtv),
    ("sohu", Platform::Sohu),
];

impl Platform {
    /// Derive the platform from a URL by case-sensitive substring match
    /// against the marker table.
    pub fn from_url(url: &str) -> Self {
        PLATFORM_MARKERS
            .iter()
            .find(|(marker, _)| url.contains(marker))
            .map(|(_, platform)| *platform)
            .unwrap_or(Platform::Unknown)
    }

    /// Stable slug used in serialized entries and view-model CSS classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Bilibili => "bilibili",
            Platform::Iqiyi => "iqiyi",
            Platform::Tencent => "tencent",
            Platform::Youku => "youku",
            Platform::Youtube => "youtube",
            Platform::Mgtv => "mgtv",
            Platform::Sohu => "sohu",
            Platform::Unknown => "unknown",
        }
    }

    /// Human-readable platform label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Bilibili => "Bilibili",
            Platform::Iqiyi => "iQIYI",
            Platform::Tencent => "Tencent Video",
            Platform::Youku => "Youku",
            Platform::Youtube => "YouTube",
            Platform::Mgtv => "Mango TV",
            Platform::Sohu => "Sohu TV",
            Platform::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_table() {
        assert_eq!(Platform::from_url("https://bilibili.com/video/1"), Platform::Bilibili);
        assert_eq!(Platform::from_url("https://www.iqiyi.com/v_abc.html"), Platform::Iqiyi);
        assert_eq!(Platform::from_url("https://v.qq.com/x/cover/xyz"), Platform::Tencent);
        assert_eq!(Platform::from_url("https://m.qq.com/play/1"), Platform::Tencent);
        assert_eq!(Platform::from_url("https://youku.com/v_show/id_X.html"), Platform::Youku);
        assert_eq!(Platform::from_url("https://youtube.com/watch?v=abc"), Platform::Youtube);
        assert_eq!(Platform::from_url("https://mgtv.com/b/1/2.html"), Platform::Mgtv);
        assert_eq!(Platform::from_url("https://tv.sohu.com/v/1.html"), Platform::Sohu);
        assert_eq!(Platform::from_url("https://example.com/video"), Platform::Unknown);
    }

    #[test]
    fn test_first_match_wins() {
        // Matches both the iqiyi and qq.com markers; iqiyi is earlier.
        assert_eq!(
            Platform::from_url("https://iqiyi.com/v_1?from=qq.com"),
            Platform::Iqiyi
        );
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert_eq!(Platform::from_url("https://BILIBILI.com/video/1"), Platform::Unknown);
    }
}

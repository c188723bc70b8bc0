//! Parse result and parser type models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which parsing path the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParserType {
    /// VIP-gated content, routed through an unlock line
    #[default]
    Vip,
    /// Free content, parsed directly
    Free,
}

impl ParserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParserType::Vip => "vip",
            ParserType::Free => "free",
        }
    }
}

impl fmt::Display for ParserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Playback descriptor returned by the parse gateway.
///
/// `play_url`/`download_url` carry the upstream endpoint URL itself; the
/// upstream is a player page, not a resolved media stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// Display title for the parsed video
    pub title: String,

    /// Playback URL
    pub play_url: String,

    /// Download URL (used by the fallback player)
    pub download_url: String,

    /// File size label
    pub file_size: String,

    /// Quality label
    pub quality: String,

    /// Line that produced this result
    pub parser_line: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_type_wire_values() {
        assert_eq!(serde_json::to_string(&ParserType::Vip).unwrap(), "\"vip\"");
        assert_eq!(serde_json::from_str::<ParserType>("\"free\"").unwrap(), ParserType::Free);
    }

    #[test]
    fn test_parse_result_field_names() {
        let result = ParseResult {
            title: "Parsed video".to_string(),
            play_url: "https://jx.example.com/?url=x".to_string(),
            download_url: "https://jx.example.com/?url=x".to_string(),
            file_size: "1.2GB".to_string(),
            quality: "1080P".to_string(),
            parser_line: "line1".to_string(),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"playUrl\""));
        assert!(json.contains("\"downloadUrl\""));
        assert!(json.contains("\"fileSize\""));
        assert!(json.contains("\"parserLine\""));
    }
}

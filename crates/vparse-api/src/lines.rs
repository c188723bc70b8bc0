//! Upstream parse line table.

use urlencoding::encode;

/// One configured upstream unlock endpoint.
#[derive(Debug, Clone)]
pub struct ParseLine {
    /// Line id the client selects by (`line1`, `line2`, ...)
    pub id: String,
    /// Endpoint prefix; the target URL is percent-encoded and appended
    pub endpoint: String,
}

impl ParseLine {
    pub fn new(id: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Build the upstream request URL for a target video URL.
    pub fn upstream_url(&self, target: &str) -> String {
        format!("{}{}", self.endpoint, encode(target))
    }
}

/// Fixed, ordered set of upstream lines. The first line is the default for
/// absent or unrecognized line ids.
#[derive(Debug, Clone)]
pub struct LineTable {
    lines: Vec<ParseLine>,
}

impl Default for LineTable {
    fn default() -> Self {
        Self {
            lines: vec![
                ParseLine::new("line1", "https://jx.xmflv.com/?url="),
                ParseLine::new("line2", "https://api.kkj.cn/api/?url="),
                ParseLine::new("line3", "https://jiexi.071811.cc/jx.php?url="),
            ],
        }
    }
}

impl LineTable {
    /// Build a table from explicit lines; an empty list falls back to the
    /// default table so `resolve` always has a line to return.
    pub fn new(lines: Vec<ParseLine>) -> Self {
        if lines.is_empty() {
            Self::default()
        } else {
            Self { lines }
        }
    }

    /// Look up a line by id; absent or unknown ids resolve to the default
    /// (first) line.
    pub fn resolve(&self, id: Option<&str>) -> &ParseLine {
        id.and_then(|id| self.lines.iter().find(|line| line.id == id))
            .unwrap_or(&self.lines[0])
    }
}

//! VIP classification rule.

/// URL path markers that identify VIP-gated content pages.
const VIP_PATH_MARKERS: &[&str] = &[
    "iqiyi.com/v_",
    "v.qq.com/x/cover/",
    "youku.com/v_show/id_",
    "mgtv.com/b/",
];

/// Keyword substrings that identify paid/member-only content
/// (matched case-insensitively).
const VIP_KEYWORDS: &[&str] = &["vip", "pay", "member", "收费", "会员"];

/// Classify a URL as VIP-gated.
///
/// True if the URL contains any VIP path marker, or any keyword substring
/// case-insensitively. Classification only; there is no network probe.
pub fn classify_vip(url: &str) -> bool {
    if VIP_PATH_MARKERS.iter().any(|marker| url.contains(marker)) {
        return true;
    }
    let lowered = url.to_lowercase();
    VIP_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_markers() {
        assert!(classify_vip("https://www.iqiyi.com/v_19rr1abc.html"));
        assert!(classify_vip("https://v.qq.com/x/cover/abc/def.html"));
        assert!(classify_vip("https://youku.com/v_show/id_XNDM.html"));
        assert!(classify_vip("https://www.mgtv.com/b/12345/67890.html"));
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert!(classify_vip("https://example.com/VIP/video/1"));
        assert!(classify_vip("https://example.com/watch?tier=PAY"));
        assert!(classify_vip("https://example.com/member/area"));
        assert!(classify_vip("https://example.com/视频/会员"));
    }

    #[test]
    fn test_free_urls() {
        assert!(!classify_vip("https://bilibili.com/video/1"));
        assert!(!classify_vip("https://youtube.com/watch?v=abc"));
        assert!(!classify_vip("https://example.com/"));
    }
}

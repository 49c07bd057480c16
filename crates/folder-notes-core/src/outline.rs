//! Heading outline extraction
//!
//! A line-anchored ATX heading scanner. Work per note is bounded by a content
//! byte cap and a heading count cap, both passed in by the caller.

use std::sync::OnceLock;

use log::debug;
use regex::Regex;
use thiserror::Error;

use crate::model::HeadingEntry;
use crate::utils::floor_char_boundary;

pub const DEFAULT_MAX_HEADINGS: usize = 100;
pub const DEFAULT_MAX_CONTENT_BYTES: usize = 500_000;

/// Failure attached to a single note's outline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutlineError {
    #[error("could not read {path}: {message}")]
    ReadFailed { path: String, message: String },
    #[error("error processing headings in {path}: {message}")]
    Scan { path: String, message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutlineScan {
    pub headings: Vec<HeadingEntry>,
    /// Content exceeded the byte cap and was cut before scanning
    pub truncated: bool,
    /// The heading cap stopped the scan before the content was exhausted
    pub has_more: bool,
}

fn heading_re() -> &'static Regex {
    static HEADING_RE: OnceLock<Regex> = OnceLock::new();
    HEADING_RE.get_or_init(|| Regex::new(r"(?m)^(#+)[ \t]+([^\r\n]+)").unwrap())
}

fn alias_re() -> &'static Regex {
    static ALIAS_RE: OnceLock<Regex> = OnceLock::new();
    ALIAS_RE.get_or_init(|| Regex::new(r"\[\[[^\]|]*\|([^\]]+)\]\]").unwrap())
}

/// Heading label with a `[[target|Alias]]` link reduced to `Alias`.
fn heading_label(raw: &str) -> String {
    match alias_re().captures(raw).and_then(|caps| caps.get(1)) {
        Some(alias) => alias.as_str().trim().to_string(),
        None => raw.trim().to_string(),
    }
}

/// Scan `content` for markdown headings belonging to `note_path`.
pub fn extract_headings(
    content: &str,
    note_path: &str,
    max_headings: usize,
    max_content_bytes: usize,
) -> OutlineScan {
    let truncated = content.len() > max_content_bytes;
    let scanned = if truncated {
        &content[..floor_char_boundary(content, max_content_bytes)]
    } else {
        content
    };

    let mut scan = OutlineScan {
        truncated,
        ..OutlineScan::default()
    };

    for caps in heading_re().captures_iter(scanned) {
        let (Some(hashes), Some(text)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let label = heading_label(text.as_str());
        if label.is_empty() {
            continue;
        }
        if scan.headings.len() == max_headings {
            scan.has_more = true;
            break;
        }
        scan.headings
            .push(HeadingEntry::new(hashes.as_str().len(), label, note_path));
    }

    debug!(
        "scanned {} headings in {} (truncated: {}, more: {})",
        scan.headings.len(),
        note_path,
        scan.truncated,
        scan.has_more
    );
    scan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(content: &str) -> OutlineScan {
        extract_headings(content, "n.md", DEFAULT_MAX_HEADINGS, DEFAULT_MAX_CONTENT_BYTES)
    }

    #[test]
    fn test_extract_levels_and_alias() {
        let result = scan("# A\n## [[Note|B]]\n");
        assert_eq!(result.headings.len(), 2);
        assert_eq!(result.headings[0].level, 1);
        assert_eq!(result.headings[0].label, "A");
        assert_eq!(result.headings[1].level, 2);
        assert_eq!(result.headings[1].label, "B");
        assert_eq!(result.headings[1].anchor_path(), "n.md#B");
        assert!(!result.truncated);
        assert!(!result.has_more);
    }

    #[test]
    fn test_ignores_non_headings() {
        let result = scan("#tag only\ntext # not heading\n  # indented\n#\n####### Deep\r\n");
        assert_eq!(result.headings.len(), 1);
        assert_eq!(result.headings[0].level, 7);
        assert_eq!(result.headings[0].label, "Deep");
    }

    #[test]
    fn test_plain_link_without_alias_kept_verbatim() {
        let result = scan("## See [[Other]] now\n");
        assert_eq!(result.headings[0].label, "See [[Other]] now");
    }

    #[test]
    fn test_heading_cap_signals_more() {
        let content = "# one\n# two\n# three\n";
        let result = extract_headings(content, "n.md", 2, DEFAULT_MAX_CONTENT_BYTES);
        assert_eq!(result.headings.len(), 2);
        assert!(result.has_more);

        let exact = extract_headings("# one\n# two\n", "n.md", 2, DEFAULT_MAX_CONTENT_BYTES);
        assert_eq!(exact.headings.len(), 2);
        assert!(!exact.has_more);
    }

    #[test]
    fn test_truncates_before_scanning() {
        let content = "# First\nbody\n# Second\nmore body\n# Third\n";
        let cap = content.find("# Third").unwrap();
        let result = extract_headings(content, "n.md", DEFAULT_MAX_HEADINGS, cap);
        assert!(result.truncated);
        let labels: Vec<_> = result.headings.iter().map(|h| h.label.as_str()).collect();
        assert_eq!(labels, vec!["First", "Second"]);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let content = "# Café au lait\n";
        // cap lands inside the two-byte 'é'
        let cap = content.find('é').unwrap() + 1;
        let result = extract_headings(content, "n.md", DEFAULT_MAX_HEADINGS, cap);
        assert!(result.truncated);
        assert_eq!(result.headings[0].label, "Caf");
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(scan(""), OutlineScan::default());
    }
}

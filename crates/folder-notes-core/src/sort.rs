use std::sync::OnceLock;

use regex::Regex;

use crate::model::NoteRecord;

/// Offset that places `Y<n>` notes after every `T<n>` note of equal number
pub const Y_SERIES_OFFSET: u64 = 1000;

struct SortPatterns {
    turn: Regex,
    year: Regex,
    digits: Regex,
}

fn patterns() -> &'static SortPatterns {
    static PATTERNS: OnceLock<SortPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| SortPatterns {
        turn: Regex::new(r"T(\d+)").unwrap(),
        year: Regex::new(r"Y(\d+)").unwrap(),
        digits: Regex::new(r"\d+").unwrap(),
    })
}

fn parse_number(digits: &str) -> u64 {
    // Digit runs too long for u64 sort last rather than wrapping.
    digits.parse().unwrap_or(u64::MAX)
}

/// Sequence key derived from a note's basename.
///
/// First match wins: `T<n>` gives `n`, `Y<n>` gives `n + 1000`, otherwise the
/// largest digit run anywhere in the name, otherwise `0`.
///
/// ```
/// use folder_notes_core::compute_sort_key;
///
/// assert_eq!(compute_sort_key("T3"), 3);
/// assert_eq!(compute_sort_key("Y2"), 1002);
/// assert_eq!(compute_sort_key("Chapter 7"), 7);
/// assert_eq!(compute_sort_key("intro"), 0);
/// ```
pub fn compute_sort_key(basename: &str) -> u64 {
    let patterns = patterns();

    if let Some(caps) = patterns.turn.captures(basename) {
        return parse_number(&caps[1]);
    }
    if let Some(caps) = patterns.year.captures(basename) {
        return parse_number(&caps[1]).saturating_add(Y_SERIES_OFFSET);
    }
    patterns
        .digits
        .find_iter(basename)
        .map(|m| parse_number(m.as_str()))
        .max()
        .unwrap_or(0)
}

/// Stable ascending sort by sequence key; equal keys keep their input order.
pub fn sort_notes(notes: &mut [NoteRecord]) {
    notes.sort_by_cached_key(|note| compute_sort_key(&note.basename));
}

use std::sync::OnceLock;

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::PanelSettings;
use crate::model::NoteRecord;

/// Which title filter a result refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKind {
    Include,
    Exclude,
}

/// Parsed title filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Lower-cased, trimmed, non-empty
    pub include_words: Vec<String>,
    pub exclude_words: Vec<String>,
    pub include_subfolders: bool,
}

impl FilterConfig {
    pub fn from_settings(settings: &PanelSettings) -> Self {
        Self {
            include_words: parse_filter_words(&settings.include_title_filter),
            exclude_words: parse_filter_words(&settings.exclude_titles_filter),
            include_subfolders: settings.include_subfolder_notes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.include_words.is_empty() && self.exclude_words.is_empty()
    }
}

/// Result of the title filter stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    /// No filter words configured; candidates passed through untouched
    Unfiltered(Vec<NoteRecord>),
    /// At least one note passed the configured filters
    Matched(Vec<NoteRecord>),
    /// The named filter removed every remaining note
    NoMatches(FilterKind),
}

impl FilterOutcome {
    pub fn into_notes(self) -> Vec<NoteRecord> {
        match self {
            FilterOutcome::Unfiltered(notes) | FilterOutcome::Matched(notes) => notes,
            FilterOutcome::NoMatches(_) => Vec::new(),
        }
    }
}

/// Split filter text on commas and whitespace runs into lower-cased tokens.
///
/// ```
/// use folder_notes_core::filter::parse_filter_words;
///
/// assert_eq!(parse_filter_words(" Draft,  _Index  old"), vec!["draft", "_index", "old"]);
/// assert!(parse_filter_words(" , ,  ").is_empty());
/// ```
pub fn parse_filter_words(text: &str) -> Vec<String> {
    static SPLIT_RE: OnceLock<Regex> = OnceLock::new();
    let split_re = SPLIT_RE.get_or_init(|| Regex::new(r"[,\s]+").unwrap());

    split_re
        .split(text)
        .map(|word| word.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Keep the notes located under `parent_folder`.
///
/// Without `include_subfolders` only direct children are kept. The caller
/// refuses the root folder before getting here.
pub fn select_candidates(
    all_notes: &[NoteRecord],
    parent_folder: &str,
    include_subfolders: bool,
) -> Vec<NoteRecord> {
    let prefix = if parent_folder.is_empty() {
        String::new()
    } else {
        format!("{}/", parent_folder.trim_end_matches('/'))
    };

    all_notes
        .iter()
        .filter(|note| {
            let Some(rest) = note.path.strip_prefix(prefix.as_str()) else {
                return false;
            };
            !rest.is_empty() && (include_subfolders || !rest.contains('/'))
        })
        .cloned()
        .collect()
}

/// Apply include then exclude word filters to the basenames, keeping order.
pub fn apply_text_filters(
    candidates: Vec<NoteRecord>,
    include_words: &[String],
    exclude_words: &[String],
) -> FilterOutcome {
    if include_words.is_empty() && exclude_words.is_empty() {
        return FilterOutcome::Unfiltered(candidates);
    }

    let mut notes = candidates;

    if !include_words.is_empty() {
        notes.retain(|note| {
            let title = note.basename.to_lowercase();
            include_words.iter().any(|word| title.contains(word.as_str()))
        });
        debug!("include filter kept {} notes", notes.len());
        if notes.is_empty() {
            return FilterOutcome::NoMatches(FilterKind::Include);
        }
    }

    if !exclude_words.is_empty() {
        notes.retain(|note| {
            let title = note.basename.to_lowercase();
            !exclude_words.iter().any(|word| title.contains(word.as_str()))
        });
        debug!("exclude filter kept {} notes", notes.len());
        if notes.is_empty() {
            return FilterOutcome::NoMatches(FilterKind::Exclude);
        }
    }

    FilterOutcome::Matched(notes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notes(paths: &[&str]) -> Vec<NoteRecord> {
        paths.iter().map(|p| NoteRecord::from_path(*p)).collect()
    }

    fn words(text: &str) -> Vec<String> {
        parse_filter_words(text)
    }

    #[test]
    fn test_select_direct_children_only() {
        let all = notes(&["a/one.md", "a/sub/two.md", "b/three.md", "ab/four.md", "a/five.md"]);
        let selected = select_candidates(&all, "a", false);
        let paths: Vec<_> = selected.iter().map(|n| n.path.as_str()).collect();
        assert_eq!(paths, vec!["a/one.md", "a/five.md"]);

        for note in &selected {
            assert!(!note.path["a/".len()..].contains('/'));
        }
    }

    #[test]
    fn test_select_with_subfolders() {
        let all = notes(&["a/one.md", "a/sub/two.md", "a/sub/deep/three.md", "b/x.md"]);
        let selected = select_candidates(&all, "a", true);
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_select_does_not_match_sibling_folder_prefix() {
        let all = notes(&["notes/a.md", "notes2/b.md"]);
        let selected = select_candidates(&all, "notes", false);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].path, "notes/a.md");
    }

    #[test]
    fn test_select_nothing_matches() {
        let all = notes(&["x/a.md"]);
        assert!(select_candidates(&all, "y", true).is_empty());
        assert!(select_candidates(&[], "y", false).is_empty());
    }

    #[test]
    fn test_parse_filter_words_variants() {
        assert_eq!(words("a,b"), vec!["a", "b"]);
        assert_eq!(words("A , B"), vec!["a", "b"]);
        assert_eq!(words("a b\tc"), vec!["a", "b", "c"]);
        assert_eq!(words(",,a,,"), vec!["a"]);
        assert!(words("").is_empty());
        assert!(words("   ").is_empty());
    }

    #[test]
    fn test_whitespace_filter_behaves_as_absent() {
        let candidates = notes(&["a/one.md", "a/two.md"]);
        let outcome = apply_text_filters(candidates.clone(), &words("  "), &words(" , "));
        assert_eq!(outcome, FilterOutcome::Unfiltered(candidates));
    }

    #[test]
    fn test_include_filter_any_word() {
        let candidates = notes(&["a/Chapter 1.md", "a/Appendix.md", "a/Intro.md"]);
        let outcome = apply_text_filters(candidates, &words("chapter, INTRO"), &[]);
        let kept: Vec<_> = outcome.into_notes().into_iter().map(|n| n.basename).collect();
        assert_eq!(kept, vec!["Chapter 1", "Intro"]);
    }

    #[test]
    fn test_exclude_filter_case_insensitive() {
        let candidates = notes(&["a/_Index.md", "a/Draft notes.md", "a/Final.md"]);
        let outcome = apply_text_filters(candidates, &[], &words("_index draft"));
        let kept: Vec<_> = outcome.into_notes().into_iter().map(|n| n.basename).collect();
        assert_eq!(kept, vec!["Final"]);
    }

    #[test]
    fn test_filter_spacing_and_case_do_not_matter() {
        let candidates = notes(&["a/Alpha.md", "a/Beta.md", "a/Gamma.md", "a/alphabet.md"]);
        let first = apply_text_filters(candidates.clone(), &words("alpha,gamma"), &words("BET"));
        let second =
            apply_text_filters(candidates, &words("  ALPHA ,   Gamma "), &words(" bet"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_matches_names_the_emptying_filter() {
        let candidates = notes(&["a/one.md", "a/two.md"]);
        assert_eq!(
            apply_text_filters(candidates.clone(), &words("zzz"), &[]),
            FilterOutcome::NoMatches(FilterKind::Include)
        );
        assert_eq!(
            apply_text_filters(candidates.clone(), &words("o"), &words("one two")),
            FilterOutcome::NoMatches(FilterKind::Exclude)
        );
        assert!(matches!(
            apply_text_filters(candidates, &words("o"), &words("one")),
            FilterOutcome::Matched(ref kept) if kept.len() == 1
        ));
    }
}

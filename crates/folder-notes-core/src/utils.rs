use std::path::Path;
use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Normalize a file path to a host note path.
///
/// Converts a file path to the slash separated form notes are keyed by:
/// - Converting backslashes to forward slashes (Windows compatibility)
/// - Dropping any leading `./`
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use folder_notes_core::utils::normalize_note_path;
///
/// assert_eq!(normalize_note_path(Path::new("foo/bar.md")), "foo/bar.md");
/// assert_eq!(normalize_note_path(Path::new("./note.md")), "note.md");
/// # if cfg!(windows) {
/// #     assert_eq!(normalize_note_path(Path::new("foo\\bar.md")), "foo/bar.md");
/// # }
/// ```
pub fn normalize_note_path(path: &Path) -> String {
    let mut s = path.to_string_lossy().to_string();
    if std::path::MAIN_SEPARATOR == '\\' {
        s = s.replace('\\', "/");
    }
    s.trim_start_matches("./").to_string()
}

/// Folder part of a note path; empty for notes at the vault root.
///
/// ```
/// use folder_notes_core::parent_folder;
///
/// assert_eq!(parent_folder("a/b/c.md"), "a/b");
/// assert_eq!(parent_folder("c.md"), "");
/// ```
pub fn parent_folder(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// File name without folder and without its last extension.
pub fn basename_of(path: &str) -> &str {
    let file = match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    };
    match file.rfind('.') {
        Some(0) | None => file,
        Some(idx) => &file[..idx],
    }
}

/// Title-case every word: first character upper, the rest lower.
///
/// A word is a word character followed by any run of non-whitespace.
///
/// ```
/// use folder_notes_core::pretty_title;
///
/// assert_eq!(pretty_title("the QUICK fox"), "The Quick Fox");
/// assert_eq!(pretty_title("t3-arrival notes"), "T3-arrival Notes");
/// ```
pub fn pretty_title(title: &str) -> String {
    static WORD_RE: OnceLock<Regex> = OnceLock::new();
    let word_re = WORD_RE.get_or_init(|| Regex::new(r"\w\S*").unwrap());

    word_re
        .replace_all(title, |caps: &Captures| {
            let word = &caps[0];
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut out: String = first.to_uppercase().collect();
                    out.push_str(&chars.as_str().to_lowercase());
                    out
                }
                None => String::new(),
            }
        })
        .into_owned()
}

/// Largest char boundary in `text` that is not past `max`.
pub(crate) fn floor_char_boundary(text: &str, max: usize) -> usize {
    if max >= text.len() {
        return text.len();
    }
    let mut idx = max;
    while !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename_of() {
        assert_eq!(basename_of("a/b/Chapter 2.md"), "Chapter 2");
        assert_eq!(basename_of("note.md"), "note");
        assert_eq!(basename_of("a/v1.2 notes.md"), "v1.2 notes");
        assert_eq!(basename_of("a/.hidden"), ".hidden");
        assert_eq!(basename_of("a/plain"), "plain");
    }

    #[test]
    fn test_pretty_title() {
        assert_eq!(pretty_title("hello world"), "Hello World");
        assert_eq!(pretty_title("  spaced   out "), "  Spaced   Out ");
        assert_eq!(pretty_title("élan VITAL"), "Élan Vital");
        assert_eq!(pretty_title("_index"), "_index");
        assert_eq!(pretty_title(""), "");
    }

    #[test]
    fn test_floor_char_boundary() {
        let text = "aé"; // 'é' is two bytes
        assert_eq!(floor_char_boundary(text, 2), 1);
        assert_eq!(floor_char_boundary(text, 3), 3);
        assert_eq!(floor_char_boundary(text, 10), 3);
        assert_eq!(floor_char_boundary(text, 0), 0);
    }
}

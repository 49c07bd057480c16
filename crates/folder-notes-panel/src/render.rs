use std::fmt::Write;

use folder_notes_core::OutlineState;

use crate::panel::{PanelBody, PanelView};

/// Plain-text rendering of a panel view, one line per item.
pub fn render_text(view: &PanelView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title);

    let (entries, hidden_notes, navigation) = match &view.body {
        PanelBody::Message(text) => {
            let _ = writeln!(out, "{}", text);
            return out;
        }
        PanelBody::Notes {
            entries,
            hidden_notes,
            navigation,
        } => (entries, *hidden_notes, navigation),
    };

    for entry in entries {
        let _ = writeln!(out, "{}", entry.title);
        match &entry.outline {
            OutlineState::Hidden => {}
            OutlineState::Pending => {
                let _ = writeln!(out, "    (loading outline)");
            }
            OutlineState::Failed(_) => {
                let _ = writeln!(out, "    (error processing headings)");
            }
            OutlineState::Loaded(scan) => {
                for heading in &scan.headings {
                    let indent = "  ".repeat(heading.level);
                    let _ = writeln!(out, "  {}{}", indent, heading.label);
                }
                if scan.has_more {
                    let _ = writeln!(out, "    (more headings not shown)");
                }
                if scan.truncated {
                    let _ = writeln!(out, "    (note too large, outline truncated)");
                }
            }
        }
    }

    if hidden_notes > 0 {
        let _ = writeln!(out, "{} more notes not shown", hidden_notes);
    }

    if let Some(nav) = navigation {
        let previous = nav.previous.as_ref().map(|link| format!("<- {}", link.title));
        let next = nav.next.as_ref().map(|link| format!("{} ->", link.title));
        let links: Vec<String> = previous.into_iter().chain(next).collect();
        if !links.is_empty() {
            let _ = writeln!(out, "{}", links.join(" | "));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::{NavLink, ViewEntry, ViewNavigation};
    use folder_notes_core::{extract_headings, NoteRecord, OutlineError};

    fn entry(path: &str, title: &str, outline: OutlineState) -> ViewEntry {
        ViewEntry {
            note: NoteRecord::from_path(path),
            title: title.to_string(),
            is_current: title.starts_with("> "),
            outline,
        }
    }

    #[test]
    fn test_render_message() {
        let view = PanelView {
            generation: 1,
            title: "Current Folder Notes",
            style_classes: vec![],
            body: PanelBody::Message("No notes in this folder".to_string()),
        };
        assert_eq!(render_text(&view), "Current Folder Notes\nNo notes in this folder\n");
    }

    #[test]
    fn test_render_entries_and_outlines() {
        let scan = extract_headings("# Top\n## Sub\n# Next\n", "s/T1.md", 2, 1000);
        let large = "# Opening\n".to_string() + &"filler\n".repeat(20) + "# Ending\n";
        let cut = extract_headings(&large, "s/T4.md", 10, 40);
        assert!(cut.truncated);
        let view = PanelView {
            generation: 1,
            title: "Current Folder Notes",
            style_classes: vec![],
            body: PanelBody::Notes {
                entries: vec![
                    entry("s/T1.md", "> T1", OutlineState::Loaded(scan)),
                    entry("s/T2.md", "T2", OutlineState::Pending),
                    entry(
                        "s/T3.md",
                        "T3",
                        OutlineState::Failed(OutlineError::ReadFailed {
                            path: "s/T3.md".into(),
                            message: "gone".into(),
                        }),
                    ),
                    entry("s/T4.md", "T4", OutlineState::Loaded(cut)),
                ],
                hidden_notes: 4,
                navigation: Some(ViewNavigation {
                    previous: None,
                    next: Some(NavLink {
                        note: NoteRecord::from_path("s/t2 draft.md"),
                        title: "t2 draft".to_string(),
                    }),
                }),
            },
        };

        let text = render_text(&view);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Current Folder Notes",
                "> T1",
                "    Top",
                "      Sub",
                "    (more headings not shown)",
                "T2",
                "    (loading outline)",
                "T3",
                "    (error processing headings)",
                "T4",
                "    Opening",
                "    (note too large, outline truncated)",
                "4 more notes not shown",
                "t2 draft ->",
            ]
        );
    }
}

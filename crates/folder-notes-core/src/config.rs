use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::outline::{DEFAULT_MAX_CONTENT_BYTES, DEFAULT_MAX_HEADINGS};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid settings YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Persisted panel settings.
///
/// Every field is optional on the wire; missing or unknown keys fall back to
/// the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PanelSettings {
    /// Only list notes whose title contains one of these words
    pub include_title_filter: String,
    /// Hide notes whose title contains one of these words
    pub exclude_titles_filter: String,
    /// Render titles in Title Case
    pub pretty_title_case: bool,
    pub include_subfolder_notes: bool,
    /// Show the outline of the active note
    pub show_current_outline: bool,
    /// Show the outline of every listed note
    pub show_all_outlines: bool,
    pub display_style: DisplayStyle,
    /// Previous/next links around the active note
    pub show_navigation_links: bool,
    pub larger_text: bool,
    /// Apply `larger_text` only on mobile hosts
    pub larger_text_mobile_only: bool,
    pub limits: OutlineLimits,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayStyle {
    #[default]
    Default,
    Compact,
    Bordered,
}

impl DisplayStyle {
    pub fn class_name(&self) -> &'static str {
        match self {
            DisplayStyle::Default => "folder-notes-style-default",
            DisplayStyle::Compact => "folder-notes-style-compact",
            DisplayStyle::Bordered => "folder-notes-style-bordered",
        }
    }
}

/// Bounds on the work done by a single refresh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutlineLimits {
    pub max_notes: usize,
    pub max_headings: usize,
    pub max_content_bytes: usize,
    /// Quiet window before a burst of refresh requests runs
    pub refresh_debounce_ms: u64,
}

impl Default for OutlineLimits {
    fn default() -> Self {
        Self {
            max_notes: 500,
            max_headings: DEFAULT_MAX_HEADINGS,
            max_content_bytes: DEFAULT_MAX_CONTENT_BYTES,
            refresh_debounce_ms: 300,
        }
    }
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            include_title_filter: String::new(),
            exclude_titles_filter: "_index".to_string(),
            pretty_title_case: true,
            include_subfolder_notes: false,
            show_current_outline: true,
            show_all_outlines: false,
            display_style: DisplayStyle::Default,
            show_navigation_links: false,
            larger_text: false,
            larger_text_mobile_only: false,
            limits: OutlineLimits::default(),
        }
    }
}

impl PanelSettings {
    /// Load settings from host-persisted JSON
    pub fn from_json(value: serde_json::Value) -> Result<Self, SettingsError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_json(&self) -> Result<serde_json::Value, SettingsError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Load settings from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self, SettingsError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, SettingsError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Style classes for the panel container
    pub fn style_classes(&self, is_mobile: bool) -> Vec<&'static str> {
        let mut classes = vec![self.display_style.class_name()];
        if self.larger_text && (!self.larger_text_mobile_only || is_mobile) {
            classes.push("folder-notes-larger-text");
        }
        classes
    }
}

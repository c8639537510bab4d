//! Editor settings.
//!
//! Settings cover the fixed texts the editor shows (placeholder rows, empty
//! headers, default names for new entries) and the rename validation policy.
//! They are persisted as TOML; missing keys fall back to defaults.

mod persistence;

pub use persistence::{
    load_settings, load_settings_from, save_settings, save_settings_to, settings_path,
};

use serde::{Deserialize, Serialize};

// ============================================================================
// Main Settings Struct
// ============================================================================

/// Editor settings (persisted to disk as TOML).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub labels: LabelSettings,
    pub validation: ValidationSettings,
}

// ============================================================================
// Labels
// ============================================================================

/// Texts shown by the list views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSettings {
    /// Placeholder row at the end of the decision maker list.
    pub add_item: String,
    /// Editor header while no decision maker is loaded.
    pub no_selection_header: String,
    /// Name field text while no decision maker is loaded.
    pub no_selection_name: String,
    /// Prefix of the editor header, followed by the decision maker's name.
    pub editing_prefix: String,
    /// Name given to a freshly added option.
    pub new_option: String,
    /// Name given to a freshly added decision maker.
    pub new_decision_maker: String,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            add_item: "Double Click to Add Item".to_string(),
            no_selection_header: "Select a Decision Maker".to_string(),
            no_selection_name: "No DM Selected".to_string(),
            editing_prefix: "Editing DM ".to_string(),
            new_option: "New Option".to_string(),
            new_decision_maker: "New Decision Maker".to_string(),
        }
    }
}

impl LabelSettings {
    /// Header shown while editing the named decision maker.
    pub fn editing_header(&self, name: &str) -> String {
        format!("{}{}", self.editing_prefix, name)
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Rename validation policy.
///
/// Renames are always applied as typed. The policy only decides which names
/// get reported back as worth a second look.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// Report blank names as [`NameCheck::Empty`](crate::NameCheck::Empty).
    pub flag_empty_names: bool,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            flag_empty_names: true,
        }
    }
}

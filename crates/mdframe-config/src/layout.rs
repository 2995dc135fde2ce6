//! Layout configuration: paddings, spacings and fixed sizes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct LayoutConfig {
    /// Padding inside the root frame.
    #[serde(default = "default_root_padding")]
    pub root_padding: f32,

    /// Gap between top-level blocks.
    #[serde(default = "default_root_spacing")]
    pub root_spacing: f32,

    /// Total width shared by the cells of each table row.
    #[serde(default = "default_table_width")]
    pub table_width: f32,

    /// Width of a thematic break line.
    #[serde(default = "default_rule_width")]
    pub rule_width: f32,

    #[serde(default = "default_code_padding")]
    pub code_padding: f32,

    /// Corner radius of code block frames.
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f32,

    #[serde(default = "default_cell_padding")]
    pub cell_padding: f32,

    #[serde(default = "default_quote_padding")]
    pub quote_padding: f32,

    /// Gap between list rows.
    #[serde(default = "default_list_spacing")]
    pub list_spacing: f32,

    /// Gap between a list marker and its text.
    #[serde(default = "default_list_item_spacing")]
    pub list_item_spacing: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            root_padding: default_root_padding(),
            root_spacing: default_root_spacing(),
            table_width: default_table_width(),
            rule_width: default_rule_width(),
            code_padding: default_code_padding(),
            corner_radius: default_corner_radius(),
            cell_padding: default_cell_padding(),
            quote_padding: default_quote_padding(),
            list_spacing: default_list_spacing(),
            list_item_spacing: default_list_item_spacing(),
        }
    }
}

impl LayoutConfig {
    /// Merge another LayoutConfig into this one.
    pub fn merge(&mut self, other: &LayoutConfig) {
        *self = *other;
    }
}

fn default_root_padding() -> f32 {
    24.0
}

fn default_root_spacing() -> f32 {
    8.0
}

fn default_table_width() -> f32 {
    600.0
}

fn default_rule_width() -> f32 {
    600.0
}

fn default_code_padding() -> f32 {
    16.0
}

fn default_corner_radius() -> f32 {
    6.0
}

fn default_cell_padding() -> f32 {
    12.0
}

fn default_quote_padding() -> f32 {
    8.0
}

fn default_list_spacing() -> f32 {
    4.0
}

fn default_list_item_spacing() -> f32 {
    8.0
}

//! Gallery options as supplied by the host.
//!
//! Options arrive either built programmatically or as a camelCase JSON
//! object (the host's options literal). Unrecognized keys are ignored;
//! missing keys fall back to the defaults below. The loosely-typed
//! `columns` value is captured as an untagged union and resolved once
//! at initialization, never re-inspected per item.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default column count when the host supplies none.
pub const DEFAULT_COLUMNS: i64 = 3;

/// The `columns` option: a uniform count, a per-breakpoint table, or
/// whatever else the host handed over (kept verbatim so the diagnostic
/// can show it; such a value skips layout instead of failing).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ColumnSetting {
    Uniform(i64),
    PerBreakpoint(BreakpointColumns),
    Other(serde_json::Value),
}

impl Default for ColumnSetting {
    fn default() -> Self {
        Self::Uniform(DEFAULT_COLUMNS)
    }
}

/// Column counts per named breakpoint. Absent slots inherit nothing;
/// the corresponding span annotation simply stays unset.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BreakpointColumns {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xs: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sm: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lg: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xl: Option<i64>,
}

/// Where the render surface should place the filter controls.
/// A rendering hint only; the core never positions anything.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TagsPosition {
    Top,
    #[default]
    Bottom,
}

/// Recognized gallery options with the stock defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryOptions {
    pub columns: ColumnSetting,
    /// Enables the modal viewer.
    #[serde(rename = "lightBox")]
    pub lightbox: bool,
    /// Overlay element the render surface should target. Hint only.
    pub lightbox_id: Option<String>,
    /// Enables the tag filter controls.
    pub show_tags: bool,
    pub tags_position: TagsPosition,
    /// Enables the prev/next controls in the lightbox.
    pub navigation: bool,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            columns: ColumnSetting::default(),
            lightbox: true,
            lightbox_id: None,
            show_tags: true,
            tags_position: TagsPosition::default(),
            navigation: true,
        }
    }
}

impl GalleryOptions {
    /// Parses a host-supplied options object, e.g.
    /// `{"columns": {"sm": 2, "lg": 3}, "lightBox": true}`.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

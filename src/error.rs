use thiserror::Error;

use crate::models::ItemId;

/// Errors raised by gallery state transitions.
///
/// Every variant is local to a single event handler: a failed transition
/// leaves the active tag, visible set and lightbox state exactly as they
/// were before the event.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// A column count in the configuration is zero or negative.
    /// Fatal to layout computation; no partial layout is applied.
    #[error("column count must be at least 1, got {count}")]
    InvalidColumnCount { count: i64 },

    /// The `columns` option is neither a number nor a per-breakpoint
    /// table. Non-fatal: the layout step is skipped and items keep no
    /// span annotation.
    #[error("columns must be a number or a per-breakpoint table, got {found}")]
    UnsupportedColumns { found: String },

    /// An activated item could not be located in the current visible
    /// set. Non-fatal: the lightbox stays closed.
    #[error("item {id} is not in the visible set")]
    ItemNotVisible { id: ItemId },

    /// Prev/next navigation was requested while zero items are visible.
    #[error("navigation requested with no visible items")]
    EmptyVisibleSet,

    /// The host-supplied options text could not be parsed.
    #[error("invalid gallery options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GalleryError>;

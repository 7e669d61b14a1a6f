//! State machine for a host-embedded image gallery widget.
//!
//! The crate arranges a flat item collection into a responsive column
//! grid, filters it by per-item tags, and tracks a lightbox viewer
//! with circular prev/next navigation over the visible subset. It
//! never renders anything itself: the host implements
//! [`RenderSurface`] and raises [`GalleryEvent`]s, and the
//! [`GalleryController`] answers with layout and overlay instructions.

pub mod controller;
pub mod error;
pub mod filter;
pub mod layout;
pub mod lightbox;
pub mod models;
pub mod options;
pub mod surface;

pub use controller::{GalleryController, GalleryEvent};
pub use error::{GalleryError, Result};
pub use filter::{ActiveTag, TagFilter, VisibleSet};
pub use layout::{compute_spans, ResolvedColumns, GRID_UNITS};
pub use lightbox::{LightboxNavigator, LightboxState, Reindex};
pub use models::{
    Breakpoint, GalleryItem, ItemCatalog, ItemId, ItemKind, ItemPlacement, ItemSource, SpanSpec,
    TagCollection,
};
pub use options::{BreakpointColumns, ColumnSetting, GalleryOptions, TagsPosition};
pub use surface::{FilterControl, RenderSurface};

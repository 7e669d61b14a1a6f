//! Column-span partitioning for the responsive grid.
//!
//! The grid follows the 12-unit convention: an item's span at a
//! breakpoint is `ceil(12 / columns)` for the column count configured
//! there. Spans do not vary per item; the partitioner annotates every
//! item with one identical spec and never reorders anything.

use tracing::warn;

use crate::error::{GalleryError, Result};
use crate::models::SpanSpec;
use crate::options::ColumnSetting;

/// Units per grid row.
pub const GRID_UNITS: u32 = 12;

/// Column configuration after one-time validation of the host-supplied
/// [`ColumnSetting`]. Handlers never re-inspect the raw shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedColumns {
    Uniform(u32),
    PerBreakpoint {
        xs: Option<u32>,
        sm: Option<u32>,
        md: Option<u32>,
        lg: Option<u32>,
        xl: Option<u32>,
    },
}

impl ResolvedColumns {
    /// Validates the raw setting once.
    ///
    /// Returns `Ok(None)` for a shape that is neither numeric nor a
    /// per-breakpoint table: that is a diagnostic-only condition and
    /// the layout step is skipped entirely. A non-positive count is a
    /// configuration error and nothing is applied.
    pub fn from_setting(setting: &ColumnSetting) -> Result<Option<Self>> {
        match setting {
            ColumnSetting::Uniform(count) => Ok(Some(Self::Uniform(validate_count(*count)?))),
            ColumnSetting::PerBreakpoint(columns) => Ok(Some(Self::PerBreakpoint {
                xs: columns.xs.map(validate_count).transpose()?,
                sm: columns.sm.map(validate_count).transpose()?,
                md: columns.md.map(validate_count).transpose()?,
                lg: columns.lg.map(validate_count).transpose()?,
                xl: columns.xl.map(validate_count).transpose()?,
            })),
            ColumnSetting::Other(value) => {
                let error = GalleryError::UnsupportedColumns {
                    found: value.to_string(),
                };
                warn!("{error}; span annotation skipped");
                Ok(None)
            }
        }
    }

    fn span_spec(&self) -> SpanSpec {
        match *self {
            Self::Uniform(count) => SpanSpec {
                xs: Some(span_for(count)),
                ..SpanSpec::default()
            },
            Self::PerBreakpoint { xs, sm, md, lg, xl } => SpanSpec {
                xs: xs.map(span_for),
                sm: sm.map(span_for),
                md: md.map(span_for),
                lg: lg.map(span_for),
                xl: xl.map(span_for),
            },
        }
    }
}

fn validate_count(count: i64) -> Result<u32> {
    if count < 1 {
        return Err(GalleryError::InvalidColumnCount { count });
    }
    // Counts beyond u32 all span a single unit anyway.
    Ok(u32::try_from(count).unwrap_or(u32::MAX))
}

fn span_for(columns: u32) -> u32 {
    GRID_UNITS.div_ceil(columns).max(1)
}

/// Computes the per-item span annotations for the current visible set
/// size: one spec per item, all identical. Pure function; the result
/// only annotates rendering and never reorders items.
pub fn compute_spans(item_count: usize, columns: &ResolvedColumns) -> Vec<SpanSpec> {
    vec![columns.span_spec(); item_count]
}

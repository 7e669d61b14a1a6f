use crate::models::ItemId;

/// Named responsive-design thresholds controlling column count.
/// `Xs` is the base slot a bare numeric column setting fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];
}

/// Column-span annotation for one item on the 12-unit grid, per
/// breakpoint. Slots absent from the column configuration stay `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanSpec {
    pub xs: Option<u32>,
    pub sm: Option<u32>,
    pub md: Option<u32>,
    pub lg: Option<u32>,
    pub xl: Option<u32>,
}

impl SpanSpec {
    pub fn span_for(&self, breakpoint: Breakpoint) -> Option<u32> {
        match breakpoint {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    pub fn is_empty(&self) -> bool {
        Breakpoint::ALL
            .iter()
            .all(|breakpoint| self.span_for(*breakpoint).is_none())
    }
}

/// Per-item layout instruction emitted to the render surface: the span
/// annotation (when the column configuration produced one) and whether
/// the item currently passes the active tag filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPlacement {
    pub id: ItemId,
    pub spans: Option<SpanSpec>,
    pub visible: bool,
}

impl ItemPlacement {
    pub fn new(id: ItemId, spans: Option<SpanSpec>, visible: bool) -> Self {
        Self { id, spans, visible }
    }
}

//! Lightbox navigation state machine.
//!
//! Tracks which item the modal viewer shows as a position within the
//! *visible* set, with circular prev/next. The navigator holds no
//! rendering logic; the controller turns every transition into `Open`
//! into a `display` instruction on the render surface.

use tracing::debug;

use crate::error::{GalleryError, Result};
use crate::filter::VisibleSet;
use crate::models::ItemId;

/// Viewer state. When open, `index` is the item's position in the
/// current visible set and `item` its identity; the identity is what
/// survives a visible-set change, the index is re-resolved from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open {
        item: ItemId,
        index: usize,
    },
}

/// Outcome of re-resolving the navigator against a new visible set.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reindex {
    /// The lightbox was not open; nothing to do.
    Inactive,
    /// The shown item is still visible, now at `index`. The displayed
    /// content is unchanged.
    Retained { index: usize },
    /// The shown item was filtered out; the lightbox closed.
    Dismissed,
}

#[derive(Debug, Clone, Default)]
pub struct LightboxNavigator {
    state: LightboxState,
}

impl LightboxNavigator {
    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    /// Identity of the item currently shown, if any.
    pub fn shown_item(&self) -> Option<ItemId> {
        match self.state {
            LightboxState::Open { item, .. } => Some(item),
            LightboxState::Closed => None,
        }
    }

    /// Opens the lightbox at `id`'s position in the visible set.
    ///
    /// If the id is not visible (which cannot happen for a click
    /// originating from rendered content) the state is left untouched
    /// and the miss is reported.
    pub fn open_at(&mut self, visible: &VisibleSet, id: ItemId) -> Result<usize> {
        match visible.position_of(id) {
            Some(index) => {
                self.state = LightboxState::Open { item: id, index };
                debug!("lightbox opened at {} (index {})", id, index);
                Ok(index)
            }
            None => Err(GalleryError::ItemNotVisible { id }),
        }
    }

    /// Closes the lightbox from any state. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = LightboxState::Closed;
        was_open
    }

    /// Steps to the previous visible item, wrapping to the last item
    /// from the first. Returns the new index, or `None` when closed.
    pub fn prev(&mut self, visible: &VisibleSet) -> Result<Option<usize>> {
        self.step(visible, false)
    }

    /// Steps to the next visible item, wrapping to the first item from
    /// the last. Returns the new index, or `None` when closed.
    pub fn next(&mut self, visible: &VisibleSet) -> Result<Option<usize>> {
        self.step(visible, true)
    }

    fn step(&mut self, visible: &VisibleSet, forward: bool) -> Result<Option<usize>> {
        if visible.is_empty() {
            return Err(GalleryError::EmptyVisibleSet);
        }
        let LightboxState::Open { index, .. } = self.state else {
            debug!("navigation ignored: lightbox closed");
            return Ok(None);
        };

        let len = visible.len();
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        // In range: next < len by the modulo above.
        let item = visible.ids()[next];
        self.state = LightboxState::Open { item, index: next };
        Ok(Some(next))
    }

    /// Re-resolves the navigator after the visible set changed.
    ///
    /// The shown item's identity decides the outcome: still present
    /// means the index moves to its new position, absent means the
    /// lightbox closes. Indices are never merely clamped.
    pub fn on_visible_set_changed(&mut self, visible: &VisibleSet) -> Reindex {
        let LightboxState::Open { item, .. } = self.state else {
            return Reindex::Inactive;
        };
        match visible.position_of(item) {
            Some(index) => {
                self.state = LightboxState::Open { item, index };
                Reindex::Retained { index }
            }
            None => {
                debug!("shown item {} filtered out; closing lightbox", item);
                self.state = LightboxState::Closed;
                Reindex::Dismissed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{ActiveTag, TagFilter};
    use crate::models::{ItemCatalog, ItemSource};

    fn make_catalog() -> ItemCatalog {
        ItemCatalog::new(vec![
            ItemSource::tagged("a.jpg", "x"),
            ItemSource::tagged("b.jpg", "y"),
            ItemSource::tagged("c.jpg", "x"),
            ItemSource::tagged("d.jpg", "y"),
        ])
    }

    fn full_set(catalog: &ItemCatalog) -> VisibleSet {
        TagFilter::default().visible(catalog)
    }

    #[test]
    fn open_at_resolves_position_in_visible_set() {
        let catalog = make_catalog();
        let visible = full_set(&catalog);
        let mut nav = LightboxNavigator::default();

        let id = visible.id_at(2).unwrap();
        assert_eq!(nav.open_at(&visible, id).unwrap(), 2);
        assert_eq!(nav.shown_item(), Some(id));
    }

    #[test]
    fn open_at_missing_item_reports_and_stays_closed() {
        let catalog = make_catalog();
        let mut filter = TagFilter::default();
        let narrowed = filter.select(&catalog, ActiveTag::Tag("x".into()));
        let hidden = catalog.iter().find(|item| item.tag() == Some("y")).unwrap();

        let mut nav = LightboxNavigator::default();
        let result = nav.open_at(&narrowed, hidden.id());
        assert!(matches!(
            result,
            Err(GalleryError::ItemNotVisible { id }) if id == hidden.id()
        ));
        assert!(!nav.is_open());
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let catalog = make_catalog();
        let visible = full_set(&catalog);
        let mut nav = LightboxNavigator::default();
        nav.open_at(&visible, visible.id_at(3).unwrap()).unwrap();

        assert_eq!(nav.next(&visible).unwrap(), Some(0));
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        let catalog = make_catalog();
        let visible = full_set(&catalog);
        let mut nav = LightboxNavigator::default();
        nav.open_at(&visible, visible.id_at(0).unwrap()).unwrap();

        assert_eq!(nav.prev(&visible).unwrap(), Some(3));
    }

    #[test]
    fn full_cycle_returns_to_start_in_both_directions() {
        let catalog = make_catalog();
        let visible = full_set(&catalog);
        let mut nav = LightboxNavigator::default();
        let start = visible.id_at(1).unwrap();
        nav.open_at(&visible, start).unwrap();

        for _ in 0..visible.len() {
            nav.next(&visible).unwrap();
        }
        assert_eq!(nav.shown_item(), Some(start));

        for _ in 0..visible.len() {
            nav.prev(&visible).unwrap();
        }
        assert_eq!(nav.shown_item(), Some(start));
    }

    #[test]
    fn prev_then_next_is_identity() {
        let catalog = make_catalog();
        let visible = full_set(&catalog);
        let mut nav = LightboxNavigator::default();
        nav.open_at(&visible, visible.id_at(2).unwrap()).unwrap();

        nav.prev(&visible).unwrap();
        nav.next(&visible).unwrap();
        assert_eq!(nav.state(), LightboxState::Open {
            item: visible.id_at(2).unwrap(),
            index: 2,
        });
    }

    #[test]
    fn navigating_an_empty_set_is_reported_not_crashed() {
        let catalog = ItemCatalog::new(vec![]);
        let visible = full_set(&catalog);
        let mut nav = LightboxNavigator::default();

        assert!(matches!(
            nav.next(&visible),
            Err(GalleryError::EmptyVisibleSet)
        ));
        assert!(matches!(
            nav.prev(&visible),
            Err(GalleryError::EmptyVisibleSet)
        ));
    }

    #[test]
    fn navigating_while_closed_is_a_quiet_no_op() {
        let catalog = make_catalog();
        let visible = full_set(&catalog);
        let mut nav = LightboxNavigator::default();

        assert_eq!(nav.next(&visible).unwrap(), None);
        assert_eq!(nav.prev(&visible).unwrap(), None);
        assert!(!nav.is_open());
    }

    #[test]
    fn visible_set_change_moves_open_index_to_new_position() {
        let catalog = make_catalog();
        let visible = full_set(&catalog);
        let mut nav = LightboxNavigator::default();
        // Open at c.jpg: index 2 of the full set.
        let shown = visible.id_at(2).unwrap();
        nav.open_at(&visible, shown).unwrap();

        let mut filter = TagFilter::default();
        let narrowed = filter.select(&catalog, ActiveTag::Tag("x".into()));
        assert_eq!(
            nav.on_visible_set_changed(&narrowed),
            Reindex::Retained { index: 1 }
        );
        // Same item, new index.
        assert_eq!(nav.shown_item(), Some(shown));
    }

    #[test]
    fn visible_set_change_closes_when_shown_item_filtered_out() {
        let catalog = make_catalog();
        let visible = full_set(&catalog);
        let mut nav = LightboxNavigator::default();
        // Open at b.jpg (tag "y"), then filter to "x".
        nav.open_at(&visible, visible.id_at(1).unwrap()).unwrap();

        let mut filter = TagFilter::default();
        let narrowed = filter.select(&catalog, ActiveTag::Tag("x".into()));
        assert_eq!(nav.on_visible_set_changed(&narrowed), Reindex::Dismissed);
        assert!(!nav.is_open());
    }

    #[test]
    fn visible_set_change_while_closed_is_inactive() {
        let catalog = make_catalog();
        let visible = full_set(&catalog);
        let mut nav = LightboxNavigator::default();
        assert_eq!(nav.on_visible_set_changed(&visible), Reindex::Inactive);
    }

    #[test]
    fn step_reanchors_identity_at_the_new_position() {
        let catalog = make_catalog();
        let visible = full_set(&catalog);
        let mut nav = LightboxNavigator::default();
        nav.open_at(&visible, visible.id_at(0).unwrap()).unwrap();

        let index = nav.next(&visible).unwrap().unwrap();
        assert_eq!(nav.shown_item(), visible.id_at(index));
    }
}

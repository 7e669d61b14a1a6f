//! Tag filtering and the visible set.
//!
//! The active tag is the single piece of mutable state here. The
//! visible set it induces is always recomputed from the catalog and
//! replaced atomically; nothing ever mutates a visible set in place,
//! so a stale index can never survive a filter change.

use tracing::debug;

use crate::models::{ItemCatalog, ItemId, TagCollection};

/// The currently selected filter: everything, or one tag value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActiveTag {
    #[default]
    All,
    Tag(String),
}

impl ActiveTag {
    /// Label the "show everything" control carries on the wire.
    pub const ALL_LABEL: &'static str = "all";

    pub fn from_label(label: &str) -> Self {
        if label == Self::ALL_LABEL {
            Self::All
        } else {
            Self::Tag(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Tag(tag) => tag,
        }
    }

    fn admits(&self, tag: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Tag(wanted) => tag == Some(wanted.as_str()),
        }
    }
}

/// Ordered ids of the items currently passing the active tag filter.
/// A subsequence of the catalog, preserving catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleSet {
    ids: Vec<ItemId>,
}

impl VisibleSet {
    fn from_catalog(catalog: &ItemCatalog, active: &ActiveTag) -> Self {
        let ids = catalog
            .iter()
            .filter(|item| active.admits(item.tag()))
            .map(|item| item.id())
            .collect();
        Self { ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.ids.iter().position(|candidate| *candidate == id)
    }

    pub fn id_at(&self, index: usize) -> Option<ItemId> {
        self.ids.get(index).copied()
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.ids.iter().copied()
    }
}

/// Holds the active tag and derives visible sets from the catalog.
#[derive(Debug, Clone, Default)]
pub struct TagFilter {
    active: ActiveTag,
}

impl TagFilter {
    pub fn active(&self) -> &ActiveTag {
        &self.active
    }

    /// Makes `tag` the active filter and returns the visible set it
    /// induces. Re-selecting the active tag yields an identical set.
    pub fn select(&mut self, catalog: &ItemCatalog, tag: ActiveTag) -> VisibleSet {
        debug!("filter selected: {}", tag.label());
        self.active = tag;
        self.visible(catalog)
    }

    /// Recomputes the visible set for the current active tag.
    pub fn visible(&self, catalog: &ItemCatalog) -> VisibleSet {
        VisibleSet::from_catalog(catalog, &self.active)
    }

    pub fn available_tags(&self, catalog: &ItemCatalog) -> TagCollection {
        catalog.tags()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemSource;

    fn make_catalog() -> ItemCatalog {
        ItemCatalog::new(vec![
            ItemSource::tagged("a.jpg", "nature"),
            ItemSource::tagged("b.jpg", "city"),
            ItemSource::new("c.jpg"),
            ItemSource::tagged("d.jpg", "nature"),
            ItemSource::tagged("e.jpg", "city"),
        ])
    }

    fn refs(catalog: &ItemCatalog, set: &VisibleSet) -> Vec<String> {
        set.iter()
            .map(|id| catalog.get(id).unwrap().source_ref().to_string())
            .collect()
    }

    #[test]
    fn test_select_all_returns_full_catalog_in_order() {
        let catalog = make_catalog();
        let mut filter = TagFilter::default();
        let set = filter.select(&catalog, ActiveTag::All);
        assert_eq!(set.len(), catalog.len());
        assert_eq!(
            refs(&catalog, &set),
            vec!["a.jpg", "b.jpg", "c.jpg", "d.jpg", "e.jpg"]
        );
    }

    #[test]
    fn test_select_tag_keeps_matching_subsequence() {
        let catalog = make_catalog();
        let mut filter = TagFilter::default();
        let set = filter.select(&catalog, ActiveTag::Tag("nature".into()));
        assert_eq!(refs(&catalog, &set), vec!["a.jpg", "d.jpg"]);
        for id in set.iter() {
            assert_eq!(catalog.get(id).unwrap().tag(), Some("nature"));
        }
    }

    #[test]
    fn test_untagged_items_appear_only_under_all() {
        let catalog = make_catalog();
        let mut filter = TagFilter::default();
        for tag in ["nature", "city"] {
            let set = filter.select(&catalog, ActiveTag::Tag(tag.into()));
            assert!(!refs(&catalog, &set).contains(&"c.jpg".to_string()));
        }
        let all = filter.select(&catalog, ActiveTag::All);
        assert!(refs(&catalog, &all).contains(&"c.jpg".to_string()));
    }

    #[test]
    fn test_reselecting_same_tag_is_idempotent() {
        let catalog = make_catalog();
        let mut filter = TagFilter::default();
        let first = filter.select(&catalog, ActiveTag::Tag("city".into()));
        let second = filter.select(&catalog, ActiveTag::Tag("city".into()));
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_tag_yields_empty_set() {
        let catalog = make_catalog();
        let mut filter = TagFilter::default();
        let set = filter.select(&catalog, ActiveTag::Tag("missing".into()));
        assert!(set.is_empty());
    }

    #[test]
    fn test_position_and_id_lookup() {
        let catalog = make_catalog();
        let filter = TagFilter::default();
        let set = filter.visible(&catalog);
        let third = set.id_at(2).unwrap();
        assert_eq!(set.position_of(third), Some(2));
        assert_eq!(set.id_at(99), None);
    }

    #[test]
    fn test_active_tag_labels_round_trip() {
        assert_eq!(ActiveTag::from_label("all"), ActiveTag::All);
        assert_eq!(
            ActiveTag::from_label("nature"),
            ActiveTag::Tag("nature".into())
        );
        assert_eq!(ActiveTag::Tag("city".into()).label(), "city");
        assert_eq!(ActiveTag::All.label(), "all");
    }
}

//! Immutable-per-session item catalog.
//!
//! The catalog is built exactly once at initialization from the
//! host-supplied item list. It owns every [`GalleryItem`]; the tag
//! filter and the lightbox navigator refer to items by [`ItemId`] only,
//! so the catalog is the single place an id resolves to content.

use crate::models::{GalleryItem, ItemId, ItemSource};

/// Ordered, immutable collection of gallery items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCatalog {
    items: Vec<GalleryItem>,
}

impl ItemCatalog {
    /// Builds the catalog, assigning ids in the host-supplied order.
    pub fn new(sources: Vec<ItemSource>) -> Self {
        let items = sources
            .into_iter()
            .enumerate()
            .map(|(index, source)| GalleryItem::from_source(ItemId(index), source))
            .collect();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GalleryItem> {
        self.items.iter()
    }

    /// Resolves an id back to its item. Ids are assigned densely from
    /// zero, so this is a direct index.
    pub fn get(&self, id: ItemId) -> Option<&GalleryItem> {
        self.items.get(id.0)
    }

    /// Scans the catalog for distinct tag values in first-seen order.
    pub fn tags(&self) -> TagCollection {
        let mut collection = TagCollection::default();
        for item in &self.items {
            if let Some(tag) = item.tag() {
                collection.insert(tag);
            }
        }
        collection
    }
}

/// Distinct tag values present across the catalog, in the order they
/// were first seen during the catalog scan. Used only to render the
/// filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCollection {
    tags: Vec<String>,
}

impl TagCollection {
    fn insert(&mut self, tag: &str) {
        if !self.tags.iter().any(|existing| existing == tag) {
            self.tags.push(tag.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|existing| existing == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

use std::fmt;

/// Opaque identifier for one gallery item, assigned in catalog order
/// when the catalog is built. Interaction events carry this id so the
/// active item is recovered by identity, never by comparing rendered
/// source references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub(crate) usize);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Image,
    Other,
}

impl ItemKind {
    /// Guesses the kind from a source reference's extension.
    /// Anything unrecognized is `Other` and never opens the lightbox.
    pub fn from_source_ref(source_ref: &str) -> Self {
        let ext = source_ref.rsplit('.').next().unwrap_or_default();
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "webp" | "gif" | "bmp" | "avif" | "svg" => Self::Image,
            _ => Self::Other,
        }
    }
}

/// Host-supplied description of one gallery element, handed to the
/// controller at initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSource {
    pub source_ref: String,
    pub tag: Option<String>,
    pub kind: ItemKind,
}

impl ItemSource {
    /// Creates an untagged item, sniffing the kind from the reference.
    pub fn new(source_ref: impl Into<String>) -> Self {
        let source_ref = source_ref.into();
        let kind = ItemKind::from_source_ref(&source_ref);
        Self {
            source_ref,
            tag: None,
            kind,
        }
    }

    /// Creates a tagged item, sniffing the kind from the reference.
    pub fn tagged(source_ref: impl Into<String>, tag: impl Into<String>) -> Self {
        let mut item = Self::new(source_ref);
        item.tag = Some(tag.into());
        item
    }

    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.kind = kind;
        self
    }
}

/// One displayable unit of the gallery. Immutable once the catalog is
/// built; other components reference it by [`ItemId`] only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    id: ItemId,
    source_ref: String,
    tag: Option<String>,
    kind: ItemKind,
}

impl GalleryItem {
    pub(crate) fn from_source(id: ItemId, source: ItemSource) -> Self {
        Self {
            id,
            source_ref: source.source_ref,
            tag: source.tag,
            kind: source.kind,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn source_ref(&self) -> &str {
        &self.source_ref
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn is_image(&self) -> bool {
        self.kind == ItemKind::Image
    }
}

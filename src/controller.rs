//! Gallery controller: the single entry point reacting to host events.
//!
//! The controller owns one gallery instance's state record (catalog,
//! active tag, visible set, lightbox) and keeps the three mutable
//! pieces consistent after every event. Handlers settle state first
//! and only then instruct the render surface, so no intermediate
//! state is ever observable. A failed transition leaves everything
//! exactly as it was before the event.

use tracing::{debug, warn};

use crate::error::{GalleryError, Result};
use crate::filter::{ActiveTag, TagFilter, VisibleSet};
use crate::layout::{compute_spans, ResolvedColumns};
use crate::lightbox::{LightboxNavigator, LightboxState, Reindex};
use crate::models::{ItemCatalog, ItemId, ItemPlacement, ItemSource};
use crate::options::GalleryOptions;
use crate::surface::{FilterControl, RenderSurface};

/// Named interaction events the render surface raises. The controller
/// is one dispatch table over these; how the surface captures input
/// (pointer, keyboard, anything) is not its concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    TagSelected(ActiveTag),
    ItemActivated(ItemId),
    NavPrev,
    NavNext,
    CloseRequested,
}

pub struct GalleryController<S: RenderSurface> {
    catalog: ItemCatalog,
    options: GalleryOptions,
    /// Column configuration resolved once at initialization; `None`
    /// means the host supplied an unsupported shape and layout is
    /// skipped.
    columns: Option<ResolvedColumns>,
    filter: TagFilter,
    visible: VisibleSet,
    lightbox: LightboxNavigator,
    surface: S,
}

impl<S: RenderSurface> GalleryController<S> {
    /// Builds the gallery: catalog from the host item list, columns
    /// validated once, initial layout and filter controls pushed to
    /// the surface, then the reveal instruction.
    ///
    /// A non-positive column count fails initialization before any
    /// instruction reaches the surface.
    pub fn new(items: Vec<ItemSource>, options: GalleryOptions, surface: S) -> Result<Self> {
        let columns = ResolvedColumns::from_setting(&options.columns)?;
        let catalog = ItemCatalog::new(items);
        let filter = TagFilter::default();
        let visible = filter.visible(&catalog);

        let mut controller = Self {
            catalog,
            options,
            columns,
            filter,
            visible,
            lightbox: LightboxNavigator::default(),
            surface,
        };
        controller.push_layout();
        if controller.options.show_tags {
            let controls = controller.filter_controls();
            controller
                .surface
                .present_filter_controls(&controls, controller.options.tags_position);
        }
        controller.surface.reveal();
        Ok(controller)
    }

    /// Dispatches one interaction event to its handler.
    pub fn handle(&mut self, event: GalleryEvent) -> Result<()> {
        match event {
            GalleryEvent::TagSelected(tag) => self.on_tag_selected(tag),
            GalleryEvent::ItemActivated(id) => self.on_item_activated(id),
            GalleryEvent::NavPrev => self.on_nav_prev(),
            GalleryEvent::NavNext => self.on_nav_next(),
            GalleryEvent::CloseRequested => self.on_close(),
        }
    }

    /// Makes `tag` the active filter: recomputes the visible set,
    /// re-resolves the lightbox against it, then re-emits the layout.
    /// The overlay is dismissed only when the shown item was filtered
    /// out; a retained item keeps its display untouched.
    pub fn on_tag_selected(&mut self, tag: ActiveTag) -> Result<()> {
        let visible = self.filter.select(&self.catalog, tag);
        let outcome = self.lightbox.on_visible_set_changed(&visible);
        self.visible = visible;

        self.push_layout();
        if outcome == Reindex::Dismissed {
            self.surface.hide_overlay();
        }
        Ok(())
    }

    /// Opens the lightbox at the activated item. Quiet no-op when the
    /// lightbox is disabled or the item is not an image; an id absent
    /// from the visible set is reported and changes nothing.
    pub fn on_item_activated(&mut self, id: ItemId) -> Result<()> {
        if !self.options.lightbox {
            debug!("item {} activated but the lightbox is disabled", id);
            return Ok(());
        }
        let Some(item) = self.catalog.get(id) else {
            return Err(GalleryError::ItemNotVisible { id });
        };
        if !item.is_image() {
            debug!("item {} is not an image; ignoring activation", id);
            return Ok(());
        }
        let source_ref = item.source_ref().to_string();

        self.lightbox.open_at(&self.visible, id)?;
        self.surface.display(&source_ref);
        self.surface.show_overlay();
        Ok(())
    }

    pub fn on_nav_prev(&mut self) -> Result<()> {
        self.navigate(false)
    }

    pub fn on_nav_next(&mut self) -> Result<()> {
        self.navigate(true)
    }

    /// Closes the lightbox. Emits the hide instruction only when a
    /// transition actually happened.
    pub fn on_close(&mut self) -> Result<()> {
        if self.lightbox.close() {
            self.surface.hide_overlay();
        } else {
            debug!("close requested but the lightbox is already closed");
        }
        Ok(())
    }

    fn navigate(&mut self, forward: bool) -> Result<()> {
        if !self.options.navigation {
            debug!("navigation controls disabled; ignoring");
            return Ok(());
        }
        if self.visible.is_empty() {
            warn!("{}", GalleryError::EmptyVisibleSet);
            return Ok(());
        }
        let stepped = if forward {
            self.lightbox.next(&self.visible)?
        } else {
            self.lightbox.prev(&self.visible)?
        };
        if let Some(index) = stepped {
            if let Some(item) = self.visible.id_at(index).and_then(|id| self.catalog.get(id)) {
                self.surface.display(item.source_ref());
            }
        }
        Ok(())
    }

    fn push_layout(&mut self) {
        let specs = self
            .columns
            .as_ref()
            .map(|columns| compute_spans(self.catalog.len(), columns));
        let placements: Vec<ItemPlacement> = self
            .catalog
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let spans = specs.as_ref().and_then(|specs| specs.get(index).copied());
                ItemPlacement::new(item.id(), spans, self.visible.contains(item.id()))
            })
            .collect();
        self.surface.apply_layout(&placements);
    }

    fn filter_controls(&self) -> Vec<FilterControl> {
        let mut controls = vec![FilterControl {
            tag: ActiveTag::All,
        }];
        controls.extend(
            self.filter
                .available_tags(&self.catalog)
                .iter()
                .map(|tag| FilterControl {
                    tag: ActiveTag::Tag(tag.to_string()),
                }),
        );
        controls
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn active_tag(&self) -> &ActiveTag {
        self.filter.active()
    }

    pub fn visible(&self) -> &VisibleSet {
        &self.visible
    }

    pub fn lightbox_state(&self) -> LightboxState {
        self.lightbox.state()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

//! Demo driver: builds a small gallery and walks it through a scripted
//! interaction sequence against a surface that logs every instruction.
//! Run with `RUST_LOG=maugallery=debug` for the transition traces.

use anyhow::Result;
use tracing::info;

use maugallery::{
    ActiveTag, FilterControl, GalleryController, GalleryEvent, GalleryOptions, ItemPlacement,
    ItemSource, RenderSurface, TagsPosition,
};

/// Render surface that prints instructions instead of drawing.
struct LogSurface;

impl RenderSurface for LogSurface {
    fn apply_layout(&mut self, placements: &[ItemPlacement]) {
        let visible = placements.iter().filter(|p| p.visible).count();
        info!("layout: {} items, {} visible", placements.len(), visible);
    }

    fn present_filter_controls(&mut self, controls: &[FilterControl], position: TagsPosition) {
        let labels: Vec<&str> = controls.iter().map(FilterControl::label).collect();
        info!("filter controls at {:?}: {}", position, labels.join(", "));
    }

    fn display(&mut self, source_ref: &str) {
        info!("lightbox display: {}", source_ref);
    }

    fn show_overlay(&mut self) {
        info!("overlay shown");
    }

    fn hide_overlay(&mut self) {
        info!("overlay hidden");
    }

    fn reveal(&mut self) {
        info!("gallery revealed");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("maugallery=info".parse()?),
        )
        .init();

    let items = vec![
        ItemSource::tagged("img/forest.jpg", "nature"),
        ItemSource::tagged("img/harbor.jpg", "city"),
        ItemSource::tagged("img/ridge.jpg", "nature"),
        ItemSource::tagged("img/tram.jpg", "city"),
        ItemSource::new("img/untagged.jpg"),
    ];
    let options = GalleryOptions::from_json_str(
        r#"{"columns": {"xs": 1, "sm": 2, "lg": 3}, "tagsPosition": "top"}"#,
    )?;

    let mut gallery = GalleryController::new(items, options, LogSurface)?;
    let first = gallery.catalog().iter().next().map(|item| item.id());

    if let Some(first) = first {
        gallery.handle(GalleryEvent::ItemActivated(first))?;
        gallery.handle(GalleryEvent::NavNext)?;
        gallery.handle(GalleryEvent::NavNext)?;
        gallery.handle(GalleryEvent::TagSelected(ActiveTag::Tag("nature".into())))?;
        gallery.handle(GalleryEvent::NavPrev)?;
        gallery.handle(GalleryEvent::CloseRequested)?;
        gallery.handle(GalleryEvent::TagSelected(ActiveTag::All))?;
    }

    Ok(())
}

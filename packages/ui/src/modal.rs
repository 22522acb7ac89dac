//! Lightbox overlays (video and image).

use tracing::error;

use crate::config::{ImageModalConfig, VideoModalConfig, ACTIVE_CLASS};
use crate::dom::Dom;
use crate::event::{Key, ModalKind, UiEvent};
use crate::page::{Controller, PageContext};

/// Source swap performed by the video lightbox: autoplay on open, blank on
/// close. Clearing the source is the only way to stop a third-party embed.
struct Embed<D: Dom> {
    frame: D::Element,
    source: String,
}

/// One overlay with open/close semantics shared by both lightboxes. The
/// launcher and close button are verified at install time; at runtime their
/// clicks arrive as events tagged with the modal's kind.
pub(crate) struct ModalController<D: Dom> {
    kind: ModalKind,
    overlay: D::Element,
    embed: Option<Embed<D>>,
    open: bool,
}

impl<D: Dom> ModalController<D> {
    pub(crate) fn install_video(dom: &D, config: &VideoModalConfig) -> Option<Self> {
        let trigger = dom.element_by_id(&config.trigger_id);
        let overlay = dom.element_by_id(&config.overlay_id);
        let close = dom.element_by_id(&config.close_id);
        let frame = dom.element_by_id(&config.frame_id);
        let source = dom.query_selector(&config.source_selector);

        match (trigger, overlay, close, frame, source) {
            (Some(_), Some(overlay), Some(_), Some(frame), Some(source)) => {
                let source = dom.attribute(&source, "src").unwrap_or_default();
                Some(Self {
                    kind: ModalKind::Video,
                    overlay,
                    embed: Some(Embed { frame, source }),
                    open: false,
                })
            }
            _ => {
                error!("video modal elements missing, lightbox disabled");
                None
            }
        }
    }

    pub(crate) fn install_image(dom: &D, config: &ImageModalConfig) -> Option<Self> {
        let trigger = dom.element_by_id(&config.trigger_id);
        let overlay = dom.element_by_id(&config.overlay_id);
        let image = dom.element_by_id(&config.image_id);
        let close = dom.element_by_id(&config.close_id);

        match (trigger, overlay, image, close) {
            (Some(_), Some(overlay), Some(_), Some(_)) => Some(Self {
                kind: ModalKind::Image,
                overlay,
                embed: None,
                open: false,
            }),
            _ => {
                error!("image modal elements missing, lightbox disabled");
                None
            }
        }
    }

    fn open_modal(&mut self, ctx: &mut PageContext<'_, D>) {
        if self.open {
            return;
        }
        self.open = true;
        ctx.dom.add_class(&self.overlay, ACTIVE_CLASS);
        ctx.scroll_lock.acquire(ctx.dom);
        if let Some(embed) = &self.embed {
            ctx.dom
                .set_attribute(&embed.frame, "src", &format!("{}&autoplay=1", embed.source));
        }
    }

    fn close_modal(&mut self, ctx: &mut PageContext<'_, D>) {
        if !self.open {
            return;
        }
        self.open = false;
        ctx.dom.remove_class(&self.overlay, ACTIVE_CLASS);
        ctx.scroll_lock.release(ctx.dom);
        if let Some(embed) = &self.embed {
            ctx.dom.set_attribute(&embed.frame, "src", "about:blank");
        }
    }
}

impl<D: Dom> Controller<D> for ModalController<D> {
    fn handle(&mut self, event: &UiEvent<D::Element>, ctx: &mut PageContext<'_, D>) {
        match event {
            UiEvent::ModalTriggerClick(kind) if *kind == self.kind => self.open_modal(ctx),
            UiEvent::ModalCloseClick(kind) if *kind == self.kind => self.close_modal(ctx),
            UiEvent::ModalOverlayClick { kind, target } if *kind == self.kind => {
                // Only the backdrop itself dismisses; clicks on the content
                // inside the overlay do not.
                if *target == self.overlay {
                    self.close_modal(ctx);
                }
            }
            UiEvent::KeyDown(Key::Escape) => self.close_modal(ctx),
            _ => {}
        }
    }
}

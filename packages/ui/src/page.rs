//! The dispatch loop tying the controllers together.

use tracing::debug;

use crate::anchors::AnchorController;
use crate::config::PageConfig;
use crate::contact::ContactController;
use crate::dom::Dom;
use crate::event::UiEvent;
use crate::layout::LayoutController;
use crate::menu::MenuController;
use crate::modal::ModalController;
use crate::navbar::NavbarController;
use crate::reveal::RevealController;
use crate::scroll_lock::ScrollLock;

/// What a controller sees while handling an event: the document capability
/// and the shared scroll lock.
pub(crate) struct PageContext<'a, D: Dom> {
    pub dom: &'a D,
    pub scroll_lock: &'a mut ScrollLock,
}

/// One of the page's independent state machines.
///
/// Every installed controller receives every event; it reacts to the ones
/// it understands and ignores the rest. `handle` is synchronous and runs to
/// completion; the page processes one event at a time.
pub(crate) trait Controller<D: Dom> {
    fn handle(&mut self, event: &UiEvent<D::Element>, ctx: &mut PageContext<'_, D>);
}

/// A fully wired page: the capability handle, the scroll lock, and every
/// controller whose elements were present in the document.
///
/// Controllers with missing elements are skipped at construction (the page
/// section is assumed not to exist); dispatch then simply has nothing to
/// deliver to them.
pub struct Page<D: Dom> {
    dom: D,
    scroll_lock: ScrollLock,
    controllers: Vec<Box<dyn Controller<D>>>,
}

impl<D: Dom + 'static> Page<D> {
    /// Install every controller the config describes, then reconcile the
    /// initial responsive layout (the same reconciliation that runs on
    /// every resize).
    pub fn new(dom: D, config: PageConfig) -> Self {
        let mut controllers: Vec<Box<dyn Controller<D>>> = Vec::new();

        if let Some(c) = RevealController::install(&dom, &config.reveal) {
            controllers.push(Box::new(c));
        }
        if let Some(c) = NavbarController::install(&dom, &config.navbar_id) {
            controllers.push(Box::new(c));
        }
        if let Some(c) = MenuController::install(&dom, &config.menu) {
            controllers.push(Box::new(c));
        }
        if let Some(cfg) = &config.video_modal {
            if let Some(c) = ModalController::install_video(&dom, cfg) {
                controllers.push(Box::new(c));
            }
        }
        if let Some(cfg) = &config.image_modal {
            if let Some(c) = ModalController::install_image(&dom, cfg) {
                controllers.push(Box::new(c));
            }
        }
        if let Some(cfg) = &config.contact_form {
            if let Some(c) = ContactController::install(&dom, cfg) {
                controllers.push(Box::new(c));
            }
        }
        controllers.push(Box::new(AnchorController));
        if let Some(c) = LayoutController::install(&dom, &config.menu) {
            controllers.push(Box::new(c));
        }

        debug!(installed = controllers.len(), "page controllers installed");

        let mut page = Self {
            dom,
            scroll_lock: ScrollLock::new(),
            controllers,
        };
        page.dispatch(UiEvent::Resize);
        page
    }

    /// Fan one event out to every installed controller, in installation
    /// order.
    pub fn dispatch(&mut self, event: UiEvent<D::Element>) {
        let mut ctx = PageContext {
            dom: &self.dom,
            scroll_lock: &mut self.scroll_lock,
        };
        for controller in self.controllers.iter_mut() {
            controller.handle(&event, &mut ctx);
        }
    }

    /// The capability handle this page was built over.
    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// How many controllers survived installation.
    pub fn controller_count(&self) -> usize {
        self.controllers.len()
    }
}

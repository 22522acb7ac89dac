//! Navbar scroll-state toggling.

use tracing::warn;

use crate::config::{NAVBAR_SCROLL_THRESHOLD_PX, SCROLLED_CLASS};
use crate::dom::Dom;
use crate::event::UiEvent;
use crate::page::{Controller, PageContext};

/// Adds the "scrolled" class past the threshold and removes it below. The
/// class is a pure function of the current scroll offset: no debounce, no
/// hysteresis.
pub(crate) struct NavbarController<D: Dom> {
    navbar: D::Element,
}

impl<D: Dom> NavbarController<D> {
    pub(crate) fn install(dom: &D, navbar_id: &str) -> Option<Self> {
        match dom.element_by_id(navbar_id) {
            Some(navbar) => Some(Self { navbar }),
            None => {
                warn!(id = navbar_id, "navbar element missing, scroll watcher disabled");
                None
            }
        }
    }
}

impl<D: Dom> Controller<D> for NavbarController<D> {
    fn handle(&mut self, event: &UiEvent<D::Element>, ctx: &mut PageContext<'_, D>) {
        if matches!(event, UiEvent::Scroll) {
            if ctx.dom.scroll_y() > NAVBAR_SCROLL_THRESHOLD_PX {
                ctx.dom.add_class(&self.navbar, SCROLLED_CLASS);
            } else {
                ctx.dom.remove_class(&self.navbar, SCROLLED_CLASS);
            }
        }
    }
}

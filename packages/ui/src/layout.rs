//! Responsive reconciliation of the navigation panel.

use crate::config::{MenuConfig, ACTIVE_CLASS, MOBILE_BREAKPOINT_PX};
use crate::dom::Dom;
use crate::event::UiEvent;
use crate::page::{Controller, PageContext};

/// Keeps the nav panel's display mode consistent with the viewport: always
/// visible on desktop widths, collapsed on mobile unless the menu is open.
/// The menu controller independently forces itself closed on the same
/// resize when the viewport grows past the breakpoint.
pub(crate) struct LayoutController<D: Dom> {
    panel: D::Element,
}

impl<D: Dom> LayoutController<D> {
    pub(crate) fn install(dom: &D, config: &MenuConfig) -> Option<Self> {
        dom.element_by_id(&config.panel_id)
            .map(|panel| Self { panel })
    }
}

impl<D: Dom> Controller<D> for LayoutController<D> {
    fn handle(&mut self, event: &UiEvent<D::Element>, ctx: &mut PageContext<'_, D>) {
        if matches!(event, UiEvent::Resize) {
            if ctx.dom.viewport_width() > MOBILE_BREAKPOINT_PX {
                ctx.dom.set_style(&self.panel, "display", "flex");
            } else if !ctx.dom.has_class(&self.panel, ACTIVE_CLASS) {
                ctx.dom.set_style(&self.panel, "display", "none");
            }
        }
    }
}

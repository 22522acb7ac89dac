//! Smooth scrolling for same-page fragment links.

use crate::config::ANCHOR_HEADER_OFFSET_PX;
use crate::dom::Dom;
use crate::event::UiEvent;
use crate::page::{Controller, PageContext};

/// Resolve a fragment link's target element. Bare `"#"` resolves to
/// nothing. Also consulted by the menu controller, which closes itself on
/// successful anchor navigation.
pub(crate) fn fragment_target<D: Dom>(dom: &D, fragment: &str) -> Option<D::Element> {
    let id = fragment.strip_prefix('#').filter(|id| !id.is_empty())?;
    dom.element_by_id(id)
}

/// Scrolls smoothly to a fragment link's target, compensating for the
/// fixed header. Stateless; requires no elements of its own.
pub(crate) struct AnchorController;

impl<D: Dom> Controller<D> for AnchorController {
    fn handle(&mut self, event: &UiEvent<D::Element>, ctx: &mut PageContext<'_, D>) {
        if let UiEvent::AnchorClick { fragment } = event {
            if let Some(target) = fragment_target(ctx.dom, fragment) {
                ctx.dom
                    .scroll_to(ctx.dom.offset_top(&target) - ANCHOR_HEADER_OFFSET_PX);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeDom;
    use crate::ScrollLock;

    fn click(dom: &FakeDom, fragment: &str) {
        let mut lock = ScrollLock::new();
        AnchorController.handle(
            &UiEvent::AnchorClick {
                fragment: fragment.into(),
            },
            &mut PageContext {
                dom,
                scroll_lock: &mut lock,
            },
        );
    }

    #[test]
    fn scrolls_to_target_minus_header_offset() {
        let dom = FakeDom::new();
        let section = dom.add_element("caracteristicas");
        dom.set_offset_top(section, 640.0);

        click(&dom, "#caracteristicas");
        assert_eq!(dom.scrolled_to(), vec![560.0]);
    }

    #[test]
    fn bare_and_unresolved_fragments_do_nothing() {
        let dom = FakeDom::new();
        click(&dom, "#");
        click(&dom, "#missing");
        assert!(dom.scrolled_to().is_empty());
    }
}

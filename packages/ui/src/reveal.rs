//! Scroll-triggered reveal animations.

use tracing::debug;

use crate::config::{RevealConfig, REVEAL_OFFSET, REVEAL_TRANSITION};
use crate::dom::Dom;
use crate::event::UiEvent;
use crate::page::{Controller, PageContext};

/// Hides the configured elements at install time and reveals each one the
/// first time it intersects the viewport. Reveal is idempotent and never
/// reverses; in one-shot mode the element is also deregistered from
/// observation.
pub(crate) struct RevealController {
    once: bool,
}

impl RevealController {
    /// Returns `None` when there is nothing left to handle at runtime:
    /// either no element matched, or intersection observation is
    /// unavailable and everything was revealed up front (content must never
    /// stay invisible).
    pub(crate) fn install<D: Dom>(dom: &D, config: &RevealConfig) -> Option<Self> {
        let mut elements = Vec::new();
        for selector in &config.selectors {
            elements.extend(dom.query_selector_all(selector));
        }

        if !dom.intersection_observation_supported() {
            for element in &elements {
                reveal(dom, element);
            }
            debug!(
                count = elements.len(),
                "intersection observation unavailable, revealed everything"
            );
            return None;
        }

        for element in &elements {
            dom.set_style(element, "opacity", "0");
            dom.set_style(element, "transform", REVEAL_OFFSET);
            dom.set_style(element, "transition", REVEAL_TRANSITION);
            dom.observe_intersection(element);
        }
        debug!(count = elements.len(), "observing elements for reveal");

        if elements.is_empty() {
            return None;
        }
        Some(Self { once: config.once })
    }
}

fn reveal<D: Dom>(dom: &D, element: &D::Element) {
    dom.set_style(element, "opacity", "1");
    dom.set_style(element, "transform", "translateY(0)");
}

impl<D: Dom> Controller<D> for RevealController {
    fn handle(&mut self, event: &UiEvent<D::Element>, ctx: &mut PageContext<'_, D>) {
        if let UiEvent::Intersection {
            target,
            is_intersecting: true,
        } = event
        {
            reveal(ctx.dom, target);
            if self.once {
                ctx.dom.unobserve_intersection(target);
            }
        }
    }
}

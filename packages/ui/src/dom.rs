//! The capability trait between the controllers and the document.
//!
//! Everything the controllers do to a page (queries, class toggles, style
//! writes, scrolling, navigation, timers, intersection observation) goes
//! through [`Dom`]. The browser adapter implements it over the real DOM;
//! [`crate::fake::FakeDom`] implements it in memory so the full controller
//! set runs under native unit tests.

use crate::event::TimerTask;

/// Opaque handle for a scheduled one-shot timer.
///
/// Returned by [`Dom::schedule`] and accepted by [`Dom::cancel`]. Handles
/// are never reused within a page's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// Capability interface over the document and window.
///
/// Implementations are expected to be cheap to clone handles onto the same
/// underlying page (the browser adapter wraps shared references; the fake
/// shares an `Rc`). All methods are infallible from the controllers' point
/// of view: an operation on a vanished element is a silent no-op, matching
/// how the page degrades when markup is missing.
pub trait Dom {
    /// Handle to a single element. Equality must identify the same node so
    /// controllers can tell a backdrop click from a click on content.
    type Element: Clone + PartialEq;

    // ---- queries ----

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;
    fn query_selector_all(&self, selector: &str) -> Vec<Self::Element>;

    /// True when `target` is `container` itself or a descendant of it.
    fn contains(&self, container: &Self::Element, target: &Self::Element) -> bool;

    // ---- classes and styles ----

    fn add_class(&self, element: &Self::Element, class: &str);
    fn remove_class(&self, element: &Self::Element, class: &str);
    fn has_class(&self, element: &Self::Element, class: &str) -> bool;
    fn set_style(&self, element: &Self::Element, property: &str, value: &str);

    // ---- attributes ----

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;
    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str);

    // ---- forms ----

    /// Current value of an input, textarea or select element.
    fn field_value(&self, element: &Self::Element) -> String;
    /// Human-readable label of a select element's chosen option.
    fn selected_option_label(&self, element: &Self::Element) -> Option<String>;
    fn reset_form(&self, element: &Self::Element);

    // ---- geometry and scrolling ----

    /// Vertical offset of the element's top edge within the document.
    fn offset_top(&self, element: &Self::Element) -> f64;
    fn scroll_y(&self) -> f64;
    fn viewport_width(&self) -> f64;
    /// Smooth-scroll the viewport to the given vertical position.
    fn scroll_to(&self, top: f64);
    /// Write the page-level `overflow` style (scroll lock).
    fn set_body_overflow(&self, value: &str);

    // ---- navigation and user surfacing ----

    /// Open a URL in a new browsing context.
    fn open_in_new_context(&self, url: &str);
    /// Blocking user alert.
    fn alert(&self, message: &str);

    // ---- intersection observation ----

    /// Whether viewport-intersection observation is available. When it is
    /// not, the reveal animator falls back to showing everything at once.
    fn intersection_observation_supported(&self) -> bool;
    fn observe_intersection(&self, element: &Self::Element);
    fn unobserve_intersection(&self, element: &Self::Element);

    // ---- timers ----

    /// Schedule `task` to be delivered as [`crate::UiEvent::TimerFired`]
    /// after `delay_ms`. One-shot; cancelable until it fires.
    fn schedule(&self, task: TimerTask, delay_ms: u32) -> TimerHandle;
    fn cancel(&self, handle: TimerHandle);
}

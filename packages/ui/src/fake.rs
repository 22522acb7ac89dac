//! In-memory [`Dom`] implementation for tests.
//!
//! `FakeDom` records everything the controllers do (class lists, styles,
//! attributes, opened URLs, alerts, scheduled timers) and lets a test
//! build up a document, drive events, and assert on the outcome with no
//! browser anywhere. Timers never fire on their own: a test pops one with
//! [`FakeDom::take_timer`] and delivers it as a
//! [`crate::UiEvent::TimerFired`], which keeps every delayed behavior
//! deterministic.
//!
//! Handles share one underlying document (`Rc`), so a test can keep a
//! clone for assertions after handing the fake to a
//! [`crate::Page`].

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::dom::{Dom, TimerHandle};
use crate::event::TimerTask;

/// Index into the fake document's element table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FakeElement(usize);

/// A timer scheduled through the fake and not yet fired or canceled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimer {
    pub handle: TimerHandle,
    pub task: TimerTask,
    pub delay_ms: u32,
}

#[derive(Debug, Default)]
struct ElementRecord {
    id: Option<String>,
    selector: Option<String>,
    parent: Option<usize>,
    classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
    value: String,
    selected_label: Option<String>,
    offset_top: f64,
}

#[derive(Debug)]
struct Inner {
    elements: Vec<ElementRecord>,
    scroll_y: f64,
    viewport_width: f64,
    body_overflow: String,
    observer_supported: bool,
    observed: BTreeSet<usize>,
    timers: Vec<PendingTimer>,
    next_timer: u64,
    canceled: Vec<TimerHandle>,
    scrolled_to: Vec<f64>,
    opened_urls: Vec<String>,
    alerts: Vec<String>,
    reset_forms: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct FakeDom {
    inner: Rc<RefCell<Inner>>,
}

impl Default for FakeDom {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeDom {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                elements: Vec::new(),
                scroll_y: 0.0,
                viewport_width: 1280.0,
                body_overflow: "auto".into(),
                observer_supported: true,
                observed: BTreeSet::new(),
                timers: Vec::new(),
                next_timer: 0,
                canceled: Vec::new(),
                scrolled_to: Vec::new(),
                opened_urls: Vec::new(),
                alerts: Vec::new(),
                reset_forms: Vec::new(),
            })),
        }
    }

    fn push(&self, record: ElementRecord) -> FakeElement {
        let mut inner = self.inner.borrow_mut();
        inner.elements.push(record);
        FakeElement(inner.elements.len() - 1)
    }

    // ---- document construction ----

    pub fn add_element(&self, id: &str) -> FakeElement {
        self.push(ElementRecord {
            id: Some(id.into()),
            ..Default::default()
        })
    }

    /// An element found by `query_selector`/`query_selector_all` under the
    /// given selector.
    pub fn add_selector_element(&self, selector: &str) -> FakeElement {
        self.push(ElementRecord {
            selector: Some(selector.into()),
            ..Default::default()
        })
    }

    /// An anonymous element (e.g. a click target outside everything).
    pub fn element(&self) -> FakeElement {
        self.push(ElementRecord::default())
    }

    pub fn add_child(&self, parent: FakeElement) -> FakeElement {
        self.push(ElementRecord {
            parent: Some(parent.0),
            ..Default::default()
        })
    }

    pub fn add_child_with_id(&self, parent: FakeElement, id: &str) -> FakeElement {
        self.push(ElementRecord {
            id: Some(id.into()),
            parent: Some(parent.0),
            ..Default::default()
        })
    }

    // ---- state knobs ----

    pub fn set_value(&self, element: FakeElement, value: &str) {
        self.inner.borrow_mut().elements[element.0].value = value.into();
    }

    pub fn set_selected_label(&self, element: FakeElement, label: &str) {
        self.inner.borrow_mut().elements[element.0].selected_label = Some(label.into());
    }

    pub fn set_offset_top(&self, element: FakeElement, top: f64) {
        self.inner.borrow_mut().elements[element.0].offset_top = top;
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.inner.borrow_mut().scroll_y = y;
    }

    pub fn set_viewport_width(&self, width: f64) {
        self.inner.borrow_mut().viewport_width = width;
    }

    pub fn set_observer_supported(&self, supported: bool) {
        self.inner.borrow_mut().observer_supported = supported;
    }

    // ---- inspection ----

    pub fn style(&self, element: FakeElement, property: &str) -> Option<String> {
        self.inner.borrow().elements[element.0]
            .styles
            .get(property)
            .cloned()
    }

    pub fn body_overflow(&self) -> String {
        self.inner.borrow().body_overflow.clone()
    }

    pub fn opened_urls(&self) -> Vec<String> {
        self.inner.borrow().opened_urls.clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.inner.borrow().alerts.clone()
    }

    pub fn scrolled_to(&self) -> Vec<f64> {
        self.inner.borrow().scrolled_to.clone()
    }

    pub fn is_observed(&self, element: FakeElement) -> bool {
        self.inner.borrow().observed.contains(&element.0)
    }

    pub fn pending_timers(&self) -> Vec<PendingTimer> {
        self.inner.borrow().timers.clone()
    }

    /// Remove and return the first pending timer carrying `task`. The test
    /// "fires" it by dispatching [`crate::UiEvent::TimerFired`] with the
    /// returned task.
    pub fn take_timer(&self, task: TimerTask) -> Option<PendingTimer> {
        let mut inner = self.inner.borrow_mut();
        let index = inner.timers.iter().position(|t| t.task == task)?;
        Some(inner.timers.remove(index))
    }

    pub fn canceled_timers(&self) -> Vec<TimerHandle> {
        self.inner.borrow().canceled.clone()
    }

    pub fn was_form_reset(&self, element: FakeElement) -> bool {
        self.inner.borrow().reset_forms.contains(&element.0)
    }

    fn is_inside(inner: &Inner, container: usize, target: usize) -> bool {
        let mut current = Some(target);
        while let Some(index) = current {
            if index == container {
                return true;
            }
            current = inner.elements[index].parent;
        }
        false
    }
}

impl Dom for FakeDom {
    type Element = FakeElement;

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        let inner = self.inner.borrow();
        inner
            .elements
            .iter()
            .position(|e| e.id.as_deref() == Some(id))
            .map(FakeElement)
    }

    fn query_selector(&self, selector: &str) -> Option<FakeElement> {
        self.query_selector_all(selector).into_iter().next()
    }

    fn query_selector_all(&self, selector: &str) -> Vec<FakeElement> {
        let inner = self.inner.borrow();
        inner
            .elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.selector.as_deref() == Some(selector))
            .map(|(i, _)| FakeElement(i))
            .collect()
    }

    fn contains(&self, container: &FakeElement, target: &FakeElement) -> bool {
        Self::is_inside(&self.inner.borrow(), container.0, target.0)
    }

    fn add_class(&self, element: &FakeElement, class: &str) {
        self.inner.borrow_mut().elements[element.0]
            .classes
            .insert(class.into());
    }

    fn remove_class(&self, element: &FakeElement, class: &str) {
        self.inner.borrow_mut().elements[element.0]
            .classes
            .remove(class);
    }

    fn has_class(&self, element: &FakeElement, class: &str) -> bool {
        self.inner.borrow().elements[element.0]
            .classes
            .contains(class)
    }

    fn set_style(&self, element: &FakeElement, property: &str, value: &str) {
        self.inner.borrow_mut().elements[element.0]
            .styles
            .insert(property.into(), value.into());
    }

    fn attribute(&self, element: &FakeElement, name: &str) -> Option<String> {
        self.inner.borrow().elements[element.0]
            .attributes
            .get(name)
            .cloned()
    }

    fn set_attribute(&self, element: &FakeElement, name: &str, value: &str) {
        self.inner.borrow_mut().elements[element.0]
            .attributes
            .insert(name.into(), value.into());
    }

    fn field_value(&self, element: &FakeElement) -> String {
        self.inner.borrow().elements[element.0].value.clone()
    }

    fn selected_option_label(&self, element: &FakeElement) -> Option<String> {
        self.inner.borrow().elements[element.0]
            .selected_label
            .clone()
    }

    fn reset_form(&self, element: &FakeElement) {
        let mut inner = self.inner.borrow_mut();
        inner.reset_forms.push(element.0);
        // Fields are cleared the way a real form reset clears its own
        // controls: everything inside the form element.
        for index in 0..inner.elements.len() {
            if Self::is_inside(&inner, element.0, index) {
                inner.elements[index].value.clear();
            }
        }
    }

    fn offset_top(&self, element: &FakeElement) -> f64 {
        self.inner.borrow().elements[element.0].offset_top
    }

    fn scroll_y(&self) -> f64 {
        self.inner.borrow().scroll_y
    }

    fn viewport_width(&self) -> f64 {
        self.inner.borrow().viewport_width
    }

    fn scroll_to(&self, top: f64) {
        self.inner.borrow_mut().scrolled_to.push(top);
    }

    fn set_body_overflow(&self, value: &str) {
        self.inner.borrow_mut().body_overflow = value.into();
    }

    fn open_in_new_context(&self, url: &str) {
        self.inner.borrow_mut().opened_urls.push(url.into());
    }

    fn alert(&self, message: &str) {
        self.inner.borrow_mut().alerts.push(message.into());
    }

    fn intersection_observation_supported(&self) -> bool {
        self.inner.borrow().observer_supported
    }

    fn observe_intersection(&self, element: &FakeElement) {
        self.inner.borrow_mut().observed.insert(element.0);
    }

    fn unobserve_intersection(&self, element: &FakeElement) {
        self.inner.borrow_mut().observed.remove(&element.0);
    }

    fn schedule(&self, task: TimerTask, delay_ms: u32) -> TimerHandle {
        let mut inner = self.inner.borrow_mut();
        let handle = TimerHandle(inner.next_timer);
        inner.next_timer += 1;
        inner.timers.push(PendingTimer {
            handle,
            task,
            delay_ms,
        });
        handle
    }

    fn cancel(&self, handle: TimerHandle) {
        let mut inner = self.inner.borrow_mut();
        inner.timers.retain(|t| t.handle != handle);
        inner.canceled.push(handle);
    }
}

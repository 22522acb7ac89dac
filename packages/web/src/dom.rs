//! `Dom` capability implementation over `web-sys`.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};

use archivo_ui::dom::{Dom, TimerHandle};
use archivo_ui::event::{TimerTask, UiEvent};

/// Callback that feeds a normalized event into the page's dispatch loop.
/// Set once the page exists; timers and the intersection observer fire
/// through it.
pub(crate) type DispatchFn = Rc<dyn Fn(UiEvent<web_sys::Element>)>;

#[derive(Default)]
struct Shared {
    timers: RefCell<HashMap<u64, Timeout>>,
    next_timer: Cell<u64>,
    observer: RefCell<Option<web_sys::IntersectionObserver>>,
    dispatch: RefCell<Option<DispatchFn>>,
}

/// Cheap-to-clone handle onto the live document. Clones share the timer
/// table, the intersection observer and the dispatch hook.
#[derive(Clone)]
pub struct WebDom {
    window: web_sys::Window,
    document: web_sys::Document,
    shared: Rc<Shared>,
}

impl WebDom {
    pub fn new(window: web_sys::Window, document: web_sys::Document) -> Self {
        Self {
            window,
            document,
            shared: Rc::new(Shared::default()),
        }
    }

    pub(crate) fn set_dispatch(&self, dispatch: DispatchFn) {
        *self.shared.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn set_observer(&self, observer: web_sys::IntersectionObserver) {
        *self.shared.observer.borrow_mut() = Some(observer);
    }

    /// Deliver an event to the page, if it is wired yet. The hook is
    /// cloned out first so handlers can schedule timers reentrantly.
    pub(crate) fn dispatch(&self, event: UiEvent<web_sys::Element>) {
        let dispatch = self.shared.dispatch.borrow().clone();
        if let Some(dispatch) = dispatch {
            dispatch(event);
        }
    }
}

impl Dom for WebDom {
    type Element = web_sys::Element;

    fn element_by_id(&self, id: &str) -> Option<web_sys::Element> {
        self.document.get_element_by_id(id)
    }

    fn query_selector(&self, selector: &str) -> Option<web_sys::Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_selector_all(&self, selector: &str) -> Vec<web_sys::Element> {
        let mut elements = Vec::new();
        if let Ok(list) = self.document.query_selector_all(selector) {
            for index in 0..list.length() {
                if let Some(element) = list
                    .get(index)
                    .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
                {
                    elements.push(element);
                }
            }
        }
        elements
    }

    fn contains(&self, container: &web_sys::Element, target: &web_sys::Element) -> bool {
        container.contains(Some(target.as_ref()))
    }

    fn add_class(&self, element: &web_sys::Element, class: &str) {
        let _ = element.class_list().add_1(class);
    }

    fn remove_class(&self, element: &web_sys::Element, class: &str) {
        let _ = element.class_list().remove_1(class);
    }

    fn has_class(&self, element: &web_sys::Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn set_style(&self, element: &web_sys::Element, property: &str, value: &str) {
        if let Some(element) = element.dyn_ref::<web_sys::HtmlElement>() {
            let _ = element.style().set_property(property, value);
        }
    }

    fn attribute(&self, element: &web_sys::Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &web_sys::Element, name: &str, value: &str) {
        let _ = element.set_attribute(name, value);
    }

    fn field_value(&self, element: &web_sys::Element) -> String {
        if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
            return input.value();
        }
        if let Some(area) = element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
            return area.value();
        }
        if let Some(select) = element.dyn_ref::<web_sys::HtmlSelectElement>() {
            return select.value();
        }
        String::new()
    }

    fn selected_option_label(&self, element: &web_sys::Element) -> Option<String> {
        let select = element.dyn_ref::<web_sys::HtmlSelectElement>()?;
        let option = select.selected_options().item(0)?;
        let text = option.text_content()?;
        Some(text.trim().to_string())
    }

    fn reset_form(&self, element: &web_sys::Element) {
        if let Some(form) = element.dyn_ref::<web_sys::HtmlFormElement>() {
            form.reset();
        }
    }

    fn offset_top(&self, element: &web_sys::Element) -> f64 {
        element
            .dyn_ref::<web_sys::HtmlElement>()
            .map(|element| f64::from(element.offset_top()))
            .unwrap_or(0.0)
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_to(&self, top: f64) {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn set_body_overflow(&self, value: &str) {
        if let Some(body) = self.document.body() {
            let _ = body.style().set_property("overflow", value);
        }
    }

    fn open_in_new_context(&self, url: &str) {
        let _ = self.window.open_with_url_and_target(url, "_blank");
    }

    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    fn intersection_observation_supported(&self) -> bool {
        js_sys::Reflect::has(
            self.window.as_ref(),
            &JsValue::from_str("IntersectionObserver"),
        )
        .unwrap_or(false)
    }

    fn observe_intersection(&self, element: &web_sys::Element) {
        if let Some(observer) = self.shared.observer.borrow().as_ref() {
            observer.observe(element);
        }
    }

    fn unobserve_intersection(&self, element: &web_sys::Element) {
        if let Some(observer) = self.shared.observer.borrow().as_ref() {
            observer.unobserve(element);
        }
    }

    fn schedule(&self, task: TimerTask, delay_ms: u32) -> TimerHandle {
        let handle = TimerHandle(self.shared.next_timer.get());
        self.shared.next_timer.set(handle.0 + 1);

        let shared = self.shared.clone();
        let timeout = Timeout::new(delay_ms, move || {
            shared.timers.borrow_mut().remove(&handle.0);
            let dispatch = shared.dispatch.borrow().clone();
            if let Some(dispatch) = dispatch {
                dispatch(UiEvent::TimerFired(task));
            }
        });
        self.shared.timers.borrow_mut().insert(handle.0, timeout);
        handle
    }

    fn cancel(&self, handle: TimerHandle) {
        if let Some(timeout) = self.shared.timers.borrow_mut().remove(&handle.0) {
            timeout.cancel();
        }
    }
}

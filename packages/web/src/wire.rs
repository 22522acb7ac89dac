//! Event wiring: listeners, the intersection observer, and page assembly.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use archivo_ui::config::INTERSECTION_THRESHOLD;
use archivo_ui::{Dom, Key, ModalKind, Page, PageConfig, UiEvent};

use crate::dom::WebDom;
use crate::error::AttachError;
use crate::select::resolve_config;

/// The live page behind the wired listeners.
pub type WebPage = Rc<RefCell<Page<WebDom>>>;

/// Wire the current document: resolve the page config, build the
/// capability handle and the intersection observer, install the
/// controllers, and register every listener. Runs once at module load.
pub fn attach() -> Result<WebPage, AttachError> {
    let window = web_sys::window().ok_or(AttachError::NoWindow)?;
    let document = window.document().ok_or(AttachError::NoDocument)?;

    let config = page_config(&document);
    let dom = WebDom::new(window.clone(), document.clone());

    if dom.intersection_observation_supported() {
        let observer = build_observer(&dom, &config)?;
        dom.set_observer(observer);
    }

    let page = Rc::new(RefCell::new(Page::new(dom.clone(), config.clone())));
    {
        let page = page.clone();
        dom.set_dispatch(Rc::new(move |event| page.borrow_mut().dispatch(event)));
    }

    attach_listeners(&window, &document, &dom, &config)?;
    debug!("page wired");
    Ok(page)
}

fn page_config(document: &web_sys::Document) -> PageConfig {
    let inline = document
        .get_element_by_id("page-config")
        .and_then(|element| element.text_content());
    let variant = document
        .body()
        .and_then(|body| body.get_attribute("data-page"));
    resolve_config(variant.as_deref(), inline.as_deref())
}

fn build_observer(
    dom: &WebDom,
    config: &PageConfig,
) -> Result<web_sys::IntersectionObserver, AttachError> {
    let callback = {
        let dom = dom.clone();
        Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                dom.dispatch(UiEvent::Intersection {
                    target: entry.target(),
                    is_intersecting: entry.is_intersecting(),
                });
            }
        })
    };

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(INTERSECTION_THRESHOLD));
    options.set_root_margin(&format!(
        "0px 0px {}px 0px",
        config.reveal.bottom_inset_px
    ));

    let observer = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .map_err(AttachError::from_js)?;
    callback.forget();
    Ok(observer)
}

/// Register a listener that lives for the page's lifetime.
fn on_event(
    target: &web_sys::EventTarget,
    event_type: &str,
    handler: impl Fn(web_sys::Event) + 'static,
) -> Result<(), AttachError> {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target
        .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
        .map_err(AttachError::from_js)?;
    closure.forget();
    Ok(())
}

fn event_target(event: &web_sys::Event) -> Option<web_sys::Element> {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
}

fn attach_listeners(
    window: &web_sys::Window,
    document: &web_sys::Document,
    dom: &WebDom,
    config: &PageConfig,
) -> Result<(), AttachError> {
    {
        let dom = dom.clone();
        on_event(window.as_ref(), "scroll", move |_| {
            dom.dispatch(UiEvent::Scroll);
        })?;
    }
    {
        let dom = dom.clone();
        on_event(window.as_ref(), "resize", move |_| {
            dom.dispatch(UiEvent::Resize);
        })?;
    }
    {
        let dom = dom.clone();
        on_event(document.as_ref(), "keydown", move |event| {
            if let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                let key = if event.key() == "Escape" {
                    Key::Escape
                } else {
                    Key::Other
                };
                dom.dispatch(UiEvent::KeyDown(key));
            }
        })?;
    }
    {
        let dom = dom.clone();
        on_event(document.as_ref(), "click", move |event| {
            if let Some(target) = event_target(&event) {
                dom.dispatch(UiEvent::DocumentClick { target });
            }
        })?;
    }

    if let Some(trigger) = document.get_element_by_id(&config.menu.trigger_id) {
        let dom = dom.clone();
        on_event(trigger.as_ref(), "click", move |event| {
            // The trigger owns its click; the document-level listener must
            // not treat it as an outside click.
            event.stop_propagation();
            dom.dispatch(UiEvent::MenuTriggerClick);
        })?;
    }

    // Nav-link listeners go on before the generic fragment listeners so
    // the menu reacts first, matching registration order on each element.
    for link in dom.query_selector_all(&format!("#{} a", config.menu.panel_id)) {
        let dom = dom.clone();
        on_event(link.as_ref(), "click", move |_| {
            dom.dispatch(UiEvent::NavLinkClick);
        })?;
    }

    for anchor in dom.query_selector_all("a[href^=\"#\"]") {
        let fragment = anchor.get_attribute("href").unwrap_or_default();
        let dom = dom.clone();
        on_event(anchor.as_ref(), "click", move |event| {
            event.prevent_default();
            dom.dispatch(UiEvent::AnchorClick {
                fragment: fragment.clone(),
            });
        })?;
    }

    if let Some(modal) = &config.video_modal {
        attach_modal(
            document,
            dom,
            ModalKind::Video,
            &modal.trigger_id,
            &modal.overlay_id,
            &modal.close_id,
        )?;
    }
    if let Some(modal) = &config.image_modal {
        attach_modal(
            document,
            dom,
            ModalKind::Image,
            &modal.trigger_id,
            &modal.overlay_id,
            &modal.close_id,
        )?;
    }

    if let Some(form_config) = &config.contact_form {
        if let Some(form) = document.get_element_by_id(&form_config.form_id) {
            let dom = dom.clone();
            on_event(form.as_ref(), "submit", move |event| {
                event.prevent_default();
                dom.dispatch(UiEvent::FormSubmit);
            })?;
        }
    }

    Ok(())
}

fn attach_modal(
    document: &web_sys::Document,
    dom: &WebDom,
    kind: ModalKind,
    trigger_id: &str,
    overlay_id: &str,
    close_id: &str,
) -> Result<(), AttachError> {
    if let Some(trigger) = document.get_element_by_id(trigger_id) {
        let dom = dom.clone();
        on_event(trigger.as_ref(), "click", move |_| {
            dom.dispatch(UiEvent::ModalTriggerClick(kind));
        })?;
    }
    if let Some(close) = document.get_element_by_id(close_id) {
        let dom = dom.clone();
        on_event(close.as_ref(), "click", move |_| {
            dom.dispatch(UiEvent::ModalCloseClick(kind));
        })?;
    }
    if let Some(overlay) = document.get_element_by_id(overlay_id) {
        let dom = dom.clone();
        on_event(overlay.as_ref(), "click", move |event| {
            if let Some(target) = event_target(&event) {
                dom.dispatch(UiEvent::ModalOverlayClick { kind, target });
            }
        })?;
    }
    Ok(())
}

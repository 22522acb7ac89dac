//! Cross-controller scenarios driven through a fully wired [`Page`].
//!
//! These mirror how the browser adapter feeds events: one [`UiEvent`] at a
//! time, fanned out to every controller, with timers fired explicitly.

use crate::config::{ACTIVE_CLASS, SCROLLED_CLASS};
use crate::contact::query_param;
use crate::fake::{FakeDom, FakeElement};
use crate::{Dom, Key, ModalKind, Page, PageConfig, TimerTask, UiEvent};

struct LandingPage {
    dom: FakeDom,
    page: Page<FakeDom>,
}

impl LandingPage {
    /// A document carrying every element the landing config names.
    fn new() -> Self {
        let dom = FakeDom::new();
        dom.add_element("navbar");
        dom.add_element("hamburger-menu");
        dom.add_element("nav-links");

        dom.add_element("videoTrigger");
        dom.add_element("videoModal");
        dom.add_element("closeModal");
        dom.add_element("modalVideoIframe");
        let inline = dom.add_selector_element(".video-container iframe");
        dom.set_attribute(&inline, "src", "https://www.youtube.com/embed/demo?rel=0");

        let form = dom.add_element("contactForm");
        dom.add_element("confirmationMessage");
        for field in ["nombre", "correo", "asunto", "mensaje", "municipalidad"] {
            dom.add_child_with_id(form, field);
        }

        dom.add_selector_element(".feature-card");
        dom.add_selector_element(".hero-text");

        let page = Page::new(dom.clone(), PageConfig::landing());
        Self { dom, page }
    }

    fn by_id(&self, id: &str) -> FakeElement {
        self.dom.element_by_id(id).unwrap()
    }

    fn fire(&mut self, task: TimerTask) {
        let timer = self.dom.take_timer(task).expect("timer pending");
        self.page.dispatch(UiEvent::TimerFired(timer.task));
    }

    fn fill_form(&self) {
        self.dom.set_value(self.by_id("nombre"), "Ana Pérez");
        self.dom.set_value(self.by_id("correo"), "ana@example.com");
        self.dom.set_value(self.by_id("asunto"), "soporte");
        self.dom
            .set_selected_label(self.by_id("asunto"), "Soporte técnico");
        self.dom.set_value(self.by_id("mensaje"), "Hola");
        self.dom
            .set_value(self.by_id("municipalidad"), "Rosario");
    }
}

#[test]
fn landing_page_installs_every_controller() {
    let fx = LandingPage::new();
    // reveal, navbar, menu, video modal, contact form, anchors, layout
    assert_eq!(fx.page.controller_count(), 7);
}

#[test]
fn initialization_reconciles_layout_for_the_current_viewport() {
    let fx = LandingPage::new();
    // Default fake viewport is desktop-sized.
    assert_eq!(
        fx.dom.style(fx.by_id("nav-links"), "display").as_deref(),
        Some("flex")
    );
}

#[test]
fn reveal_elements_start_hidden_and_reveal_once() {
    let mut fx = LandingPage::new();
    let card = fx.dom.query_selector(".feature-card").unwrap();
    assert_eq!(fx.dom.style(card, "opacity").as_deref(), Some("0"));
    assert!(fx.dom.is_observed(card));

    fx.page.dispatch(UiEvent::Intersection {
        target: card,
        is_intersecting: true,
    });
    assert_eq!(fx.dom.style(card, "opacity").as_deref(), Some("1"));
    // Landing reveals are one-shot.
    assert!(!fx.dom.is_observed(card));
}

#[test]
fn navbar_class_is_a_function_of_scroll_offset() {
    let mut fx = LandingPage::new();
    let navbar = fx.by_id("navbar");

    fx.dom.set_scroll_y(51.0);
    fx.page.dispatch(UiEvent::Scroll);
    assert!(fx.dom.has_class(&navbar, SCROLLED_CLASS));

    fx.dom.set_scroll_y(49.0);
    fx.page.dispatch(UiEvent::Scroll);
    assert!(!fx.dom.has_class(&navbar, SCROLLED_CLASS));
}

#[test]
fn menu_opens_arms_and_dismisses_on_outside_click() {
    let mut fx = LandingPage::new();
    let trigger = fx.by_id("hamburger-menu");
    let panel = fx.by_id("nav-links");
    let outside = fx.dom.element();

    fx.page.dispatch(UiEvent::MenuTriggerClick);
    assert!(fx.dom.has_class(&trigger, ACTIVE_CLASS));
    assert!(fx.dom.has_class(&panel, ACTIVE_CLASS));
    assert_eq!(fx.dom.body_overflow(), "hidden");

    // The opening click's own document event arrives before arming.
    fx.page.dispatch(UiEvent::DocumentClick { target: outside });
    assert!(fx.dom.has_class(&panel, ACTIVE_CLASS));

    fx.fire(TimerTask::ArmMenuOutsideClick);
    fx.page.dispatch(UiEvent::DocumentClick { target: outside });
    assert!(!fx.dom.has_class(&trigger, ACTIVE_CLASS));
    assert!(!fx.dom.has_class(&panel, ACTIVE_CLASS));
    assert_eq!(fx.dom.body_overflow(), "auto");
}

#[test]
fn anchor_click_scrolls_and_closes_the_menu() {
    let mut fx = LandingPage::new();
    let section = fx.dom.add_element("contacto");
    fx.dom.set_offset_top(section, 900.0);

    fx.dom.set_viewport_width(500.0);
    fx.page.dispatch(UiEvent::Resize);
    fx.page.dispatch(UiEvent::MenuTriggerClick);

    fx.page.dispatch(UiEvent::AnchorClick {
        fragment: "#contacto".into(),
    });
    assert_eq!(fx.dom.scrolled_to(), vec![820.0]);
    assert!(!fx.dom.has_class(&fx.by_id("nav-links"), ACTIVE_CLASS));
    assert_eq!(fx.dom.body_overflow(), "auto");
}

#[test]
fn bare_fragment_is_ignored() {
    let mut fx = LandingPage::new();
    fx.page.dispatch(UiEvent::AnchorClick {
        fragment: "#".into(),
    });
    assert!(fx.dom.scrolled_to().is_empty());
}

#[test]
fn resize_to_desktop_closes_open_menu() {
    let mut fx = LandingPage::new();
    fx.dom.set_viewport_width(500.0);
    fx.page.dispatch(UiEvent::Resize);
    fx.page.dispatch(UiEvent::MenuTriggerClick);

    fx.dom.set_viewport_width(1024.0);
    fx.page.dispatch(UiEvent::Resize);
    assert!(!fx.dom.has_class(&fx.by_id("nav-links"), ACTIVE_CLASS));
    assert_eq!(fx.dom.body_overflow(), "auto");
    assert_eq!(
        fx.dom.style(fx.by_id("nav-links"), "display").as_deref(),
        Some("flex")
    );
}

#[test]
fn resize_to_mobile_collapses_closed_panel() {
    let mut fx = LandingPage::new();
    fx.dom.set_viewport_width(500.0);
    fx.page.dispatch(UiEvent::Resize);
    assert_eq!(
        fx.dom.style(fx.by_id("nav-links"), "display").as_deref(),
        Some("none")
    );
}

#[test]
fn scroll_lock_survives_until_the_last_overlay_closes() {
    let mut fx = LandingPage::new();

    fx.page.dispatch(UiEvent::MenuTriggerClick);
    fx.page.dispatch(UiEvent::ModalTriggerClick(ModalKind::Video));
    assert_eq!(fx.dom.body_overflow(), "hidden");

    // Closing the modal must not re-enable scrolling under the open menu.
    fx.page.dispatch(UiEvent::ModalCloseClick(ModalKind::Video));
    assert_eq!(fx.dom.body_overflow(), "hidden");

    fx.page.dispatch(UiEvent::MenuTriggerClick);
    assert_eq!(fx.dom.body_overflow(), "auto");
}

#[test]
fn escape_closes_the_video_modal_and_stops_playback() {
    let mut fx = LandingPage::new();
    let overlay = fx.by_id("videoModal");
    let frame = fx.by_id("modalVideoIframe");

    fx.page.dispatch(UiEvent::ModalTriggerClick(ModalKind::Video));
    assert_eq!(
        fx.dom.attribute(&frame, "src").as_deref(),
        Some("https://www.youtube.com/embed/demo?rel=0&autoplay=1")
    );

    fx.page.dispatch(UiEvent::KeyDown(Key::Escape));
    assert!(!fx.dom.has_class(&overlay, ACTIVE_CLASS));
    assert_eq!(fx.dom.attribute(&frame, "src").as_deref(), Some("about:blank"));
}

#[test]
fn incomplete_form_alerts_and_opens_nothing() {
    let mut fx = LandingPage::new();
    fx.fill_form();
    fx.dom.set_value(fx.by_id("correo"), "");

    fx.page.dispatch(UiEvent::FormSubmit);
    assert_eq!(
        fx.dom.alerts(),
        vec!["Por favor, complete todos los campos obligatorios.".to_string()]
    );
    assert!(fx.dom.opened_urls().is_empty());
    assert!(fx.dom.pending_timers().is_empty());
}

#[test]
fn successful_submission_runs_the_two_stage_sequence() {
    let mut fx = LandingPage::new();
    let confirmation = fx.by_id("confirmationMessage");
    fx.fill_form();

    fx.page.dispatch(UiEvent::FormSubmit);
    assert_eq!(
        fx.dom.style(confirmation, "display").as_deref(),
        Some("block")
    );
    assert!(fx.dom.opened_urls().is_empty());

    fx.fire(TimerTask::OpenCompose);
    let urls = fx.dom.opened_urls();
    assert_eq!(urls.len(), 1);
    assert_eq!(query_param(&urls[0], "su").unwrap(), "Soporte técnico");
    let body = query_param(&urls[0], "body").unwrap();
    assert_eq!(
        body,
        "Nombre: Ana Pérez\nCorreo: ana@example.com\nMunicipalidad: Rosario\n\
         Asunto: Soporte técnico\n\nMensaje:\nHola"
    );
    assert!(fx.dom.was_form_reset(fx.by_id("contactForm")));

    fx.fire(TimerTask::HideConfirmation);
    assert_eq!(
        fx.dom.style(confirmation, "display").as_deref(),
        Some("none")
    );
}

#[test]
fn resubmission_cancels_the_stale_compose_task() {
    let mut fx = LandingPage::new();
    fx.fill_form();

    fx.page.dispatch(UiEvent::FormSubmit);
    fx.dom.set_value(fx.by_id("mensaje"), "Segundo intento");
    fx.page.dispatch(UiEvent::FormSubmit);

    // Only the latest compose task is pending.
    let pending: Vec<_> = fx
        .dom
        .pending_timers()
        .into_iter()
        .filter(|t| t.task == TimerTask::OpenCompose)
        .collect();
    assert_eq!(pending.len(), 1);
    assert!(!fx.dom.canceled_timers().is_empty());

    fx.fire(TimerTask::OpenCompose);
    let urls = fx.dom.opened_urls();
    assert_eq!(urls.len(), 1);
    assert!(query_param(&urls[0], "body")
        .unwrap()
        .contains("Segundo intento"));
}

#[test]
fn cloud_page_reveals_repeatedly_and_runs_the_image_lightbox() {
    let dom = FakeDom::new();
    dom.add_element("navbar");
    dom.add_element("hamburger-menu");
    dom.add_element("nav-links");
    dom.add_element("integration-image");
    let overlay = dom.add_element("image-modal");
    dom.add_element("modal-image");
    dom.add_element("modal-close");
    let fading = dom.add_selector_element(".fade-in-up");

    let mut page = Page::new(dom.clone(), PageConfig::cloud());

    page.dispatch(UiEvent::Intersection {
        target: fading,
        is_intersecting: true,
    });
    assert_eq!(dom.style(fading, "opacity").as_deref(), Some("1"));
    // Cloud reveals stay registered.
    assert!(dom.is_observed(fading));

    page.dispatch(UiEvent::ModalTriggerClick(ModalKind::Image));
    assert!(dom.has_class(&overlay, ACTIVE_CLASS));
    assert_eq!(dom.body_overflow(), "hidden");

    page.dispatch(UiEvent::ModalOverlayClick {
        kind: ModalKind::Image,
        target: overlay,
    });
    assert!(!dom.has_class(&overlay, ACTIVE_CLASS));
    assert_eq!(dom.body_overflow(), "auto");
}

#[test]
fn unsupported_observer_reveals_everything_at_install() {
    let dom = FakeDom::new();
    dom.set_observer_supported(false);
    let card = dom.add_selector_element(".feature-card");
    dom.add_element("navbar");
    dom.add_element("hamburger-menu");
    dom.add_element("nav-links");

    let _page = Page::new(dom.clone(), PageConfig::landing());
    assert_eq!(dom.style(card, "opacity").as_deref(), Some("1"));
    assert_eq!(dom.style(card, "transform").as_deref(), Some("translateY(0)"));
}

#[test]
fn empty_document_degrades_to_a_quiet_page() {
    let dom = FakeDom::new();
    let mut page = Page::new(dom.clone(), PageConfig::landing());
    // Only the element-free anchor controller survives.
    assert_eq!(page.controller_count(), 1);

    let stray = dom.element();
    page.dispatch(UiEvent::MenuTriggerClick);
    page.dispatch(UiEvent::Scroll);
    page.dispatch(UiEvent::FormSubmit);
    page.dispatch(UiEvent::DocumentClick { target: stray });
    page.dispatch(UiEvent::KeyDown(Key::Escape));

    assert_eq!(dom.body_overflow(), "auto");
    assert!(dom.opened_urls().is_empty());
    assert!(dom.alerts().is_empty());
}

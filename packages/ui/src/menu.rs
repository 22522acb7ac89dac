//! The mobile hamburger menu.

use tracing::warn;

use crate::anchors::fragment_target;
use crate::config::{ACTIVE_CLASS, MenuConfig, MENU_ARM_DELAY_MS, MOBILE_BREAKPOINT_PX};
use crate::dom::{Dom, TimerHandle};
use crate::event::{TimerTask, UiEvent};
use crate::page::{Controller, PageContext};

/// Two-state machine over the trigger button and the navigation panel.
///
/// Opening acquires the scroll lock and schedules a short arming task;
/// outside clicks only close the menu once that task has fired, so the
/// opening click itself never dismisses it. Closing releases the lock,
/// disarms, and cancels a still-pending arming task.
pub(crate) struct MenuController<D: Dom> {
    trigger: D::Element,
    panel: D::Element,
    open: bool,
    armed: bool,
    arm_task: Option<TimerHandle>,
}

impl<D: Dom> MenuController<D> {
    pub(crate) fn install(dom: &D, config: &MenuConfig) -> Option<Self> {
        let trigger = dom.element_by_id(&config.trigger_id);
        let panel = dom.element_by_id(&config.panel_id);
        match (trigger, panel) {
            (Some(trigger), Some(panel)) => Some(Self {
                trigger,
                panel,
                open: false,
                armed: false,
                arm_task: None,
            }),
            _ => {
                warn!(
                    trigger = %config.trigger_id,
                    panel = %config.panel_id,
                    "menu elements missing, hamburger menu disabled"
                );
                None
            }
        }
    }

    fn open_menu(&mut self, ctx: &mut PageContext<'_, D>) {
        self.open = true;
        self.armed = false;
        ctx.dom.add_class(&self.trigger, ACTIVE_CLASS);
        ctx.dom.add_class(&self.panel, ACTIVE_CLASS);
        ctx.scroll_lock.acquire(ctx.dom);
        if let Some(handle) = self.arm_task.take() {
            ctx.dom.cancel(handle);
        }
        self.arm_task = Some(
            ctx.dom
                .schedule(TimerTask::ArmMenuOutsideClick, MENU_ARM_DELAY_MS),
        );
    }

    fn close_menu(&mut self, ctx: &mut PageContext<'_, D>) {
        if !self.open {
            return;
        }
        self.open = false;
        self.armed = false;
        ctx.dom.remove_class(&self.trigger, ACTIVE_CLASS);
        ctx.dom.remove_class(&self.panel, ACTIVE_CLASS);
        ctx.scroll_lock.release(ctx.dom);
        if let Some(handle) = self.arm_task.take() {
            ctx.dom.cancel(handle);
        }
    }

    fn is_outside(&self, dom: &D, target: &D::Element) -> bool {
        !dom.contains(&self.trigger, target) && !dom.contains(&self.panel, target)
    }
}

impl<D: Dom> Controller<D> for MenuController<D> {
    fn handle(&mut self, event: &UiEvent<D::Element>, ctx: &mut PageContext<'_, D>) {
        match event {
            UiEvent::MenuTriggerClick => {
                if self.open {
                    self.close_menu(ctx);
                } else {
                    self.open_menu(ctx);
                }
            }
            UiEvent::TimerFired(TimerTask::ArmMenuOutsideClick) => {
                self.arm_task = None;
                if self.open {
                    self.armed = true;
                }
            }
            UiEvent::DocumentClick { target } => {
                if self.open && self.armed && self.is_outside(ctx.dom, target) {
                    self.close_menu(ctx);
                }
            }
            UiEvent::NavLinkClick => {
                // Navigation intent on mobile; wider viewports keep the
                // menu as it is.
                if ctx.dom.viewport_width() <= MOBILE_BREAKPOINT_PX {
                    self.close_menu(ctx);
                }
            }
            UiEvent::AnchorClick { fragment } => {
                if fragment_target(ctx.dom, fragment).is_some() {
                    self.close_menu(ctx);
                }
            }
            UiEvent::Resize => {
                if ctx.dom.viewport_width() > MOBILE_BREAKPOINT_PX {
                    self.close_menu(ctx);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeDom;
    use crate::ScrollLock;

    struct Fixture {
        dom: FakeDom,
        controller: MenuController<FakeDom>,
        lock: ScrollLock,
    }

    impl Fixture {
        fn new() -> Self {
            let dom = FakeDom::new();
            dom.add_element("hamburger-menu");
            dom.add_element("nav-links");
            let controller = MenuController::install(
                &dom,
                &MenuConfig {
                    trigger_id: "hamburger-menu".into(),
                    panel_id: "nav-links".into(),
                },
            )
            .unwrap();
            Self {
                dom,
                controller,
                lock: ScrollLock::new(),
            }
        }

        fn handle(&mut self, event: UiEvent<crate::fake::FakeElement>) {
            self.controller.handle(
                &event,
                &mut PageContext {
                    dom: &self.dom,
                    scroll_lock: &mut self.lock,
                },
            );
        }

        fn arm(&mut self) {
            let timer = self
                .dom
                .take_timer(TimerTask::ArmMenuOutsideClick)
                .expect("arming task scheduled");
            self.handle(UiEvent::TimerFired(timer.task));
        }
    }

    #[test]
    fn trigger_click_toggles_classes_and_scroll_lock() {
        let mut fx = Fixture::new();
        let trigger = fx.dom.element_by_id("hamburger-menu").unwrap();
        let panel = fx.dom.element_by_id("nav-links").unwrap();

        fx.handle(UiEvent::MenuTriggerClick);
        assert!(fx.dom.has_class(&trigger, ACTIVE_CLASS));
        assert!(fx.dom.has_class(&panel, ACTIVE_CLASS));
        assert_eq!(fx.dom.body_overflow(), "hidden");

        fx.handle(UiEvent::MenuTriggerClick);
        assert!(!fx.dom.has_class(&trigger, ACTIVE_CLASS));
        assert!(!fx.dom.has_class(&panel, ACTIVE_CLASS));
        assert_eq!(fx.dom.body_overflow(), "auto");
    }

    #[test]
    fn outside_click_only_closes_after_arming() {
        let mut fx = Fixture::new();
        let outside = fx.dom.element();

        fx.handle(UiEvent::MenuTriggerClick);

        // Before the arming task fires, outside clicks are ignored.
        fx.handle(UiEvent::DocumentClick { target: outside });
        assert_eq!(fx.dom.body_overflow(), "hidden");

        fx.arm();
        fx.handle(UiEvent::DocumentClick { target: outside });
        assert_eq!(fx.dom.body_overflow(), "auto");
        assert!(!fx.controller.open);
    }

    #[test]
    fn click_inside_panel_does_not_close() {
        let mut fx = Fixture::new();
        let panel = fx.dom.element_by_id("nav-links").unwrap();
        let link = fx.dom.add_child(panel);

        fx.handle(UiEvent::MenuTriggerClick);
        fx.arm();
        fx.handle(UiEvent::DocumentClick { target: link });
        assert!(fx.controller.open);
    }

    #[test]
    fn closing_cancels_pending_arm_task() {
        let mut fx = Fixture::new();

        fx.handle(UiEvent::MenuTriggerClick);
        let handle = fx
            .dom
            .pending_timers()
            .first()
            .map(|t| t.handle)
            .expect("arming task scheduled");

        fx.handle(UiEvent::MenuTriggerClick);
        assert!(fx.dom.canceled_timers().contains(&handle));
        assert!(fx.dom.pending_timers().is_empty());
    }

    #[test]
    fn nav_link_click_closes_only_on_mobile() {
        let mut fx = Fixture::new();

        fx.dom.set_viewport_width(1024.0);
        fx.handle(UiEvent::MenuTriggerClick);
        fx.handle(UiEvent::NavLinkClick);
        assert!(fx.controller.open);

        fx.dom.set_viewport_width(500.0);
        fx.handle(UiEvent::NavLinkClick);
        assert!(!fx.controller.open);
    }

    #[test]
    fn anchor_navigation_closes_when_target_exists() {
        let mut fx = Fixture::new();
        fx.dom.add_element("contacto");

        fx.handle(UiEvent::MenuTriggerClick);
        fx.handle(UiEvent::AnchorClick {
            fragment: "#missing".into(),
        });
        assert!(fx.controller.open);

        fx.handle(UiEvent::AnchorClick {
            fragment: "#contacto".into(),
        });
        assert!(!fx.controller.open);
    }

    #[test]
    fn resize_above_breakpoint_forces_closed() {
        let mut fx = Fixture::new();

        fx.handle(UiEvent::MenuTriggerClick);
        fx.dom.set_viewport_width(1024.0);
        fx.handle(UiEvent::Resize);
        assert!(!fx.controller.open);
        assert_eq!(fx.dom.body_overflow(), "auto");
    }

    #[test]
    fn missing_elements_disable_controller() {
        let dom = FakeDom::new();
        dom.add_element("hamburger-menu");
        assert!(MenuController::install(
            &dom,
            &MenuConfig {
                trigger_id: "hamburger-menu".into(),
                panel_id: "nav-links".into(),
            },
        )
        .is_none());
    }
}

//! Page configuration and the shared layout/timing constants.
//!
//! One [`PageConfig`] value parameterizes the whole controller set. The two
//! presets reproduce the two pages of the site; an embedder can also supply
//! a config of its own (the types deserialize, so the browser adapter
//! accepts a JSON override embedded in the page).

use serde::{Deserialize, Serialize};

/// Viewport width at or below which the site is in its mobile layout.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Scroll offset past which the navbar gets its "scrolled" treatment.
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Fixed-header compensation subtracted from anchor scroll targets.
pub const ANCHOR_HEADER_OFFSET_PX: f64 = 80.0;

/// Delay before an open menu starts honoring outside clicks.
pub const MENU_ARM_DELAY_MS: u32 = 10;

/// Delay between showing the confirmation and opening the compose URL.
pub const COMPOSE_DELAY_MS: u32 = 1_000;

/// How long the confirmation message stays visible after the compose URL
/// opens.
pub const CONFIRMATION_HIDE_DELAY_MS: u32 = 5_000;

/// Intersection ratio at which an observed element counts as visible.
pub const INTERSECTION_THRESHOLD: f64 = 0.1;

/// Transition applied to reveal-animated elements before they are observed.
pub const REVEAL_TRANSITION: &str = "all 0.6s ease-out";

/// Initial downward offset of reveal-animated elements.
pub const REVEAL_OFFSET: &str = "translateY(30px)";

/// Class toggled on open menus, triggers and modal overlays.
pub const ACTIVE_CLASS: &str = "active";

/// Class toggled on the navbar past the scroll threshold.
pub const SCROLLED_CLASS: &str = "scrolled";

/// Everything a page's controllers need to find their elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub navbar_id: String,
    pub menu: MenuConfig,
    pub reveal: RevealConfig,
    pub video_modal: Option<VideoModalConfig>,
    pub image_modal: Option<ImageModalConfig>,
    pub contact_form: Option<ContactFormConfig>,
}

/// Hamburger menu elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    pub trigger_id: String,
    pub panel_id: String,
}

/// Scroll-triggered reveal animation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Selectors whose elements animate in on first visibility.
    pub selectors: Vec<String>,
    /// Bottom inset of the observation area, in px. Negative values shrink
    /// it, so elements must scroll further in before they reveal.
    pub bottom_inset_px: f64,
    /// Stop observing an element after its first reveal.
    pub once: bool,
}

/// Video lightbox elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoModalConfig {
    pub trigger_id: String,
    pub overlay_id: String,
    pub close_id: String,
    /// The player frame inside the overlay.
    pub frame_id: String,
    /// Selector for the inline player whose source the lightbox replays.
    pub source_selector: String,
}

/// Image lightbox elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageModalConfig {
    pub trigger_id: String,
    pub overlay_id: String,
    /// The enlarged image inside the overlay.
    pub image_id: String,
    pub close_id: String,
}

/// Contact form elements and the compose-link recipient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactFormConfig {
    pub form_id: String,
    /// Confirmation message element; tolerated missing at runtime.
    pub confirmation_id: String,
    pub name_id: String,
    pub email_id: String,
    pub subject_id: String,
    pub message_id: String,
    pub organization_id: String,
    /// Fixed recipient address of the webmail compose link.
    pub recipient: String,
}

impl PageConfig {
    /// The landing page: video lightbox, contact form, one-shot reveal
    /// across the marketing sections.
    pub fn landing() -> Self {
        Self {
            navbar_id: "navbar".into(),
            menu: MenuConfig {
                trigger_id: "hamburger-menu".into(),
                panel_id: "nav-links".into(),
            },
            reveal: RevealConfig {
                selectors: vec![
                    ".feature-card".into(),
                    ".process-step".into(),
                    ".testimonio-card".into(),
                    ".hero-text".into(),
                    ".hero-visual".into(),
                    ".section-title".into(),
                ],
                bottom_inset_px: -50.0,
                once: true,
            },
            video_modal: Some(VideoModalConfig {
                trigger_id: "videoTrigger".into(),
                overlay_id: "videoModal".into(),
                close_id: "closeModal".into(),
                frame_id: "modalVideoIframe".into(),
                source_selector: ".video-container iframe".into(),
            }),
            image_modal: None,
            contact_form: Some(ContactFormConfig {
                form_id: "contactForm".into(),
                confirmation_id: "confirmationMessage".into(),
                name_id: "nombre".into(),
                email_id: "correo".into(),
                subject_id: "asunto".into(),
                message_id: "mensaje".into(),
                organization_id: "municipalidad".into(),
                recipient: "rs.siamsoft@gmail.com".into(),
            }),
        }
    }

    /// The cloud sync page: image lightbox, repeated reveal on
    /// `.fade-in-up`, no contact form.
    pub fn cloud() -> Self {
        Self {
            navbar_id: "navbar".into(),
            menu: MenuConfig {
                trigger_id: "hamburger-menu".into(),
                panel_id: "nav-links".into(),
            },
            reveal: RevealConfig {
                selectors: vec![".fade-in-up".into()],
                bottom_inset_px: 0.0,
                once: false,
            },
            video_modal: None,
            image_modal: Some(ImageModalConfig {
                trigger_id: "integration-image".into(),
                overlay_id: "image-modal".into(),
                image_id: "modal-image".into(),
                close_id: "modal-close".into(),
            }),
            contact_form: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_preset_has_video_and_form() {
        let config = PageConfig::landing();
        assert!(config.video_modal.is_some());
        assert!(config.image_modal.is_none());
        assert!(config.contact_form.is_some());
        assert!(config.reveal.once);
        assert_eq!(config.reveal.bottom_inset_px, -50.0);
        assert_eq!(config.reveal.selectors.len(), 6);
    }

    #[test]
    fn cloud_preset_has_image_modal_only() {
        let config = PageConfig::cloud();
        assert!(config.video_modal.is_none());
        assert!(config.image_modal.is_some());
        assert!(config.contact_form.is_none());
        assert!(!config.reveal.once);
        assert_eq!(config.reveal.selectors, vec![".fade-in-up".to_string()]);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = PageConfig::landing();
        let json = serde_json::to_string(&config).unwrap();
        let back: PageConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.navbar_id, config.navbar_id);
        assert_eq!(
            back.contact_form.unwrap().recipient,
            config.contact_form.unwrap().recipient
        );
    }
}

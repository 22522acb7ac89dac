//! # archivo-ui
//!
//! Headless front-end controllers for the Archivo Central marketing site:
//! navbar scroll state, the mobile hamburger menu, scroll-triggered reveal
//! animations, the video and image lightboxes, the contact form's webmail
//! compose link, smooth in-page anchor scrolling, and responsive layout
//! reconciliation.
//!
//! ## Architecture
//!
//! Every browser event is normalized into a [`UiEvent`] and fanned out to a
//! set of independent controllers through [`Page::dispatch`]. Controllers
//! are small synchronous state machines: each one reacts only to the events
//! it understands and mutates the document exclusively through the [`Dom`]
//! capability trait. There are no inter-controller calls; coordination
//! happens through shared document state and the reference-counted
//! [`ScrollLock`].
//!
//! ```text
//! Browser (or FakeDom in tests)
//!     │ normalize
//!     ▼
//! UiEvent ──► Page::dispatch ──┬─► RevealController
//!                              ├─► NavbarController
//!                              ├─► MenuController
//!                              ├─► ModalController (video, image)
//!                              ├─► ContactController
//!                              ├─► AnchorController
//!                              └─► LayoutController
//!                                      │ effects
//!                                      ▼
//!                              Dom capability trait
//! ```
//!
//! One [`PageConfig`] parameterizes the whole set; the two presets
//! ([`PageConfig::landing`] and [`PageConfig::cloud`]) cover both pages of
//! the site. Delayed behaviors (menu outside-click arming, the compose and
//! confirmation timers of the contact form) are modeled as cancelable
//! [`TimerTask`]s scheduled through the capability trait and delivered back
//! as [`UiEvent::TimerFired`], so every timing-dependent contract is
//! deterministic under test.

mod anchors;
mod contact;
mod layout;
mod menu;
mod modal;
mod navbar;
mod page;
mod reveal;
mod scroll_lock;

pub mod config;
pub mod dom;
pub mod event;

// Recording test double (feature-gated)
#[cfg(any(test, feature = "testing"))]
pub mod fake;

// Cross-controller scenarios (test-only)
#[cfg(test)]
mod flow_tests;

pub use config::{
    ContactFormConfig, ImageModalConfig, MenuConfig, PageConfig, RevealConfig, VideoModalConfig,
};
pub use contact::{compose_mail, ComposedMail, FormError, FormSnapshot};
#[cfg(any(test, feature = "testing"))]
pub use contact::query_param;
pub use dom::{Dom, TimerHandle};
pub use event::{Key, ModalKind, TimerTask, UiEvent};
pub use page::Page;
pub use scroll_lock::ScrollLock;

//! # archivo-web
//!
//! Browser adapter for the Archivo Central site controllers: implements the
//! `archivo-ui` capability trait over the real DOM, normalizes browser
//! events into the controller dispatch loop, and exposes a wasm entry point
//! that wires the current document on module load.
//!
//! ## Building
//!
//! The wasm glue sits behind the `web` feature so native builds and tests
//! of the workspace stay browser-free:
//!
//! ```bash
//! wasm-pack build packages/web --features web
//! ```
//!
//! The page served alongside the bundle selects its configuration with
//! `<body data-page="landing">` (or `"cloud"`); an optional
//! `<script type="application/json" id="page-config">` block overrides the
//! preset wholesale.

pub mod error;
pub mod select;

#[cfg(feature = "web")]
mod boot;
#[cfg(feature = "web")]
mod dom;
#[cfg(feature = "web")]
mod wire;

pub use error::AttachError;

#[cfg(feature = "web")]
pub use dom::WebDom;
#[cfg(feature = "web")]
pub use wire::{attach, WebPage};

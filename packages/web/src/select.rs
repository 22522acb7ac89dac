//! Page configuration selection.
//!
//! The two site pages ship the same wasm bundle; the markup says which
//! preset applies via `data-page` on `<body>`, and may embed a full JSON
//! config to override the preset entirely.

use tracing::warn;

use archivo_ui::PageConfig;

/// The two pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageVariant {
    Landing,
    Cloud,
}

impl PageVariant {
    /// Parse the `data-page` attribute; anything unrecognized falls back
    /// to the landing page.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("cloud") => Self::Cloud,
            Some("landing") | None => Self::Landing,
            Some(other) => {
                warn!(value = other, "unknown data-page value, using landing");
                Self::Landing
            }
        }
    }

    pub fn config(self) -> PageConfig {
        match self {
            Self::Landing => PageConfig::landing(),
            Self::Cloud => PageConfig::cloud(),
        }
    }
}

/// An embedded JSON config wins; otherwise the `data-page` preset applies.
/// Invalid JSON is logged and ignored rather than breaking the page.
pub fn resolve_config(variant: Option<&str>, inline_json: Option<&str>) -> PageConfig {
    if let Some(json) = inline_json {
        match serde_json::from_str::<PageConfig>(json) {
            Ok(config) => return config,
            Err(err) => warn!(%err, "embedded page config is invalid, using preset"),
        }
    }
    PageVariant::from_attr(variant).config()
}

//! ==============================================================================
//! config.rs - header configuration types
//! ==============================================================================

use leptos::children::ViewFn;
use serde::{Deserialize, Serialize};

// ==============================================================================
// visual variants
// ==============================================================================

/// visual theme of the header, mapped 1:1 to a presentation class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderVariant {
    /// light background, for most pages
    #[default]
    Default,
    /// dark background, for dark-mode pages
    Dark,
    /// no background, for overlaying hero banners
    Transparent,
    /// brand gradient background
    Colored,
}

impl HeaderVariant {
    /// every variant, in display order
    pub const ALL: [HeaderVariant; 4] = [
        HeaderVariant::Default,
        HeaderVariant::Dark,
        HeaderVariant::Transparent,
        HeaderVariant::Colored,
    ];

    /// css class carried by the header root for this variant
    pub fn class(&self) -> &'static str {
        match self {
            HeaderVariant::Default => "masthead--default",
            HeaderVariant::Dark => "masthead--dark",
            HeaderVariant::Transparent => "masthead--transparent",
            HeaderVariant::Colored => "masthead--colored",
        }
    }

    /// stable lowercase key, same spelling serde uses
    pub fn key(&self) -> &'static str {
        match self {
            HeaderVariant::Default => "default",
            HeaderVariant::Dark => "dark",
            HeaderVariant::Transparent => "transparent",
            HeaderVariant::Colored => "colored",
        }
    }

    /// parse a lowercase key back into a variant
    pub fn from_key(key: &str) -> Option<HeaderVariant> {
        match key {
            "default" => Some(HeaderVariant::Default),
            "dark" => Some(HeaderVariant::Dark),
            "transparent" => Some(HeaderVariant::Transparent),
            "colored" => Some(HeaderVariant::Colored),
            _ => None,
        }
    }

    /// human-readable name for pickers
    pub fn label(&self) -> &'static str {
        match self {
            HeaderVariant::Default => "Default",
            HeaderVariant::Dark => "Dark",
            HeaderVariant::Transparent => "Transparent",
            HeaderVariant::Colored => "Colored",
        }
    }
}

// ==============================================================================
// navigation links
// ==============================================================================

/// one navigation entry. labels double as keys and must be unique
/// within a single render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// visible text, also the key
    pub label: String,
    /// link target
    pub href: String,
    /// whether this entry is the current location
    #[serde(default)]
    pub active: bool,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        NavLink {
            label: label.into(),
            href: href.into(),
            active: false,
        }
    }

    /// mark this entry as the current location
    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }
}

// ==============================================================================
// logo slot
// ==============================================================================

/// branding slot: plain text or an opaque caller-built view
#[derive(Clone)]
pub enum Logo {
    /// rendered as a wordmark span
    Text(String),
    /// rendered as-is; the caller owns the markup
    View(ViewFn),
}

impl Logo {
    /// wrap a view-producing closure
    pub fn view(f: impl Into<ViewFn>) -> Self {
        Logo::View(f.into())
    }
}

impl Default for Logo {
    fn default() -> Self {
        Logo::Text(String::new())
    }
}

impl From<String> for Logo {
    fn from(text: String) -> Self {
        Logo::Text(text)
    }
}

impl From<&str> for Logo {
    fn from(text: &str) -> Self {
        Logo::Text(text.to_string())
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================================================
    // HeaderVariant tests
    // ===========================================================================

    #[test]
    fn test_variant_default() {
        assert_eq!(HeaderVariant::default(), HeaderVariant::Default);
    }

    #[test]
    fn test_variant_class_mapping() {
        assert_eq!(HeaderVariant::Default.class(), "masthead--default");
        assert_eq!(HeaderVariant::Dark.class(), "masthead--dark");
        assert_eq!(HeaderVariant::Transparent.class(), "masthead--transparent");
        assert_eq!(HeaderVariant::Colored.class(), "masthead--colored");
    }

    #[test]
    fn test_variant_key_round_trip() {
        for variant in HeaderVariant::ALL {
            assert_eq!(HeaderVariant::from_key(variant.key()), Some(variant));
        }
    }

    #[test]
    fn test_variant_from_unknown_key() {
        assert_eq!(HeaderVariant::from_key("neon"), None);
        assert_eq!(HeaderVariant::from_key(""), None);
    }

    #[test]
    fn test_variant_serde_lowercase() {
        let json = serde_json::to_string(&HeaderVariant::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let parsed: HeaderVariant = serde_json::from_str("\"transparent\"").unwrap();
        assert_eq!(parsed, HeaderVariant::Transparent);
    }

    // ===========================================================================
    // NavLink tests
    // ===========================================================================

    #[test]
    fn test_nav_link_new_is_inactive() {
        let link = NavLink::new("About", "/about");
        assert_eq!(link.label, "About");
        assert_eq!(link.href, "/about");
        assert!(!link.active);
    }

    #[test]
    fn test_nav_link_active_builder() {
        let link = NavLink::new("Home", "#").active();
        assert!(link.active);
    }

    #[test]
    fn test_nav_link_serde_active_defaults_false() {
        let parsed: NavLink =
            serde_json::from_str(r##"{"label":"Home","href":"#"}"##).unwrap();
        assert!(!parsed.active);
    }

    #[test]
    fn test_nav_link_serde_round_trip() {
        let link = NavLink::new("Contact", "/contact").active();
        let json = serde_json::to_string(&link).unwrap();
        let parsed: NavLink = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, link);
    }

    // ===========================================================================
    // Logo tests
    // ===========================================================================

    #[test]
    fn test_logo_from_text() {
        let logo = Logo::from("Acme");
        assert!(matches!(logo, Logo::Text(t) if t == "Acme"));
    }

    #[test]
    fn test_logo_default_is_empty_text() {
        assert!(matches!(Logo::default(), Logo::Text(t) if t.is_empty()));
    }
}

//! ==============================================================================
//! lib.rs - story catalog for the masthead header
//! ==============================================================================
//!
//! purpose:
//!     named configuration presets ("stories") that exercise the header in
//!     its documented states. the showcase app renders this catalog; nothing
//!     here runs in an end-user application.
//!
//! relationships:
//!     - uses: masthead (HeaderVariant, NavLink)
//!     - used by: showcase (sidebar, canvas, docs panel)
//!
//! design rationale:
//!     story args are plain serde data, not views. the one story that needs
//!     custom logo markup carries a preset tag instead of markup, so the
//!     catalog stays declarative and the showcase decides how the badge is
//!     actually built.
//!
//! ==============================================================================

use masthead::{HeaderVariant, NavLink};
use serde::{Deserialize, Serialize};

// ==============================================================================
// story types
// ==============================================================================

/// how the showcase should build the logo from `StoryArgs::logo`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogoPreset {
    /// plain wordmark text
    #[default]
    Text,
    /// inline svg mark next to the wordmark
    Badge,
}

/// header configuration for one story
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryArgs {
    pub variant: HeaderVariant,
    /// wordmark text (or badge wordmark, per `logo_preset`)
    pub logo: String,
    #[serde(default)]
    pub logo_preset: LogoPreset,
    #[serde(default)]
    pub nav_links: Vec<NavLink>,
    #[serde(default)]
    pub is_logged_in: bool,
    #[serde(default)]
    pub sticky: bool,
}

/// canvas background override for one story
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Background {
    pub name: &'static str,
    /// value for the css `background` property
    pub css: &'static str,
}

/// one named preset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    /// stable identifier, unique within the catalog
    pub id: &'static str,
    pub name: &'static str,
    /// shown in the docs panel
    pub description: &'static str,
    pub args: StoryArgs,
    pub background: Option<Background>,
    /// render inside a long scroll page (used by the sticky story)
    pub tall_canvas: bool,
}

// ==============================================================================
// catalog
// ==============================================================================

const WORDMARK: &str = "✦ Masthead";

/// the navigation set shared by most stories
pub fn default_nav_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", "#").active(),
        NavLink::new("About", "#"),
        NavLink::new("Services", "#"),
        NavLink::new("Contact", "#"),
    ]
}

fn base_args() -> StoryArgs {
    StoryArgs {
        variant: HeaderVariant::Default,
        logo: WORDMARK.to_string(),
        logo_preset: LogoPreset::Text,
        nav_links: default_nav_links(),
        is_logged_in: false,
        sticky: false,
    }
}

/// every story, in sidebar order
pub fn catalog() -> Vec<Story> {
    vec![
        Story {
            id: "default",
            name: "Default",
            description: "The header on a white background, the state most \
                          light-themed pages use.",
            args: base_args(),
            background: None,
            tall_canvas: false,
        },
        Story {
            id: "dark",
            name: "Dark",
            description: "Dark surface variant for night-themed pages and \
                          dark-mode applications.",
            args: StoryArgs {
                variant: HeaderVariant::Dark,
                ..base_args()
            },
            background: Some(Background {
                name: "dark",
                css: "#030712",
            }),
            tall_canvas: false,
        },
        Story {
            id: "colored",
            name: "Colored",
            description: "Brand gradient variant, for landing pages that \
                          want the header to carry the identity.",
            args: StoryArgs {
                variant: HeaderVariant::Colored,
                ..base_args()
            },
            background: None,
            tall_canvas: false,
        },
        Story {
            id: "transparent",
            name: "Transparent",
            description: "Backgroundless variant meant to sit on top of a \
                          hero image or banner.",
            args: StoryArgs {
                variant: HeaderVariant::Transparent,
                ..base_args()
            },
            background: Some(Background {
                name: "gradient",
                css: "linear-gradient(135deg, #1e1b4b 0%, #4c1d95 100%)",
            }),
            tall_canvas: false,
        },
        Story {
            id: "logged-in",
            name: "Logged in",
            description: "Authenticated state: the login and signup buttons \
                          are replaced by a single logout button.",
            args: StoryArgs {
                is_logged_in: true,
                ..base_args()
            },
            background: None,
            tall_canvas: false,
        },
        Story {
            id: "no-navigation",
            name: "No navigation",
            description: "Minimal header with the nav region omitted, for \
                          auth and onboarding pages that should not distract.",
            args: StoryArgs {
                nav_links: Vec::new(),
                ..base_args()
            },
            background: None,
            tall_canvas: false,
        },
        Story {
            id: "sticky",
            name: "Sticky",
            description: "Pinned to the top of the viewport; scroll the tall \
                          canvas to see the header stay put.",
            args: StoryArgs {
                sticky: true,
                ..base_args()
            },
            background: None,
            tall_canvas: true,
        },
        Story {
            id: "custom-logo",
            name: "Custom logo",
            description: "The logo slot accepts arbitrary markup; this story \
                          renders an inline svg mark next to the wordmark.",
            args: StoryArgs {
                logo: "Acme Corp".to_string(),
                logo_preset: LogoPreset::Badge,
                ..base_args()
            },
            background: None,
            tall_canvas: false,
        },
    ]
}

/// look up a story by id
pub fn find(id: &str) -> Option<Story> {
    catalog().into_iter().find(|story| story.id == id)
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================================================
    // catalog shape tests
    // ===========================================================================

    #[test]
    fn test_catalog_has_eight_stories() {
        assert_eq!(catalog().len(), 8);
    }

    #[test]
    fn test_catalog_ids_unique() {
        let stories = catalog();
        for (i, a) in stories.iter().enumerate() {
            for b in &stories[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_catalog_starts_with_default() {
        assert_eq!(catalog()[0].id, "default");
    }

    #[test]
    fn test_catalog_descriptions_nonempty() {
        for story in catalog() {
            assert!(!story.description.is_empty(), "story {}", story.id);
        }
    }

    #[test]
    fn test_find_known_and_unknown() {
        assert!(find("dark").is_some());
        assert!(find("missing").is_none());
    }

    // ===========================================================================
    // per-story state tests
    // ===========================================================================

    #[test]
    fn test_logged_in_story_flips_only_auth_flag() {
        let story = find("logged-in").unwrap();
        assert!(story.args.is_logged_in);
        assert_eq!(story.args.variant, HeaderVariant::Default);
        assert!(!story.args.sticky);
    }

    #[test]
    fn test_no_navigation_story_has_empty_links() {
        let story = find("no-navigation").unwrap();
        assert!(story.args.nav_links.is_empty());
    }

    #[test]
    fn test_only_sticky_story_uses_tall_canvas() {
        for story in catalog() {
            assert_eq!(story.tall_canvas, story.id == "sticky");
            assert_eq!(story.args.sticky, story.id == "sticky");
        }
    }

    #[test]
    fn test_backgrounds_carry_css() {
        for story in catalog() {
            if let Some(bg) = story.background {
                assert!(!bg.css.is_empty(), "story {}", story.id);
            }
        }
    }

    #[test]
    fn test_custom_logo_story_uses_badge_preset() {
        let story = find("custom-logo").unwrap();
        assert_eq!(story.args.logo_preset, LogoPreset::Badge);
        assert_eq!(story.args.logo, "Acme Corp");
    }

    #[test]
    fn test_default_nav_links_order_and_active() {
        let links = default_nav_links();
        let labels: Vec<&str> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["Home", "About", "Services", "Contact"]);
        assert!(links[0].active);
        assert!(links[1..].iter().all(|l| !l.active));
    }

    // ===========================================================================
    // serde tests
    // ===========================================================================

    #[test]
    fn test_story_args_serde_round_trip() {
        let args = catalog()[1].args.clone();
        let json = serde_json::to_string(&args).unwrap();
        let parsed: StoryArgs = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, args);
    }

    #[test]
    fn test_story_args_serde_defaults() {
        // everything but variant and logo may be omitted
        let parsed: StoryArgs =
            serde_json::from_str(r#"{"variant":"dark","logo":"Acme"}"#).unwrap();
        assert_eq!(parsed.variant, HeaderVariant::Dark);
        assert_eq!(parsed.logo, "Acme");
        assert_eq!(parsed.logo_preset, LogoPreset::Text);
        assert!(parsed.nav_links.is_empty());
        assert!(!parsed.is_logged_in);
        assert!(!parsed.sticky);
    }

    #[test]
    fn test_dark_logged_out_scenario() {
        let json = r##"{
            "variant": "dark",
            "logo": "Acme",
            "nav_links": [{"label": "Home", "href": "#", "active": true}]
        }"##;
        let parsed: StoryArgs = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.variant, HeaderVariant::Dark);
        assert_eq!(parsed.nav_links.len(), 1);
        assert!(parsed.nav_links[0].active);
        assert!(!parsed.is_logged_in);
    }

    #[test]
    fn test_logo_preset_serde_snake_case() {
        let json = serde_json::to_string(&LogoPreset::Badge).unwrap();
        assert_eq!(json, "\"badge\"");
    }
}

//! ==============================================================================
//! header.rs - the Header component
//! ==============================================================================
//!
//! purpose:
//!     renders a page header from a plain configuration: logo region,
//!     optional navigation region, and an action region keyed by the
//!     caller's authentication flag.
//!
//! contract:
//!     - regions render in order: logo, nav, actions
//!     - the nav region is omitted entirely when there are no links
//!     - exactly one action layout is present at a time: a logout button
//!       when logged in, a login + signup pair otherwise
//!     - a click runs the matching callback if supplied; a missing
//!       callback makes the click a no-op
//!
//! ==============================================================================

use leptos::prelude::*;

use crate::config::{HeaderVariant, Logo, NavLink};

// ==============================================================================
// class composition
// ==============================================================================

/// root class for the header: base, variant, then the sticky modifier
pub fn header_class(variant: HeaderVariant, sticky: bool) -> String {
    let mut class = String::from("masthead");
    class.push(' ');
    class.push_str(variant.class());
    if sticky {
        class.push_str(" masthead--sticky");
    }
    class
}

/// class for one navigation link
pub fn link_class(active: bool) -> &'static str {
    if active {
        "masthead__link active"
    } else {
        "masthead__link"
    }
}

// ==============================================================================
// component
// ==============================================================================

#[component]
pub fn Header(
    /// visual theme
    #[prop(optional)]
    variant: HeaderVariant,
    /// branding slot, plain text or a caller-built view
    #[prop(optional, into)]
    logo: Logo,
    /// navigation entries, rendered in input order
    #[prop(optional)]
    nav_links: Vec<NavLink>,
    /// selects between the logout and login + signup layouts
    #[prop(optional)]
    is_logged_in: bool,
    /// pin the header to the top of the viewport
    #[prop(optional)]
    sticky: bool,
    /// run when the login button is clicked
    #[prop(optional, into)]
    on_login: Option<Callback<()>>,
    /// run when the logout button is clicked
    #[prop(optional, into)]
    on_logout: Option<Callback<()>>,
    /// run when the signup button is clicked
    #[prop(optional, into)]
    on_signup: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <header class=header_class(variant, sticky)>
            <div class="masthead__logo">
                {match logo {
                    Logo::Text(text) => view! {
                        <span class="masthead__wordmark">{text}</span>
                    }.into_any(),
                    Logo::View(custom) => custom.run(),
                }}
            </div>

            {if nav_links.is_empty() {
                None
            } else {
                Some(view! {
                    <nav class="masthead__nav">
                        {nav_links.into_iter().map(|link| view! {
                            <a class=link_class(link.active) href=link.href>
                                {link.label}
                            </a>
                        }).collect::<Vec<_>>()}
                    </nav>
                })
            }}

            <div class="masthead__actions">
                {if is_logged_in {
                    view! {
                        <button
                            class="masthead__btn masthead__btn--logout"
                            on:click=move |_| {
                                if let Some(cb) = on_logout {
                                    cb.run(());
                                }
                            }
                        >
                            "Log out"
                        </button>
                    }.into_any()
                } else {
                    view! {
                        <button
                            class="masthead__btn masthead__btn--login"
                            on:click=move |_| {
                                if let Some(cb) = on_login {
                                    cb.run(());
                                }
                            }
                        >
                            "Log in"
                        </button>
                        <button
                            class="masthead__btn masthead__btn--signup"
                            on:click=move |_| {
                                if let Some(cb) = on_signup {
                                    cb.run(());
                                }
                            }
                        >
                            "Sign up"
                        </button>
                    }.into_any()
                }}
            </div>
        </header>
    }
}

// ==============================================================================
// tests
// ==============================================================================

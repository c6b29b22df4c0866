//! Story canvas component

use leptos::prelude::*;
use masthead::{Header, Logo};
use stories::{LogoPreset, Story, StoryArgs};

use super::ActionEntry;

#[component]
pub fn StoryCanvas(
    story: Memo<Story>,
    args: ReadSignal<StoryArgs>,
    set_actions: WriteSignal<Vec<ActionEntry>>,
) -> impl IntoView {
    // record a callback activation in the log panel
    let record = move |name: &'static str| {
        log::info!("action: {}", name);
        set_actions.update(|entries| entries.push(ActionEntry::now(name)));
    };

    let on_login = Callback::new(move |_| record("login"));
    let on_logout = Callback::new(move |_| record("logout"));
    let on_signup = Callback::new(move |_| record("signup"));

    view! {
        <section class="canvas-wrap">
            {move || {
                let current = story.get();
                let a = args.get();
                let background = current
                    .background
                    .as_ref()
                    .map(|bg| format!("background: {};", bg.css));
                let logo = match a.logo_preset {
                    LogoPreset::Text => Logo::from(a.logo.clone()),
                    LogoPreset::Badge => badge_logo(a.logo.clone()),
                };

                let header = view! {
                    <Header
                        variant=a.variant
                        logo=logo
                        nav_links=a.nav_links.clone()
                        is_logged_in=a.is_logged_in
                        sticky=a.sticky
                        on_login=on_login
                        on_logout=on_logout
                        on_signup=on_signup
                    />
                };

                if current.tall_canvas {
                    view! {
                        <div class="canvas canvas--tall" style=background>
                            {header}
                            <div class="canvas__filler">
                                <p>"Scroll down to see the header stay pinned to the top."</p>
                                <p class="canvas__filler-end">"Almost at the end of the page."</p>
                            </div>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="canvas" style=background>{header}</div>
                    }.into_any()
                }
            }}
        </section>
    }
}

/// inline svg mark next to the wordmark, for the badge logo preset
fn badge_logo(wordmark: String) -> Logo {
    Logo::view(move || view! {
        <span class="logo-badge">
            <svg width="28" height="28" viewBox="0 0 28 28" fill="none">
                <rect width="28" height="28" rx="8" fill="#6366f1"></rect>
                <path
                    d="M8 20 L14 8 L20 20"
                    stroke="white"
                    stroke-width="2.5"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                ></path>
                <path
                    d="M10 16 H18"
                    stroke="white"
                    stroke-width="2.5"
                    stroke-linecap="round"
                ></path>
            </svg>
            <span class="logo-badge__name">{wordmark.clone()}</span>
        </span>
    })
}

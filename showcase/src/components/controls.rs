//! Controls panel component

use leptos::prelude::*;
use masthead::HeaderVariant;
use stories::StoryArgs;

#[component]
pub fn ControlsPanel(
    args: ReadSignal<StoryArgs>,
    set_args: WriteSignal<StoryArgs>,
) -> impl IntoView {
    view! {
        <div class="card panel">
            <h2>"Controls"</h2>

            <label class="control">
                <span class="control__name">"Variant"</span>
                <select
                    prop:value=move || args.get().variant.key().to_string()
                    on:change=move |ev| {
                        if let Some(variant) = HeaderVariant::from_key(&event_target_value(&ev)) {
                            set_args.update(|a| a.variant = variant);
                        }
                    }
                >
                    {HeaderVariant::ALL.iter().map(|variant| view! {
                        <option value=variant.key()>{variant.label()}</option>
                    }).collect::<Vec<_>>()}
                </select>
            </label>

            <label class="control">
                <span class="control__name">"Logo"</span>
                <input
                    type="text"
                    prop:value=move || args.get().logo
                    on:input=move |ev| set_args.update(|a| a.logo = event_target_value(&ev))
                />
            </label>

            <label class="control control--inline">
                <input
                    type="checkbox"
                    prop:checked=move || args.get().is_logged_in
                    on:change=move |ev| {
                        set_args.update(|a| a.is_logged_in = event_target_checked(&ev))
                    }
                />
                <span class="control__name">"Logged in"</span>
            </label>

            <label class="control control--inline">
                <input
                    type="checkbox"
                    prop:checked=move || args.get().sticky
                    on:change=move |ev| set_args.update(|a| a.sticky = event_target_checked(&ev))
                />
                <span class="control__name">"Sticky"</span>
            </label>

            // nav links are structured data, edited in the catalog source
            <div class="control">
                <span class="control__name">"Nav links"</span>
                <span class="control__note">
                    {move || format!("{} entries", args.get().nav_links.len())}
                    " (edit in the catalog source)"
                </span>
            </div>
        </div>
    }
}

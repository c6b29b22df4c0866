//! Actions log component

use leptos::prelude::*;

/// one recorded callback activation
#[derive(Debug, Clone, PartialEq)]
pub struct ActionEntry {
    pub name: &'static str,
    /// wall-clock time the click happened
    pub at: String,
}

impl ActionEntry {
    pub fn now(name: &'static str) -> Self {
        let at = String::from(js_sys::Date::new_0().to_locale_time_string("en-US"));
        ActionEntry { name, at }
    }
}

#[component]
pub fn ActionsLog(
    actions: ReadSignal<Vec<ActionEntry>>,
    set_actions: WriteSignal<Vec<ActionEntry>>,
) -> impl IntoView {
    view! {
        <div class="card panel">
            <div class="panel__bar">
                <h2>"Actions"</h2>
                <button
                    class="panel__clear"
                    on:click=move |_| set_actions.set(Vec::new())
                    disabled=move || actions.get().is_empty()
                >
                    "Clear"
                </button>
            </div>

            {move || {
                let entries = actions.get();
                if entries.is_empty() {
                    view! {
                        <p class="panel__empty">
                            "Click a header button to record its callback here."
                        </p>
                    }.into_any()
                } else {
                    // newest first
                    view! {
                        <ul class="actions">
                            {entries.iter().rev().map(|entry| view! {
                                <li class="actions__entry">
                                    <span class="actions__name">{entry.name}</span>
                                    <span class="actions__time">{entry.at.clone()}</span>
                                </li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    }.into_any()
                }
            }}
        </div>
    }
}

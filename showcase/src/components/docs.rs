//! Docs panel component

use leptos::prelude::*;
use stories::{Story, StoryArgs};

#[component]
pub fn DocsPanel(story: Memo<Story>, args: ReadSignal<StoryArgs>) -> impl IntoView {
    view! {
        <div class="card panel">
            <h2>{move || story.get().name}</h2>
            <p class="panel__description">{move || story.get().description}</p>
            <h3>"Args"</h3>
            <pre class="panel__args">
                {move || serde_json::to_string_pretty(&args.get()).unwrap()}
            </pre>
        </div>
    }
}

//! ==============================================================================
//! lib.rs - masthead showcase
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm app that renders the story catalog: pick a story in the
//!     sidebar, see the header live on the canvas, tweak its args in the
//!     controls panel, and watch callback activations in the actions log.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - story presets come from the stories crate, the component from
//!       masthead; no network involved
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use wasm_bindgen::prelude::*;

mod components;

use components::{ActionEntry, ActionsLog, ControlsPanel, DocsPanel, StoryCanvas, StorySidebar};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    // selected story, live args (reset on selection), recorded actions
    let (selected, set_selected) = signal(0usize);
    let (args, set_args) = signal(stories::catalog()[0].args.clone());
    let (actions, set_actions) = signal(Vec::<ActionEntry>::new());

    let story = Memo::new(move |_| {
        let list = stories::catalog();
        let index = selected.get().min(list.len() - 1);
        list[index].clone()
    });

    view! {
        <Title text=move || format!("{} · Masthead", story.get().name) />
        <div class="app">
            <StorySidebar selected=selected set_selected=set_selected set_args=set_args />
            <main class="stage">
                <StoryCanvas story=story args=args set_actions=set_actions />
                <div class="panels">
                    <DocsPanel story=story args=args />
                    <ControlsPanel args=args set_args=set_args />
                    <ActionsLog actions=actions set_actions=set_actions />
                </div>
            </main>
        </div>
    }
}

//! Story sidebar component

use leptos::prelude::*;
use stories::StoryArgs;

#[component]
pub fn StorySidebar(
    selected: ReadSignal<usize>,
    set_selected: WriteSignal<usize>,
    set_args: WriteSignal<StoryArgs>,
) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                "Masthead"
                <span class="sidebar__tag">"stories"</span>
            </div>
            <nav class="sidebar__list">
                {stories::catalog().into_iter().enumerate().map(|(index, story)| {
                    let name = story.name;
                    let args = story.args;
                    view! {
                        <button
                            class=move || if selected.get() == index {
                                "sidebar__story active"
                            } else {
                                "sidebar__story"
                            }
                            on:click=move |_| {
                                log::info!("story selected: {}", name);
                                set_selected.set(index);
                                // selecting a story resets any control edits
                                set_args.set(args.clone());
                            }
                        >
                            {name}
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </nav>
        </aside>
    }
}

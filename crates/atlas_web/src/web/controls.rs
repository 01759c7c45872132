use atlas::filter::Region;
use leptos::prelude::*;

use crate::ui_model::{parse_region_value, region_options, region_value, SEARCH_PLACEHOLDER};

#[component]
pub(super) fn SearchBar(value: Memo<String>, on_change: Callback<String>) -> impl IntoView {
    view! {
        <div class="search-container">
            <span class="search-icon" aria-hidden="true">"⌕"</span>
            <input
                type="text"
                placeholder=SEARCH_PLACEHOLDER
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub(super) fn SelectMenu(
    value: Memo<Option<Region>>,
    on_change: Callback<Option<Region>>,
) -> impl IntoView {
    view! {
        <select
            class="filter-by-region"
            prop:value=move || region_value(value.get())
            on:change=move |ev| {
                let raw = event_target_value(&ev);
                match parse_region_value(&raw) {
                    Some(choice) => on_change.run(choice),
                    None => super::document::log_warn(&format!("ignoring region {raw:?}")),
                }
            }
        >
            {region_options()
                .into_iter()
                .map(|opt| view! { <option value=opt.value>{opt.label}</option> })
                .collect_view()}
        </select>
    }
}

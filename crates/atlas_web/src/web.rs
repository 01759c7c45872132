use std::sync::Arc;

use atlas::app::{AppEvent, AppState};
use atlas::config::AppConfig;
use atlas::dataset::Dataset;
use atlas::detail::resolve_detail;
use atlas::filter::Region;
use atlas::route::Route;
use leptos::prelude::*;

mod controls;
mod countries;
mod detail;
mod document;
mod router;
mod shell;

use controls::{SearchBar, SelectMenu};
use countries::CountriesList;
use detail::CountryDetail;
use shell::{Header, LoadError};

pub fn start() {
    mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    let config = AppConfig::default();
    let dataset = match Dataset::embedded() {
        Ok(ds) => Arc::new(ds),
        Err(e) => {
            document::log_error(&format!("failed to load countries: {e}"));
            return view! { <LoadError message=e.to_string() /> }.into_any();
        }
    };
    document::log_info(&format!("atlas_web: {} countries loaded", dataset.len()));

    let state = RwSignal::new(AppState::new(dataset, config.grouping));
    state.update(|s| {
        s.apply(AppEvent::Navigate(Route::parse(&router::current_path())));
    });

    // Browser back/forward.
    router::on_popstate(move |path| {
        state.update(|s| {
            s.apply(AppEvent::Navigate(Route::parse(&path)));
        });
    });

    let theme = Memo::new(move |_| state.with(|s| s.theme()));
    let route = Memo::new(move |_| state.with(|s| s.route().clone()));
    let search = Memo::new(move |_| state.with(|s| s.search_term().to_string()));
    let region = Memo::new(move |_| state.with(|s| s.region()));
    let cards = Memo::new(move |_| state.with(|s| s.visible_cards()));

    Effect::new(move |_| document::apply_theme_to_document(theme.get()));

    let navigate = Callback::new(move |to: Route| {
        if state.with_untracked(|s| *s.route() == to) {
            return;
        }
        router::push_path(&to.path());
        state.update(|s| {
            s.apply(AppEvent::Navigate(to));
        });
    });
    let on_search = Callback::new(move |term: String| {
        state.update(|s| {
            s.apply(AppEvent::SearchChanged(term));
        });
    });
    let on_region = Callback::new(move |choice: Option<Region>| {
        state.update(|s| {
            s.apply(AppEvent::RegionChanged(choice));
        });
    });
    let on_toggle = Callback::new(move |_: ()| {
        state.update(|s| {
            s.apply(AppEvent::ToggleTheme);
        });
    });

    let body = move || match route.get() {
        Route::List => view! {
            <div class="search-filter-container">
                <SearchBar value=search on_change=on_search />
                <SelectMenu value=region on_change=on_region />
            </div>
            <CountriesList cards=cards navigate=navigate />
        }
        .into_any(),
        Route::Detail { segment } => {
            let detail =
                state.with_untracked(|s| resolve_detail(s.dataset(), &segment, s.grouping()));
            view! { <CountryDetail detail=detail navigate=navigate /> }.into_any()
        }
    };

    view! {
        <div class="app">
            <Header theme=theme on_toggle=on_toggle navigate=navigate />
            <main>{body}</main>
        </div>
    }
    .into_any()
}

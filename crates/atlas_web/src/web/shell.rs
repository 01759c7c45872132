use atlas::route::Route;
use atlas::theme::Theme;
use leptos::prelude::*;

use crate::ui_model::TITLE;

#[component]
pub(super) fn Header(
    theme: Memo<Theme>,
    on_toggle: Callback<()>,
    navigate: Callback<Route>,
) -> impl IntoView {
    view! {
        <header class="header-container">
            <div class="header-content">
                <h2 class="title">
                    <a
                        href="/"
                        on:click=move |ev| {
                            ev.prevent_default();
                            navigate.run(Route::List);
                        }
                    >
                        {TITLE}
                    </a>
                </h2>
                <p
                    class="theme-changer"
                    title=move || format!("Theme: {}", theme.get().name())
                    on:click=move |_| on_toggle.run(())
                >
                    <span class="theme-icon" aria-hidden="true">
                        {move || theme.get().toggle_icon()}
                    </span>
                    " "
                    {move || theme.get().toggle_label()}
                </p>
            </div>
        </header>
    }
}

#[component]
pub(super) fn LoadError(message: String) -> impl IntoView {
    view! {
        <div class="app">
            <header class="header-container">
                <div class="header-content">
                    <h2 class="title">{TITLE}</h2>
                </div>
            </header>
            <main>
                <div class="error-message">
                    <h2>"Country data unavailable"</h2>
                    <p>{message}</p>
                </div>
            </main>
        </div>
    }
}

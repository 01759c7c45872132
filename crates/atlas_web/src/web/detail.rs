use atlas::detail::{BorderLink, DetailView};
use atlas::route::Route;
use leptos::prelude::*;

use crate::ui_model::{BACK_LABEL, BORDER_HEADING};

#[component]
pub(super) fn CountryDetail(detail: DetailView, navigate: Callback<Route>) -> impl IntoView {
    let d = match detail {
        DetailView::Found(d) => d,
        DetailView::NotFound { query } => {
            return view! {
                <div class="country-detail">
                    <BackButton navigate=navigate />
                    <div class="error-message">
                        <h2>{DetailView::NOT_FOUND_TITLE}</h2>
                        <p>{DetailView::not_found_message(&query)}</p>
                    </div>
                </div>
            }
            .into_any();
        }
    };

    let borders = (!d.borders.is_empty())
        .then(|| view! { <BorderCountries borders=d.borders navigate=navigate /> });

    view! {
        <div class="country-detail">
            <BackButton navigate=navigate />
            <div class="country-detail-content">
                <div class="country-flag">
                    <img src=d.flag alt=d.flag_alt />
                </div>
                <div class="country-info">
                    <h1>{d.name}</h1>
                    <div class="country-details-grid">
                        <div class="details-left">
                            <Field label="Native Name" value=d.native_name />
                            <Field label="Population" value=d.population />
                            <Field label="Region" value=d.region />
                            <Field label="Sub Region" value=d.subregion />
                            <Field label="Capital" value=d.capital />
                        </div>
                        <div class="details-right">
                            <Field label="Top Level Domain" value=d.top_level_domain />
                            <Field label="Currencies" value=d.currencies />
                            <Field label="Languages" value=d.languages />
                        </div>
                    </div>
                    {borders}
                </div>
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn BackButton(navigate: Callback<Route>) -> impl IntoView {
    view! {
        <button class="back-button" on:click=move |_| navigate.run(Route::List)>
            <span aria-hidden="true">"←"</span>
            "  "
            {BACK_LABEL}
        </button>
    }
}

#[component]
fn Field(label: &'static str, value: String) -> impl IntoView {
    view! {
        <p>
            <strong>{label}":"</strong>
            " "
            {value}
        </p>
    }
}

/// Resolved neighbours are buttons; codes with no record are plain text.
#[component]
fn BorderCountries(borders: Vec<BorderLink>, navigate: Callback<Route>) -> impl IntoView {
    let items = borders
        .into_iter()
        .map(move |b| match b {
            BorderLink::Country { name, href, .. } => {
                let route = Route::parse(&href);
                view! {
                    <button class="border-button" on:click=move |_| navigate.run(route.clone())>
                        {name}
                    </button>
                }
                .into_any()
            }
            BorderLink::Unresolved { code } => view! {
                <span class="border-button inert" title="No record for this code">
                    {code}
                </span>
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <div class="border-countries">
            <h3>{BORDER_HEADING}</h3>
            <div class="border-buttons">{items}</div>
        </div>
    }
}

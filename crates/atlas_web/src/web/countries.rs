use atlas::card::CountryCard as CardModel;
use atlas::route::Route;
use leptos::prelude::*;

#[component]
pub(super) fn CountriesList(cards: Memo<Vec<CardModel>>, navigate: Callback<Route>) -> impl IntoView {
    view! {
        <div class="countries-container">
            <For
                each=move || cards.get()
                key=|card: &CardModel| card.name.clone()
                children=move |card| view! { <CountryCard card=card navigate=navigate /> }
            />
        </div>
    }
}

#[component]
fn CountryCard(card: CardModel, navigate: Callback<Route>) -> impl IntoView {
    let route = Route::parse(&card.href);
    let alt = format!("{} flag", card.name);
    let CardModel {
        name,
        flag,
        population,
        region,
        capital,
        href,
    } = card;

    view! {
        <a
            class="country-card"
            href=href
            on:click=move |ev| {
                ev.prevent_default();
                navigate.run(route.clone());
            }
        >
            <img src=flag alt=alt loading="lazy" />
            <div class="card-text">
                <h3 class="card-title">{name}</h3>
                <p><b>"Population: "</b>{population}</p>
                <p><b>"Region: "</b>{region}</p>
                <p><b>"Capital: "</b>{capital}</p>
            </div>
        </a>
    }
}

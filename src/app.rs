//! The orchestrator: sole owner of mutable UI state.
//!
//! Inputs arrive as [`AppEvent`]s, one at a time. The visible list is derived
//! from the full dataset after every search or region change and is never
//! narrowed in place.

use std::sync::Arc;

use serde::Serialize;

use crate::card::{cards, CountryCard};
use crate::dataset::{CountryRecord, Dataset};
use crate::detail::{resolve_detail, DetailView};
use crate::filter::{filter_indices, FilterQuery, Region};
use crate::format::Grouping;
use crate::route::Route;
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    SearchChanged(String),
    RegionChanged(Option<Region>),
    ToggleTheme,
    Navigate(Route),
}

/// What the current route renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    List { cards: Vec<CountryCard> },
    Detail { detail: DetailView },
}

#[derive(Debug, Clone)]
pub struct AppState {
    dataset: Arc<Dataset>,
    grouping: Grouping,
    query: FilterQuery,
    theme: Theme,
    route: Route,
    visible: Vec<usize>,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, grouping: Grouping) -> Self {
        let visible = (0..dataset.len()).collect();
        Self {
            dataset,
            grouping,
            query: FilterQuery::default(),
            theme: Theme::default(),
            route: Route::List,
            visible,
        }
    }

    /// Applies one event. Returns `false` when it left the state unchanged.
    pub fn apply(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::SearchChanged(term) => {
                if term == self.query.search {
                    return false;
                }
                self.query.search = term;
                self.recompute();
            }
            AppEvent::RegionChanged(region) => {
                if region == self.query.region {
                    return false;
                }
                self.query.region = region;
                self.recompute();
            }
            AppEvent::ToggleTheme => {
                self.theme = self.theme.toggle();
                tracing::debug!(theme = self.theme.name(), "theme toggled");
            }
            AppEvent::Navigate(route) => {
                if route == self.route {
                    return false;
                }
                tracing::debug!(path = %route.path(), "navigate");
                self.route = route;
            }
        }
        true
    }

    fn recompute(&mut self) {
        self.visible = filter_indices(&self.dataset, &self.query);
        tracing::debug!(
            search = %self.query.search,
            region = ?self.query.region,
            visible = self.visible.len(),
            "filter recomputed"
        );
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn grouping(&self) -> Grouping {
        self.grouping
    }

    pub fn query(&self) -> &FilterQuery {
        &self.query
    }

    pub fn search_term(&self) -> &str {
        &self.query.search
    }

    pub fn region(&self) -> Option<Region> {
        self.query.region
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark_mode(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn visible_countries(&self) -> impl Iterator<Item = &CountryRecord> {
        self.visible.iter().filter_map(|&idx| self.dataset.get(idx))
    }

    pub fn visible_cards(&self) -> Vec<CountryCard> {
        cards(self.visible_countries(), self.grouping)
    }

    pub fn view(&self) -> View {
        match &self.route {
            Route::List => View::List {
                cards: self.visible_cards(),
            },
            Route::Detail { segment } => View::Detail {
                detail: resolve_detail(&self.dataset, segment, self.grouping),
            },
        }
    }
}

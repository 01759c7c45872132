//! # atlas
//!
//! "Where in the world?": a country browser over a static, in-memory dataset.
//!
//! The crate holds everything that is not presentation: the dataset and its
//! indexes, search/region filtering, detail resolution with border
//! cross-links, routing, number formatting, and the orchestrator that owns UI
//! state. The browser front end lives in `crates/atlas_web`; a terminal front
//! end ships as the `atlas-cli` binary.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use atlas::prelude::*;
//!
//! let dataset = Arc::new(Dataset::embedded().unwrap());
//! let mut app = AppState::new(dataset, Grouping::Indian);
//!
//! app.apply(AppEvent::SearchChanged("fra".into()));
//! app.apply(AppEvent::RegionChanged(Some(Region::Europe)));
//! assert!(app.visible_countries().any(|c| c.common_name() == "France"));
//!
//! app.apply(AppEvent::Navigate(Route::detail("France")));
//! if let View::Detail { detail } = app.view() {
//!     assert_eq!(detail.country().unwrap().capital, "Paris");
//! }
//! ```

pub mod app;
pub mod card;
pub mod config;
pub mod dataset;
pub mod detail;
pub mod error;
pub mod filter;
pub mod format;
pub mod route;
pub mod theme;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::app::{AppEvent, AppState, View};
    pub use crate::card::CountryCard;
    pub use crate::config::AppConfig;
    pub use crate::dataset::{CountryRecord, Dataset};
    pub use crate::detail::{BorderLink, CountryDetail, DetailView};
    pub use crate::filter::{filter_countries, FilterQuery, Region};
    pub use crate::format::Grouping;
    pub use crate::route::Route;
    pub use crate::theme::Theme;
}

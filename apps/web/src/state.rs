//! Global application state using Dioxus signals.

use dioxus::prelude::*;
use muso_core::{CategoryFilter, SearchState};

/// Text in the search box
pub static QUERY: GlobalSignal<String> = Signal::global(String::new);

/// Selected category toggle
pub static FILTER: GlobalSignal<CategoryFilter> = Signal::global(CategoryFilter::default);

/// Results, loading flag, error, and whether a search has been attempted
pub static SEARCH: GlobalSignal<SearchState> = Signal::global(SearchState::new);

/// Backend health — `None` until the startup check settles
pub static API_STATUS: GlobalSignal<Option<bool>> = Signal::global(|| None);

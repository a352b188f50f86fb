//! Muso core — the music-ontology search client without any transport or UI.
//!
//! # Modules
//!
//! - [`types`] — Ontology entities, the tagged [`SearchResult`] union, and the response envelope
//! - [`filter`] — Client-side category filter
//! - [`controller`] — Search state machine and the [`SearchBackend`] seam
//! - [`present`] — Per-kind card templates and result-area view selection
//! - [`config`] — Client configuration (base URL, timeout)
//! - [`messages`] — User-facing strings

pub mod config;
pub mod controller;
pub mod filter;
pub mod messages;
pub mod present;
pub mod types;

pub use config::{ClientConfig, ConfigError};
pub use controller::{SearchBackend, SearchController, SearchState, Ticket};
pub use filter::CategoryFilter;
pub use present::{dispatch, Card, Field, Icon, Tag, TagStyle, View};
pub use types::{
    Album, Artist, EntityKind, Envelope, Genre, Instrument, OntologyStats, SearchResult, Song,
    UnknownKind,
};

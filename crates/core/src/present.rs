//! Result presentation: per-kind card templates and the placeholder view chain.
//!
//! [`dispatch`] turns one [`SearchResult`] into a renderer-neutral [`Card`];
//! [`View::select`] decides which of the five result-area views is shown for
//! a given [`SearchState`]. The web app and the CLI both render from these.

use crate::controller::SearchState;
use crate::filter::CategoryFilter;
use crate::messages;
use crate::types::{Album, Artist, EntityKind, Instrument, SearchResult, Song};

// ---------------------------------------------------------------------------
// Card model
// ---------------------------------------------------------------------------

/// Icon slot of a card or category toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Search,
    Users,
    Disc,
    Music,
    Zap,
    Tag,
}

impl Icon {
    pub fn for_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Artist => Icon::Users,
            EntityKind::Album => Icon::Disc,
            EntityKind::Song => Icon::Music,
            EntityKind::Instrument => Icon::Zap,
            EntityKind::Genre => Icon::Tag,
        }
    }

    /// Icon of a category toggle; "all" gets the search glass.
    pub fn for_filter(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => Icon::Search,
            CategoryFilter::Only(kind) => Icon::for_kind(kind),
        }
    }

    /// Single-character stand-in for terminals.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Search => "\u{1F50D}",
            Icon::Users => "\u{1F464}",
            Icon::Disc => "\u{1F4BF}",
            Icon::Music => "\u{266B}",
            Icon::Zap => "\u{26A1}",
            Icon::Tag => "\u{1F3F7}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStyle {
    Genre,
    Instrument,
    Song,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Unique within its list; the entity URI where one exists.
    pub key: String,
    pub label: String,
}

/// One rendered section of a card body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Short label/value row.
    Detail { label: &'static str, value: String },
    /// Titled paragraph.
    Text { title: &'static str, body: String },
    /// Song lyrics; line breaks are significant.
    Lyrics { body: String },
    /// Titled badge list.
    Tags { title: &'static str, style: TagStyle, items: Vec<Tag> },
}

/// Everything needed to draw one result, with absent fields already dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub key: String,
    pub kind: EntityKind,
    pub icon: Icon,
    pub type_label: &'static str,
    pub title: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Format seconds as `m:ss`.
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

fn text(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

/// Zero is how the ontology spells "unknown" for years and durations.
fn number<N: Copy + PartialEq + Default>(value: Option<N>) -> Option<N> {
    value.filter(|n| *n != N::default())
}

struct FieldsBuilder(Vec<Field>);

impl FieldsBuilder {
    fn detail(&mut self, label: &'static str, value: Option<String>) -> &mut Self {
        if let Some(value) = value {
            self.0.push(Field::Detail { label, value });
        }
        self
    }

    fn text(&mut self, title: &'static str, body: Option<String>) -> &mut Self {
        if let Some(body) = body {
            self.0.push(Field::Text { title, body });
        }
        self
    }

    fn tags(&mut self, title: &'static str, style: TagStyle, items: Vec<Tag>) -> &mut Self {
        if !items.is_empty() {
            self.0.push(Field::Tags { title, style, items });
        }
        self
    }
}

fn artist_fields(artist: &Artist) -> Vec<Field> {
    let mut b = FieldsBuilder(Vec::new());
    b.detail("Nacionalidad", text(&artist.nationality))
        .detail("Nacimiento", number(artist.birth_year).map(|y| y.to_string()))
        .detail("Años activo", text(&artist.active_years))
        .text("Trayectoria", text(&artist.trajectory))
        .text("Discografía", text(&artist.discography))
        .text("Premios", text(&artist.awards));
    let genre = text(&artist.genre)
        .map(|g| vec![Tag { key: g.clone(), label: g }])
        .unwrap_or_default();
    b.tags("Género", TagStyle::Genre, genre);
    b.0
}

fn album_fields(album: &Album) -> Vec<Field> {
    let mut b = FieldsBuilder(Vec::new());
    b.detail("Año de lanzamiento", number(album.release_year).map(|y| y.to_string()))
        .detail("Género", text(&album.genre));
    let songs = album
        .songs
        .iter()
        .map(|s| Tag { key: s.uri.clone(), label: s.name.clone() })
        .collect();
    b.tags("Canciones", TagStyle::Song, songs);
    b.0
}

fn song_fields(song: &Song) -> Vec<Field> {
    let mut b = FieldsBuilder(Vec::new());
    b.detail("Duración", number(song.duration).map(format_duration))
        .detail("Año", number(song.release_year).map(|y| y.to_string()))
        .detail("Idioma", text(&song.language))
        .detail("Artista", text(&song.artist))
        .text("Compositores", text(&song.composers))
        .text("Letrista", text(&song.lyricist));
    if let Some(lyrics) = text(&song.lyrics) {
        b.0.push(Field::Lyrics { body: lyrics });
    }
    let instruments = song
        .instruments
        .iter()
        .map(|i| Tag { key: i.uri.clone(), label: i.name.clone() })
        .collect();
    b.tags("Instrumentos", TagStyle::Instrument, instruments);
    b.0
}

fn instrument_fields(instrument: &Instrument) -> Vec<Field> {
    let mut b = FieldsBuilder(Vec::new());
    b.detail("Tipo", text(&instrument.category));
    b.0
}

/// Map a result to its icon, localized label, and field template.
pub fn dispatch(result: &SearchResult) -> Card {
    let kind = result.kind();
    let fields = match result {
        SearchResult::Artist(a) => artist_fields(a),
        SearchResult::Album(a) => album_fields(a),
        SearchResult::Song(s) => song_fields(s),
        SearchResult::Instrument(i) => instrument_fields(i),
        SearchResult::Genre(_) => Vec::new(),
    };
    Card {
        key: result.uri().to_string(),
        kind,
        icon: Icon::for_kind(kind),
        type_label: messages::kind_label(kind),
        title: result.name().to_string(),
        description: result.description().map(str::trim).filter(|d| !d.is_empty()).map(str::to_string),
        fields,
    }
}

// ---------------------------------------------------------------------------
// View selection
// ---------------------------------------------------------------------------

/// What the result area shows. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    Loading,
    Error(&'a str),
    /// No search attempted yet.
    Initial,
    /// A search ran and returned nothing, without an error message.
    Empty,
    Results(&'a [SearchResult]),
}

impl<'a> View<'a> {
    /// First match wins: loading, error, initial, empty, results.
    pub fn select(state: &'a SearchState) -> Self {
        if state.is_loading {
            View::Loading
        } else if let Some(error) = state.error.as_deref() {
            View::Error(error)
        } else if !state.has_searched {
            View::Initial
        } else if state.results.is_empty() {
            View::Empty
        } else {
            View::Results(&state.results)
        }
    }

    /// Placeholder text for the non-result views.
    pub fn placeholder(&self) -> Option<String> {
        match self {
            View::Loading => Some(messages::LOADING.to_string()),
            View::Error(msg) => Some(messages::error_banner(msg)),
            View::Initial => Some(messages::INITIAL.to_string()),
            View::Empty => Some(messages::NO_RESULTS.to_string()),
            View::Results(_) => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, View::Error(_) | View::Empty)
    }

    /// Cards for the results view; empty for every other view.
    pub fn cards(&self) -> Vec<Card> {
        match self {
            View::Results(results) => results.iter().map(dispatch).collect(),
            _ => Vec::new(),
        }
    }
}

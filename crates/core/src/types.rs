//! Ontology entities as served by the search backend: artists, albums, songs,
//! instruments, genres, the tagged [`SearchResult`] union, and the
//! `{success, data, error?}` response envelope.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

// ---------------------------------------------------------------------------
// Entity kind (the discriminant)
// ---------------------------------------------------------------------------

/// Which variant a [`SearchResult`] carries. Serialized as its lowercase wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Artist,
    Album,
    Song,
    Instrument,
    Genre,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Artist,
        EntityKind::Album,
        EntityKind::Song,
        EntityKind::Instrument,
        EntityKind::Genre,
    ];

    /// Wire name, as used in the `type` discriminant.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Artist => "artist",
            EntityKind::Album => "album",
            EntityKind::Song => "song",
            EntityKind::Instrument => "instrument",
            EntityKind::Genre => "genre",
        }
    }

    /// Collection segment under `/api/`.
    pub fn plural(self) -> &'static str {
        match self {
            EntityKind::Artist => "artists",
            EntityKind::Album => "albums",
            EntityKind::Song => "songs",
            EntityKind::Instrument => "instruments",
            EntityKind::Genre => "genres",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no entity kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown entity kind '{0}' (expected one of: artist, album, song, instrument, genre)")]
pub struct UnknownKind(pub String);

impl FromStr for EntityKind {
    type Err = UnknownKind;

    /// Accepts the singular wire name or the plural collection name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        EntityKind::ALL
            .into_iter()
            .find(|k| k.as_str() == lower || k.plural() == lower)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// Treat an explicit `null` the same as a missing list.
fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Instrument payloads reuse `type` for their category; the bare kind name is not a category.
fn instrument_category<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|t| !t.is_empty() && t != EntityKind::Instrument.as_str()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub uri: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_years: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trajectory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discography: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awards: Option<String>,
    /// Genre label, not a URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub uri: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec", skip_serializing_if = "Vec::is_empty")]
    pub songs: Vec<Song>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub uri: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Length in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composers: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyricist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<String>,
    /// Performing artist (the backend sends its display name).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec", skip_serializing_if = "Vec::is_empty")]
    pub instruments: Vec<Instrument>,
}

/// Nested instruments inside a [`Song`] usually carry only `uri` and `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub uri: String,
    pub name: String,
    /// Category label such as "Cuerda" or "Percusión".
    #[serde(
        rename = "type",
        default,
        deserialize_with = "instrument_category",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub uri: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// SearchResult — the tagged union
// ---------------------------------------------------------------------------

/// One hit from the backend: `{"type": "<kind>", "data": {...}}`.
///
/// Unknown discriminants fail to deserialize instead of falling back to a
/// generic rendering; [`SearchResult::decode_list`] drops them from lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum SearchResult {
    Artist(Artist),
    Album(Album),
    Song(Song),
    Instrument(Instrument),
    Genre(Genre),
}

impl SearchResult {
    pub fn kind(&self) -> EntityKind {
        match self {
            SearchResult::Artist(_) => EntityKind::Artist,
            SearchResult::Album(_) => EntityKind::Album,
            SearchResult::Song(_) => EntityKind::Song,
            SearchResult::Instrument(_) => EntityKind::Instrument,
            SearchResult::Genre(_) => EntityKind::Genre,
        }
    }

    /// Stable identity of the entity; the only rendering key.
    pub fn uri(&self) -> &str {
        match self {
            SearchResult::Artist(a) => &a.uri,
            SearchResult::Album(a) => &a.uri,
            SearchResult::Song(s) => &s.uri,
            SearchResult::Instrument(i) => &i.uri,
            SearchResult::Genre(g) => &g.uri,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            SearchResult::Artist(a) => &a.name,
            SearchResult::Album(a) => &a.name,
            SearchResult::Song(s) => &s.name,
            SearchResult::Instrument(i) => &i.name,
            SearchResult::Genre(g) => &g.name,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            SearchResult::Artist(a) => a.description.as_deref(),
            SearchResult::Album(a) => a.description.as_deref(),
            SearchResult::Song(s) => s.description.as_deref(),
            SearchResult::Instrument(i) => i.description.as_deref(),
            SearchResult::Genre(g) => g.description.as_deref(),
        }
    }

    /// Decode a single-entity lookup payload of a known kind.
    ///
    /// Lookups answer with the bare entity, while list endpoints wrap every
    /// entity in `{type, data}`. Both shapes are accepted here; a wrapped
    /// payload must carry the expected kind.
    pub fn from_lookup(kind: EntityKind, value: serde_json::Value) -> serde_json::Result<Self> {
        let wrapped = value.get("data").is_some_and(|d| d.is_object())
            && value.get("type").and_then(|t| t.as_str()).is_some();
        if wrapped {
            let result: SearchResult = serde_json::from_value(value)?;
            if result.kind() != kind {
                return Err(serde::de::Error::custom(format!(
                    "expected a {kind} but the backend returned a {}",
                    result.kind()
                )));
            }
            return Ok(result);
        }

        Ok(match kind {
            EntityKind::Artist => SearchResult::Artist(serde_json::from_value(value)?),
            EntityKind::Album => SearchResult::Album(serde_json::from_value(value)?),
            EntityKind::Song => SearchResult::Song(serde_json::from_value(value)?),
            EntityKind::Instrument => SearchResult::Instrument(serde_json::from_value(value)?),
            EntityKind::Genre => SearchResult::Genre(serde_json::from_value(value)?),
        })
    }

    /// Decode a result list, skipping entries whose `type` names no known kind.
    ///
    /// An entry of a known kind with a malformed payload still fails the whole list.
    pub fn decode_list(values: Vec<serde_json::Value>) -> serde_json::Result<Vec<Self>> {
        let mut results = Vec::with_capacity(values.len());
        for value in values {
            let tag = value.get("type").cloned().unwrap_or(serde_json::Value::Null);
            if serde_json::from_value::<EntityKind>(tag.clone()).is_err() {
                warn!(kind = %tag, "Skipping result of unknown kind");
                continue;
            }
            results.push(serde_json::from_value(value)?);
        }
        Ok(results)
    }
}

// ---------------------------------------------------------------------------
// Response envelope
// ---------------------------------------------------------------------------

/// Wrapper every backend response uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Informational text, e.g. "Se encontraron 3 resultados".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwrap the payload; a `success: false` envelope or a missing `data` is an error.
    pub fn into_data(self) -> Result<T, String> {
        if !self.success {
            return Err(self
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| "backend reported failure".to_string()));
        }
        self.data.ok_or_else(|| "response envelope has no data".to_string())
    }
}

/// Triple and entity counts from `/api/stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyStats {
    pub total_triples: u64,
    pub artists: u64,
    pub albums: u64,
    pub songs: u64,
    pub instruments: u64,
    pub genres: u64,
}

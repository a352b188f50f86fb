//! Relationship-traversal endpoints of the ontology.

use std::fmt;
use std::str::FromStr;

use muso_core::EntityKind;

/// An edge of the ontology the backend can walk from a given entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    AlbumsByArtist,
    SongsByAlbum,
    SongsByArtist,
    SongsByInstrument,
    GenresByArtist,
}

impl Relation {
    pub const ALL: [Relation; 5] = [
        Relation::AlbumsByArtist,
        Relation::SongsByAlbum,
        Relation::SongsByArtist,
        Relation::SongsByInstrument,
        Relation::GenresByArtist,
    ];

    /// Kind of the entities returned.
    pub fn target(self) -> EntityKind {
        match self {
            Relation::AlbumsByArtist => EntityKind::Album,
            Relation::SongsByAlbum | Relation::SongsByArtist | Relation::SongsByInstrument => {
                EntityKind::Song
            }
            Relation::GenresByArtist => EntityKind::Genre,
        }
    }

    /// Kind of the entity whose URI is supplied.
    pub fn source(self) -> EntityKind {
        match self {
            Relation::AlbumsByArtist | Relation::SongsByArtist | Relation::GenresByArtist => {
                EntityKind::Artist
            }
            Relation::SongsByAlbum => EntityKind::Album,
            Relation::SongsByInstrument => EntityKind::Instrument,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Relation::AlbumsByArtist => "albums-by-artist",
            Relation::SongsByAlbum => "songs-by-album",
            Relation::SongsByArtist => "songs-by-artist",
            Relation::SongsByInstrument => "songs-by-instrument",
            Relation::GenresByArtist => "genres-by-artist",
        }
    }

    /// `/api/{target}/{source}/{encoded uri}`
    pub(crate) fn path(self, uri: &str) -> String {
        format!(
            "/api/{}/{}/{}",
            self.target().plural(),
            self.source().as_str(),
            urlencoding::encode(uri)
        )
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown relation '{0}' (expected one of: albums-by-artist, songs-by-album, songs-by-artist, songs-by-instrument, genres-by-artist)")]
pub struct UnknownRelation(pub String);

impl FromStr for Relation {
    type Err = UnknownRelation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Relation::ALL
            .into_iter()
            .find(|r| r.as_str() == normalized)
            .ok_or_else(|| UnknownRelation(s.to_string()))
    }
}

//! Client-side category filter applied to search results.

use std::fmt;
use std::str::FromStr;

use crate::types::{EntityKind, SearchResult, UnknownKind};

/// Category toggle: everything, or a single entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(EntityKind),
}

impl CategoryFilter {
    /// The six toggles in display order.
    pub const OPTIONS: [CategoryFilter; 6] = [
        CategoryFilter::All,
        CategoryFilter::Only(EntityKind::Artist),
        CategoryFilter::Only(EntityKind::Album),
        CategoryFilter::Only(EntityKind::Song),
        CategoryFilter::Only(EntityKind::Instrument),
        CategoryFilter::Only(EntityKind::Genre),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(kind) => kind.as_str(),
        }
    }

    /// Category name used in the "no results" message.
    pub fn category_name(self) -> &'static str {
        match self {
            CategoryFilter::All => "general",
            CategoryFilter::Only(kind) => kind.as_str(),
        }
    }

    pub fn matches(self, result: &SearchResult) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(kind) => result.kind() == kind,
        }
    }

    /// Keep only results whose discriminant equals the filter, preserving order.
    pub fn apply(self, results: Vec<SearchResult>) -> Vec<SearchResult> {
        match self {
            CategoryFilter::All => results,
            CategoryFilter::Only(_) => results.into_iter().filter(|r| self.matches(r)).collect(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Artist, Genre};

    fn artist(uri: &str) -> SearchResult {
        SearchResult::Artist(Artist {
            uri: uri.into(),
            name: "Jazz Messengers".into(),
            description: None,
            nationality: None,
            birth_year: None,
            active_years: None,
            trajectory: None,
            discography: None,
            awards: None,
            genre: Some("Jazz".into()),
        })
    }

    fn genre(uri: &str) -> SearchResult {
        SearchResult::Genre(Genre { uri: uri.into(), name: "Jazz".into(), description: None })
    }

    #[test]
    fn all_keeps_everything() {
        let results = vec![artist("a"), genre("g")];
        assert_eq!(CategoryFilter::All.apply(results.clone()), results);
    }

    #[test]
    fn kind_filter_is_a_subset_with_matching_discriminant() {
        let raw = vec![artist("a1"), genre("g1"), artist("a2")];
        let filtered = CategoryFilter::Only(EntityKind::Artist).apply(raw.clone());
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.kind() == EntityKind::Artist));
        assert!(filtered.iter().all(|r| raw.contains(r)));
        assert_eq!(filtered[0].uri(), "a1");
        assert_eq!(filtered[1].uri(), "a2");
    }

    #[test]
    fn parses_all_and_kinds() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "genre".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(EntityKind::Genre))
        );
        assert!("podcast".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn category_name_for_all_is_general() {
        assert_eq!(CategoryFilter::All.category_name(), "general");
        assert_eq!(CategoryFilter::Only(EntityKind::Song).category_name(), "song");
    }
}

//! User-facing strings. The interface speaks Spanish.

use crate::filter::CategoryFilter;
use crate::types::EntityKind;

pub const EMPTY_QUERY: &str = "Por favor ingresa un término de búsqueda";
pub const BACKEND_UNREACHABLE: &str =
    "Error al conectar con la API. Verifica que el servidor backend esté en ejecución.";

pub const LOADING: &str = "Buscando resultados...";
pub const INITIAL: &str = "Ingresa una búsqueda para comenzar a explorar la ontología musical";
pub const NO_RESULTS: &str = "No se encontraron resultados. Intenta con otro término de búsqueda.";

pub const APP_TITLE: &str = "Buscador Semántico de Música";
pub const APP_SUBTITLE: &str = "Explora ontologías musicales con búsqueda semántica";
pub const APP_DESCRIPTION: &str =
    "Descubre artistas, álbumes, canciones, instrumentos y géneros mediante búsqueda inteligente";
pub const SEARCH_PLACEHOLDER: &str = "Busca artistas, álbumes, canciones...";
pub const SEARCH_BUTTON: &str = "Buscar";
pub const SEARCH_BUTTON_BUSY: &str = "Buscando...";

/// Shown when a search (optionally narrowed by `filter`) came back empty.
pub fn no_results_for(query: &str, filter: CategoryFilter) -> String {
    format!(
        "No se encontraron resultados para \"{query}\" en la categoría {}",
        filter.category_name()
    )
}

/// Error view text.
pub fn error_banner(message: &str) -> String {
    format!("Error: {message}")
}

pub fn api_connected(base_url: &str) -> String {
    format!("API conectada ({base_url})")
}

pub const API_DISCONNECTED: &str =
    "API desconectada - Asegúrate de que el servidor backend esté corriendo";

/// Singular label shown on a result card.
pub fn kind_label(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Artist => "Artista",
        EntityKind::Album => "Álbum",
        EntityKind::Song => "Canción",
        EntityKind::Instrument => "Instrumento",
        EntityKind::Genre => "Género",
    }
}

/// Plural label shown on a category toggle.
pub fn filter_label(filter: CategoryFilter) -> &'static str {
    match filter {
        CategoryFilter::All => "Todos",
        CategoryFilter::Only(EntityKind::Artist) => "Artistas",
        CategoryFilter::Only(EntityKind::Album) => "Álbumes",
        CategoryFilter::Only(EntityKind::Song) => "Canciones",
        CategoryFilter::Only(EntityKind::Instrument) => "Instrumentos",
        CategoryFilter::Only(EntityKind::Genre) => "Géneros",
    }
}

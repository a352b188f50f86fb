//! Muso client — typed HTTP access to the music-ontology search API.
//!
//! One method per backend endpoint. Every call issues a single GET, unwraps the
//! `{success, data, error?}` envelope, and reports any failure as a
//! [`ClientError`] after logging it. There is no retry, caching, or backoff.

mod error;
mod relation;

pub use error::{ClientError, ClientResult};
pub use relation::{Relation, UnknownRelation};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use muso_core::{ClientConfig, EntityKind, Envelope, OntologyStats, SearchBackend, SearchResult};

/// Client for one backend, built from an explicit [`ClientConfig`].
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let builder = Client::builder();
        // Browsers own the deadline for fetch(); reqwest exposes no client timeout there.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout());
        let http = builder.build().map_err(ClientError::Build)?;
        Ok(Self { http, config })
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    // -----------------------------------------------------------------------
    // Request plumbing
    // -----------------------------------------------------------------------

    async fn get_data<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> ClientResult<T> {
        let url = self.config.endpoint(path);
        debug!(url = url.as_str(), "GET");
        let result = self.fetch(&url, query).await;
        if let Err(ref e) = result {
            error!(url = url.as_str(), error = %e, "API request failed");
        }
        result
    }

    /// Like `get_data`, for endpoints answering with a list of tagged results.
    async fn get_results(&self, path: &str, query: &[(&str, &str)]) -> ClientResult<Vec<SearchResult>> {
        let values: Vec<serde_json::Value> = self.get_data(path, query).await?;
        SearchResult::decode_list(values).map_err(|e| {
            let err = ClientError::Decode(e.to_string());
            error!(path, error = %err, "API request failed");
            err
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> ClientResult<T> {
        let mut request = self.http.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await.map_err(ClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { status: status.as_u16() });
        }

        let envelope: Envelope<T> =
            response.json().await.map_err(|e| ClientError::Decode(e.to_string()))?;
        envelope.into_data().map_err(ClientError::Backend)
    }

    fn entity_path(kind: EntityKind, uri: &str) -> String {
        format!("/api/{}/{}", kind.plural(), urlencoding::encode(uri))
    }

    // -----------------------------------------------------------------------
    // Health
    // -----------------------------------------------------------------------

    /// True iff `/health` answers 200. Network errors, timeouts, and other
    /// statuses all yield false.
    pub async fn health_check(&self) -> bool {
        let url = self.config.endpoint("/health");
        match self.http.get(&url).send().await {
            Ok(response) if response.status() == StatusCode::OK => true,
            Ok(response) => {
                warn!(status = response.status().as_u16(), "Health check failed");
                false
            }
            Err(e) => {
                warn!(error = %e, "Health check failed");
                false
            }
        }
    }

    // -----------------------------------------------------------------------
    // Search and listing
    // -----------------------------------------------------------------------

    /// Free-text search across every entity kind.
    pub async fn search(&self, query: &str) -> ClientResult<Vec<SearchResult>> {
        self.get_results("/api/search", &[("q", query)]).await
    }

    /// Every entity of one kind.
    pub async fn list(&self, kind: EntityKind) -> ClientResult<Vec<SearchResult>> {
        self.get_results(&format!("/api/{}", kind.plural()), &[]).await
    }

    pub async fn artists(&self) -> ClientResult<Vec<SearchResult>> {
        self.list(EntityKind::Artist).await
    }

    pub async fn albums(&self) -> ClientResult<Vec<SearchResult>> {
        self.list(EntityKind::Album).await
    }

    pub async fn songs(&self) -> ClientResult<Vec<SearchResult>> {
        self.list(EntityKind::Song).await
    }

    pub async fn instruments(&self) -> ClientResult<Vec<SearchResult>> {
        self.list(EntityKind::Instrument).await
    }

    pub async fn genres(&self) -> ClientResult<Vec<SearchResult>> {
        self.list(EntityKind::Genre).await
    }

    // -----------------------------------------------------------------------
    // Lookup by identifier
    // -----------------------------------------------------------------------

    /// Fetch one entity by URI. The identifier is percent-encoded into a single path segment.
    pub async fn get(&self, kind: EntityKind, uri: &str) -> ClientResult<SearchResult> {
        let value: serde_json::Value = self.get_data(&Self::entity_path(kind, uri), &[]).await?;
        SearchResult::from_lookup(kind, value).map_err(|e| {
            let err = ClientError::Decode(e.to_string());
            error!(kind = %kind, uri, error = %err, "API request failed");
            err
        })
    }

    pub async fn artist(&self, uri: &str) -> ClientResult<SearchResult> {
        self.get(EntityKind::Artist, uri).await
    }

    pub async fn album(&self, uri: &str) -> ClientResult<SearchResult> {
        self.get(EntityKind::Album, uri).await
    }

    pub async fn song(&self, uri: &str) -> ClientResult<SearchResult> {
        self.get(EntityKind::Song, uri).await
    }

    pub async fn instrument(&self, uri: &str) -> ClientResult<SearchResult> {
        self.get(EntityKind::Instrument, uri).await
    }

    // -----------------------------------------------------------------------
    // Relationships
    // -----------------------------------------------------------------------

    pub async fn related(&self, relation: Relation, uri: &str) -> ClientResult<Vec<SearchResult>> {
        self.get_results(&relation.path(uri), &[]).await
    }

    pub async fn albums_by_artist(&self, artist_uri: &str) -> ClientResult<Vec<SearchResult>> {
        self.related(Relation::AlbumsByArtist, artist_uri).await
    }

    pub async fn songs_by_album(&self, album_uri: &str) -> ClientResult<Vec<SearchResult>> {
        self.related(Relation::SongsByAlbum, album_uri).await
    }

    pub async fn songs_by_artist(&self, artist_uri: &str) -> ClientResult<Vec<SearchResult>> {
        self.related(Relation::SongsByArtist, artist_uri).await
    }

    pub async fn songs_by_instrument(&self, instrument_uri: &str) -> ClientResult<Vec<SearchResult>> {
        self.related(Relation::SongsByInstrument, instrument_uri).await
    }

    pub async fn genres_by_artist(&self, artist_uri: &str) -> ClientResult<Vec<SearchResult>> {
        self.related(Relation::GenresByArtist, artist_uri).await
    }

    /// Instruments whose category label equals `category` (e.g. "Cuerda").
    pub async fn instruments_by_type(&self, category: &str) -> ClientResult<Vec<SearchResult>> {
        let path = format!("/api/instruments/type/{}", urlencoding::encode(category));
        self.get_results(&path, &[]).await
    }

    /// Triple and entity counts of the loaded ontology.
    pub async fn stats(&self) -> ClientResult<OntologyStats> {
        self.get_data("/api/stats", &[]).await
    }
}

#[async_trait(?Send)]
impl SearchBackend for ApiClient {
    type Error = ClientError;

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ClientError> {
        ApiClient::search(self, query).await
    }

    async fn health_check(&self) -> bool {
        ApiClient::health_check(self).await
    }
}

//! Integration tests for `ApiClient` against an in-process mock backend.

mod helpers;

use helpers::{ok, MockBackend};
use muso_client::{ApiClient, ClientError, Relation};
use muso_core::{CategoryFilter, ClientConfig, EntityKind, SearchController, SearchResult, View};
use serde_json::json;
use std::time::Duration;

fn jazz_results() -> serde_json::Value {
    json!([
        {
            "type": "artist",
            "data": { "uri": "http://example.org/music#MilesDavis", "name": "Miles Davis", "type": "artist", "genre": "Jazz" }
        },
        {
            "type": "genre",
            "data": { "uri": "http://example.org/music#Jazz", "name": "Jazz", "type": "genre" }
        }
    ])
}

// ---------------------------------------------------------------------------
// Search and listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_sends_query_and_unwraps_envelope() {
    let mock = MockBackend::start(|_| ok(jazz_results()));
    let results = mock.client().search("miles davis").await.unwrap();

    assert_eq!(mock.requests(), vec!["/api/search?q=miles+davis"]);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].kind(), EntityKind::Artist);
    assert_eq!(results[1].name(), "Jazz");
}

#[tokio::test]
async fn search_keeps_known_results_next_to_unknown_kinds() {
    let mock = MockBackend::start(|_| {
        ok(json!([
            { "type": "playlist", "data": { "uri": "p", "name": "Favoritas" } },
            { "type": "genre", "data": { "uri": "http://example.org/music#Jazz", "name": "Jazz" } }
        ]))
    });
    let results = mock.client().search("jazz").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].kind(), EntityKind::Genre);
}

#[tokio::test]
async fn list_endpoints_use_plural_paths() {
    let mock = MockBackend::start(|_| ok(json!([])));
    let client = mock.client();
    client.artists().await.unwrap();
    client.albums().await.unwrap();
    client.songs().await.unwrap();
    client.instruments().await.unwrap();
    client.genres().await.unwrap();

    assert_eq!(
        mock.requests(),
        vec!["/api/artists", "/api/albums", "/api/songs", "/api/instruments", "/api/genres"]
    );
}

// ---------------------------------------------------------------------------
// Lookup and relationships
// ---------------------------------------------------------------------------

#[tokio::test]
async fn lookup_encodes_uri_and_accepts_bare_entity() {
    let mock = MockBackend::start(|_| {
        ok(json!({
            "uri": "http://example.org/music#KindOfBlue",
            "name": "Kind of Blue",
            "type": "album",
            "releaseYear": 1959
        }))
    });
    let result = mock.client().album("http://example.org/music#KindOfBlue").await.unwrap();

    assert_eq!(mock.requests(), vec!["/api/albums/http%3A%2F%2Fexample.org%2Fmusic%23KindOfBlue"]);
    let SearchResult::Album(album) = result else { panic!("expected album") };
    assert_eq!(album.release_year, Some(1959));
}

#[tokio::test]
async fn relationship_endpoints_hit_traversal_routes() {
    let mock = MockBackend::start(|_| ok(json!([])));
    let client = mock.client();
    client.albums_by_artist("a/1").await.unwrap();
    client.songs_by_album("b").await.unwrap();
    client.songs_by_artist("c").await.unwrap();
    client.songs_by_instrument("d").await.unwrap();
    client.genres_by_artist("e").await.unwrap();
    client.instruments_by_type("Viento metal").await.unwrap();

    assert_eq!(
        mock.requests(),
        vec![
            "/api/albums/artist/a%2F1",
            "/api/songs/album/b",
            "/api/songs/artist/c",
            "/api/songs/instrument/d",
            "/api/genres/artist/e",
            "/api/instruments/type/Viento%20metal",
        ]
    );
}

#[tokio::test]
async fn related_dispatches_by_relation() {
    let mock = MockBackend::start(|_| {
        ok(json!([{ "type": "song", "data": { "uri": "s", "name": "Blue in Green", "duration": 337 } }]))
    });
    let songs = mock.client().related(Relation::SongsByAlbum, "kob").await.unwrap();
    assert_eq!(mock.requests(), vec!["/api/songs/album/kob"]);
    assert_eq!(songs[0].kind(), Relation::SongsByAlbum.target());
}

#[tokio::test]
async fn stats_decode() {
    let mock = MockBackend::start(|_| {
        ok(json!({ "total_triples": 1200, "artists": 10, "albums": 12, "songs": 40, "instruments": 9, "genres": 6 }))
    });
    let stats = mock.client().stats().await.unwrap();
    assert_eq!(mock.requests(), vec!["/api/stats"]);
    assert_eq!(stats.total_triples, 1200);
    assert_eq!(stats.songs, 40);
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_2xx_is_a_request_failure() {
    let mock = MockBackend::start(|_| (500, json!({ "detail": "boom" }).to_string()));
    let err = mock.client().search("jazz").await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 500 }));
    assert!(err.to_string().starts_with("request failed"));
}

#[tokio::test]
async fn unsuccessful_envelope_carries_backend_error() {
    let mock = MockBackend::start(|_| {
        (200, json!({ "success": false, "data": [], "error": "ontología no cargada" }).to_string())
    });
    let err = mock.client().search("jazz").await.unwrap_err();
    assert_eq!(err.to_string(), "request failed: ontología no cargada");
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let mock = MockBackend::start(|_| (200, "<html>".to_string()));
    let err = mock.client().genres().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn lookup_of_wrong_kind_is_a_decode_error() {
    let mock = MockBackend::start(|_| ok(json!({ "type": "genre", "data": { "uri": "g", "name": "Jazz" } })));
    let err = mock.client().artist("g").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    let client = ApiClient::new(ClientConfig::new("http://127.0.0.1:1").unwrap()).unwrap();
    let err = client.search("jazz").await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_is_true_only_for_200() {
    let healthy = MockBackend::start(|_| (200, json!({ "status": "healthy" }).to_string()));
    assert!(healthy.client().health_check().await);
    assert_eq!(healthy.requests(), vec!["/health"]);

    let degraded = MockBackend::start(|_| (503, "{}".to_string()));
    assert!(!degraded.client().health_check().await);
}

#[tokio::test]
async fn health_is_false_when_unreachable_or_slow() {
    let client = ApiClient::new(ClientConfig::new("http://127.0.0.1:1").unwrap()).unwrap();
    assert!(!client.health_check().await);

    let slow = MockBackend::start_with_delay(Duration::from_secs(2), |_| (200, "{}".to_string()));
    assert!(!slow.client_with_timeout(Duration::from_millis(200)).health_check().await);
}

// ---------------------------------------------------------------------------
// End to end through the controller
// ---------------------------------------------------------------------------

#[tokio::test]
async fn controller_filters_backend_results() {
    let mock = MockBackend::start(|_| ok(jazz_results()));
    let mut controller = SearchController::new(mock.client());

    let state = controller.submit("jazz", CategoryFilter::Only(EntityKind::Genre)).await;
    let cards = View::select(state).cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].key, "http://example.org/music#Jazz");
    assert!(!state.is_loading);
}

#[tokio::test]
async fn controller_blank_query_sends_nothing() {
    let mock = MockBackend::start(|_| ok(jazz_results()));
    let mut controller = SearchController::new(mock.client());

    let state = controller.submit("   ", CategoryFilter::All).await;
    assert_eq!(state.error.as_deref(), Some("Por favor ingresa un término de búsqueda"));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn controller_surfaces_transport_failure_and_downgrades_health() {
    let client = ApiClient::new(ClientConfig::new("http://127.0.0.1:1").unwrap()).unwrap();
    let mut controller = SearchController::new(client);

    assert!(!controller.check_health().await);
    assert_eq!(controller.api_status(), Some(false));

    let state = controller.submit("jazz", CategoryFilter::All).await;
    assert!(state.error.as_deref().is_some_and(|e| e.starts_with("request failed")));
    assert!(state.results.is_empty());
    assert!(!state.is_loading);
}

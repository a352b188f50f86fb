//! Muso CLI — search the music ontology from the terminal.
//!
//! Drives the same search controller and card templates as the web app, and
//! exposes every backend endpoint directly.

mod render;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};

use muso_client::{ApiClient, Relation};
use muso_core::config::parse_timeout_secs;
use muso_core::{dispatch, messages, CategoryFilter, ClientConfig, EntityKind, SearchController, SearchResult, View};

/// Muso CLI — music-ontology search from the terminal.
#[derive(Parser)]
#[command(name = "muso", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    /// Backend base URL (overrides muso.toml and MUSO_API_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Request timeout in seconds (overrides muso.toml and MUSO_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the whole ontology, optionally narrowed to one category
    Search {
        /// Search query
        query: String,

        /// Category: all, artist, album, song, instrument, genre
        #[arg(long, short, default_value = "all")]
        kind: CategoryFilter,
    },
    /// List every entity of a kind
    List {
        /// artist, album, song, instrument, or genre
        kind: EntityKind,
    },
    /// Fetch one entity by URI
    Get {
        /// artist, album, song, or instrument (genres have no lookup route)
        #[arg(value_parser = parse_lookup_kind)]
        kind: EntityKind,

        /// Entity URI
        uri: String,
    },
    /// Walk a relationship from an entity
    Related {
        /// albums-by-artist, songs-by-album, songs-by-artist, songs-by-instrument, genres-by-artist
        relation: Relation,

        /// URI of the source entity
        uri: String,
    },
    /// List instruments of a category (e.g. "Cuerda")
    InstrumentsByType {
        /// Instrument category label
        category: String,
    },
    /// Show ontology statistics
    Stats,
    /// Check whether the backend is reachable
    Health,
}

/// Kinds the backend can fetch one at a time.
fn parse_lookup_kind(raw: &str) -> Result<EntityKind, String> {
    match raw.parse::<EntityKind>().map_err(|e| e.to_string())? {
        EntityKind::Genre => Err("genres cannot be fetched by URI; use `list genre`".to_string()),
        kind => Ok(kind),
    }
}

fn resolve_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let cwd = std::env::current_dir().context("Could not determine current directory")?;
    let mut config = ClientConfig::load(&cwd)?;
    if let Some(url) = &cli.url {
        config = ClientConfig::new(url)?.with_timeout(config.timeout())?;
    }
    if let Some(raw) = &cli.timeout {
        config = config.with_timeout(Duration::from_secs(parse_timeout_secs(raw)?))?;
    }
    Ok(config)
}

fn print_results(results: &[SearchResult], json: bool) -> anyhow::Result<ExitCode> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(ExitCode::SUCCESS);
    }
    if results.is_empty() {
        eprintln!("{}", messages::NO_RESULTS);
        return Ok(ExitCode::FAILURE);
    }
    let cards: Vec<String> = results.iter().map(|r| render::card(&dispatch(r))).collect();
    println!("{}", cards.join("\n"));
    eprintln!("{} results", results.len());
    Ok(ExitCode::SUCCESS)
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = resolve_config(&cli)?;
    let client = ApiClient::new(config)?;

    match cli.command {
        Commands::Search { query, kind } => {
            let mut controller = SearchController::new(client);
            let state = controller.submit(&query, kind).await;
            let view = View::select(state);

            if view.is_failure() {
                if let Some(text) = view.placeholder() {
                    eprintln!("{text}");
                }
                return Ok(ExitCode::FAILURE);
            }
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&state.results)?);
            } else {
                print!("{}", render::view(&view));
                eprintln!("\n{} results", state.results.len());
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::List { kind } => print_results(&client.list(kind).await?, cli.json),
        Commands::Get { kind, uri } => {
            let result = client.get(kind, &uri).await?;
            print_results(std::slice::from_ref(&result), cli.json)
        }
        Commands::Related { relation, uri } => {
            print_results(&client.related(relation, &uri).await?, cli.json)
        }
        Commands::InstrumentsByType { category } => {
            print_results(&client.instruments_by_type(&category).await?, cli.json)
        }
        Commands::Stats => {
            let stats = client.stats().await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Triples:      {}", stats.total_triples);
                println!("Artistas:     {}", stats.artists);
                println!("Álbumes:      {}", stats.albums);
                println!("Canciones:    {}", stats.songs);
                println!("Instrumentos: {}", stats.instruments);
                println!("Géneros:      {}", stats.genres);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Health => {
            let mut controller = SearchController::new(client);
            let healthy = controller.check_health().await;
            let base_url = controller.backend().base_url();
            if cli.json {
                let output = serde_json::json!({ "healthy": healthy, "base_url": base_url });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else if healthy {
                println!("\u{2713} {}", messages::api_connected(base_url));
            } else {
                println!("\u{2717} {}", messages::API_DISCONNECTED);
            }
            Ok(if healthy { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("muso=warn".parse().expect("static directive")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_kind_defaults_to_all() {
        let cli = Cli::try_parse_from(["muso", "search", "jazz"]).unwrap();
        let Commands::Search { query, kind } = cli.command else { panic!("expected search") };
        assert_eq!(query, "jazz");
        assert_eq!(kind, CategoryFilter::All);
    }

    #[test]
    fn typed_arguments_parse() {
        let cli = Cli::try_parse_from([
            "muso", "--json", "related", "songs-by-artist", "http://example.org/music#MilesDavis",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Related { relation: Relation::SongsByArtist, .. }));

        assert!(Cli::try_parse_from(["muso", "list", "podcasts"]).is_err());
    }

    #[test]
    fn get_rejects_genre_lookups() {
        assert!(Cli::try_parse_from(["muso", "get", "genre", "http://example.org/music#Jazz"]).is_err());

        let cli = Cli::try_parse_from(["muso", "get", "artist", "http://example.org/music#MilesDavis"]).unwrap();
        assert!(matches!(cli.command, Commands::Get { kind: EntityKind::Artist, .. }));
    }

    #[test]
    fn url_flag_overrides_config() {
        let cli = Cli::try_parse_from(["muso", "--url", "http://10.1.1.1:8000/", "--timeout", "4", "health"])
            .unwrap();
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.base_url(), "http://10.1.1.1:8000");
        assert_eq!(config.timeout(), Duration::from_secs(4));
    }
}

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::env;
use thiserror::Error;

use crate::models::MovieSummary;

const OMDB_BASE: &str = "https://www.omdbapi.com/";
const DEFAULT_REMOTE_MESSAGE: &str = "No results found.";

/// Failure kinds at the remote-fetch boundary. `Remote` is a logical
/// failure reported by the source (no matches, invalid key); `Network`
/// covers transport and non-success HTTP status; `Parse` covers
/// unexpected response shapes and fails closed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{0}")]
    Remote(String),
    #[error("unexpected response: {0}")]
    Parse(String),
}

/// Lightweight hit from the search endpoint; lacks detail fields.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub title: String,
    pub year: String,
    pub imdb_id: String,
    pub poster: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SearchPage {
    pub hits: Vec<SearchHit>,
    /// Total across all pages, reported by the search step.
    pub total_results: u32,
}

#[async_trait]
pub trait OmdbApi: Send + Sync {
    async fn search_movies(&self, query: &str, page: u32) -> Result<SearchPage, FetchError>;
    async fn fetch_detail(&self, imdb_id: &str) -> Result<MovieSummary, FetchError>;
}

#[derive(Debug, Clone)]
pub struct OmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OmdbClient {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var("OMDB_API_KEY").context("OMDB_API_KEY not set")?;
        Ok(Self {
            client: Client::new(),
            api_key,
            base_url: OMDB_BASE.to_string(),
        })
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, FetchError> {
        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("request failed: {e}")))?;
        let status = res.status();
        let text = res
            .text()
            .await
            .map_err(|e| FetchError::Network(format!("reading body failed: {e}")))?;
        if !status.is_success() {
            return Err(FetchError::Network(format!("{status} -> {text}")));
        }
        serde_json::from_str(&text).map_err(|e| FetchError::Parse(e.to_string()))
    }
}

#[async_trait]
impl OmdbApi for OmdbClient {
    async fn search_movies(&self, query: &str, page: u32) -> Result<SearchPage, FetchError> {
        let url = format!(
            "{}?apikey={}&s={}&type=movie&page={}",
            self.base_url,
            self.api_key,
            urlencoding::encode(query),
            page
        );
        let data: SearchResponse = self.get_json(&url).await?;
        if data.response != "True" {
            return Err(FetchError::Remote(
                data.error
                    .unwrap_or_else(|| DEFAULT_REMOTE_MESSAGE.to_string()),
            ));
        }
        let total_results = data
            .total_results
            .as_deref()
            .and_then(|t| t.parse().ok())
            .unwrap_or(0);
        let hits = data
            .search
            .into_iter()
            .map(|hit| SearchHit {
                title: hit.title,
                year: hit.year,
                imdb_id: hit.imdb_id,
                poster: presence(hit.poster),
            })
            .collect();
        Ok(SearchPage {
            hits,
            total_results,
        })
    }

    async fn fetch_detail(&self, imdb_id: &str) -> Result<MovieSummary, FetchError> {
        let url = format!(
            "{}?apikey={}&i={}&plot=short",
            self.base_url,
            self.api_key,
            urlencoding::encode(imdb_id)
        );
        let data: DetailResponse = self.get_json(&url).await?;
        if data.response != "True" {
            return Err(FetchError::Remote(
                data.error
                    .unwrap_or_else(|| DEFAULT_REMOTE_MESSAGE.to_string()),
            ));
        }
        let title = data
            .title
            .ok_or_else(|| FetchError::Parse(format!("detail for {imdb_id} lacks a title")))?;
        Ok(MovieSummary {
            title,
            year: data.year.unwrap_or_else(|| "N/A".to_string()),
            poster: presence(data.poster),
            plot: presence(data.plot),
            rated: presence(data.rated),
            runtime: presence(data.runtime),
            genre: presence(data.genre),
            imdb_id: data.imdb_id.unwrap_or_else(|| imdb_id.to_string()),
        })
    }
}

// The source marks absent fields with the literal "N/A".
fn presence(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != "N/A")
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "Search", default)]
    search: Vec<WireHit>,
    #[serde(rename = "totalResults")]
    total_results: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireHit {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Poster")]
    poster: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Plot")]
    plot: Option<String>,
    #[serde(rename = "Rated")]
    rated: Option<String>,
    #[serde(rename = "Runtime")]
    runtime: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
}

//! HTTP client for a Nominatim-compatible search service.
//!
//! Wraps `reqwest` with the forward fallback chain, linear-backoff retries
//! and the reverse lookup. All public resolve methods return a
//! [`Resolution`]; request errors are logged and never propagated.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Url};

use days_core::AppConfig;

use crate::dictionary::SynonymDictionary;
use crate::error::GeocodeError;
use crate::extract::{project, project_reverse};
use crate::resolution::{Pass, Resolution};
use crate::retry::{is_retriable, retry_linear};
use crate::standardize::{find_canonical_key, standardize, strip_descriptive_suffix};
use crate::types::{Candidate, Location, ReverseAddress, ReversePlace};

/// Candidates requested per forward search.
const SEARCH_LIMIT: &str = "3";
/// Reverse zoom level at city granularity.
const REVERSE_ZOOM: &str = "10";
const RESULT_LANGUAGE: &str = "en";

/// Connection and retry settings for [`GeocodeClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeSettings {
    pub search_url: String,
    pub reverse_url: String,
    pub user_agent: String,
    /// `None` keeps reqwest's default (no timeout).
    pub request_timeout_secs: Option<u64>,
    /// Attempts per forward pass, including the first.
    pub max_attempts: u32,
    /// Wait after attempt `n` is `n * backoff_step_ms`.
    pub backoff_step_ms: u64,
}

impl GeocodeSettings {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            search_url: config.search_url.clone(),
            reverse_url: config.reverse_url.clone(),
            user_agent: config.user_agent.clone(),
            request_timeout_secs: config.request_timeout_secs,
            max_attempts: config.max_attempts,
            backoff_step_ms: config.retry_backoff_ms,
        }
    }
}

impl Default for GeocodeSettings {
    fn default() -> Self {
        Self {
            search_url: days_core::config::DEFAULT_SEARCH_URL.to_owned(),
            reverse_url: days_core::config::DEFAULT_REVERSE_URL.to_owned(),
            user_agent: days_core::config::DEFAULT_USER_AGENT.to_owned(),
            request_timeout_secs: None,
            max_attempts: 3,
            backoff_step_ms: 1_000,
        }
    }
}

/// Forward and reverse place-name resolver.
///
/// Holds no mutable state; one client can serve concurrent callers. Each
/// call runs its passes and retries sequentially and always to completion.
pub struct GeocodeClient {
    client: Client,
    search_url: Url,
    reverse_url: Url,
    dictionary: Arc<SynonymDictionary>,
    max_attempts: u32,
    backoff_step_ms: u64,
}

impl GeocodeClient {
    /// Creates a client for the given endpoints and dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidEndpoint`] if either
    /// endpoint is not a valid absolute URL.
    pub fn new(
        settings: &GeocodeSettings,
        dictionary: Arc<SynonymDictionary>,
    ) -> Result<Self, GeocodeError> {
        let mut builder = Client::builder().user_agent(settings.user_agent.as_str());
        if let Some(secs) = settings.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            search_url: parse_endpoint(&settings.search_url)?,
            reverse_url: parse_endpoint(&settings.reverse_url)?,
            dictionary,
            max_attempts: settings.max_attempts,
            backoff_step_ms: settings.backoff_step_ms,
        })
    }

    /// Resolves a place name through the exact, suffix-stripped and
    /// synonym-reversed passes, stopping at the first pass with candidates.
    /// The synonym pass runs whenever a canonical key exists, even if it
    /// equals a query already sent.
    ///
    /// Empty or blank queries return [`Resolution::Miss`] without touching
    /// the network. The upstream's first candidate is projected with the
    /// standardized query as fallback name.
    pub async fn resolve_forward(&self, query: &str) -> Resolution<Location> {
        if query.trim().is_empty() {
            return Resolution::Miss;
        }

        let clean = standardize(&self.dictionary, query);
        let passes = [
            (Pass::Exact, Some(clean.clone())),
            (Pass::SuffixStripped, strip_descriptive_suffix(&clean)),
            (
                Pass::SynonymReversed,
                find_canonical_key(&self.dictionary, &clean).map(str::to_owned),
            ),
        ];

        let mut transient = false;

        for (pass, search) in passes {
            let Some(search) = search else {
                continue;
            };

            tracing::debug!(%pass, query = %search, "starting forward pass");
            match self.fetch_candidates(&search).await {
                Resolution::Found(candidates) => {
                    if let Some(top) = candidates.first() {
                        tracing::info!(%pass, query = %search, "forward pass matched");
                        return Resolution::Found(project(top, &clean));
                    }
                }
                Resolution::Miss => {}
                Resolution::TransientFailure => transient = true,
            }
        }

        if transient {
            Resolution::TransientFailure
        } else {
            Resolution::Miss
        }
    }

    /// [`resolve_forward`](Self::resolve_forward) with the failure detail dropped.
    pub async fn forward(&self, query: &str) -> Option<Location> {
        self.resolve_forward(query).await.into_option()
    }

    /// Issues one search, retrying transport failures and non-2xx statuses
    /// with linear back-off. An empty candidate list is a terminal
    /// [`Resolution::Miss`] and is not retried.
    pub async fn fetch_candidates(&self, query: &str) -> Resolution<Vec<Candidate>> {
        let url = self.search_url_for(query);
        let url = &url;

        match retry_linear(self.max_attempts, self.backoff_step_ms, || {
            self.search_once(url)
        })
        .await
        {
            Ok(candidates) if candidates.is_empty() => Resolution::Miss,
            Ok(candidates) => Resolution::Found(candidates),
            Err(err) if is_retriable(&err) => {
                tracing::warn!(query, error = %err, "search failed after all attempts");
                Resolution::TransientFailure
            }
            Err(err) => {
                tracing::warn!(query, error = %err, "search returned an unusable body");
                Resolution::Miss
            }
        }
    }

    /// Resolves coordinates to a city-level address with a single request.
    ///
    /// No retries. A response without an `address` object is a
    /// [`Resolution::Miss`].
    pub async fn resolve_reverse(&self, lat: f64, lng: f64) -> Resolution<ReverseAddress> {
        let url = self.reverse_url_for(lat, lng);

        match self.reverse_once(&url).await {
            Ok(Some(place)) => match project_reverse(&self.dictionary, &place) {
                Some(address) => Resolution::Found(address),
                None => Resolution::Miss,
            },
            Ok(None) => Resolution::Miss,
            Err(err) if is_retriable(&err) => {
                tracing::error!(lat, lng, error = %err, "reverse lookup failed");
                Resolution::TransientFailure
            }
            Err(err) => {
                tracing::warn!(lat, lng, error = %err, "reverse lookup returned an unusable body");
                Resolution::Miss
            }
        }
    }

    /// [`resolve_reverse`](Self::resolve_reverse) with the failure detail dropped.
    pub async fn reverse(&self, lat: f64, lng: f64) -> Option<ReverseAddress> {
        self.resolve_reverse(lat, lng).await.into_option()
    }

    fn search_url_for(&self, query: &str) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("q", query)
            .append_pair("limit", SEARCH_LIMIT)
            .append_pair("addressdetails", "1");
        url
    }

    fn reverse_url_for(&self, lat: f64, lng: f64) -> Url {
        let mut url = self.reverse_url.clone();
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("lat", &lat.to_string())
            .append_pair("lon", &lng.to_string())
            .append_pair("zoom", REVERSE_ZOOM)
            .append_pair("accept-language", RESULT_LANGUAGE);
        url
    }

    /// One forward request. Every array entry is kept in upstream order;
    /// missing or mistyped fields decode as empty.
    async fn search_once(&self, url: &Url) -> Result<Vec<Candidate>, GeocodeError> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT_LANGUAGE, RESULT_LANGUAGE)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let entries: Vec<serde_json::Value> =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                context: format!("search results from {url}"),
                source: e,
            })?;

        Ok(entries
            .into_iter()
            .map(Candidate::from_entry)
            .collect())
    }

    /// One reverse request. A JSON body that is not an object is treated as
    /// no data.
    async fn reverse_once(&self, url: &Url) -> Result<Option<ReversePlace>, GeocodeError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                context: format!("reverse result from {url}"),
                source: e,
            })?;
        if !value.is_object() {
            return Ok(None);
        }

        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| GeocodeError::Deserialize {
                context: format!("reverse result from {url}"),
                source: e,
            })
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, GeocodeError> {
    Url::parse(raw).map_err(|e| GeocodeError::InvalidEndpoint {
        url: raw.to_owned(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

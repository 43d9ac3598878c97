//! HTTP client for the external catalog API.
//!
//! Wraps `reqwest::Client` with envelope unwrapping and typed error
//! mapping. Detail fetches are sequential and every request carries the
//! configured timeout bound.

use anyhow::Context;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::UpstreamConfig;
use crate::contract::model::{NewPerson, NewPlanet};
use crate::domain::error::UpstreamError;
use crate::domain::ports::UpstreamSource;
use crate::infra::upstream::dto::{
    DetailEnvelope, ListEnvelope, PersonProperties, PlanetProperties,
};

pub struct SwapiClient {
    http: reqwest::Client,
    base_url: Url,
    page: u32,
    limit: u32,
}

impl SwapiClient {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("invalid upstream base URL '{}'", config.base_url))?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("failed to build upstream HTTP client")?;
        Ok(Self::with_client(http, base_url, config.page, config.limit))
    }

    /// Construct from an existing `reqwest::Client`; the test seam.
    pub fn with_client(http: reqwest::Client, base_url: Url, page: u32, limit: u32) -> Self {
        Self {
            http,
            base_url,
            page,
            limit,
        }
    }

    fn listing_url(&self, resource: &str) -> Result<Url, UpstreamError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                UpstreamError::unavailable(self.base_url.as_str(), "base URL cannot be a base")
            })?
            .push(resource);
        url.query_pairs_mut()
            .append_pair("page", &self.page.to_string())
            .append_pair("limit", &self.limit.to_string());
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, UpstreamError> {
        debug!(%url, "Fetching upstream resource");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify_transport_error(&url, &e))?;

        let response = response
            .error_for_status()
            .map_err(|e| UpstreamError::unavailable(url.as_str(), e.to_string()))?;

        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                UpstreamError::timeout(url.as_str())
            } else if e.is_decode() {
                UpstreamError::schema(url.as_str(), e.to_string())
            } else {
                UpstreamError::unavailable(url.as_str(), e.to_string())
            }
        })
    }

    /// Fetch one listing page, then every item's detail record in order.
    async fn fetch_page<P: DeserializeOwned>(
        &self,
        resource: &str,
    ) -> Result<Vec<P>, UpstreamError> {
        let listing: ListEnvelope = self.get_json(self.listing_url(resource)?).await?;

        let mut properties = Vec::with_capacity(listing.results.len());
        for item in listing.results {
            let url = Url::parse(&item.url).map_err(|e| {
                UpstreamError::schema(&item.url, format!("invalid detail url: {e}"))
            })?;
            let detail: DetailEnvelope<P> = self.get_json(url).await?;
            properties.push(detail.result.properties);
        }
        Ok(properties)
    }
}

fn classify_transport_error(url: &Url, err: &reqwest::Error) -> UpstreamError {
    if err.is_timeout() {
        UpstreamError::timeout(url.as_str())
    } else {
        UpstreamError::unavailable(url.as_str(), err.to_string())
    }
}

#[async_trait]
impl UpstreamSource for SwapiClient {
    async fn fetch_people(&self) -> Result<Vec<NewPerson>, UpstreamError> {
        let page: Vec<PersonProperties> = self.fetch_page("people").await?;
        Ok(page
            .into_iter()
            .map(|p| NewPerson {
                name: p.name,
                height: p.height,
                mass: p.mass,
                gender: p.gender,
                birth_year: p.birth_year,
            })
            .collect())
    }

    async fn fetch_planets(&self) -> Result<Vec<NewPlanet>, UpstreamError> {
        let page: Vec<PlanetProperties> = self.fetch_page("planets").await?;
        Ok(page
            .into_iter()
            .map(|p| NewPlanet {
                name: p.name,
                climate: p.climate,
                population: p.population,
                terrain: p.terrain,
            })
            .collect())
    }
}

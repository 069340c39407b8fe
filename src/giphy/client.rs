use std::time::Duration;

use anyhow::{Error, Result};

use super::models::{GiphyClip, GiphyResponse};
use crate::query::prepare_search_query;

#[derive(Clone, Debug)]
pub struct GiphyClient {
    api_hostname: String,
    api_key: String,
}

impl GiphyClient {
    pub fn new(api_hostname: &str, api_key: &str) -> Self {
        Self {
            api_hostname: api_hostname.trim_end_matches("/").to_string(),
            api_key: api_key.to_string(),
        }
    }

    async fn get_clips(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<GiphyClip>, Error> {
        let url = format!("{}/v1/gifs/{}", self.api_hostname, endpoint);
        let resp: GiphyResponse = reqwest::Client::new()
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .timeout(Duration::from_secs(10))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(resp.data)
    }

    /// Search for clips matching `query`. The query can be any length,
    /// it's compressed to fit the API's query limit before sending.
    pub async fn search_film_clips(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<GiphyClip>, Error> {
        self.search_clips(&prepare_search_query(query), limit)
            .await
    }

    /// Search with a query that has already been prepared. It's sent
    /// exactly as given.
    pub async fn search_clips(
        &self,
        search_query: &str,
        limit: usize,
    ) -> Result<Vec<GiphyClip>, Error> {
        tracing::info!("Searching Giphy with query: {:?}", search_query);

        self.get_clips(
            "search",
            &[("q", search_query.to_string()), ("limit", limit.to_string())],
        )
        .await
    }

    pub async fn trending_film_clips(&self, limit: usize) -> Result<Vec<GiphyClip>, Error> {
        self.get_clips("trending", &[("limit", limit.to_string())])
            .await
    }
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;

use crate::error::Result;

/// Raw item record as served by `/v0/item/{id}.json`.
///
/// The live API omits fields freely (deleted items, job postings), so
/// everything beyond the id is optional or defaulted.
#[derive(Debug, Clone, Deserialize)]
pub struct Item {
    pub id: i64,
    pub title: Option<String>,
    pub by: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub time: i64,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub descendants: i64,
}

/// Upstream contract the aggregation service is written against.
#[async_trait]
pub trait HackerNewsApi: Send + Sync {
    /// Ids of the current best stories, most popular first.
    async fn best_story_ids(&self) -> Result<Vec<i64>>;

    /// Full record for a single item. `None` means the id does not
    /// resolve upstream (deleted or never assigned), which is distinct
    /// from a transport failure.
    async fn item(&self, id: i64) -> Result<Option<Item>>;
}

/// Reqwest-backed client for the Hacker News Firebase API.
pub struct HnClient {
    client: Client,
    base_url: String,
}

impl HnClient {
    pub fn new(base_url: &str) -> Self {
        // Pooled client, reused across all requests
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl HackerNewsApi for HnClient {
    async fn best_story_ids(&self) -> Result<Vec<i64>> {
        let url = format!("{}/v0/beststories.json", self.base_url);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let ids = response.json::<Vec<i64>>().await?;
        Ok(ids)
    }

    async fn item(&self, id: i64) -> Result<Option<Item>> {
        let url = format!("{}/v0/item/{}.json", self.base_url, id);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        // The API answers `null` (not 404) for ids that do not resolve
        let item = response.json::<Option<Item>>().await?;
        Ok(item)
    }
}

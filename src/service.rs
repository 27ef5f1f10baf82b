use std::sync::Arc;

use futures::future::try_join_all;

use crate::api::models::Story;
use crate::cache::ItemCache;
use crate::error::Result;
use crate::hn_client::{HackerNewsApi, Item};

/// Aggregates the best stories from the upstream API through the item cache.
pub struct StoryService {
    api: Arc<dyn HackerNewsApi>,
    cache: Arc<ItemCache>,
}

impl StoryService {
    pub fn new(api: Arc<dyn HackerNewsApi>, cache: Arc<ItemCache>) -> Self {
        Self { api, cache }
    }

    /// The top `count` best stories, highest score first.
    ///
    /// `count` is assumed to have been validated at the API boundary
    /// (positive and at most 500); this method resolves whatever it is
    /// handed. If upstream ranks fewer than `count` stories, all of them
    /// are returned. Any upstream failure fails the whole call; no
    /// partial list is ever returned.
    pub async fn top_stories(&self, count: usize) -> Result<Vec<Story>> {
        tracing::info!(count, "getting the best stories");

        let ids = self.api.best_story_ids().await?;

        // One in-flight resolution per selected id, joined before the
        // transform; the first failure aborts the lot.
        let fetches = ids
            .into_iter()
            .take(count)
            .map(|id| self.resolve_item(id));
        let items = try_join_all(fetches).await?;

        // Ids that no longer resolve upstream are dropped
        let mut stories: Vec<Story> = items.into_iter().flatten().map(Story::from).collect();

        // Stable sort: equal scores keep upstream ranking order
        stories.sort_by(|a, b| b.score.cmp(&a.score));

        Ok(stories)
    }

    /// Cache-first resolution of a single item. A hit never touches
    /// upstream; a miss fetches and populates the cache.
    async fn resolve_item(&self, id: i64) -> Result<Option<Item>> {
        if let Some(item) = self.cache.get(id) {
            return Ok(Some(item));
        }

        let item = self.api.item(id).await?;
        if let Some(item) = &item {
            self.cache.insert(id, item.clone());
        }

        Ok(item)
    }
}

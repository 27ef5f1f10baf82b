use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use hacker_news_proxy::error::{AppError, Result};
use hacker_news_proxy::hn_client::{HackerNewsApi, Item};

/// Scripted stand-in for the Hacker News API. Serves canned responses and
/// records every item fetch, so tests can assert which ids hit upstream.
pub struct ScriptedApi {
    ids: Vec<i64>,
    items: HashMap<i64, Item>,
    fail_list: bool,
    fail_items: bool,
    list_calls: Mutex<usize>,
    item_calls: Mutex<Vec<i64>>,
}

impl ScriptedApi {
    pub fn new(ids: Vec<i64>, items: Vec<Item>) -> Self {
        Self {
            ids,
            items: items.into_iter().map(|i| (i.id, i)).collect(),
            fail_list: false,
            fail_items: false,
            list_calls: Mutex::new(0),
            item_calls: Mutex::new(Vec::new()),
        }
    }

    /// An upstream whose ranked-id listing always fails.
    pub fn failing_list() -> Self {
        Self {
            fail_list: true,
            ..Self::new(Vec::new(), Vec::new())
        }
    }

    /// An upstream that lists `ids` but fails every item fetch.
    pub fn failing_items(ids: Vec<i64>) -> Self {
        Self {
            fail_items: true,
            ..Self::new(ids, Vec::new())
        }
    }

    /// Ids fetched from upstream so far, in call order.
    pub fn item_calls(&self) -> Vec<i64> {
        self.item_calls.lock().unwrap().clone()
    }

    /// How many times the ranked-id listing was requested.
    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }
}

#[async_trait]
impl HackerNewsApi for ScriptedApi {
    async fn best_story_ids(&self) -> Result<Vec<i64>> {
        *self.list_calls.lock().unwrap() += 1;
        if self.fail_list {
            return Err(AppError::Upstream("scripted list failure".to_string()));
        }
        Ok(self.ids.clone())
    }

    async fn item(&self, id: i64) -> Result<Option<Item>> {
        self.item_calls.lock().unwrap().push(id);
        if self.fail_items {
            return Err(AppError::Upstream("scripted item failure".to_string()));
        }
        Ok(self.items.get(&id).cloned())
    }
}

pub fn item(id: i64, score: i64) -> Item {
    Item {
        id,
        title: Some(format!("story {id}")),
        by: Some("pg".to_string()),
        url: Some(format!("https://example.com/{id}")),
        time: 1_700_000_000,
        score,
        descendants: 10,
    }
}

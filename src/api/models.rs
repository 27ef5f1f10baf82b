use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::hn_client::Item;

#[derive(Deserialize)]
pub struct TopStoriesParams {
    pub top: i64,
}

/// Wire shape for a single story.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub title: Option<String>,
    pub uri: Option<String>,
    pub posted_by: Option<String>,
    pub time: Option<DateTime<Utc>>,
    pub score: i64,
    pub comment_count: i64,
}

impl From<Item> for Story {
    fn from(item: Item) -> Self {
        Story {
            title: item.title,
            uri: item.url,
            posted_by: item.by,
            time: DateTime::from_timestamp(item.time, 0),
            score: item.score,
            comment_count: item.descendants,
        }
    }
}

//! Search query and result data models

use crate::config::QueryStrategy;
use serde::{Deserialize, Serialize};

/// Query sent upstream for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Game name as given by the caller
    pub game: String,
    /// Domain the results are restricted to
    pub site: String,
    /// How the query string is phrased
    pub strategy: QueryStrategy,
}

impl SearchQuery {
    pub fn new(game: impl Into<String>, site: impl Into<String>, strategy: QueryStrategy) -> Self {
        Self {
            game: game.into(),
            site: site.into(),
            strategy,
        }
    }

    /// Render the provider query string
    pub fn to_query_string(&self) -> String {
        match self.strategy {
            QueryStrategy::SiteRestrictionOnly => format!("{} site:{}", self.game, self.site),
            QueryStrategy::SiteRestrictionWithGuideKeyword => {
                format!("site:{} \"{} guide\"", self.site, self.game)
            }
        }
    }
}

/// A single simplified search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

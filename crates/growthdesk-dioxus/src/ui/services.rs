use std::sync::Arc;

use growthdesk_config::{Config, Databases};
use growthdesk_engine::blocks::Block;
use growthdesk_engine::records::{Experiment, NewsletterPost, Prompt, Review, Term, Tool};
use growthdesk_engine::sources::{self, HypothesisSuggestion, NotionClient};

/// Shared fetch handles, provided to the component tree via context.
///
/// Every method degrades to an empty result when the relevant source is not
/// configured, so pages render their "no data" state instead of failing.
#[derive(Clone)]
pub struct Services {
    notion: Option<Arc<NotionClient>>,
    http: reqwest::Client,
    config: Config,
}

impl Services {
    pub fn new(config: Config) -> Services {
        let notion = config
            .notion_api_key
            .as_ref()
            .map(|key| Arc::new(NotionClient::new(key.clone())));

        Services {
            notion,
            http: reqwest::Client::new(),
            config,
        }
    }

    pub async fn experiments(&self) -> Vec<Experiment> {
        match self.database(|d| &d.experiments) {
            Some((notion, db)) => notion.experiments(&db).await,
            None => Vec::new(),
        }
    }

    pub async fn reviews(&self) -> Vec<Review> {
        match self.database(|d| &d.reviews) {
            Some((notion, db)) => notion.reviews(&db).await,
            None => Vec::new(),
        }
    }

    /// Newsletter rows curated in the workspace, used on the dashboard.
    pub async fn newsletter_highlights(&self) -> Vec<NewsletterPost> {
        match self.database(|d| &d.newsletter) {
            Some((notion, db)) => notion.newsletter_posts(&db).await,
            None => Vec::new(),
        }
    }

    /// Published posts from the newsletter feed, used on the newsletter page.
    pub async fn newsletter_feed(&self) -> Vec<NewsletterPost> {
        sources::fetch_posts(&self.http, &self.config.substack_feed_url).await
    }

    pub async fn terms(&self) -> Vec<Term> {
        match self.database(|d| &d.knowledge) {
            Some((notion, db)) => notion.terms(&db).await,
            None => Vec::new(),
        }
    }

    pub async fn tools(&self) -> Vec<Tool> {
        match self.database(|d| &d.tools) {
            Some((notion, db)) => notion.tools(&db).await,
            None => Vec::new(),
        }
    }

    pub async fn prompts(&self) -> Vec<Prompt> {
        match self.database(|d| &d.prompts) {
            Some((notion, db)) => notion.prompts(&db).await,
            None => Vec::new(),
        }
    }

    pub async fn experiment(&self, page_id: &str) -> Option<Experiment> {
        match &self.notion {
            Some(notion) => notion.experiment(page_id).await,
            None => None,
        }
    }

    pub async fn review(&self, page_id: &str) -> Option<Review> {
        match &self.notion {
            Some(notion) => notion.review(page_id).await,
            None => None,
        }
    }

    pub async fn term(&self, page_id: &str) -> Option<Term> {
        match &self.notion {
            Some(notion) => notion.term(page_id).await,
            None => None,
        }
    }

    pub async fn prompt(&self, page_id: &str) -> Option<Prompt> {
        match &self.notion {
            Some(notion) => notion.prompt(page_id).await,
            None => None,
        }
    }

    pub async fn page_blocks(&self, page_id: &str) -> Vec<Block> {
        match &self.notion {
            Some(notion) => notion.page_blocks(page_id).await,
            None => Vec::new(),
        }
    }

    pub async fn suggest_hypothesis(&self, problem: &str) -> Option<HypothesisSuggestion> {
        sources::suggest_hypothesis(&self.http, self.config.gemini_api_key.as_deref(), problem)
            .await
    }

    fn database(
        &self,
        pick: fn(&Databases) -> &Option<String>,
    ) -> Option<(Arc<NotionClient>, String)> {
        let notion = self.notion.clone()?;
        let database_id = pick(&self.config.databases).clone()?;
        Some((notion, database_id))
    }
}

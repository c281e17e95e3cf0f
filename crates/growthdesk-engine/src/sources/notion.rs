//! Workspace document API client.

use std::future::Future;
use std::pin::Pin;

use serde_json::{Value, json};

use super::SourceError;
use crate::blocks::Block;
use crate::records::{Experiment, NewsletterPost, Prompt, Review, Term, Tool};

const API_BASE: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";
const PAGE_SIZE: u32 = 100;

pub struct NotionClient {
    http: reqwest::Client,
    token: String,
}

impl NotionClient {
    pub fn new(token: impl Into<String>) -> NotionClient {
        NotionClient {
            http: reqwest::Client::new(),
            token: token.into(),
        }
    }

    pub async fn experiments(&self, database_id: &str) -> Vec<Experiment> {
        self.database_rows(database_id, "experiments", Experiment::from_page)
            .await
    }

    pub async fn reviews(&self, database_id: &str) -> Vec<Review> {
        self.database_rows(database_id, "reviews", Review::from_page)
            .await
    }

    pub async fn newsletter_posts(&self, database_id: &str) -> Vec<NewsletterPost> {
        self.database_rows(database_id, "newsletter", NewsletterPost::from_page)
            .await
    }

    pub async fn terms(&self, database_id: &str) -> Vec<Term> {
        self.database_rows(database_id, "terms", Term::from_page)
            .await
    }

    pub async fn tools(&self, database_id: &str) -> Vec<Tool> {
        self.database_rows(database_id, "tools", Tool::from_page)
            .await
    }

    pub async fn prompts(&self, database_id: &str) -> Vec<Prompt> {
        self.database_rows(database_id, "prompts", Prompt::from_page)
            .await
    }

    pub async fn experiment(&self, page_id: &str) -> Option<Experiment> {
        Some(Experiment::from_page(&self.page(page_id).await?))
    }

    pub async fn review(&self, page_id: &str) -> Option<Review> {
        Some(Review::from_page(&self.page(page_id).await?))
    }

    pub async fn term(&self, page_id: &str) -> Option<Term> {
        Some(Term::from_page(&self.page(page_id).await?))
    }

    pub async fn prompt(&self, page_id: &str) -> Option<Prompt> {
        Some(Prompt::from_page(&self.page(page_id).await?))
    }

    /// Fetch a page's full block tree. Children are fetched recursively for
    /// blocks that report them, so the renderer receives assembled trees.
    pub async fn page_blocks(&self, page_id: &str) -> Vec<Block> {
        match self.block_children(page_id).await {
            Ok(blocks) => blocks,
            Err(e) => {
                log::error!("Error fetching blocks for page {page_id}: {e}");
                Vec::new()
            }
        }
    }

    async fn database_rows<T>(
        &self,
        database_id: &str,
        label: &str,
        map: fn(&Value) -> T,
    ) -> Vec<T> {
        match self.query_database(database_id).await {
            Ok(pages) => pages.iter().map(map).collect(),
            Err(e) => {
                log::error!("Error fetching {label}: {e}");
                Vec::new()
            }
        }
    }

    async fn query_database(&self, database_id: &str) -> Result<Vec<Value>, SourceError> {
        let mut pages = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut body = json!({ "page_size": PAGE_SIZE });
            if let Some(cursor) = &cursor {
                body["start_cursor"] = json!(cursor);
            }

            let response = self
                .http
                .post(format!("{API_BASE}/databases/{database_id}/query"))
                .bearer_auth(&self.token)
                .header("Notion-Version", NOTION_VERSION)
                .json(&body)
                .send()
                .await?;
            if !response.status().is_success() {
                return Err(SourceError::Status(response.status()));
            }

            let payload: Value = response.json().await?;
            if let Some(results) = payload["results"].as_array() {
                pages.extend(results.iter().cloned());
            }

            match next_cursor(&payload) {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        Ok(pages)
    }

    async fn page(&self, page_id: &str) -> Option<Value> {
        match self.get_json(&format!("{API_BASE}/pages/{page_id}")).await {
            Ok(page) => Some(page),
            Err(e) => {
                log::error!("Error fetching page {page_id}: {e}");
                None
            }
        }
    }

    fn block_children<'a>(
        &'a self,
        block_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Block>, SourceError>> + Send + 'a>> {
        // Boxed so the recursion into child blocks has a sized future type.
        Box::pin(async move {
            let mut blocks = Vec::new();
            let mut cursor: Option<String> = None;

            loop {
                let mut url = format!("{API_BASE}/blocks/{block_id}/children?page_size={PAGE_SIZE}");
                if let Some(cursor) = &cursor {
                    url.push_str("&start_cursor=");
                    url.push_str(cursor);
                }

                let payload = self.get_json(&url).await?;
                if let Some(results) = payload["results"].as_array() {
                    blocks.extend(results.iter().map(Block::from_json));
                }

                match next_cursor(&payload) {
                    Some(next) => cursor = Some(next),
                    None => break,
                }
            }

            for block in &mut blocks {
                if block.has_children {
                    block.children = self.block_children(&block.id).await?;
                }
            }

            Ok(blocks)
        })
    }

    async fn get_json(&self, url: &str) -> Result<Value, SourceError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SourceError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}

fn next_cursor(payload: &Value) -> Option<String> {
    if !payload["has_more"].as_bool().unwrap_or(false) {
        return None;
    }
    payload["next_cursor"].as_str().map(str::to_string)
}

use reqwest::Client;

use super::SourceError;
use crate::feed;
use crate::records::NewsletterPost;

/// Fetch the feed document and extract post summaries.
///
/// Transport failures and non-success responses are logged and yield an
/// empty list.
pub async fn fetch_posts(http: &Client, feed_url: &str) -> Vec<NewsletterPost> {
    match fetch_feed(http, feed_url).await {
        Ok(xml) => feed::posts_from_xml(&xml),
        Err(e) => {
            log::error!("Error fetching feed {feed_url}: {e}");
            Vec::new()
        }
    }
}

async fn fetch_feed(http: &Client, feed_url: &str) -> Result<String, SourceError> {
    let response = http.get(feed_url).send().await?;
    if !response.status().is_success() {
        return Err(SourceError::Status(response.status()));
    }
    Ok(response.text().await?)
}

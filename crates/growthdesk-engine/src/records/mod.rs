//! Typed rows for the workspace databases.
//!
//! Each record has a `from_page` mapper over the API's page-property JSON.
//! The accessors mirror the API's property shapes (title, rich_text, select,
//! multi_select, files, url, date) and degrade to empty values when a
//! property is missing or renamed.

use std::fmt;

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperimentStatus {
    Running,
    Success,
    Failed,
    Inconclusive,
}

impl ExperimentStatus {
    pub fn parse(name: &str) -> ExperimentStatus {
        match name {
            "Running" => ExperimentStatus::Running,
            "Success" => ExperimentStatus::Success,
            "Failed" => ExperimentStatus::Failed,
            _ => ExperimentStatus::Inconclusive,
        }
    }
}

impl fmt::Display for ExperimentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExperimentStatus::Running => "Running",
            ExperimentStatus::Success => "Success",
            ExperimentStatus::Failed => "Failed",
            ExperimentStatus::Inconclusive => "Inconclusive",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Video,
    Podcast,
    Article,
    Book,
}

impl ContentType {
    pub fn parse(name: &str) -> ContentType {
        match name {
            "Video" => ContentType::Video,
            "Podcast" => ContentType::Podcast,
            "Book" => ContentType::Book,
            _ => ContentType::Article,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentType::Video => "Video",
            ContentType::Podcast => "Podcast",
            ContentType::Article => "Article",
            ContentType::Book => "Book",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Price {
    Free,
    Freemium,
    Paid,
}

impl Price {
    pub fn parse(name: &str) -> Price {
        match name {
            "Freemium" => Price::Freemium,
            "Paid" => Price::Paid,
            _ => Price::Free,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Price::Free => "Free",
            Price::Freemium => "Freemium",
            Price::Paid => "Paid",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Experiment {
    pub id: String,
    pub title: String,
    pub problem: String,
    pub hypothesis: String,
    pub status: ExperimentStatus,
    pub metric: String,
    pub result_summary: String,
    pub date: String,
}

impl Experiment {
    pub fn from_page(page: &Value) -> Experiment {
        let props = &page["properties"];
        Experiment {
            id: page_id(page),
            title: title_text(props, "Name"),
            problem: rich_text_plain(props, "Problem"),
            hypothesis: rich_text_plain(props, "Hypothesis"),
            status: ExperimentStatus::parse(&select_name(props, "Status")),
            metric: rich_text_plain(props, "Metric"),
            result_summary: rich_text_plain(props, "Result Summary"),
            date: date_start(props, "Date"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    pub title: String,
    pub author: String,
    pub rating: u8,
    pub takeaways: Vec<String>,
    pub kind: ContentType,
    pub tags: Vec<String>,
    pub url: String,
    pub cover_image: String,
}

impl Review {
    pub fn from_page(page: &Value) -> Review {
        let props = &page["properties"];
        Review {
            id: page_id(page),
            title: title_text(props, "Title"),
            author: rich_text_plain(props, "Author"),
            rating: props["Rating"]["number"].as_u64().unwrap_or(0).min(5) as u8,
            takeaways: multi_select(props, "Takeaways"),
            kind: ContentType::parse(&select_name(props, "Type")),
            tags: multi_select(props, "Tags"),
            url: url_value(props, "URL", "#"),
            cover_image: first_file_url(props, "Cover Image"),
        }
    }
}

/// One newsletter post, whether it came from the feed extractor or from the
/// workspace newsletter database.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsletterPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub read_time_minutes: u32,
    pub image_url: String,
    pub categories: Vec<String>,
    pub url: String,
}

impl NewsletterPost {
    pub fn from_page(page: &Value) -> NewsletterPost {
        let props = &page["properties"];
        NewsletterPost {
            id: page_id(page),
            title: title_text(props, "Title"),
            excerpt: rich_text_plain(props, "Excerpt"),
            date: date_start(props, "Date"),
            // Database rows carry no body to measure, so they keep a fixed
            // read time.
            read_time_minutes: 5,
            image_url: first_file_url(props, "Cover Image"),
            categories: multi_select(props, "Category"),
            url: match props["URL"]["url"].as_str() {
                Some(url) => url.to_string(),
                None => page["url"].as_str().unwrap_or("").to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub id: String,
    pub term: String,
    pub definition: String,
    pub category: String,
    pub formula: String,
    pub long_description: String,
}

impl Term {
    pub fn from_page(page: &Value) -> Term {
        let props = &page["properties"];
        Term {
            id: page_id(page),
            term: title_text(props, "Term"),
            definition: rich_text_plain(props, "Definition"),
            category: select_name_or(props, "Category", "General"),
            formula: rich_text_plain(props, "Formula"),
            long_description: rich_text_plain(props, "Long Description"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub url: String,
    pub icon_url: String,
    pub price: Price,
}

impl Tool {
    pub fn from_page(page: &Value) -> Tool {
        let props = &page["properties"];
        Tool {
            id: page_id(page),
            name: title_text(props, "Name"),
            description: rich_text_plain(props, "Description"),
            category: select_name_or(props, "Category", "General"),
            url: url_value(props, "URL", "#"),
            icon_url: first_file_url(props, "Icon"),
            price: Price::parse(&select_name(props, "Price")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub id: String,
    pub title: String,
    pub category: String,
    pub tags: Vec<String>,
}

impl Prompt {
    pub fn from_page(page: &Value) -> Prompt {
        let props = &page["properties"];
        Prompt {
            id: page_id(page),
            title: title_text(props, "Title"),
            category: select_name_or(props, "Category", "General"),
            tags: multi_select(props, "Tags"),
        }
    }
}

fn page_id(page: &Value) -> String {
    page["id"].as_str().unwrap_or("").to_string()
}

fn title_text(props: &Value, name: &str) -> String {
    match props[name]["title"][0]["plain_text"].as_str() {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => "Untitled".to_string(),
    }
}

fn rich_text_plain(props: &Value, name: &str) -> String {
    props[name]["rich_text"]
        .as_array()
        .map(|spans| {
            spans
                .iter()
                .filter_map(|span| span["plain_text"].as_str())
                .collect()
        })
        .unwrap_or_default()
}

fn select_name(props: &Value, name: &str) -> String {
    props[name]["select"]["name"]
        .as_str()
        .unwrap_or("")
        .to_string()
}

fn select_name_or(props: &Value, name: &str, fallback: &str) -> String {
    match props[name]["select"]["name"].as_str() {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => fallback.to_string(),
    }
}

fn multi_select(props: &Value, name: &str) -> Vec<String> {
    props[name]["multi_select"]
        .as_array()
        .map(|options| {
            options
                .iter()
                .filter_map(|option| option["name"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn url_value(props: &Value, name: &str, fallback: &str) -> String {
    props[name]["url"].as_str().unwrap_or(fallback).to_string()
}

fn date_start(props: &Value, name: &str) -> String {
    props[name]["date"]["start"]
        .as_str()
        .unwrap_or("")
        .to_string()
}

/// Files properties hold either hosted or external entries; take the first
/// URL present.
fn first_file_url(props: &Value, name: &str) -> String {
    let file = &props[name]["files"][0];
    file["file"]["url"]
        .as_str()
        .or_else(|| file["external"]["url"].as_str())
        .unwrap_or("")
        .to_string()
}

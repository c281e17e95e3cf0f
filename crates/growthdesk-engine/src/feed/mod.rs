//! Feed extraction.
//!
//! The newsletter feed is a tag-delimited document whose items inconsistently
//! shield their content in CDATA sections, so field extraction tries the
//! shielded form first and falls back to the plain tag. This is pattern
//! matching, not a structural parser; anything that does not match yields an
//! empty field rather than an error.

use std::sync::OnceLock;

use regex::Regex;

use crate::records::NewsletterPost;

/// One `<item>` unit of the feed, pre-normalization.
///
/// `categories` is `None` when no category tags were present at all; callers
/// treat that the same as an empty list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub pub_date: String,
    pub content_encoded: String,
    pub description: String,
    pub guid: String,
    pub categories: Option<Vec<String>>,
}

fn item_regex() -> &'static Regex {
    static ITEM: OnceLock<Regex> = OnceLock::new();
    ITEM.get_or_init(|| Regex::new(r"(?s)<item>(.*?)</item>").expect("Invalid item regex"))
}

fn category_regex() -> &'static Regex {
    static CATEGORY: OnceLock<Regex> = OnceLock::new();
    CATEGORY.get_or_init(|| {
        Regex::new(r"<category>(.*?)</category>").expect("Invalid category regex")
    })
}

fn tag_strip_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"))
}

fn image_regex() -> &'static Regex {
    static IMAGE: OnceLock<Regex> = OnceLock::new();
    IMAGE.get_or_init(|| Regex::new(r#"<img[^>]+src="([^">]+)""#).expect("Invalid image regex"))
}

/// Scan the document for `<item>` units, non-overlapping, in document order.
pub fn parse_items(xml: &str) -> Vec<FeedItem> {
    item_regex()
        .captures_iter(xml)
        .map(|captures| {
            let body = captures.get(1).map(|m| m.as_str()).unwrap_or("");

            let categories: Vec<String> = category_regex()
                .captures_iter(body)
                .map(|c| c[1].to_string())
                .collect();

            FeedItem {
                title: extract_tag(body, "title"),
                link: extract_tag(body, "link"),
                pub_date: extract_tag(body, "pubDate"),
                content_encoded: extract_tag(body, "content:encoded"),
                description: extract_tag(body, "description"),
                guid: extract_tag(body, "guid"),
                categories: if categories.is_empty() {
                    None
                } else {
                    Some(categories)
                },
            }
        })
        .collect()
}

/// Extract one named field from an item body.
///
/// The CDATA-shielded form wins when present and its content is taken
/// verbatim; the plain form is the fallback and gets trimmed. Feeds mix both
/// stylings between items, so the order matters.
pub fn extract_tag(content: &str, tag: &str) -> String {
    let tag = regex::escape(tag);

    let shielded = Regex::new(&format!(
        r"(?s)<{tag}(?:[^>]*)><!\[CDATA\[(.*?)\]\]></{tag}>"
    ))
    .expect("Invalid shielded tag regex");
    if let Some(captures) = shielded.captures(content) {
        return captures[1].to_string();
    }

    let plain = Regex::new(&format!(r"(?s)<{tag}(?:[^>]*)>(.*?)</{tag}>"))
        .expect("Invalid plain tag regex");
    plain
        .captures(content)
        .map(|captures| captures[1].trim().to_string())
        .unwrap_or_default()
}

/// Remove markup tags and decode the handful of named entities the feed
/// actually emits.
pub fn strip_html(html: &str) -> String {
    tag_strip_regex()
        .replace_all(html, "")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .trim()
        .to_string()
}

/// First embedded image reference, or empty if none.
pub fn first_image_url(html: &str) -> String {
    image_regex()
        .captures(html)
        .map(|captures| captures[1].to_string())
        .unwrap_or_default()
}

/// Format a raw publication date as e.g. `Mar 5, 2024`. Empty stays empty;
/// an unparseable value falls through as-is.
pub fn format_display_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    if let Ok(date) = chrono::DateTime::parse_from_rfc2822(raw) {
        return date.format("%b %-d, %Y").to_string();
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %-d, %Y").to_string();
    }
    raw.trim().to_string()
}

/// Approximate reading time at 200 words per minute, rounded up, never less
/// than one minute.
pub fn read_time_minutes(content: &str) -> u32 {
    let text = strip_html(content);
    let words = text.split_whitespace().count();
    words.div_ceil(200).max(1) as u32
}

// The excerpt is truncated to 250 characters and the ellipsis is appended
// even when the source was already shorter. Downstream copy relies on the
// trailing ellipsis, so it stays unconditional.
fn excerpt(description: &str) -> String {
    let text = strip_html(description);
    let truncated: String = text.chars().take(250).collect();
    format!("{truncated}...")
}

/// Normalize a whole feed document into post summaries, one per item, in
/// document order.
pub fn posts_from_xml(xml: &str) -> Vec<NewsletterPost> {
    parse_items(xml)
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let FeedItem {
                title,
                link,
                pub_date,
                content_encoded,
                description,
                guid,
                categories,
            } = item;

            // The encoded body is richer when present; measurement and image
            // scanning fall back to the description otherwise.
            let body = if content_encoded.is_empty() {
                description.as_str()
            } else {
                content_encoded.as_str()
            };
            let read_time_minutes = read_time_minutes(body);
            let image_url = first_image_url(body);

            NewsletterPost {
                id: if guid.is_empty() {
                    format!("substack-{index}")
                } else {
                    guid
                },
                title: if title.is_empty() {
                    "Untitled".to_string()
                } else {
                    title
                },
                excerpt: excerpt(&description),
                date: format_display_date(&pub_date),
                read_time_minutes,
                image_url,
                categories: categories.unwrap_or_default(),
                url: link,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn item(body: &str) -> String {
        format!("<item>{body}</item>")
    }

    #[test]
    fn empty_document_yields_no_items() {
        assert_eq!(parse_items(""), Vec::new());
        assert_eq!(posts_from_xml(""), Vec::new());
    }

    #[test]
    fn items_come_out_in_document_order() {
        let xml = [
            item("<title>first</title>"),
            item("<title>second</title>"),
            item("<title>third</title>"),
        ]
        .concat();

        let titles: Vec<String> = parse_items(&xml).into_iter().map(|i| i.title).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn shielded_content_wins_over_plain() {
        let body = "<title><![CDATA[Shielded <b>title</b>]]></title>";
        assert_eq!(extract_tag(body, "title"), "Shielded <b>title</b>");

        // Plain form is the fallback and gets trimmed.
        let body = "<title>\n  Plain title\n</title>";
        assert_eq!(extract_tag(body, "title"), "Plain title");
    }

    #[test]
    fn tag_attributes_are_tolerated() {
        let body = r#"<guid isPermaLink="false">abc-123</guid>"#;
        assert_eq!(extract_tag(body, "guid"), "abc-123");
    }

    #[test]
    fn missing_tag_yields_empty_field() {
        assert_eq!(extract_tag("<title>x</title>", "description"), "");
    }

    #[test]
    fn strip_html_decodes_the_fixed_entity_set() {
        assert_eq!(
            strip_html("<p>Hello &amp; welcome&nbsp;&lt;here&gt; &quot;now&quot;</p>"),
            "Hello & welcome <here> \"now\""
        );
    }

    #[test]
    fn excerpt_always_ends_with_ellipsis() {
        let xml = item("<description><![CDATA[<p>Hello &amp; welcome</p>]]></description>");
        let posts = posts_from_xml(&xml);
        assert_eq!(posts[0].excerpt, "Hello & welcome...");
    }

    #[test]
    fn excerpt_is_truncated_to_250_chars() {
        let long = "word ".repeat(200);
        let xml = item(&format!("<description>{long}</description>"));
        let posts = posts_from_xml(&xml);

        assert_eq!(posts[0].excerpt.chars().count(), 253);
        assert!(posts[0].excerpt.ends_with("..."));
    }

    #[test]
    fn missing_guid_gets_positional_fallback_id() {
        let xml = [
            item("<title>a</title><guid>g-0</guid>"),
            item("<title>b</title>"),
            item("<title>c</title><guid>g-2</guid>"),
        ]
        .concat();

        let ids: Vec<String> = posts_from_xml(&xml).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["g-0", "substack-1", "g-2"]);
    }

    #[test]
    fn categories_absent_and_empty_are_equivalent_downstream() {
        let with = item("<title>a</title><category>Growth</category><category>SEO</category>");
        let without = item("<title>b</title>");
        let xml = format!("{with}{without}");

        let items = parse_items(&xml);
        assert_eq!(
            items[0].categories,
            Some(vec!["Growth".to_string(), "SEO".to_string()])
        );
        assert_eq!(items[1].categories, None);

        let posts = posts_from_xml(&xml);
        assert_eq!(posts[0].categories, vec!["Growth", "SEO"]);
        assert_eq!(posts[1].categories, Vec::<String>::new());
    }

    #[rstest]
    #[case(1, 1)]
    #[case(200, 1)]
    #[case(201, 2)]
    #[case(400, 2)]
    #[case(401, 3)]
    fn read_time_rounds_up_at_200_wpm(#[case] words: usize, #[case] expected: u32) {
        let content = vec!["word"; words].join(" ");
        assert_eq!(read_time_minutes(&content), expected);
    }

    #[test]
    fn read_time_never_reports_zero() {
        assert_eq!(read_time_minutes(""), 1);
        assert_eq!(read_time_minutes("<p></p>"), 1);
    }

    #[test]
    fn first_image_comes_from_the_richer_body() {
        let xml = item(concat!(
            "<description><![CDATA[<img src=\"https://example.com/desc.png\">]]></description>",
            "<content:encoded><![CDATA[<p>intro</p><img width=\"600\" ",
            "src=\"https://example.com/body.png\"><img src=\"https://example.com/second.png\">]]>",
            "</content:encoded>",
        ));

        let posts = posts_from_xml(&xml);
        assert_eq!(posts[0].image_url, "https://example.com/body.png");
    }

    #[test]
    fn image_falls_back_to_description_when_no_encoded_body() {
        let xml = item(
            "<description><![CDATA[<img src=\"https://example.com/only.png\">]]></description>",
        );
        let posts = posts_from_xml(&xml);
        assert_eq!(posts[0].image_url, "https://example.com/only.png");
    }

    #[test]
    fn no_image_yields_empty_url() {
        let xml = item("<description>plain text</description>");
        assert_eq!(posts_from_xml(&xml)[0].image_url, "");
    }

    #[test]
    fn display_date_is_calendar_formatted() {
        assert_eq!(
            format_display_date("Tue, 05 Mar 2024 12:30:00 GMT"),
            "Mar 5, 2024"
        );
        assert_eq!(format_display_date(""), "");
        assert_eq!(format_display_date("not a date"), "not a date");
    }

    #[test]
    fn untitled_fallback_applies_per_item() {
        let xml = item("<guid>g</guid>");
        assert_eq!(posts_from_xml(&xml)[0].title, "Untitled");
    }

    #[test]
    fn full_item_round_trip() {
        let xml = item(concat!(
            "<title><![CDATA[Issue 12: Retention]]></title>",
            "<link>https://news.example.com/p/issue-12</link>",
            "<pubDate>Mon, 04 Nov 2024 09:00:00 GMT</pubDate>",
            "<guid isPermaLink=\"false\">issue-12</guid>",
            "<category>Retention</category>",
            "<description><![CDATA[<p>Why retention beats acquisition.</p>]]></description>",
            "<content:encoded><![CDATA[<p>Why retention beats acquisition, in depth.</p>]]></content:encoded>",
        ));

        let posts = posts_from_xml(&xml);
        assert_eq!(posts.len(), 1);
        let post = &posts[0];
        assert_eq!(post.id, "issue-12");
        assert_eq!(post.title, "Issue 12: Retention");
        assert_eq!(post.url, "https://news.example.com/p/issue-12");
        assert_eq!(post.date, "Nov 4, 2024");
        assert_eq!(post.excerpt, "Why retention beats acquisition....");
        assert_eq!(post.read_time_minutes, 1);
        assert_eq!(post.categories, vec!["Retention"]);
    }
}

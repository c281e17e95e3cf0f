use growthdesk_engine::feed::{parse_items, posts_from_xml};
use pretty_assertions::assert_eq;

fn fixture() -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/newsletter_feed.xml",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

#[test]
fn extracts_every_item_in_document_order() {
    let posts = posts_from_xml(&fixture());

    assert_eq!(posts.len(), 3);
    assert_eq!(
        posts.iter().map(|p| p.title.as_str()).collect::<Vec<_>>(),
        vec![
            "The retention flywheel nobody talks about",
            "A plain-text issue with no frills",
            "Pricing page teardown: 5 SaaS homepages",
        ]
    );
}

#[test]
fn mixed_cdata_and_plain_items_both_extract() {
    let items = parse_items(&fixture());

    // First item shields everything in CDATA, second is plain tags.
    assert_eq!(items[0].guid, "retention-flywheel");
    assert_eq!(items[1].guid, "");
    assert_eq!(items[1].title, "A plain-text issue with no frills");
    assert_eq!(
        items[1].description,
        "Short and sweet this week: three links worth your time."
    );
}

#[test]
fn item_without_guid_gets_positional_id() {
    let posts = posts_from_xml(&fixture());

    assert_eq!(posts[0].id, "retention-flywheel");
    assert_eq!(posts[1].id, "substack-1");
    assert_eq!(posts[2].id, "pricing-teardown");
}

#[test]
fn derived_fields_come_from_the_richer_body() {
    let posts = posts_from_xml(&fixture());

    // Image and read time are measured on content:encoded when present.
    assert_eq!(
        posts[0].image_url,
        "https://substackcdn.com/image/flywheel.png"
    );
    assert_eq!(posts[0].read_time_minutes, 1);

    // No encoded body on the second item, so the description is measured.
    assert_eq!(posts[1].image_url, "");
    assert_eq!(posts[1].read_time_minutes, 1);
}

#[test]
fn excerpts_decode_entities_and_end_with_ellipsis() {
    let posts = posts_from_xml(&fixture());

    // The source sentence already ends with a period; the ellipsis is
    // appended regardless.
    assert_eq!(
        posts[0].excerpt,
        "Most teams obsess over acquisition & forget that retention compounds. \
         Here is the loop we built last quarter...."
    );
    assert!(posts.iter().all(|p| p.excerpt.ends_with("...")));
    assert!(
        posts[2]
            .excerpt
            .starts_with("What \"simple pricing\" actually looks like")
    );
}

#[test]
fn dates_and_categories_are_normalized() {
    let posts = posts_from_xml(&fixture());

    assert_eq!(posts[0].date, "Nov 4, 2024");
    assert_eq!(posts[1].date, "Nov 12, 2024");
    assert_eq!(posts[0].categories, vec!["Retention", "Strategy"]);
    assert_eq!(posts[1].categories, Vec::<String>::new());
    assert_eq!(posts[2].categories, vec!["Conversion"]);
}

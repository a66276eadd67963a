use std::cell::RefCell;
use std::collections::VecDeque;

use rs_lede::{collect_excerpts, BatchOptions, Collector, Error, Result, Truncate};

const STORY: &str = "<html><body><h1>Story</h1>\
    <p>The library reopened on Monday after a year of renovations and repairs.</p></body></html>";

const OTHER: &str = "<html><body>\
    <p>Second story text that is long enough to pass the default threshold too.</p></body></html>";

fn queue(urls: &[&str]) -> VecDeque<String> {
    urls.iter().map(|u| (*u).to_string()).collect()
}

fn site(url: &str) -> Result<String> {
    match url {
        "https://a.example/" => Ok(STORY.to_string()),
        "https://c.example/" => Ok(OTHER.to_string()),
        "https://empty.example/" => Ok("<html><body>nothing</body></html>".to_string()),
        _ => Err(Error::Fetch {
            url: url.to_string(),
            reason: "connection refused".to_string(),
        }),
    }
}

#[test]
fn budget_limits_urls_consumed_and_failures_are_recorded() {
    let mut urls = queue(&["https://a.example/", "https://b.example/", "https://c.example/"]);

    let results = Collector::new(&site).collect(&mut urls, 2);

    assert_eq!(results.len(), 2);
    assert_eq!(
        results[0].as_deref(),
        Some("The library reopened on Monday after a year of renovations and repairs.")
    );
    assert_eq!(results[1], None);
    assert_eq!(urls, queue(&["https://c.example/"]));
}

#[test]
fn each_dequeued_url_is_fetched_exactly_once() {
    let seen = RefCell::new(Vec::new());
    let recording = |url: &str| -> Result<String> {
        seen.borrow_mut().push(url.to_string());
        site(url)
    };
    let mut urls = queue(&["https://b.example/", "https://a.example/", "https://c.example/"]);

    let results = Collector::new(&recording).collect(&mut urls, 3);

    assert_eq!(results.len(), 3);
    assert_eq!(
        seen.into_inner(),
        vec!["https://b.example/", "https://a.example/", "https://c.example/"]
    );
}

#[test]
fn sink_indices_count_only_successful_extractions() {
    let mut replies = Vec::new();
    let mut sink = |index: usize, text: &str, truncate: Truncate| {
        replies.push((index, truncate.apply(text).into_owned(), truncate));
    };
    let options = BatchOptions {
        truncate: Truncate::Chars(12),
        ..BatchOptions::default()
    };
    let mut urls = queue(&[
        "https://a.example/",
        "https://b.example/",
        "https://empty.example/",
        "https://c.example/",
    ]);

    let results = Collector::new(&site)
        .options(options)
        .sink(&mut sink)
        .collect(&mut urls, 10);

    assert_eq!(results.iter().filter(|r| r.is_some()).count(), 2);
    assert_eq!(results[2], None);
    assert_eq!(
        replies,
        vec![
            (1, "The library\u{2026}".to_string(), Truncate::Chars(12)),
            (2, "Second stor\u{2026}".to_string(), Truncate::Chars(12)),
        ]
    );
    assert!(urls.is_empty());
}

#[test]
fn empty_extraction_is_recorded_as_none() {
    let mut urls = queue(&["https://empty.example/"]);
    let results = collect_excerpts(&mut urls, 1, &BatchOptions::default(), &site, None);
    assert_eq!(results, vec![None]);
}

#[test]
fn collect_excerpts_forwards_options_and_sink() {
    let mut count = 0;
    let mut sink = |_: usize, _: &str, truncate: Truncate| {
        assert_eq!(truncate, Truncate::Line);
        count += 1;
    };
    let options = BatchOptions {
        truncate: Truncate::Line,
        ..BatchOptions::default()
    };
    let mut urls = queue(&["https://a.example/", "https://c.example/"]);

    let results = collect_excerpts(&mut urls, 2, &options, &site, Some(&mut sink));

    assert_eq!(results.len(), 2);
    assert_eq!(count, 2);
}

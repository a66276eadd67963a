use rs_lede::paragraph::first_paragraph_report;
use rs_lede::{
    first_paragraph, first_paragraph_with, Error, ExtractOptions, PlainTextRenderer, Result, Strip,
    Tier,
};

fn report(html: &str, options: &ExtractOptions) -> rs_lede::Excerpt {
    first_paragraph_report(html, options, &PlainTextRenderer::default())
}

#[test]
fn document_without_candidates_yields_empty_excerpt() {
    let html = "<html><head><title>Title</title></head>\
        <body><div>just some words in a plain div with no hints at all here</div></body></html>";

    let excerpt = report(html, &ExtractOptions::default());
    assert_eq!(excerpt.text, "");
    assert_eq!(excerpt.tier, None);
    assert_eq!(excerpt.min_spaces, 0);
}

#[test]
fn empty_document_yields_empty_excerpt() {
    assert_eq!(first_paragraph("", &ExtractOptions::default()), "");
    assert_eq!(first_paragraph("   \n\t", &ExtractOptions::default()), "");
}

#[test]
fn paragraph_after_heading_is_accepted_at_default_threshold() {
    let html = r#"<h1>Title</h1><p class="x">AAAA BBBB CCCC DDDD EEEE FFFF GGGG HHHH IIII</p>"#;

    let excerpt = report(html, &ExtractOptions::default());
    assert_eq!(excerpt.text, "AAAA BBBB CCCC DDDD EEEE FFFF GGGG HHHH IIII");
    assert_eq!(excerpt.tier, Some(Tier::Heading));
    assert_eq!(excerpt.min_spaces, 8);
}

#[test]
fn short_paragraph_is_accepted_after_relaxation() {
    let html = "<h1>Title</h1><p>one two three four</p>";

    let excerpt = report(html, &ExtractOptions::default());
    assert_eq!(excerpt.text, "one two three four");
    assert_eq!(excerpt.tier, Some(Tier::Heading));
    // 8 -> 4 -> 2: three spaces first satisfy a threshold of two.
    assert_eq!(excerpt.min_spaces, 2);
}

#[test]
fn zero_threshold_returns_first_paragraph_regardless_of_length() {
    let html = "<div><p>short</p>\
        <p>a much longer paragraph with plenty of words in it for sure</p></div>";
    let options = ExtractOptions {
        min_spaces: 0,
        ..ExtractOptions::default()
    };

    let excerpt = report(html, &options);
    assert_eq!(excerpt.text, "short");
    assert_eq!(excerpt.tier, Some(Tier::Paragraph));
}

#[test]
fn literal_strip_is_removed_before_measuring() {
    let html = "<p>Posted by admin: one two three four five six seven</p>";
    let options = ExtractOptions {
        strip: Some(Strip::literal("Posted by admin:")),
        ..ExtractOptions::default()
    };

    let excerpt = report(html, &options);
    assert_eq!(excerpt.text, "one two three four five six seven");
    // Unstripped the candidate has nine spaces and would pass at eight.
    assert_eq!(excerpt.min_spaces, 4);
}

#[test]
fn pattern_strip_removes_dateline() {
    let html = "<p>March 3, 2024 - City officials announced a new plan for the riverfront park today.</p>";
    let options = ExtractOptions {
        strip: Some(Strip::pattern(r"^[A-Z][a-z]+ \d{1,2}, \d{4} -").expect("valid pattern")),
        ..ExtractOptions::default()
    };

    assert_eq!(
        first_paragraph(html, &options),
        "City officials announced a new plan for the riverfront park today."
    );
}

#[test]
fn heading_tier_wins_over_earlier_paragraphs() {
    let html = "<p>Navigation links and other words that are long enough to pass the threshold ok</p>\
        <h2>Story</h2>\
        <p>The actual story starts here and runs long enough to be accepted now.</p>";

    let excerpt = report(html, &ExtractOptions::default());
    assert_eq!(excerpt.text, "The actual story starts here and runs long enough to be accepted now.");
    assert_eq!(excerpt.tier, Some(Tier::Heading));
}

#[test]
fn falls_through_to_document_wide_paragraphs() {
    let html = "<p>This introduction paragraph comes before the heading and is long enough.</p>\
        <h1>T</h1><p>tiny</p>";

    let excerpt = report(html, &ExtractOptions::default());
    assert_eq!(
        excerpt.text,
        "This introduction paragraph comes before the heading and is long enough."
    );
    assert_eq!(excerpt.tier, Some(Tier::Paragraph));
    assert_eq!(excerpt.min_spaces, 8);
}

#[test]
fn class_hinted_container_is_used_without_paragraphs() {
    let html = r#"<div class="message-body">Forum posts often live inside containers like this one with many words.</div>"#;

    let excerpt = report(html, &ExtractOptions::default());
    assert_eq!(
        excerpt.text,
        "Forum posts often live inside containers like this one with many words."
    );
    assert_eq!(excerpt.tier, Some(Tier::ClassHinted));
}

#[test]
fn line_breaks_are_the_last_resort() {
    let html = "<body>Header junk<br>This page has no paragraphs at all but it does use many line breaks.<br>Footer</body>";

    let excerpt = report(html, &ExtractOptions::default());
    assert_eq!(
        excerpt.text,
        "This page has no paragraphs at all but it does use many line breaks."
    );
    assert_eq!(excerpt.tier, Some(Tier::LineBreak));
}

#[test]
fn scripts_styles_and_comments_never_contribute() {
    let html = "<script>var p = '<p>fake paragraph inside a script that should never be shown to anyone</p>';</script>\
        <style>p { color: red; }</style>\
        <!-- <p>commented out paragraph that is also long enough to be picked up</p> -->\
        <p>Real content sits here and has enough words to be accepted by default.</p>";

    assert_eq!(
        first_paragraph(html, &ExtractOptions::default()),
        "Real content sits here and has enough words to be accepted by default."
    );
}

#[test]
fn entities_are_decoded_in_excerpt() {
    let html = "<p>Fish &amp; chips &mdash; a British classic served with salt and vinegar&hellip;</p>";

    assert_eq!(
        first_paragraph(html, &ExtractOptions::default()),
        "Fish & chips \u{2014} a British classic served with salt and vinegar\u{2026}"
    );
}

#[test]
fn unclosed_paragraph_ends_at_container_close() {
    let html = "<div><p>Unclosed paragraphs are common on old pages and still need to be found</div><div>sidebar</div>";

    assert_eq!(
        first_paragraph(html, &ExtractOptions::default()),
        "Unclosed paragraphs are common on old pages and still need to be found"
    );
}

#[test]
fn failing_renderer_skips_candidate() {
    let html = "<p>BROKEN paragraph with plenty of words to pass the default threshold easily</p>\
        <p>Second paragraph also has plenty of words to pass the default threshold</p>";
    let fallible = |fragment: &str| -> Result<String> {
        if fragment.contains("BROKEN") {
            Err(Error::Render("unsupported markup".into()))
        } else {
            Ok(PlainTextRenderer::default().to_text(fragment))
        }
    };

    assert_eq!(
        first_paragraph_with(html, &ExtractOptions::default(), &fallible),
        "Second paragraph also has plenty of words to pass the default threshold"
    );
}

#[test]
fn renderer_failing_everywhere_yields_empty_excerpt() {
    let html = "<h1>T</h1><p>one</p><div class=\"text\">two</div><br>three<br>";
    let broken = |_: &str| -> Result<String> { Err(Error::Render("down".into())) };

    let excerpt = first_paragraph_report(html, &ExtractOptions::default(), &broken);
    assert!(excerpt.is_empty());
    assert_eq!(excerpt.tier, None);
}

#[test]
fn whitespace_only_paragraph_is_returned_empty_at_zero() {
    let excerpt = report("<p>   </p>", &ExtractOptions::default());
    assert_eq!(excerpt.text, "");
    assert_eq!(excerpt.tier, Some(Tier::Paragraph));
    assert_eq!(excerpt.min_spaces, 0);
}

#[test]
fn empty_spacer_paragraphs_do_not_win_at_zero() {
    assert_eq!(first_paragraph("<p></p><p>Hello</p>", &ExtractOptions::default()), "Hello");

    let excerpt = report("<h1>T</h1><p>&nbsp;</p><p>Hello</p>", &ExtractOptions::default());
    assert_eq!(excerpt.text, "Hello");
    assert_eq!(excerpt.tier, Some(Tier::Heading));
    assert_eq!(excerpt.min_spaces, 0);
}

#[test]
fn nested_heading_does_not_end_outer_heading() {
    let html = "<h1>Outer <h2>inner</h2>\
        <p>these words sit inside the outer heading and are not the story</p></h1>\
        <p>The story starts after the outer heading closes properly here.</p>";

    let excerpt = report(html, &ExtractOptions::default());
    assert_eq!(excerpt.text, "The story starts after the outer heading closes properly here.");
    assert_eq!(excerpt.tier, Some(Tier::Heading));
}

#[test]
fn extraction_is_deterministic() {
    let html = "<h3>Heading</h3><p>Some words here</p><div class=\"body\">More words in a body container here</div>";
    let options = ExtractOptions::default();

    assert_eq!(report(html, &options), report(html, &options));
}

//! First-paragraph extraction.
//!
//! Finds the first paragraph-like block of an HTML document without building
//! a DOM. Candidates come from four tiers of progressively looser patterns:
//!
//! 1. [`Tier::Heading`]: `<p>` blocks after the first `<h1>`..`<h6>`
//! 2. [`Tier::Paragraph`]: `<p>` blocks anywhere, closed by the nearest of
//!    `</p>`, `</div>`, `</html>`, `</body>`, `</table>`, `</td>`, `</tr>`
//! 3. [`Tier::ClassHinted`]: elements whose attributes mention `body`,
//!    `message` or `text`, with the same loose closers
//! 4. [`Tier::LineBreak`]: text between `<br>` breaks
//!
//! Each pass walks the tiers in order and accepts the first rendered
//! candidate with at least `min_spaces` whitespace gaps. A pass without an
//! acceptance halves `min_spaces` and starts over until the threshold is 0.

use std::borrow::Cow;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::options::{ExtractOptions, Strip};
use crate::patterns::{
    CLASS_HINTED_OPEN, HEADING_CLOSE, HEADING_OPEN, INVISIBLE_BLOCK, LINE_BREAK, LOOSE_CLOSE,
    PARAGRAPH,
};
use crate::render::{PlainTextRenderer, Render};
use crate::result::Excerpt;

/// Elements that cannot contain text; a class hint on them is noise.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// One of the four candidate-matching strategies, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Paragraphs following the document's first heading.
    Heading,
    /// Loosely closed `<p>` blocks anywhere in the document.
    Paragraph,
    /// Containers hinted as content by their attributes.
    ClassHinted,
    /// Text delimited by `<br>` breaks.
    LineBreak,
}

impl Tier {
    /// All tiers in the order a pass tries them.
    pub const ALL: [Self; 4] = [Self::Heading, Self::Paragraph, Self::ClassHinted, Self::LineBreak];

    /// Single-pattern tiers; [`Tier::ClassHinted`] pairs an opener with a closer.
    fn pattern(self) -> Option<&'static Regex> {
        match self {
            Self::Heading | Self::Paragraph => Some(&*PARAGRAPH),
            Self::ClassHinted => None,
            Self::LineBreak => Some(&*LINE_BREAK),
        }
    }
}

/// A matched block of markup and where scanning resumes after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Tier that produced the match.
    pub tier: Tier,
    /// Inner markup of the block, without its opening tag and closer.
    pub fragment: &'a str,
    /// Byte offset of `fragment` in the scanned document.
    pub start: usize,
    /// Byte offset where the next candidate of this tier is searched from.
    pub end: usize,
}

/// Iterator over the candidates of one tier, in document order.
///
/// Created by [`candidates`].
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    document: &'a str,
    tier: Tier,
    cursor: Option<usize>,
}

impl<'a> Iterator for Candidates<'a> {
    type Item = Candidate<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.cursor?;
        let span = match self.tier.pattern() {
            Some(pattern) => pattern
                .captures_at(self.document, start)
                .and_then(|caps| caps.name("content"))
                .map(|content| (content.start(), content.end())),
            None => self.next_class_hinted(start),
        };
        let Some((start, end)) = span else {
            self.cursor = None;
            return None;
        };

        self.cursor = Some(end);
        Some(Candidate {
            tier: self.tier,
            fragment: &self.document[start..end],
            start,
            end,
        })
    }
}

impl Candidates<'_> {
    /// Content span of the next hinted container at or after `from`.
    ///
    /// Void tags are skipped at the opener, before any closer is searched,
    /// so a page full of `<img alt="text">` stays linear.
    fn next_class_hinted(&self, mut from: usize) -> Option<(usize, usize)> {
        loop {
            let caps = CLASS_HINTED_OPEN.captures_at(self.document, from)?;
            let open = caps.get(0)?;
            if caps.name("tag").is_some_and(|tag| is_void_element(tag.as_str())) {
                from = open.end();
                continue;
            }
            // No closer after this opener means none after any later one either.
            let close = LOOSE_CLOSE.find_at(self.document, open.end())?;
            return Some((open.end(), close.start()));
        }
    }
}

fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|void| void.eq_ignore_ascii_case(tag))
}

/// Returns the candidates `tier` finds in `document`.
///
/// `document` is scanned as given; pass it through [`clean_document`] first
/// to drop scripts, styles and comments. [`Tier::Heading`] yields nothing
/// when the document has no heading.
///
/// ```
/// use rs_lede::paragraph::{candidates, Tier};
///
/// let html = "<p>one</p><div><p>two</div>";
/// let found: Vec<_> = candidates(html, Tier::Paragraph).map(|c| c.fragment).collect();
/// assert_eq!(found, ["one", "two"]);
/// ```
#[must_use]
pub fn candidates(document: &str, tier: Tier) -> Candidates<'_> {
    let cursor = match tier {
        Tier::Heading => heading_end(document),
        Tier::Paragraph | Tier::ClassHinted | Tier::LineBreak => Some(0),
    };
    Candidates {
        document,
        tier,
        cursor,
    }
}

/// Offset just past the first heading, or past its opening tag when unclosed.
///
/// Only a close tag of the same level ends the heading.
fn heading_end(document: &str) -> Option<usize> {
    let open = HEADING_OPEN.captures(document)?;
    let level = open.name("level")?.as_str();
    let after_open = open.get(0)?.end();
    let end = HEADING_CLOSE
        .captures_iter(&document[after_open..])
        .find(|close| &close["level"] == level)
        .and_then(|close| close.get(0))
        .map_or(after_open, |close| after_open + close.end());
    Some(end)
}

/// Removes comments, `<script>` and `<style>` blocks.
#[must_use]
pub fn clean_document(html: &str) -> Cow<'_, str> {
    INVISIBLE_BLOCK.replace_all(html, "")
}

/// Number of whitespace gaps between the words of `text`.
///
/// ```
/// use rs_lede::paragraph::count_spaces;
///
/// assert_eq!(count_spaces("  one two\tthree  "), 2);
/// assert_eq!(count_spaces(""), 0);
/// ```
#[must_use]
pub fn count_spaces(text: &str) -> usize {
    text.split_whitespace().count().saturating_sub(1)
}

/// Extracts the first meaningful paragraph of `document` as plain text.
///
/// Candidates are rendered with [`PlainTextRenderer::default`]. Returns an
/// empty string when the document has no candidate in any tier.
///
/// # Example
///
/// ```rust
/// use rs_lede::{first_paragraph, ExtractOptions};
///
/// let html = r#"<html><body><div class="nav">Home | About</div>
/// <h1>Budget approved</h1>
/// <p class="lede">The council voted on Tuesday to approve the new budget for next year.</p>
/// </body></html>"#;
///
/// let excerpt = first_paragraph(html, &ExtractOptions::default());
/// assert_eq!(excerpt, "The council voted on Tuesday to approve the new budget for next year.");
/// ```
#[must_use]
pub fn first_paragraph(document: &str, options: &ExtractOptions) -> String {
    first_paragraph_report(document, options, &PlainTextRenderer::default()).text
}

/// Like [`first_paragraph`], rendering candidates with `renderer`.
#[must_use]
pub fn first_paragraph_with(document: &str, options: &ExtractOptions, renderer: &dyn Render) -> String {
    first_paragraph_report(document, options, renderer).text
}

/// Runs the tiered, self-relaxing search and reports how the excerpt was found.
///
/// Candidates whose rendering fails are skipped. Rendered text is cached, so
/// relaxation passes after the first do not render anything twice.
#[must_use]
pub fn first_paragraph_report(
    document: &str,
    options: &ExtractOptions,
    renderer: &dyn Render,
) -> Excerpt {
    let cleaned = clean_document(document);
    let mut pool = CandidatePool::new(&cleaned, renderer, options.strip.as_ref());
    let mut min_spaces = options.min_spaces;

    loop {
        if let Some(found) = pool.accept(min_spaces) {
            debug!(tier = ?found.tier, min_spaces, spaces = found.spaces, "accepted candidate");
            return Excerpt {
                text: found.text.clone(),
                tier: Some(found.tier),
                min_spaces,
            };
        }
        if min_spaces == 0 {
            debug!(candidates = pool.rendered.len(), "no candidate in any tier");
            return Excerpt::default();
        }
        min_spaces /= 2;
        debug!(min_spaces, "no candidate accepted, relaxing threshold");
    }
}

#[derive(Debug)]
struct Rendered {
    tier: Tier,
    text: String,
    spaces: usize,
}

/// Lazily rendered candidates of all tiers, in pass order.
struct CandidatePool<'a> {
    source: Box<dyn Iterator<Item = Candidate<'a>> + 'a>,
    renderer: &'a dyn Render,
    strip: Option<&'a Strip>,
    rendered: Vec<Rendered>,
}

impl<'a> CandidatePool<'a> {
    fn new(document: &'a str, renderer: &'a dyn Render, strip: Option<&'a Strip>) -> Self {
        let source = Tier::ALL
            .into_iter()
            .flat_map(move |tier| candidates(document, tier));
        Self {
            source: Box::new(source),
            renderer,
            strip,
            rendered: Vec::new(),
        }
    }

    /// First candidate, in pass order, with at least `min_spaces` gaps.
    ///
    /// At a threshold of 0 the first candidate with any text wins; an empty
    /// one is returned only when every candidate rendered empty.
    fn accept(&mut self, min_spaces: usize) -> Option<&Rendered> {
        let mut index = 0;
        let mut found = None;
        while index < self.rendered.len() || self.render_next() {
            let candidate = &self.rendered[index];
            if candidate.spaces >= min_spaces && (min_spaces > 0 || !candidate.text.is_empty()) {
                found = Some(index);
                break;
            }
            index += 1;
        }
        match found {
            Some(index) => self.rendered.get(index),
            None if min_spaces == 0 => self.rendered.first(),
            None => None,
        }
    }

    /// Renders the next candidate that renders successfully.
    fn render_next(&mut self) -> bool {
        for candidate in self.source.by_ref() {
            match self.renderer.render(candidate.fragment) {
                Ok(text) => {
                    let text = match self.strip {
                        Some(strip) => strip.apply(&text).to_string(),
                        None => text,
                    };
                    let spaces = count_spaces(&text);
                    trace!(tier = ?candidate.tier, offset = candidate.start, spaces, "rendered candidate");
                    self.rendered.push(Rendered {
                        tier: candidate.tier,
                        text,
                        spaces,
                    });
                    return true;
                }
                Err(err) => {
                    warn!(tier = ?candidate.tier, offset = candidate.start, error = %err, "skipping candidate");
                }
            }
        }
        false
    }
}

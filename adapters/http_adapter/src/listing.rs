//! Selection of listing rows out of a front page document.

use newscraft_core::domain::{ListingPage, RawRow};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("listing selectors are valid CSS")
}

static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr.athing"));
static TITLE_LINK: LazyLock<Selector> = LazyLock::new(|| selector("td.title a"));
static SCORE: LazyLock<Selector> = LazyLock::new(|| selector("span.score"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a"));
static AGE_LINK: LazyLock<Selector> = LazyLock::new(|| selector(".age a"));
static MORE_LINK: LazyLock<Selector> = LazyLock::new(|| selector("a.morelink"));

/// Parses a listing document into its rows and pagination links
pub fn parse_listing(html: &str) -> ListingPage {
    let document = Html::parse_document(html);

    let rows = document.select(&ROW).map(parse_row).collect();
    let more_links = document
        .select(&MORE_LINK)
        .filter_map(|link| link.value().attr("href"))
        .map(str::to_owned)
        .collect();

    ListingPage { rows, more_links }
}

// A listing entry spans the title row and the metadata row right after it
fn parse_row(row: ElementRef<'_>) -> RawRow {
    let title_link = row.select(&TITLE_LINK).next();
    let meta = next_element(row);

    RawRow {
        title: title_link.map(text_of).unwrap_or_default(),
        href: title_link
            .and_then(|link| link.value().attr("href"))
            .unwrap_or_default()
            .to_owned(),
        score_text: meta.and_then(|m| m.select(&SCORE).next()).map(text_of),
        comments_text: meta.and_then(|m| m.select(&ANCHOR).last()).map(text_of),
        age_text: meta.and_then(|m| m.select(&AGE_LINK).next()).map(text_of),
    }
}

fn next_element(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.next_siblings().find_map(ElementRef::wrap)
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

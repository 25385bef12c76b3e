use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::{
    encyclopedia::Encyclopedia,
    locale::Locale,
    movie::RawFieldMap,
    resolver::Skip,
};

/// Where the infobox lives on a page of a given locale, and which elements inside a
/// data cell hold its individual values.
struct Layout {
    block: Selector,
    sub_value: Selector,
}

static FRENCH: Lazy<Layout> = Lazy::new(|| Layout {
    block: Selector::parse("div.infobox_v3").unwrap(),
    sub_value: Selector::parse("a").unwrap(),
});
static ENGLISH: Lazy<Layout> = Lazy::new(|| Layout {
    block: Selector::parse("table.infobox").unwrap(),
    sub_value: Selector::parse("li").unwrap(),
});

static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static HEADER_CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("th").unwrap());
static DATA_CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());

fn layout(locale: Locale) -> &'static Layout {
    match locale {
        Locale::French => &FRENCH,
        Locale::English => &ENGLISH,
    }
}

/// Fetch `article` and scrape its infobox.
///
/// English pages also get their introduction attached, which is where the genre comes
/// from on that wiki. A page without an infobox is a [`Skip::MissingInfobox`].
pub fn fetch<E: Encyclopedia + ?Sized>(
    encyclopedia: &E,
    article: &str,
    locale: Locale,
) -> anyhow::Result<RawFieldMap> {
    let page = encyclopedia.article(locale, article)?;
    let mut raw = parse(&page.html, locale).ok_or_else(|| Skip::MissingInfobox {
        article: page.title.clone(),
    })?;
    if locale == Locale::English {
        raw.summary = encyclopedia.summary(locale, &page.title)?;
    }
    Ok(raw)
}

/// Scrape the first infobox of a rendered page into label/values pairs.
///
/// Each row with both a header and a data cell becomes one entry. The values are the
/// texts of the locale's sub-value elements inside the data cell, or the whole cell's
/// text when it has none.
pub fn parse(html: &str, locale: Locale) -> Option<RawFieldMap> {
    let document = Html::parse_document(html);
    let layout = layout(locale);
    let block = document.select(&layout.block).next()?;

    let mut raw = RawFieldMap::new(locale);
    for row in block.select(&ROW) {
        let Some(header) = row.select(&HEADER_CELL).next() else {
            continue;
        };
        let Some(data) = row.select(&DATA_CELL).next() else {
            continue;
        };
        let mut values: Vec<String> = data.select(&layout.sub_value).map(text_of).collect();
        if values.is_empty() {
            values.push(text_of(data));
        }
        raw.insert(text_of(header), values);
    }
    Some(raw)
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

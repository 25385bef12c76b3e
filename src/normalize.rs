use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    locale::Locale,
    movie::{Field, NormalizedFieldMap, RawFieldMap},
    resolver::Skip,
};

/// How much of an article's introduction the genre heuristic looks at, in characters.
const SUMMARY_WINDOW: usize = 256;

/// Labels that mean "genre" but are spelt differently from the canonical one.
const GENRE_ALIASES: &[&str] = &["Genres"];

const FRENCH_LABELS: &[(&str, Field)] = &[
    ("Réalisation", Field::Director),
    ("Genre", Field::Genre),
    ("Acteurs principaux", Field::Starring),
    ("Sortie", Field::ReleaseDate),
    ("Durée", Field::RunningTime),
    ("Pays de production", Field::ProductionCountry),
];

const ENGLISH_LABELS: &[(&str, Field)] = &[
    ("Directed by", Field::Director),
    ("Genre", Field::Genre),
    ("Starring", Field::Starring),
    ("Release date", Field::ReleaseDate),
    ("Release dates", Field::ReleaseDate),
    ("Running time", Field::RunningTime),
    ("Country", Field::ProductionCountry),
    ("Countries", Field::ProductionCountry),
];

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{4}").unwrap());
static CITATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\]]*\]").unwrap());

fn labels(locale: Locale) -> &'static [(&'static str, Field)] {
    match locale {
        Locale::French => FRENCH_LABELS,
        Locale::English => ENGLISH_LABELS,
    }
}

/// The canonical field an infobox label stands for on a given wiki.
pub fn field_for(locale: Locale, label: &str) -> Option<Field> {
    let label = if GENRE_ALIASES.contains(&label) {
        "Genre"
    } else {
        label
    };
    labels(locale)
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, f)| *f)
}

/// Turn scraped infobox rows into canonical, cleaned fields.
///
/// Runs in this order: label translation (genre aliases included), genre derivation from
/// the summary for English pages lacking one, year extraction from the release date, and
/// finally citation stripping on every value.
pub fn normalize(raw: RawFieldMap) -> Result<NormalizedFieldMap, Skip> {
    let locale = raw.locale;
    let summary = raw.summary.clone();
    let mut movie = NormalizedFieldMap::new(locale);

    for (label, values) in raw.into_entries() {
        match field_for(locale, &label) {
            Some(field) => {
                movie.fields.insert(field, values);
            }
            None => {
                movie.other.insert(label, values);
            }
        }
    }

    if locale == Locale::English
        && !movie.fields.contains_key(&Field::Genre)
        && let Some(genre) = summary.as_deref().and_then(derive_genre)
    {
        movie.fields.insert(Field::Genre, vec![genre]);
    }

    if let Some(dates) = movie.fields.get_mut(&Field::ReleaseDate) {
        let first = dates.first().map(String::as_str).unwrap_or_default();
        let year = extract_year(first)
            .ok_or_else(|| Skip::MalformedReleaseDate {
                value: first.to_string(),
            })?
            .to_string();
        *dates = vec![year];
    }

    for values in movie.fields.values_mut().chain(movie.other.values_mut()) {
        *values = strip_values(values);
    }
    Ok(movie)
}

/// Best-effort genre from an English introduction such as
/// "Pulp Fiction is a 1994 American independent crime film ...".
///
/// Within the first [`SUMMARY_WINDOW`] characters, the genre is what sits between
/// "American" and the first "film" token, or else the four tokens before "film".
pub fn derive_genre(summary: &str) -> Option<String> {
    let window: String = summary.chars().take(SUMMARY_WINDOW).collect();
    let tokens: Vec<&str> = window.split_whitespace().collect();
    let film = tokens.iter().position(|t| *t == "film")?;
    let start = match tokens[..film].iter().position(|t| *t == "American") {
        Some(american) => american + 1,
        None => film.saturating_sub(4),
    };
    let genre = tokens[start..film].join(" ");
    (!genre.is_empty()).then_some(genre)
}

/// First run of four digits in `text`.
pub fn extract_year(text: &str) -> Option<&str> {
    YEAR_RE.find(text).map(|m| m.as_str())
}

/// Remove bracketed citation markers such as `[1]` or `[note 2]`, then trim.
pub fn strip_citations(value: &str) -> String {
    CITATION_RE.replace_all(value, "").trim().to_string()
}

fn strip_values(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| strip_citations(v))
        .filter(|v| !v.is_empty())
        .collect()
}

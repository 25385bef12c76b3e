use std::collections::BTreeMap;

use crate::locale::Locale;

/// Locale-independent infobox fields the report knows how to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Director,
    Genre,
    Starring,
    ReleaseDate,
    RunningTime,
    ProductionCountry,
}

/// Infobox rows exactly as scraped, keyed by the page's own labels.
#[derive(Debug, Clone)]
pub struct RawFieldMap {
    pub locale: Locale,
    /// Rows in page order. A label seen twice keeps the last row's values.
    entries: Vec<(String, Vec<String>)>,
    /// Plain-text introduction of the article, when it was fetched.
    pub summary: Option<String>,
}

impl RawFieldMap {
    pub fn new(locale: Locale) -> Self {
        RawFieldMap {
            locale,
            entries: Vec::new(),
            summary: None,
        }
    }

    pub fn insert(&mut self, label: impl Into<String>, values: Vec<String>) {
        let label = label.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => *existing = values,
            None => self.entries.push((label, values)),
        }
    }

    #[cfg(test)]
    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_slice())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn into_entries(self) -> impl Iterator<Item = (String, Vec<String>)> {
        self.entries.into_iter()
    }
}

/// Cleaned infobox contents: known labels are folded into [`Field`]s, anything else is
/// kept under its original label.
#[derive(Debug, Clone)]
pub struct NormalizedFieldMap {
    pub locale: Locale,
    pub fields: BTreeMap<Field, Vec<String>>,
    pub other: BTreeMap<String, Vec<String>>,
}

impl NormalizedFieldMap {
    pub fn new(locale: Locale) -> Self {
        NormalizedFieldMap {
            locale,
            fields: BTreeMap::new(),
            other: BTreeMap::new(),
        }
    }

    pub fn get(&self, field: Field) -> Option<&[String]> {
        self.fields.get(&field).map(Vec::as_slice)
    }

    /// The `index`-th value of `field`, by position in the infobox.
    ///
    /// Positions carry meaning for some fields: `Starring` lists the lead first and the
    /// supporting actor second. A missing field or an index past the end is `None`.
    pub fn value_at(&self, field: Field, index: usize) -> Option<&str> {
        self.get(field)?.get(index).map(String::as_str)
    }
}

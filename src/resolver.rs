use thiserror::Error;

use crate::{
    disambiguate,
    encyclopedia::{self, DEFAULT_LIMIT, Encyclopedia},
    infobox,
    locale::{self, Locale},
    movie::NormalizedFieldMap,
    normalize,
};

/// Reasons a single title is left out of the report while the run carries on.
#[derive(Debug, Error)]
pub enum Skip {
    #[error("could not detect the language of the title")]
    UndetectedLanguage,
    #[error("no {locale} article matched the search")]
    NoCandidates { locale: Locale },
    #[error(
        "the retrieved pages are too uncertain, try one of these spellings: {}",
        .candidates.join(" | ")
    )]
    Uncertain { candidates: Vec<String> },
    #[error("no infobox found on the page \"{article}\"")]
    MissingInfobox { article: String },
    #[error("no year found in release date {value:?}")]
    MalformedReleaseDate { value: String },
}

/// A title matched to an article, with its infobox normalized.
#[derive(Debug)]
pub struct Resolved {
    pub article: String,
    pub movie: NormalizedFieldMap,
}

/// Runs a title through search, disambiguation, scraping and normalization.
pub struct Resolver<'e, E: ?Sized> {
    encyclopedia: &'e E,
    limit: usize,
    locale: Option<Locale>,
}

impl<'e, E: Encyclopedia + ?Sized> Resolver<'e, E> {
    pub fn new(encyclopedia: &'e E) -> Self {
        Resolver {
            encyclopedia,
            limit: DEFAULT_LIMIT,
            locale: None,
        }
    }

    /// Number of search results considered per title.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Search every title on this wiki instead of detecting its language.
    pub fn locale(mut self, locale: Option<Locale>) -> Self {
        self.locale = locale;
        self
    }

    /// Resolve `title`.
    ///
    /// Errors that downcast to [`Skip`] concern this title only. Anything else (network,
    /// unexpected API answers) should end the run.
    pub fn resolve(&self, title: &str) -> anyhow::Result<Resolved> {
        let locale = match self.locale {
            Some(locale) => locale,
            None => locale::detect(title)?,
        };

        let candidates =
            encyclopedia::search_candidates(self.encyclopedia, title, locale, self.limit)?;
        if candidates.is_empty() {
            return Err(Skip::NoCandidates { locale }.into());
        }
        let article = disambiguate::most_likely(title, &candidates)
            .ok_or_else(|| Skip::Uncertain {
                candidates: candidates.clone(),
            })?
            .to_string();

        let raw = infobox::fetch(self.encyclopedia, &article, locale)?;
        let movie = normalize::normalize(raw)?;
        Ok(Resolved { article, movie })
    }
}

use crate::locale::Locale;

#[cfg(test)]
pub mod fake;
pub mod wikipedia;

/// Appended to every search so film articles outrank namesakes.
pub const QUERY_SUFFIX: &str = " (film)";

/// How many candidates a search returns unless told otherwise.
pub const DEFAULT_LIMIT: usize = 5;

/// A rendered article.
#[derive(Debug, Clone)]
pub struct Article {
    /// Title after redirects were followed.
    pub title: String,
    pub html: String,
}

/// An online encyclopedia that can be searched and read, one wiki per [`Locale`].
///
/// Every call names its locale; implementations keep no notion of a current language.
pub trait Encyclopedia {
    /// Ranked article titles matching `query`, at most `limit` of them.
    fn search(&self, locale: Locale, query: &str, limit: usize) -> anyhow::Result<Vec<String>>;

    /// The rendered article with exactly this title. No fuzzy suggestion is applied.
    fn article(&self, locale: Locale, title: &str) -> anyhow::Result<Article>;

    /// Plain-text introduction of the article, if it has one.
    fn summary(&self, locale: Locale, title: &str) -> anyhow::Result<Option<String>>;
}

/// Candidate articles for a movie title, best first.
pub fn search_candidates<E: Encyclopedia + ?Sized>(
    encyclopedia: &E,
    title: &str,
    locale: Locale,
    limit: usize,
) -> anyhow::Result<Vec<String>> {
    let mut candidates = encyclopedia.search(locale, &format!("{title}{QUERY_SUFFIX}"), limit)?;
    candidates.truncate(limit);
    Ok(candidates)
}

use std::{cell::RefCell, collections::HashMap};

use anyhow::anyhow;

use crate::{
    encyclopedia::{Article, Encyclopedia},
    locale::Locale,
};

/// In-memory encyclopedia for tests. Unknown searches return nothing, unknown pages are
/// an error, the same way the live API answers.
#[derive(Default)]
pub struct FakeEncyclopedia {
    results: HashMap<(Locale, String), Vec<String>>,
    pages: HashMap<(Locale, String), String>,
    summaries: HashMap<(Locale, String), String>,
    searches: RefCell<Vec<(Locale, String, usize)>>,
}

impl FakeEncyclopedia {
    pub fn with_search(mut self, locale: Locale, query: &str, titles: &[&str]) -> Self {
        self.results.insert(
            (locale, query.to_string()),
            titles.iter().map(|t| t.to_string()).collect(),
        );
        self
    }

    pub fn with_page(mut self, locale: Locale, title: &str, html: &str) -> Self {
        self.pages
            .insert((locale, title.to_string()), html.to_string());
        self
    }

    pub fn with_summary(mut self, locale: Locale, title: &str, summary: &str) -> Self {
        self.summaries
            .insert((locale, title.to_string()), summary.to_string());
        self
    }

    pub fn searches(&self) -> Vec<(Locale, String, usize)> {
        self.searches.borrow().clone()
    }
}

impl Encyclopedia for FakeEncyclopedia {
    fn search(&self, locale: Locale, query: &str, limit: usize) -> anyhow::Result<Vec<String>> {
        self.searches
            .borrow_mut()
            .push((locale, query.to_string(), limit));
        Ok(self
            .results
            .get(&(locale, query.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    fn article(&self, locale: Locale, title: &str) -> anyhow::Result<Article> {
        let html = self
            .pages
            .get(&(locale, title.to_string()))
            .ok_or_else(|| anyhow!("missingtitle: {locale}:{title}"))?;
        Ok(Article {
            title: title.to_string(),
            html: html.clone(),
        })
    }

    fn summary(&self, locale: Locale, title: &str) -> anyhow::Result<Option<String>> {
        Ok(self.summaries.get(&(locale, title.to_string())).cloned())
    }
}

use std::time::Duration;

use anyhow::{Context, anyhow};
use serde::{Deserialize, de::DeserializeOwned};
use url::Url;

use crate::{
    encyclopedia::{Article, Encyclopedia},
    locale::Locale,
};

const USER_AGENT: &str = concat!(
    "cinefiche/",
    env!("CARGO_PKG_VERSION"),
    " (movie list enrichment; ureq)"
);

/// Wikipedia, reached through the MediaWiki action API of each language edition.
pub struct Wikipedia {
    agent: ureq::Agent,
}

impl Wikipedia {
    pub fn new(timeout: Duration) -> Self {
        let cfg = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Wikipedia {
            agent: ureq::Agent::new_with_config(cfg),
        }
    }

    fn get<T: DeserializeOwned>(
        &self,
        locale: Locale,
        params: &[(&str, &str)],
    ) -> anyhow::Result<T> {
        let url = endpoint(locale, params)?;
        let body = self
            .agent
            .get(url.as_str())
            .header("User-Agent", USER_AGENT)
            .call()
            .with_context(|| format!("failed request for URL {url}"))?
            .into_body()
            .read_to_string()
            .context("read body")?;
        decode(&body).with_context(|| format!("unexpected response from {url}"))
    }
}

impl Encyclopedia for Wikipedia {
    fn search(&self, locale: Locale, query: &str, limit: usize) -> anyhow::Result<Vec<String>> {
        let limit = limit.to_string();
        let res: SearchResponse = self.get(
            locale,
            &[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", query),
                ("srlimit", &limit),
                ("srprop", ""),
            ],
        )?;
        Ok(res
            .query
            .map(|q| q.search.into_iter().map(|hit| hit.title).collect())
            .unwrap_or_default())
    }

    fn article(&self, locale: Locale, title: &str) -> anyhow::Result<Article> {
        let res: ParseResponse = self.get(
            locale,
            &[
                ("action", "parse"),
                ("page", title),
                ("prop", "text"),
                ("redirects", "1"),
            ],
        )?;
        Ok(Article {
            title: res.parse.title,
            html: res.parse.text,
        })
    }

    fn summary(&self, locale: Locale, title: &str) -> anyhow::Result<Option<String>> {
        let res: ExtractResponse = self.get(
            locale,
            &[
                ("action", "query"),
                ("prop", "extracts"),
                ("exintro", "1"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("titles", title),
            ],
        )?;
        Ok(res
            .query
            .and_then(|q| q.pages.into_iter().find_map(|p| p.extract))
            .filter(|s| !s.trim().is_empty()))
    }
}

/// API URL for `locale` with `params`, always asking for format version 2 JSON.
fn endpoint(locale: Locale, params: &[(&str, &str)]) -> anyhow::Result<Url> {
    let base = format!("https://{}.wikipedia.org/w/api.php", locale.code());
    let mut url = Url::parse_with_params(&base, params)?;
    url.query_pairs_mut()
        .append_pair("format", "json")
        .append_pair("formatversion", "2");
    Ok(url)
}

/// Decode an API body, turning MediaWiki's in-band `error` object into an `Err`.
fn decode<T: DeserializeOwned>(body: &str) -> anyhow::Result<T> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if let Some(err) = value.get("error") {
        let err: ApiError = serde_json::from_value(err.clone())?;
        return Err(anyhow!("{}: {}", err.code, err.info));
    }
    Ok(serde_json::from_value(value)?)
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    #[serde(default)]
    info: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ParseResponse {
    parse: ParsedPage,
}

#[derive(Debug, Deserialize)]
struct ParsedPage {
    title: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct ExtractResponse {
    query: Option<ExtractQuery>,
}

#[derive(Debug, Deserialize)]
struct ExtractQuery {
    pages: Vec<ExtractPage>,
}

#[derive(Debug, Deserialize)]
struct ExtractPage {
    extract: Option<String>,
}

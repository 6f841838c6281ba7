//! Fetches a target page and extracts its icon link and meta description.
//!
//! Failures here never fail a catalog operation; callers degrade to the
//! generated letter badge and an empty description.

use crate::error::CatalogError;
use reqwest::Client;
use reqwest::redirect::Policy;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::warn;
use url::Url;
use waymark_domain::config::FetcherConfig;

const MAX_REDIRECTS: usize = 10;

/// HTTP client wrapper with the configured timeout and user-agent.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Builds the underlying HTTP client.
    ///
    /// # Errors
    /// Returns [`CatalogError::Internal`] if the client cannot be constructed.
    pub fn new(cfg: &FetcherConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_seconds))
            .user_agent(cfg.user_agent.clone())
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| CatalogError::Internal {
                message: e.to_string().into(),
                context: Some("Building fetcher client".into()),
            })?;

        Ok(Self { client })
    }

    /// Fetches the page, following redirects. `None` on any failure.
    pub async fn fetch(&self, url: &str) -> Option<FetchedPage> {
        match self.try_fetch(url).await {
            Ok(page) => Some(page),
            Err(e) => {
                warn!(%url, error = %e, "Page fetch failed");
                None
            },
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<FetchedPage, reqwest::Error> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        // The URL after redirects; relative icon hrefs resolve against it.
        let final_url = response.url().clone();
        let body = response.text().await?;
        Ok(FetchedPage { final_url, body })
    }
}

/// A fetched document, pinned to its post-redirect URL.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    final_url: Url,
    body: String,
}

impl FetchedPage {
    /// The declared icon of the page, as an absolute URL.
    #[must_use]
    pub fn icon_url(&self) -> Option<String> {
        parse_icon_href(&self.body).and_then(|href| resolve_href(&self.final_url, &href))
    }

    /// The `<meta name="description">` content, if any.
    #[must_use]
    pub fn description(&self) -> Option<String> {
        parse_meta_description(&self.body)
    }
}

fn parse_icon_href(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    // rel is a space-separated list; ~= matches "icon" and "shortcut icon".
    let selector = Selector::parse("link[rel~='icon']").ok()?;

    document
        .select(&selector)
        .find_map(|element| element.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(str::to_owned)
}

fn parse_meta_description(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("meta[name='description']").ok()?;

    document
        .select(&selector)
        .find_map(|element| element.value().attr("content"))
        .map(str::trim)
        .filter(|content| !content.is_empty())
        .map(str::to_owned)
}

fn resolve_href(base: &Url, href: &str) -> Option<String> {
    base.join(href).ok().map(|url| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!doctype html>
        <html><head>
            <meta charset="utf-8">
            <meta name="description" content="  A curated start page.  ">
            <link rel="stylesheet" href="/styles.css">
            <link rel="shortcut icon" href="/static/favicon.ico">
        </head><body>hello</body></html>"#;

    #[test]
    fn finds_shortcut_icon_and_description() {
        assert_eq!(parse_icon_href(PAGE).as_deref(), Some("/static/favicon.ico"));
        assert_eq!(parse_meta_description(PAGE).as_deref(), Some("A curated start page."));
    }

    #[test]
    fn plain_icon_rel_is_found_too() {
        let html = r#"<link rel="icon" type="image/png" href="https://cdn.example.com/fav.png">"#;
        assert_eq!(parse_icon_href(html).as_deref(), Some("https://cdn.example.com/fav.png"));
    }

    #[test]
    fn missing_tags_yield_none() {
        let html = "<html><head><title>bare</title></head></html>";
        assert_eq!(parse_icon_href(html), None);
        assert_eq!(parse_meta_description(html), None);
    }

    #[test]
    fn empty_href_is_ignored() {
        let html = r#"<link rel="icon" href="   ">"#;
        assert_eq!(parse_icon_href(html), None);
    }

    #[test]
    fn relative_hrefs_resolve_against_the_final_url() {
        let base = Url::parse("https://example.com/app/index.html").expect("base url");
        assert_eq!(
            resolve_href(&base, "/static/favicon.ico").as_deref(),
            Some("https://example.com/static/favicon.ico")
        );
        assert_eq!(
            resolve_href(&base, "favicon.ico").as_deref(),
            Some("https://example.com/app/favicon.ico")
        );
        // Absolute hrefs pass through untouched.
        assert_eq!(
            resolve_href(&base, "https://cdn.example.com/fav.png").as_deref(),
            Some("https://cdn.example.com/fav.png")
        );
    }
}

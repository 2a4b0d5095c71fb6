//! Post extractor for the HTML frontend (`https://chan.sankakucomplex.com`)
//!
//! The chan extractor has the following features:
//! - Session-cookie authentication
//! - Locale-scoped pages (the language segment is part of every path)
//! - Single-post detail fetching with full stats and sidebar tags
//!
use std::fmt::Display;
use std::sync::Arc;

use skc_common::{
    client, join_tags,
    log::debug,
    post::Post,
    reqwest::{cookie::Jar, Client, Url},
    SankakuServer,
};

use crate::auth::SankakuAuth;
use crate::error::ExtractorError;
use crate::extractor_config::{ServerConfig, DEFAULT_SERVERS};
use crate::servers::{Extractor, SinglePostFetch};

pub use self::parse::StatsLabels;

mod parse;

/// Main object to fetch posts from the HTML frontend
#[derive(Debug, Clone)]
pub struct ChanExtractor {
    client: Client,
    tags: Vec<String>,
    tag_string: String,
    auth: SankakuAuth,
    config: ServerConfig,
    language: String,
    labels: StatsLabels,
}

impl ChanExtractor {
    /// Language segment interpolated into every page path ("en", "ja", ...).
    pub fn set_language(&mut self, language: &str) -> &mut Self {
        self.language = language.to_string();
        self
    }

    /// Overrides the label/anchor table used to pick fields out of the detail
    /// page stats list. Useful for locales beyond the stock English/Japanese
    /// pair.
    pub fn set_labels(&mut self, labels: StatsLabels) -> &mut Self {
        self.labels = labels;
        self
    }

    /// The tags this extractor was set up with.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    async fn fetch_page(&self, url: String) -> Result<String, ExtractorError> {
        let response = self.auth.append_to(self.client.get(url)).send().await?;

        // Any non-200 answer from the HTML frontend is a hard failure; there is
        // nothing worth scraping in an error page.
        let status = response.status().as_u16();
        if status != 200 {
            let message = response.text().await.unwrap_or_default();
            return Err(ExtractorError::HttpFailure { status, message });
        }

        Ok(response.text().await?)
    }
}

impl Extractor for ChanExtractor {
    fn new<S>(tags: &[S], auth: SankakuAuth) -> Result<Self, ExtractorError>
    where
        S: ToString + Display,
    {
        Self::new_with_config(tags, auth, DEFAULT_SERVERS.get("chan").unwrap().clone())
    }

    fn new_with_config<S>(
        tags: &[S],
        auth: SankakuAuth,
        config: ServerConfig,
    ) -> Result<Self, ExtractorError>
    where
        S: ToString + Display,
    {
        let base = Url::parse(&config.base_url).map_err(|_| ExtractorError::InvalidUrl {
            url: config.base_url.clone(),
        })?;

        // The session credential rides as a cookie on every request to the base
        // host, so it lives in the client's jar rather than on each request.
        let jar = Arc::new(Jar::default());
        auth.register_cookie(&jar, &base);
        let client = client!(config, jar)?;

        let strvec: Vec<String> = tags.iter().map(|t| t.to_string()).collect();

        // Merge all tags in the URL format
        let tag_string = join_tags!(strvec);
        debug!("Tag List: {}", tag_string);

        Ok(Self {
            client,
            tags: strvec,
            tag_string,
            auth,
            config,
            language: String::from("en"),
            labels: StatsLabels::default(),
        })
    }

    async fn get_post_list(&self, page: u16) -> Result<Vec<Post>, ExtractorError> {
        if page == 0 {
            return Err(ExtractorError::ZeroPage);
        }

        let url = format!(
            "{}/{}/post/index?tags={}&page={}",
            self.config.base_url, self.language, self.tag_string, page
        );

        debug!("Fetching listing page {}", page);
        let body = self.fetch_page(url).await?;

        let mtx = self.map_posts(&body)?;

        debug!("List size: {}", mtx.len());
        Ok(mtx)
    }

    fn map_posts(&self, raw: &str) -> Result<Vec<Post>, ExtractorError> {
        parse::parse_post_list(raw)
    }

    fn client(&self) -> Client {
        self.client.clone()
    }

    fn server(&self) -> SankakuServer {
        SankakuServer::Chan
    }
}

impl SinglePostFetch for ChanExtractor {
    fn map_post(&self, raw: &str, post_id: &str) -> Result<Post, ExtractorError> {
        let static_url = self.config.static_url.as_deref().unwrap_or_default();
        parse::parse_post_detail(raw, post_id, &self.labels, static_url)
    }

    async fn get_post(&self, post_id: &str) -> Result<Post, ExtractorError> {
        let url = format!(
            "{}/{}/post/show/{}",
            self.config.base_url, self.language, post_id
        );

        debug!("Fetching post {}", post_id);
        let body = self.fetch_page(url).await?;

        self.map_post(&body, post_id)
    }
}

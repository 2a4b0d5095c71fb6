//! Modules that parse post info from a Sankaku server revision into a list of
//! [Posts](skc_common::post).
//! # Extractors
//!
//! Both modules implementing [`Extractor`] work by issuing a single GET against
//! their server revision with the tags supplied and mapping the response body
//! into [`Post`] records. Each call is one stateless request/parse pipeline:
//! there is no pagination loop, no retry and no caching. The extractors hold no
//! mutable per-call state, so one instance can serve concurrent calls from
//! independent tasks.
//!
//! ## General example
//!
//! ### Example with the `Capi` extractor
//! ```no_run
//! use skc_extractors::prelude::*;
//! use skc_extractors::auth::SankakuAuth;
//!
//! async fn test() {
//!     let tags = ["umbreon", "espeon"]; // The tags to search
//!
//!     let auth = SankakuAuth::Bearer("my-api-token".to_string());
//!
//!     let unit = CapiExtractor::new(&tags, auth).unwrap(); // Initialize
//!
//!     let posts = unit.get_post_list(1).await.unwrap(); // Search the first page
//!
//!     println!("{:#?}", posts);
//! }
//! ```
//!
//! ### Example with the `Chan` extractor
//!
//! The chan frontend serves locale-scoped pages, so the language segment can be
//! set after construction.
//!
//! ```no_run
//! use skc_extractors::prelude::*;
//! use skc_extractors::auth::SankakuAuth;
//!
//! async fn test() {
//!     let mut unit = ChanExtractor::new(&["umbreon"], SankakuAuth::session("my-session-id"))
//!         .expect("Invalid server host");
//!     unit.set_language("ja");
//!
//!     let posts = unit.get_post_list(1).await.unwrap();
//!
//!     let detail = unit.get_post("6397602").await.unwrap(); // Full record for one post
//!
//!     println!("{:#?}", (posts, detail));
//! }
//! ```
use std::fmt::Display;
use std::future::Future;

use skc_common::post::Post;
use skc_common::reqwest::Client;
use skc_common::SankakuServer;

use crate::auth::SankakuAuth;
use crate::error::ExtractorError;
use crate::extractor_config::ServerConfig;

pub mod capi;

pub mod chan;

/// This trait should be the only common public interface all extractors expose
/// aside from some revision-specific configuration.
pub trait Extractor: Sized {
    /// Sets up the extractor unit with the tags supplied, against the stock
    /// server entry for this revision.
    ///
    /// Fails when the configured base host cannot be parsed into a URL.
    fn new<S>(tags: &[S], auth: SankakuAuth) -> Result<Self, ExtractorError>
    where
        S: ToString + Display;

    /// Same as [`Extractor::new`], against a caller-supplied [`ServerConfig`].
    fn new_with_config<S>(
        tags: &[S],
        auth: SankakuAuth,
        config: ServerConfig,
    ) -> Result<Self, ExtractorError>
    where
        S: ToString + Display;

    /// Fetches one page of search results for the configured tags.
    ///
    /// Page numbers start at 1; page 0 is rejected before any request is made.
    fn get_post_list(
        &self,
        page: u16,
    ) -> impl Future<Output = Result<Vec<Post>, ExtractorError>> + Send;

    /// This is a separate lower level function to map posts by feeding a raw
    /// response body obtained through other means.
    fn map_posts(&self, raw: &str) -> Result<Vec<Post>, ExtractorError>;

    /// Returns the used client for external use.
    fn client(&self) -> Client;

    /// Returns the [`SankakuServer`] revision for this extractor.
    fn server(&self) -> SankakuServer;
}

/// Capability of fetching one fully-populated post by id. Only the HTML
/// frontend exposes a per-post page worth scraping.
pub trait SinglePostFetch {
    /// This is a separate lower level function to map a single post by feeding
    /// the raw detail page body.
    fn map_post(&self, raw: &str, post_id: &str) -> Result<Post, ExtractorError>;

    /// Fetch one single post from the server.
    fn get_post(
        &self,
        post_id: &str,
    ) -> impl Future<Output = Result<Post, ExtractorError>> + Send;
}

//! Main representation of a Sankaku post
//!
//! # Post
//! A [`Post` struct](Post) is the common representation of a post returned by any
//! of the server revisions.
//!
//! Not every revision reports every field: the API fills everything except the
//! source title, a scraped listing page only carries the id, tag names and
//! thumbnail, and a scraped detail page fills everything except the rating.
//! Fields a revision cannot produce stay empty (or `None`) instead of failing
//! the call.
use serde::{Deserialize, Serialize};

use std::fmt::Debug;

use crate::SankakuServer;

use self::{rating::Rating, tags::Tag};

pub mod rating;
pub mod tags;

/// Source attribution of a post, as reported by the detail page or the API.
///
/// The API only reports a bare URL, in which case the title stays empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: String,
}

/// Catchall model for the parts of a post needed to identify it and locate its files.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// ID of the post given by the server. Scraped ids are attribute text, so this
    /// stays a string and degrades to empty when the markup is missing it.
    pub id: String,
    /// The server revision this post was extracted from
    pub server: SankakuServer,
    /// MD5 hash of the original file. On scraped pages this is the filename stem
    /// of the original file URL.
    pub md5: String,
    /// Rating of the post. Stays [`Rating::Unknown`] on scraped pages, which no
    /// longer carry it.
    pub rating: Rating,
    /// Set of tags associated with the post.
    pub tags: Vec<Tag>,
    /// Thumbnail URL. Synthesized from the MD5 hash on detail pages.
    pub preview_url: String,
    /// Resized ("sample") file URL, when the server offers one.
    pub sample_url: String,
    /// Direct URL of the original file.
    pub file_url: String,
    /// Source attribution, when the post has one.
    pub source: Option<Source>,
}

impl Debug for Post {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Post")
            .field("Post ID", &self.id)
            .field("Server", &self.server)
            .field("MD5 Hash", &self.md5)
            .field("Rating", &self.rating)
            .field("Tag List", &self.tags)
            .field("Preview URL", &self.preview_url)
            .field("Sample URL", &self.sample_url)
            .field("File URL", &self.file_url)
            .field("Source", &self.source)
            .finish()
    }
}

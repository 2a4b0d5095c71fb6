//! # Post Tags Module
//!
//! This module defines structures for representing and categorizing the tags
//! attached to a post.
//!
//! The API reports tags as full records (id, usage count, numeric category,
//! display name and a localized name). Scraped pages only expose the display
//! name, plus a `tag-type-*` class on the sidebar when the page bothers to
//! categorize them; the [`Tag::named`] and [`Tag::with_type`] constructors
//! cover those cases.

use serde::{Deserialize, Serialize};

/// Represents a single tag associated with a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    /// Numeric id of the tag on the server. Zero for scraped tags.
    id: u64,
    /// How many posts carry this tag. Zero for scraped tags.
    count: u64,
    /// The category of the tag.
    tag_type: TagType,
    /// The textual content of the tag (e.g. "blue_sky", "solo_focus").
    name: String,
    /// Localized (Japanese) name, reported by the API only.
    name_ja: Option<String>,
}

/// Categorizes the type of a `Tag`.
///
/// The API reports these as numeric codes; the HTML sidebar colors them through
/// `tag-type-*` class names. Both map onto this enum.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TagType {
    /// General descriptive tags about the content or scene.
    General,
    /// Tags identifying the artist(s) of the work.
    Artist,
    /// Tags identifying the studio or circle behind the work.
    Studio,
    /// Tags related to copyright, series or franchise.
    Copyright,
    /// Tags identifying specific characters depicted.
    Character,
    /// Tags describing the medium of the work (e.g. "3d", "photoshop").
    Medium,
    /// Meta-tags about the post itself (e.g. "high_resolution", "tagme").
    Meta,
    /// A catch-all or unspecified tag type.
    Any,
}

impl TagType {
    /// Maps the server's numeric category code to a variant.
    pub const fn from_code(code: u8) -> Self {
        match code {
            0 => Self::General,
            1 => Self::Artist,
            2 => Self::Studio,
            3 => Self::Copyright,
            4 => Self::Character,
            8 => Self::Medium,
            9 => Self::Meta,
            _ => Self::Any,
        }
    }

    /// Maps a `tag-type-*` class attribute from the sidebar markup to a variant.
    ///
    /// The attribute may carry several class names; any unrecognized combination
    /// falls back to [`TagType::Any`].
    pub fn from_class_name(class: &str) -> Self {
        for token in class.split_whitespace() {
            let tag_type = match token {
                "tag-type-general" => Self::General,
                "tag-type-artist" => Self::Artist,
                "tag-type-studio" => Self::Studio,
                "tag-type-copyright" => Self::Copyright,
                "tag-type-character" => Self::Character,
                "tag-type-medium" => Self::Medium,
                "tag-type-meta" => Self::Meta,
                _ => continue,
            };
            return tag_type;
        }
        Self::Any
    }
}

impl Tag {
    /// Creates a full `Tag` as reported by the API.
    pub fn new(id: u64, count: u64, tag_type: TagType, name: &str, name_ja: Option<String>) -> Self {
        Self {
            id,
            count,
            tag_type,
            name: name.to_string(),
            name_ja,
        }
    }

    /// Creates a bare `Tag` from a scraped display name.
    pub fn named(name: &str) -> Self {
        Self::with_type(name, TagType::Any)
    }

    /// Creates a `Tag` from a scraped display name with a known category.
    pub fn with_type(name: &str, tag_type: TagType) -> Self {
        Self {
            id: 0,
            count: 0,
            tag_type,
            name: name.to_string(),
            name_ja: None,
        }
    }

    /// Returns the numeric id of the tag.
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Returns how many posts carry this tag.
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Returns the [`TagType`] of the tag.
    pub const fn tag_type(&self) -> TagType {
        self.tag_type
    }

    /// Returns a reference to the textual content of the tag.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the localized name of the tag, when the server reported one.
    pub fn name_ja(&self) -> Option<&str> {
        self.name_ja.as_deref()
    }
}

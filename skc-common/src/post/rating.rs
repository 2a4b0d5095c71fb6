//! General enum for the rating of a post
//! # Post Rating
//! Sankaku classifies posts by how explicit they are, using the usual booru
//! three-letter scheme:
//! * `Safe`: posts that don't involve anything suggestive.
//! * `Questionable`: posts with some degree of nudity or suggestive elements.
//! * `Explicit`: posts with explicit elements of pornography, gore, etc.
//!
//! The API reports the one-letter form; scraped pages stopped reporting a
//! rating entirely, which is what the `Unknown` variant is for.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub enum Rating {
    /// Represents posts that don't involve anything suggestive or sensitive.
    Safe,
    /// Represents posts that have some degree of nudity or sexually suggestive elements.
    Questionable,
    /// Represents posts that have explicit elements of pornography, gore, death, etc.
    Explicit,
    /// Represents a failure to parse the `rating` field into one of the above, or a
    /// page revision that doesn't carry a rating at all.
    #[default]
    Unknown,
}

impl Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Safe => write!(f, "Safe"),
            Self::Questionable => write!(f, "Questionable"),
            Self::Explicit => write!(f, "Explicit"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

impl Rating {
    /// Guess the variant according to the rating field present in the post
    pub fn from_rating_str(s: &str) -> Self {
        match s {
            "s" | "safe" => Self::Safe,
            "q" | "questionable" => Self::Questionable,
            "e" | "explicit" => Self::Explicit,
            _ => Self::Unknown,
        }
    }
}

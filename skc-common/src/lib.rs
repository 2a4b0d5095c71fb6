//! Common data structures shared by the Sankaku post extractors.

// Public Exports
pub use log;
pub use reqwest;
pub use serde;
pub use serde_json;
pub use tokio;

use std::fmt::Display;

use serde::{Deserialize, Serialize};

pub mod macros;
pub mod post;

/// The server surfaces the Sankaku frontends expose, and their underlying attributes.
///
/// The site went through several frontend revisions. The two that matter for post
/// metadata are the JSON API and the plain HTML pages, served from different hosts.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, PartialEq, Eq, Serialize, Deserialize)]
pub enum SankakuServer {
    /// The JSON API at ```https://capi-v2.sankakucomplex.com```.
    CapiV2,
    /// The HTML frontend at ```https://chan.sankakucomplex.com```.
    Chan,
}

impl Display for SankakuServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CapiV2 => write!(f, "capi"),
            Self::Chan => write!(f, "chan"),
        }
    }
}

impl SankakuServer {
    /// Returns the base URL for the server.
    #[inline]
    pub const fn base_url(&self) -> &'static str {
        match self {
            Self::CapiV2 => "https://capi-v2.sankakucomplex.com",
            Self::Chan => "https://chan.sankakucomplex.com",
        }
    }

    /// Returns the host serving post files and previews.
    ///
    /// Only the chan frontend has a separate static host; the API reports
    /// absolute file URLs directly.
    #[inline]
    pub const fn static_url(&self) -> Option<&'static str> {
        match self {
            Self::CapiV2 => None,
            Self::Chan => Some("https://cs.sankakucomplex.com"),
        }
    }
}

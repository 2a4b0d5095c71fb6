//! Per-server configuration for the extractors.
//!
//! Everything that used to be a fixed global in older clients (user-agent,
//! base hosts, page-size limit) lives here as plain configuration data, with
//! [`DEFAULT_SERVERS`] providing the stock entries for both server revisions.
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::time::Duration;

use skc_common::SankakuServer;

pub(crate) const DEFAULT_EXT_UA: &str =
    concat!("Rust Sankaku Post Extractor/", env!("CARGO_PKG_VERSION"));

pub static DEFAULT_SERVERS: Lazy<HashMap<String, ServerConfig>> = Lazy::new(|| {
    let mut hmap = HashMap::with_capacity(2);
    hmap.insert(
        "capi".to_string(),
        ServerConfig {
            name: "capi".to_string(),
            pretty_name: "Sankaku Channel API".to_string(),
            server: SankakuServer::CapiV2,
            extractor_user_agent: DEFAULT_EXT_UA.to_string(),
            base_url: SankakuServer::CapiV2.base_url().to_string(),
            static_url: None,
            max_post_limit: 100,
            request_timeout: None,
        },
    );
    hmap.insert(
        "chan".to_string(),
        ServerConfig {
            name: "chan".to_string(),
            pretty_name: "Sankaku Channel".to_string(),
            server: SankakuServer::Chan,
            extractor_user_agent: DEFAULT_EXT_UA.to_string(),
            base_url: SankakuServer::Chan.base_url().to_string(),
            static_url: SankakuServer::Chan.static_url().map(String::from),
            max_post_limit: 20,
            request_timeout: None,
        },
    );
    hmap
});

/// Struct that defines all settings for reaching a specific server revision.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Used as an identification tag for picking an entry out of [`DEFAULT_SERVERS`].
    pub name: String,
    pub pretty_name: String,
    pub server: SankakuServer,
    pub extractor_user_agent: String,
    pub base_url: String,
    /// Host serving post files and previews. Only the chan frontend has one.
    pub static_url: Option<String>,
    /// Page size requested from the API; the HTML frontend pages at its own fixed size.
    pub max_post_limit: u16,
    /// Deadline applied to every outgoing request. Dropping the returned future
    /// cancels an in-flight call as usual.
    pub request_timeout: Option<Duration>,
}

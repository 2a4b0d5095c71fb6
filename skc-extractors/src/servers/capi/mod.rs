//! Post extractor for the JSON API server (`https://capi-v2.sankakucomplex.com`)
//!
//! The capi extractor has the following features:
//! - Bearer-token authentication
//! - Full tag records (ids, usage counts, localized names)
//!
use std::fmt::Display;

use skc_common::{
    client, join_tags,
    log::debug,
    post::{rating::Rating, tags::Tag, tags::TagType, Post, Source},
    reqwest::{Client, Url},
    serde_json, SankakuServer,
};

use self::models::ApiPost;
use crate::auth::SankakuAuth;
use crate::error::ExtractorError;
use crate::extractor_config::{ServerConfig, DEFAULT_SERVERS};
use crate::servers::Extractor;

mod models;

/// Main object to fetch posts from the JSON API
#[derive(Debug, Clone)]
pub struct CapiExtractor {
    client: Client,
    tags: Vec<String>,
    tag_string: String,
    auth: SankakuAuth,
    config: ServerConfig,
    language: String,
}

impl CapiExtractor {
    /// Language selector sent with every search. The API defaults to English
    /// names and descriptions.
    pub fn set_language(&mut self, language: &str) -> &mut Self {
        self.language = language.to_string();
        self
    }

    /// The tags this extractor was set up with.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Extractor for CapiExtractor {
    fn new<S>(tags: &[S], auth: SankakuAuth) -> Result<Self, ExtractorError>
    where
        S: ToString + Display,
    {
        Self::new_with_config(tags, auth, DEFAULT_SERVERS.get("capi").unwrap().clone())
    }

    fn new_with_config<S>(
        tags: &[S],
        auth: SankakuAuth,
        config: ServerConfig,
    ) -> Result<Self, ExtractorError>
    where
        S: ToString + Display,
    {
        Url::parse(&config.base_url).map_err(|_| ExtractorError::InvalidUrl {
            url: config.base_url.clone(),
        })?;

        let client = client!(config)?;

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
            language: String::from("english"),
        })
    }

    async fn get_post_list(&self, page: u16) -> Result<Vec<Post>, ExtractorError> {
        if page == 0 {
            return Err(ExtractorError::ZeroPage);
        }

        let url = format!("{}/posts?tags={}", self.config.base_url, self.tag_string);

        debug!("Fetching posts from page {}", page);
        let request = self.auth.append_to(self.client.get(url).query(&[
            ("page", page.to_string()),
            ("limit", self.config.max_post_limit.to_string()),
            ("language", self.language.clone()),
        ]));

        let response = request.send().await?;
        let status = response.status().as_u16();
        if status >= 400 {
            let message = response.text().await.unwrap_or_default();
            return Err(ExtractorError::HttpFailure { status, message });
        }

        let post_array = response.text().await?;

        let mtx = self.map_posts(&post_array)?;

        debug!("List size: {}", mtx.len());
        Ok(mtx)
    }

    fn map_posts(&self, raw: &str) -> Result<Vec<Post>, ExtractorError> {
        let parsed_json: Vec<ApiPost> = serde_json::from_str(raw)?;

        let mapper_iter = parsed_json.into_iter().map(|c| {
            let tag_list = c
                .tags
                .unwrap_or_default()
                .into_iter()
                .map(|t| {
                    Tag::new(
                        t.id.unwrap_or_default(),
                        t.count.unwrap_or_default(),
                        TagType::from_code(t.tag_type.unwrap_or(u8::MAX)),
                        &t.name.unwrap_or_default(),
                        t.name_ja,
                    )
                })
                .collect();

            // The API only reports a bare source URL, never a title.
            let source = c
                .source
                .filter(|src| !src.is_empty())
                .map(|url| Source {
                    title: String::new(),
                    url,
                });

            Post {
                id: c.id.map(|id| id.to_string()).unwrap_or_default(),
                server: SankakuServer::CapiV2,
                md5: c.md5.unwrap_or_default(),
                rating: Rating::from_rating_str(&c.rating.unwrap_or_default()),
                tags: tag_list,
                preview_url: c.preview_url.unwrap_or_default(),
                sample_url: c.sample_url.unwrap_or_default(),
                file_url: c.file_url.unwrap_or_default(),
                source,
            }
        });

        Ok(Vec::from_iter(mapper_iter))
    }

    fn client(&self) -> Client {
        self.client.clone()
    }

    fn server(&self) -> SankakuServer {
        SankakuServer::CapiV2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW_POSTS: &str = r#"[
        {
            "id": 6397602,
            "md5": "aabbccddeeff00112233445566778899",
            "rating": "s",
            "file_url": "https://cs.sankakucomplex.com/data/aa/bb/aabbccddeeff00112233445566778899.jpg",
            "sample_url": "https://cs.sankakucomplex.com/data/sample/aa/bb/aabbccddeeff00112233445566778899.jpg",
            "preview_url": "https://cs.sankakucomplex.com/data/preview/aa/bb/aabbccddeeff00112233445566778899.jpg",
            "source": "https://www.pixiv.net/artworks/1",
            "tags": [
                {"id": 10, "count": 3200, "type": 1, "name": "some_artist", "name_ja": "絵師"},
                {"id": 11, "count": 900000, "type": 0, "name": "sky", "name_ja": null}
            ]
        },
        {"id": 6397603}
    ]"#;

    fn extractor() -> CapiExtractor {
        CapiExtractor::new(&["sky"], SankakuAuth::Anonymous).unwrap()
    }

    #[test]
    fn maps_full_api_records() {
        let posts = extractor().map_posts(RAW_POSTS).unwrap();
        assert_eq!(posts.len(), 2);

        let first = &posts[0];
        assert_eq!(first.id, "6397602");
        assert_eq!(first.server, SankakuServer::CapiV2);
        assert_eq!(first.md5, "aabbccddeeff00112233445566778899");
        assert_eq!(first.rating, Rating::Safe);
        assert_eq!(first.tags.len(), 2);
        assert_eq!(first.tags[0].name(), "some_artist");
        assert_eq!(first.tags[0].tag_type(), TagType::Artist);
        assert_eq!(first.tags[0].name_ja(), Some("絵師"));
        assert_eq!(first.tags[1].count(), 900000);
        let source = first.source.as_ref().unwrap();
        assert!(source.title.is_empty());
        assert_eq!(source.url, "https://www.pixiv.net/artworks/1");
    }

    #[test]
    fn missing_fields_map_to_defaults() {
        let posts = extractor().map_posts(RAW_POSTS).unwrap();

        let bare = &posts[1];
        assert_eq!(bare.id, "6397603");
        assert!(bare.md5.is_empty());
        assert_eq!(bare.rating, Rating::Unknown);
        assert!(bare.tags.is_empty());
        assert!(bare.source.is_none());
    }

    #[test]
    fn malformed_json_fails_the_whole_call() {
        let result = extractor().map_posts("[{\"id\": \"not-a-number\"}]");
        assert!(matches!(result, Err(ExtractorError::JsonDecodeFail(_))));
    }

    #[test]
    fn malformed_host_is_rejected_at_construction() {
        let mut config = DEFAULT_SERVERS.get("capi").unwrap().clone();
        config.base_url = String::from("not a host");

        let result = CapiExtractor::new_with_config(&["sky"], SankakuAuth::Anonymous, config);
        assert!(matches!(
            result,
            Err(ExtractorError::InvalidUrl { url }) if url == "not a host"
        ));
    }
}

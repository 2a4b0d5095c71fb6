//! End-to-end extractor behavior against a mock HTTP server: status handling,
//! credential headers and deadline propagation.
use std::time::Duration;

use skc_common::{post::rating::Rating, post::tags::TagType, tokio, SankakuServer};

use skc_extractors::auth::SankakuAuth;
use skc_extractors::error::ExtractorError;
use skc_extractors::extractor_config::ServerConfig;
use skc_extractors::prelude::*;

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server: SankakuServer, base_url: String) -> ServerConfig {
    ServerConfig {
        name: String::from("test"),
        pretty_name: String::from("Test Server"),
        server,
        extractor_user_agent: String::from("skc-extractors test/0.0"),
        base_url,
        static_url: Some(String::from("https://static.example")),
        max_post_limit: 100,
        request_timeout: None,
    }
}

const POSTS_JSON: &str = r#"[
    {
        "id": 123,
        "md5": "aabbccddeeff00112233445566778899",
        "rating": "q",
        "file_url": "https://cs.example/data/aabbccddeeff00112233445566778899.jpg",
        "sample_url": "https://cs.example/data/sample/aabbccddeeff00112233445566778899.jpg",
        "preview_url": "https://cs.example/data/preview/aabbccddeeff00112233445566778899.jpg",
        "source": "https://www.pixiv.net/artworks/7",
        "tags": [{"id": 5, "count": 120, "type": 4, "name": "some_character", "name_ja": "キャラ"}]
    }
]"#;

const LISTING_HTML: &str = r#"
    <html><body><div id="content">
        <span class="thumb" id="p123">
            <img class="preview" src="//img.example/x.jpg" title="tag_a tag_b">
        </span>
    </div></body></html>
"#;

const DETAIL_HTML: &str = r#"
    <html><body>
    <div id="stats"><ul>
        <li>Source: <a href="//www.example.com/art/1">my artwork</a></li>
        <li>Original: <a href="//cs.example/data/abcdef123.jpg" id="highres">1600x1200</a></li>
    </ul></div>
    <ul id="tag-sidebar">
        <li class="tag-type-general"><a href="/en/?tags=tag_name">tag name</a></li>
    </ul>
    </body></html>
"#;

#[tokio::test]
async fn capi_sends_bearer_token_and_maps_posts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("tags", "sky"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "100"))
        .and(query_param("language", "english"))
        .and(header("authorization", "Bearer token123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(POSTS_JSON))
        .mount(&server)
        .await;

    let extractor = CapiExtractor::new_with_config(
        &["sky"],
        SankakuAuth::Bearer(String::from("token123")),
        test_config(SankakuServer::CapiV2, server.uri()),
    )
    .unwrap();

    let posts = extractor.get_post_list(1).await.unwrap();
    assert_eq!(posts.len(), 1);

    let first = &posts[0];
    assert_eq!(first.id, "123");
    assert_eq!(first.rating, Rating::Questionable);
    assert_eq!(first.md5, "aabbccddeeff00112233445566778899");
    assert_eq!(first.tags[0].name(), "some_character");
    assert_eq!(first.tags[0].tag_type(), TagType::Character);
    assert_eq!(first.tags[0].name_ja(), Some("キャラ"));
    assert_eq!(first.source.as_ref().unwrap().url, "https://www.pixiv.net/artworks/7");
}

#[tokio::test]
async fn capi_error_status_never_reaches_the_decoder() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let extractor = CapiExtractor::new_with_config(
        &["sky"],
        SankakuAuth::Anonymous,
        test_config(SankakuServer::CapiV2, server.uri()),
    )
    .unwrap();

    let result = extractor.get_post_list(1).await;
    match result {
        Err(ExtractorError::HttpFailure { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "internal error");
        }
        other => panic!("expected an HTTP failure, got {:?}", other),
    }
}

#[tokio::test]
async fn capi_rejects_page_zero_without_a_request() {
    let extractor = CapiExtractor::new(&["sky"], SankakuAuth::Anonymous).unwrap();

    let result = extractor.get_post_list(0).await;
    assert!(matches!(result, Err(ExtractorError::ZeroPage)));
}

#[tokio::test]
async fn chan_sends_the_session_cookie_on_listing_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/en/post/index"))
        .and(query_param("tags", "sky"))
        .and(query_param("page", "1"))
        .and(header("cookie", "_sankakucomplex_session=sess123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LISTING_HTML))
        .mount(&server)
        .await;

    let extractor = ChanExtractor::new_with_config(
        &["sky"],
        SankakuAuth::session("sess123"),
        test_config(SankakuServer::Chan, server.uri()),
    )
    .unwrap();

    let posts = extractor.get_post_list(1).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, "123");
    assert_eq!(posts[0].preview_url, "https://img.example/x.jpg");
}

#[tokio::test]
async fn chan_listing_error_status_is_a_hard_failure() {
    let server = MockServer::start().await;

    let extractor = ChanExtractor::new_with_config(
        &["sky"],
        SankakuAuth::Anonymous,
        test_config(SankakuServer::Chan, server.uri()),
    )
    .unwrap();

    // Nothing mounted: the mock server answers 404.
    let result = extractor.get_post_list(1).await;
    assert!(matches!(
        result,
        Err(ExtractorError::HttpFailure { status: 404, .. })
    ));
}

#[tokio::test]
async fn chan_fetches_a_full_post_detail() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/en/post/show/6397602"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DETAIL_HTML))
        .mount(&server)
        .await;

    let extractor = ChanExtractor::new_with_config(
        &["sky"],
        SankakuAuth::session("sess123"),
        test_config(SankakuServer::Chan, server.uri()),
    )
    .unwrap();

    let post = extractor.get_post("6397602").await.unwrap();
    assert_eq!(post.id, "6397602");
    assert_eq!(post.md5, "abcdef123");
    assert_eq!(post.file_url, "https://cs.example/data/abcdef123.jpg");
    assert_eq!(
        post.preview_url,
        "https://static.example/data/preview/ab/cd/abcdef123.jpg"
    );
    assert_eq!(post.source.as_ref().unwrap().title, "my artwork");
    assert_eq!(post.tags[0].name(), "tag_name");
}

#[tokio::test]
async fn chan_detail_without_original_link_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/en/post/show/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<div id=\"stats\"><ul><li>Posted: today</li></ul></div>"),
        )
        .mount(&server)
        .await;

    let extractor = ChanExtractor::new_with_config(
        &["sky"],
        SankakuAuth::Anonymous,
        test_config(SankakuServer::Chan, server.uri()),
    )
    .unwrap();

    let result = extractor.get_post("1").await;
    assert!(matches!(result, Err(ExtractorError::MissingOriginalFile)));
}

#[tokio::test]
async fn configured_deadline_aborts_a_stalled_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&server)
        .await;

    let mut config = test_config(SankakuServer::CapiV2, server.uri());
    config.request_timeout = Some(Duration::from_millis(100));

    let extractor =
        CapiExtractor::new_with_config(&["sky"], SankakuAuth::Anonymous, config).unwrap();

    let result = extractor.get_post_list(1).await;
    match result {
        Err(ExtractorError::ConnectionError(source)) => assert!(source.is_timeout()),
        other => panic!("expected a timeout, got {:?}", other),
    }
}

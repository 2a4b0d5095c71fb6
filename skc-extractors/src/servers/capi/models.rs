use skc_common::serde::{self, Deserialize, Serialize};

/// Raw post record as the API reports it. Fields the server omits decode to
/// `None` and map to empty values downstream; only a malformed document fails
/// the call.
#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "self::serde")]
pub struct ApiPost {
    pub id: Option<u64>,
    pub md5: Option<String>,
    pub rating: Option<String>,
    pub file_url: Option<String>,
    pub sample_url: Option<String>,
    pub preview_url: Option<String>,
    pub source: Option<String>,
    pub tags: Option<Vec<ApiTag>>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "self::serde")]
pub struct ApiTag {
    pub id: Option<u64>,
    pub count: Option<u64>,
    #[serde(rename = "type")]
    pub tag_type: Option<u8>,
    pub name: Option<String>,
    pub name_ja: Option<String>,
}

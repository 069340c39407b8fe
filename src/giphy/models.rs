use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClipImages {
    pub original: ImageUrl,
    pub fixed_height: ImageUrl,
}

/// A single clip as returned by the Giphy API. Only the fields used
/// for chat replies are kept.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GiphyClip {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub title: String,
    pub images: ClipImages,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GiphyResponse {
    pub data: Vec<GiphyClip>,
}

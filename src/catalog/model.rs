// src/catalog/model.rs
//
// Wire shapes for the catalog API. Every response is wrapped as
// `{ "data": { "results": [ ... ] } }`; only the fields the app reads are
// modelled, unknown fields are ignored. A missing `data`, `results`, or
// required item field fails deserialization and aborts the request.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: DataContainer<T>,
}

#[derive(Debug, Deserialize)]
pub struct DataContainer<T> {
    /// Upstream count of all matches, independent of paging.
    #[serde(default)]
    pub total: Option<u32>,
    pub results: Vec<T>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Comic {
    pub title: String,
    /// Often `null` upstream; absent and `null` both land as `None`.
    #[serde(default)]
    pub description: Option<String>,
    pub thumbnail: Thumbnail,
    #[serde(default)]
    pub urls: Vec<UrlEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Thumbnail {
    pub path: String,
    pub extension: String,
}

impl Thumbnail {
    pub fn url(&self) -> String {
        format!("{}.{}", self.path, self.extension)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UrlEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

impl Comic {
    /// First url tagged `detail`, if any.
    pub fn detail_url(&self) -> Option<&str> {
        self.urls
            .iter()
            .find(|u| u.kind == crate::config::consts::DETAIL_URL_TYPE)
            .map(|u| u.url.as_str())
    }
}

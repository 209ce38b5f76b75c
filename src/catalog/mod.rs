// src/catalog/mod.rs
//! # Catalog client
//!
//! Three read-only queries against the public comics catalog:
//!
//! - [`CatalogClient::list_characters`] pages through `/v1/public/characters`
//!   (100 per page, at most 2000 raw entries) and returns the unique names,
//!   sorted ascending.
//! - [`CatalogClient::find_character_id`] looks a name up and returns the first
//!   match's id, or `None` when nothing matches. Ambiguous names are not
//!   disambiguated.
//! - [`CatalogClient::list_comics`] returns a character's comics inside an
//!   inclusive year range, newest on-sale date first.
//!
//! Every request is signed fresh via [`AuthParams::now`]. No retries: transport
//! errors, non-2xx statuses, and bodies that don't match [`model::Envelope`]
//! all come back as `Err` for the caller to surface.

pub mod model;

use std::collections::BTreeSet;
use std::error::Error;

use serde::de::DeserializeOwned;

use crate::{
    config::{
        Credentials,
        consts::{CHARACTERS_PATH, CHARACTER_CEILING, ORDER_BY_ONSALE_DESC, PAGE_SIZE},
        options::QueryOptions,
    },
    core::{AuthParams, HttpGet, Query, ReqwestGet},
    decade::YearRange,
    progress::Progress,
};

pub use model::{Character, Comic};

/// The API rejects `limit` above this.
pub const MAX_LIMIT: u32 = 100;

pub struct CatalogClient<H: HttpGet> {
    http: H,
    creds: Credentials,
    base_url: String,
}

impl CatalogClient<ReqwestGet> {
    /// Real HTTPS client for the configured base URL.
    pub fn connect(creds: Credentials, opts: &QueryOptions) -> Result<Self, Box<dyn Error>> {
        Ok(Self::new(ReqwestGet::new()?, creds, opts.base_url.clone()))
    }
}

impl<H: HttpGet> CatalogClient<H> {
    pub fn new(http: H, creds: Credentials, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, creds, base_url }
    }

    pub fn base_url(&self) -> &str { &self.base_url }

    pub fn characters_url(&self) -> String {
        join!(&self.base_url, CHARACTERS_PATH)
    }

    pub fn comics_url(&self, character_id: u64) -> String {
        format!("{}{}/{}/comics", self.base_url, CHARACTERS_PATH, character_id)
    }

    /// Signed GET → `data`.
    fn fetch_page<T: DeserializeOwned>(
        &self,
        url: &str,
        params: Query,
    ) -> Result<model::DataContainer<T>, Box<dyn Error>> {
        let mut query = AuthParams::now(&self.creds).into_query();
        query.extend(params);

        let body = self.http.get(url, &query)?;
        let envelope: model::Envelope<T> = serde_json::from_str(&body)
            .map_err(|e| format!("Unexpected response shape from {url}: {e}"))?;
        Ok(envelope.data)
    }

    /// Signed GET → `data.results`.
    fn fetch<T: DeserializeOwned>(&self, url: &str, params: Query) -> Result<Vec<T>, Box<dyn Error>> {
        Ok(self.fetch_page(url, params)?.results)
    }

    /// All character names (up to the paging ceiling), unique and sorted.
    pub fn list_characters(
        &self,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<Vec<String>, Box<dyn Error>> {
        let max_pages = (CHARACTER_CEILING / PAGE_SIZE) as usize;
        if let Some(p) = progress.as_deref_mut() {
            p.begin(max_pages);
        }

        let res = self.collect_character_names(progress.as_deref_mut());

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        res
    }

    fn collect_character_names(
        &self,
        mut progress: Option<&mut (dyn Progress + '_)>,
    ) -> Result<Vec<String>, Box<dyn Error>> {
        let url = self.characters_url();
        let mut names: BTreeSet<String> = BTreeSet::new();
        let mut raw = 0usize;
        let mut upstream_total: Option<u32> = None;

        for offset in (0..CHARACTER_CEILING).step_by(PAGE_SIZE as usize) {
            let data: model::DataContainer<Character> = self.fetch_page(
                &url,
                vec![
                    (s!("limit"), PAGE_SIZE.to_string()),
                    (s!("offset"), offset.to_string()),
                ],
            )?;
            upstream_total = upstream_total.or(data.total);
            let page = data.results;

            if page.is_empty() {
                logd!("Catalog: Empty page at offset {}, stopping", offset);
                break;
            }

            raw += page.len();
            names.extend(page.into_iter().map(|c| c.name));

            if let Some(p) = progress.as_deref_mut() {
                p.item_done(offset);
            }
        }

        match upstream_total {
            Some(total) => logf!(
                "Catalog: Characters raw={} unique={} upstream_total={}",
                raw,
                names.len(),
                total
            ),
            None => logf!("Catalog: Characters raw={} unique={}", raw, names.len()),
        }
        Ok(names.into_iter().collect())
    }

    /// First match's id, or `None` when the name matches nothing.
    pub fn find_character_id(&self, name: &str) -> Result<Option<u64>, Box<dyn Error>> {
        let results: Vec<Character> = self.fetch(
            &self.characters_url(),
            vec![(s!("name"), s!(name))],
        )?;

        if results.len() > 1 {
            logd!("Catalog: {} matches for {:?}, taking the first", results.len(), name);
        }
        Ok(results.into_iter().next().map(|c| c.id))
    }

    /// Up to `limit` comics in `range`, newest on-sale date first.
    /// `limit` is clamped to `1..=MAX_LIMIT`: 0 asks for one comic.
    pub fn list_comics(
        &self,
        character_id: u64,
        range: YearRange,
        limit: u32,
    ) -> Result<Vec<Comic>, Box<dyn Error>> {
        let limit = limit.clamp(1, MAX_LIMIT);
        let comics: Vec<Comic> = self.fetch(
            &self.comics_url(character_id),
            vec![
                (s!("limit"), limit.to_string()),
                (s!("orderBy"), s!(ORDER_BY_ONSALE_DESC)),
                (s!("dateRange"), range.date_range_param()),
            ],
        )?;
        logf!(
            "Catalog: Comics id={} range={} count={}",
            character_id,
            range.date_range_param(),
            comics.len()
        );
        Ok(comics)
    }
}

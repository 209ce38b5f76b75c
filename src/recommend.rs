// src/recommend.rs
//
// One recommendation cycle per user selection:
//   name → character id → comics in the decade → display/export records.
//
// The character list is the only thing kept between cycles: fetched once per
// process and held in `CharacterCache` until explicitly invalidated.

use std::error::Error;

use crate::{
    catalog::{CatalogClient, Comic, MAX_LIMIT},
    config::consts::{EXPORT_HEADERS, NO_DESCRIPTION},
    core::HttpGet,
    decade::{Decade, YearRange},
    progress::Progress,
};

/// A comic shaped for display and export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub detail_url: String,
}

impl Recommendation {
    /// Description is kept verbatim; only an absent or `null` one is defaulted.
    pub fn from_comic(comic: &Comic) -> Self {
        let description = comic
            .description
            .clone()
            .unwrap_or_else(|| s!(NO_DESCRIPTION));

        Self {
            title: comic.title.clone(),
            description,
            image_url: comic.thumbnail.url(),
            detail_url: s!(comic.detail_url().unwrap_or("")),
        }
    }

    /// Export row, column order matching `export_headers()`.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.description.clone(),
            self.image_url.clone(),
            self.detail_url.clone(),
        ]
    }
}

pub fn export_headers() -> Vec<String> {
    EXPORT_HEADERS.iter().map(|h| s!(*h)).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The name resolved to no character.
    NotFound,
    /// Character exists but has no comics in the range.
    Empty,
    Found(Vec<Recommendation>),
}

/// Result of one cycle, tagged with what was asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Picks {
    pub character: String,
    pub decade: Decade,
    pub outcome: Outcome,
}

impl Picks {
    pub fn heading(&self) -> String {
        format!("Top Comic Picks for {} ({})", self.character, self.decade)
    }

    /// Rendered items; empty unless `Found`.
    pub fn items(&self) -> &[Recommendation] {
        match &self.outcome {
            Outcome::Found(v) => v,
            _ => &[],
        }
    }

    /// User-facing message for the non-`Found` outcomes.
    pub fn message(&self) -> Option<&'static str> {
        match self.outcome {
            Outcome::NotFound => Some("Character not found. Please try another."),
            Outcome::Empty => Some("No comics found for that character and timeframe."),
            Outcome::Found(_) => None,
        }
    }
}

/// Process-lifetime memo for the character list. One fixed slot: there is
/// only ever one list.
#[derive(Default)]
pub struct CharacterCache {
    names: Option<Vec<String>>,
}

impl CharacterCache {
    pub fn new() -> Self { Self::default() }

    pub fn invalidate(&mut self) {
        self.names = None;
    }

    /// Cached names, fetching on first use. A failed fetch leaves the cache empty.
    pub fn get_or_fetch<H: HttpGet>(
        &mut self,
        client: &CatalogClient<H>,
        progress: Option<&mut dyn Progress>,
    ) -> Result<&[String], Box<dyn Error>> {
        if self.names.is_none() {
            let names = client.list_characters(progress)?;
            self.names = Some(names);
        } else {
            logd!("Cache: Character list hit");
        }
        Ok(self.names.as_deref().unwrap_or(&[]))
    }
}

/// Event handler the front ends call once per (character, decade) selection.
pub struct Recommender<H: HttpGet> {
    client: CatalogClient<H>,
    limit: u32,
    characters: CharacterCache,
}

impl<H: HttpGet> Recommender<H> {
    /// `limit` is clamped to `1..=MAX_LIMIT`, see [`Recommender::set_limit`].
    pub fn new(client: CatalogClient<H>, limit: u32) -> Self {
        Self { client, limit: clamp_limit(limit), characters: CharacterCache::new() }
    }

    /// Comic count asked for per cycle.
    pub fn limit(&self) -> u32 { self.limit }

    /// Set the per-cycle comic count. The API takes `1..=MAX_LIMIT`, so 0
    /// becomes 1 and anything above the maximum becomes the maximum.
    pub fn set_limit(&mut self, limit: u32) { self.limit = clamp_limit(limit); }

    /// Sorted unique character names, memoized.
    pub fn characters(
        &mut self,
        progress: Option<&mut dyn Progress>,
    ) -> Result<&[String], Box<dyn Error>> {
        self.characters.get_or_fetch(&self.client, progress)
    }

    /// Drop the memoized list; the next `characters` call refetches.
    pub fn reload_characters(&mut self) {
        self.characters.invalidate();
    }

    pub fn recommend(&self, character: &str, decade: Decade) -> Result<Picks, Box<dyn Error>> {
        self.recommend_in(character, decade, decade.years())
    }

    /// Same as `recommend` with an explicit year span (the decade is only a label).
    pub fn recommend_in(
        &self,
        character: &str,
        decade: Decade,
        range: YearRange,
    ) -> Result<Picks, Box<dyn Error>> {
        logf!("Recommend: Begin character={:?} decade={}", character, decade);

        let outcome = match self.client.find_character_id(character)? {
            None => {
                logf!("Recommend: {:?} not found", character);
                Outcome::NotFound
            }
            Some(id) => {
                let comics = self.client.list_comics(id, range, self.limit)?;
                if comics.is_empty() {
                    Outcome::Empty
                } else {
                    Outcome::Found(comics.iter().map(Recommendation::from_comic).collect())
                }
            }
        };

        Ok(Picks { character: s!(character), decade, outcome })
    }
}

fn clamp_limit(limit: u32) -> u32 {
    let clamped = limit.clamp(1, MAX_LIMIT);
    if clamped != limit {
        logd!("Recommend: Limit {} clamped to {}", limit, clamped);
    }
    clamped
}

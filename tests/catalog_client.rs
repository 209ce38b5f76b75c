// tests/catalog_client.rs
//
// Catalog queries against a canned transport: paging bounds, resolution,
// and the exact parameters sent upstream.

mod common;

use comic_recs::{decade::YearRange, progress::Progress};
use common::*;

#[test]
fn character_list_is_unique_sorted_and_stops_on_empty_page() {
    let fake = FakeCatalog::new(|req| {
        Ok(match req.param("offset") {
            Some("0") => characters_page(&[(3, "Thor"), (1, "Hulk"), (2, "Captain America")]),
            Some("100") => characters_page(&[(1, "Hulk"), (4, "Abomination")]),
            _ => characters_page(&[]),
        })
    });

    let names = client(&fake).list_characters(None).unwrap();
    assert_eq!(names, vec!["Abomination", "Captain America", "Hulk", "Thor"]);

    // two full pages + the empty one that stops the loop
    assert_eq!(fake.count(), 3);
    for req in fake.requests.borrow().iter() {
        assert_eq!(req.url, format!("{BASE}/v1/public/characters"));
        assert_eq!(req.param("limit"), Some("100"));
        assert_signed(req);
    }
}

#[test]
fn character_paging_never_exceeds_twenty_requests() {
    let fake = FakeCatalog::new(|req| {
        let name = format!("Hero {}", req.param("offset").unwrap_or("x"));
        Ok(characters_page(&[(1, name.as_str())]))
    });

    let names = client(&fake).list_characters(None).unwrap();
    assert_eq!(fake.count(), 20);
    assert_eq!(names.len(), 20);

    let offsets: Vec<String> = fake
        .requests
        .borrow()
        .iter()
        .map(|r| r.param("offset").unwrap().to_string())
        .collect();
    assert_eq!(offsets.first().map(String::as_str), Some("0"));
    assert_eq!(offsets.last().map(String::as_str), Some("1900"));
}

#[derive(Default)]
struct Counting {
    begun: usize,
    pages: Vec<u32>,
    finished: bool,
}

impl Progress for Counting {
    fn begin(&mut self, total: usize) { self.begun = total; }
    fn item_done(&mut self, offset: u32) { self.pages.push(offset); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn character_paging_reports_progress() {
    let fake = FakeCatalog::new(|req| {
        Ok(if req.param("offset") == Some("0") {
            characters_page(&[(1, "Hulk")])
        } else {
            characters_page(&[])
        })
    });

    let mut prog = Counting::default();
    client(&fake).list_characters(Some(&mut prog)).unwrap();
    assert_eq!(prog.begun, 20);
    assert_eq!(prog.pages, vec![0]);
    assert!(prog.finished);
}

#[test]
fn paging_error_aborts_the_whole_list() {
    let fake = FakeCatalog::new(|req| match req.param("offset") {
        Some("0") => Ok(characters_page(&[(1, "Hulk")])),
        _ => Err("HTTP error: 500".to_string()),
    });

    let mut prog = Counting::default();
    assert!(client(&fake).list_characters(Some(&mut prog)).is_err());
    assert_eq!(fake.count(), 2);
    assert!(prog.finished);
}

#[test]
fn resolve_takes_first_match_or_none() {
    let fake = FakeCatalog::new(|req| {
        Ok(match req.param("name") {
            Some("Spider-Man") => characters_page(&[(1009610, "Spider-Man"), (42, "Spider-Man")]),
            _ => characters_page(&[]),
        })
    });
    let c = client(&fake);

    assert_eq!(c.find_character_id("Spider-Man").unwrap(), Some(1009610));
    assert_eq!(fake.last().param("name"), Some("Spider-Man"));
    assert_signed(&fake.last());

    assert_eq!(c.find_character_id("Nobody").unwrap(), None);
}

#[test]
fn comics_query_carries_limit_order_and_date_range() {
    let fake = FakeCatalog::new(|_| Ok(comics_page(vec![comic("A", None, None)])));
    let c = client(&fake);

    let comics = c.list_comics(1009610, YearRange::new(1960, 1969), 10).unwrap();
    assert_eq!(comics.len(), 1);

    let req = fake.last();
    assert_eq!(req.url, format!("{BASE}/v1/public/characters/1009610/comics"));
    assert_eq!(req.param("limit"), Some("10"));
    assert_eq!(req.param("orderBy"), Some("-onsaleDate"));
    assert_eq!(req.param("dateRange"), Some("1960-01-01,1969-12-31"));
    assert_signed(&req);
}

#[test]
fn comics_limit_is_clamped_to_api_bounds() {
    let fake = FakeCatalog::new(|_| Ok(comics_page(vec![])));
    let c = client(&fake);

    assert!(c.list_comics(1, YearRange::new(2000, 2009), 500).unwrap().is_empty());
    assert_eq!(fake.last().param("limit"), Some("100"));

    c.list_comics(1, YearRange::new(2000, 2009), 0).unwrap();
    assert_eq!(fake.last().param("limit"), Some("1"));
}

#[test]
fn malformed_bodies_and_transport_failures_are_errors() {
    let fake = FakeCatalog::new(|_| Ok(r#"{"code":"InvalidCredentials","message":"nope"}"#.to_string()));
    assert!(client(&fake).find_character_id("Hulk").is_err());

    let fake = FakeCatalog::new(|_| Ok("<html>gateway timeout</html>".to_string()));
    assert!(client(&fake).list_comics(1, YearRange::new(1990, 1999), 10).is_err());

    let fake = FakeCatalog::new(|_| Err("connection refused".to_string()));
    let err = client(&fake).find_character_id("Hulk").unwrap_err();
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn each_request_is_signed_independently() {
    let fake = FakeCatalog::new(|_| Ok(characters_page(&[])));
    let c = client(&fake);
    c.find_character_id("A").unwrap();
    c.find_character_id("B").unwrap();

    for req in fake.requests.borrow().iter() {
        assert_signed(req);
        // ts comes first, as the API documents
        assert_eq!(req.query[0].0, "ts");
    }
}

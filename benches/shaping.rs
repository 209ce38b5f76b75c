// benches/shaping.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use comic_recs::{
    catalog::{Comic, model::Envelope},
    file,
    recommend::Recommendation,
};

/// One full page (100 comics), the largest the API hands back.
fn sample_page() -> String {
    let results: Vec<serde_json::Value> = (0..100)
        .map(|i| {
            serde_json::json!({
                "id": i,
                "title": format!("Amazing Spider-Man (1963) #{i}"),
                "description": if i % 3 == 0 { serde_json::Value::Null } else { serde_json::json!("Peter, Gwen, and the \"Goblin\"\nagain.") },
                "thumbnail": { "path": format!("http://i.annihil.us/u/prod/marvel/i/mg/{i}"), "extension": "jpg" },
                "urls": [
                    { "type": "purchase", "url": "https://comicstore.marvel.com/x" },
                    { "type": "detail", "url": format!("https://marvel.com/comics/issue/{i}") }
                ]
            })
        })
        .collect();
    serde_json::json!({ "code": 200, "data": { "offset": 0, "results": results } }).to_string()
}

fn bench_shaping(c: &mut Criterion) {
    let body = sample_page();

    c.bench_function("parse_page", |b| {
        b.iter(|| {
            let env: Envelope<Comic> = serde_json::from_str(black_box(&body)).unwrap();
            black_box(env.data.results.len())
        })
    });

    let env: Envelope<Comic> = serde_json::from_str(&body).unwrap();
    let comics = env.data.results;

    c.bench_function("shape_and_csv", |b| {
        b.iter(|| {
            let recs: Vec<Recommendation> = black_box(&comics).iter().map(Recommendation::from_comic).collect();
            black_box(file::recommendations_to_csv(&recs).len())
        })
    });
}

criterion_group!(benches, bench_shaping);
criterion_main!(benches);

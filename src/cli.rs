// src/cli.rs
use std::{env, error::Error};

use crate::{
    catalog::CatalogClient,
    config::{Credentials, options::AppOptions},
    decade::Decade,
    file,
    progress::Progress,
    recommend::{Outcome, Picks, Recommender},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    ListCharacters,
    ListDecades,
    Recommend(RecommendArgs),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecommendArgs {
    pub character: String,
    pub decade: Decade,
    pub limit: Option<u32>,
    pub out: Option<String>,
    pub export: bool,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let cmd = parse_args(env::args().skip(1))?;
    execute(cmd)
}

pub fn execute(cmd: Command) -> Result<(), Box<dyn Error>> {
    match cmd {
        Command::Help => {
            eprintln!("{}", include_str!("cli_help.txt"));
            Ok(())
        }
        Command::ListDecades => {
            for d in Decade::ALL {
                let r = d.years();
                println!("{},{},{}", d, r.start, r.end);
            }
            Ok(())
        }
        Command::ListCharacters => {
            let mut rec = connect(None)?;
            let mut prog = CliProgress::default();
            for name in rec.characters(Some(&mut prog))? {
                println!("{name}");
            }
            Ok(())
        }
        Command::Recommend(args) => recommend(args),
    }
}

fn connect(limit: Option<u32>) -> Result<Recommender<crate::core::ReqwestGet>, Box<dyn Error>> {
    let creds = Credentials::load()?;
    let mut opts = AppOptions::from_env();
    if let Some(n) = limit {
        opts.query.limit = n;
    }
    let client = CatalogClient::connect(creds, &opts.query)?;
    Ok(Recommender::new(client, opts.query.limit))
}

fn recommend(args: RecommendArgs) -> Result<(), Box<dyn Error>> {
    let rec = connect(args.limit)?;
    let picks = rec.recommend(&args.character, args.decade)?;
    print!("{}", render_text(&picks));

    let wants_file = args.export || args.out.is_some();
    match (&picks.outcome, wants_file) {
        (Outcome::Found(items), true) => {
            let mut export = AppOptions::default().export;
            if let Some(o) = &args.out {
                export.set_path(o);
            }
            let path = export.out_path(&picks.character, picks.decade);
            let written = file::write_export(&path, items)?;
            eprintln!("Wrote {}", written.display());
        }
        (_, true) => eprintln!("Nothing to export"),
        _ => {}
    }
    Ok(())
}

/// Plain-text rendering of one cycle.
pub fn render_text(picks: &Picks) -> String {
    if let Some(msg) = picks.message() {
        return format!("{msg}\n");
    }
    let mut out = format!("{}\n\n", picks.heading());
    for r in picks.items() {
        out.push_str(&format!("### {}\n", r.title));
        if !r.detail_url.is_empty() {
            out.push_str(&format!("{}\n", r.detail_url));
        }
        out.push_str(&format!("{}\n", r.description));
        out.push_str(&format!("{}\n", r.image_url));
        out.push_str("---\n");
    }
    out
}

pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut list_characters = false;
    let mut list_decades = false;
    let mut character: Option<String> = None;
    let mut decade: Option<Decade> = None;
    let mut limit: Option<u32> = None;
    let mut out: Option<String> = None;
    let mut export = false;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--list-characters" => list_characters = true,
            "--decades" => list_decades = true,
            "-c" | "--character" => {
                let v = args.next().ok_or("Missing value for --character")?;
                if v.trim().is_empty() { return Err("Empty character name".into()); }
                character = Some(v);
            }
            "-d" | "--decade" => {
                let v = args.next().ok_or("Missing value for --decade")?;
                decade = Some(Decade::from_label(&v).ok_or_else(|| format!("Unknown decade: {}", v))?);
            }
            "-n" | "--limit" => {
                let v: u32 = args.next().ok_or("Missing value for --limit")?.parse()?;
                if v == 0 { return Err("--limit must be at least 1".into()); }
                limit = Some(v);
            }
            "-o" | "--out" => out = Some(args.next().ok_or("Missing output path")?),
            "--export" => export = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if list_decades {
        return Ok(Command::ListDecades);
    }
    if list_characters {
        return Ok(Command::ListCharacters);
    }
    match (character, decade) {
        (Some(character), Some(decade)) => Ok(Command::Recommend(RecommendArgs {
            character, decade, limit, out, export,
        })),
        (None, None) => Ok(Command::Help),
        (None, Some(_)) => Err("Missing --character".into()),
        (Some(_), None) => Err("Missing --decade".into()),
    }
}

/// Page-by-page status on stderr while the character list loads.
#[derive(Default)]
struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Fetching characters…");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, offset: u32) {
        self.done += 1;
        eprintln!("  page {}/{} (offset {})", self.done, self.total, offset);
    }
    fn finish(&mut self) {
        eprintln!("Fetched {} page(s)", self.done);
    }
}

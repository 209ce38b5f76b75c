// src/decade.rs
//
// Fixed decade → inclusive year-span table used to filter comics.
// The last decade is open-ended: it runs up to the current calendar year,
// evaluated at call time.

use std::fmt;
use chrono::Datelike;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Decade {
    D1940s,
    D1950s,
    D1960s,
    D1970s,
    D1980s,
    D1990s,
    D2000s,
    D2010s,
    D2020s,
}

/// Inclusive year range, e.g. 1960..=1969.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Self { Self { start, end } }

    /// `dateRange` query value: Jan 1 of start through Dec 31 of end.
    pub fn date_range_param(&self) -> String {
        format!("{}-01-01,{}-12-31", self.start, self.end)
    }
}

impl Decade {
    pub const ALL: [Decade; 9] = [
        Decade::D1940s,
        Decade::D1950s,
        Decade::D1960s,
        Decade::D1970s,
        Decade::D1980s,
        Decade::D1990s,
        Decade::D2000s,
        Decade::D2010s,
        Decade::D2020s,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Decade::D1940s => "1940s",
            Decade::D1950s => "1950s",
            Decade::D1960s => "1960s",
            Decade::D1970s => "1970s",
            Decade::D1980s => "1980s",
            Decade::D1990s => "1990s",
            Decade::D2000s => "2000s",
            Decade::D2010s => "2010s",
            Decade::D2020s => "2020s",
        }
    }

    /// Case-insensitive label lookup ("1960s", "1960S").
    pub fn from_label(label: &str) -> Option<Decade> {
        let l = label.trim();
        Self::ALL.into_iter().find(|d| d.label().eq_ignore_ascii_case(l))
    }

    fn first_year(&self) -> i32 {
        match self {
            Decade::D1940s => 1940,
            Decade::D1950s => 1950,
            Decade::D1960s => 1960,
            Decade::D1970s => 1970,
            Decade::D1980s => 1980,
            Decade::D1990s => 1990,
            Decade::D2000s => 2000,
            Decade::D2010s => 2010,
            Decade::D2020s => 2020,
        }
    }

    /// Year span given an explicit "current year" (testable form).
    pub fn years_at(&self, current_year: i32) -> YearRange {
        let start = self.first_year();
        let end = match self {
            Decade::D2020s => current_year,
            _ => start + 9,
        };
        YearRange::new(start, end)
    }

    /// Year span as of now (local calendar year).
    pub fn years(&self) -> YearRange {
        self.years_at(current_year())
    }
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

impl fmt::Display for Decade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

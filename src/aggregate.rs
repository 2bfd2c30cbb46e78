//! Pure aggregations over the tour dataset.
//!
//! All four aggregate functions are deterministic and total over an already
//! validated row set. They run exactly once, at startup, inside
//! [`TourSnapshot::build`]; the snapshot is read-only from then on and every
//! navigation event works off it (no per-event re-reads of the dataset).

use std::collections::HashMap;

use serde::Serialize;

use crate::dataset::clean;
use crate::dataset::Row;

/// Total ticket sales for one city, summed over all of its dates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CitySales {
    pub city: String,
    pub total: f64,
}

/// How many times one cleaned song title was played across the whole tour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongCount {
    pub song: String,
    pub count: usize,
}

/// Cleaned song title → every city it was played in, in dataset order.
/// Occurrences are kept as-is: two Paris dates playing the same song yield
/// two "Paris" entries.
pub type SongCityIndex = HashMap<String, Vec<String>>;

/// One map marker per row. Cities with several dates plot several
/// overlapping markers; that matches the upstream dataset's intent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coordinates {
    pub city: String,
    pub x: f64,
    pub y: f64,
}

/// Every cleaned song occurrence in a row, field order (`surp_1`, `surp_2`).
fn song_occurrences(row: &Row) -> Vec<String> {
    [&row.surp_1, &row.surp_2]
        .into_iter()
        .flatten()
        .flat_map(|cell| clean::split_titles(cell))
        .collect()
}

/// Group rows by city and sum ticket sales. Output order is first-seen city
/// order, which makes the result deterministic for a given input order.
pub fn city_sales(rows: &[Row]) -> Vec<CitySales> {
    let mut order: Vec<CitySales> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        match index.get(&row.city) {
            Some(&i) => order[i].total += row.tick_sales,
            None => {
                index.insert(row.city.clone(), order.len());
                order.push(CitySales {
                    city: row.city.clone(),
                    total: row.tick_sales,
                });
            }
        }
    }
    order
}

/// Count every (row, field, title) surprise-song occurrence, sorted by count
/// descending. Ties keep first-seen song order (the sort is stable).
pub fn song_counts(rows: &[Row]) -> Vec<SongCount> {
    let mut order: Vec<SongCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        for song in song_occurrences(row) {
            match index.get(&song) {
                Some(&i) => order[i].count += 1,
                None => {
                    index.insert(song.clone(), order.len());
                    order.push(SongCount { song, count: 1 });
                }
            }
        }
    }

    order.sort_by(|a, b| b.count.cmp(&a.count));
    order
}

/// Build the song → cities index. Same cleaning/splitting as
/// [`song_counts`]; one city entry per occurrence, never deduplicated.
pub fn song_cities(rows: &[Row]) -> SongCityIndex {
    let mut idx: SongCityIndex = HashMap::new();
    for row in rows {
        for song in song_occurrences(row) {
            idx.entry(song).or_default().push(row.city.clone());
        }
    }
    idx
}

/// Project `{city, x, y}` per row, input order preserved.
pub fn coordinates(rows: &[Row]) -> Vec<Coordinates> {
    rows.iter()
        .map(|r| Coordinates {
            city: r.city.clone(),
            x: r.x,
            y: r.y,
        })
        .collect()
}

/// The application's immutable startup state: validated rows plus every
/// derived aggregate. Built once; nothing mutates it afterwards.
#[derive(Debug)]
pub struct TourSnapshot {
    pub rows: Vec<Row>,
    pub city_sales: Vec<CitySales>,
    pub song_counts: Vec<SongCount>,
    pub song_cities: SongCityIndex,
    pub coordinates: Vec<Coordinates>,
}

impl TourSnapshot {
    pub fn build(rows: Vec<Row>) -> Self {
        let city_sales = city_sales(&rows);
        let song_counts = song_counts(&rows);
        let song_cities = song_cities(&rows);
        let coordinates = coordinates(&rows);
        Self {
            rows,
            city_sales,
            song_counts,
            song_cities,
            coordinates,
        }
    }

    /// Total ticket sales across the whole tour.
    pub fn total_sales(&self) -> f64 {
        self.city_sales.iter().map(|c| c.total).sum()
    }
}

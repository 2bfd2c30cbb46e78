//! Terminal presentation adapter.
//!
//! Renders view payloads as plain-text tables. This is the passthrough end
//! of the pipeline: everything here reads a [`ViewData`] and prints it, no
//! derivation happens in this module. An external UI would consume the same
//! payloads via `--json` instead.

use crate::view::{BarSeries, ShowEntry, SongLink, ViewData};

const BAR_WIDTH: usize = 30;

pub fn render_text(data: &ViewData) {
    match data {
        ViewData::Overview {
            map,
            city_sales_chart,
            song_list,
        } => {
            println!("Tour Overview");
            println!("=============");
            println!();
            print_map(map);
            println!();
            print_bar_series(city_sales_chart);
            println!();
            print_song_list(song_list);
        }

        ViewData::CityDetail {
            city,
            sales_chart,
            shows,
        } => {
            println!("City: {city}");
            println!();
            print_bar_series(sales_chart);
            println!();
            print_shows(shows);
        }

        ViewData::EmptyCity { message, .. } => println!("{message}"),

        ViewData::SongDetail { song, cities } => {
            println!("Song: {song}");
            println!("Played in {} show(s):", cities.len());
            for city in cities {
                println!("  {city}");
            }
        }

        ViewData::UnknownSong { message, .. } => println!("{message}"),
    }
}

fn print_map(markers: &[crate::aggregate::Coordinates]) {
    println!("Tour stops ({} markers):", markers.len());
    println!("{:<20} {:>9} {:>9}", "City", "Lon", "Lat");
    println!("{}", "-".repeat(40));
    for m in markers {
        println!("{:<20} {:>9.2} {:>9.2}", m.city, m.x, m.y);
    }
}

/// Print a bar series as an aligned table with a proportional bar column.
fn print_bar_series(series: &BarSeries) {
    println!("{}", series.title);

    let label_w = series
        .points
        .iter()
        .map(|p| p.label.len())
        .max()
        .unwrap_or(0)
        .max(series.x_label.len());

    println!("{:<label_w$} {:>12}", series.x_label, series.y_label);
    println!("{}", "-".repeat(label_w + 13 + BAR_WIDTH + 2));

    let max = series.points.iter().map(|p| p.value).fold(0.0, f64::max);
    for p in &series.points {
        let bar_len = if max > 0.0 {
            ((p.value / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        println!(
            "{:<label_w$} {:>12.0}  {}",
            p.label,
            p.value,
            "#".repeat(bar_len)
        );
    }
}

fn print_song_list(songs: &[SongLink]) {
    println!("Surprise songs ({} distinct):", songs.len());
    println!("{:<35} {:>6}  {}", "Song", "Plays", "Link");
    println!("{}", "-".repeat(70));
    for s in songs {
        println!("{:<35} {:>6}  {}", truncate_title(&s.song, 35), s.count, s.href);
    }
}

/// Truncate a title to `max` display characters, appending `...`.
/// Counts chars, not bytes: accented titles must never split mid-character.
fn truncate_title(title: &str, max: usize) -> String {
    if title.chars().count() > max {
        let head: String = title.chars().take(max - 3).collect();
        format!("{head}...")
    } else {
        title.to_string()
    }
}

fn print_shows(shows: &[ShowEntry]) {
    println!("Shows:");
    println!(
        "{:<12} {:>10}  {:<30} {:<30}",
        "Date", "Sales", "Surprise 1", "Surprise 2"
    );
    println!("{}", "-".repeat(86));
    for s in shows {
        println!(
            "{:<12} {:>10.0}  {:<30} {:<30}",
            s.date.to_string(),
            s.tick_sales,
            s.surp_1.as_deref().unwrap_or("-"),
            s.surp_2.as_deref().unwrap_or("-"),
        );
    }
}

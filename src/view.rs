//! View data building.
//!
//! Given a routed [`View`] and the immutable [`TourSnapshot`], produce the
//! exact payload the presentation layer needs. Chart data goes out as a
//! labeled series with a title and axis labels; the presentation layer draws
//! it as-is. Unknown cities and songs produce explicit "nothing here"
//! payloads — navigation degrades to an informative page, never an error.

use chrono::NaiveDate;
use serde::Serialize;

use crate::aggregate::{Coordinates, TourSnapshot};
use crate::dataset::Row;
use crate::router::{urlpath, View};

/// One labeled bar in a chart series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarPoint {
    pub label: String,
    pub value: f64,
}

/// A chart-ready series: title, axis labels, and points in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<BarPoint>,
}

/// A song entry on the overview page, carrying the path of its detail page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongLink {
    pub song: String,
    pub count: usize,
    pub href: String,
}

/// One dated show on a city page, surprise-song cells raw as recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowEntry {
    pub date: NaiveDate,
    pub tick_sales: f64,
    pub surp_1: Option<String>,
    pub surp_2: Option<String>,
}

/// Everything one page needs to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum ViewData {
    Overview {
        map: Vec<Coordinates>,
        city_sales_chart: BarSeries,
        song_list: Vec<SongLink>,
    },
    CityDetail {
        city: String,
        sales_chart: BarSeries,
        shows: Vec<ShowEntry>,
    },
    /// City detail requested for a city with no rows in the dataset.
    EmptyCity { city: String, message: String },
    SongDetail {
        song: String,
        /// Every city the song was played in, duplicates preserved.
        cities: Vec<String>,
    },
    /// Song detail requested for a song absent from the index.
    UnknownSong { song: String, message: String },
}

/// Build the payload for a routed view.
pub fn build(view: &View, snapshot: &TourSnapshot) -> ViewData {
    match view {
        View::Overview => build_overview(snapshot),
        View::CityDetail { city } => build_city_detail(city, snapshot),
        View::SongDetail { song } => build_song_detail(song, snapshot),
    }
}

fn build_overview(snapshot: &TourSnapshot) -> ViewData {
    let city_sales_chart = BarSeries {
        title: "Ticket sales per city".to_string(),
        x_label: "City".to_string(),
        y_label: "Sales ($)".to_string(),
        points: snapshot
            .city_sales
            .iter()
            .map(|c| BarPoint {
                label: c.city.clone(),
                value: c.total,
            })
            .collect(),
    };

    let song_list = snapshot
        .song_counts
        .iter()
        .map(|c| SongLink {
            song: c.song.clone(),
            count: c.count,
            href: format!(
                "{}{}",
                crate::SONG_PATH_PREFIX,
                urlpath::encode_segment(&c.song)
            ),
        })
        .collect();

    ViewData::Overview {
        map: snapshot.coordinates.clone(),
        city_sales_chart,
        song_list,
    }
}

fn build_city_detail(city: &str, snapshot: &TourSnapshot) -> ViewData {
    let mut matching: Vec<&Row> = snapshot.rows.iter().filter(|r| r.city == city).collect();

    if matching.is_empty() {
        log::info!("City detail requested for unknown city {city:?}");
        return ViewData::EmptyCity {
            city: city.to_string(),
            message: format!("No tour stops recorded for \"{city}\"."),
        };
    }

    matching.sort_by_key(|r| r.date);

    let sales_chart = BarSeries {
        title: format!("Ticket sales in {city}"),
        x_label: "Date".to_string(),
        y_label: "Sales ($)".to_string(),
        points: matching
            .iter()
            .map(|r| BarPoint {
                label: r.date.to_string(),
                value: r.tick_sales,
            })
            .collect(),
    };

    let shows = matching
        .iter()
        .map(|r| ShowEntry {
            date: r.date,
            tick_sales: r.tick_sales,
            surp_1: r.surp_1.clone(),
            surp_2: r.surp_2.clone(),
        })
        .collect();

    ViewData::CityDetail {
        city: city.to_string(),
        sales_chart,
        shows,
    }
}

fn build_song_detail(song: &str, snapshot: &TourSnapshot) -> ViewData {
    match snapshot.song_cities.get(song) {
        Some(cities) => ViewData::SongDetail {
            song: song.to_string(),
            cities: cities.clone(),
        },
        None => {
            log::info!("Song detail requested for unknown song {song:?}");
            ViewData::UnknownSong {
                song: song.to_string(),
                message: format!("No plays recorded for \"{song}\"."),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_row(city: &str, date: &str, sales: f64, s1: Option<&str>) -> Row {
        Row {
            city: city.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            tick_sales: sales,
            surp_1: s1.map(str::to_string),
            surp_2: None,
            x: 2.3,
            y: 48.8,
        }
    }

    fn snapshot() -> TourSnapshot {
        TourSnapshot::build(vec![
            // Out of date order on purpose: city pages must sort ascending
            make_row("Paris", "2024-05-02", 1500.0, Some("Song A / Song B")),
            make_row("Paris", "2024-05-01", 1000.0, Some("Song A!")),
            make_row("Lyon", "2024-05-03", 800.0, None),
        ])
    }

    #[test]
    fn test_overview_payload() {
        let s = snapshot();
        match build(&View::Overview, &s) {
            ViewData::Overview { map, city_sales_chart, song_list } => {
                assert_eq!(map.len(), 3);
                assert_eq!(city_sales_chart.points.len(), 2);
                assert_eq!(city_sales_chart.y_label, "Sales ($)");
                // Song A twice, Song B once, count-descending
                assert_eq!(song_list[0].song, "Song A");
                assert_eq!(song_list[0].count, 2);
                assert_eq!(song_list[0].href, "/song/Song%20A");
                assert_eq!(song_list[1].song, "Song B");
            }
            other => panic!("expected overview, got {other:?}"),
        }
    }

    #[test]
    fn test_city_detail_sorted_by_date() {
        let s = snapshot();
        let view = View::CityDetail { city: "Paris".into() };
        match build(&view, &s) {
            ViewData::CityDetail { city, sales_chart, shows } => {
                assert_eq!(city, "Paris");
                let labels: Vec<&str> =
                    sales_chart.points.iter().map(|p| p.label.as_str()).collect();
                assert_eq!(labels, vec!["2024-05-01", "2024-05-02"]);
                assert_eq!(shows[0].tick_sales, 1000.0);
                // Raw cells pass through uncleaned
                assert_eq!(shows[0].surp_1.as_deref(), Some("Song A!"));
                assert_eq!(shows[1].surp_1.as_deref(), Some("Song A / Song B"));
            }
            other => panic!("expected city detail, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_city_gets_empty_payload() {
        let s = snapshot();
        let view = View::CityDetail { city: "Nowhere".into() };
        match build(&view, &s) {
            ViewData::EmptyCity { city, message } => {
                assert_eq!(city, "Nowhere");
                assert!(message.contains("Nowhere"));
            }
            other => panic!("expected empty city, got {other:?}"),
        }
    }

    #[test]
    fn test_song_detail_keeps_duplicate_cities() {
        let s = snapshot();
        let view = View::SongDetail { song: "Song A".into() };
        match build(&view, &s) {
            ViewData::SongDetail { song, cities } => {
                assert_eq!(song, "Song A");
                assert_eq!(cities, vec!["Paris", "Paris"]);
            }
            other => panic!("expected song detail, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_song_gets_explicit_payload() {
        let s = snapshot();
        let view = View::SongDetail { song: "Never Played".into() };
        match build(&view, &s) {
            ViewData::UnknownSong { song, message } => {
                assert_eq!(song, "Never Played");
                assert!(message.contains("Never Played"));
            }
            other => panic!("expected unknown song, got {other:?}"),
        }
    }
}

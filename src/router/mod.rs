//! Navigation routing.
//!
//! The UI raises exactly two kinds of events: a map-marker click and a URL
//! path change. Both land in a [`NavState`]; [`decide`] is the pure function
//! that resolves that state to the [`View`] to render. The original
//! string-prefix dispatch is modeled as an explicit tagged union with a
//! fixed precedence order.

pub mod urlpath;

use serde::Serialize;

use crate::aggregate::SongCityIndex;
use crate::SONG_PATH_PREFIX;

/// Which page the application shows. Rebuilt on every navigation event,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum View {
    Overview,
    CityDetail { city: String },
    SongDetail { song: String },
}

/// Externally-held navigation inputs: the current URL path and the most
/// recent map-marker click, if any. The event handlers overwrite fields
/// atomically; last event wins.
#[derive(Debug, Clone)]
pub struct NavState {
    pub path: String,
    pub last_click: Option<String>,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            last_click: None,
        }
    }
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Browser path-change event.
    pub fn on_path_change(&mut self, path: &str) {
        self.path = path.to_string();
    }

    /// Map-marker click event; the label is the marker's city name.
    pub fn on_marker_click(&mut self, label: &str) {
        self.last_click = Some(label.to_string());
    }
}

/// Resolve the navigation state to a view. First match wins:
///
/// 1. a `/song/` path whose decoded segment is a known song → song detail
///    (a recognized song path beats a stale pending click);
/// 2. a pending marker click → city detail for the clicked marker;
/// 3. any other non-root path → city detail, the decoded path treated as a
///    literal city name (unknown cities degrade in the view builder);
/// 4. root path, no click → overview.
pub fn decide(state: &NavState, index: &SongCityIndex) -> View {
    if let Some(segment) = state.path.strip_prefix(SONG_PATH_PREFIX) {
        let song = urlpath::decode_segment(segment);
        if index.contains_key(&song) {
            return View::SongDetail { song };
        }
        log::debug!("Song path {:?} not in index, falling through", state.path);
    }

    if let Some(city) = &state.last_click {
        return View::CityDetail { city: city.clone() };
    }

    let rest = state.path.trim_start_matches('/');
    if !rest.is_empty() {
        return View::CityDetail {
            city: urlpath::decode_segment(rest),
        };
    }

    View::Overview
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::SongCityIndex;

    fn index_with(songs: &[&str]) -> SongCityIndex {
        songs
            .iter()
            .map(|s| (s.to_string(), vec!["Paris".to_string()]))
            .collect()
    }

    #[test]
    fn test_root_path_is_overview() {
        let state = NavState::new();
        assert_eq!(decide(&state, &index_with(&[])), View::Overview);
    }

    #[test]
    fn test_song_path_routes_to_song_detail() {
        let mut state = NavState::new();
        state.on_path_change("/song/Song%20A");
        let view = decide(&state, &index_with(&["Song A"]));
        assert_eq!(view, View::SongDetail { song: "Song A".into() });
    }

    #[test]
    fn test_click_routes_to_city_detail() {
        let mut state = NavState::new();
        state.on_marker_click("Paris");
        let view = decide(&state, &index_with(&[]));
        assert_eq!(view, View::CityDetail { city: "Paris".into() });
    }

    #[test]
    fn test_unrecognized_path_is_literal_city_lookup() {
        let mut state = NavState::new();
        state.on_path_change("/Nowhere");
        // No such city in the dataset; the router still routes, the view
        // builder reports the empty page
        let view = decide(&state, &index_with(&[]));
        assert_eq!(view, View::CityDetail { city: "Nowhere".into() });
    }

    #[test]
    fn test_city_path_is_percent_decoded() {
        let mut state = NavState::new();
        state.on_path_change("/New%20York");
        let view = decide(&state, &index_with(&[]));
        assert_eq!(view, View::CityDetail { city: "New York".into() });
    }

    #[test]
    fn test_song_path_beats_stale_click() {
        // Both inputs set at once: song routing wins
        let mut state = NavState::new();
        state.on_marker_click("Paris");
        state.on_path_change("/song/Song%20A");
        let view = decide(&state, &index_with(&["Song A"]));
        assert_eq!(view, View::SongDetail { song: "Song A".into() });
    }

    #[test]
    fn test_unknown_song_path_falls_through_to_click() {
        let mut state = NavState::new();
        state.on_marker_click("Paris");
        state.on_path_change("/song/Never%20Played");
        let view = decide(&state, &index_with(&["Song A"]));
        assert_eq!(view, View::CityDetail { city: "Paris".into() });
    }

    #[test]
    fn test_unknown_song_path_without_click_is_city_lookup() {
        let mut state = NavState::new();
        state.on_path_change("/song/Never%20Played");
        let view = decide(&state, &index_with(&["Song A"]));
        // The whole decoded remainder becomes a (nonexistent) city name
        assert_eq!(view, View::CityDetail { city: "song/Never Played".into() });
    }

    #[test]
    fn test_empty_path_is_overview() {
        let mut state = NavState::new();
        state.on_path_change("");
        assert_eq!(decide(&state, &index_with(&[])), View::Overview);
    }
}

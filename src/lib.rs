pub mod aggregate;
pub mod config;
pub mod dataset;
pub mod render;
pub mod router;
pub mod view;

/// Delimiter joining multiple song titles within one surprise-song cell
pub const SONG_DELIMITER: &str = " / ";

/// Field separator of the tour dataset file
pub const FIELD_SEPARATOR: u8 = b';';

/// Navigation path prefix that routes to a song detail page
pub const SONG_PATH_PREFIX: &str = "/song/";

/// Application name for XDG paths
pub const APP_NAME: &str = "encore";

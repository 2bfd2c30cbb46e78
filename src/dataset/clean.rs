//! Song title cleaning.
//!
//! Surprise-song cells are free text: a single cell may hold several titles
//! joined by `" / "`, and titles are sometimes written with trailing
//! punctuation ("Song A!" vs "Song A"). Aggregation counts cleaned titles so
//! those spellings collapse into one song.

/// Punctuation stripped from titles before counting.
const STRIP_CHARS: &[char] = &['!', '?'];

/// Clean one song title: strip punctuation, then trim surrounding whitespace.
/// Idempotent — cleaning an already-clean title is a no-op.
pub fn clean_title(raw: &str) -> String {
    raw.chars()
        .filter(|c| !STRIP_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Split a surprise-song cell into individual cleaned titles.
/// Titles that are empty after cleaning are discarded.
pub fn split_titles(cell: &str) -> Vec<String> {
    cell.split(crate::SONG_DELIMITER)
        .map(clean_title)
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(clean_title("Song A!"), "Song A");
        assert_eq!(clean_title("Really?!"), "Really");
        // Interior punctuation is stripped too
        assert_eq!(clean_title("Wh?at"), "What");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(clean_title("  Song A  "), "Song A");
        // Punctuation-then-trim: "Song A !" cleans to "Song A"
        assert_eq!(clean_title("Song A !"), "Song A");
    }

    #[test]
    fn test_cleaning_is_idempotent() {
        for raw in ["Song A!", "  Song B ?", "Plain Title", "!?"] {
            let once = clean_title(raw);
            assert_eq!(clean_title(&once), once);
        }
    }

    #[test]
    fn test_split_single_title() {
        assert_eq!(split_titles("Song A"), vec!["Song A"]);
    }

    #[test]
    fn test_split_multiple_titles() {
        assert_eq!(
            split_titles("Song A / Song B / Song C"),
            vec!["Song A", "Song B", "Song C"]
        );
    }

    #[test]
    fn test_split_cleans_each_title() {
        assert_eq!(split_titles("Song A! / Song B?"), vec!["Song A", "Song B"]);
    }

    #[test]
    fn test_empty_titles_discarded() {
        assert_eq!(split_titles("!? / Song B"), vec!["Song B"]);
        assert!(split_titles("!?").is_empty());
        assert!(split_titles("").is_empty());
    }

    #[test]
    fn test_plain_slash_is_not_a_delimiter() {
        // Only the spaced " / " separates titles; "AC/DC Cover" is one song
        assert_eq!(split_titles("AC/DC Cover"), vec!["AC/DC Cover"]);
    }
}

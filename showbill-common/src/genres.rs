//! Genre text codec
//!
//! Genres are stored as a single comma-delimited TEXT column. Rows migrated
//! from the legacy schema may carry `{`/`}` decoration characters around the
//! list; those must never reach the view layer, so the decoder strips them
//! on every read.

/// Encode a genre list into the delimited storage form.
pub fn encode(genres: &[String]) -> String {
    genres.join(",")
}

/// Decode the stored genre text into an ordered list.
///
/// Strips legacy `{`/`}` decoration, splits on commas, trims whitespace,
/// and drops empty entries.
pub fn decode(raw: &str) -> Vec<String> {
    let cleaned: String = raw.chars().filter(|ch| *ch != '{' && *ch != '}').collect();
    cleaned
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_genres() {
        let genres = vec!["Jazz".to_string(), "Blues".to_string()];
        let stored = encode(&genres);
        let decoded = decode(&stored);
        assert_eq!(decoded, genres);
        assert!(!stored.contains('{'));
        assert!(!stored.contains('}'));
    }

    #[test]
    fn decode_strips_legacy_decoration() {
        let decoded = decode("{Jazz,Classical}");
        assert_eq!(decoded, vec!["Jazz", "Classical"]);
    }

    #[test]
    fn decode_never_surfaces_braces() {
        for raw in ["{Rock}", "{{Funk}}", "Soul,{R&B}"] {
            for genre in decode(raw) {
                assert!(!genre.contains('{'), "brace leaked from {:?}", raw);
                assert!(!genre.contains('}'), "brace leaked from {:?}", raw);
            }
        }
    }

    #[test]
    fn decode_empty_text_is_empty_list() {
        assert!(decode("").is_empty());
        assert!(decode("{}").is_empty());
    }

    #[test]
    fn decode_trims_and_drops_empty_entries() {
        assert_eq!(decode("Jazz, Blues,,"), vec!["Jazz", "Blues"]);
    }
}

include!(concat!(env!("OUT_DIR"), "/songs.rs"));

/// A song with its name and notation
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub name: String,
    pub content: String,
}

impl Song {
    fn from_entry(&(name, content): &(&str, &str)) -> Self {
        Self {
            name: name.to_string(),
            content: content.to_string(),
        }
    }
}

/// Get all embedded songs, ordered by name
pub fn get_all_songs() -> Vec<Song> {
    SONGS.iter().map(Song::from_entry).collect()
}

/// Get a song by name
pub fn get_song(name: &str) -> Option<Song> {
    SONGS.iter().find(|(n, _)| *n == name).map(Song::from_entry)
}

/// List all song names
pub fn list_songs() -> Vec<&'static str> {
    SONGS.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_not_empty() {
        assert!(!list_songs().is_empty());
        assert_eq!(get_all_songs().len(), list_songs().len());
    }

    #[test]
    fn test_get_song() {
        let song = get_song("basics/c-major-scale").unwrap();
        assert!(song.content.contains('|'));
        assert!(get_song("missing").is_none());
    }

    #[test]
    fn test_names_sorted() {
        let names = list_songs();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}

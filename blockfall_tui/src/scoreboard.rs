use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Most entries a table keeps; lower scores fall off the end.
pub const MAX_ENTRIES: usize = 10;

pub const HIGH_SCORE_FILE_NAME: &str = ".blockfall_highscores.json";

/// The high-score file location: the platform config folder, falling
/// back to the working directory.
pub fn high_score_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(HIGH_SCORE_FILE_NAME)
}

/// One persisted score. The file layout is a JSON array of these
/// objects, at most [`MAX_ENTRIES`], descending by score.
#[derive(Eq, PartialEq, Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HighScoreEntry {
    pub name: String,
    pub score: u32,
}

/// An ordered table of the best scores, sorted descending; ties keep
/// insertion order.
#[derive(Eq, PartialEq, Clone, Default, Debug)]
pub struct HighScoreTable {
    entries: Vec<HighScoreEntry>,
}

impl HighScoreTable {
    /// Reads the table from disk.
    ///
    /// A missing, unreadable or malformed file degrades to the empty
    /// table; this never surfaces an error to the player.
    pub fn load(path: &Path) -> Self {
        let entries = fs::read_to_string(path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default();
        HighScoreTable { entries }
    }

    /// Overwrites the file with exactly this table's contents.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let contents = serde_json::to_string(&self.entries)?;
        fs::write(path, contents)
    }

    /// Appends an entry, re-sorts descending by score (stable, so ties
    /// keep insertion order) and truncates to [`MAX_ENTRIES`].
    pub fn add(&mut self, name: String, score: u32) {
        self.entries.push(HighScoreEntry { name, score });
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);
    }

    /// The entries, best first.
    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "blockfall_scoreboard_test_{tag}_{}.json",
            std::process::id()
        ))
    }

    fn full_table() -> HighScoreTable {
        let mut table = HighScoreTable::default();
        for i in 0..MAX_ENTRIES as u32 {
            table.add(format!("player{i}"), 100 - 10 * i);
        }
        table
    }

    #[test]
    fn add_keeps_descending_order_with_stable_ties() {
        let mut table = HighScoreTable::default();
        table.add("first".to_owned(), 50);
        table.add("second".to_owned(), 70);
        table.add("third".to_owned(), 50);
        let names: Vec<_> = table.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["second", "first", "third"]);
    }

    #[test]
    fn add_to_full_table_displaces_exactly_the_lowest() {
        let mut table = full_table();
        assert_eq!(table.entries().len(), MAX_ENTRIES);
        let lowest = table.entries().last().unwrap().clone();

        table.add("newcomer".to_owned(), lowest.score + 5);
        assert_eq!(table.entries().len(), MAX_ENTRIES);
        assert!(table.entries().iter().any(|e| e.name == "newcomer"));
        assert!(!table.entries().contains(&lowest));
        assert!(table
            .entries()
            .windows(2)
            .all(|pair| pair[0].score >= pair[1].score));
    }

    #[test]
    fn add_below_a_full_table_falls_off() {
        let mut table = full_table();
        table.add("too_slow".to_owned(), 0);
        assert_eq!(table.entries().len(), MAX_ENTRIES);
        assert!(!table.entries().iter().any(|e| e.name == "too_slow"));
    }

    #[test]
    fn save_load_round_trip_preserves_order() {
        let path = temp_file("roundtrip");
        let table = full_table();
        table.save(&path).unwrap();
        let reloaded = HighScoreTable::load(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(reloaded, table);
    }

    #[test]
    fn missing_file_loads_as_empty_table() {
        let table = HighScoreTable::load(Path::new("definitely/not/a/real/path.json"));
        assert!(table.entries().is_empty());
    }

    #[test]
    fn corrupt_file_loads_as_empty_table() {
        let path = temp_file("corrupt");
        fs::write(&path, "{ not json at all").unwrap();
        let table = HighScoreTable::load(&path);
        let _ = fs::remove_file(&path);
        assert!(table.entries().is_empty());
    }

    #[test]
    fn file_layout_is_a_plain_json_array() {
        let path = temp_file("layout");
        let mut table = HighScoreTable::default();
        table.add("Player".to_owned(), 30);
        table.save(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(contents, r#"[{"name":"Player","score":30}]"#);
    }
}

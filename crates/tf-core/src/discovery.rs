//! Finding a previously exported record

use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::record::TipRecord;

/// A record found on disk
#[derive(Debug, Clone)]
pub struct FoundRecord {
    pub path: PathBuf,
    pub record: TipRecord,
}

/// JSON files directly inside `dir`, sorted by name
pub fn json_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        })
        .collect();
    files.sort();
    files
}

/// Look for a tip record in `dir` (non-recursive).
///
/// `preferred` (a file name such as `tips.json`) wins if it exists and
/// parses; otherwise the first JSON file that parses as a record is used.
pub fn find_record(dir: &Path, preferred: Option<&Path>) -> Option<FoundRecord> {
    let mut candidates = json_files(dir);

    if let Some(name) = preferred.and_then(|p| p.file_name()) {
        if let Some(pos) = candidates.iter().position(|p| p.file_name() == Some(name)) {
            let first = candidates.remove(pos);
            candidates.insert(0, first);
        }
    }

    candidates.into_iter().find_map(|path| match TipRecord::load(&path) {
        Ok(record) => Some(FoundRecord { path, record }),
        Err(e) => {
            debug!("Skipping {}: {}", path.display(), e);
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const EURO: &str = r#"{"Tip 1": [1, 2, 3, 4, 5], "timestamp": "2026-01-01 10:00:00"}"#;
    const SWISS: &str = r#"{"Tip 1": [1, 2, 3, 4, 5, 6], "Tip 2": [7, 8, 9, 10, 11, 12], "timestamp": "2026-01-01 10:00:00"}"#;

    #[test]
    fn test_nothing_found() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "hello").unwrap();
        assert!(find_record(dir.path(), None).is_none());
    }

    #[test]
    fn test_preferred_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.json"), EURO).unwrap();
        fs::write(dir.path().join("tips.json"), SWISS).unwrap();

        let found = find_record(dir.path(), Some(Path::new("tips.json"))).unwrap();
        assert_eq!(found.path.file_name().unwrap(), "tips.json");
        assert_eq!(found.record.tips().len(), 2);
    }

    #[test]
    fn test_skips_unrelated_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.json"), r#"{"name": "package"}"#).unwrap();
        fs::write(dir.path().join("b.json"), EURO).unwrap();

        let found = find_record(dir.path(), Some(Path::new("tips.json"))).unwrap();
        assert_eq!(found.path.file_name().unwrap(), "b.json");
    }

    #[test]
    fn test_not_recursive() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("old");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("tips.json"), EURO).unwrap();

        assert!(json_files(dir.path()).is_empty());
        assert!(find_record(dir.path(), None).is_none());
    }
}

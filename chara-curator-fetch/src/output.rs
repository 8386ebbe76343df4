use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::FetchError;

/// Path of the output file for a character named `name`.
pub fn character_path(out_dir: &Path, name: &str) -> PathBuf {
    out_dir.join(format!("{name}.json"))
}

/// Write `value` as pretty-printed JSON (2-space indent, trailing newline),
/// creating parent directories as needed.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), FetchError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| FetchError::io(parent, e))?;
    }
    let mut contents = serde_json::to_string_pretty(value)?;
    contents.push('\n');
    fs::write(path, contents).map_err(|e| FetchError::io(path, e))?;
    Ok(())
}

/// Read and parse a JSON file.
pub fn read_json(path: &Path) -> Result<serde_json::Value, FetchError> {
    let contents = fs::read_to_string(path).map_err(|e| FetchError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|source| FetchError::Json {
        url: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_character_path() {
        assert_eq!(
            character_path(Path::new("out"), "alice"),
            PathBuf::from("out").join("alice.json")
        );
    }

    #[test]
    fn test_write_json_creates_dirs_and_formats() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("x.json");
        write_json(&path, &json!({"id": 1, "tags": ["s"]})).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "{\n  \"id\": 1,\n  \"tags\": [\n    \"s\"\n  ]\n}\n");
    }

    #[test]
    fn test_write_json_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.json");
        write_json(&path, &json!(1)).unwrap();
        write_json(&path, &json!(2)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "2\n");
    }

    #[test]
    fn test_read_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.json");
        fs::write(&path, r#"{"Id": 3}"#).unwrap();
        assert_eq!(read_json(&path).unwrap(), json!({"Id": 3}));

        fs::write(&path, "{oops").unwrap();
        assert!(matches!(read_json(&path), Err(FetchError::Json { .. })));
    }

    #[test]
    fn test_write_json_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();
        let err = write_json(&blocker.join("child.json"), &json!({})).unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
    }
}

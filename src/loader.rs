use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::info;

use crate::error::ExtractError;

/// Read the whole document as UTF-8. Invalid UTF-8 counts as unreadable.
pub fn load_document(path: &Path) -> Result<String, ExtractError> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ExtractError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => ExtractError::InputUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;
    info!(path = %path.display(), bytes = text.len(), "loaded document");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_fixture() {
        let text = load_document(Path::new("tests/fixtures/actions.md")).unwrap();
        assert!(text.contains("#### `deckNames`"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(&dir.path().join("nope.md")).unwrap_err();
        assert!(matches!(err, ExtractError::InputNotFound { .. }));
    }

    #[test]
    fn invalid_utf8_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.md");
        fs::write(&path, [0x23, 0xff, 0xfe, 0x0a]).unwrap();
        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, ExtractError::InputUnreadable { .. }));
    }
}

//! Timestamped list files (`rgb.txt`, `depth.txt`, `groundtruth.txt`)

use crate::error::DataError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// One non-comment line of a list file.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRecord {
    /// Timestamp in seconds
    pub timestamp: f64,
    /// Remaining whitespace-separated tokens, in order
    pub tokens: Vec<String>,
}

impl ListRecord {
    /// First token after the timestamp (the relative file path in image lists).
    pub fn first_token(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }
}

/// Parse a list file into records, skipping `#` comments.
///
/// Every record must carry at least `min_tokens` tokens after its timestamp.
pub fn parse_list(path: &Path, min_tokens: usize) -> Result<Vec<ListRecord>, DataError> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataError::MissingFile(path.to_path_buf()),
        _ => DataError::Io(e),
    })?;

    let records = parse_list_str(&text, min_tokens, path)?;
    debug!("Parsed {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse list text already in memory. `origin` is only used in error messages.
pub fn parse_list_str(
    text: &str,
    min_tokens: usize,
    origin: &Path,
) -> Result<Vec<ListRecord>, DataError> {
    let mut records = Vec::new();

    for (line_num, line) in text.lines().enumerate() {
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let parse_error = |message: String| DataError::Parse {
            path: origin.to_path_buf(),
            line: line_num + 1,
            message,
        };

        let mut parts = line.split_whitespace();
        let first = parts.next().unwrap_or_default();
        let timestamp: f64 = first
            .parse()
            .map_err(|e| parse_error(format!("invalid timestamp '{}': {}", first, e)))?;

        let tokens: Vec<String> = parts.map(str::to_owned).collect();
        if tokens.len() < min_tokens {
            return Err(parse_error(format!(
                "expected at least {} fields after the timestamp, got {}",
                min_tokens,
                tokens.len()
            )));
        }

        records.push(ListRecord { timestamp, tokens });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_list_skips_comments() {
        let text = "# color images\n# file: 'rgbd_dataset_freiburg1_xyz.bag'\n\
                    1305031102.175304 rgb/1305031102.175304.png\n\
                    1305031102.211214 rgb/1305031102.211214.png\n";

        let records = parse_list_str(text, 1, Path::new("rgb.txt")).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].timestamp, 1305031102.175304);
        assert_eq!(records[0].first_token(), Some("rgb/1305031102.175304.png"));
        assert_eq!(records[1].tokens, vec!["rgb/1305031102.211214.png".to_string()]);
    }

    #[test]
    fn test_parse_list_keeps_all_tokens() {
        let text = "0.101 1.0 2.0 3.0 0.0 0.0 0.0 1.0\n";
        let records = parse_list_str(text, 0, Path::new("groundtruth.txt")).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tokens.len(), 7);
        assert_eq!(records[0].tokens[6], "1.0");
    }

    #[test]
    fn test_parse_list_skips_blank_lines() {
        let text = "0.1 rgb/a.png\n\n   \n0.2 rgb/b.png\n";
        let records = parse_list_str(text, 1, Path::new("rgb.txt")).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_list_invalid_timestamp() {
        let text = "# header\nabc rgb/a.png\n";
        let err = parse_list_str(text, 1, Path::new("rgb.txt")).unwrap_err();
        match err {
            DataError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_list_missing_path_token() {
        let text = "0.1\n";
        let err = parse_list_str(text, 1, Path::new("depth.txt")).unwrap_err();
        assert!(matches!(err, DataError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_parse_list_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rgb.txt");

        let err = parse_list(&path, 1).unwrap_err();
        match err {
            DataError::MissingFile(missing) => assert_eq!(missing, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_list_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("depth.txt");
        std::fs::write(&path, "# depth maps\n0.105000 depth/1.png\n").unwrap();

        let records = parse_list(&path, 1).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].timestamp, 0.105);
        assert_eq!(records[0].first_token(), Some("depth/1.png"));
    }
}

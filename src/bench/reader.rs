//! Line reader for bench files.

use std::path::Path;

use super::ParseConfig;
use crate::error::{BenchError, Result};

/// A non-empty source line with its original line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// Line number (1-indexed)
    pub number: usize,
    /// Line text without the trailing newline
    pub text: String,
}

/// Split text into non-empty lines, dropping comments if enabled.
pub fn lines_from_str(input: &str, config: &ParseConfig) -> Vec<SourceLine> {
    input
        .lines()
        .enumerate()
        .filter(|(_, text)| {
            let trimmed = text.trim();
            !trimmed.is_empty() && !(config.allow_comments && trimmed.starts_with('#'))
        })
        .map(|(idx, text)| SourceLine {
            number: idx + 1,
            text: text.to_string(),
        })
        .collect()
}

/// Read a bench file into non-empty lines.
pub fn read_lines(path: &Path, config: &ParseConfig) -> Result<Vec<SourceLine>> {
    let content = std::fs::read_to_string(path).map_err(|e| BenchError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    let lines = lines_from_str(&content, config);
    tracing::debug!(path = %path.display(), lines = lines.len(), "read bench file");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_blank_lines_and_keeps_numbers() {
        let lines = lines_from_str("INPUT(a)\n\n   \nOUTPUT(c)\r\n", &ParseConfig::default());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].number, 1);
        assert_eq!(lines[1].number, 4);
        assert_eq!(lines[1].text, "OUTPUT(c)");
    }

    #[test]
    fn test_comment_handling() {
        let input = "# c17\nINPUT(a)\n  # note\n";
        assert_eq!(lines_from_str(input, &ParseConfig::default()).len(), 1);

        let config = ParseConfig::new().with_comments(false);
        assert_eq!(lines_from_str(input, &config).len(), 3);
    }

    #[test]
    fn test_missing_file() {
        let err = read_lines(Path::new("/nonexistent/c17.bench"), &ParseConfig::default())
            .unwrap_err();
        assert!(matches!(err, BenchError::FileReadError { .. }));
    }
}

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Wordlist writer - one candidate per line. Entries containing whitespace
/// are skipped instead of written broken.
pub struct WordlistWriter;

impl WordlistWriter {
    /// Write the wordlist to `path` and return the number of lines written.
    pub fn save(path: impl AsRef<Path>, wordlist: &[String]) -> Result<usize> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create wordlist file {}", path.display()))?;
        let mut writer = BufWriter::new(file);

        let mut written = 0;
        for word in wordlist {
            if word.chars().any(char::is_whitespace) {
                continue;
            }
            writeln!(writer, "{}", word).context("Failed to write wordlist entry")?;
            written += 1;
        }

        writer.flush().context("Failed to flush wordlist buffer")?;

        info!("Saved {} passwords to {}", written, path.display());
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_writes_one_word_per_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wordlist.txt");

        let words = vec!["abc".to_string(), "defg".to_string()];
        let written = WordlistWriter::save(&path, &words).unwrap();

        assert_eq!(written, 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "abc\ndefg\n");
    }

    #[test]
    fn test_whitespace_entries_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wordlist.txt");

        let words = vec!["ok".to_string(), "has space".to_string()];
        let written = WordlistWriter::save(&path, &words).unwrap();

        assert_eq!(written, 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ok\n");
    }

    #[test]
    fn test_empty_wordlist_creates_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wordlist.txt");

        let written = WordlistWriter::save(&path, &[]).unwrap();

        assert_eq!(written, 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}

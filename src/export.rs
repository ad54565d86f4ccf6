use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Download name for an article's summary: the URL itself, with characters
/// that filesystems reject replaced by underscores.
pub fn suggested_filename(url: &str) -> String {
    let sanitized: String = url
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '.' | '_' => c,
            _ => '_',
        })
        .collect();
    format!("{}.txt", sanitized)
}

/// Write the summary as a downloadable document named after the URL,
/// returning the path written.
pub fn write_summary(dir: &Path, url: &str, summary: &str) -> Result<PathBuf> {
    let path = dir.join(suggested_filename(url));
    fs::write(&path, summary)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_is_derived_from_the_url() {
        assert_eq!(
            suggested_filename("https://a.test/article?id=1"),
            "https___a.test_article_id_1.txt"
        );
    }

    #[test]
    fn summary_is_written_under_the_derived_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_summary(dir.path(), "http://a.test", "the summary").unwrap();

        assert_eq!(path.file_name().unwrap(), "http___a.test.txt");
        assert_eq!(fs::read_to_string(path).unwrap(), "the summary");
    }
}

use std::{fs, path::Path};

use tracing::debug;

use super::error::InfraError;

/// Read a Markdown document from disk.
pub fn read_document(path: &Path) -> Result<String, InfraError> {
    let markdown =
        fs::read_to_string(path).map_err(|err| InfraError::read_document(path, err))?;
    debug!(path = %path.display(), bytes = markdown.len(), "read document");
    Ok(markdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_existing_document() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "## Hello").expect("write");

        let markdown = read_document(file.path()).expect("read");
        assert_eq!(markdown, "## Hello\n");
    }

    #[test]
    fn missing_document_reports_path() {
        let err = read_document(Path::new("/definitely/not/here.md")).expect_err("missing");
        assert!(err.to_string().contains("/definitely/not/here.md"));
    }
}
